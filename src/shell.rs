use std::io::Write;

use futures::{Stream, StreamExt};

use crate::command::Command;
use crate::domain::{Confirmation, Error, Teller};

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Text menu driving a [`Teller`].
///
/// Reads from a line stream and writes to any `Write` sink so the whole
/// session can be replayed in tests.
#[derive(Debug)]
pub struct Shell<T, L, W>
where
    T: Teller,
    L: Stream<Item = Result<String, Error>> + Unpin,
    W: Write,
{
    teller: T,
    lines: L,
    out: W,
}

impl<T, L, W> Shell<T, L, W>
where
    T: Teller,
    L: Stream<Item = Result<String, Error>> + Unpin,
    W: Write,
{
    pub fn new(teller: T, lines: L, out: W) -> Self {
        Self { teller, lines, out }
    }

    pub fn teller(&self) -> &T {
        &self.teller
    }

    /// Runs until the user quits or input ends.
    ///
    /// Rejected operations are reported and the menu comes back. Only a broken
    /// input or output stream ends the session with an error.
    pub async fn run(&mut self) -> Result<(), Error> {
        writeln!(self.out, "=== WELCOME TO THE BANKING SYSTEM ===\n")?;

        loop {
            self.print_menu()?;

            let Some(line) = self.next_line().await? else {
                tracing::debug!("input closed");
                self.farewell()?;
                return Ok(());
            };

            let Some(command) = Command::parse(&line) else {
                writeln!(
                    self.out,
                    "❌ Invalid option! Please choose a valid option.\n"
                )?;
                continue;
            };

            tracing::debug!(?command, "dispatching");
            if self.dispatch(command).await? == Flow::Exit {
                return Ok(());
            }
        }
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow, Error> {
        match command {
            Command::Deposit => self.deposit().await,
            Command::Withdraw => self.withdraw().await,
            Command::Statement => self.statement(),
            Command::Quit => self.quit(),
        }
    }

    async fn deposit(&mut self) -> Result<Flow, Error> {
        writeln!(self.out, "\n💰 === DEPOSIT ===")?;

        let Some(amount) = self
            .prompt_amount("💵 Enter the amount to deposit (or Enter to cancel): ")
            .await?
        else {
            return Ok(Flow::Continue);
        };

        let result = self.teller.deposit(&amount);
        self.report(result)
    }

    async fn withdraw(&mut self) -> Result<Flow, Error> {
        writeln!(self.out, "\n💸 === WITHDRAWAL ===")?;
        writeln!(
            self.out,
            "💡 Limit per withdrawal: $ {}",
            self.teller.withdrawal_limit()
        )?;
        writeln!(
            self.out,
            "💡 Withdrawals left today: {}",
            self.teller.withdrawals_remaining()
        )?;

        let Some(amount) = self
            .prompt_amount("💵 Enter the amount to withdraw (or Enter to cancel): ")
            .await?
        else {
            return Ok(Flow::Continue);
        };

        let result = self.teller.withdraw(&amount);
        self.report(result)
    }

    fn statement(&mut self) -> Result<Flow, Error> {
        writeln!(self.out, "\n{}", self.teller.statement())?;
        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> Result<Flow, Error> {
        self.farewell()?;
        Ok(Flow::Exit)
    }

    fn farewell(&mut self) -> Result<(), Error> {
        writeln!(self.out, "\n👋 Thank you for using our banking system!")?;
        writeln!(self.out, "🔒 Session closed securely.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "           MAIN MENU")?;
        writeln!(self.out, "{rule}")?;
        for command in Command::MENU {
            writeln!(self.out, "{command}")?;
        }
        writeln!(self.out, "{rule}")?;
        write!(self.out, "👉 Choose an option: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// `None` when the user cancels with an empty line or input ends.
    async fn prompt_amount(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        match self.next_line().await? {
            Some(amount) if !amount.is_empty() => Ok(Some(amount)),
            _ => {
                writeln!(self.out, "❌ Operation cancelled.\n")?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, result: Result<Confirmation, Error>) -> Result<Flow, Error> {
        match result {
            Ok(confirmation) => writeln!(self.out, "✅ {confirmation}\n")?,
            Err(e) => writeln!(self.out, "❌ Error: {e}\n")?,
        }
        Ok(Flow::Continue)
    }

    async fn next_line(&mut self) -> Result<Option<String>, Error> {
        self.lines.next().await.transpose()
    }
}

/// Flushes before an abrupt exit; a failure is only logged since the process
/// is leaving anyway.
pub fn flush_or_warn<W: Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "could not flush output");
            false
        }
    }
}
