use crate::domain::{Money, Transaction};

pub const STATEMENT_WIDTH: usize = 50;
const TITLE: &str = "BANK STATEMENT";
const EMPTY_HISTORY: &str = "No transactions recorded.";

/// Read-only view over an account, rendered as a fixed-width report.
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    history: &'a [Transaction],
    balance: Money,
    withdrawals_made: u32,
    daily_withdrawals: u32,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(
        history: &'a [Transaction],
        balance: Money,
        withdrawals_made: u32,
        daily_withdrawals: u32,
    ) -> Self {
        Self {
            history,
            balance,
            withdrawals_made,
            daily_withdrawals,
        }
    }
}

impl core::fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rule = "=".repeat(STATEMENT_WIDTH);

        writeln!(f, "{rule}")?;
        // centred, without trailing padding
        writeln!(f, "{TITLE:>width$}", width = (STATEMENT_WIDTH + TITLE.len()) / 2)?;
        writeln!(f, "{rule}")?;

        if self.history.is_empty() {
            writeln!(f, "{EMPTY_HISTORY}")?;
        } else {
            for transaction in self.history {
                writeln!(f, "{transaction}")?;
            }
        }

        writeln!(f, "{rule}")?;
        writeln!(f, "CURRENT BALANCE: $ {:>10}", self.balance)?;
        writeln!(
            f,
            "WITHDRAWALS TODAY: {}/{}",
            self.withdrawals_made, self.daily_withdrawals
        )?;
        writeln!(f, "{rule}")
    }
}
