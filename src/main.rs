use std::io;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::BufReader;

use bank_simulator::config::Cli;
use bank_simulator::domain::{Account, LineSource};
use bank_simulator::input::LineReader;
use bank_simulator::shell::{Shell, flush_or_warn};

#[tokio::main] // stdin and Ctrl-C are awaited side by side
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let limits = cli.limits();
    tracing::info!(
        per_withdrawal = %limits.per_withdrawal,
        daily_withdrawals = limits.daily_withdrawals,
        "opening account"
    );

    let mut input = LineReader::new(BufReader::new(tokio::io::stdin()));
    let mut shell = Shell::new(Account::new(limits), input.lines(), io::stdout());

    tokio::select! {
        result = shell.run() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "session aborted");
                eprintln!("❌ Critical system error: {e}");
                eprintln!("💡 Try restarting the program.");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n\n👋 Operation cancelled by user. Goodbye!");
            flush_or_warn(&mut io::stdout());
            // the stdin reader may still be blocked on a read the runtime would wait for
            std::process::exit(0);
        }
    }

    ExitCode::SUCCESS
}
