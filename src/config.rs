use clap::{ArgAction, Parser};
use tracing::Level;

use crate::domain::{AccountLimits, Money};

/// Interactive single-account bank simulator.
#[derive(Debug, Parser)]
#[command(name = "bank_simulator", version)]
pub struct Cli {
    /// Largest amount allowed in a single withdrawal
    #[arg(long, value_name = "AMOUNT", default_value_t = AccountLimits::default().per_withdrawal, value_parser = parse_withdrawal_limit)]
    pub withdrawal_limit: Money,

    /// Number of withdrawals allowed for the session
    #[arg(long, value_name = "N", default_value_t = AccountLimits::DEFAULT_DAILY_WITHDRAWALS)]
    pub daily_withdrawals: u32,

    /// Log more to stderr (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn limits(&self) -> AccountLimits {
        AccountLimits {
            per_withdrawal: self.withdrawal_limit,
            daily_withdrawals: self.daily_withdrawals,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn parse_withdrawal_limit(s: &str) -> Result<Money, String> {
    let limit = Money::parse(s).map_err(|e| e.to_string())?;
    if !limit.is_positive() {
        return Err("the withdrawal limit must be positive".to_string());
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_account_defaults() {
        let cli = Cli::try_parse_from(["bank_simulator"]).unwrap();
        assert_eq!(cli.limits(), AccountLimits::default());
        assert_eq!(cli.log_level(), Level::ERROR);
    }

    #[test]
    fn limits_can_be_injected() {
        let cli = Cli::try_parse_from([
            "bank_simulator",
            "--withdrawal-limit",
            "250,5",
            "--daily-withdrawals",
            "5",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.limits().per_withdrawal, Money::from_cents(25_050));
        assert_eq!(cli.limits().daily_withdrawals, 5);
        assert_eq!(cli.log_level(), Level::INFO);
    }

    #[test]
    fn rejects_bad_withdrawal_limits() {
        for bad in ["0", "abc", "-10", "1.234"] {
            assert!(
                Cli::try_parse_from(["bank_simulator", "--withdrawal-limit", bad]).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn help_shows_the_account_default_limit() {
        use clap::CommandFactory;
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("[default: 500.00]"), "{help}");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
