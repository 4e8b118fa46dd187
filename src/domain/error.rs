use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid amount format '{0}': use digits only, with up to two decimal places.")]
    InvalidFormat(String),

    #[error("The amount must be positive.")]
    InvalidAmount,

    #[error("Daily limit of {limit} withdrawals exceeded.")]
    DailyLimitExceeded { limit: u32 },

    #[error("Amount exceeds the withdrawal limit of $ {limit}.")]
    PerTransactionLimitExceeded { limit: Money },

    #[error("Insufficient funds. Current balance: $ {balance}.")]
    InsufficientFunds { balance: Money },

    #[error("Deposit would overflow the current balance of $ {balance}.")]
    BalanceOverflow { balance: Money },
}
