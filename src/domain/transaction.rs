use chrono::NaiveDateTime;

use crate::domain::Money;

/// Timestamp layout used by the statement.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

/// A single entry of the account history. Fields are private so a recorded
/// entry can't be edited after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    timestamp: NaiveDateTime,
    kind: TransactionKind,
    amount: Money,
}

impl Transaction {
    pub(crate) fn new(timestamp: NaiveDateTime, kind: TransactionKind, amount: Money) -> Self {
        Self {
            timestamp,
            kind,
            amount,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} | {:>10} | $ {:>10}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind.label(),
            self.amount
        )
    }
}
