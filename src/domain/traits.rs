use chrono::{Local, NaiveDateTime};
use futures::Stream;

use crate::domain::{Confirmation, Error, Money};

/// Source of user input lines, already trimmed.
pub trait LineSource {
    type Lines: Stream<Item = Result<String, Error>> + Send + Unpin + 'static;
    fn lines(&mut self) -> Self::Lines;
}

/// Wall clock used to stamp transactions.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The operations the shell needs from an account.
pub trait Teller {
    fn deposit(&mut self, amount: &str) -> Result<Confirmation, Error>;
    fn withdraw(&mut self, amount: &str) -> Result<Confirmation, Error>;
    fn statement(&self) -> String;

    fn withdrawal_limit(&self) -> Money;
    fn withdrawals_remaining(&self) -> u32;
}
