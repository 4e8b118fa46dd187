pub mod account;
pub mod error;
pub mod money;
pub mod statement;
pub mod traits;
pub mod transaction;

pub use account::{Account, AccountLimits, Confirmation};
pub use error::Error;
pub use money::Money;
pub use statement::Statement;
pub use traits::{Clock, LineSource, SystemClock, Teller};
pub use transaction::{Transaction, TransactionKind};
