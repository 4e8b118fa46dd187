use crate::domain::statement::Statement;
use crate::domain::traits::{Clock, SystemClock, Teller};
use crate::domain::{Error, Money, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    pub per_withdrawal: Money, // largest single withdrawal
    pub daily_withdrawals: u32, // withdrawals allowed per session
}

impl AccountLimits {
    pub const DEFAULT_PER_WITHDRAWAL_CENTS: i64 = 50_000;
    pub const DEFAULT_DAILY_WITHDRAWALS: u32 = 3;
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            per_withdrawal: Money::from_cents(Self::DEFAULT_PER_WITHDRAWAL_CENTS),
            daily_withdrawals: Self::DEFAULT_DAILY_WITHDRAWALS,
        }
    }
}

/// Result of an accepted deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub kind: TransactionKind,
    pub amount: Money,
    pub balance: Money,
}

impl core::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} of $ {} completed successfully!",
            self.kind.noun(),
            self.amount
        )
    }
}

/// Single in-memory account.
///
/// Every mutation goes through [`Account::deposit`] or [`Account::withdraw`],
/// which validate completely before touching any field, so a rejected
/// operation leaves the account exactly as it was.
///
/// The withdrawal counter never resets on its own; it lives as long as the
/// account does.
#[derive(Debug)]
pub struct Account<C: Clock = SystemClock> {
    balance: Money,
    limits: AccountLimits,
    withdrawals_made: u32,
    history: Vec<Transaction>,
    clock: C,
}

impl Account {
    pub fn new(limits: AccountLimits) -> Self {
        Self::with_clock(limits, SystemClock)
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(limits: AccountLimits, clock: C) -> Self {
        Self {
            balance: Money::ZERO,
            limits,
            withdrawals_made: 0,
            history: Vec::new(),
            clock,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn limits(&self) -> AccountLimits {
        self.limits
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }

    pub fn withdrawals_remaining(&self) -> u32 {
        self.limits
            .daily_withdrawals
            .saturating_sub(self.withdrawals_made)
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn deposit<A>(&mut self, amount: A) -> Result<Confirmation, Error>
    where
        A: TryInto<Money, Error = Error>,
    {
        let amount = amount.try_into()?;
        if !amount.is_positive() {
            return Err(Error::InvalidAmount);
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow {
                balance: self.balance,
            })?;

        Ok(self.record(TransactionKind::Deposit, amount, balance))
    }

    /// Checks run in a fixed order and the first failure is reported: sign,
    /// daily count, per-withdrawal limit, then balance.
    pub fn withdraw<A>(&mut self, amount: A) -> Result<Confirmation, Error>
    where
        A: TryInto<Money, Error = Error>,
    {
        let amount = amount.try_into()?;
        if !amount.is_positive() {
            return Err(Error::InvalidAmount);
        }

        if self.withdrawals_made >= self.limits.daily_withdrawals {
            return Err(Error::DailyLimitExceeded {
                limit: self.limits.daily_withdrawals,
            });
        }

        if amount > self.limits.per_withdrawal {
            return Err(Error::PerTransactionLimitExceeded {
                limit: self.limits.per_withdrawal,
            });
        }

        let insufficient = Error::InsufficientFunds {
            balance: self.balance,
        };
        if amount > self.balance {
            return Err(insufficient);
        }
        let balance = self.balance.checked_sub(amount).ok_or(insufficient)?;

        self.withdrawals_made += 1;
        Ok(self.record(TransactionKind::Withdrawal, amount, balance))
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement::new(
            &self.history,
            self.balance,
            self.withdrawals_made,
            self.limits.daily_withdrawals,
        )
    }

    fn record(&mut self, kind: TransactionKind, amount: Money, balance: Money) -> Confirmation {
        self.balance = balance;
        self.history
            .push(Transaction::new(self.clock.now(), kind, amount));

        tracing::info!(kind = kind.label(), %amount, %balance, "transaction recorded");

        Confirmation {
            kind,
            amount,
            balance,
        }
    }
}

impl<C: Clock> Teller for Account<C> {
    fn deposit(&mut self, amount: &str) -> Result<Confirmation, Error> {
        Account::deposit(self, amount).inspect_err(|e| {
            tracing::warn!(error = %e, "deposit rejected");
        })
    }

    fn withdraw(&mut self, amount: &str) -> Result<Confirmation, Error> {
        Account::withdraw(self, amount).inspect_err(|e| {
            tracing::warn!(error = %e, "withdrawal rejected");
        })
    }

    fn statement(&self) -> String {
        Account::statement(self).to_string()
    }

    fn withdrawal_limit(&self) -> Money {
        self.limits.per_withdrawal
    }

    fn withdrawals_remaining(&self) -> u32 {
        Account::withdrawals_remaining(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[derive(Debug, Clone, Copy)]
    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn fixed_account(limits: AccountLimits) -> Account<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Account::with_clock(limits, FixedClock(at))
    }

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn new_account_is_empty() {
        let account = Account::new(AccountLimits::default());
        assert_eq!(account.balance(), Money::ZERO);
        assert_eq!(account.withdrawals_made(), 0);
        assert_eq!(account.withdrawals_remaining(), 3);
        assert_eq!(account.limits().per_withdrawal, money("500"));
        assert!(account.history().is_empty());
    }

    #[test]
    fn deposit_increases_balance_and_records_history() {
        let mut account = fixed_account(AccountLimits::default());
        let confirmation = account.deposit("100.00").unwrap();

        assert_eq!(confirmation.kind, TransactionKind::Deposit);
        assert_eq!(confirmation.amount, money("100"));
        assert_eq!(confirmation.balance, money("100"));
        assert_eq!(account.balance(), money("100"));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind(), TransactionKind::Deposit);
        assert!(confirmation.to_string().contains("100.00"));
    }

    #[test]
    fn deposit_rejects_bad_format_before_sign() {
        let mut account = Account::new(AccountLimits::default());
        assert!(matches!(account.deposit("-5"), Err(Error::InvalidFormat(_))));
        assert!(matches!(account.deposit("abc"), Err(Error::InvalidFormat(_))));
        assert!(matches!(account.deposit(""), Err(Error::InvalidFormat(_))));
        assert!(account.history().is_empty());
    }

    #[test]
    fn deposit_rejects_zero() {
        let mut account = Account::new(AccountLimits::default());
        assert!(matches!(account.deposit("0"), Err(Error::InvalidAmount)));
        assert!(matches!(account.deposit("0,00"), Err(Error::InvalidAmount)));
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn numeric_amounts_are_accepted() {
        let mut account = Account::new(AccountLimits::default());
        account.deposit(Decimal::new(2_550, 2)).unwrap();
        assert_eq!(account.balance(), money("25.50"));

        assert!(matches!(
            account.deposit(Decimal::new(-1, 0)),
            Err(Error::InvalidAmount)
        ));
        assert!(matches!(
            account.withdraw(Decimal::new(1_001, 3)),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn deposit_that_cannot_keep_cents_overflows_without_side_effects() {
        let mut account = fixed_account(AccountLimits::default());
        account.deposit("500000000000000000000000000").unwrap();
        let before = account.statement().to_string();

        let err = account.deposit("500000000000000000000000000.01").unwrap_err();
        assert!(matches!(err, Error::BalanceOverflow { balance } if balance == money("500000000000000000000000000")));
        assert_eq!(account.balance(), money("500000000000000000000000000"));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.statement().to_string(), before);
        assert!(before.contains("500000000000000000000000000.00"));
    }

    #[test]
    fn deposit_too_large_for_cents_is_a_format_error() {
        let mut account = Account::new(AccountLimits::default());
        assert!(matches!(
            account.deposit("9999999999999999999999999999"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(account.history().is_empty());
    }

    #[test]
    fn withdrawal_scenario_with_default_limits() {
        let mut account = Account::new(AccountLimits::default());

        account.deposit("100.00").unwrap();
        assert_eq!(account.balance(), money("100.00"));

        let err = account.withdraw("600").unwrap_err();
        assert!(matches!(err, Error::PerTransactionLimitExceeded { limit } if limit == money("500")));
        assert!(err.to_string().contains("500.00"));

        account.withdraw("100.00").unwrap();
        assert_eq!(account.balance(), money("0.00"));

        let err = account.withdraw("0.01").unwrap_err();
        assert!(matches!(err, Error::InsufficientFunds { balance } if balance == Money::ZERO));
        assert!(err.to_string().contains("0.00"));
    }

    #[test]
    fn fourth_withdrawal_hits_daily_limit() {
        let mut account = Account::new(AccountLimits::default());
        account.deposit("50").unwrap();

        for _ in 0..3 {
            account.withdraw("1.00").unwrap();
        }
        assert_eq!(account.withdrawals_remaining(), 0);

        let err = account.withdraw("1.00").unwrap_err();
        assert!(matches!(err, Error::DailyLimitExceeded { limit: 3 }));
        assert_eq!(account.balance(), money("47"));
        assert_eq!(account.withdrawals_made(), 3);
    }

    #[test]
    fn daily_limit_is_checked_before_amount_and_balance() {
        let mut account = Account::new(AccountLimits::default());
        account.deposit("3").unwrap();
        for _ in 0..3 {
            account.withdraw("1").unwrap();
        }

        // over the per-withdrawal limit and the balance, but the count wins
        assert!(matches!(
            account.withdraw("9999"),
            Err(Error::DailyLimitExceeded { .. })
        ));
        // sign still comes first
        assert!(matches!(account.withdraw("0"), Err(Error::InvalidAmount)));
    }

    #[test]
    fn per_withdrawal_limit_is_checked_before_balance() {
        let mut account = Account::new(AccountLimits::default());
        assert!(matches!(
            account.withdraw("500.01"),
            Err(Error::PerTransactionLimitExceeded { .. })
        ));
        assert!(matches!(
            account.withdraw("500.00"),
            Err(Error::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn rejected_withdrawals_do_not_count() {
        let mut account = Account::new(AccountLimits::default());
        account.deposit("10").unwrap();
        for _ in 0..5 {
            assert!(account.withdraw("20").is_err());
        }
        assert_eq!(account.withdrawals_made(), 0);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn custom_limits_are_enforced() {
        let limits = AccountLimits {
            per_withdrawal: money("50"),
            daily_withdrawals: 1,
        };
        let mut account = Account::new(limits);
        account.deposit("200").unwrap();

        assert!(matches!(
            account.withdraw("50.01"),
            Err(Error::PerTransactionLimitExceeded { .. })
        ));
        account.withdraw("50").unwrap();
        assert!(matches!(
            account.withdraw("1"),
            Err(Error::DailyLimitExceeded { limit: 1 })
        ));
    }

    #[test]
    fn zero_daily_limit_blocks_all_withdrawals() {
        let limits = AccountLimits {
            daily_withdrawals: 0,
            ..AccountLimits::default()
        };
        let mut account = Account::new(limits);
        account.deposit("10").unwrap();
        assert!(matches!(
            account.withdraw("1"),
            Err(Error::DailyLimitExceeded { limit: 0 })
        ));
    }

    #[test]
    fn history_keeps_insertion_order() {
        let mut account = fixed_account(AccountLimits::default());
        account.deposit("10").unwrap();
        account.withdraw("2,50").unwrap();
        account.deposit("1").unwrap();

        let kinds: Vec<_> = account.history().iter().map(|t| t.kind()).collect();
        let amounts: Vec<_> = account.history().iter().map(|t| t.amount()).collect();
        assert_eq!(
            kinds,
            [
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit
            ]
        );
        assert_eq!(amounts, [money("10"), money("2.50"), money("1")]);
    }

    #[test]
    fn teller_reports_limits() {
        let mut account = Account::new(AccountLimits::default());
        Teller::deposit(&mut account, "5").unwrap();
        Teller::withdraw(&mut account, "1").unwrap();
        assert_eq!(Teller::withdrawal_limit(&account), money("500"));
        assert_eq!(Teller::withdrawals_remaining(&account), 2);
        assert!(Teller::statement(&account).contains("WITHDRAWALS TODAY: 1/3"));
    }

    fn cents_to_input(cents: u64) -> String {
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    proptest! {
        #[test]
        fn balance_is_the_sum_of_deposits(deposits in prop::collection::vec(1u64..10_000_000, 0..30)) {
            let mut account = Account::new(AccountLimits::default());
            for cents in &deposits {
                account.deposit(cents_to_input(*cents).as_str()).unwrap();
            }
            let total: u64 = deposits.iter().sum();
            prop_assert_eq!(account.balance(), Money::from_cents(total as i64));
        }

        #[test]
        fn withdrawals_never_overdraw(
            deposit in 0u64..100_000,
            attempts in prop::collection::vec(1u64..60_000, 0..10),
        ) {
            let mut account = Account::new(AccountLimits::default());
            if deposit > 0 {
                account.deposit(cents_to_input(deposit).as_str()).unwrap();
            }
            for cents in attempts {
                let before = account.balance();
                let amount = Money::from_cents(cents as i64);
                if account.withdraw(cents_to_input(cents).as_str()).is_ok() {
                    prop_assert!(amount <= before);
                }
                prop_assert!(account.balance() >= Money::ZERO);
                prop_assert!(account.withdrawals_made() <= account.limits().daily_withdrawals);
            }
        }
    }
}
