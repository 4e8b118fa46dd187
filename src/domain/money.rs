use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

/// Exact monetary value, always held at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const SCALE: u32 = 2;
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Builds a value from minor units (cents).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, Self::SCALE))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// `None` when the result can't be held exactly to the cent, including
    /// when `Decimal` would round the fraction away to make it fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).and_then(Self::at_scale)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).and_then(Self::at_scale)
    }

    /// Parses user-typed text.
    ///
    /// Surrounding whitespace is ignored and a comma is accepted as the decimal
    /// separator. Anything other than `digits[.d[d]]` is rejected, including
    /// signs, thousands separators and exponents.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        let normalized = trimmed.replace(',', ".");
        if !is_plain_amount(&normalized) {
            return Err(Error::InvalidFormat(trimmed.to_owned()));
        }

        // the digit count can still exceed what a Decimal holds at two places
        Decimal::from_str_exact(&normalized)
            .ok()
            .and_then(Self::at_scale)
            .ok_or_else(|| Error::InvalidFormat(trimmed.to_owned()))
    }

    /// `rescale` settles for a smaller scale when the value is too large to
    /// carry cents; those values are rejected.
    fn at_scale(mut value: Decimal) -> Option<Self> {
        value.rescale(Self::SCALE);
        (value.scale() == Self::SCALE).then_some(Self(value))
    }
}

fn is_plain_amount(s: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match s.split_once('.') {
        Some((int_part, frac_part)) => {
            all_digits(int_part) && all_digits(frac_part) && frac_part.len() <= 2
        }
        None => all_digits(s),
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl TryFrom<&str> for Money {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Money::parse(value)
    }
}

/// Numeric input skips the textual pattern but still has to be exact to the
/// cent. Sign is left for the caller's positivity check.
impl TryFrom<Decimal> for Money {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.normalize().scale() > Self::SCALE {
            return Err(Error::InvalidFormat(value.to_string()));
        }
        Self::at_scale(value).ok_or_else(|| Error::InvalidFormat(value.to_string()))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut value = self.0;
        value.rescale(Self::SCALE);
        // pad so callers can right-align columns with `{:>10}`
        f.pad(&value.to_string())
    }
}
