use crate::error::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A signed monetary value.
///
/// Wraps `rust_decimal::Decimal` so order totals, sums of payments and
/// balances cannot be confused with plain numbers. A `Money` may be negative:
/// the balance of an overpaid order is below zero.
///
/// Serialized as a decimal string and parsed from one, never through `f64`.
/// Arithmetic is checked: sums that leave the `Decimal` range yield `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

/// A strictly positive monetary amount carried by a payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::Validation(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Money> for Amount {
    type Error = LedgerError;

    fn try_from(value: Money) -> Result<Self, Self::Error> {
        Self::new(value.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Money {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Sums the values, or `None` if the total overflows.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .try_fold(Money::ZERO, |acc, value| acc.checked_add(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(10.0));
        let b = Money::new(dec!(5.0));
        assert_eq!(a.checked_add(b), Some(Money::new(dec!(15.0))));
        assert_eq!(a.checked_sub(b), Some(Money::new(dec!(5.0))));
        assert_eq!(b.checked_sub(a), Some(Money::new(dec!(-5.0))));
        assert_eq!(-a, Money::new(dec!(-10.0)));
    }

    #[test]
    fn test_money_overflow_is_reported() {
        let big = Money::new(dec!(40000000000000000000000000000));
        assert_eq!(big.checked_add(big), None);
        assert_eq!((-big).checked_sub(big), None);
        assert_eq!(Money::checked_sum([big, big]), None);
    }

    #[test]
    fn test_money_sum() {
        let total = Money::checked_sum([dec!(300), dec!(400), dec!(300)].map(Money::new));
        assert_eq!(total, Some(Money::new(dec!(1000))));
        assert_eq!(Money::checked_sum([]), Some(Money::ZERO));
    }

    #[test]
    fn test_money_keeps_every_digit_from_text() {
        // Through f64 this would collapse to 0.3.
        let money: Money = serde_json::from_str("\"0.30000000000000001\"").unwrap();
        assert_eq!(money, Money::new(dec!(0.30000000000000001)));
        assert_ne!(money, Money::new(dec!(0.3)));
        assert_eq!(
            serde_json::to_string(&money).unwrap(),
            "\"0.30000000000000001\""
        );
    }

    #[test]
    fn test_money_sign() {
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::new(dec!(-0.0)).is_negative());
    }

    #[test]
    fn test_money_display_strips_trailing_zeros() {
        assert_eq!(Money::new(dec!(1000.00)).to_string(), "1000");
        assert_eq!(Money::new(dec!(-200.50)).to_string(), "-200.5");
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn test_amount_rejects_non_positive_on_deserialize() {
        assert!(serde_json::from_str::<Amount>("\"12.5\"").is_ok());
        assert!(serde_json::from_str::<Amount>("\"0\"").is_err());
    }
}
