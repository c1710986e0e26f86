use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Source-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MoneyError {
    #[error("money.invalid_amount")]
    InvalidAmount,
    #[error("money.negative_amount")]
    NegativeAmount,
}

/// Non-negative exact decimal amount.
///
/// Arithmetic is carried out at full precision; rounding to cents only
/// happens when the amount is rendered with [`Money::to_fixed`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(BigDecimal);

impl Money {
    pub fn new(amount: BigDecimal) -> Result<Self, MoneyError> {
        if amount < BigDecimal::zero() {
            return Err(MoneyError::NegativeAmount);
        }
        Ok(Self(amount))
    }

    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Unit amount multiplied by a quantity.
    pub fn times(&self, quantity: u64) -> Money {
        Money(self.0.clone() * BigDecimal::from(quantity))
    }

    /// Renders the amount with exactly two decimals, rounding half up.
    pub fn to_fixed(&self) -> String {
        let rounded = self.0.with_scale_round(2, RoundingMode::HalfUp);
        let (digits, _scale) = rounded.as_bigint_and_exponent();
        let digits = digits.to_string();
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(unsigned) => ("-", unsigned),
            None => ("", digits.as_str()),
        };
        let padded = format!("{:0>3}", digits);
        let (units, cents) = padded.split_at(padded.len() - 2);
        format!("{}{}.{}", sign, units, cents)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fixed())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = BigDecimal::from_str(s.trim()).map_err(|_| MoneyError::InvalidAmount)?;
        Money::new(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, amount| acc + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn should_render_two_decimals() {
        assert_eq!(money("25.5").to_fixed(), "25.50");
        assert_eq!(money("10").to_fixed(), "10.00");
        assert_eq!(money("9.99").to_fixed(), "9.99");
    }

    #[test]
    fn should_render_small_and_zero_amounts() {
        assert_eq!(money("0.05").to_fixed(), "0.05");
        assert_eq!(Money::zero().to_fixed(), "0.00");
    }

    #[test]
    fn should_round_half_up_when_rendering() {
        assert_eq!(money("1.005").to_fixed(), "1.01");
        assert_eq!(money("1.004").to_fixed(), "1.00");
    }

    #[test]
    fn should_keep_full_precision_until_rendered() {
        let total: Money = vec![money("0.1"), money("0.2")].into_iter().sum();
        assert_eq!(total, money("0.3"));
    }

    #[test]
    fn should_multiply_by_quantity() {
        assert_eq!(money("5.50").times(3).to_fixed(), "16.50");
        assert_eq!(money("5.50").times(0), Money::zero());
    }

    #[test]
    fn should_reject_negative_amount() {
        assert_eq!("-1.00".parse::<Money>(), Err(MoneyError::NegativeAmount));
    }

    #[test]
    fn should_reject_garbage_amount() {
        assert_eq!("ten".parse::<Money>(), Err(MoneyError::InvalidAmount));
    }

    #[test]
    fn should_display_product_id() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(ProductId::from(7).value(), 7);
    }
}
