use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// Money type with 4 decimal places of internal precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(4))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(4)))
    }

    /// create from integer amount in major units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// round to the nearest multiple of `unit` (banker's rounding on the multiple)
    pub fn round_to_multiple(&self, unit: Decimal) -> Self {
        Money((self.0 / unit).round() * unit)
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i64> for Money {
    fn from(i: i64) -> Self {
        Money::from_major(i)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(4))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(4);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(4))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(4);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(4))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(4))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

/// annual interest rate expressed in percent (12.5 means 12.5% p.a.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from a percent figure (e.g., dec!(12.5) for 12.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p)
    }

    /// create from a whole percent figure
    pub fn from_percent_u32(p: u32) -> Self {
        Rate(Decimal::from(p))
    }

    /// percent figure
    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// fraction form (0.125 for 12.5%)
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::from(100)
    }

    /// annual growth factor, 1 + r
    pub fn growth_factor(&self) -> Decimal {
        Decimal::ONE + self.as_fraction()
    }

    /// larger of two rates
    pub fn max(self, other: Self) -> Self {
        Rate(self.0.max(other.0))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_percent(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        // banker's rounding at the 4th place, consistent with round_to_multiple
        let m = Money::from_str_exact("100.12345").unwrap();
        assert_eq!(m.to_string(), "100.1234");
        let m = Money::from_str_exact("100.12335").unwrap();
        assert_eq!(m.to_string(), "100.1234");
        let m = Money::from_str_exact("100.12346").unwrap();
        assert_eq!(m.to_string(), "100.1235");
    }

    #[test]
    fn test_money_predicates_and_ordering() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::from_major(1).is_positive());

        let small = Money::from_major(10);
        let large = Money::from_major(25);
        assert_eq!(small.min(large), small);
        assert_eq!(small.max(large), large);
    }

    #[test]
    fn test_round_to_multiple() {
        let lakh = dec!(100_000);
        assert_eq!(
            Money::from_major(7_234_000).round_to_multiple(lakh),
            Money::from_major(7_200_000)
        );
        assert_eq!(
            Money::from_major(7_260_000).round_to_multiple(lakh),
            Money::from_major(7_300_000)
        );
        // banker's rounding at the midpoint
        assert_eq!(
            Money::from_major(7_250_000).round_to_multiple(lakh),
            Money::from_major(7_200_000)
        );
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_major(10), Money::from_major(25)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(35));
    }

    #[test]
    fn test_rate_forms() {
        let r = Rate::from_percent(dec!(12.5));
        assert_eq!(r.as_fraction(), dec!(0.125));
        assert_eq!(r.growth_factor(), dec!(1.125));
        assert_eq!(r.to_string(), "12.5%");
    }

    #[test]
    fn test_rate_floor_correction() {
        let requested = Rate::from_percent_u32(10);
        let floor = Rate::from_percent_u32(12);
        assert_eq!(requested.max(floor), floor);
        assert_eq!(
            Rate::from_percent_u32(14).max(floor),
            Rate::from_percent_u32(14)
        );
    }
}
