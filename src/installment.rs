use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};

/// fixed monthly installment for an approved loan
///
/// Grows the principal by the full annual rate over the tenure expressed in
/// years, then divides evenly across the months:
/// `principal * (1 + r/100)^(tenure/12) / tenure`. Tenures that are not a
/// multiple of twelve use the fractional-year exponent as written. Full
/// precision is kept internally; callers round to 2 dp for presentation.
pub fn monthly_installment(principal: Money, annual_rate: Rate, tenure_months: u32) -> Money {
    if tenure_months == 0 {
        return Money::ZERO;
    }

    let years = Decimal::from(tenure_months) / dec!(12);
    let grown = principal.as_decimal() * annual_rate.growth_factor().powd(years);
    Money::from_decimal(grown / Decimal::from(tenure_months))
}
