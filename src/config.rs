use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// underwriting policy constants
///
/// Every threshold the scorer and the evaluator branch on lives here so a
/// deployment can tune policy without touching decision code. `Default` is
/// the production rule book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderwritingPolicy {
    /// baseline score for a customer with no loan history
    pub new_customer_score: u8,
    /// weight of the on-time repayment ratio
    pub on_time_weight: Decimal,
    /// flat bonus when total loan count is at most `low_count_max`
    pub low_count_bonus: Decimal,
    pub low_count_max: usize,
    /// flat bonus when total loan count is at most `mid_count_max`
    pub mid_count_bonus: Decimal,
    pub mid_count_max: usize,
    /// per-loan bonus for loans started in the current calendar year
    pub activity_weight: Decimal,
    /// cap on the current-year activity component
    pub activity_cap: Decimal,
    /// flat bonus when lifetime principal stays within the approved limit
    pub within_limit_bonus: Decimal,
    /// reduced bonus when lifetime principal stays within twice the limit
    pub twice_limit_bonus: Decimal,

    /// score above which a loan is approved at the requested rate
    pub prime_score: u8,
    /// score above which the mid tier applies, with its rate floor
    pub mid_tier_score: u8,
    pub mid_tier_floor: Rate,
    /// score above which the subprime tier applies, with its rate floor
    pub subprime_score: u8,
    pub subprime_floor: Rate,
    /// maximum share of monthly income current EMIs may consume
    pub max_emi_income_ratio: Decimal,

    /// approved limit = income x multiple, rounded to `limit_rounding_unit`
    pub limit_income_multiple: Decimal,
    pub limit_rounding_unit: Decimal,
}

impl Default for UnderwritingPolicy {
    fn default() -> Self {
        Self {
            new_customer_score: 50,
            on_time_weight: dec!(20),
            low_count_bonus: dec!(20),
            low_count_max: 2,
            mid_count_bonus: dec!(10),
            mid_count_max: 5,
            activity_weight: dec!(5),
            activity_cap: dec!(20),
            within_limit_bonus: dec!(20),
            twice_limit_bonus: dec!(10),

            prime_score: 50,
            mid_tier_score: 30,
            mid_tier_floor: Rate::from_percent_u32(12),
            subprime_score: 10,
            subprime_floor: Rate::from_percent_u32(16),
            max_emi_income_ratio: dec!(0.5),

            limit_income_multiple: dec!(36),
            limit_rounding_unit: dec!(100_000),
        }
    }
}
