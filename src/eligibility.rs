use crate::config::UnderwritingPolicy;
use crate::decimal::{Money, Rate};
use crate::types::CustomerProfile;

/// approval decision with the tier-corrected rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateDecision {
    pub approved: bool,
    /// requested rate raised to the tier floor where one applies; an
    /// unapproved application keeps its requested rate
    pub effective_rate: Rate,
}

/// apply risk-tier policy to a scored application
///
/// The EMI-burden pre-check short-circuits the tiers: a customer whose
/// active installments already consume more than the policy share of
/// monthly income is rejected whatever the score. Mid and subprime tiers
/// approve only when the *requested* rate clears the tier floor; the
/// returned rate is floor-corrected upward either way, so a rejected
/// below-floor ask still reports the rate it would have needed.
pub fn evaluate(
    profile: &CustomerProfile,
    score: u8,
    requested_rate: Rate,
    current_emi_burden: Money,
    policy: &UnderwritingPolicy,
) -> RateDecision {
    let burden_cap = profile.monthly_income * policy.max_emi_income_ratio;
    if current_emi_burden > burden_cap {
        return RateDecision {
            approved: false,
            effective_rate: requested_rate,
        };
    }

    if score > policy.prime_score {
        RateDecision {
            approved: true,
            effective_rate: requested_rate,
        }
    } else if score > policy.mid_tier_score {
        RateDecision {
            approved: requested_rate > policy.mid_tier_floor,
            effective_rate: requested_rate.max(policy.mid_tier_floor),
        }
    } else if score > policy.subprime_score {
        RateDecision {
            approved: requested_rate > policy.subprime_floor,
            effective_rate: requested_rate.max(policy.subprime_floor),
        }
    } else {
        RateDecision {
            approved: false,
            effective_rate: requested_rate,
        }
    }
}
