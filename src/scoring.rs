use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::UnderwritingPolicy;
use crate::decimal::Money;
use crate::types::LoanRecord;

/// creditworthiness score in [0, 100] from a customer's loan history
///
/// Deterministic in the history content and the evaluation date; callers
/// supply `today` from an injected clock. An empty history scores the
/// new-customer baseline. Four weighted components are summed and clamped,
/// then the active-exposure override is applied: when the principal of
/// still-active loans exceeds the approved limit the score is forced to 0
/// no matter what the components say.
pub fn credit_score(
    loans: &[LoanRecord],
    approved_limit: Money,
    today: NaiveDate,
    policy: &UnderwritingPolicy,
) -> u8 {
    if loans.is_empty() {
        return policy.new_customer_score;
    }

    // on-time repayment ratio; a loan counts only when every EMI of its
    // tenure was paid on schedule, one short gets no partial credit
    let total = Decimal::from(loans.len());
    let on_time = Decimal::from(loans.iter().filter(|l| l.paid_on_time()).count());
    let mut score = policy.on_time_weight * on_time / total;

    // flat bonus by lifetime loan count
    score += if loans.len() <= policy.low_count_max {
        policy.low_count_bonus
    } else if loans.len() <= policy.mid_count_max {
        policy.mid_count_bonus
    } else {
        Decimal::ZERO
    };

    // capped bonus for loans started in the current calendar year
    let started_this_year = loans
        .iter()
        .filter(|l| l.start_date.year() == today.year())
        .count();
    score += (policy.activity_weight * Decimal::from(started_this_year)).min(policy.activity_cap);

    // lifetime principal against the approved limit
    let lifetime_principal: Money = loans.iter().map(|l| l.amount).sum();
    score += if lifetime_principal <= approved_limit {
        policy.within_limit_bonus
    } else if lifetime_principal.as_decimal() <= approved_limit.as_decimal() * dec!(2) {
        policy.twice_limit_bonus
    } else {
        Decimal::ZERO
    };

    // hard override, evaluated last
    let active_principal: Money = loans
        .iter()
        .filter(|l| l.is_active(today))
        .map(|l| l.amount)
        .sum();
    if active_principal > approved_limit {
        return 0;
    }

    score
        .clamp(Decimal::ZERO, dec!(100))
        .round()
        .to_u8()
        .unwrap_or(0)
}
