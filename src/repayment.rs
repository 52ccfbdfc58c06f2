use chrono::{Datelike, NaiveDate};

use crate::types::LoanRecord;

/// EMIs still owed on a loan as of the given date, never negative
///
/// Calendar-month granularity: day-of-month is ignored and partial months
/// are not prorated.
pub fn months_remaining(loan: &LoanRecord, today: NaiveDate) -> u32 {
    let elapsed = (today.year() - loan.start_date.year()) * 12 + today.month() as i32
        - loan.start_date.month() as i32;
    (loan.tenure_months as i64 - elapsed as i64).max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn loan_started(start: NaiveDate, tenure: u32) -> LoanRecord {
        LoanRecord {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            amount: Money::from_major(100_000),
            tenure_months: tenure,
            interest_rate: Rate::from_percent(dec!(10)),
            monthly_installment: Money::from_major(9_000),
            emis_paid_on_time: 0,
            start_date: start,
            end_date: start
                .checked_add_months(chrono::Months::new(tenure))
                .unwrap(),
        }
    }

    #[test]
    fn test_months_remaining_mid_tenure() {
        // started 14 months before the evaluation date
        let start = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(months_remaining(&loan_started(start, 24), today), 10);
    }

    #[test]
    fn test_overrun_tenure_is_never_negative() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(months_remaining(&loan_started(start, 10), today), 0);
    }

    #[test]
    fn test_day_of_month_is_ignored() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let early = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        // both dates are two calendar months after january
        assert_eq!(months_remaining(&loan_started(start, 12), early), 10);
        assert_eq!(months_remaining(&loan_started(start, 12), late), 10);
    }

    #[test]
    fn test_year_rollover() {
        let start = NaiveDate::from_ymd_opt(2024, 11, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        assert_eq!(months_remaining(&loan_started(start, 12), today), 9);
    }
}
