use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a customer
pub type CustomerId = Uuid;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// customer financial profile, fixed at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub phone_number: String,
    pub monthly_income: Money,
    /// derived credit ceiling, 36x monthly income rounded to the nearest lakh;
    /// never recomputed from later loans
    pub approved_limit: Money,
}

impl CustomerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// a single loan on a customer's ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,
    pub customer_id: CustomerId,
    pub amount: Money,
    pub tenure_months: u32,
    pub interest_rate: Rate,
    pub monthly_installment: Money,
    pub emis_paid_on_time: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LoanRecord {
    /// a loan is active while its end date has not yet passed
    pub fn is_active(&self, as_of: NaiveDate) -> bool {
        self.end_date >= as_of
    }

    /// fully repaid on schedule: every EMI of the tenure paid on time
    pub fn paid_on_time(&self) -> bool {
        self.emis_paid_on_time == self.tenure_months
    }
}

/// registration request; id and approved limit are assigned by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomer {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub phone_number: String,
    pub monthly_income: Money,
}

/// requested loan terms
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanApplication {
    pub customer_id: CustomerId,
    pub amount: Money,
    pub interest_rate: Rate,
    pub tenure_months: u32,
}

/// outcome of an eligibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub customer_id: CustomerId,
    pub approved: bool,
    /// rate as requested by the applicant
    pub interest_rate: Rate,
    /// rate after tier-floor correction; what an approved loan is priced at
    pub corrected_interest_rate: Rate,
    pub tenure_months: u32,
    /// zero when not approved
    pub monthly_installment: Money,
}

/// outcome of a loan creation request; rejection is a valid outcome, not an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOutcome {
    pub loan_id: Option<LoanId>,
    pub customer_id: CustomerId,
    pub approved: bool,
    pub message: String,
    pub monthly_installment: Money,
}

/// per-loan view for a customer's loan listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanStatement {
    pub loan_id: LoanId,
    pub amount: Money,
    pub interest_rate: Rate,
    pub monthly_installment: Money,
    pub repayments_left: u32,
}

/// single-loan view including the owning customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDetail {
    pub loan_id: LoanId,
    pub customer: CustomerProfile,
    pub amount: Money,
    pub interest_rate: Rate,
    pub monthly_installment: Money,
    pub tenure_months: u32,
}
