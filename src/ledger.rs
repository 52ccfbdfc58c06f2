use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::{CustomerId, CustomerProfile, LoanId, LoanRecord};

/// storage capability the underwriting core runs against
///
/// Reads feed scoring and the EMI-burden check; the single write is loan
/// origination. An implementation backing a shared store must serve the
/// active-loan read and the insert under one isolation scope, or two
/// concurrent approvals can jointly breach the income-burden cap.
pub trait Ledger {
    fn customer(&self, id: CustomerId) -> Option<CustomerProfile>;

    fn loan(&self, id: LoanId) -> Option<LoanRecord>;

    /// full loan history for a customer, order not significant
    fn loans_for_customer(&self, id: CustomerId) -> Vec<LoanRecord>;

    /// loans whose end date has not passed as of the given date
    fn active_loans_for_customer(&self, id: CustomerId, as_of: NaiveDate) -> Vec<LoanRecord> {
        self.loans_for_customer(id)
            .into_iter()
            .filter(|loan| loan.is_active(as_of))
            .collect()
    }

    fn insert_customer(&mut self, profile: CustomerProfile);

    fn insert_loan(&mut self, record: LoanRecord);
}

/// hashmap-backed ledger for tests and embedders without a database
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    customers: HashMap<CustomerId, CustomerProfile>,
    loans: HashMap<LoanId, LoanRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }
}

impl Ledger for InMemoryLedger {
    fn customer(&self, id: CustomerId) -> Option<CustomerProfile> {
        self.customers.get(&id).cloned()
    }

    fn loan(&self, id: LoanId) -> Option<LoanRecord> {
        self.loans.get(&id).cloned()
    }

    fn loans_for_customer(&self, id: CustomerId) -> Vec<LoanRecord> {
        self.loans
            .values()
            .filter(|loan| loan.customer_id == id)
            .cloned()
            .collect()
    }

    fn insert_customer(&mut self, profile: CustomerProfile) {
        self.customers.insert(profile.id, profile);
    }

    fn insert_loan(&mut self, record: LoanRecord) {
        self.loans.insert(record.id, record);
    }
}
