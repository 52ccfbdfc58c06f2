use chrono::Months;
use hourglass_rs::SafeTimeProvider;
use uuid::Uuid;

use crate::config::UnderwritingPolicy;
use crate::decimal::Money;
use crate::eligibility;
use crate::errors::{Result, UnderwritingError};
use crate::events::{Event, EventStore};
use crate::installment::monthly_installment;
use crate::ledger::Ledger;
use crate::repayment::months_remaining;
use crate::scoring::credit_score;
use crate::types::{
    CustomerId, CustomerProfile, EligibilityDecision, LoanApplication, LoanDetail, LoanId,
    LoanOutcome, LoanRecord, LoanStatement, RegisterCustomer,
};

const APPROVED_MESSAGE: &str = "Loan approved";
const DECLINED_MESSAGE: &str = "Loan not approved";

/// underwriting decision engine
///
/// Sequences ledger reads, scoring, the eligibility evaluation and the
/// installment arithmetic to answer eligibility checks and loan creation
/// requests. All storage access goes through the [`Ledger`] capability and
/// every date-sensitive operation takes the injected time provider, so the
/// whole engine is replayable under a test clock.
pub struct UnderwritingEngine<L: Ledger> {
    ledger: L,
    policy: UnderwritingPolicy,
    events: EventStore,
}

impl<L: Ledger> UnderwritingEngine<L> {
    pub fn new(ledger: L) -> Self {
        Self::with_policy(ledger, UnderwritingPolicy::default())
    }

    pub fn with_policy(ledger: L, policy: UnderwritingPolicy) -> Self {
        Self {
            ledger,
            policy,
            events: EventStore::new(),
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// drain audit events collected since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// register a customer, deriving the approved credit limit from income
    ///
    /// The limit is fixed here for the lifetime of the profile and never
    /// recomputed from later loans.
    pub fn register_customer(
        &mut self,
        request: RegisterCustomer,
        _time: &SafeTimeProvider,
    ) -> Result<CustomerProfile> {
        let approved_limit = (request.monthly_income * self.policy.limit_income_multiple)
            .round_to_multiple(self.policy.limit_rounding_unit);

        let profile = CustomerProfile {
            id: Uuid::new_v4(),
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            phone_number: request.phone_number,
            monthly_income: request.monthly_income,
            approved_limit,
        };

        self.ledger.insert_customer(profile.clone());
        self.events.emit(Event::CustomerRegistered {
            customer_id: profile.id,
            monthly_income: profile.monthly_income,
            approved_limit,
        });

        Ok(profile)
    }

    /// score the customer and decide the application without persisting anything
    ///
    /// Idempotent: identical inputs against an unchanged ledger produce an
    /// identical decision.
    pub fn check_eligibility(
        &mut self,
        application: LoanApplication,
        time: &SafeTimeProvider,
    ) -> Result<EligibilityDecision> {
        let today = time.now().date_naive();
        let customer = self
            .ledger
            .customer(application.customer_id)
            .ok_or(UnderwritingError::CustomerNotFound {
                id: application.customer_id,
            })?;

        let history = self.ledger.loans_for_customer(application.customer_id);
        let score = credit_score(&history, customer.approved_limit, today, &self.policy);

        let current_emi_burden: Money = self
            .ledger
            .active_loans_for_customer(application.customer_id, today)
            .iter()
            .map(|loan| loan.monthly_installment)
            .sum();

        let decision = eligibility::evaluate(
            &customer,
            score,
            application.interest_rate,
            current_emi_burden,
            &self.policy,
        );

        let installment = if decision.approved {
            monthly_installment(
                application.amount,
                decision.effective_rate,
                application.tenure_months,
            )
            .round_dp(2)
        } else {
            Money::ZERO
        };

        self.events.emit(Event::EligibilityChecked {
            customer_id: customer.id,
            credit_score: score,
            approved: decision.approved,
            corrected_rate: decision.effective_rate,
        });

        Ok(EligibilityDecision {
            customer_id: customer.id,
            approved: decision.approved,
            interest_rate: application.interest_rate,
            corrected_interest_rate: decision.effective_rate,
            tenure_months: application.tenure_months,
            monthly_installment: installment,
        })
    }

    /// decide the application and originate the loan when approved
    ///
    /// The decision is computed once, by the same path as
    /// [`check_eligibility`], and the origination consumes its output. A
    /// rejection returns a normal outcome with no loan id, not an error.
    pub fn create_loan(
        &mut self,
        application: LoanApplication,
        time: &SafeTimeProvider,
    ) -> Result<LoanOutcome> {
        let decision = self.check_eligibility(application, time)?;

        if !decision.approved {
            self.events.emit(Event::LoanDeclined {
                customer_id: application.customer_id,
                amount: application.amount,
                message: DECLINED_MESSAGE.to_string(),
            });
            return Ok(LoanOutcome {
                loan_id: None,
                customer_id: application.customer_id,
                approved: false,
                message: DECLINED_MESSAGE.to_string(),
                monthly_installment: Money::ZERO,
            });
        }

        let start_date = time.now().date_naive();
        let end_date = start_date
            .checked_add_months(Months::new(application.tenure_months))
            .ok_or_else(|| UnderwritingError::InvalidDate {
                message: format!(
                    "cannot add {} months to {}",
                    application.tenure_months, start_date
                ),
            })?;

        let record = LoanRecord {
            id: Uuid::new_v4(),
            customer_id: application.customer_id,
            amount: application.amount,
            tenure_months: application.tenure_months,
            interest_rate: decision.corrected_interest_rate,
            monthly_installment: decision.monthly_installment,
            emis_paid_on_time: 0,
            start_date,
            end_date,
        };
        let loan_id = record.id;

        self.ledger.insert_loan(record);
        self.events.emit(Event::LoanOriginated {
            loan_id,
            customer_id: application.customer_id,
            amount: application.amount,
            monthly_installment: decision.monthly_installment,
            start_date,
            end_date,
        });

        Ok(LoanOutcome {
            loan_id: Some(loan_id),
            customer_id: application.customer_id,
            approved: true,
            message: APPROVED_MESSAGE.to_string(),
            monthly_installment: decision.monthly_installment,
        })
    }

    /// single-loan view with its owning customer
    pub fn loan_detail(&self, loan_id: LoanId) -> Result<LoanDetail> {
        let loan = self
            .ledger
            .loan(loan_id)
            .ok_or(UnderwritingError::LoanNotFound { id: loan_id })?;
        let customer = self
            .ledger
            .customer(loan.customer_id)
            .ok_or(UnderwritingError::CustomerNotFound {
                id: loan.customer_id,
            })?;

        Ok(LoanDetail {
            loan_id: loan.id,
            customer,
            amount: loan.amount,
            interest_rate: loan.interest_rate,
            monthly_installment: loan.monthly_installment,
            tenure_months: loan.tenure_months,
        })
    }

    /// per-loan statements for a customer, with EMIs left on each
    pub fn customer_loans(
        &self,
        customer_id: CustomerId,
        time: &SafeTimeProvider,
    ) -> Result<Vec<LoanStatement>> {
        if self.ledger.customer(customer_id).is_none() {
            return Err(UnderwritingError::CustomerNotFound { id: customer_id });
        }

        let today = time.now().date_naive();
        Ok(self
            .ledger
            .loans_for_customer(customer_id)
            .iter()
            .map(|loan| LoanStatement {
                loan_id: loan.id,
                amount: loan.amount,
                interest_rate: loan.interest_rate,
                monthly_installment: loan.monthly_installment,
                repayments_left: months_remaining(loan, today),
            })
            .collect())
    }
}
