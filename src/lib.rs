pub mod config;
pub mod decimal;
pub mod eligibility;
pub mod errors;
pub mod events;
pub mod installment;
pub mod ledger;
pub mod repayment;
pub mod scoring;
pub mod types;
pub mod underwriting;

// re-export key types
pub use config::UnderwritingPolicy;
pub use decimal::{Money, Rate};
pub use eligibility::RateDecision;
pub use errors::{Result, UnderwritingError};
pub use events::{Event, EventStore};
pub use installment::monthly_installment;
pub use ledger::{InMemoryLedger, Ledger};
pub use repayment::months_remaining;
pub use scoring::credit_score;
pub use types::{
    CustomerId, CustomerProfile, EligibilityDecision, LoanApplication, LoanDetail, LoanId,
    LoanOutcome, LoanRecord, LoanStatement, RegisterCustomer,
};
pub use underwriting::UnderwritingEngine;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
