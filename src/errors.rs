use thiserror::Error;

use crate::types::{CustomerId, LoanId};

#[derive(Error, Debug)]
pub enum UnderwritingError {
    #[error("customer not found: {id}")]
    CustomerNotFound { id: CustomerId },

    #[error("loan not found: {id}")]
    LoanNotFound { id: LoanId },

    #[error("invalid date: {message}")]
    InvalidDate { message: String },
}

pub type Result<T> = std::result::Result<T, UnderwritingError>;
