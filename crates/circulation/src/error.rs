//! Error types for the circulation engine

use biblio_core::{BookId, FineId, LoanId, MemberId};
use biblio_store::StoreError;
use thiserror::Error;

/// Result type for circulation operations
pub type Result<T> = std::result::Result<T, CirculationError>;

/// Failures of the loan, return and fine workflows
///
/// Each variant names the precondition that failed, so the caller can
/// report exactly why an operation was refused.
#[derive(Debug, Error)]
pub enum CirculationError {
    #[error("Member {id} not found")]
    MemberNotFound { id: MemberId },

    #[error("Member {id} is inactive")]
    MemberInactive { id: MemberId },

    #[error("Member {id} has {count} pending fine(s) and cannot borrow until they are paid")]
    OutstandingFines { id: MemberId, count: u32 },

    #[error("Book {id} not found")]
    BookNotFound { id: BookId },

    #[error("Book {id} is inactive")]
    BookInactive { id: BookId },

    #[error("No copies of book {id} are available")]
    NoCopiesAvailable { id: BookId },

    #[error("Loan {id} not found")]
    LoanNotFound { id: LoanId },

    #[error("Loan {id} was already returned")]
    LoanAlreadyReturned { id: LoanId },

    #[error("Fine {id} not found")]
    FineNotFound { id: FineId },

    #[error("Fine {id} was already paid")]
    FineAlreadyPaid { id: FineId },

    #[error("Fine amount must be greater than zero (got {amount})")]
    InvalidFineAmount { amount: f64 },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
