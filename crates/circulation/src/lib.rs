//! Circulation engine: loans, returns and fines
//!
//! Sits on top of `biblio-store` and enforces lending policy: eligibility
//! checks before a checkout, fine generation on late returns, and the
//! pending-fines gate that blocks indebted members from borrowing.

mod error;
mod manager;

pub use error::{CirculationError, Result};
pub use manager::{CirculationManager, ReturnOutcome};
