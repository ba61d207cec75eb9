//! Domain model types

mod author;
mod book;
mod category;
mod common;
mod date;
mod fine;
mod ids;
mod loan;
mod member;

pub use author::Author;
pub use book::{Book, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};
pub use category::Category;
pub use common::{normalize_digits, round_to_cents, Validator};
pub use date::{Date, DATE_FORMAT};
pub use fine::{Fine, FineStatus};
pub use ids::{AuthorId, BookId, CategoryId, FineId, LoanId, MemberId};
pub use loan::{Loan, LoanStatus};
pub use member::Member;
