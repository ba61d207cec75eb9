//! Loan domain model

use crate::types::{BookId, Date, LoanId, MemberId, Validator};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a loan
///
/// The only transition is `Active` to `Returned`; a returned loan is
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "active"),
            LoanStatus::Returned => write!(f, "returned"),
        }
    }
}

/// A book checkout by a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub member_id: MemberId,
    pub book_id: BookId,
    pub loan_date: Date,
    pub expected_return_date: Date,
    pub actual_return_date: Option<Date>,
    pub status: LoanStatus,
    pub fine_generated: bool,
}

impl Loan {
    /// Creates an active loan; the due date is `loan_date` plus the loan
    /// period in calendar days
    pub fn new(
        id: LoanId,
        member_id: MemberId,
        book_id: BookId,
        loan_date: Date,
        period_days: u32,
    ) -> Self {
        Self {
            id,
            member_id,
            book_id,
            loan_date,
            expected_return_date: loan_date.plus_days(period_days as i64),
            actual_return_date: None,
            status: LoanStatus::Active,
            fine_generated: false,
        }
    }

    /// Returns true while the book is still out
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// Records the return of the book on the given date
    pub fn mark_returned(&mut self, on: Date) {
        self.actual_return_date = Some(on);
        self.status = LoanStatus::Returned;
    }

    /// Whole days past the due date as of `on`, floored at zero
    pub fn days_late(&self, on: Date) -> i64 {
        on.days_since(self.expected_return_date).max(0)
    }
}

impl Validator for Loan {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.expected_return_date < self.loan_date {
            errors.push("Expected return date cannot precede the loan date".to_string());
        }

        if self.status == LoanStatus::Active && self.actual_return_date.is_some() {
            errors.push("Active loan cannot carry a return date".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_loan() -> Loan {
        Loan::new(
            LoanId::new(1),
            MemberId::new(1),
            BookId::new(1),
            Date::from_ymd(2026, 1, 10).unwrap(),
            14,
        )
    }

    #[test]
    fn test_loan_new_due_date() {
        let loan = test_loan();
        assert_eq!(
            loan.expected_return_date,
            Date::from_ymd(2026, 1, 24).unwrap()
        );
        assert!(loan.is_active());
        assert!(!loan.fine_generated);
        assert!(loan.actual_return_date.is_none());
        assert!(loan.is_valid());
    }

    #[test]
    fn test_mark_returned() {
        let mut loan = test_loan();
        let returned_on = Date::from_ymd(2026, 1, 20).unwrap();
        loan.mark_returned(returned_on);
        assert_eq!(loan.status, LoanStatus::Returned);
        assert_eq!(loan.actual_return_date, Some(returned_on));
    }

    #[test]
    fn test_days_late() {
        let loan = test_loan();
        assert_eq!(loan.days_late(Date::from_ymd(2026, 1, 20).unwrap()), 0);
        assert_eq!(loan.days_late(Date::from_ymd(2026, 1, 24).unwrap()), 0);
        assert_eq!(loan.days_late(Date::from_ymd(2026, 1, 30).unwrap()), 6);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&LoanStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let back: LoanStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(back, LoanStatus::Returned);
    }
}
