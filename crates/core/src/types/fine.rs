//! Fine domain model

use crate::types::{round_to_cents, Date, FineId, MemberId, Validator};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a fine
///
/// The only transition is `Pending` to `Paid`; there is no reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    Pending,
    Paid,
}

impl std::fmt::Display for FineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FineStatus::Pending => write!(f, "pending"),
            FineStatus::Paid => write!(f, "paid"),
        }
    }
}

/// A monetary penalty charged to a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub id: FineId,
    pub member_id: MemberId,
    pub amount: f64,
    pub reason: String,
    pub generation_date: Date,
    pub payment_date: Option<Date>,
    pub status: FineStatus,
}

impl Fine {
    /// Creates a pending fine; the amount is rounded to cents
    pub fn new(
        id: FineId,
        member_id: MemberId,
        amount: f64,
        reason: impl Into<String>,
        generation_date: Date,
    ) -> Self {
        Self {
            id,
            member_id,
            amount: round_to_cents(amount),
            reason: reason.into(),
            generation_date,
            payment_date: None,
            status: FineStatus::Pending,
        }
    }

    /// Returns true while the fine is unpaid
    pub fn is_pending(&self) -> bool {
        self.status == FineStatus::Pending
    }

    /// Records payment of the fine on the given date
    pub fn mark_paid(&mut self, on: Date) {
        self.payment_date = Some(on);
        self.status = FineStatus::Paid;
    }
}

impl Validator for Fine {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.amount <= 0.0 {
            errors.push("Amount must be greater than zero".to_string());
        }

        if self.status == FineStatus::Pending && self.payment_date.is_some() {
            errors.push("Pending fine cannot carry a payment date".to_string());
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

    fn test_fine() -> Fine {
        Fine::new(
            FineId::new(1),
            MemberId::new(1),
            6.0,
            "6 days late on loan #1",
            Date::from_ymd(2026, 1, 30).unwrap(),
        )
    }

    #[test]
    fn test_fine_new_defaults() {
        let fine = test_fine();
        assert!(fine.is_pending());
        assert!(fine.payment_date.is_none());
        assert!(fine.is_valid());
    }

    #[test]
    fn test_amount_rounded_to_cents() {
        let fine = Fine::new(
            FineId::new(2),
            MemberId::new(1),
            3.456,
            "damaged cover",
            Date::from_ymd(2026, 2, 1).unwrap(),
        );
        assert_eq!(fine.amount, 3.46);
    }

    #[test]
    fn test_mark_paid() {
        let mut fine = test_fine();
        let paid_on = Date::from_ymd(2026, 2, 2).unwrap();
        fine.mark_paid(paid_on);
        assert_eq!(fine.status, FineStatus::Paid);
        assert_eq!(fine.payment_date, Some(paid_on));
        assert!(!fine.is_pending());
    }

    #[test]
    fn test_validation_zero_amount() {
        let mut fine = test_fine();
        fine.amount = 0.0;
        assert!(!fine.is_valid());
        fine.amount = -2.5;
        assert!(!fine.is_valid());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&FineStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let back: FineStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(back, FineStatus::Paid);
    }
}
