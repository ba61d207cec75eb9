//! Member domain model

use crate::types::{MemberId, Validator};
use serde::{Deserialize, Serialize};

/// A registered library member
///
/// `pending_fines_count` is a derived counter maintained by the circulation
/// workflows: incremented when a fine is issued against the member and
/// decremented (floored at zero) when one is paid. Members are soft-deleted
/// via `active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub active: bool,
    pub pending_fines_count: u32,
}

impl Member {
    /// Creates a member with a store-assigned id
    pub fn new(
        id: MemberId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            active: true,
            pending_fines_count: 0,
        }
    }

    /// Returns "first last" for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the member may borrow: active with no unpaid fines
    pub fn can_borrow(&self) -> bool {
        self.active && self.pending_fines_count == 0
    }

    /// Counts a newly issued fine against this member
    pub fn record_pending_fine(&mut self) {
        self.pending_fines_count += 1;
    }

    /// Counts a fine payment; the counter never goes below zero
    pub fn settle_pending_fine(&mut self) {
        self.pending_fines_count = self.pending_fines_count.saturating_sub(1);
    }

    /// Soft-deletes the member
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Validator for Member {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push("First name cannot be empty".to_string());
        }

        if self.last_name.trim().is_empty() {
            errors.push("Last name cannot be empty".to_string());
        }

        let at_parts: Vec<&str> = self.email.split('@').collect();
        let email_ok = at_parts.len() == 2
            && !at_parts[0].is_empty()
            && at_parts[1].contains('.')
            && !at_parts[1].starts_with('.')
            && !at_parts[1].ends_with('.');
        if !email_ok {
            errors.push("Email address is not valid".to_string());
        }

        if !self.phone.chars().all(|c| c.is_ascii_digit())
            || !(8..=15).contains(&self.phone.len())
        {
            errors.push("Phone must contain 8 to 15 digits".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
