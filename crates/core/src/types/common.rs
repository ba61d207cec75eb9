//! Shared helpers and the self-validation trait

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Rounds a monetary amount to two decimal places
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Strips hyphens and spaces, keeping the raw digit string
///
/// Used when checking ISBNs and phone numbers that may be entered with
/// separator characters.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| *c != '-' && *c != ' ').collect()
}
