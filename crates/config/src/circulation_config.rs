//! Circulation policy configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Loan and fine policy
///
/// Defaults to a 14-day loan period and 1.00 per day late.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CirculationConfig {
    /// Loan period in calendar days
    pub loan_period_days: u32,

    /// Fine charged per day late, in currency units
    pub daily_fine_rate: f64,
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            daily_fine_rate: 1.0,
        }
    }
}

impl ConfigSection for CirculationConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = Vec::new();

        results.push(Validator::in_range(
            self.loan_period_days,
            1,
            365,
            "circulation.loan_period_days",
        ));

        if self.daily_fine_rate <= 0.0 || self.daily_fine_rate > 1000.0 {
            results.push(Err(ValidationError::with_value(
                "circulation.daily_fine_rate",
                "must be greater than 0 and at most 1000",
                self.daily_fine_rate,
            )));
        }

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.loan_period_days = other.loan_period_days;
        self.daily_fine_rate = other.daily_fine_rate;
    }

    fn section_name(&self) -> &'static str {
        "circulation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CirculationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.loan_period_days, 14);
        assert_eq!(config.daily_fine_rate, 1.0);
    }

    #[test]
    fn test_invalid_loan_period() {
        let mut config = CirculationConfig::default();
        config.loan_period_days = 0;
        assert!(config.validate().is_err());

        config.loan_period_days = 366;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_fine_rate() {
        let mut config = CirculationConfig::default();
        config.daily_fine_rate = 0.0;
        assert!(config.validate().is_err());

        config.daily_fine_rate = -1.0;
        assert!(config.validate().is_err());

        config.daily_fine_rate = 1000.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = CirculationConfig::default();
        let other = CirculationConfig {
            loan_period_days: 21,
            daily_fine_rate: 0.5,
        };

        base.merge(other);
        assert_eq!(base.loan_period_days, 21);
        assert_eq!(base.daily_fine_rate, 0.5);
    }
}
