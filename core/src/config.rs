//! Pipeline configuration. Every tunable lives here; the defaults are
//! the canonical dataset sizes and ranges.

use crate::error::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

/// How (and whether) the regression validates on held-out rows.
///
/// The target metric (clv) is an exact closed-form function of the three
/// features, so the choice is surfaced rather than hidden: either fit on
/// everything, or hold out a fraction and report its mean squared error.
/// Either way, predictions are produced for every aggregate row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Fit on all rows; no holdout, no score.
    None,
    /// Deterministic seeded shuffle, fit on (1 - test_fraction) of the
    /// rows, report MSE on the rest.
    HoldOut { test_fraction: f64, seed: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub num_customers: u32,
    pub num_products: u32,
    pub num_orders: u32,

    /// Signup dates are drawn from the trailing window of this many days
    /// (3 fixed 365-day years, matching the lifespan arithmetic).
    pub signup_window_days: u32,

    pub price_min: f64,
    pub price_max: f64,

    pub quantity_min: u32,
    pub quantity_max: u32,

    pub validation: ValidationMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_customers: 500,
            num_products: 50,
            num_orders: 5000,
            signup_window_days: 3 * 365,
            price_min: 10.0,
            price_max: 500.0,
            quantity_min: 1,
            quantity_max: 5,
            validation: ValidationMode::HoldOut { test_fraction: 0.2, seed: 42 },
        }
    }
}

impl PipelineConfig {
    /// Small config for fast tests. Same shape, two orders of magnitude
    /// fewer rows.
    pub fn small() -> Self {
        Self {
            num_customers: 25,
            num_products: 8,
            num_orders: 200,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if self.num_customers == 0 || self.num_products == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "customer and product counts must be > 0".into(),
            });
        }
        if self.price_min <= 0.0 || self.price_max < self.price_min {
            return Err(PipelineError::InvalidConfig {
                reason: format!(
                    "price range [{}, {}] must be positive and ordered",
                    self.price_min, self.price_max
                ),
            });
        }
        if self.quantity_min == 0 || self.quantity_max < self.quantity_min {
            return Err(PipelineError::InvalidConfig {
                reason: format!(
                    "quantity range [{}, {}] must be positive and ordered",
                    self.quantity_min, self.quantity_max
                ),
            });
        }
        if let ValidationMode::HoldOut { test_fraction, .. } = self.validation {
            if !(0.0..1.0).contains(&test_fraction) || test_fraction == 0.0 {
                return Err(PipelineError::InvalidConfig {
                    reason: format!("test_fraction {test_fraction} must be in (0, 1)"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        PipelineConfig::default().validate().expect("default config");
    }

    #[test]
    fn zero_customers_rejected() {
        let cfg = PipelineConfig { num_customers: 0, ..PipelineConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bad_test_fraction_rejected() {
        let cfg = PipelineConfig {
            validation: ValidationMode::HoldOut { test_fraction: 1.5, seed: 42 },
            ..PipelineConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_price_range_rejected() {
        let cfg = PipelineConfig {
            price_min: 500.0,
            price_max: 10.0,
            ..PipelineConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
