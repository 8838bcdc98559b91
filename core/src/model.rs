//! Stage 5: CLV regression.
//!
//! Fits ordinary least squares on {avg_order_value, frequency,
//! lifespan_years} against clv, then predicts over EVERY aggregate row.
//! The fitting split and the prediction scope are independent: holdout
//! validation only changes which rows the coefficients are estimated
//! from and whether a holdout MSE is reported.

use crate::{
    aggregate::CustomerAggregate,
    config::ValidationMode,
    error::{PipelineError, PipelineResult},
};
use linfa::prelude::*;
use linfa_linear::{FittedLinearRegression, LinearRegression};
use ndarray::{Array1, Array2, Axis};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub const NUM_FEATURES: usize = 3;

/// Outcome of the fit, for logging and the runner summary.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub trained_rows: usize,
    /// Mean squared error on the held-out rows; None under
    /// ValidationMode::None.
    pub holdout_mse: Option<f64>,
}

pub struct ClvPredictor;

impl ClvPredictor {
    /// Fit per the validation mode and write `predicted_clv` into every
    /// aggregate row. Requires at least NUM_FEATURES + 1 training rows.
    pub fn fit_and_predict(
        validation: ValidationMode,
        aggregates: &mut [CustomerAggregate],
    ) -> PipelineResult<FitReport> {
        let features = Self::feature_matrix(aggregates);
        let targets = Self::target_vector(aggregates);

        let (train_idx, test_idx) = Self::split_indices(aggregates.len(), validation);
        if train_idx.len() < NUM_FEATURES + 1 {
            return Err(PipelineError::TooFewRows {
                rows: train_idx.len(),
                features: NUM_FEATURES,
            });
        }

        let train_ds = DatasetBase::from(features.select(Axis(0), &train_idx))
            .with_targets(targets.select(Axis(0), &train_idx));
        let model: FittedLinearRegression<f64> = LinearRegression::default()
            .fit(&train_ds)
            .map_err(|e| PipelineError::Fit(e.to_string()))?;

        // Predict over the entire feature set, not just the holdout.
        let full_ds = DatasetBase::from(features);
        let predictions = model.predict(&full_ds);
        for (agg, pred) in aggregates.iter_mut().zip(predictions.iter()) {
            agg.predicted_clv = *pred;
        }

        let holdout_mse = if test_idx.is_empty() {
            None
        } else {
            let sum: f64 = test_idx
                .iter()
                .map(|&i| {
                    let err = predictions[i] - targets[i];
                    err * err
                })
                .sum();
            Some(sum / test_idx.len() as f64)
        };

        if let Some(mse) = holdout_mse {
            log::info!(
                "fitted OLS on {} rows, holdout MSE over {} rows: {mse:.6}",
                train_idx.len(),
                test_idx.len()
            );
        } else {
            log::info!("fitted OLS on all {} rows (no holdout)", train_idx.len());
        }

        Ok(FitReport { trained_rows: train_idx.len(), holdout_mse })
    }

    fn feature_matrix(aggregates: &[CustomerAggregate]) -> Array2<f64> {
        let mut m = Array2::zeros((aggregates.len(), NUM_FEATURES));
        for (i, a) in aggregates.iter().enumerate() {
            m[[i, 0]] = a.avg_order_value;
            m[[i, 1]] = a.frequency as f64;
            m[[i, 2]] = a.lifespan_years;
        }
        m
    }

    fn target_vector(aggregates: &[CustomerAggregate]) -> Array1<f64> {
        aggregates.iter().map(|a| a.clv).collect()
    }

    /// (train, test) row indices. Holdout uses a seeded Fisher-Yates
    /// shuffle so the partition is reproducible independent of the
    /// generation seed.
    fn split_indices(n: usize, validation: ValidationMode) -> (Vec<usize>, Vec<usize>) {
        match validation {
            ValidationMode::None => ((0..n).collect(), Vec::new()),
            // Nothing to hold out of a 0- or 1-row set.
            ValidationMode::HoldOut { .. } if n <= 1 => ((0..n).collect(), Vec::new()),
            ValidationMode::HoldOut { test_fraction, seed } => {
                let mut indices: Vec<usize> = (0..n).collect();
                let mut rng = Pcg64Mcg::seed_from_u64(seed);
                for i in (1..n).rev() {
                    let j = (rng.next_u64() % (i as u64 + 1)) as usize;
                    indices.swap(i, j);
                }
                // At least 1 test row, and never the whole set.
                let test_len = ((n as f64 * test_fraction).ceil() as usize)
                    .clamp(1, n.saturating_sub(1));
                let test = indices[..test_len].to_vec();
                let train = indices[test_len..].to_vec();
                (train, test)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(id: u32, aov: f64, frequency: u32, lifespan: f64) -> CustomerAggregate {
        let monetary = aov * frequency as f64;
        CustomerAggregate {
            customer_id: id,
            total_quantity: frequency,
            avg_price: aov,
            frequency,
            lifespan_years: lifespan,
            monetary,
            avg_order_value: aov,
            clv: aov * frequency as f64 * lifespan,
            predicted_clv: f64::NAN,
        }
    }

    #[test]
    fn split_is_deterministic_and_disjoint() {
        let mode = ValidationMode::HoldOut { test_fraction: 0.2, seed: 42 };
        let (train_a, test_a) = ClvPredictor::split_indices(100, mode);
        let (train_b, test_b) = ClvPredictor::split_indices(100, mode);
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
        assert_eq!(test_a.len(), 20);
        assert_eq!(train_a.len() + test_a.len(), 100);
        for i in &test_a {
            assert!(!train_a.contains(i), "index {i} in both partitions");
        }
    }

    #[test]
    fn no_validation_trains_on_everything() {
        let (train, test) = ClvPredictor::split_indices(10, ValidationMode::None);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }

    #[test]
    fn too_few_rows_is_a_typed_error() {
        let mut aggs = vec![aggregate(1, 10.0, 1, 1.0), aggregate(2, 20.0, 2, 2.0)];
        let err = ClvPredictor::fit_and_predict(ValidationMode::None, &mut aggs).unwrap_err();
        assert!(matches!(err, PipelineError::TooFewRows { rows: 2, .. }),
            "unexpected error: {err}");
    }
}
