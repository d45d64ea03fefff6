//! Regression error metrics over paired predicted/true samples.

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::EvalError;
use crate::subset::PairedSamples;

/// The computed error metrics for one evaluation run.
///
/// `Display` renders the three labeled lines with 6-decimal precision.
/// MAR (mean absolute residual) is the same quantity as MAE. Note that
/// MAR <= RMSE does not hold in general.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorMetrics {
    /// Mean squared error.
    pub mse: f64,
    /// Mean absolute residual.
    pub mar: f64,
    /// Root mean squared error, `mse.sqrt()`.
    pub rmse: f64,
    /// Number of samples the metrics were computed over.
    pub n_samples: usize,
}

impl ErrorMetrics {
    /// Compute MSE, MAR, and RMSE over the paired samples.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::EmptySubset`] if the samples are empty (the
    /// mean over an empty set is undefined).
    #[instrument(skip_all, fields(target = %samples.target, n_samples = samples.len()))]
    pub fn compute(samples: &PairedSamples) -> Result<Self, EvalError> {
        if samples.is_empty() {
            return Err(EvalError::EmptySubset {
                target: samples.target.clone(),
            });
        }

        let n = samples.len() as f64;
        let mut sum_sq = 0.0;
        let mut sum_abs = 0.0;
        for (&p, &t) in samples.predicted.iter().zip(&samples.truth) {
            let residual = t - p;
            sum_sq += residual * residual;
            sum_abs += residual.abs();
        }

        let mse = sum_sq / n;
        let mar = sum_abs / n;
        let rmse = mse.sqrt();

        info!(mse, mar, rmse, "metrics computed");
        Ok(Self {
            mse,
            mar,
            rmse,
            n_samples: samples.len(),
        })
    }
}

impl std::fmt::Display for ErrorMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  MSE : {:.6}", self.mse)?;
        writeln!(f, "  MAR : {:.6}", self.mar)?;
        write!(f, "  RMSE: {:.6}", self.rmse)
    }
}
