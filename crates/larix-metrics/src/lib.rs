//! Schema validation, row filtering, and regression error metrics.
//!
//! The pipeline after load: resolve the required columns against the
//! dataset header, filter rows to one target entity, drop rows with
//! missing values, then compute MSE / MAR / RMSE over what remains.

mod config;
mod error;
mod metrics;
mod subset;

pub use config::{EvalConfig, Schema};
pub use error::EvalError;
pub use metrics::ErrorMetrics;
pub use subset::{clean, filter, PairedSamples, RowSubset, SubsetRow};
