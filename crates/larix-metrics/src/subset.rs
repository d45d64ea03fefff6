//! Filter and clean: two pure functions between load and compute.

use larix_io::Dataset;
use tracing::debug;

use crate::config::Schema;

/// One projected row of the filtered subset.
///
/// The predicted/true sides are `None` when the source cell was empty,
/// failed to parse as `f64`, or parsed non-finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetRow {
    /// Entity identifier (always equal to the subset's target).
    pub entity: String,
    /// Predicted value, if present and finite.
    pub predicted: Option<f64>,
    /// True value, if present and finite.
    pub truth: Option<f64>,
}

/// Rows matching one target entity, projected to the three required columns.
///
/// Produced by [`filter`]; consumed by [`clean`]. Derived view, the source
/// dataset is untouched.
#[derive(Debug, Clone)]
pub struct RowSubset {
    /// The entity identifier every row was matched against.
    pub target: String,
    /// Projected rows in dataset order.
    pub rows: Vec<SubsetRow>,
}

/// Parallel predicted/true arrays with all missing rows dropped.
///
/// Produced by [`clean`]; `predicted[i]` pairs with `truth[i]`.
#[derive(Debug, Clone)]
pub struct PairedSamples {
    /// The entity identifier the samples belong to.
    pub target: String,
    /// Predicted values.
    pub predicted: Vec<f64>,
    /// True values, same order as `predicted`.
    pub truth: Vec<f64>,
}

impl PairedSamples {
    /// Return the number of paired samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicted.len()
    }

    /// Return `true` if no samples remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicted.is_empty()
    }
}

/// Parse a raw cell as a metric value. Empty, unparseable, and non-finite
/// cells are all treated as missing (pandas-style dropna semantics).
fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Retain rows whose entity cell equals `target`, projected to the columns
/// named by `schema`. Row order is preserved; no cell values are altered
/// beyond numeric parsing of the predicted/true sides.
#[must_use]
pub fn filter(dataset: &Dataset, schema: Schema, target: &str) -> RowSubset {
    let rows: Vec<SubsetRow> = dataset
        .rows()
        .iter()
        .filter(|row| row[schema.entity] == target)
        .map(|row| SubsetRow {
            entity: row[schema.entity].clone(),
            predicted: parse_cell(&row[schema.predicted]),
            truth: parse_cell(&row[schema.truth]),
        })
        .collect();
    debug!(target, n_matched = rows.len(), "filtered dataset");
    RowSubset {
        target: target.to_string(),
        rows,
    }
}

/// Drop rows with a missing predicted or true value, yielding the paired
/// arrays the metrics are computed over.
#[must_use]
pub fn clean(subset: &RowSubset) -> PairedSamples {
    let mut predicted = Vec::with_capacity(subset.rows.len());
    let mut truth = Vec::with_capacity(subset.rows.len());
    for row in &subset.rows {
        if let (Some(p), Some(t)) = (row.predicted, row.truth) {
            predicted.push(p);
            truth.push(t);
        }
    }
    let n_dropped = subset.rows.len() - predicted.len();
    debug!(n_kept = predicted.len(), n_dropped, "dropped rows with missing values");
    PairedSamples {
        target: subset.target.clone(),
        predicted,
        truth,
    }
}
