//! Configuration builder for the evaluation pipeline.

use larix_io::Dataset;

use crate::error::EvalError;

/// Configuration for a per-entity evaluation run.
///
/// Construct via [`EvalConfig::new`], then chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter          | Default           |
/// |--------------------|-------------------|
/// | `entity_column`    | `tree_name`       |
/// | `predicted_column` | `predicted_value` |
/// | `true_column`      | `true_value`      |
#[derive(Debug, Clone)]
pub struct EvalConfig {
    target: String,
    entity_column: String,
    predicted_column: String,
    true_column: String,
}

/// Resolved column indices for one dataset.
///
/// Produced by [`EvalConfig::resolve_schema`]. The same resolution feeds
/// both the filter and clean steps, so the columns they operate on cannot
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Index of the entity identifier column.
    pub entity: usize,
    /// Index of the predicted value column.
    pub predicted: usize,
    /// Index of the true value column.
    pub truth: usize,
}

impl EvalConfig {
    /// Create a new config targeting the given entity identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidTarget`] if `target` is empty.
    pub fn new(target: impl Into<String>) -> Result<Self, EvalError> {
        let target = target.into();
        if target.is_empty() {
            return Err(EvalError::InvalidTarget);
        }
        Ok(Self {
            target,
            entity_column: "tree_name".to_string(),
            predicted_column: "predicted_value".to_string(),
            true_column: "true_value".to_string(),
        })
    }

    // --- Setters ---

    /// Set the entity identifier column name.
    #[must_use]
    pub fn with_entity_column(mut self, name: impl Into<String>) -> Self {
        self.entity_column = name.into();
        self
    }

    /// Set the predicted value column name.
    #[must_use]
    pub fn with_predicted_column(mut self, name: impl Into<String>) -> Self {
        self.predicted_column = name.into();
        self
    }

    /// Set the true value column name.
    #[must_use]
    pub fn with_true_column(mut self, name: impl Into<String>) -> Self {
        self.true_column = name.into();
        self
    }

    // --- Accessors ---

    /// Return the target entity identifier.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Resolve the three required columns against a dataset header.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MissingColumns`] listing every absent column
    /// name (in entity, predicted, true order) if any are missing.
    pub fn resolve_schema(&self, dataset: &Dataset) -> Result<Schema, EvalError> {
        let mut missing = Vec::new();
        for name in [
            &self.entity_column,
            &self.predicted_column,
            &self.true_column,
        ] {
            if dataset.column_index(name).is_none() {
                missing.push(name.clone());
            }
        }
        if !missing.is_empty() {
            return Err(EvalError::MissingColumns { missing });
        }

        // Lookups cannot fail past this point.
        Ok(Schema {
            entity: dataset.column_index(&self.entity_column).unwrap_or(0),
            predicted: dataset.column_index(&self.predicted_column).unwrap_or(0),
            truth: dataset.column_index(&self.true_column).unwrap_or(0),
        })
    }
}
