/// Errors from evaluation configuration and metric computation.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Returned when the target identifier is empty.
    #[error("target identifier must not be empty")]
    InvalidTarget,

    /// Returned when one or more required columns are absent from the dataset.
    #[error("missing columns in dataset: {}", missing.join(", "))]
    MissingColumns {
        /// Names of the absent columns, in required-column order.
        missing: Vec<String>,
    },

    /// Returned when zero usable rows remain after filtering and cleaning.
    #[error("no usable rows for target \"{target}\" after filtering and dropping missing values")]
    EmptySubset {
        /// The target identifier that was filtered on.
        target: String,
    },
}
