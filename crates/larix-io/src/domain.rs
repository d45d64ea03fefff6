//! Domain types for larix-io.

/// A tabular dataset loaded from a CSV file.
///
/// Produced by [`CsvReader`](crate::CsvReader). Holds the header column
/// names and one `Vec<String>` of raw cells per data row, positionally
/// aligned with the header. Cells are kept as text because the dataset
/// mixes string and numeric columns; numeric interpretation happens
/// downstream. Read-only after load.
#[derive(Debug)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a new dataset. Every row must have `columns.len()` cells.
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Return the header column names in file order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Return the data rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Return the index of the named column, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Return the number of data rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}
