//! End-to-end pipeline tests: load -> resolve schema -> filter -> clean -> compute.
//!
//! Exercises the full path over tempfile-backed CSV fixtures, including the
//! reference scenario with known expected metric values.

use std::io::Write;

use tempfile::NamedTempFile;

use larix_io::{CsvReader, Dataset, IoError};
use larix_metrics::{clean, filter, ErrorMetrics, EvalConfig, EvalError};

fn write_csv(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn run(dataset: &Dataset, config: &EvalConfig) -> Result<ErrorMetrics, EvalError> {
    let schema = config.resolve_schema(dataset)?;
    let subset = filter(dataset, schema, config.target());
    let samples = clean(&subset);
    ErrorMetrics::compute(&samples)
}

// ---------------------------------------------------------------------------
// Reference scenario
// ---------------------------------------------------------------------------

/// Rows (pred 1.0, true 2.0) and (pred 3.0, true 3.0) for the target:
/// diffs are [-1.0, 0.0], so MSE = 0.5, MAR = 0.5, RMSE = sqrt(0.5).
#[test]
fn reference_scenario_metrics() {
    let f = write_csv(
        "tree_name,predicted_value,true_value\n\
         tree_7,1.0,2.0\n\
         tree_7,3.0,3.0\n\
         tree_8,100.0,0.0\n",
    );
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let metrics = run(&dataset, &config).unwrap();

    assert_eq!(format!("{:.6}", metrics.mse), "0.500000");
    assert_eq!(format!("{:.6}", metrics.mar), "0.500000");
    assert_eq!(format!("{:.6}", metrics.rmse), "0.707107");
    assert_eq!(metrics.n_samples, 2);
}

#[test]
fn other_entities_do_not_contribute() {
    let f = write_csv(
        "tree_name,predicted_value,true_value\n\
         tree_7,1.0,1.0\n\
         tree_8,0.0,1000.0\n\
         tree_9,0.0,1000.0\n",
    );
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let metrics = run(&dataset, &config).unwrap();
    assert_eq!(metrics.mse, 0.0);
    assert_eq!(metrics.n_samples, 1);
}

#[test]
fn missing_value_rows_excluded() {
    let f = write_csv(
        "tree_name,predicted_value,true_value\n\
         tree_7,1.0,2.0\n\
         tree_7,,5.0\n",
    );
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let metrics = run(&dataset, &config).unwrap();
    // Only the first row contributes: diff = 1.0
    assert_eq!(metrics.n_samples, 1);
    assert!((metrics.mse - 1.0).abs() < 1e-12);
    assert!((metrics.mar - 1.0).abs() < 1e-12);
}

#[test]
fn run_is_idempotent() {
    let f = write_csv(
        "tree_name,predicted_value,true_value\n\
         tree_7,1.5,2.0\n\
         tree_7,3.25,3.0\n",
    );
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let first = run(&dataset, &config).unwrap();
    let second = run(&dataset, &config).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[test]
fn missing_true_value_column_is_schema_error() {
    let f = write_csv("tree_name,predicted_value\ntree_7,1.0\n");
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let err = run(&dataset, &config).unwrap_err();
    match err {
        EvalError::MissingColumns { missing } => {
            assert_eq!(missing, vec!["true_value".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn no_matching_rows_is_empty_subset_error() {
    let f = write_csv("tree_name,predicted_value,true_value\ntree_8,1.0,2.0\n");
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let err = run(&dataset, &config).unwrap_err();
    assert!(matches!(err, EvalError::EmptySubset { ref target } if target == "tree_7"));
}

#[test]
fn all_rows_missing_values_is_empty_subset_error() {
    let f = write_csv(
        "tree_name,predicted_value,true_value\n\
         tree_7,,2.0\n\
         tree_7,1.0,\n",
    );
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7").unwrap();
    let err = run(&dataset, &config).unwrap_err();
    assert!(matches!(err, EvalError::EmptySubset { .. }));
}

#[test]
fn unreadable_file_is_load_error() {
    let result = CsvReader::new(std::path::Path::new("/nonexistent/res1.csv")).read();
    assert!(matches!(result, Err(IoError::FileNotFound { .. })));
}

// ---------------------------------------------------------------------------
// Renamed columns
// ---------------------------------------------------------------------------

#[test]
fn custom_column_names_evaluate() {
    let f = write_csv("id,y_pred,y_true\ntree_7,1.0,2.0\ntree_7,3.0,3.0\n");
    let dataset = CsvReader::new(f.path()).read().unwrap();
    let config = EvalConfig::new("tree_7")
        .unwrap()
        .with_entity_column("id")
        .with_predicted_column("y_pred")
        .with_true_column("y_true");
    let metrics = run(&dataset, &config).unwrap();
    assert!((metrics.mse - 0.5).abs() < 1e-12);
}
