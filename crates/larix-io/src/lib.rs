//! File I/O and input validation for the larix pipeline.

mod domain;
mod error;
mod reader;

pub use domain::Dataset;
pub use error::IoError;
pub use reader::CsvReader;
