//! Error types for loading, validating and reporting

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before a validation decision can be made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid article count '{input}': enter a whole number of articles")]
    InvalidInput { input: String },

    #[error("No historical data for {publication}")]
    NoHistory { publication: String },
}

/// Errors while loading a historical CSV file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file must contain the columns 'periodico', 'fecha' and 'cantidad' (missing: {})", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Row {row}: invalid cantidad '{value}'")]
    InvalidCount { row: usize, value: String },
}

/// Errors from the operator save workflow
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Select a publication and enter the article count")]
    NoPublication,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors from the auxiliary report views
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("No historical data loaded, load a CSV file first")]
    NoData,

    #[error("Grid weeks must be between 1 and {max}, got {weeks}")]
    InvalidWeeks { weeks: usize, max: usize },
}
