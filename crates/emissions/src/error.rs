//! Error types for the emissions library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for emissions operations.
#[derive(Debug, Error)]
pub enum EmissionsError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required attribute is missing from a dataset element.
    #[error("Missing required attribute '{attr}' on element '{element}'")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
    },

    /// The document parsed but does not have the expected shape.
    #[error("Invalid dataset structure: {0}")]
    InvalidStructure(String),

    /// Empty dataset or no data for the requested operation.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// No region has the given ordinal.
    #[error("Region #{0} not found")]
    RegionNotFound(usize),

    /// No distinct source has the given ordinal.
    #[error("Source #{0} not found")]
    SourceNotFound(usize),

    /// A report was requested before its region or source was chosen.
    #[error("No {0} selected")]
    NotSelected(&'static str),

    /// Start year is after end year, or the text is not a year range.
    #[error("Invalid year range: {0}")]
    InvalidYearRange(String),

    /// A requested year lies outside the dataset's observed range.
    #[error("Year {year} is outside the dataset range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for emissions operations.
pub type Result<T> = std::result::Result<T, EmissionsError>;
