//! Error types for freight quotations

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, FreightError>;

/// Main error type for freight quotations
///
/// Cost computation itself never fails; these errors come from loading,
/// validating and looking up pricing data.
#[derive(Error, Debug)]
pub enum FreightError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown destination or other missing data
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input files
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
