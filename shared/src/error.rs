//! Error types for the analysis pipelines

use thiserror::Error;

use crate::models::Nutrient;

/// Failures a pipeline run can end with
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Reading for {nutrient} is not a number: {value}")]
    InvalidReading { nutrient: Nutrient, value: f64 },

    #[error("Reading for {nutrient} ({value}) is outside [{min}, {max}]")]
    OutOfBounds {
        nutrient: Nutrient,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Analysis provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for AnalysisError {
    fn from(err: config::ConfigError) -> Self {
        AnalysisError::Configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AnalysisError {
    fn from(err: validator::ValidationErrors) -> Self {
        AnalysisError::Configuration(err.to_string())
    }
}

/// Result type alias for pipeline operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
