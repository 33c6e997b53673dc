//! Error types for the demo-data generators

use thiserror::Error;

/// Errors that can occur while producing demo data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemoError {
    /// A value had no code in the requested encoding
    #[error("Unknown category: '{value}'")]
    UnknownCategory { value: String },

    /// Requested tree depth cannot be rendered
    #[error("Tree depth must be between 1 and 10, got {depth}")]
    DepthOutOfRange { depth: u32 },

    /// Learning rate outside the usable interval
    #[error("Learning rate must be in (0, 1], got {rate}")]
    LearningRateOutOfRange { rate: f64 },

    /// A date string could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for demo-data operations
pub type Result<T> = std::result::Result<T, DemoError>;
