//! Error types for the pipeline engine

use thiserror::Error;

/// Errors that can occur while computing pipeline stages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Normalization was asked to run over a batch with no records
    #[error("Cannot normalize an empty batch")]
    EmptyBatch,

    /// A field was constant across the batch, so min-max rescaling is undefined
    #[error("Field '{field}' is constant across the batch; min-max rescale is undefined")]
    DegenerateRange { field: &'static str },

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
