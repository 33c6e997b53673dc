//! Prediction-pipeline demo engine
//!
//! The data half of an educational machine-learning walkthrough: synthetic
//! record batches, per-field min-max normalization, and fixed-weight linear
//! scoring, gated by a three-stage controller that computes each stage at
//! most once per batch.
//!
//! Modules:
//! - `types`: Record and batch data structures shared by the stages
//! - `config`: Generation ranges, scoring weights, and validation
//! - `sample`: Synthetic batch generation from an injected random source
//! - `normalize`: Per-field min-max rescaling over a batch
//! - `score`: Weighted linear scoring with decision and confidence
//! - `pipeline`: Stage controller owning the cached stage outputs
//! - `errors`: Error types

pub mod config;
pub mod errors;
pub mod normalize;
pub mod pipeline;
pub mod sample;
pub mod score;
pub mod types;

pub use config::{FieldRange, GeneratorConfig, PipelineConfig, ScoreWeights};
pub use errors::{PipelineError, Result};
pub use normalize::normalize_batch;
pub use pipeline::{Pipeline, Stage};
pub use sample::generate_batch;
pub use score::predict_batch;
pub use types::{Batch, Decision, NormalizedRecord, PredictionRecord, Record};

use rand::Rng;

/// Crate version string for metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run generation, normalization, and scoring end to end on a fresh batch
///
/// Convenience for callers that do not need the staged controller.
pub fn score_fresh_batch<R: Rng + ?Sized>(
    rng: &mut R,
    config: &PipelineConfig,
) -> Result<Vec<PredictionRecord>> {
    let batch = generate_batch(rng, &config.generator);
    let normalized = normalize_batch(&batch)?;
    Ok(predict_batch(&normalized, &config.weights))
}
