//! Configuration for batch generation and scoring
//!
//! Defaults carry the demo's reference constants; a caller (or a TOML file
//! loaded by the CLI) may override any of them, so everything is validated
//! after deserialization.

use crate::errors::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive value range for one generated field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldRange {
    pub min: u32,
    pub max: u32,
}

impl FieldRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Batch generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Age range (years)
    pub age: FieldRange,
    /// Annual income range
    pub income: FieldRange,
    /// Credit score range
    pub credit_score: FieldRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            age: FieldRange::new(20, 69),
            income: FieldRange::new(30_000, 129_999),
            credit_score: FieldRange::new(500, 799),
        }
    }
}

/// Scoring weights and decision threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    pub age: f64,
    pub income: f64,
    pub credit_score: f64,
    /// Scores strictly above this threshold are approved
    pub approval_threshold: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            age: 0.3,
            income: 0.4,
            credit_score: 0.3,
            approval_threshold: 0.5,
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub generator: GeneratorConfig,
    pub weights: ScoreWeights,
}

impl PipelineConfig {
    /// Validate ranges and weights, typically after loading overrides
    pub fn validate(&self) -> Result<()> {
        if self.generator.batch_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "batch_size must be at least 1".into(),
            ));
        }

        for (name, range) in [
            ("age", self.generator.age),
            ("income", self.generator.income),
            ("credit_score", self.generator.credit_score),
        ] {
            if range.min > range.max {
                return Err(PipelineError::InvalidConfig(format!(
                    "range for '{name}' has min {} above max {}",
                    range.min, range.max
                )));
            }
        }

        for (name, weight) in [
            ("age", self.weights.age),
            ("income", self.weights.income),
            ("credit_score", self.weights.credit_score),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PipelineError::InvalidConfig(format!(
                    "weight for '{name}' must be finite and non-negative, got {weight}"
                )));
            }
        }

        if !self.weights.approval_threshold.is_finite() {
            return Err(PipelineError::InvalidConfig(
                "approval_threshold must be finite".into(),
            ));
        }

        Ok(())
    }
}
