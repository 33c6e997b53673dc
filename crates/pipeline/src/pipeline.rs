//! Stage controller for the prediction-pipeline demo
//!
//! Owns the three cached stage outputs (batch, normalized records,
//! predictions) and computes each at most once per batch. Downstream slots
//! are cleared whenever an upstream slot is replaced or cleared, so the
//! dependency chain can never dangle.

use crate::config::PipelineConfig;
use crate::errors::Result;
use crate::normalize::normalize_batch;
use crate::sample::generate_batch;
use crate::score::predict_batch;
use crate::types::{Batch, NormalizedRecord, PredictionRecord};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// The three ordered pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Input,
    Preprocess,
    Predict,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 3] = [Stage::Input, Stage::Preprocess, Stage::Predict];

    pub fn index(self) -> usize {
        match self {
            Stage::Input => 0,
            Stage::Preprocess => 1,
            Stage::Predict => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Stage> {
        Stage::ALL.get(index).copied()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Input => write!(f, "Input"),
            Stage::Preprocess => write!(f, "Preprocess"),
            Stage::Predict => write!(f, "Predict"),
        }
    }
}

/// Stage controller owning the cached pipeline slots
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    stage: Stage,
    batch: Option<Batch>,
    normalized: Option<Vec<NormalizedRecord>>,
    predictions: Option<Vec<PredictionRecord>>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            stage: Stage::Input,
            batch: None,
            normalized: None,
            predictions: None,
        }
    }

    /// Currently displayed stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn batch(&self) -> Option<&Batch> {
        self.batch.as_ref()
    }

    pub fn normalized(&self) -> Option<&[NormalizedRecord]> {
        self.normalized.as_deref()
    }

    pub fn predictions(&self) -> Option<&[PredictionRecord]> {
        self.predictions.as_deref()
    }

    /// Switch to a stage, computing its output if the prerequisite is cached
    /// and the output is not
    ///
    /// The stage change itself always takes effect. Selecting a stage whose
    /// prerequisite is missing computes nothing and succeeds; the dependent
    /// output simply stays empty. A normalization failure (degenerate or
    /// empty batch) propagates and leaves the slot empty.
    pub fn select_stage<R: Rng + ?Sized>(&mut self, stage: Stage, rng: &mut R) -> Result<()> {
        self.stage = stage;
        debug!(stage = %stage, "stage selected");

        match stage {
            Stage::Input => {
                if self.batch.is_none() {
                    self.replace_batch(rng);
                }
            }
            Stage::Preprocess => {
                if self.normalized.is_none() {
                    if let Some(batch) = &self.batch {
                        match normalize_batch(batch) {
                            Ok(records) => self.normalized = Some(records),
                            Err(err) => {
                                warn!(error = %err, "normalization failed; stage output left empty");
                                return Err(err);
                            }
                        }
                    }
                }
            }
            Stage::Predict => {
                if self.predictions.is_none() {
                    if let Some(normalized) = &self.normalized {
                        self.predictions = Some(predict_batch(normalized, &self.config.weights));
                    }
                }
            }
        }

        Ok(())
    }

    /// Replace the batch with freshly generated data, invalidating both
    /// downstream slots; the displayed stage is unchanged
    pub fn generate_new_data<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.replace_batch(rng);
    }

    /// Clear every cached slot and return to the input stage
    pub fn reset(&mut self) {
        self.stage = Stage::Input;
        self.batch = None;
        self.normalized = None;
        self.predictions = None;
        debug!("pipeline reset");
    }

    fn replace_batch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.batch = Some(generate_batch(rng, &self.config.generator));
        self.normalized = None;
        self.predictions = None;
    }
}
