//! Common data structures for pipeline stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// One synthetic applicant record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Sequential identifier, unique within a batch (starts at 1)
    pub id: u32,
    /// Age in years
    pub age: u32,
    /// Annual income
    pub income: u32,
    /// Credit score
    pub credit_score: u32,
}

/// An ordered batch of synthetic records
///
/// Immutable once created; a regeneration request replaces the batch
/// wholesale rather than mutating it in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Batch {
    pub records: Vec<Record>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A record with every non-id field rescaled to the unit interval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRecord {
    pub id: u32,
    pub age: f64,
    pub income: f64,
    pub credit_score: f64,
}

/// Binary decision emitted by the scorer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Declined,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approved => write!(f, "Approved"),
            Decision::Declined => write!(f, "Declined"),
        }
    }
}

/// A normalized record together with its score, decision, and confidence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    pub id: u32,
    pub age: f64,
    pub income: f64,
    pub credit_score: f64,
    /// Weighted linear combination of the normalized fields
    pub score: f64,
    pub prediction: Decision,
    /// Score as a percentage with one decimal place, e.g. "73.4%"
    pub confidence: String,
}
