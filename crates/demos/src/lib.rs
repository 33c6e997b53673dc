//! Demo-data generators for the ML concept visualizations
//!
//! Each module produces the serializable rows or chart series behind one
//! visualization; rendering is someone else's job.
//!
//! Modules:
//! - `forest`: Split-node statistics for the random-forest walkthrough
//! - `boosting`: Deterministic gradient-boosting convergence series
//! - `ensemble`: Weighted soft-voting simulation
//! - `encode`: Label, ordinal, and binary categorical encoders
//! - `buckets`: Age/income/date bucketing transforms
//! - `metrics`: Classification metrics over confusion counts
//! - `quality`: Column-level missing/unique profiling
//! - `errors`: Error types

pub mod boosting;
pub mod buckets;
pub mod encode;
pub mod ensemble;
pub mod errors;
pub mod forest;
pub mod metrics;
pub mod quality;

pub use boosting::{convergence_series, BoostingConfig, BoostingPoint};
pub use buckets::{age_group, income_bracket, season, season_of, AgeGroup, IncomeBracket, Season};
pub use encode::{binary_encode, label_encode, ordinal_encode};
pub use ensemble::{
    combine_votes, default_panel, model_accuracy, sample_cases, simulate_votes, EnsembleOutcome,
    LabeledCase, ModelAccuracy, ModelSpec, ModelVote,
};
pub use errors::{DemoError, Result};
pub use forest::{
    entropy, gini_impurity, grow_forest, grow_tree, ForestConfig, TreeNode, MAX_DEPTH,
    SPLIT_FEATURES,
};
pub use metrics::ConfusionCounts;
pub use quality::{profile_column, ColumnProfile};

/// Crate version string for metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
