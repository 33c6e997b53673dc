//! Synthetic split-node statistics for the random-forest visualization
//!
//! Grows complete binary trees of split nodes. Class counts per node are
//! random; Gini impurity, entropy, and confidence are computed from the
//! counts so the charts stay internally consistent.

use crate::errors::{DemoError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate split features shown in the demo
pub const SPLIT_FEATURES: [&str; 4] = ["Age", "Income", "Education", "Experience"];

/// Largest tree depth the visualization supports (node count is 2^depth - 1)
pub const MAX_DEPTH: u32 = 10;

/// Forest generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ForestConfig {
    /// Depth of each tree
    pub depth: u32,
    /// Number of trees to grow
    pub tree_count: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            tree_count: 3,
        }
    }
}

/// One split node with its class counts and impurity measures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeNode {
    pub id: usize,
    /// Zero-based level within the complete binary tree
    pub level: u32,
    pub samples: u32,
    pub yes_count: u32,
    pub no_count: u32,
    pub gini: f64,
    pub entropy: f64,
    /// Majority-class share of the node's samples
    pub confidence: f64,
    pub feature: String,
    pub decision: String,
}

/// Gini impurity of a two-class node: `1 - p_yes^2 - p_no^2`
pub fn gini_impurity(yes_count: u32, no_count: u32) -> f64 {
    let total = yes_count + no_count;
    if total == 0 {
        return 0.0;
    }
    let p_yes = f64::from(yes_count) / f64::from(total);
    let p_no = f64::from(no_count) / f64::from(total);
    1.0 - (p_yes * p_yes + p_no * p_no)
}

/// Shannon entropy of a two-class node in bits
pub fn entropy(yes_count: u32, no_count: u32) -> f64 {
    let total = yes_count + no_count;
    if total == 0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for count in [yes_count, no_count] {
        if count == 0 {
            // 0 * log2(0) is taken as 0
            continue;
        }
        let p = f64::from(count) / f64::from(total);
        sum -= p * p.log2();
    }
    sum
}

/// Grow one complete binary tree of synthetic split nodes
///
/// Node ids follow breadth-first order, so `level = floor(log2(id + 1))`.
pub fn grow_tree<R: Rng + ?Sized>(rng: &mut R, config: &ForestConfig) -> Result<Vec<TreeNode>> {
    if config.depth == 0 || config.depth > MAX_DEPTH {
        return Err(DemoError::DepthOutOfRange {
            depth: config.depth,
        });
    }

    let node_count = (1usize << config.depth) - 1;
    let mut nodes = Vec::with_capacity(node_count);
    for id in 0..node_count {
        let level = (id as u32 + 1).ilog2();
        let yes_count = rng.gen_range(25..=74);
        let no_count = rng.gen_range(25..=74);
        let samples = yes_count + no_count;
        let feature = SPLIT_FEATURES[rng.gen_range(0..SPLIT_FEATURES.len())];
        let decision = if yes_count > no_count { "Yes" } else { "No" };

        nodes.push(TreeNode {
            id,
            level,
            samples,
            yes_count,
            no_count,
            gini: gini_impurity(yes_count, no_count),
            entropy: entropy(yes_count, no_count),
            confidence: f64::from(yes_count.max(no_count)) / f64::from(samples),
            feature: feature.to_string(),
            decision: decision.to_string(),
        });
    }

    debug!(depth = config.depth, node_count, "grew demo tree");
    Ok(nodes)
}

/// Grow `tree_count` independent trees
pub fn grow_forest<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ForestConfig,
) -> Result<Vec<Vec<TreeNode>>> {
    (0..config.tree_count)
        .map(|_| grow_tree(rng, config))
        .collect()
}
