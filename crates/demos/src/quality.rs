//! Column-level data-quality profiling for the data-analysis visualization

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Missing/unique summary of one column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnProfile {
    pub column: String,
    pub total: usize,
    pub missing: usize,
    pub unique: usize,
}

impl ColumnProfile {
    /// Missing answers as a percentage of all responses
    pub fn missing_pct(&self) -> f64 {
        pct(self.missing, self.total)
    }

    /// Distinct answers as a percentage of all responses
    pub fn unique_pct(&self) -> f64 {
        pct(self.unique, self.total)
    }
}

fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Profile one column of optional answers
pub fn profile_column<S: AsRef<str>>(column: &str, values: &[Option<S>]) -> ColumnProfile {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut missing = 0;
    for value in values {
        match value {
            Some(answer) => {
                seen.insert(answer.as_ref());
            }
            None => missing += 1,
        }
    }

    ColumnProfile {
        column: column.to_string(),
        total: values.len(),
        missing,
        unique: seen.len(),
    }
}
