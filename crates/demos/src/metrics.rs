//! Classification metrics over confusion counts

use serde::{Deserialize, Serialize};

/// Outcome counts of a binary classifier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: u32,
    pub false_positives: u32,
    pub true_negatives: u32,
    pub false_negatives: u32,
}

impl ConfusionCounts {
    /// Share of all predictions that were correct
    pub fn accuracy(&self) -> f64 {
        ratio(
            self.true_positives + self.true_negatives,
            self.true_positives + self.false_positives + self.true_negatives
                + self.false_negatives,
        )
    }

    /// Share of positive predictions that were correct
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// Share of actual positives that were found
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// Harmonic mean of precision and recall
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / (precision + recall)
    }
}

/// Guarded division; an empty denominator counts as zero
fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(tp: u32, fp: u32, tn: u32, fn_: u32) -> ConfusionCounts {
        ConfusionCounts {
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
        }
    }

    #[test]
    fn perfect_classifier_scores_one_everywhere() {
        let perfect = counts(10, 0, 10, 0);
        assert_eq!(perfect.accuracy(), 1.0);
        assert_eq!(perfect.precision(), 1.0);
        assert_eq!(perfect.recall(), 1.0);
        assert_eq!(perfect.f1(), 1.0);
    }

    #[test]
    fn known_mixed_counts() {
        // 80 correct out of 100; precision and recall both 40/50
        let mixed = counts(40, 10, 40, 10);
        assert_eq!(mixed.accuracy(), 0.8);
        assert_eq!(mixed.precision(), 0.8);
        assert_eq!(mixed.recall(), 0.8);
        assert!((mixed.f1() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn empty_counts_yield_zero_not_nan() {
        let empty = ConfusionCounts::default();
        assert_eq!(empty.accuracy(), 0.0);
        assert_eq!(empty.precision(), 0.0);
        assert_eq!(empty.recall(), 0.0);
        assert_eq!(empty.f1(), 0.0);
    }

    #[test]
    fn never_predicting_positive_zeroes_precision_and_recall() {
        let timid = counts(0, 0, 90, 10);
        assert_eq!(timid.accuracy(), 0.9);
        assert_eq!(timid.precision(), 0.0);
        assert_eq!(timid.recall(), 0.0);
        assert_eq!(timid.f1(), 0.0);
    }
}
