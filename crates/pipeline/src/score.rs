//! Weighted scoring of normalized records

use crate::config::ScoreWeights;
use crate::types::{Decision, NormalizedRecord, PredictionRecord};

/// Score normalized records with a fixed-weight linear combination
///
/// Pure and order-preserving. With the default weights the score stays in
/// [0, 1] whenever the inputs came from the normalizer.
pub fn predict_batch(
    records: &[NormalizedRecord],
    weights: &ScoreWeights,
) -> Vec<PredictionRecord> {
    records
        .iter()
        .map(|record| {
            let score = weights.age * record.age
                + weights.income * record.income
                + weights.credit_score * record.credit_score;

            let prediction = if score > weights.approval_threshold {
                Decision::Approved
            } else {
                Decision::Declined
            };

            PredictionRecord {
                id: record.id,
                age: record.age,
                income: record.income,
                credit_score: record.credit_score,
                score,
                prediction,
                confidence: format!("{:.1}%", score * 100.0),
            }
        })
        .collect()
}
