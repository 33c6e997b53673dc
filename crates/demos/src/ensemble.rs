//! Weighted soft-voting simulation for the ensemble visualization
//!
//! A fixed panel of models votes on a handful of labeled cases. Votes are
//! random (the point of the demo is the combination rule, not the models);
//! the ensemble decision is the confidence- and weight-scaled mean of the
//! votes thresholded at one half.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A voting model with its panel weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelSpec {
    pub name: String,
    pub weight: f64,
}

/// A labeled demo case the panel votes on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledCase {
    pub label: String,
    /// Ground-truth class (0 or 1)
    pub actual: u8,
}

/// One model's vote on one case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelVote {
    pub model: String,
    pub prediction: u8,
    /// Self-reported confidence in [0.7, 1.0)
    pub confidence: f64,
    pub weight: f64,
}

/// A case together with every vote and the combined decision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnsembleOutcome {
    pub id: usize,
    pub label: String,
    pub actual: u8,
    pub votes: Vec<ModelVote>,
    pub prediction: u8,
}

/// Per-model chart row: weight share and accuracy over the simulated cases
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelAccuracy {
    pub name: String,
    pub weight_pct: f64,
    pub accuracy_pct: f64,
}

/// The demo's model panel
pub fn default_panel() -> Vec<ModelSpec> {
    vec![
        ModelSpec {
            name: "Random Forest".to_string(),
            weight: 0.40,
        },
        ModelSpec {
            name: "Neural Network".to_string(),
            weight: 0.35,
        },
        ModelSpec {
            name: "Decision Tree".to_string(),
            weight: 0.25,
        },
    ]
}

/// The demo's labeled cases
pub fn sample_cases() -> Vec<LabeledCase> {
    vec![
        LabeledCase {
            label: "Cat".to_string(),
            actual: 1,
        },
        LabeledCase {
            label: "Dog".to_string(),
            actual: 0,
        },
        LabeledCase {
            label: "Cat".to_string(),
            actual: 1,
        },
    ]
}

/// Weighted soft vote: 1 when the confidence-weighted mean exceeds one half
pub fn combine_votes(votes: &[ModelVote]) -> u8 {
    let total_weight: f64 = votes.iter().map(|vote| vote.weight).sum();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted: f64 = votes
        .iter()
        .map(|vote| f64::from(vote.prediction) * vote.confidence * vote.weight)
        .sum();

    u8::from(weighted / total_weight > 0.5)
}

/// Simulate every model voting on every case
pub fn simulate_votes<R: Rng + ?Sized>(
    rng: &mut R,
    panel: &[ModelSpec],
    cases: &[LabeledCase],
) -> Vec<EnsembleOutcome> {
    cases
        .iter()
        .enumerate()
        .map(|(id, case)| {
            let votes: Vec<ModelVote> = panel
                .iter()
                .map(|model| ModelVote {
                    model: model.name.clone(),
                    prediction: u8::from(rng.gen_bool(0.5)),
                    confidence: rng.gen_range(0.7..1.0),
                    weight: model.weight,
                })
                .collect();

            let prediction = combine_votes(&votes);
            EnsembleOutcome {
                id,
                label: case.label.clone(),
                actual: case.actual,
                votes,
                prediction,
            }
        })
        .collect()
}

/// Aggregate per-model accuracy over a set of outcomes
pub fn model_accuracy(outcomes: &[EnsembleOutcome], panel: &[ModelSpec]) -> Vec<ModelAccuracy> {
    panel
        .iter()
        .map(|model| {
            let mut hits = 0usize;
            let mut total = 0usize;
            for outcome in outcomes {
                if let Some(vote) = outcome.votes.iter().find(|vote| vote.model == model.name) {
                    total += 1;
                    if vote.prediction == outcome.actual {
                        hits += 1;
                    }
                }
            }

            let accuracy_pct = if total == 0 {
                0.0
            } else {
                hits as f64 / total as f64 * 100.0
            };

            ModelAccuracy {
                name: model.name.clone(),
                weight_pct: model.weight * 100.0,
                accuracy_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vote(model: &str, prediction: u8, confidence: f64, weight: f64) -> ModelVote {
        ModelVote {
            model: model.to_string(),
            prediction,
            confidence,
            weight,
        }
    }

    #[test]
    fn unanimous_confident_votes_decide_the_ensemble() {
        let ayes = vec![
            vote("a", 1, 0.9, 0.4),
            vote("b", 1, 0.8, 0.35),
            vote("c", 1, 0.95, 0.25),
        ];
        assert_eq!(combine_votes(&ayes), 1);

        let nays = vec![
            vote("a", 0, 0.9, 0.4),
            vote("b", 0, 0.8, 0.35),
            vote("c", 0, 0.95, 0.25),
        ];
        assert_eq!(combine_votes(&nays), 0);
    }

    #[test]
    fn low_weight_minority_cannot_flip_the_vote() {
        // Only the lightest model votes yes.
        let votes = vec![
            vote("a", 0, 0.9, 0.4),
            vote("b", 0, 0.9, 0.35),
            vote("c", 1, 1.0, 0.25),
        ];
        assert_eq!(combine_votes(&votes), 0);
    }

    #[test]
    fn empty_panel_defaults_to_negative() {
        assert_eq!(combine_votes(&[]), 0);
    }

    #[test]
    fn simulation_covers_every_case_and_model() {
        let mut rng = StdRng::seed_from_u64(33);
        let panel = default_panel();
        let cases = sample_cases();

        let outcomes = simulate_votes(&mut rng, &panel, &cases);
        assert_eq!(outcomes.len(), cases.len());

        for (id, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.id, id);
            assert_eq!(outcome.votes.len(), panel.len());
            for vote in &outcome.votes {
                assert!(vote.prediction <= 1);
                assert!((0.7..1.0).contains(&vote.confidence));
            }
            assert_eq!(outcome.prediction, combine_votes(&outcome.votes));
        }
    }

    #[test]
    fn accuracy_rows_are_consistent_with_votes() {
        let panel = default_panel();
        let outcomes = vec![EnsembleOutcome {
            id: 0,
            label: "Cat".to_string(),
            actual: 1,
            votes: vec![
                vote("Random Forest", 1, 0.9, 0.40),
                vote("Neural Network", 0, 0.8, 0.35),
                vote("Decision Tree", 1, 0.85, 0.25),
            ],
            prediction: 1,
        }];

        let rows = model_accuracy(&outcomes, &panel);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].accuracy_pct, 100.0);
        assert_eq!(rows[1].accuracy_pct, 0.0);
        assert_eq!(rows[2].accuracy_pct, 100.0);
        assert!((rows[0].weight_pct - 40.0).abs() < 1e-9);
    }

    #[test]
    fn outcomes_serialize_as_chart_ready_rows() {
        let mut rng = StdRng::seed_from_u64(5);
        let outcomes = simulate_votes(&mut rng, &default_panel(), &sample_cases());

        let json = serde_json::to_value(&outcomes).unwrap();
        let first = &json[0];
        assert!(first.get("label").is_some());
        assert!(first.get("prediction").is_some());
        assert_eq!(first["votes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn panel_weights_sum_to_one() {
        let total: f64 = default_panel().iter().map(|m| m.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
