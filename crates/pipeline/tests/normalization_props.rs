//! Property tests for the normalizer over arbitrary batches

use mlviz_pipeline::{normalize_batch, Batch, PipelineError, Record};
use proptest::prelude::*;

fn batch_from(rows: Vec<(u32, u32, u32)>) -> Batch {
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, (age, income, credit_score))| Record {
            id: i as u32 + 1,
            age,
            income,
            credit_score,
        })
        .collect();
    Batch { records }
}

fn constant<T: PartialEq + Copy>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

proptest! {
    #[test]
    fn normalized_fields_stay_in_unit_interval(
        rows in prop::collection::vec(
            (20u32..=69, 30_000u32..=129_999, 500u32..=799),
            2..=8,
        )
    ) {
        let batch = batch_from(rows.clone());

        match normalize_batch(&batch) {
            Ok(normalized) => {
                for record in &normalized {
                    prop_assert!((0.0..=1.0).contains(&record.age));
                    prop_assert!((0.0..=1.0).contains(&record.income));
                    prop_assert!((0.0..=1.0).contains(&record.credit_score));
                }

                // The batch extremes map to exactly 0 and 1.
                let ages: Vec<f64> = normalized.iter().map(|r| r.age).collect();
                prop_assert!(ages.iter().any(|&a| a == 0.0));
                prop_assert!(ages.iter().any(|&a| a == 1.0));
            }
            Err(PipelineError::DegenerateRange { field }) => {
                // Only a genuinely constant column may fail this way.
                let is_constant = match field {
                    "age" => constant(&rows.iter().map(|r| r.0).collect::<Vec<_>>()),
                    "income" => constant(&rows.iter().map(|r| r.1).collect::<Vec<_>>()),
                    "credit_score" => constant(&rows.iter().map(|r| r.2).collect::<Vec<_>>()),
                    other => panic!("unexpected field '{other}'"),
                };
                prop_assert!(is_constant);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn normalization_is_pure(
        rows in prop::collection::vec(
            (0u32..=1_000, 0u32..=1_000_000, 0u32..=1_000),
            2..=6,
        )
    ) {
        let batch = batch_from(rows);
        prop_assert_eq!(normalize_batch(&batch), normalize_batch(&batch));
    }
}
