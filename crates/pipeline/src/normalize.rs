//! Min-max rescaling of a batch to the unit interval
//!
//! Each non-id field is rescaled with `(value - min) / (max - min)` where
//! min and max are taken over the whole batch. A constant field would divide
//! by zero, so it fails fast with [`PipelineError::DegenerateRange`] instead
//! of emitting non-finite values.

use crate::errors::{PipelineError, Result};
use crate::types::{Batch, NormalizedRecord, Record};

/// Normalize every record of a batch field by field
///
/// Pure function; output ordering matches the batch ordering. Records that
/// carry the batch minimum map to exactly 0.0 and the maximum to exactly 1.0.
///
/// # Errors
/// - [`PipelineError::EmptyBatch`] when the batch has no records
/// - [`PipelineError::DegenerateRange`] when a field's min equals its max
pub fn normalize_batch(batch: &Batch) -> Result<Vec<NormalizedRecord>> {
    if batch.is_empty() {
        return Err(PipelineError::EmptyBatch);
    }

    let age = field_span(batch, "age", |r| r.age)?;
    let income = field_span(batch, "income", |r| r.income)?;
    let credit_score = field_span(batch, "credit_score", |r| r.credit_score)?;

    Ok(batch
        .records
        .iter()
        .map(|record| NormalizedRecord {
            id: record.id,
            age: rescale(record.age, age),
            income: rescale(record.income, income),
            credit_score: rescale(record.credit_score, credit_score),
        })
        .collect())
}

/// Min and max of one field across the batch
fn field_span(
    batch: &Batch,
    field: &'static str,
    get: fn(&Record) -> u32,
) -> Result<(f64, f64)> {
    let mut min = u32::MAX;
    let mut max = u32::MIN;
    for record in &batch.records {
        let value = get(record);
        min = min.min(value);
        max = max.max(value);
    }

    if min == max {
        return Err(PipelineError::DegenerateRange { field });
    }
    Ok((f64::from(min), f64::from(max)))
}

fn rescale(value: u32, span: (f64, f64)) -> f64 {
    (f64::from(value) - span.0) / (span.1 - span.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, age: u32, income: u32, credit_score: u32) -> Record {
        Record {
            id,
            age,
            income,
            credit_score,
        }
    }

    #[test]
    fn extremes_map_to_unit_interval_endpoints() {
        let batch = Batch {
            records: vec![
                record(1, 20, 30_000, 500),
                record(2, 69, 129_999, 799),
            ],
        };

        let normalized = normalize_batch(&batch).unwrap();
        assert_eq!(normalized[0].age, 0.0);
        assert_eq!(normalized[0].income, 0.0);
        assert_eq!(normalized[0].credit_score, 0.0);
        assert_eq!(normalized[1].age, 1.0);
        assert_eq!(normalized[1].income, 1.0);
        assert_eq!(normalized[1].credit_score, 1.0);
    }

    #[test]
    fn interior_values_land_between_endpoints() {
        let batch = Batch {
            records: vec![
                record(1, 20, 30_000, 500),
                record(2, 45, 80_000, 650),
                record(3, 70, 130_000, 800),
            ],
        };

        let normalized = normalize_batch(&batch).unwrap();
        assert_eq!(normalized[1].age, 0.5);
        assert_eq!(normalized[1].income, 0.5);
        assert_eq!(normalized[1].credit_score, 0.5);
    }

    #[test]
    fn output_order_matches_input_order() {
        let batch = Batch {
            records: vec![
                record(1, 50, 60_000, 700),
                record(2, 30, 90_000, 600),
                record(3, 40, 40_000, 750),
            ],
        };

        let normalized = normalize_batch(&batch).unwrap();
        let ids: Vec<u32> = normalized.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn normalization_is_idempotent_over_the_same_batch() {
        let batch = Batch {
            records: vec![
                record(1, 25, 45_000, 520),
                record(2, 61, 110_000, 780),
                record(3, 33, 77_000, 640),
            ],
        };

        assert_eq!(
            normalize_batch(&batch).unwrap(),
            normalize_batch(&batch).unwrap()
        );
    }

    #[test]
    fn empty_batch_is_rejected() {
        let batch = Batch::default();
        assert_eq!(normalize_batch(&batch), Err(PipelineError::EmptyBatch));
    }

    #[test]
    fn constant_field_names_the_degenerate_column() {
        let batch = Batch {
            records: vec![
                record(1, 40, 30_000, 500),
                record(2, 40, 129_999, 799),
            ],
        };

        assert_eq!(
            normalize_batch(&batch),
            Err(PipelineError::DegenerateRange { field: "age" })
        );
    }

    #[test]
    fn single_record_batch_is_degenerate() {
        let batch = Batch {
            records: vec![record(1, 40, 60_000, 700)],
        };
        assert!(matches!(
            normalize_batch(&batch),
            Err(PipelineError::DegenerateRange { .. })
        ));
    }
}
