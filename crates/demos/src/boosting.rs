//! Gradient-boosting convergence series for the boosting visualization
//!
//! Fully deterministic toy data: a sine-wave target, a deliberately weak
//! initial estimate, and one refined estimate per boosting iteration. The
//! remaining error halves every iteration, so successive curves approach the
//! target.

use crate::errors::{DemoError, Result};
use serde::{Deserialize, Serialize};

/// Amplitude of the sine target
const AMPLITUDE: f64 = 10.0;
/// Vertical offset of the sine target
const OFFSET: f64 = 20.0;

/// Series generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoostingConfig {
    /// Number of boosting iterations to chart
    pub iterations: usize,
    /// Step size applied to each iteration's residual correction
    pub learning_rate: f64,
    /// Number of x samples in the series
    pub points: usize,
    /// Error of the initial estimate, halved each iteration
    pub base_error: f64,
}

impl Default for BoostingConfig {
    fn default() -> Self {
        Self {
            iterations: 3,
            learning_rate: 0.5,
            points: 20,
            base_error: 10.0,
        }
    }
}

/// One chart point: the target, the initial estimate, and one refined
/// estimate per iteration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoostingPoint {
    pub x: usize,
    /// Target the ensemble is fitting
    pub actual: f64,
    /// Initial weak-learner estimate
    pub initial: f64,
    /// Refined estimate after iteration k (index k-1)
    pub iterations: Vec<f64>,
}

/// Produce the convergence series for the configured iteration count
pub fn convergence_series(config: &BoostingConfig) -> Result<Vec<BoostingPoint>> {
    if !(config.learning_rate > 0.0 && config.learning_rate <= 1.0) {
        return Err(DemoError::LearningRateOutOfRange {
            rate: config.learning_rate,
        });
    }

    let series = (0..config.points)
        .map(|x| {
            let wave = (x as f64 * 0.5).sin();
            let iterations = (1..=config.iterations)
                .map(|k| {
                    let residual = config.base_error / f64::powi(2.0, k as i32);
                    wave * (AMPLITUDE - residual) + OFFSET - residual * config.learning_rate
                })
                .collect();

            BoostingPoint {
                x,
                actual: wave * AMPLITUDE + OFFSET,
                initial: wave * (AMPLITUDE - 2.0) + OFFSET - 2.0,
                iterations,
            }
        })
        .collect();

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_series_has_twenty_points() {
        let series = convergence_series(&BoostingConfig::default()).unwrap();
        assert_eq!(series.len(), 20);
        for (x, point) in series.iter().enumerate() {
            assert_eq!(point.x, x);
            assert_eq!(point.iterations.len(), 3);
        }
    }

    #[test]
    fn series_is_deterministic() {
        let config = BoostingConfig::default();
        assert_eq!(
            convergence_series(&config).unwrap(),
            convergence_series(&config).unwrap()
        );
    }

    #[test]
    fn target_and_initial_match_reference_formulas() {
        let series = convergence_series(&BoostingConfig::default()).unwrap();

        let at_zero = &series[0];
        // sin(0) = 0
        assert_eq!(at_zero.actual, 20.0);
        assert_eq!(at_zero.initial, 18.0);

        let at_three = &series[3];
        let wave = (1.5f64).sin();
        assert!((at_three.actual - (wave * 10.0 + 20.0)).abs() < 1e-12);
        assert!((at_three.initial - (wave * 8.0 + 18.0)).abs() < 1e-12);
    }

    #[test]
    fn error_shrinks_with_each_iteration() {
        let series = convergence_series(&BoostingConfig::default()).unwrap();

        for point in &series {
            let errors: Vec<f64> = point
                .iterations
                .iter()
                .map(|estimate| (estimate - point.actual).abs())
                .collect();
            for pair in errors.windows(2) {
                assert!(pair[1] <= pair[0] + 1e-12);
            }
        }

        // At x = 0 the wave term vanishes, so the error is exactly the
        // scaled residual and strictly decreasing.
        let at_zero = &series[0];
        let errors: Vec<f64> = at_zero
            .iterations
            .iter()
            .map(|estimate| (estimate - at_zero.actual).abs())
            .collect();
        assert!(errors[0] > errors[1]);
        assert!(errors[1] > errors[2]);
    }

    #[test]
    fn learning_rate_bounds_are_enforced() {
        for rate in [0.0, -0.5, 1.5, f64::NAN] {
            let config = BoostingConfig {
                learning_rate: rate,
                ..BoostingConfig::default()
            };
            assert!(matches!(
                convergence_series(&config),
                Err(DemoError::LearningRateOutOfRange { .. })
            ));
        }
    }
}
