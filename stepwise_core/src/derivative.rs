//! # Finite-Difference Derivative
//!
//! Midpoint finite differences over a uniformly sampled series. Each output
//! sample sits at the instant centered between its two source samples:
//!
//! ```text
//! x'[i] = (x[i-1] + x[i]) / 2
//! y'[i] = (y[i] - y[i-1]) / step
//! ```
//!
//! The denominator is always the declared `step`. Every gap in the input is
//! checked against it first, and a series that is not sampled at that step
//! is rejected with [`SeriesError::NonUniformSampling`] instead of producing
//! a silently scaled result.
//!
//! The midpoints of a uniform series are uniform with the same step, so the
//! output can be fed straight back in (position → velocity → acceleration).
//!
//! ## Example
//!
//! ```rust
//! use stepwise_core::derivative::derive;
//! use stepwise_core::series::SampleSeries;
//!
//! // x(t) = 2t sampled every 0.5 s
//! let position = SampleSeries::from_pairs([(0.0, 0.0), (0.5, 1.0), (1.0, 2.0)]).unwrap();
//!
//! let velocity = derive(&position, 0.5).unwrap();
//! assert_eq!(velocity.len(), 2);
//! assert_eq!(velocity.samples()[0].x, 0.25);
//! assert_eq!(velocity.samples()[0].y, 2.0);
//!
//! let acceleration = derive(&velocity, 0.5).unwrap();
//! assert_eq!(acceleration.samples()[0].y, 0.0);
//! ```

use crate::errors::{SeriesError, SeriesResult};
use crate::series::{Sample, SampleSeries};

/// Relative tolerance applied to each sample gap when checking uniformity
pub const DEFAULT_STEP_TOLERANCE: f64 = 1e-6;

/// Differentiate `series` at a uniform `step`.
///
/// Returns `len - 1` samples, or an empty series for fewer than two input
/// samples. Uses [`DEFAULT_STEP_TOLERANCE`] for the uniformity check.
///
/// # Errors
///
/// * `InvalidArgument` - `step` is zero, negative, or not finite
/// * `NonUniformSampling` - some gap differs from `step`
pub fn derive(series: &SampleSeries, step: f64) -> SeriesResult<SampleSeries> {
    derive_with_tolerance(series, step, DEFAULT_STEP_TOLERANCE)
}

/// Same as [`derive`] with an explicit relative gap tolerance.
///
/// A gap `g` is accepted when `|g - step| <= tolerance * step`.
pub fn derive_with_tolerance(series: &SampleSeries, step: f64, tolerance: f64) -> SeriesResult<SampleSeries> {
    check_step(step)?;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(SeriesError::invalid_argument(
            "tolerance",
            tolerance.to_string(),
            "Tolerance must be finite and non-negative",
        ));
    }

    if series.len() < 2 {
        return Ok(SampleSeries::empty());
    }

    let mut derived = Vec::with_capacity(series.len() - 1);
    for (i, (prev, curr)) in series.pairs().enumerate() {
        let gap = curr.x - prev.x;
        if (gap - step).abs() > tolerance * step {
            return Err(SeriesError::NonUniformSampling {
                index: i + 1,
                expected: step,
                actual: gap,
            });
        }

        derived.push(Sample {
            x: (prev.x + curr.x) / 2.0,
            y: (curr.y - prev.y) / step,
        });
    }

    Ok(SampleSeries::from_ordered(derived))
}

fn check_step(step: f64) -> SeriesResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SeriesError::invalid_argument(
            "step",
            step.to_string(),
            "Step must be a positive, finite number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn uniform(step: f64, values: &[f64]) -> SampleSeries {
        SampleSeries::from_pairs(values.iter().enumerate().map(|(i, &y)| (i as f64 * step, y))).unwrap()
    }

    #[test]
    fn test_output_length_and_midpoints() {
        let series = uniform(0.1, &[0.0, 1.0, 4.0, 9.0, 16.0]);
        let derived = derive(&series, 0.1).unwrap();

        assert_eq!(derived.len(), 4);
        for (out, (a, b)) in derived.iter().zip(series.pairs()) {
            assert!((out.x - (a.x + b.x) / 2.0).abs() < TOL);
        }
    }

    #[test]
    fn test_difference_values() {
        let series = uniform(0.5, &[0.0, 1.0, 4.0]);
        let derived = derive(&series, 0.5).unwrap();
        assert_eq!(derived.values(), vec![2.0, 6.0]);
    }

    #[test]
    fn test_constant_velocity_has_zero_acceleration() {
        // x(t) = 3t + 1, sampled at 0.1 s
        let position = SampleSeries::from_pairs((0..20).map(|i| {
            let t = i as f64 * 0.1;
            (t, 3.0 * t + 1.0)
        }))
        .unwrap();

        let velocity = derive(&position, 0.1).unwrap();
        assert!(velocity.iter().all(|s| (s.y - 3.0).abs() < 1e-6));

        let acceleration = derive(&velocity, 0.1).unwrap();
        assert_eq!(acceleration.len(), 18);
        assert!(acceleration.iter().all(|s| s.y.abs() < 1e-6));
    }

    #[test]
    fn test_singleton_and_empty_give_empty() {
        let single = SampleSeries::from_pairs([(0.0, 5.0)]).unwrap();
        assert!(derive(&single, 0.1).unwrap().is_empty());
        assert!(derive(&SampleSeries::empty(), 0.1).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let series = uniform(0.1, &[0.0, 1.0]);
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = derive(&series, step).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        }
    }

    #[test]
    fn test_step_checked_even_for_short_series() {
        assert!(derive(&SampleSeries::empty(), 0.0).is_err());
    }

    #[test]
    fn test_rejects_non_uniform_gaps() {
        let series = SampleSeries::from_pairs([(0.0, 0.0), (0.1, 1.0), (0.3, 2.0)]).unwrap();
        let err = derive(&series, 0.1).unwrap_err();
        match err {
            SeriesError::NonUniformSampling { index, expected, actual } => {
                assert_eq!(index, 2);
                assert_eq!(expected, 0.1);
                assert!((actual - 0.2).abs() < TOL);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_loose_tolerance_accepts_jitter() {
        let series = SampleSeries::from_pairs([(0.0, 0.0), (0.101, 1.0), (0.2, 2.0)]).unwrap();
        assert!(derive(&series, 0.1).is_err());
        assert_eq!(derive_with_tolerance(&series, 0.1, 0.05).unwrap().len(), 2);
    }

    #[test]
    fn test_input_untouched() {
        let series = uniform(1.0, &[1.0, 2.0, 4.0]);
        let before = series.clone();
        let _ = derive(&series, 1.0).unwrap();
        assert_eq!(series, before);
    }
}
