//! Trapezoidal Work Accumulation
//!
//! Approximates `∫ F dx` from a force series and a position series that share
//! the same sample instants:
//!
//! ```text
//! W = Σ (F[i-1] + F[i]) / 2 · (p[i] - p[i-1])
//! ```
//!
//! Pairing is by index. Both series must be aligned to the same instants
//! before the call; the routine checks that x agrees at every index and
//! reports [`SeriesError::MisalignedSamples`] if not.

use crate::errors::{SeriesError, SeriesResult};
use crate::series::{Sample, SampleSeries};

/// Tolerance for matching x-values across paired series (scaled by magnitude)
pub const ALIGNMENT_TOLERANCE: f64 = 1e-9;

/// Total work done by `force` over the displacement in `position`.
///
/// # Errors
///
/// * `LengthMismatch` - the series have different lengths
/// * `MisalignedSamples` - x differs at some index
///
/// # Example
///
/// ```rust
/// use stepwise_core::accumulation::work::accumulate_work;
/// use stepwise_core::series::SampleSeries;
///
/// let force = SampleSeries::from_pairs([(0.0, 10.0), (1.0, 10.0)]).unwrap();
/// let position = SampleSeries::from_pairs([(0.0, 0.0), (1.0, 2.0)]).unwrap();
///
/// assert_eq!(accumulate_work(&force, &position).unwrap(), 20.0);
/// ```
pub fn accumulate_work(force: &SampleSeries, position: &SampleSeries) -> SeriesResult<f64> {
    if force.len() != position.len() {
        return Err(SeriesError::LengthMismatch {
            left: force.len(),
            right: position.len(),
        });
    }

    check_alignment(force, position)?;

    let total = force
        .pairs()
        .zip(position.pairs())
        .map(|((f_prev, f_curr), (p_prev, p_curr))| {
            let avg_force = (f_prev.y + f_curr.y) / 2.0;
            avg_force * (p_curr.y - p_prev.y)
        })
        .sum();

    Ok(total)
}

/// Sample with the largest y-value. Ties keep the earliest sample.
///
/// # Errors
///
/// * `EmptyInput` - the series has no samples
pub fn max_sample(series: &SampleSeries) -> SeriesResult<Sample> {
    let mut iter = series.iter();
    let first = *iter
        .next()
        .ok_or_else(|| SeriesError::empty_input("maximum search"))?;

    Ok(iter.fold(first, |best, s| if s.y > best.y { *s } else { best }))
}

fn check_alignment(left: &SampleSeries, right: &SampleSeries) -> SeriesResult<()> {
    for (index, (a, b)) in left.iter().zip(right.iter()).enumerate() {
        let scale = 1.0_f64.max(a.x.abs()).max(b.x.abs());
        if (a.x - b.x).abs() > ALIGNMENT_TOLERANCE * scale {
            return Err(SeriesError::MisalignedSamples {
                index,
                left: a.x,
                right: b.x,
            });
        }
    }
    Ok(())
}
