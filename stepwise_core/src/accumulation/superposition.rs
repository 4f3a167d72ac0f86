//! Superposition Scan for Point Loads
//!
//! Evaluates the combined effect of several point loads at a set of
//! candidate points and reports the largest value.
//!
//! ## Model
//!
//! Each load contributes only to the right of where it is applied:
//!
//! ```text
//! moment(x) = Σ  P·(x - a)      over loads (a, P) with a <= x
//! shear(x)  = Σ  P              over loads (a, P) with a <= x
//! ```
//!
//! Candidate points are `{0} ∪ {load positions} ∪ {length}`, sorted and
//! deduplicated. Support reactions are not part of the model.
//!
//! ## Floor at Zero
//!
//! By default the running maximum starts at 0, so a scan whose values are all
//! negative reports 0. Set [`SuperpositionOptions::allow_negative`] to start
//! from negative infinity instead. The x = 0 candidate always has zero
//! moment, so moment scans never go below 0 either way. Shear scans can:
//! a negative load applied at x = 0 is negative from the first candidate on.
//!
//! ## Example
//! ```rust
//! use stepwise_core::accumulation::superposition::{max_superposition, PointLoad, SuperpositionOptions};
//!
//! let loads = [PointLoad::new(2.0, 5.0), PointLoad::new(7.0, 3.0)];
//! let max = max_superposition(10.0, &loads, SuperpositionOptions::default()).unwrap();
//!
//! // moment(10) = 5*8 + 3*3
//! assert_eq!(max, 49.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SeriesError, SeriesResult};
use crate::series::{Sample, SampleSeries};

/// A point force applied along a member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end (0 <= position <= length)
    pub position: f64,
    /// Load magnitude (sign is kept as given)
    pub magnitude: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(position: f64, magnitude: f64) -> Self {
        PointLoad { position, magnitude }
    }

    /// Moment contribution at `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        if self.position <= x {
            self.magnitude * (x - self.position)
        } else {
            0.0
        }
    }

    /// Shear contribution at `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        if self.position <= x {
            self.magnitude
        } else {
            0.0
        }
    }
}

/// Options for superposition scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuperpositionOptions {
    /// Report negative maxima instead of flooring at zero
    pub allow_negative: bool,
}

/// Result of scanning every candidate point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperpositionScan {
    /// Largest value found (floored at 0 unless negatives are allowed)
    pub maximum: f64,
    /// Candidate point where `maximum` was first reached
    pub position: f64,
    /// (x, value) for every candidate point, in x order
    pub diagram: SampleSeries,
}

/// Total moment at `x` from all loads
pub fn moment_at(x: f64, loads: &[PointLoad]) -> f64 {
    loads.iter().map(|load| load.moment_at(x)).sum()
}

/// Total shear at `x` from all loads
pub fn shear_at(x: f64, loads: &[PointLoad]) -> f64 {
    loads.iter().map(|load| load.shear_at(x)).sum()
}

/// Candidate evaluation points: 0, every load position, and `length`
pub fn candidate_points(length: f64, loads: &[PointLoad]) -> Vec<f64> {
    let mut points = Vec::with_capacity(loads.len() + 2);
    points.push(0.0);
    points.extend(loads.iter().map(|load| load.position));
    points.push(length);

    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup();
    points
}

/// Maximum superposed moment over the candidate points
pub fn max_superposition(length: f64, loads: &[PointLoad], options: SuperpositionOptions) -> SeriesResult<f64> {
    scan_moment(length, loads, options).map(|scan| scan.maximum)
}

/// Moment scan with governing position and diagram
pub fn scan_moment(length: f64, loads: &[PointLoad], options: SuperpositionOptions) -> SeriesResult<SuperpositionScan> {
    validate_loads(length, loads)?;
    Ok(scan(length, loads, options, moment_at))
}

/// Shear scan with governing position and diagram
pub fn scan_shear(length: f64, loads: &[PointLoad], options: SuperpositionOptions) -> SeriesResult<SuperpositionScan> {
    validate_loads(length, loads)?;
    Ok(scan(length, loads, options, shear_at))
}

/// Maximum superposed shear over the candidate points
pub fn max_shear(length: f64, loads: &[PointLoad], options: SuperpositionOptions) -> SeriesResult<f64> {
    scan_shear(length, loads, options).map(|scan| scan.maximum)
}

fn scan<F>(length: f64, loads: &[PointLoad], options: SuperpositionOptions, value_at: F) -> SuperpositionScan
where
    F: Fn(f64, &[PointLoad]) -> f64,
{
    let mut maximum = if options.allow_negative { f64::NEG_INFINITY } else { 0.0 };
    let mut position = 0.0;
    let mut diagram = Vec::new();

    for x in candidate_points(length, loads) {
        let value = value_at(x, loads);
        diagram.push(Sample::new(x, value));
        if value > maximum {
            maximum = value;
            position = x;
        }
    }

    SuperpositionScan {
        maximum,
        position,
        diagram: SampleSeries::from_ordered(diagram),
    }
}

fn validate_loads(length: f64, loads: &[PointLoad]) -> SeriesResult<()> {
    if !length.is_finite() || length <= 0.0 {
        return Err(SeriesError::invalid_argument(
            "length",
            length.to_string(),
            "Length must be positive",
        ));
    }

    for (i, load) in loads.iter().enumerate() {
        if !load.position.is_finite() || load.position < 0.0 || load.position > length {
            return Err(SeriesError::invalid_argument(
                format!("loads[{}].position", i),
                load.position.to_string(),
                format!("Position must lie within [0, {}]", length),
            ));
        }
        if !load.magnitude.is_finite() {
            return Err(SeriesError::invalid_argument(
                format!("loads[{}].magnitude", i),
                load.magnitude.to_string(),
                "Magnitude must be finite",
            ));
        }
    }

    Ok(())
}
