//! # Samples and Sample Series
//!
//! A [`Sample`] is one (x, y) reading: a position at a time, a force at a
//! time, a velocity at a midpoint instant. A [`SampleSeries`] is an ordered,
//! immutable run of samples with strictly increasing x.
//!
//! ## JSON Shape
//!
//! A series serializes as a plain array of samples:
//!
//! ```json
//! [ { "x": 0.0, "y": 0.0 }, { "x": 0.1, "y": 0.5 } ]
//! ```
//!
//! Deserialization runs the same checks as [`SampleSeries::new`], so a file
//! with decreasing x is rejected at load time.
//!
//! ## Example
//!
//! ```rust
//! use stepwise_core::series::SampleSeries;
//!
//! let series = SampleSeries::from_pairs([(0.0, 1.0), (0.1, 1.5), (0.2, 2.5)]).unwrap();
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.last().map(|s| s.y), Some(2.5));
//!
//! // x must strictly increase
//! assert!(SampleSeries::from_pairs([(0.2, 1.0), (0.1, 1.5)]).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SeriesError, SeriesResult};

/// A single (x, y) data point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Independent coordinate (time in s, or position along a member)
    pub x: f64,
    /// Measured quantity at `x`
    pub y: f64,
}

impl Sample {
    /// Create a sample
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Sample { x, y }
    }
}

/// Ordered sequence of samples with strictly increasing x.
///
/// May be empty; operations that need a sample say so in their errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Build a series, checking that every coordinate is finite and x
    /// strictly increases.
    pub fn new(samples: Vec<Sample>) -> SeriesResult<Self> {
        for (i, sample) in samples.iter().enumerate() {
            if !sample.x.is_finite() || !sample.y.is_finite() {
                return Err(SeriesError::invalid_argument(
                    format!("samples[{}]", i),
                    format!("({}, {})", sample.x, sample.y),
                    "Sample coordinates must be finite",
                ));
            }
        }

        if let Some(i) = samples.windows(2).position(|w| w[1].x <= w[0].x) {
            return Err(SeriesError::invalid_argument(
                format!("samples[{}].x", i + 1),
                samples[i + 1].x.to_string(),
                format!("x must be strictly increasing (previous x = {})", samples[i].x),
            ));
        }

        Ok(SampleSeries { samples })
    }

    /// Build a series from `(x, y)` pairs
    pub fn from_pairs<I>(pairs: I) -> SeriesResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(pairs.into_iter().map(Sample::from).collect())
    }

    /// Wrap samples already known to be ordered (pipeline outputs)
    pub(crate) fn from_ordered(samples: Vec<Sample>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
        SampleSeries { samples }
    }

    /// An empty series
    pub fn empty() -> Self {
        SampleSeries::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the samples in order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Adjacent `(previous, current)` pairs, in index order
    pub fn pairs(&self) -> impl Iterator<Item = (&Sample, &Sample)> + '_ {
        self.samples.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// All y-values in index order
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Consume the series, returning the samples
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for SampleSeries {
    type Error = SeriesError;

    fn try_from(samples: Vec<Sample>) -> SeriesResult<Self> {
        SampleSeries::new(samples)
    }
}

impl From<SampleSeries> for Vec<Sample> {
    fn from(series: SampleSeries) -> Self {
        series.samples
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
