//! # Mechanical Motion From Samples
//!
//! Takes time-stamped (position, force) readings and derives:
//!
//! - velocity from position (first difference)
//! - acceleration from velocity (second difference)
//! - the peak force and when it occurred
//! - work done, `∫ F dx`, by trapezoidal accumulation
//!
//! Samples must be taken at a uniform time step. The step comes from the
//! input if given, else from [`AnalysisSettings::time_step`].
//!
//! ## Example
//!
//! ```rust
//! use stepwise_core::calculations::mechanics::{calculate, MechanicalSample, MechanicsInput};
//! use stepwise_core::document::AnalysisSettings;
//!
//! let input = MechanicsInput {
//!     label: "Cart".to_string(),
//!     time_step: Some(1.0),
//!     samples: vec![
//!         MechanicalSample::new(0.0, 0.0, 10.0),
//!         MechanicalSample::new(1.0, 2.0, 10.0),
//!     ],
//! };
//!
//! let result = calculate(&input, &AnalysisSettings::default()).unwrap();
//! assert_eq!(result.work_done, 20.0);
//! assert_eq!(result.velocity.samples()[0].y, 2.0);
//! assert!(result.acceleration.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::accumulation::work::{accumulate_work, max_sample};
use crate::derivative::derive_with_tolerance;
use crate::document::AnalysisSettings;
use crate::errors::{SeriesError, SeriesResult};
use crate::series::{Sample, SampleSeries};

/// One reading: time, position, and applied force
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanicalSample {
    pub time: f64,
    pub position: f64,
    pub force: f64,
}

impl MechanicalSample {
    pub fn new(time: f64, position: f64, force: f64) -> Self {
        MechanicalSample { time, position, force }
    }
}

/// Input parameters for a motion analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cart",
///   "time_step": 0.1,
///   "samples": [
///     { "time": 0.0, "position": 0.0, "force": 10.0 },
///     { "time": 0.1, "position": 0.05, "force": 12.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanicsInput {
    /// User label for this data set
    pub label: String,

    /// Sampling interval; falls back to the document setting when absent
    #[serde(default)]
    pub time_step: Option<f64>,

    /// Readings in time order
    pub samples: Vec<MechanicalSample>,
}

impl MechanicsInput {
    /// Check that there is data to analyze
    pub fn validate(&self) -> SeriesResult<()> {
        if self.samples.is_empty() {
            return Err(SeriesError::empty_input(format!("mechanics input '{}'", self.label)));
        }
        Ok(())
    }

    /// (time, position) series
    pub fn position_series(&self) -> SeriesResult<SampleSeries> {
        SampleSeries::from_pairs(self.samples.iter().map(|s| (s.time, s.position)))
    }

    /// (time, force) series
    pub fn force_series(&self) -> SeriesResult<SampleSeries> {
        SampleSeries::from_pairs(self.samples.iter().map(|s| (s.time, s.force)))
    }

    /// Step used for differencing
    pub fn effective_time_step(&self, settings: &AnalysisSettings) -> f64 {
        self.time_step.unwrap_or(settings.time_step)
    }
}

/// Results from a motion analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanicsResult {
    /// Time step the derivatives were taken at
    pub time_step: f64,

    /// (midpoint time, velocity)
    pub velocity: SampleSeries,

    /// (midpoint time, acceleration)
    pub acceleration: SampleSeries,

    /// (time, force) of the peak force
    pub max_force: Sample,

    /// Trapezoidal work over the whole record
    pub work_done: f64,
}

/// Run the motion analysis.
///
/// # Errors
///
/// * `EmptyInput` - no samples
/// * `InvalidArgument` - non-positive step, or times not strictly increasing
/// * `NonUniformSampling` - a time gap differs from the step
pub fn calculate(input: &MechanicsInput, settings: &AnalysisSettings) -> SeriesResult<MechanicsResult> {
    input.validate()?;

    let time_step = input.effective_time_step(settings);
    let position = input.position_series()?;
    let force = input.force_series()?;

    let velocity = derive_with_tolerance(&position, time_step, settings.step_tolerance)?;
    let acceleration = derive_with_tolerance(&velocity, time_step, settings.step_tolerance)?;

    Ok(MechanicsResult {
        time_step,
        velocity,
        acceleration,
        max_force: max_sample(&force)?,
        work_done: accumulate_work(&force, &position)?,
    })
}
