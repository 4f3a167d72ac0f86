//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> SeriesResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam`] - Point-loaded rectangular beam (moment, shear, stresses)
//! - [`mechanics`] - Velocity, acceleration, peak force, and work from samples

pub mod beam;
pub mod mechanics;

use serde::{Deserialize, Serialize};

use crate::document::AnalysisSettings;
use crate::errors::SeriesResult;

// Re-export commonly used types
pub use beam::{BeamInput, BeamResult};
pub use mechanics::{MechanicalSample, MechanicsInput, MechanicsResult};

/// Enum wrapper for all calculation types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Point-loaded beam
    Beam(BeamInput),
    /// Sampled motion record
    Mechanics(MechanicsInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Beam(b) => &b.label,
            CalculationItem::Mechanics(m) => &m.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Beam(_) => "Beam",
            CalculationItem::Mechanics(_) => "Mechanics",
        }
    }

    /// Run the calculation
    pub fn run(&self, settings: &AnalysisSettings) -> SeriesResult<CalculationOutcome> {
        match self {
            CalculationItem::Beam(input) => beam::calculate(input, settings).map(CalculationOutcome::Beam),
            CalculationItem::Mechanics(input) => {
                mechanics::calculate(input, settings).map(CalculationOutcome::Mechanics)
            }
        }
    }
}

/// Result of running a [`CalculationItem`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Beam(BeamResult),
    Mechanics(MechanicsResult),
}
