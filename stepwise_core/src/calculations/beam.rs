//! # Beam Under Point Loads
//!
//! Rectangular beam loaded by point forces. The governing moment and shear
//! come from the superposition scan in
//! [`accumulation::superposition`](crate::accumulation::superposition); this
//! module adds the section properties and the resulting stresses.
//!
//! ## Section Properties (rectangular b × h)
//!
//! - Moment of inertia `I = b h³ / 12`
//! - Extreme fiber distance `y_max = h / 2`
//! - First moment of area at the neutral axis `Q = b h² / 8`
//! - Section modulus `S = I / y_max`
//!
//! ## Stresses
//!
//! - Bending `σ = M y_max / I`
//! - Shear `τ = V Q / (I b)`
//!
//! Units are whatever the caller uses consistently; nothing is converted.
//! Deflection is not computed.
//!
//! ## Example
//!
//! ```rust
//! use stepwise_core::accumulation::PointLoad;
//! use stepwise_core::calculations::beam::{calculate, BeamInput};
//! use stepwise_core::document::AnalysisSettings;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     length: 10.0,
//!     width: 0.1,
//!     height: 0.2,
//!     elastic_modulus: 200e9,
//!     loads: vec![PointLoad::new(2.0, 5.0), PointLoad::new(7.0, 3.0)],
//! };
//!
//! let result = calculate(&input, &AnalysisSettings::default()).unwrap();
//! assert_eq!(result.max_moment, 49.0);
//! assert_eq!(result.max_shear, 8.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::accumulation::superposition::{scan_moment, scan_shear, PointLoad};
use crate::document::AnalysisSettings;
use crate::errors::{SeriesError, SeriesResult};
use crate::series::SampleSeries;

/// Input parameters for a beam analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "length": 10.0,
///   "width": 0.1,
///   "height": 0.2,
///   "elastic_modulus": 200000000000.0,
///   "loads": [
///     { "position": 2.0, "magnitude": 5.0 },
///     { "position": 7.0, "magnitude": 3.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam
    pub label: String,

    /// Beam length
    pub length: f64,

    /// Section width b
    pub width: f64,

    /// Section height h
    pub height: f64,

    /// Elastic modulus E of the material
    pub elastic_modulus: f64,

    /// Point loads, in any order
    #[serde(default)]
    pub loads: Vec<PointLoad>,
}

impl BeamInput {
    /// Validate geometry and material. Load positions are checked by the scan.
    pub fn validate(&self) -> SeriesResult<()> {
        let fields = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("elastic_modulus", self.elastic_modulus),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SeriesError::invalid_argument(
                    field,
                    value.to_string(),
                    "Must be a positive, finite number",
                ));
            }
        }
        Ok(())
    }

    /// Moment of inertia I = bh³/12
    pub fn moment_of_inertia(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Distance from neutral axis to extreme fiber
    pub fn y_max(&self) -> f64 {
        self.height / 2.0
    }

    /// First moment of area above the neutral axis Q = bh²/8
    pub fn first_moment(&self) -> f64 {
        self.width * self.height.powi(2) / 8.0
    }

    /// Section modulus S = bh²/6
    pub fn section_modulus(&self) -> f64 {
        self.moment_of_inertia() / self.y_max()
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.elastic_modulus * self.moment_of_inertia()
    }
}

/// Results from a beam analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResult {
    // === Demand ===
    /// Maximum superposed moment
    pub max_moment: f64,

    /// Position of the maximum moment
    pub max_moment_position: f64,

    /// Maximum superposed shear
    pub max_shear: f64,

    /// Position of the maximum shear
    pub max_shear_position: f64,

    // === Stresses ===
    /// Bending stress at the extreme fiber, σ = M y_max / I
    pub max_bending_stress: f64,

    /// Shear stress at the neutral axis, τ = V Q / (I b)
    pub max_shear_stress: f64,

    // === Section Properties (for reference) ===
    pub moment_of_inertia: f64,
    pub section_modulus: f64,
    pub first_moment: f64,
    pub y_max: f64,
    pub flexural_rigidity: f64,

    /// Moment at each candidate point
    pub moment_diagram: SampleSeries,
}

/// Run the beam analysis.
///
/// `settings.allow_negative_moment` selects whether maxima are floored at 0.
///
/// # Errors
///
/// * `InvalidArgument` - bad geometry, or a load outside `[0, length]`
pub fn calculate(input: &BeamInput, settings: &AnalysisSettings) -> SeriesResult<BeamResult> {
    input.validate()?;

    let options = settings.superposition_options();
    let moment = scan_moment(input.length, &input.loads, options)?;
    let shear = scan_shear(input.length, &input.loads, options)?;

    let moment_of_inertia = input.moment_of_inertia();
    let y_max = input.y_max();
    let first_moment = input.first_moment();

    Ok(BeamResult {
        max_moment: moment.maximum,
        max_moment_position: moment.position,
        max_shear: shear.maximum,
        max_shear_position: shear.position,
        max_bending_stress: moment.maximum * y_max / moment_of_inertia,
        max_shear_stress: shear.maximum * first_moment / (moment_of_inertia * input.width),
        moment_of_inertia,
        section_modulus: input.section_modulus(),
        first_moment,
        y_max,
        flexural_rigidity: input.flexural_rigidity(),
        moment_diagram: moment.diagram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn test_beam() -> BeamInput {
        BeamInput {
            label: "B-1".to_string(),
            length: 10.0,
            width: 0.1,
            height: 0.2,
            elastic_modulus: 200e9,
            loads: vec![PointLoad::new(2.0, 5.0), PointLoad::new(7.0, 3.0)],
        }
    }

    #[test]
    fn test_section_properties() {
        let beam = test_beam();
        // I = 0.1 * 0.008 / 12
        assert!(approx_eq(beam.moment_of_inertia(), 6.666_666_666_666_667e-5, EPSILON));
        assert!(approx_eq(beam.y_max(), 0.1, EPSILON));
        // Q = 0.1 * 0.04 / 8
        assert!(approx_eq(beam.first_moment(), 5.0e-4, EPSILON));
        // S = bh²/6
        assert!(approx_eq(beam.section_modulus(), 0.1 * 0.04 / 6.0, EPSILON));
    }

    #[test]
    fn test_demand_and_stresses() {
        let beam = test_beam();
        let result = calculate(&beam, &AnalysisSettings::default()).unwrap();

        assert_eq!(result.max_moment, 49.0);
        assert_eq!(result.max_moment_position, 10.0);
        assert_eq!(result.max_shear, 8.0);

        // σ = M / S
        assert!(approx_eq(result.max_bending_stress, 49.0 / beam.section_modulus(), EPSILON));
        // τ = 1.5 V / (b h) for a rectangle
        assert!(approx_eq(result.max_shear_stress, 1.5 * 8.0 / (0.1 * 0.2), EPSILON));
        assert_eq!(result.moment_diagram.len(), 4);
    }

    #[test]
    fn test_unloaded_beam() {
        let mut beam = test_beam();
        beam.loads.clear();
        let result = calculate(&beam, &AnalysisSettings::default()).unwrap();
        assert_eq!(result.max_moment, 0.0);
        assert_eq!(result.max_bending_stress, 0.0);
    }

    #[test]
    fn test_validation() {
        let mut beam = test_beam();
        beam.height = 0.0;
        let err = calculate(&beam, &AnalysisSettings::default()).unwrap_err();
        match err {
            SeriesError::InvalidArgument { field, .. } => assert_eq!(field, "height"),
            other => panic!("unexpected error: {:?}", other),
        }

        let mut beam = test_beam();
        beam.loads.push(PointLoad::new(-1.0, 2.0));
        assert!(calculate(&beam, &AnalysisSettings::default()).is_err());
    }

    #[test]
    fn test_input_json_defaults_loads() {
        let json = r#"{"label":"B-2","length":4.0,"width":1.0,"height":2.0,"elastic_modulus":1.0}"#;
        let input: BeamInput = serde_json::from_str(json).unwrap();
        assert!(input.loads.is_empty());
    }
}
