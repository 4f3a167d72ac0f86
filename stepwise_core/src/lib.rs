//! # stepwise_core - Discrete-Series Numeric Pipeline
//!
//! `stepwise_core` turns ordered samples into derived quantities: finite
//! differences (position → velocity → acceleration), superposition scans over
//! point loads (bending moment, shear), and trapezoidal accumulation (work).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types with indices and values
//! - **Quiet Core**: Only the file layer logs; calculations never log or print
//!
//! ## Quick Start
//!
//! ```rust
//! use stepwise_core::derivative::derive;
//! use stepwise_core::series::SampleSeries;
//!
//! let position = SampleSeries::from_pairs([(0.0, 0.0), (0.1, 0.2), (0.2, 0.4)]).unwrap();
//! let velocity = derive(&position, 0.1).unwrap();
//! assert_eq!(velocity.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`series`] - Samples and ordered sample series
//! - [`derivative`] - Midpoint finite differences
//! - [`accumulation`] - Superposition scans and trapezoidal work
//! - [`calculations`] - Beam and mechanics calculations built on the pipeline
//! - [`document`] - Analysis documents, settings, and reports
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON load and atomic save

pub mod accumulation;
pub mod calculations;
pub mod derivative;
pub mod document;
pub mod errors;
pub mod file_io;
pub mod series;

// Re-export commonly used types at crate root for convenience
pub use document::{AnalysisDocument, AnalysisReport, AnalysisSettings};
pub use errors::{SeriesError, SeriesResult};
pub use file_io::{load_document, save_document, save_report};
pub use series::{Sample, SampleSeries};
