//! # Piecewise Accumulation
//!
//! Running sums over ordered samples:
//!
//! - [`superposition`] - point-load moment and shear scans with a maximum
//! - [`work`] - trapezoidal accumulation of force over displacement

pub mod superposition;
pub mod work;

pub use superposition::{
    max_shear, max_superposition, scan_moment, scan_shear, PointLoad, SuperpositionOptions, SuperpositionScan,
};
pub use work::{accumulate_work, max_sample};
