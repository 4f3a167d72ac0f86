//! # Analysis Documents
//!
//! An `AnalysisDocument` is the unit of work: a set of calculations plus the
//! settings they run under. Documents serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! AnalysisDocument
//! ├── meta: DocumentMetadata (version, id, title, created)
//! ├── settings: AnalysisSettings (time step, floor option, tolerance)
//! └── items: Vec<CalculationItem> (run in order)
//! ```
//!
//! Running a document produces an [`AnalysisReport`] with one entry per
//! item. A failing item is recorded in its entry and does not stop the rest.
//!
//! ## Example
//!
//! ```rust
//! use stepwise_core::accumulation::PointLoad;
//! use stepwise_core::calculations::{BeamInput, CalculationItem};
//! use stepwise_core::document::AnalysisDocument;
//!
//! let mut doc = AnalysisDocument::new("Bench test");
//! doc.add_item(CalculationItem::Beam(BeamInput {
//!     label: "B-1".to_string(),
//!     length: 10.0,
//!     width: 0.1,
//!     height: 0.2,
//!     elastic_modulus: 200e9,
//!     loads: vec![PointLoad::new(2.0, 5.0)],
//! }));
//!
//! let report = doc.run();
//! assert_eq!(report.entries.len(), 1);
//! assert_eq!(report.failure_count(), 0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accumulation::SuperpositionOptions;
use crate::calculations::{CalculationItem, CalculationOutcome};
use crate::derivative::DEFAULT_STEP_TOLERANCE;
use crate::errors::{SeriesError, SeriesResult};

/// Current schema version for document files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default sampling interval in seconds
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Root document container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDocument {
    /// Document metadata (version, id, title)
    pub meta: DocumentMetadata,

    /// Settings shared by every item
    #[serde(default)]
    pub settings: AnalysisSettings,

    /// Calculations, run in order
    #[serde(default)]
    pub items: Vec<CalculationItem>,
}

impl AnalysisDocument {
    /// Create a new empty document
    pub fn new(title: impl Into<String>) -> Self {
        AnalysisDocument {
            meta: DocumentMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                title: title.into(),
                created: Utc::now(),
            },
            settings: AnalysisSettings::default(),
            items: Vec::new(),
        }
    }

    /// Append a calculation item
    pub fn add_item(&mut self, item: CalculationItem) {
        self.items.push(item);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Run every item under the document settings.
    ///
    /// Invalid settings fail every entry with the same error.
    pub fn run(&self) -> AnalysisReport {
        let settings_check = self.settings.validate();
        let entries = self
            .items
            .iter()
            .map(|item| {
                let status = match settings_check.clone().and_then(|_| item.run(&self.settings)) {
                    Ok(outcome) => EntryStatus::Completed(outcome),
                    Err(error) => EntryStatus::Failed(error),
                };
                ReportEntry {
                    label: item.label().to_string(),
                    calc_type: item.calc_type().to_string(),
                    status,
                }
            })
            .collect();

        AnalysisReport {
            document_id: self.meta.id,
            title: self.meta.title.clone(),
            generated: Utc::now(),
            settings: self.settings.clone(),
            entries,
        }
    }
}

impl Default for AnalysisDocument {
    fn default() -> Self {
        AnalysisDocument::new("")
    }
}

/// Document metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Stable identifier, carried into reports
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Free-form title
    #[serde(default)]
    pub title: String,

    /// When the document was created
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

/// Settings shared by all calculations in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Sampling interval for items that do not declare their own
    pub time_step: f64,

    /// Report negative superposition maxima instead of flooring at zero
    pub allow_negative_moment: bool,

    /// Relative tolerance when checking that samples are uniformly spaced
    pub step_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            time_step: DEFAULT_TIME_STEP,
            allow_negative_moment: false,
            step_tolerance: DEFAULT_STEP_TOLERANCE,
        }
    }
}

impl AnalysisSettings {
    /// Validate settings values
    pub fn validate(&self) -> SeriesResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SeriesError::invalid_argument(
                "settings.time_step",
                self.time_step.to_string(),
                "Time step must be positive",
            ));
        }
        if !self.step_tolerance.is_finite() || self.step_tolerance < 0.0 {
            return Err(SeriesError::invalid_argument(
                "settings.step_tolerance",
                self.step_tolerance.to_string(),
                "Tolerance must be non-negative",
            ));
        }
        Ok(())
    }

    /// Options for superposition scans
    pub fn superposition_options(&self) -> SuperpositionOptions {
        SuperpositionOptions {
            allow_negative: self.allow_negative_moment,
        }
    }
}

/// Output of [`AnalysisDocument::run`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Id of the document that produced this report
    pub document_id: Uuid,
    pub title: String,
    pub generated: DateTime<Utc>,
    /// Settings the items ran under
    pub settings: AnalysisSettings,
    pub entries: Vec<ReportEntry>,
}

impl AnalysisReport {
    /// Number of entries that failed
    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_failed()).count()
    }

    pub fn all_completed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Report line for a single item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub calc_type: String,
    pub status: EntryStatus,
}

/// Outcome of one item: a result or a structured error
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "data")]
pub enum EntryStatus {
    Completed(CalculationOutcome),
    Failed(SeriesError),
}

impl EntryStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, EntryStatus::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulation::PointLoad;
    use crate::calculations::{BeamInput, MechanicalSample, MechanicsInput};

    fn sample_document() -> AnalysisDocument {
        let mut doc = AnalysisDocument::new("Lab 1");
        doc.add_item(CalculationItem::Beam(BeamInput {
            label: "B-1".to_string(),
            length: 10.0,
            width: 1.0,
            height: 1.0,
            elastic_modulus: 1.0,
            loads: vec![PointLoad::new(2.0, 5.0), PointLoad::new(7.0, 3.0)],
        }));
        doc.add_item(CalculationItem::Mechanics(MechanicsInput {
            label: "Cart".to_string(),
            time_step: Some(1.0),
            samples: vec![
                MechanicalSample::new(0.0, 0.0, 10.0),
                MechanicalSample::new(1.0, 2.0, 10.0),
            ],
        }));
        doc
    }

    #[test]
    fn test_document_creation() {
        let doc = AnalysisDocument::new("Lab 1");
        assert_eq!(doc.meta.version, SCHEMA_VERSION);
        assert_eq!(doc.meta.title, "Lab 1");
        assert_eq!(doc.settings, AnalysisSettings::default());
        assert_eq!(doc.item_count(), 0);
    }

    #[test]
    fn test_run_all_items() {
        let doc = sample_document();
        let report = doc.run();

        assert_eq!(report.document_id, doc.meta.id);
        assert_eq!(report.entries.len(), 2);
        assert!(report.all_completed());
        assert_eq!(report.entries[1].calc_type, "Mechanics");
    }

    #[test]
    fn test_failed_item_does_not_stop_others() {
        let mut doc = sample_document();
        doc.add_item(CalculationItem::Mechanics(MechanicsInput {
            label: "Empty".to_string(),
            time_step: None,
            samples: Vec::new(),
        }));

        let report = doc.run();
        assert_eq!(report.failure_count(), 1);
        match &report.entries[2].status {
            EntryStatus::Failed(error) => assert_eq!(error.error_code(), "EMPTY_INPUT"),
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_settings_fail_every_item() {
        let mut doc = sample_document();
        doc.settings.time_step = 0.0;
        let report = doc.run();
        assert_eq!(report.failure_count(), 2);
    }

    #[test]
    fn test_settings_defaults_from_partial_json() {
        let settings: AnalysisSettings = serde_json::from_str(r#"{"allow_negative_moment":true}"#).unwrap();
        assert!(settings.allow_negative_moment);
        assert_eq!(settings.time_step, DEFAULT_TIME_STEP);
        assert_eq!(settings.step_tolerance, DEFAULT_STEP_TOLERANCE);
    }

    #[test]
    fn test_minimal_document_json() {
        let json = r#"{ "meta": { "version": "0.1.0" }, "items": [] }"#;
        let doc: AnalysisDocument = serde_json::from_str(json).unwrap();
        assert!(doc.meta.title.is_empty());
        assert_eq!(doc.settings, AnalysisSettings::default());
    }

    #[test]
    fn test_report_serialization() {
        let report = sample_document().run();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"status\": \"Completed\""));
        assert!(json.contains("\"work_done\": 20.0"));

        let roundtrip: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.entries.len(), 2);
    }
}
