//! # File I/O Module
//!
//! Loads analysis documents and writes documents and reports as JSON.
//!
//! - **Atomic saves**: write to `<name>.tmp`, sync, then rename over the target
//! - **Version validation**: documents from an incompatible schema are rejected
//!
//! ## Example
//!
//! ```rust,no_run
//! use stepwise_core::file_io::{load_document, save_report};
//! use std::path::Path;
//!
//! let doc = load_document(Path::new("lab1.json"))?;
//! let report = doc.run();
//! save_report(&report, Path::new("lab1.report.json"))?;
//! # Ok::<(), stepwise_core::errors::SeriesError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::document::{AnalysisDocument, AnalysisReport, SCHEMA_VERSION};
use crate::errors::{SeriesError, SeriesResult};

/// Load a document from a JSON file.
///
/// # Returns
///
/// * `Ok(AnalysisDocument)` - Successfully loaded document
/// * `Err(SeriesError::VersionMismatch)` - File version is incompatible
/// * `Err(SeriesError::SerializationError)` - Invalid JSON
/// * `Err(SeriesError::FileError)` - I/O error
pub fn load_document(path: &Path) -> SeriesResult<AnalysisDocument> {
    let mut file = File::open(path)
        .map_err(|e| SeriesError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| SeriesError::file_error("read", path.display().to_string(), e.to_string()))?;

    let document: AnalysisDocument =
        serde_json::from_str(&contents).map_err(|e| SeriesError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&document.meta.version)?;

    info!(
        path = %path.display(),
        items = document.item_count(),
        "loaded analysis document"
    );
    Ok(document)
}

/// Save a document with atomic write semantics.
pub fn save_document(document: &AnalysisDocument, path: &Path) -> SeriesResult<()> {
    save_json(document, path)
}

/// Save a report with atomic write semantics.
pub fn save_report(report: &AnalysisReport, path: &Path) -> SeriesResult<()> {
    save_json(report, path)?;
    info!(
        path = %path.display(),
        entries = report.entries.len(),
        failures = report.failure_count(),
        "wrote analysis report"
    );
    Ok(())
}

/// Serialize `value` to pretty JSON and write it atomically.
///
/// 1. Write to a temporary file next to `path`
/// 2. Sync to disk
/// 3. Rename over `path`
fn save_json<T: Serialize>(value: &T, path: &Path) -> SeriesResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| SeriesError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);
    debug!(tmp = %tmp_path.display(), bytes = json.len(), "writing temp file");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        SeriesError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        SeriesError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        SeriesError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SeriesError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// `report.json` -> `report.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> SeriesResult<()> {
    let mismatch = || SeriesError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor version is not readable
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulation::PointLoad;
    use crate::calculations::{BeamInput, CalculationItem};
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("stepwise_test_{}.json", name))
    }

    fn beam_document() -> AnalysisDocument {
        let mut doc = AnalysisDocument::new("File test");
        doc.add_item(CalculationItem::Beam(BeamInput {
            label: "B-1".to_string(),
            length: 10.0,
            width: 1.0,
            height: 1.0,
            elastic_modulus: 1.0,
            loads: vec![PointLoad::new(2.0, 5.0)],
        }));
        doc
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/data/run.json")),
            Path::new("/data/run.json.tmp")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let doc = beam_document();
        save_document(&doc, &path).unwrap();

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.meta.id, doc.meta.id);
        assert_eq!(loaded.meta.title, "File test");
        assert_eq!(loaded.item_count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let report = beam_document().run();
        save_report(&report, &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_and_run_mechanics_item() {
        let path = temp_path("mechanics");
        let json = r#"{
            "meta": { "version": "0.1.0" },
            "items": [{
                "type": "Mechanics",
                "label": "M-1",
                "samples": [
                    { "time": 0.0, "position": 0.0, "force": 1.0 },
                    { "time": 0.1, "position": 0.5, "force": 1.0 }
                ]
            }]
        }"#;
        fs::write(&path, json).unwrap();

        let doc = load_document(&path).unwrap();
        assert!(doc.run().all_completed());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let path = temp_path("bad_json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_document(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
