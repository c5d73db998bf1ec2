//! # File I/O Module
//!
//! Scenario files are read, CSV exports are written:
//! - **Version validation**: scenario files carry a schema version
//! - **Atomic writes**: the export goes to a `.tmp` sibling, is synced, then
//!   renamed over the target
//!
//! ## Scenario Format
//!
//! A scenario is pretty-printed JSON: the schema version followed by the
//! [`RoiInput`] sections. Any section or field left out takes its default.
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "profile": { "employees": 80, "currency": "GBP" },
//!   "methods": { "payroll": "manual" }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use roi_core::file_io::load_scenario;
//! use std::path::Path;
//!
//! let input = load_scenario(Path::new("acme.roi.json"))?;
//! println!("{} employees", input.profile.employees);
//! # Ok::<(), roi_core::errors::RoiError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{RoiError, RoiResult};
use crate::questionnaire::RoiInput;

/// Current scenario schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// On-disk scenario document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Schema version the file was written with
    pub version: String,

    /// Questionnaire answers
    #[serde(flatten)]
    pub input: RoiInput,
}

impl Scenario {
    /// Wrap an input with the current schema version
    pub fn new(input: RoiInput) -> Self {
        Scenario {
            version: SCHEMA_VERSION.to_string(),
            input,
        }
    }
}

/// Pretty JSON for a scenario, as printed by `roi template`.
pub fn scenario_json(input: &RoiInput) -> RoiResult<String> {
    Ok(serde_json::to_string_pretty(&Scenario::new(input.clone()))?)
}

/// Parse scenario JSON and check its version.
///
/// # Returns
///
/// * `Ok(RoiInput)` - Parsed input, defaults filled in
/// * `Err(RoiError::VersionMismatch)` - Version is incompatible
/// * `Err(RoiError::SerializationError)` - Invalid JSON
pub fn parse_scenario(json: &str) -> RoiResult<RoiInput> {
    let scenario: Scenario = serde_json::from_str(json)?;
    validate_version(&scenario.version)?;
    Ok(scenario.input)
}

/// Load a scenario file.
///
/// # Returns
///
/// * `Ok(RoiInput)` - Successfully loaded input
/// * `Err(RoiError::VersionMismatch)` - File version is incompatible
/// * `Err(RoiError::SerializationError)` - Invalid JSON
/// * `Err(RoiError::FileError)` - I/O error
pub fn load_scenario(path: &Path) -> RoiResult<RoiInput> {
    let mut file = File::open(path)
        .map_err(|e| RoiError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| RoiError::file_error("read", path.display().to_string(), e.to_string()))?;

    let input = parse_scenario(&contents).map_err(|e| match e {
        RoiError::SerializationError { reason } => {
            RoiError::serialization(format!("Invalid JSON in {}: {}", path.display(), reason))
        }
        other => other,
    })?;

    log::debug!(
        "Loaded scenario from {} ({} employees, {})",
        path.display(),
        input.profile.employees,
        input.profile.currency
    );
    Ok(input)
}

/// Write CSV export text to a file, atomically.
pub fn write_export(path: &Path, csv: &str) -> RoiResult<()> {
    write_atomic(path, csv.as_bytes())?;
    log::debug!("Wrote export to {} ({} bytes)", path.display(), csv.len());
    Ok(())
}

/// Write to `<path>.tmp`, sync, then rename over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> RoiResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        RoiError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        RoiError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        RoiError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        RoiError::file_error("rename to final", path.display().to_string(), e.to_string())
    })
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match. While the schema is 0.x, a file with a newer
/// minor version is rejected.
pub fn validate_version(file_version: &str) -> RoiResult<()> {
    let mismatch = || RoiError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.trim().parse().ok()).collect() };
    let file_parts = parse(file_version).filter(|p| !p.is_empty()).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0 {
        let file_minor = file_parts.get(1).copied().unwrap_or(0);
        let current_minor = current_parts.get(1).copied().unwrap_or(0);
        if file_minor > current_minor {
            return Err(mismatch());
        }
    }

    Ok(())
}
