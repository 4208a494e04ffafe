//! JSON export and import of the whole D-Day collection.
//!
//! The export format is an envelope:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "exportedAt": "2025-06-15T09:00:00Z",
//!   "data": [{ "id": "…", "title": "…", "targetDate": "2025-08-01", … }]
//! }
//! ```
//!
//! Import accepts that envelope or a bare array of entries.

use std::collections::HashSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Result, TrackerError},
    models::DDay,
    params::validate_title,
};

/// Format version written into every export.
pub const EXPORT_VERSION: &str = "1.0";

/// Wrapper written by [`export_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub version: String,
    pub exported_at: Timestamp,
    pub data: Vec<DDay>,
}

/// Outcome of parsing an import payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    /// Entries that passed the shape check, in payload order
    pub ddays: Vec<DDay>,
    /// Entries that were dropped
    pub skipped: usize,
}

/// Counts reported after an import has been written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Serializes `ddays` into a pretty-printed export envelope.
pub fn export_json(ddays: Vec<DDay>, exported_at: Timestamp) -> Result<String> {
    let envelope = ExportEnvelope {
        version: EXPORT_VERSION.to_string(),
        exported_at,
        data: ddays,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parses an import payload.
///
/// Each element must deserialize into a [`DDay`] (valid category, strict
/// `YYYY-MM-DD` target date, ISO 8601 timestamps) and carry a title of 1 to
/// 30 characters once trimmed; the trimmed title is what gets kept. Elements that fail, and repeats of an id already seen,
/// are dropped and counted in [`ImportBatch::skipped`].
///
/// # Errors
///
/// * `TrackerError::Import` - the payload is not JSON, or is neither an
///   array nor an object with a `data` array
pub fn parse_import(json: &str) -> Result<ImportBatch> {
    let parsed: Value = serde_json::from_str(json).map_err(|e| TrackerError::Import {
        message: format!("payload is not valid JSON: {e}"),
    })?;

    let entries = match parsed {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(TrackerError::Import {
                    message: "expected an array or an object with a \"data\" array".to_string(),
                });
            }
        },
        _ => {
            return Err(TrackerError::Import {
                message: "expected an array or an object with a \"data\" array".to_string(),
            });
        }
    };

    let mut batch = ImportBatch::default();
    let mut seen = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let mut dday = match serde_json::from_value::<DDay>(entry) {
            Ok(dday) => dday,
            Err(e) => {
                log::warn!("Skipping import entry {index}: {e}");
                batch.skipped += 1;
                continue;
            }
        };

        match validate_title(&dday.title) {
            Ok(title) => dday.title = title,
            Err(e) => {
                log::warn!("Skipping import entry {index}: {e}");
                batch.skipped += 1;
                continue;
            }
        }

        if !seen.insert(dday.id.clone()) {
            log::warn!("Skipping import entry {index}: duplicate id {}", dday.id);
            batch.skipped += 1;
            continue;
        }

        batch.ddays.push(dday);
    }

    Ok(batch)
}
