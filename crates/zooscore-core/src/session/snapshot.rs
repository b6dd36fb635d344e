//! Snapshot encoding and restore overlay.
//!
//! A snapshot is the full session document serialized to JSON and stored
//! under a single key. Restoring works through [`SnapshotOverlay`], an
//! all-optional mirror of the document's top-level fields: fields present in
//! the persisted snapshot overwrite the in-memory document, fields absent
//! from it keep their current values. The merge is shallow and top-level
//! only.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::session::model::{Round, SessionDocument, Setup};

/// Fixed suffix appended to the configured prefix to form the storage key.
const SNAPSHOT_KEY_SUFFIX: &str = "store";

/// Builds the storage key for the session snapshot from the configured
/// application prefix.
pub fn snapshot_key(prefix: &str) -> String {
    format!("{prefix}{SNAPSHOT_KEY_SUFFIX}")
}

/// Serializes the full document to its stored JSON form.
pub fn encode(document: &SessionDocument) -> Result<String> {
    Ok(serde_json::to_string(document)?)
}

/// Top-level fields of a persisted snapshot, each optional so that a partial
/// snapshot can be merged onto a default document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotOverlay {
    /// Persisted UI language, if present.
    pub language: Option<String>,
    /// Persisted font scale, if present.
    pub base_font_size: Option<f64>,
    /// Persisted game setup, if present.
    pub setup: Option<Setup>,
    /// Persisted round records, if present.
    pub rounds: Option<BTreeMap<u32, Round>>,
}

impl SnapshotOverlay {
    /// Parses a stored snapshot string into an overlay.
    pub fn decode(snapshot: &str) -> Result<Self> {
        Ok(serde_json::from_str(snapshot)?)
    }

    /// Applies the overlay onto `document`: persisted fields win, absent
    /// fields leave the document untouched.
    pub fn apply_to(self, document: &mut SessionDocument) {
        if let Some(language) = self.language {
            document.language = language;
        }
        if let Some(base_font_size) = self.base_font_size {
            document.base_font_size = base_font_size;
        }
        if let Some(setup) = self.setup {
            document.setup = setup;
        }
        if let Some(rounds) = self.rounds {
            document.rounds = rounds;
        }
    }
}
