// crates/cli/src/snapshot.rs
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::runner::TextEntry;
use crate::settings::{DisplaySettings, DisplayedStats};

/// Which report variant the saved values were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSettings {
    pub include_space: bool,
    pub include_markup: bool,
}

impl From<&DisplaySettings> for SnapshotSettings {
    fn from(settings: &DisplaySettings) -> Self {
        Self {
            include_space: !settings.spaces.is_excluded(),
            include_markup: !settings.markup.is_excluded(),
        }
    }
}

/// One saved input: the displayed values at the time of saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub source: String,
    #[serde(flatten)]
    pub stats: DisplayedStats,
    pub settings: SnapshotSettings,
    pub saved_at: DateTime<Utc>,
}

impl SnapshotEntry {
    #[must_use]
    pub fn capture(entry: &TextEntry, settings: &DisplaySettings, saved_at: DateTime<Utc>) -> Self {
        Self {
            source: entry.source.clone(),
            stats: settings.resolve(&entry.report),
            settings: settings.into(),
            saved_at,
        }
    }
}

/// Writes a snapshot of `entries` as a pretty JSON array.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn save(path: &Path, entries: &[TextEntry], settings: &DisplaySettings) -> Result<()> {
    let now = Utc::now();
    let snapshot: Vec<SnapshotEntry> = entries
        .iter()
        .map(|e| SnapshotEntry::capture(e, settings, now))
        .collect();

    let write_err = |source| AppError::Write { path: path.to_path_buf(), source };
    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::info!("saved {} entries to {}", snapshot.len(), path.display());
    Ok(())
}

/// Reads a snapshot file written by [`save`].
///
/// # Errors
///
/// Returns an error when the file cannot be opened or is not a snapshot array.
pub fn load(path: &Path) -> Result<Vec<SnapshotEntry>> {
    let file = File::open(path).map_err(|e| {
        AppError::Comparison(format!("cannot open snapshot '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::Comparison(format!("'{}' is not a valid snapshot: {e}", path.display()))
    })
}
