// crates/cli/src/compare.rs
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::settings::DisplayedStats;
use crate::snapshot::{self, SnapshotEntry};

/// Signed changes of the count columns between two snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delta {
    pub words: i64,
    pub characters: i64,
    pub special_characters: i64,
    pub sentences: i64,
    pub paragraphs: i64,
}

impl Delta {
    fn between(old: &DisplayedStats, new: &DisplayedStats) -> Self {
        Self {
            words: new.words.delta_since(old.words),
            characters: new.characters.delta_since(old.characters),
            special_characters: new.special_characters.delta_since(old.special_characters),
            sentences: new.sentences.delta_since(old.sentences),
            paragraphs: new.paragraphs.delta_since(old.paragraphs),
        }
    }

    fn added(stats: &DisplayedStats) -> Self {
        Self::between(&zeroed(stats), stats)
    }

    fn removed(stats: &DisplayedStats) -> Self {
        Self::between(stats, &zeroed(stats))
    }

    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn accumulate(&mut self, other: Self) {
        self.words = self.words.saturating_add(other.words);
        self.characters = self.characters.saturating_add(other.characters);
        self.special_characters = self.special_characters.saturating_add(other.special_characters);
        self.sentences = self.sentences.saturating_add(other.sentences);
        self.paragraphs = self.paragraphs.saturating_add(other.paragraphs);
    }
}

fn zeroed(stats: &DisplayedStats) -> DisplayedStats {
    DisplayedStats {
        words: Default::default(),
        characters: Default::default(),
        special_characters: Default::default(),
        sentences: Default::default(),
        paragraphs: Default::default(),
        ..*stats
    }
}

#[derive(Debug, Default)]
pub struct ComparisonSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub delta: Delta,
    /// Sources whose two entries were taken with different space/markup settings.
    pub settings_mismatches: Vec<String>,
}

#[derive(Debug)]
pub enum EntryDiff<'a> {
    Added(&'a SnapshotEntry),
    Removed(&'a SnapshotEntry),
    Modified {
        source: &'a str,
        old: &'a SnapshotEntry,
        new: &'a SnapshotEntry,
        delta: Delta,
    },
}

impl EntryDiff<'_> {
    fn source(&self) -> &str {
        match self {
            Self::Added(e) | Self::Removed(e) => &e.source,
            Self::Modified { source, .. } => source,
        }
    }
}

/// Loads two snapshot files and renders their differences.
///
/// # Errors
///
/// Returns an error when either snapshot cannot be loaded.
pub fn compare_snapshots(old_path: &Path, new_path: &Path) -> Result<String> {
    let old = snapshot::load(old_path)?;
    let new = snapshot::load(new_path)?;
    log::debug!(
        "comparing {} entries in {} with {} entries in {}",
        old.len(),
        old_path.display(),
        new.len(),
        new_path.display()
    );

    let (diffs, summary) = compare_entries(&old, &new);
    for source in &summary.settings_mismatches {
        log::warn!("{source}: snapshots were saved with different space/markup settings");
    }
    Ok(render_comparison(&diffs, &summary)?)
}

/// Matches entries by source.
pub fn compare_entries<'a>(
    old: &'a [SnapshotEntry],
    new: &'a [SnapshotEntry],
) -> (Vec<EntryDiff<'a>>, ComparisonSummary) {
    let old_map: HashMap<&str, &SnapshotEntry> =
        old.iter().map(|e| (e.source.as_str(), e)).collect();
    let new_map: HashMap<&str, &SnapshotEntry> =
        new.iter().map(|e| (e.source.as_str(), e)).collect();

    let mut diffs = Vec::new();
    let mut summary = ComparisonSummary::default();

    for (&source, &old_e) in &old_map {
        match new_map.get(source) {
            Some(&new_e) => {
                if old_e.settings != new_e.settings {
                    summary.settings_mismatches.push(source.to_string());
                }
                let delta = Delta::between(&old_e.stats, &new_e.stats);
                if delta.is_zero() && old_e.stats.reading_time == new_e.stats.reading_time {
                    summary.unchanged += 1;
                } else {
                    diffs.push(EntryDiff::Modified { source, old: old_e, new: new_e, delta });
                    summary.modified += 1;
                    summary.delta.accumulate(delta);
                }
            }
            None => {
                diffs.push(EntryDiff::Removed(old_e));
                summary.removed += 1;
                summary.delta.accumulate(Delta::removed(&old_e.stats));
            }
        }
    }

    for (&source, &new_e) in &new_map {
        if !old_map.contains_key(source) {
            diffs.push(EntryDiff::Added(new_e));
            summary.added += 1;
            summary.delta.accumulate(Delta::added(&new_e.stats));
        }
    }

    diffs.sort_by(|a, b| a.source().cmp(b.source()));
    summary.settings_mismatches.sort();

    (diffs, summary)
}

fn render_comparison(
    diffs: &[EntryDiff],
    summary: &ComparisonSummary,
) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Comparison Summary")?;
    writeln!(out, "-------------------")?;
    writeln!(
        out,
        "Inputs: +{} -{} ~{} ({} unchanged)",
        summary.added, summary.removed, summary.modified, summary.unchanged
    )?;
    let d = summary.delta;
    writeln!(out, "Words: {:+}", d.words)?;
    writeln!(out, "Characters: {:+}", d.characters)?;
    writeln!(out, "Special characters: {:+}", d.special_characters)?;
    writeln!(out, "Sentences: {:+}", d.sentences)?;
    writeln!(out, "Paragraphs: {:+}", d.paragraphs)?;

    let added: Vec<&SnapshotEntry> = diffs
        .iter()
        .filter_map(|d| match d {
            EntryDiff::Added(e) => Some(*e),
            _ => None,
        })
        .collect();
    let removed: Vec<&SnapshotEntry> = diffs
        .iter()
        .filter_map(|d| match d {
            EntryDiff::Removed(e) => Some(*e),
            _ => None,
        })
        .collect();

    if !added.is_empty() {
        writeln!(out)?;
        writeln!(out, "### Added")?;
        for e in added {
            writeln!(out, "+ {} (W:{}, C:{})", e.source, e.stats.words, e.stats.characters)?;
        }
    }

    if !removed.is_empty() {
        writeln!(out)?;
        writeln!(out, "### Removed")?;
        for e in removed {
            writeln!(out, "- {} (W:{}, C:{})", e.source, e.stats.words, e.stats.characters)?;
        }
    }

    let mut modified = diffs
        .iter()
        .filter(|d| matches!(d, EntryDiff::Modified { .. }))
        .peekable();
    if modified.peek().is_some() {
        writeln!(out)?;
        writeln!(out, "### Modified")?;
        for diff in modified {
            if let EntryDiff::Modified { source, old, new, delta } = diff {
                write!(
                    out,
                    "~ {source} (Words: {:+}, Characters: {:+}, Special: {:+}, Sentences: {:+}, Paragraphs: {:+})",
                    delta.words,
                    delta.characters,
                    delta.special_characters,
                    delta.sentences,
                    delta.paragraphs
                )?;
                if old.stats.reading_time != new.stats.reading_time {
                    write!(
                        out,
                        " reading time {} -> {}",
                        old.stats.reading_time, new.stats.reading_time
                    )?;
                }
                writeln!(out)?;
            }
        }
    }

    if !summary.settings_mismatches.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Note: settings differ for {}",
            summary.settings_mismatches.join(", ")
        )?;
    }
    Ok(out)
}
