// crates/cli/src/settings.rs
//! 表示設定
//!
//! Display settings pick which statistics are shown and which report variant
//! backs each of them. They are applied after counting and never change the
//! report itself.

use serde::{Deserialize, Serialize};
use text_stats_core::{ReadingTime, StatisticsReport};
use text_stats_shared_kernel::{CharCount, ParagraphCount, SentenceCount, WordCount};

use crate::options::{Inclusion, Statistic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub statistics: Vec<Statistic>,
    pub spaces: Inclusion,
    pub markup: Inclusion,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            statistics: Statistic::DEFAULT_SET.to_vec(),
            spaces: Inclusion::Include,
            markup: Inclusion::Include,
        }
    }
}

impl DisplaySettings {
    /// Words are always shown.
    #[must_use]
    pub fn shows(&self, statistic: Statistic) -> bool {
        statistic == Statistic::Words || self.statistics.contains(&statistic)
    }

    /// Shown tabular columns in canonical order. Common words are listed separately.
    #[must_use]
    pub fn columns(&self) -> Vec<Statistic> {
        Statistic::ALL
            .into_iter()
            .filter(|&s| s != Statistic::CommonWords && self.shows(s))
            .collect()
    }

    #[must_use]
    pub fn resolve(&self, report: &StatisticsReport) -> DisplayedStats {
        let exclude_spaces = self.spaces.is_excluded();
        let exclude_markup = self.markup.is_excluded();
        DisplayedStats {
            words: report.words_for(exclude_markup),
            characters: report.characters_for(exclude_spaces, exclude_markup),
            special_characters: report.special_characters_for(exclude_spaces, exclude_markup),
            sentences: report.sentences,
            paragraphs: report.paragraphs,
            reading_time: report.reading_time,
        }
    }
}

/// Report values selected by a [`DisplaySettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedStats {
    pub words: WordCount,
    pub characters: CharCount,
    pub special_characters: CharCount,
    pub sentences: SentenceCount,
    pub paragraphs: ParagraphCount,
    pub reading_time: ReadingTime,
}

impl DisplayedStats {
    /// Cell text for a tabular column; empty for common words.
    #[must_use]
    pub fn cell(&self, statistic: Statistic) -> String {
        match statistic {
            Statistic::Words => self.words.to_string(),
            Statistic::Characters => self.characters.to_string(),
            Statistic::SpecialCharacters => self.special_characters.to_string(),
            Statistic::Sentences => self.sentences.to_string(),
            Statistic::Paragraphs => self.paragraphs.to_string(),
            Statistic::ReadingTime => self.reading_time.to_string(),
            Statistic::CommonWords => String::new(),
        }
    }
}
