// crates/core/src/stats.rs
use serde::{Deserialize, Serialize};
use text_stats_shared_kernel::{CharCount, ParagraphCount, SentenceCount, WordCount};

use crate::reading_time::ReadingTime;

/// Statistics of one input string, computed in one pass of the counter.
///
/// Every `*_excluding_*` field is derived from a filtered copy of the input
/// and is never larger than its unfiltered counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub words: WordCount,
    pub words_excluding_markup: WordCount,
    pub characters: CharCount,
    pub characters_excluding_spaces: CharCount,
    pub characters_excluding_markup: CharCount,
    pub characters_excluding_spaces_and_markup: CharCount,
    pub special_characters: CharCount,
    pub special_characters_excluding_spaces: CharCount,
    pub special_characters_excluding_markup: CharCount,
    pub special_characters_excluding_spaces_and_markup: CharCount,
    pub sentences: SentenceCount,
    pub paragraphs: ParagraphCount,
    pub reading_time: ReadingTime,
}

impl Default for StatisticsReport {
    fn default() -> Self {
        Self {
            words: WordCount::ZERO,
            words_excluding_markup: WordCount::ZERO,
            characters: CharCount::ZERO,
            characters_excluding_spaces: CharCount::ZERO,
            characters_excluding_markup: CharCount::ZERO,
            characters_excluding_spaces_and_markup: CharCount::ZERO,
            special_characters: CharCount::ZERO,
            special_characters_excluding_spaces: CharCount::ZERO,
            special_characters_excluding_markup: CharCount::ZERO,
            special_characters_excluding_spaces_and_markup: CharCount::ZERO,
            sentences: SentenceCount::ZERO,
            paragraphs: ParagraphCount::ZERO,
            reading_time: ReadingTime::Zero,
        }
    }
}

impl StatisticsReport {
    /// Character count for the given exclusions.
    #[must_use]
    pub const fn characters_for(&self, exclude_spaces: bool, exclude_markup: bool) -> CharCount {
        match (exclude_spaces, exclude_markup) {
            (false, false) => self.characters,
            (true, false) => self.characters_excluding_spaces,
            (false, true) => self.characters_excluding_markup,
            (true, true) => self.characters_excluding_spaces_and_markup,
        }
    }

    /// Special character count for the given exclusions.
    #[must_use]
    pub const fn special_characters_for(
        &self,
        exclude_spaces: bool,
        exclude_markup: bool,
    ) -> CharCount {
        match (exclude_spaces, exclude_markup) {
            (false, false) => self.special_characters,
            (true, false) => self.special_characters_excluding_spaces,
            (false, true) => self.special_characters_excluding_markup,
            (true, true) => self.special_characters_excluding_spaces_and_markup,
        }
    }

    /// Word count with or without markup. Spaces never affect words.
    #[must_use]
    pub const fn words_for(&self, exclude_markup: bool) -> WordCount {
        if exclude_markup { self.words_excluding_markup } else { self.words }
    }
}
