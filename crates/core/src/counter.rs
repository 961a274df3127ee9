// crates/core/src/counter.rs
use std::sync::LazyLock;

use text_stats_shared_kernel::DomainResult;

use crate::classifier::{count_special, strip_spaces};
use crate::config::EngineConfig;
use crate::markup::MarkupStripper;
use crate::reading_time::ReadingTimeEstimator;
use crate::segmenter::{Delimiter, count_segments};
use crate::stats::StatisticsReport;

static DEFAULT_COUNTER: LazyLock<Counter> = LazyLock::new(Counter::default);

/// Compute statistics with the default configuration.
///
/// This is the core entry point for the library.
#[must_use]
pub fn compute_statistics(text: &str) -> StatisticsReport {
    DEFAULT_COUNTER.compute(text)
}

/// Statistics engine bound to one [`EngineConfig`].
///
/// Holds no per-call state, so one counter can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Counter {
    config: EngineConfig,
    stripper: MarkupStripper,
    estimator: ReadingTimeEstimator,
}

impl Counter {
    /// Validates `config` and compiles its tag vocabulary.
    ///
    /// # Errors
    ///
    /// Returns a [`text_stats_shared_kernel::DomainError`] when the configuration is invalid.
    pub fn new(config: EngineConfig) -> DomainResult<Self> {
        config.validate()?;
        let stripper = MarkupStripper::new(&config.tags)?;
        let estimator = ReadingTimeEstimator::new(config.words_per_minute);
        log::debug!(
            "counter ready: {} tags, {} wpm, {:?} units",
            config.tags.len(),
            config.words_per_minute,
            config.length_unit
        );
        Ok(Self { config, stripper, estimator })
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes every field of the report from `text`.
    #[must_use]
    pub fn compute(&self, text: &str) -> StatisticsReport {
        let unit = self.config.length_unit;

        let without_spaces = strip_spaces(text);
        let without_markup = self.stripper.strip(text);
        // spaces go first: "< p>" becomes "<p>" and is then stripped as markup
        let without_both = self.stripper.strip(&without_spaces);

        let words = count_segments(text, Delimiter::Words);

        StatisticsReport {
            words: words.into(),
            words_excluding_markup: count_segments(&without_markup, Delimiter::Words).into(),
            characters: unit.length(text).into(),
            characters_excluding_spaces: unit.length(&without_spaces).into(),
            characters_excluding_markup: unit.length(&without_markup).into(),
            characters_excluding_spaces_and_markup: unit.length(&without_both).into(),
            special_characters: count_special(text, unit).into(),
            special_characters_excluding_spaces: count_special(&without_spaces, unit).into(),
            special_characters_excluding_markup: count_special(&without_markup, unit).into(),
            special_characters_excluding_spaces_and_markup: count_special(&without_both, unit)
                .into(),
            sentences: count_segments(text, Delimiter::Sentences).into(),
            paragraphs: count_segments(text, Delimiter::Paragraphs).into(),
            reading_time: self.estimator.estimate(words),
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            stripper: MarkupStripper::new(&config.tags).unwrap_or_else(|err| {
                log::warn!("default tag vocabulary rejected: {err}");
                MarkupStripper::empty()
            }),
            estimator: ReadingTimeEstimator::new(config.words_per_minute),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfigBuilder;
    use crate::reading_time::ReadingTime;

    fn counter_with_tags(tags: &[&str]) -> Counter {
        let config = EngineConfigBuilder::default()
            .tags(tags.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>())
            .build()
            .unwrap();
        Counter::new(config).unwrap()
    }

    #[test]
    fn empty_input() {
        let report = compute_statistics("");
        assert_eq!(report, StatisticsReport::default());
        assert_eq!(report.reading_time.to_string(), "0 seconds");
    }

    #[test]
    fn hello_world() {
        let report = compute_statistics("Hello world");
        assert_eq!(report.words, 2usize);
        assert_eq!(report.characters, 11usize);
        assert_eq!(report.characters_excluding_spaces, 10usize);
        assert_eq!(report.special_characters, 1usize);
        assert_eq!(report.special_characters_excluding_spaces, 0usize);
        assert_eq!(report.sentences, 1usize);
        assert_eq!(report.paragraphs, 1usize);
    }

    #[test]
    fn markup_variants() {
        let report = counter_with_tags(&["p"]).compute("<p>Hi</p>");
        assert_eq!(report.words, 1usize);
        assert_eq!(report.words_excluding_markup, 1usize);
        assert_eq!(report.characters, 9usize);
        assert_eq!(report.characters_excluding_markup, 2usize);
        assert_eq!(report.special_characters, 4usize);
        assert_eq!(report.special_characters_excluding_markup, 0usize);
    }

    #[test]
    fn spaces_are_removed_before_markup() {
        let report = counter_with_tags(&["p"]).compute("< p>x");
        assert_eq!(report.characters_excluding_markup, 5usize);
        assert_eq!(report.characters_excluding_spaces_and_markup, 1usize);
    }

    #[test]
    fn markup_can_join_words() {
        let report = counter_with_tags(&["br"]).compute("one<br>two three");
        assert_eq!(report.words, 2usize);
        assert_eq!(report.words_excluding_markup, 2usize);
        let report = counter_with_tags(&["br"]).compute("one <br> two");
        assert_eq!(report.words, 3usize);
        assert_eq!(report.words_excluding_markup, 2usize);
    }

    #[test]
    fn reading_time_follows_configured_speed() {
        let config = EngineConfigBuilder::default().words_per_minute(2u32).build().unwrap();
        let counter = Counter::new(config).unwrap();
        assert_eq!(counter.compute("a b").reading_time, ReadingTime::Minutes(1));
        assert_eq!(counter.compute("a b c d").reading_time, ReadingTime::Minutes(2));
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let config = EngineConfigBuilder::default().words_per_minute(0u32).build().unwrap();
        assert!(Counter::new(config).is_err());
    }

    #[test]
    fn counter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Counter>();
    }
}
