// crates/core/src/lib.rs
//! Counting engine for `text_stats`.
//!
//! [`compute_statistics`] turns one string into a [`StatisticsReport`]:
//! words, characters and special characters (each with and without spaces
//! and markup), sentences, paragraphs and an estimated reading time.
#![allow(clippy::multiple_crate_versions)]

pub mod classifier;
pub mod common_words;
pub mod config;
pub mod counter;
pub mod markup;
pub mod reading_time;
pub mod segmenter;
pub mod stats;

pub use common_words::{WordFrequency, common_words};
pub use config::{DEFAULT_TAGS, DEFAULT_WORDS_PER_MINUTE, EngineConfig, EngineConfigBuilder, LengthUnit};
pub use counter::{Counter, compute_statistics};
pub use markup::MarkupStripper;
pub use reading_time::{ReadingTime, ReadingTimeEstimator};
pub use segmenter::{Delimiter, count_segments};
pub use stats::StatisticsReport;
