// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use text_stats_core::LengthUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

/// 空白/マークアップを表示値に含めるかどうか
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Inclusion {
    #[default]
    Include,
    Exclude,
}

impl Inclusion {
    #[must_use]
    pub const fn is_excluded(self) -> bool {
        matches!(self, Self::Exclude)
    }
}

/// 表示する統計項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Statistic {
    Words,
    Characters,
    SpecialCharacters,
    Sentences,
    Paragraphs,
    ReadingTime,
    CommonWords,
}

impl Statistic {
    /// Column order used by every tabular format.
    pub const ALL: [Self; 7] = [
        Self::Words,
        Self::Characters,
        Self::SpecialCharacters,
        Self::Sentences,
        Self::Paragraphs,
        Self::ReadingTime,
        Self::CommonWords,
    ];

    /// Shown when nothing is configured.
    pub const DEFAULT_SET: [Self; 6] = [
        Self::Words,
        Self::Characters,
        Self::SpecialCharacters,
        Self::Sentences,
        Self::Paragraphs,
        Self::ReadingTime,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Words => "Words",
            Self::Characters => "Characters",
            Self::SpecialCharacters => "Special characters",
            Self::Sentences => "Sentences",
            Self::Paragraphs => "Paragraphs",
            Self::ReadingTime => "Reading time",
            Self::CommonWords => "Common words",
        }
    }

    /// Machine-friendly column name for CSV/TSV headers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Characters => "characters",
            Self::SpecialCharacters => "special_characters",
            Self::Sentences => "sentences",
            Self::Paragraphs => "paragraphs",
            Self::ReadingTime => "reading_time",
            Self::CommonWords => "common_words",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LengthUnitArg {
    /// UTF-16 code units (browser field length)
    Utf16,
    /// Unicode scalar values
    Chars,
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(LengthUnitArg, LengthUnit, Utf16, Chars);
