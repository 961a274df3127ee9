// crates/core/src/reading_time.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bucketed reading duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingTime {
    /// No words at all.
    Zero,
    UnderOneSecond,
    Seconds(u64),
    Minutes(u64),
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0 seconds"),
            Self::UnderOneSecond => f.write_str("< 1 second"),
            Self::Seconds(1) => f.write_str("1 second"),
            Self::Seconds(n) => write!(f, "{n} seconds"),
            Self::Minutes(1) => f.write_str("1 minute"),
            Self::Minutes(n) => write!(f, "{n} minutes"),
        }
    }
}

impl Serialize for ReadingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReadingTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for ReadingTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0 seconds" => return Ok(Self::Zero),
            "< 1 second" => return Ok(Self::UnderOneSecond),
            _ => {}
        }

        let (amount, unit) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| format!("Unrecognized reading time: {s}"))?;
        let amount: u64 = amount
            .parse()
            .map_err(|_| format!("Unrecognized reading time: {s}"))?;

        match unit {
            "second" | "seconds" => Ok(Self::Seconds(amount)),
            "minute" | "minutes" => Ok(Self::Minutes(amount)),
            other => Err(format!("Unknown reading time unit: {other}")),
        }
    }
}

/// Converts word counts into [`ReadingTime`] buckets at a fixed reading speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimeEstimator {
    words_per_minute: u32,
}

impl ReadingTimeEstimator {
    /// Below this many minutes the estimate is given in seconds.
    pub const SECONDS_THRESHOLD: f64 = 0.95;
    /// Up to this many minutes the estimate is "1 minute".
    pub const ONE_MINUTE_CEILING: f64 = 1.5;

    /// `words_per_minute` must be non-zero; [`crate::EngineConfig::validate`] enforces it.
    #[must_use]
    pub const fn new(words_per_minute: u32) -> Self {
        Self { words_per_minute }
    }

    #[must_use]
    pub const fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate(&self, words: usize) -> ReadingTime {
        let minutes = words as f64 / f64::from(self.words_per_minute);

        if minutes == 0.0 {
            return ReadingTime::Zero;
        }

        if minutes < Self::SECONDS_THRESHOLD {
            let seconds = (minutes * 60.0) % 60.0;
            return if seconds >= 1.0 {
                ReadingTime::Seconds(seconds.floor() as u64)
            } else {
                ReadingTime::UnderOneSecond
            };
        }

        if minutes <= Self::ONE_MINUTE_CEILING {
            return ReadingTime::Minutes(1);
        }

        ReadingTime::Minutes(minutes.ceil() as u64)
    }
}
