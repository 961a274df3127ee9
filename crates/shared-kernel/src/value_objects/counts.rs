// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Declares a transparent `usize` newtype used for one kind of tally.
macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            #[must_use]
            pub const fn value(self) -> usize {
                self.0
            }

            /// Signed difference `self - earlier`, clamped to the `i64` range.
            #[must_use]
            pub fn delta_since(self, earlier: Self) -> i64 {
                let to_i64 = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
                if self.0 >= earlier.0 {
                    to_i64(self.0 - earlier.0)
                } else {
                    -to_i64(earlier.0 - self.0)
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0.saturating_add(rhs.0))
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_newtype!(
    /// Number of space/newline-delimited words.
    WordCount
);

count_newtype!(
    /// Length of a text, or a subset of it, in the configured length unit.
    CharCount
);

count_newtype!(
    /// Number of sentence segments.
    SentenceCount
);

count_newtype!(
    /// Number of newline-delimited paragraphs.
    ParagraphCount
);
