// crates/core/src/classifier.rs
//! 特殊文字の判定
//!
//! A unit is *regular* when its code lies in `47..=58`, `64..=91` or
//! `96..=123`; everything else, space and non-ASCII included, is *special*.
//! The bounds are one wider on each side than the ASCII digit and letter
//! ranges, so `/`, `:`, `@`, `[`, the backtick and `{` count as regular.
//! Existing saved counts depend on these exact bounds.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::config::LengthUnit;

const REGULAR_RANGES: [RangeInclusive<u32>; 3] = [47..=58, 64..=91, 96..=123];

/// Whether a single unit code counts as special.
#[inline]
#[must_use]
pub fn is_special_code(code: u32) -> bool {
    !REGULAR_RANGES.iter().any(|range| range.contains(&code))
}

/// Number of special units in `text`.
#[must_use]
pub fn count_special(text: &str, unit: LengthUnit) -> usize {
    unit.count_where(text, is_special_code)
}

/// Number of regular units in `text`; `count_special + count_regular == unit.length(text)`.
#[must_use]
pub fn count_regular(text: &str, unit: LengthUnit) -> usize {
    unit.count_where(text, |code| !is_special_code(code))
}

/// Unicode `White_Space` except U+0085 (NEL), plus U+FEFF.
#[inline]
#[must_use]
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `text` with every whitespace character removed. Borrows when there is none.
#[must_use]
pub fn strip_spaces(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_space) {
        Cow::Owned(text.chars().filter(|&c| !is_space(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_are_regular() {
        for c in ('0'..='9').chain('A'..='Z').chain('a'..='z') {
            assert!(!is_special_code(u32::from(c)), "{c:?}");
        }
    }

    #[test]
    fn range_edges_follow_the_wide_bounds() {
        for c in ['/', ':', '@', '[', '`', '{'] {
            assert!(!is_special_code(u32::from(c)), "{c:?} should be regular");
        }
        for c in ['.', ';', '?', '\\', '_', '|', ' '] {
            assert!(is_special_code(u32::from(c)), "{c:?} should be special");
        }
    }

    #[test]
    fn non_ascii_units_are_special() {
        assert_eq!(count_special("é", LengthUnit::Utf16), 1);
        assert_eq!(count_special("😀", LengthUnit::Utf16), 2);
        assert_eq!(count_special("😀", LengthUnit::Chars), 1);
    }

    #[test]
    fn special_and_regular_partition_the_text() {
        let text = "Hello, world! 123 <p>";
        for unit in [LengthUnit::Utf16, LengthUnit::Chars] {
            assert_eq!(count_special(text, unit) + count_regular(text, unit), unit.length(text));
        }
    }

    #[test]
    fn strip_spaces_removes_all_whitespace() {
        assert_eq!(strip_spaces("a b\tc\nd\u{a0}e"), "abcde");
        assert!(matches!(strip_spaces("abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn next_line_and_byte_order_mark() {
        assert_eq!(strip_spaces("a\u{85}b"), "a\u{85}b");
        assert_eq!(strip_spaces("a\u{feff}b\u{2028}c\u{3000}d"), "abcd");
    }
}
