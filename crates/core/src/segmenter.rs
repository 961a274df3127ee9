// crates/core/src/segmenter.rs
//! 区切り文字クラスによる分割
//!
//! One splitting primitive shared by word, sentence and paragraph counting so
//! that all three discard empty and single-space tokens the same way.

use serde::{Deserialize, Serialize};

/// Delimiter class a text is split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    /// `' '` and `'\n'`.
    Words,
    /// `'.'`, `'!'`, `'?'` and `'\n'`.
    Sentences,
    /// `'\n'`.
    Paragraphs,
}

impl Delimiter {
    /// Characters that end a token for this class.
    #[must_use]
    pub const fn chars(self) -> &'static [char] {
        match self {
            Self::Words => &[' ', '\n'],
            Self::Sentences => &['.', '!', '?', '\n'],
            Self::Paragraphs => &['\n'],
        }
    }

    #[inline]
    #[must_use]
    pub fn is_delimiter(self, c: char) -> bool {
        self.chars().contains(&c)
    }
}

/// Tokens of `text` split on `delimiter`, without empty and `" "` tokens.
pub fn segments(text: &str, delimiter: Delimiter) -> impl Iterator<Item = &str> {
    text.split(move |c: char| delimiter.is_delimiter(c))
        .filter(|token| is_countable(token))
}

/// Number of tokens [`segments`] yields.
#[must_use]
pub fn count_segments(text: &str, delimiter: Delimiter) -> usize {
    segments(text, delimiter).count()
}

fn is_countable(token: &str) -> bool {
    !token.is_empty() && token != " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_segments() {
        for delimiter in [Delimiter::Words, Delimiter::Sentences, Delimiter::Paragraphs] {
            assert_eq!(count_segments("", delimiter), 0);
        }
    }

    #[test]
    fn consecutive_delimiters_do_not_double_count() {
        assert_eq!(count_segments("a  b\n\nc", Delimiter::Words), 3);
        assert_eq!(count_segments("Wait... what?!", Delimiter::Sentences), 2);
    }

    #[test]
    fn leading_and_trailing_delimiters_are_ignored() {
        assert_eq!(count_segments("\nfirst\nsecond\n", Delimiter::Paragraphs), 2);
        assert_eq!(count_segments(" one two ", Delimiter::Words), 2);
    }

    #[test]
    fn sentence_terminators() {
        assert_eq!(count_segments("A.B!C?", Delimiter::Sentences), 3);
    }

    #[test]
    fn single_space_tokens_are_discarded_but_wider_blanks_are_not() {
        // ". " leaves a lone space after the terminator
        assert_eq!(count_segments("One. Two. ", Delimiter::Sentences), 2);
        assert_eq!(count_segments("One.  ", Delimiter::Sentences), 2);
    }

    #[test]
    fn tabs_do_not_split_words() {
        assert_eq!(count_segments("a\tb", Delimiter::Words), 1);
    }

    #[test]
    fn segments_yield_token_text() {
        let tokens: Vec<_> = segments("Hi there.\nBye", Delimiter::Sentences).collect();
        assert_eq!(tokens, ["Hi there", "Bye"]);
    }
}
