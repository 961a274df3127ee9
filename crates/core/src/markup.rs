// crates/core/src/markup.rs
//! マークアップ除去
//!
//! Removes bare opening and closing tags (`<p>`, `</P>`) whose name belongs to a
//! fixed vocabulary. Tags carrying attributes are left untouched.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use text_stats_shared_kernel::{DomainError, DomainResult};

/// Compiled tag matcher for one vocabulary.
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    pattern: Option<Regex>,
}

impl MarkupStripper {
    /// A stripper that recognizes no tags.
    #[must_use]
    pub const fn empty() -> Self {
        Self { pattern: None }
    }

    /// Compiles `</?(name1|name2|...)>` for the given tag names, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] when the vocabulary cannot be compiled.
    pub fn new<S: AsRef<str>>(tags: &[S]) -> DomainResult<Self> {
        if tags.is_empty() {
            return Ok(Self::empty());
        }

        let alternation = tags
            .iter()
            .map(|t| regex::escape(t.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!("</?(?:{alternation})>");

        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .map_err(|e| DomainError::InvalidPattern {
                pattern: source.clone(),
                details: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        log::debug!("compiled markup pattern for {} tag names", tags.len());
        Ok(Self { pattern: Some(pattern) })
    }

    /// Returns `text` with every recognized tag removed. Borrows when nothing matched.
    #[must_use]
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(re) => re.replace_all(text, ""),
            None => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripper(tags: &[&str]) -> MarkupStripper {
        MarkupStripper::new(tags).unwrap()
    }

    #[test]
    fn removes_opening_and_closing_tags() {
        assert_eq!(stripper(&["p"]).strip("<p>Hi</p>"), "Hi");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(stripper(&["strong"]).strip("<STRONG>a</Strong>"), "a");
    }

    #[test]
    fn tags_with_attributes_are_kept() {
        let s = stripper(&["p"]);
        assert_eq!(s.strip(r#"<p class="x">Hi</p>"#), r#"<p class="x">Hi"#);
    }

    #[test]
    fn unknown_tags_pass_through() {
        let s = stripper(&["p"]);
        assert_eq!(s.strip("<div>x</div>"), "<div>x</div>");
        assert!(matches!(s.strip("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn longer_names_are_not_matched_by_prefixes() {
        let s = stripper(&["b"]);
        assert_eq!(s.strip("<br><b>x</b>"), "<br>x");
    }

    #[test]
    fn empty_vocabulary_strips_nothing() {
        let s = MarkupStripper::empty();
        assert_eq!(s.strip("<p>Hi</p>"), "<p>Hi</p>");
    }

    #[test]
    fn tag_names_are_matched_literally() {
        let s = stripper(&["h1"]);
        assert_eq!(s.strip("<h1>T</h1><hx>"), "T<hx>");
        assert_eq!(s.strip("x</H1>"), "x");
    }

    #[test]
    fn case_folding_is_ascii_only() {
        let s = stripper(&["kbd", "s"]);
        assert_eq!(s.strip("<KBD>x</Kbd>"), "x");
        // KELVIN SIGN and LONG S fold to k and s under Unicode rules
        assert_eq!(s.strip("<\u{212A}bd>x"), "<\u{212A}bd>x");
        assert_eq!(s.strip("<\u{17F}>y"), "<\u{17F}>y");
    }
}
