// crates/core/src/config.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use text_stats_shared_kernel::{DomainError, DomainResult};

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Tag names removed by the markup stripper unless a vocabulary is configured.
pub const DEFAULT_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "legend", "li", "link", "main", "map", "mark", "menu", "meta", "meter", "nav", "noscript",
    "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre", "progress",
    "q", "rp", "rt", "ruby", "s", "samp", "script", "search", "section", "select", "slot", "small",
    "source", "span", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul",
    "var", "video", "wbr",
];

/// Unit in which lengths are measured and characters are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// UTF-16 code units, as measured by browser text fields.
    #[default]
    Utf16,
    /// Unicode scalar values (`char`).
    Chars,
}

impl LengthUnit {
    /// Length of `text` in this unit.
    #[must_use]
    pub fn length(self, text: &str) -> usize {
        match self {
            Self::Utf16 => text.encode_utf16().count(),
            Self::Chars => text.chars().count(),
        }
    }

    /// Number of units in `text` whose numeric code satisfies `pred`.
    pub fn count_where<F>(self, text: &str, mut pred: F) -> usize
    where
        F: FnMut(u32) -> bool,
    {
        match self {
            Self::Utf16 => text.encode_utf16().filter(|&u| pred(u32::from(u))).count(),
            Self::Chars => text.chars().filter(|&c| pred(u32::from(c))).count(),
        }
    }
}

/// Immutable engine configuration: the markup vocabulary, the reading speed
/// and the length unit.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct EngineConfig {
    #[builder(default = "default_tags()")]
    pub tags: Vec<String>,
    #[builder(default = "DEFAULT_WORDS_PER_MINUTE")]
    pub words_per_minute: u32,
    #[builder(default)]
    pub length_unit: LengthUnit,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            length_unit: LengthUnit::default(),
        }
    }
}

impl EngineConfig {
    /// Checks the values a counter cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWordsPerMinute`] for a zero reading speed and
    /// [`DomainError::InvalidTagName`] for the first malformed tag name.
    pub fn validate(&self) -> DomainResult<()> {
        if self.words_per_minute == 0 {
            return Err(DomainError::InvalidWordsPerMinute { value: self.words_per_minute });
        }
        self.tags.iter().try_for_each(|tag| validate_tag_name(tag))
    }
}

fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|&t| t.to_owned()).collect()
}

fn validate_tag_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::InvalidTagName {
            name: name.to_owned(),
            reason: "tag name is empty".to_owned(),
        });
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
    {
        return Err(DomainError::InvalidTagName {
            name: name.to_owned(),
            reason: format!("unexpected character {bad:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = EngineConfigBuilder::default().build().unwrap();
        assert_eq!(built, EngineConfig::default());
        assert_eq!(built.words_per_minute, DEFAULT_WORDS_PER_MINUTE);
        assert!(built.tags.iter().any(|t| t == "p"));
    }

    #[test]
    fn zero_words_per_minute_is_rejected() {
        let config = EngineConfigBuilder::default().words_per_minute(0u32).build().unwrap();
        assert!(matches!(config.validate(), Err(DomainError::InvalidWordsPerMinute { value: 0 })));
    }

    #[test]
    fn malformed_tag_names_are_rejected() {
        for bad in ["", "p class", "<p>", "a|b"] {
            let config = EngineConfigBuilder::default().tags(vec![bad.to_owned()]).build().unwrap();
            assert!(
                matches!(config.validate(), Err(DomainError::InvalidTagName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn length_units_differ_outside_the_bmp() {
        let text = "a😀";
        assert_eq!(LengthUnit::Utf16.length(text), 3);
        assert_eq!(LengthUnit::Chars.length(text), 2);
    }
}
