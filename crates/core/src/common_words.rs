// crates/core/src/common_words.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classifier::is_special_code;
use crate::segmenter::{Delimiter, segments};

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Words occurring at least twice, most frequent first (ties alphabetical),
/// at most `limit` of them.
///
/// Words come from the same segmentation as the word count, with leading and
/// trailing special characters trimmed and ASCII letters lowercased.
#[must_use]
pub fn common_words(text: &str, limit: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in segments(text, Delimiter::Words) {
        let word = normalize(token);
        if !word.is_empty() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut frequent: Vec<WordFrequency> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(word, count)| WordFrequency { word, count })
        .collect();
    frequent.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequent.truncate(limit);
    frequent
}

fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| is_special_code(u32::from(c)))
        .to_ascii_lowercase()
}
