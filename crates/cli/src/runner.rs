// crates/cli/src/runner.rs
use rayon::prelude::*;
use text_stats_core::{Counter, StatisticsReport, WordFrequency, common_words};

use crate::error::AppError;
use crate::input::InputSource;

/// Statistics of one successfully read input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub source: String,
    pub report: StatisticsReport,
    /// Present only when common words are requested.
    pub common_words: Option<Vec<WordFrequency>>,
}

/// Outcome of one counting cycle. Entries keep input order.
#[derive(Debug, Default)]
pub struct RunResult {
    pub entries: Vec<TextEntry>,
    pub errors: Vec<(String, AppError)>,
}

impl RunResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Reads and counts every input.
///
/// Files are processed in parallel; a failed read is recorded and does not
/// stop the others.
#[must_use]
pub fn run_inputs(
    inputs: &[InputSource],
    counter: &Counter,
    common_words_limit: Option<usize>,
) -> RunResult {
    let outcomes: Vec<(String, Result<TextEntry, AppError>)> = inputs
        .par_iter()
        .map(|input| {
            let source = input.label();
            let outcome = input.read().map_err(AppError::from).map(|text| TextEntry {
                source: source.clone(),
                report: counter.compute(&text),
                common_words: common_words_limit.map(|limit| common_words(&text, limit)),
            });
            (source, outcome)
        })
        .collect();

    let mut result = RunResult::default();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(entry) => result.entries.push(entry),
            Err(err) => {
                log::debug!("{source}: {err}");
                result.errors.push((source, err));
            }
        }
    }
    log::debug!(
        "counted {} inputs ({} failed)",
        result.entries.len(),
        result.errors.len()
    );
    result
}
