// crates/cli/src/app.rs
use std::path::Path;

use text_stats_core::Counter;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::input::InputSource;
use crate::options::{OutputFormat, Statistic};
use crate::runner::{self, RunResult};
use crate::{compare, presentation, snapshot, watch};

/// Runs whichever mode the configuration selects: snapshot comparison,
/// watch mode or a single counting pass.
///
/// # Errors
///
/// Returns an error for an invalid engine configuration, a failed write, or
/// unreadable inputs (any of them under `--strict`, all of them otherwise).
pub fn run(config: &Config) -> Result<()> {
    if let Some((old, new)) = &config.compare {
        let rendered = compare::compare_snapshots(old, new)?;
        return presentation::emit(&rendered, config.output_path.as_deref());
    }

    let counter = Counter::new(config.engine.clone())?;

    if config.watch {
        return run_watch(config, &counter);
    }
    run_cycle(config, &counter, &config.inputs)
}

fn run_watch(config: &Config, counter: &Counter) -> Result<()> {
    if config.inputs.contains(&InputSource::Stdin) {
        log::warn!("standard input is not re-read in watch mode");
    }
    let inputs: Vec<InputSource> = config
        .inputs
        .iter()
        .filter(|i| **i != InputSource::Stdin)
        .cloned()
        .collect();
    let paths: Vec<&Path> = inputs.iter().filter_map(InputSource::path).collect();
    let clear = config.output_path.is_none() && config.format == OutputFormat::Table;

    watch::watch_loop(paths, config.watch_interval, || {
        if clear {
            presentation::clear_screen();
        }
        if let Err(e) = run_cycle(config, counter, &inputs) {
            eprintln!("Error in watch cycle: {e}");
        }
    })
}

fn run_cycle(config: &Config, counter: &Counter, inputs: &[InputSource]) -> Result<()> {
    let common_words_limit = config
        .display
        .shows(Statistic::CommonWords)
        .then_some(config.common_words_limit);
    let result = runner::run_inputs(inputs, counter, common_words_limit);

    for (source, err) in &result.errors {
        eprintln!("Error processing {source}: {err}");
    }

    if !result.entries.is_empty() || !result.has_errors() {
        let rendered = presentation::render(&result.entries, config)?;
        presentation::emit(&rendered, config.output_path.as_deref())?;
        if let Some(path) = &config.save_path {
            snapshot::save(path, &result.entries, &config.display)?;
        }
    }

    check_failures(&result, config.strict)
}

/// Under `--strict` any failed input fails the run; otherwise only a run
/// with no successful input does.
fn check_failures(result: &RunResult, strict: bool) -> Result<()> {
    let failed = result.errors.len();
    let total = failed + result.entries.len();
    if failed > 0 && (strict || result.entries.is_empty()) {
        return Err(AppError::InputsFailed { failed, total });
    }
    Ok(())
}
