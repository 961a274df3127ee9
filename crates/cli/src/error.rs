// crates/cli/src/error.rs
use std::path::PathBuf;

use text_stats_shared_kernel::{DomainError, TextStatsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Kernel(#[from] TextStatsError),

    #[error("Invalid engine configuration: {0}")]
    Domain(#[from] DomainError),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Comparison error: {0}")]
    Comparison(String),

    #[error("{failed} of {total} inputs could not be read")]
    InputsFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;
