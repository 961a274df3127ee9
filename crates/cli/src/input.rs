// crates/cli/src/input.rs
use std::io::Read;
use std::path::{Path, PathBuf};

use text_stats_shared_kernel::{ErrorContext, InfrastructureError, Result};

/// Where one text to be counted comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Inline(String),
}

impl InputSource {
    /// Name used for this input in every output format.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Inline(_) => "<text>".to_string(),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin | Self::Inline(_) => None,
        }
    }

    /// Reads the whole text. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error when the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| InfrastructureError::FileRead {
                    path: path.clone(),
                    source,
                })?;
                log::debug!("read {} bytes from {}", bytes.len(), path.display());
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .context("reading standard input")?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

/// Turns positional paths and `--text` into input sources.
///
/// `-` stands for stdin; with neither paths nor text, stdin is read.
#[must_use]
pub fn resolve_inputs(paths: &[PathBuf], text: Option<&str>) -> Vec<InputSource> {
    let mut inputs: Vec<InputSource> = text.map(|t| InputSource::Inline(t.to_string())).into_iter().collect();

    let mut stdin_seen = false;
    for path in paths {
        if path.as_os_str() == "-" {
            if !stdin_seen {
                inputs.push(InputSource::Stdin);
                stdin_seen = true;
            }
        } else {
            inputs.push(InputSource::File(path.clone()));
        }
    }

    if inputs.is_empty() {
        inputs.push(InputSource::Stdin);
    }
    inputs
}
