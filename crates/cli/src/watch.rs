// crates/cli/src/watch.rs
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

use notify::{Event, RecursiveMode, Watcher};

use crate::error::{AppError, Result};

/// Input files to react to and the directories holding them.
///
/// Directories are watched instead of the files so that editors replacing a
/// file by rename keep being noticed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WatchTargets {
    pub dirs: BTreeSet<PathBuf>,
    pub files: BTreeSet<PathBuf>,
}

impl WatchTargets {
    /// Collects the existing `paths`; missing ones are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error when none of the paths exists.
    pub fn collect<'a, I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut targets = Self::default();
        for path in paths {
            let Ok(file) = path.canonicalize() else {
                log::warn!("{} does not exist; not watched", path.display());
                continue;
            };
            if let Some(dir) = file.parent() {
                targets.dirs.insert(dir.to_path_buf());
            }
            targets.files.insert(file);
        }
        if targets.files.is_empty() {
            return Err(AppError::Config(
                "--watch needs at least one existing input file".to_string(),
            ));
        }
        Ok(targets)
    }

    /// Whether `event` names one of the watched files.
    #[must_use]
    pub fn touches(&self, event: &Event) -> bool {
        event.paths.iter().any(|p| self.files.contains(&normalize(p)))
    }
}

/// `path` with its directory resolved, so it compares equal to a
/// canonicalized input even after the file itself was removed.
fn normalize(path: &Path) -> PathBuf {
    match (path.parent().map(Path::canonicalize), path.file_name()) {
        (Some(Ok(dir)), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Watches `paths` and runs `on_change` once up front and after every burst
/// of events touching one of them.
///
/// Blocks until the event channel closes.
///
/// # Errors
///
/// Returns an error when no path exists or a watcher cannot be installed.
pub fn watch_loop<'a, I, F>(paths: I, debounce: Duration, mut on_change: F) -> Result<()>
where
    I: IntoIterator<Item = &'a Path>,
    F: FnMut(),
{
    let targets = WatchTargets::collect(paths)?;
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => log::warn!("watch error: {e}"),
    })?;

    for dir in &targets.dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        log::debug!("watching directory {}", dir.display());
    }

    log::info!(
        "watching {} file(s) in {} directory(ies), debounce {debounce:?}",
        targets.files.len(),
        targets.dirs.len()
    );
    on_change();

    while let Ok(event) = rx.recv() {
        if !targets.touches(&event) {
            continue;
        }
        std::thread::sleep(debounce);
        // drain the burst
        while rx.try_recv().is_ok() {}
        on_change();
    }
    Ok(())
}
