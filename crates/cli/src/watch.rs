// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest file watching.
//!
//! Watches the manifest's parent directory (editors replace files on
//! save, which would drop a watch on the file itself) and reports write
//! events for the manifest, debounced so a burst of saves triggers one
//! re-run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, unbounded};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::Result;

/// Default debounce window between a change and the re-run it triggers.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watches a single manifest file for writes.
pub struct ManifestWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    path: PathBuf,
    debounce: Duration,
}

impl ManifestWatcher {
    /// Start watching `path` with the default debounce window.
    pub fn new(path: PathBuf) -> Result<ManifestWatcher> {
        ManifestWatcher::with_debounce(path, DEBOUNCE)
    }

    pub fn with_debounce(path: PathBuf, debounce: Duration) -> Result<ManifestWatcher> {
        let (tx, rx) = unbounded();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;

        let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(ManifestWatcher { _watcher: watcher, events: rx, path, debounce })
    }

    /// Path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the manifest changes. Returns `None` when the watcher
    /// backend shuts down.
    pub fn next_change(&self) -> Option<()> {
        loop {
            match self.events.recv() {
                Ok(event) => {
                    if !self.is_manifest_write(event) {
                        continue;
                    }
                    self.drain_debounce();
                    return Some(());
                }
                Err(_) => return None,
            }
        }
    }

    /// Swallow follow-up events within the debounce window.
    fn drain_debounce(&self) {
        loop {
            match self.events.recv_timeout(self.debounce) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }

    fn is_manifest_write(&self, event: notify::Result<Event>) -> bool {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!("watch error on {}: {}", self.path.display(), err);
                return false;
            }
        };
        let relevant = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
        relevant && event.paths.iter().any(|p| p == &self.path)
    }
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
