// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fan-out pipeline shared by init, watch, and the daemon.
//!
//! parse -> resolve -> write store -> symlink -> maintain ignores.

use std::path::{Path, PathBuf};

use crate::config::{self, Overrides, ResolvedConfig};
use crate::error::Result;
use crate::gitignore::{self, UpdateOutcome};
use crate::manifest::Manifest;
use crate::{store, vscode};

/// What one fan-out run did.
#[derive(Debug)]
pub struct SyncOutcome {
    /// Project root the manifest applies to.
    pub root: PathBuf,
    /// Configuration the run was resolved with.
    pub config: ResolvedConfig,
    /// Number of generated files written.
    pub files: usize,
    /// Result of .gitignore maintenance, when enabled.
    pub gitignore: Option<UpdateOutcome>,
    /// Whether editor settings were updated.
    pub vscode: bool,
}

/// Apply `manifest_path` to its project.
pub fn sync(manifest_path: &Path, overrides: &Overrides, mode: &str) -> Result<SyncOutcome> {
    let manifest = Manifest::load(manifest_path)?;
    let root = manifest.root().to_path_buf();
    let config = config::resolve(&root, &manifest.options, overrides, mode)?;
    tracing::debug!(
        "syncing {} ({} entries, base {})",
        manifest_path.display(),
        manifest.entries.len(),
        config.base
    );

    store::write(&root, &config, &manifest.entries)?;
    store::link(&root, &config, &manifest.entries)?;

    let names: Vec<String> = manifest.entries.iter().map(|e| e.name.clone()).collect();

    let gitignore_outcome = if config.gitignore {
        let outcome = gitignore::update(&root, &names)?;
        if outcome == UpdateOutcome::Skipped {
            tracing::debug!("no .gitignore in {}", root.display());
        }
        Some(outcome)
    } else {
        None
    };

    if config.vscode {
        vscode::update(&root, &names)?;
    }

    Ok(SyncOutcome {
        root,
        files: manifest.entries.len(),
        gitignore: gitignore_outcome,
        vscode: config.vscode,
        config,
    })
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
