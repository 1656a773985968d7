// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generated-file store and project symlinks.
//!
//! Entries are written under a hidden store directory (by default
//! `node_modules/.onecfg`) and symlinked into the project tree at the
//! resolved base path. Keeping the real files out of the project root
//! means a single directory can be ignored wholesale.

use std::path::{Path, PathBuf};

use crate::config::ResolvedConfig;
use crate::error::{Error, Result};
use crate::manifest::FileEntry;

/// Write all entries into the store, creating it as needed.
///
/// Returns the absolute store path. Fails when the store lives under
/// `node_modules` and that directory does not exist: the project has not
/// been set up by its package manager yet.
pub fn write(root: &Path, config: &ResolvedConfig, entries: &[FileEntry]) -> Result<PathBuf> {
    if let Some(std::path::Component::Normal(first)) = config.store.components().next()
        && first == "node_modules"
        && !root.join("node_modules").is_dir()
    {
        return Err(Error::StoreRootMissing(root.to_path_buf()));
    }

    let store = root.join(&config.store);
    std::fs::create_dir_all(&store)?;

    for entry in entries {
        let dest = store.join(&entry.name);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&dest, &entry.content)?;
        tracing::debug!("wrote {}", dest.display());
    }

    Ok(store)
}

/// Symlink every entry from its base-path location into the store.
///
/// Existing links or files at the destination are left in place.
pub fn link(root: &Path, config: &ResolvedConfig, entries: &[FileEntry]) -> Result<()> {
    let store = root.join(&config.store);
    let dest_dir = base_dir(root, &config.base);

    for entry in entries {
        let target = store.join(&entry.name);
        let link = dest_dir.join(&entry.name);
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match symlink(&target, &link) {
            Ok(()) => tracing::debug!("linked {}", link.display()),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Directory the base path points at inside the project.
pub fn base_dir(root: &Path, base: &str) -> PathBuf {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() { root.to_path_buf() } else { root.join(trimmed) }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
