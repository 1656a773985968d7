// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest discovery.
//!
//! Walks from the current directory up to the git root looking for config.md.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default manifest file name.
pub const MANIFEST_NAME: &str = "config.md";

/// Find config.md starting from `start_dir` and walking up to git root.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let manifest_path = current.join(MANIFEST_NAME);
        if manifest_path.exists() {
            return Some(manifest_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the manifest path for a command invocation.
///
/// An explicit argument wins and must exist; otherwise discovery walks up
/// from `cwd`.
pub fn resolve_manifest(arg: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match arg {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
            if path.is_file() {
                Ok(path)
            } else {
                Err(Error::ManifestMissing(path))
            }
        }
        None => find_manifest(cwd).ok_or(Error::ManifestNotFound),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
