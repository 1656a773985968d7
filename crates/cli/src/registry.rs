// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-user manifest registry.
//!
//! A plain line-per-path file under the user configuration directory
//! listing every manifest `init` has processed. The daemon watches all
//! of them.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The registry file, one absolute manifest path per line.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// Open the registry at its default per-user location, creating the
    /// parent directory as needed. `ONECFG_CONFIG_DIR` overrides the
    /// location.
    pub fn open_default() -> Result<Registry> {
        let dir = match std::env::var_os("ONECFG_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir().ok_or(Error::NoConfigDir)?.join("onecfg"),
        };
        std::fs::create_dir_all(&dir)?;
        Ok(Registry { path: dir.join("files") })
    }

    /// Open a registry at an explicit path. Used by the daemon lock's
    /// sibling files and by tests.
    pub fn at(path: impl Into<PathBuf>) -> Registry {
        Registry { path: path.into() }
    }

    /// Where the registry file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All registered manifest paths, in registration order.
    pub fn entries(&self) -> Result<Vec<PathBuf>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(content.lines().filter(|l| !l.trim().is_empty()).map(PathBuf::from).collect())
    }

    /// Add `manifest` unless already present. Returns whether it was added.
    pub fn register(&self, manifest: &Path) -> Result<bool> {
        let entries = self.entries()?;
        if entries.iter().any(|e| e == manifest) {
            return Ok(false);
        }

        let mut content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&manifest.display().to_string());
        content.push('\n');
        std::fs::write(&self.path, content)?;

        tracing::debug!("registered {}", manifest.display());
        Ok(true)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
