// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration resolution.
//!
//! Merges, in increasing precedence: built-in defaults, the project
//! settings file (`onecfg.toml`), the `[mode.<name>]` table matching the
//! requested mode, manifest front matter, and caller overrides. The
//! project root is always passed explicitly so resolution can be tested
//! against a temporary directory fixture.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::manifest::ManifestOptions;

/// Project settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = "onecfg.toml";

/// Caller-supplied overrides; the highest-precedence layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub base: Option<String>,
    pub gitignore: Option<bool>,
    pub vscode: Option<bool>,
    pub store: Option<PathBuf>,
}

/// The fully merged configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Public base path under which symlinks are placed. Always carries a
    /// leading and trailing slash.
    pub base: String,
    /// Maintain .gitignore after writing files.
    pub gitignore: bool,
    /// Maintain .vscode/settings.json after writing files.
    pub vscode: bool,
    /// Store directory, relative to the project root.
    pub store: PathBuf,
    /// Mode the configuration was resolved for.
    pub mode: String,
}

/// One layer of file-based settings. Used for both the top level of
/// `onecfg.toml` and its `[mode.<name>]` tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SettingsLayer {
    base: Option<String>,
    gitignore: Option<bool>,
    vscode: Option<bool>,
    store: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    #[serde(flatten)]
    top: SettingsLayer,
    mode: BTreeMap<String, SettingsLayer>,
}

/// Resolve the configuration for `root`.
///
/// Fresh on every call; nothing is cached. A malformed settings file is
/// an error, a missing one is not.
pub fn resolve(
    root: &Path,
    options: &ManifestOptions,
    overrides: &Overrides,
    mode: &str,
) -> Result<ResolvedConfig> {
    let mut settings = load_settings(root)?;
    let mode_layer = settings.mode.remove(mode).unwrap_or_default();

    let base = overrides
        .base
        .clone()
        .or_else(|| options.base.clone())
        .or(mode_layer.base)
        .or(settings.top.base)
        .unwrap_or_else(|| defaults::BASE.to_string());

    let gitignore = overrides
        .gitignore
        .or(options.gitignore)
        .or(mode_layer.gitignore)
        .or(settings.top.gitignore)
        .unwrap_or(defaults::GITIGNORE);

    let vscode = overrides
        .vscode
        .or(options.vscode)
        .or(mode_layer.vscode)
        .or(settings.top.vscode)
        .unwrap_or(defaults::VSCODE);

    let store = overrides
        .store
        .clone()
        .or(mode_layer.store)
        .or(settings.top.store)
        .unwrap_or_else(|| PathBuf::from(defaults::STORE));

    Ok(ResolvedConfig {
        base: normalize_base(&base),
        gitignore,
        vscode,
        store,
        mode: mode.to_string(),
    })
}

fn load_settings(root: &Path) -> Result<SettingsFile> {
    let path = root.join(SETTINGS_FILE);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsFile::default());
        }
        Err(err) => return Err(err.into()),
    };
    tracing::debug!("loaded settings from {}", path.display());
    toml::from_str(&text).map_err(|source| Error::Settings { path, source: Box::new(source) })
}

/// Normalize a base path to carry a leading and trailing slash.
/// Empty input normalizes to `/`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() { "/".to_string() } else { format!("/{trimmed}/") }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
