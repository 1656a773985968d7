// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editor settings maintenance.
//!
//! Marks generated files as excluded in `.vscode/settings.json` so
//! symlinks do not clutter the file tree. All unrelated settings are
//! preserved; the file is created when absent.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Settings file path, relative to the project root.
pub const SETTINGS_PATH: &str = ".vscode/settings.json";

/// Key holding the exclusion map.
const FILES_EXCLUDE: &str = "files.exclude";

/// Merge `names` into `files.exclude` of the project's editor settings.
pub fn update(root: &Path, names: &[String]) -> Result<()> {
    let path = root.join(SETTINGS_PATH);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => "{}".to_string(),
        Err(err) => return Err(err.into()),
    };

    let mut settings: Map<String, Value> = serde_json::from_str(&text)
        .map_err(|source| Error::Json { path: path.clone(), source })?;

    // Keep existing boolean entries, drop anything malformed.
    let mut exclude: Map<String, Value> = Map::new();
    if let Some(Value::Object(current)) = settings.get(FILES_EXCLUDE) {
        for (key, value) in current {
            if let Value::Bool(flag) = value {
                exclude.insert(key.clone(), Value::Bool(*flag));
            }
        }
    }
    for name in names {
        exclude.insert(name.clone(), Value::Bool(true));
    }
    settings.insert(FILES_EXCLUDE.to_string(), Value::Object(exclude));

    let mut rendered = serde_json::to_string_pretty(&settings)
        .map_err(|source| Error::Json { path: path.clone(), source })?;
    rendered.push('\n');
    std::fs::write(&path, rendered)?;

    tracing::debug!("updated {}", path.display());
    Ok(())
}

/// Whether the editor settings exclude `name`.
pub fn excludes(root: &Path, name: &str) -> Result<bool> {
    let path = root.join(SETTINGS_PATH);
    let text = std::fs::read_to_string(&path)?;
    let settings: Map<String, Value> =
        serde_json::from_str(&text).map_err(|source| Error::Json { path, source })?;
    Ok(matches!(
        settings.get(FILES_EXCLUDE).and_then(|m| m.get(name)),
        Some(Value::Bool(true))
    ))
}

#[cfg(test)]
#[path = "vscode_tests.rs"]
mod tests;
