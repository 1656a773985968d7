// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! .gitignore maintenance.
//!
//! Appends generated file names that are not already listed. Existing
//! lines are never rewritten or removed, and the file is never created:
//! a project without a .gitignore is left alone.

use std::path::Path;

use crate::error::Result;

/// Marker comment written once per run before appended names.
pub const MARKER: &str = "# Added by onecfg";

/// Outcome of a .gitignore update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No .gitignore in the project.
    Skipped,
    /// All names were already listed.
    Unchanged,
    /// This many names were appended.
    Applied(usize),
}

/// Append any of `names` missing from `<root>/.gitignore`.
pub fn update(root: &Path, names: &[String]) -> Result<UpdateOutcome> {
    let path = root.join(".gitignore");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(UpdateOutcome::Skipped);
        }
        Err(err) => return Err(err.into()),
    };

    let existing: Vec<&str> = content.lines().map(|l| l.trim_end_matches('\r')).collect();
    let missing: Vec<&String> = names.iter().filter(|n| !existing.contains(&n.as_str())).collect();

    if missing.is_empty() {
        return Ok(UpdateOutcome::Unchanged);
    }

    let mut updated = content;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(MARKER);
    updated.push('\n');
    for name in &missing {
        updated.push_str(name);
        updated.push('\n');
    }
    std::fs::write(&path, updated)?;

    tracing::debug!("appended {} entries to {}", missing.len(), path.display());
    Ok(UpdateOutcome::Applied(missing.len()))
}

/// Whether `<root>/.gitignore` lists `name` as a whole line.
///
/// A missing file is an I/O error, not an absent entry.
pub fn contains(root: &Path, name: &str) -> Result<bool> {
    let content = std::fs::read_to_string(root.join(".gitignore"))?;
    Ok(content.lines().any(|l| l.trim_end_matches('\r') == name))
}

#[cfg(test)]
#[path = "gitignore_tests.rs"]
mod tests;
