// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, resolving, or applying a manifest.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no manifest found; create config.md or pass a path")]
    ManifestNotFound,

    #[error("manifest not found: {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("{}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("invalid front matter in {}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid settings in {}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry name escapes the project root: {0}")]
    UnsafeEntryName(String),

    #[error("no node_modules directory under {}; run your package manager first", .0.display())]
    StoreRootMissing(PathBuf),

    #[error("no user configuration directory available")]
    NoConfigDir,

    #[error(transparent)]
    Watch(#[from] notify::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// 0 = success, 1 = check violations, 2 = usage/config/IO errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Violations,
    Error,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Violations => 1,
            ExitCode::Error => 2,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
