// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-instance daemon lock.
//!
//! The daemon is meant to be launched from shell startup files, so a
//! second instance must notice the first and bow out quietly. The lock
//! is a file created exclusively next to the registry, holding the
//! owner's pid, removed on drop.
//!
//! TODO: detect stale locks left behind by a crashed daemon by probing
//! the recorded pid.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Held for the lifetime of the daemon process.
#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Try to take the lock. Returns `None` when another instance holds it.
    pub fn acquire(path: &Path) -> Result<Option<InstanceLock>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match std::fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                let _ = write!(file, "{}", std::process::id());
                Ok(Some(InstanceLock { path: path.to_path_buf() }))
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
#[path = "daemon_tests.rs"]
mod tests;
