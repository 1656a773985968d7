//! Test helpers for behavioral specifications.
//!
//! Provides a project fixture and a preconfigured command builder.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the onecfg binary
pub fn onecfg_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("onecfg"))
}

/// Returns a Command running inside `project`, with the registry kept
/// inside the fixture instead of the developer's real config directory.
pub fn onecfg_in(project: &Project) -> Command {
    let mut cmd = onecfg_cmd();
    cmd.current_dir(project.path());
    cmd.env("ONECFG_CONFIG_DIR", project.config_dir());
    cmd
}

/// A throwaway project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

/// Manifest generating a single `vite.config.ts`.
pub const VITE_MANIFEST: &str =
    "## `vite.config.ts`\n\n```ts\nexport default { base: \"/fake-base/\" };\n```\n";

impl Project {
    /// An empty directory.
    pub fn empty() -> Project {
        Project { dir: tempfile::TempDir::new().unwrap() }
    }

    /// A JS project ready for init: node_modules plus a .gitignore.
    pub fn prepared() -> Project {
        let project = Project::empty();
        std::fs::create_dir(project.path().join("node_modules")).unwrap();
        project.file(".gitignore", "node_modules\n");
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Per-fixture config dir, passed via ONECFG_CONFIG_DIR.
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join(".onecfg-home")
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// Read a file back as UTF-8.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }
}
