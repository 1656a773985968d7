// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration resolution.
//!
//! The library-level resolution tests live next to the config module;
//! these cover the layering as seen from the CLI.

use crate::prelude::*;

/// onecfg.toml mode tables steer where symlinks land
#[cfg(unix)]
#[test]
fn settings_file_base_places_symlinks() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);
    temp.file("onecfg.toml", "[mode.build]\nbase = \"/fake-base/\"\n");

    onecfg_in(&temp).arg("init").assert().success();

    assert!(temp.path().join("fake-base/vite.config.ts").symlink_metadata().is_ok());
    assert!(!temp.path().join("vite.config.ts").exists());
}

/// An unrelated mode ignores the build table
#[cfg(unix)]
#[test]
fn other_modes_ignore_the_build_table() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);
    temp.file("onecfg.toml", "[mode.build]\nbase = \"/fake-base/\"\n");

    onecfg_in(&temp).args(["init", "--mode", "serve"]).assert().success();

    assert!(temp.path().join("vite.config.ts").symlink_metadata().is_ok());
}

/// --base beats the settings file
#[cfg(unix)]
#[test]
fn base_flag_beats_the_settings_file() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);
    temp.file("onecfg.toml", "base = \"/from-file/\"\n");

    onecfg_in(&temp).args(["init", "--base", "/from-flag/"]).assert().success();

    assert!(temp.path().join("from-flag/vite.config.ts").symlink_metadata().is_ok());
}

/// A malformed settings file is a hard error, not a silent default
#[test]
fn malformed_settings_file_is_reported() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);
    temp.file("onecfg.toml", "base = [broken\n");

    onecfg_in(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("onecfg.toml"));
}
