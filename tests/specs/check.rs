// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `onecfg check`.

use crate::prelude::*;

fn synced_project() -> Project {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);
    onecfg_in(&temp).arg("init").assert().success();
    temp
}

/// A freshly initialized project passes every check
#[test]
fn check_passes_after_init() {
    let temp = synced_project();

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicates::str::contains("ignore: ok"))
        .stdout(predicates::str::contains("store: ok"));
}

/// A .gitignore listing only unrelated entries fails the ignore check
#[test]
fn check_fails_when_gitignore_lists_only_unrelated_entries() {
    let temp = synced_project();
    temp.file(".gitignore", "node_modules\n");

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("vite.config.ts"));
}

/// A missing .gitignore fails the ignore check rather than passing it
#[test]
fn check_fails_when_gitignore_is_missing() {
    let temp = synced_project();
    std::fs::remove_file(temp.path().join(".gitignore")).unwrap();

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("cannot read .gitignore"));
}

/// Disabling gitignore maintenance skips the ignore check
#[test]
fn check_skips_ignore_when_disabled() {
    let temp = Project::prepared();
    temp.file("config.md", &format!("---\ngitignore: false\n---\n\n{VITE_MANIFEST}"));
    onecfg_in(&temp).arg("init").assert().success();

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicates::str::contains("ignore: skipped"));
}

/// A stale store copy is flagged
#[test]
fn check_flags_a_stale_store_copy() {
    let temp = synced_project();
    temp.file("node_modules/.onecfg/vite.config.ts", "stale");

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("out of date"));
}

/// One failing check never hides the others
#[test]
fn check_reports_all_failures_independently() {
    let temp = synced_project();
    temp.file(".gitignore", "node_modules\n");
    temp.file("node_modules/.onecfg/vite.config.ts", "stale");

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("out of date"))
        .stdout(predicates::str::contains("not listed in .gitignore"))
        .stdout(predicates::str::contains("config: ok"));
}

/// check without init reports the missing store
#[test]
fn check_flags_an_unsynced_project() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("missing from the store"));
}
