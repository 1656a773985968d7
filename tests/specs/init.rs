//! Behavioral specs for `onecfg init`.

use crate::prelude::*;

/// init writes generated files into the hidden store
#[test]
fn init_writes_generated_files_to_the_store() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp).arg("init").assert().success();

    let stored = temp.read("node_modules/.onecfg/vite.config.ts");
    assert!(stored.contains("/fake-base/"));
}

/// init symlinks generated files into the project root
#[cfg(unix)]
#[test]
fn init_symlinks_generated_files_into_the_project() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp).arg("init").assert().success();

    let link = temp.path().join("vite.config.ts");
    assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
    assert!(temp.read("vite.config.ts").contains("export default"));
}

/// The generated file name lands in .gitignore
#[test]
fn init_adds_generated_files_to_gitignore() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains(".gitignore"));

    let content = temp.read(".gitignore");
    assert!(content.contains("vite.config.ts"));
    assert!(content.contains("# Added by onecfg"));
}

/// A project without a .gitignore is reported and left alone
#[test]
fn init_leaves_projects_without_gitignore_alone() {
    let temp = Project::empty();
    std::fs::create_dir(temp.path().join("node_modules")).unwrap();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("no .gitignore"));

    assert!(!temp.path().join(".gitignore").exists());
}

/// --no-gitignore skips .gitignore maintenance
#[test]
fn init_respects_no_gitignore() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp).args(["init", "--no-gitignore"]).assert().success();

    assert!(!temp.read(".gitignore").contains("vite.config.ts"));
}

/// Front matter can enable editor settings maintenance
#[test]
fn init_updates_editor_settings_when_enabled() {
    let temp = Project::prepared();
    temp.file("config.md", &format!("---\nvscode: true\n---\n\n{VITE_MANIFEST}"));

    onecfg_in(&temp).arg("init").assert().success();

    let settings = temp.read(".vscode/settings.json");
    assert!(settings.contains("vite.config.ts"));
}

/// Running init twice leaves the project unchanged
#[test]
fn init_is_idempotent() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp).arg("init").assert().success();
    let first = temp.read(".gitignore");
    onecfg_in(&temp).arg("init").assert().success();

    assert_eq!(first, temp.read(".gitignore"));
}

/// init records the manifest in the per-user registry
#[test]
fn init_registers_the_manifest() {
    let temp = Project::prepared();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp).arg("init").assert().success();

    let registry = std::fs::read_to_string(temp.config_dir().join("files")).unwrap();
    assert!(registry.contains("config.md"));
}

/// An explicit manifest path wins over discovery
#[test]
fn init_accepts_an_explicit_manifest_path() {
    let temp = Project::prepared();
    temp.file("other.md", VITE_MANIFEST);

    onecfg_in(&temp).args(["init", "other.md"]).assert().success();

    assert!(temp.read(".gitignore").contains("vite.config.ts"));
}

/// Without node_modules the project is not ready for init
#[test]
fn init_fails_without_node_modules() {
    let temp = Project::empty();
    temp.file("config.md", VITE_MANIFEST);

    onecfg_in(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("node_modules"));
}

/// A missing manifest is a hard error
#[test]
fn init_fails_without_a_manifest() {
    let temp = Project::empty();
    std::fs::create_dir(temp.path().join(".git")).unwrap();

    onecfg_in(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no manifest found"));
}

/// Manifest structure errors surface with the offending name
#[test]
fn init_reports_manifest_errors() {
    let temp = Project::prepared();
    temp.file("config.md", "## `a.json`\n\nno code block here\n");

    onecfg_in(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("a.json does not contain any code block"));
}
