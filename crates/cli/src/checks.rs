// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project verification checks.
//!
//! Each check inspects one convention `init` maintains. Checks are
//! independent: they share no mutable state, their order carries no
//! meaning, and a failure in one never prevents another from running.

use std::path::Path;

use crate::config::ResolvedConfig;
use crate::manifest::Manifest;
use crate::{gitignore, store, vscode};

/// Canonical check order for output.
pub const CHECK_NAMES: [&str; 4] = ["config", "store", "ignore", "editor"];

/// Everything a check may inspect.
pub struct CheckContext<'a> {
    pub root: &'a Path,
    pub config: &'a ResolvedConfig,
    pub manifest: &'a Manifest,
}

/// A single violation found by a check.
#[derive(Debug, Clone)]
pub struct Violation {
    pub message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Violation {
        Violation { message: message.into() }
    }
}

/// Result of one check run.
#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub violations: Vec<Violation>,
    pub skipped: Option<String>,
}

impl CheckResult {
    pub fn pass(name: &'static str) -> CheckResult {
        CheckResult { name, violations: Vec::new(), skipped: None }
    }

    pub fn fail(name: &'static str, violations: Vec<Violation>) -> CheckResult {
        CheckResult { name, violations, skipped: None }
    }

    pub fn skipped(name: &'static str, reason: impl Into<String>) -> CheckResult {
        CheckResult { name, violations: Vec::new(), skipped: Some(reason.into()) }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A verification check over one project convention.
pub trait Check {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &CheckContext) -> CheckResult;
}

/// All checks, in canonical order.
pub fn all() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(ConfigCheck),
        Box::new(StoreCheck),
        Box::new(IgnoreCheck),
        Box::new(EditorCheck),
    ]
}

/// Run every check, isolating panics so one check cannot take the
/// others down with it.
pub fn run_all(ctx: &CheckContext) -> Vec<CheckResult> {
    let mut results: Vec<CheckResult> = all()
        .into_iter()
        .map(|check| {
            match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check.run(ctx))) {
                Ok(result) => result,
                Err(_) => CheckResult::fail(
                    check.name(),
                    vec![Violation::new("internal error: check panicked")],
                ),
            }
        })
        .collect();

    results.sort_by_key(|r| CHECK_NAMES.iter().position(|&n| n == r.name).unwrap_or(usize::MAX));
    results
}

/// The resolved configuration itself is well-formed.
pub struct ConfigCheck;

impl Check for ConfigCheck {
    fn name(&self) -> &'static str {
        "config"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let mut violations = Vec::new();
        let base = &ctx.config.base;
        if !base.starts_with('/') || !base.ends_with('/') {
            violations.push(Violation::new(format!(
                "base must carry a leading and trailing slash, got {base:?}"
            )));
        }
        let store = &ctx.config.store;
        let escapes = store.is_absolute()
            || store.components().any(|c| !matches!(c, std::path::Component::Normal(_)));
        if escapes {
            violations.push(Violation::new(format!(
                "store must stay inside the project root, got {}",
                store.display()
            )));
        }
        if violations.is_empty() { CheckResult::pass(self.name()) } else {
            CheckResult::fail(self.name(), violations)
        }
    }
}

/// Store copies exist, match the manifest, and are symlinked in place.
pub struct StoreCheck;

impl Check for StoreCheck {
    fn name(&self) -> &'static str {
        "store"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let store = ctx.root.join(&ctx.config.store);
        let dest_dir = store::base_dir(ctx.root, &ctx.config.base);
        let mut violations = Vec::new();

        for entry in &ctx.manifest.entries {
            let stored = store.join(&entry.name);
            match std::fs::read_to_string(&stored) {
                Ok(content) if content == entry.content => {}
                Ok(_) => {
                    violations.push(Violation::new(format!("{} is out of date", entry.name)));
                }
                Err(_) => {
                    violations
                        .push(Violation::new(format!("{} is missing from the store", entry.name)));
                    continue;
                }
            }

            let link = dest_dir.join(&entry.name);
            match std::fs::symlink_metadata(&link) {
                Err(_) => {
                    violations.push(Violation::new(format!("{} is not linked", entry.name)));
                }
                Ok(meta) if meta.file_type().is_symlink() => {
                    if std::fs::read_link(&link).map(|t| t != stored).unwrap_or(true) {
                        violations.push(Violation::new(format!(
                            "{} links outside the store",
                            entry.name
                        )));
                    }
                }
                // A plain file shadowing the link is left in place by init;
                // accept it here too.
                Ok(_) => {}
            }
        }

        if violations.is_empty() { CheckResult::pass(self.name()) } else {
            CheckResult::fail(self.name(), violations)
        }
    }
}

/// Every generated file is ignored by git.
pub struct IgnoreCheck;

impl Check for IgnoreCheck {
    fn name(&self) -> &'static str {
        "ignore"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        if !ctx.config.gitignore {
            return CheckResult::skipped(self.name(), "gitignore maintenance disabled");
        }

        let mut violations = Vec::new();
        for entry in &ctx.manifest.entries {
            match gitignore::contains(ctx.root, &entry.name) {
                Ok(true) => {}
                Ok(false) => {
                    violations
                        .push(Violation::new(format!("{} is not listed in .gitignore", entry.name)));
                }
                Err(err) => {
                    return CheckResult::fail(
                        self.name(),
                        vec![Violation::new(format!("cannot read .gitignore: {err}"))],
                    );
                }
            }
        }

        if violations.is_empty() { CheckResult::pass(self.name()) } else {
            CheckResult::fail(self.name(), violations)
        }
    }
}

/// Every generated file is excluded from the editor's file tree.
pub struct EditorCheck;

impl Check for EditorCheck {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        if !ctx.config.vscode {
            return CheckResult::skipped(self.name(), "editor settings maintenance disabled");
        }

        let mut violations = Vec::new();
        for entry in &ctx.manifest.entries {
            match vscode::excludes(ctx.root, &entry.name) {
                Ok(true) => {}
                Ok(false) => {
                    violations.push(Violation::new(format!(
                        "{} is not excluded in {}",
                        entry.name,
                        vscode::SETTINGS_PATH
                    )));
                }
                Err(err) => {
                    return CheckResult::fail(
                        self.name(),
                        vec![Violation::new(format!("cannot read editor settings: {err}"))],
                    );
                }
            }
        }

        if violations.is_empty() { CheckResult::pass(self.name()) } else {
            CheckResult::fail(self.name(), violations)
        }
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
