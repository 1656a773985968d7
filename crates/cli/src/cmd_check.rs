// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `onecfg check` command implementation.
//!
//! Verifies that a project matches what `init` would produce and reports
//! each violation.

use onecfg::checks::{self, CheckContext};
use onecfg::cli::CheckArgs;
use onecfg::config;
use onecfg::discovery;
use onecfg::error::ExitCode;
use onecfg::manifest::Manifest;

/// Run the `onecfg check` command.
pub fn run(args: &CheckArgs, mode: &str) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let manifest_path = discovery::resolve_manifest(args.manifest.as_deref(), &cwd)?;

    let manifest = Manifest::load(&manifest_path)?;
    let root = manifest.root().to_path_buf();
    let config =
        config::resolve(&root, &manifest.options, &args.overrides.to_overrides(), mode)?;

    let ctx = CheckContext { root: &root, config: &config, manifest: &manifest };
    let results = checks::run_all(&ctx);

    let mut failed = false;
    for result in &results {
        if let Some(reason) = &result.skipped {
            println!("{}: skipped ({reason})", result.name);
        } else if result.passed() {
            println!("{}: ok", result.name);
        } else {
            failed = true;
            println!("{}: {} violation(s)", result.name, result.violations.len());
            for violation in &result.violations {
                println!("  {}", violation.message);
            }
        }
    }

    Ok(if failed { ExitCode::Violations } else { ExitCode::Success })
}
