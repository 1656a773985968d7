// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `onecfg init` command implementation.
//!
//! Fans the manifest out into the project, then registers it so the
//! daemon picks it up.

use onecfg::cli::InitArgs;
use onecfg::discovery;
use onecfg::error::ExitCode;
use onecfg::gitignore::UpdateOutcome;
use onecfg::registry::Registry;
use onecfg::sync::{self, SyncOutcome};

/// Run the `onecfg init` command.
pub fn run(args: &InitArgs, mode: &str) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let manifest = discovery::resolve_manifest(args.manifest.as_deref(), &cwd)?;

    let outcome = sync::sync(&manifest, &args.overrides.to_overrides(), mode)?;
    report(&outcome);

    Registry::open_default()?.register(&manifest)?;

    Ok(ExitCode::Success)
}

/// Print the user-facing summary of one fan-out run.
pub fn report(outcome: &SyncOutcome) {
    println!("Wrote {} generated file(s) to {}", outcome.files, outcome.config.store.display());
    match outcome.gitignore {
        Some(UpdateOutcome::Applied(count)) => {
            println!("Applied {count} change(s) to .gitignore");
        }
        Some(UpdateOutcome::Skipped) => {
            println!("There's no .gitignore to add generated files to.");
        }
        Some(UpdateOutcome::Unchanged) | None => {}
    }
    if outcome.vscode {
        println!("Changes applied to {}", onecfg::vscode::SETTINGS_PATH);
    }
}
