// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `onecfg watch` command implementation.
//!
//! Runs the fan-out once, then blocks re-running it on every manifest
//! write. A failing re-run is reported and watching continues; the
//! manifest is usually mid-edit.

use std::path::Path;

use onecfg::cli::WatchArgs;
use onecfg::config::Overrides;
use onecfg::discovery;
use onecfg::error::ExitCode;
use onecfg::sync;
use onecfg::watch::ManifestWatcher;

/// Run the `onecfg watch` command.
pub fn run(args: &WatchArgs, mode: &str) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let manifest = discovery::resolve_manifest(args.manifest.as_deref(), &cwd)?;
    let overrides = args.overrides.to_overrides();

    let outcome = sync::sync(&manifest, &overrides, mode)?;
    crate::cmd_init::report(&outcome);

    println!("Watching for changes on {}", manifest.display());
    watch_loop(&manifest, &overrides, mode)?;

    Ok(ExitCode::Success)
}

/// Re-run the fan-out for every change until the watcher shuts down.
pub fn watch_loop(manifest: &Path, overrides: &Overrides, mode: &str) -> anyhow::Result<()> {
    let watcher = ManifestWatcher::new(manifest.to_path_buf())?;
    while watcher.next_change().is_some() {
        println!("{} changed", manifest.display());
        match sync::sync(manifest, overrides, mode) {
            Ok(outcome) => crate::cmd_init::report(&outcome),
            Err(err) => eprintln!("error: {err}"),
        }
    }
    Ok(())
}
