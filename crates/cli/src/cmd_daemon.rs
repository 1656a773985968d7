// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `onecfg daemon` command implementation.
//!
//! Watches every registered manifest from a single locked instance.
//! A second instance exits quietly with success so the command can be
//! injected into shell startup files.

use onecfg::cli::DaemonArgs;
use onecfg::config::Overrides;
use onecfg::daemon::InstanceLock;
use onecfg::error::ExitCode;
use onecfg::registry::Registry;

/// Run the `onecfg daemon` command.
pub fn run(_args: &DaemonArgs, mode: &str) -> anyhow::Result<ExitCode> {
    let registry = Registry::open_default()?;
    let lock_path = registry
        .path()
        .parent()
        .map(|dir| dir.join("daemon.lock"))
        .unwrap_or_else(|| "daemon.lock".into());

    let Some(_lock) = InstanceLock::acquire(&lock_path)? else {
        tracing::debug!("daemon already running, exiting");
        return Ok(ExitCode::Success);
    };

    let manifests = registry.entries()?;
    if manifests.is_empty() {
        println!("No manifests registered; run onecfg init first.");
        return Ok(ExitCode::Success);
    }

    let mut handles = Vec::new();
    for manifest in manifests {
        if !manifest.is_file() {
            tracing::warn!("skipping missing manifest {}", manifest.display());
            continue;
        }
        println!("Watching for changes on {}", manifest.display());
        let mode = mode.to_string();
        handles.push(std::thread::spawn(move || {
            if let Err(err) = crate::cmd_watch::watch_loop(&manifest, &Overrides::default(), &mode)
            {
                eprintln!("error watching {}: {err}", manifest.display());
            }
        }));
    }

    for handle in handles {
        let _ = handle.join();
    }

    Ok(ExitCode::Success)
}
