//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Overrides;

/// One config file to rule them all
#[derive(Parser)]
#[command(name = "onecfg")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Mode used when resolving configuration
    #[arg(long, global = true, value_name = "NAME", env = "ONECFG_MODE", default_value = "build")]
    pub mode: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fan the manifest out into generated files, symlinks, and ignores
    Init(InitArgs),
    /// Run init, then re-run it whenever the manifest changes
    Watch(WatchArgs),
    /// Watch every registered manifest as a single background instance
    Daemon(DaemonArgs),
    /// Verify a project matches what init would produce
    Check(CheckArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Configuration overrides shared by init, watch, and check.
#[derive(clap::Args)]
pub struct OverrideArgs {
    /// Base path under which symlinks are placed
    #[arg(long, value_name = "PATH")]
    pub base: Option<String>,

    /// Maintain .gitignore even when the manifest disables it
    #[arg(long, overrides_with = "no_gitignore")]
    pub gitignore: bool,

    /// Skip .gitignore maintenance
    #[arg(long)]
    pub no_gitignore: bool,

    /// Maintain .vscode/settings.json even when the manifest disables it
    #[arg(long, overrides_with = "no_vscode")]
    pub vscode: bool,

    /// Skip .vscode/settings.json maintenance
    #[arg(long)]
    pub no_vscode: bool,
}

impl OverrideArgs {
    /// Convert flag pairs into the override layer of config resolution.
    pub fn to_overrides(&self) -> Overrides {
        Overrides {
            base: self.base.clone(),
            gitignore: flag_pair(self.gitignore, self.no_gitignore),
            vscode: flag_pair(self.vscode, self.no_vscode),
            store: None,
        }
    }
}

/// Map an on/off flag pair to an optional override.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Manifest to apply (discovered from the working directory when omitted)
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Manifest to watch (discovered from the working directory when omitted)
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(clap::Args)]
pub struct DaemonArgs {}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Manifest to verify (discovered from the working directory when omitted)
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
