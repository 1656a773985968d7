//! `onecfg completions` command implementation.

use clap::CommandFactory;

use onecfg::cli::{Cli, CompletionsArgs};
use onecfg::error::ExitCode;

/// Run the `onecfg completions` command.
pub fn run(args: &CompletionsArgs) -> anyhow::Result<ExitCode> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "onecfg", &mut std::io::stdout());
    Ok(ExitCode::Success)
}
