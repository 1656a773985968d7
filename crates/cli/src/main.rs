//! Binary entry point: parse arguments, set up logging, dispatch.

use clap::Parser;

use onecfg::cli::{Cli, Command};
use onecfg::error::ExitCode;

mod cmd_check;
mod cmd_completions;
mod cmd_daemon;
mod cmd_init;
mod cmd_watch;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Init(args) => cmd_init::run(args, &cli.mode),
        Command::Watch(args) => cmd_watch::run(args, &cli.mode),
        Command::Daemon(args) => cmd_daemon::run(args, &cli.mode),
        Command::Check(args) => cmd_check::run(args, &cli.mode),
        Command::Completions(args) => cmd_completions::run(args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::Error.into()
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "onecfg=debug" } else { "onecfg=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
