use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use job_tracker::cli::{Cli, Command};
use job_tracker::{JsonFileStore, Tracker, TrackerConfig, TrackerError, render};

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn fail(err: &TrackerError) -> ExitCode {
    eprintln!("Error: {err}");
    if err.shows_usage() {
        println!("{}", render::usage());
    }
    ExitCode::from(err.exit_code() as u8)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{e}");
            println!("{}", render::usage());
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    let command = match Command::from_raw(cli.command) {
        Ok(command) => command,
        Err(err) => return fail(&err),
    };

    if !command.uses_store() {
        println!("{}", render::usage());
        return ExitCode::SUCCESS;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = TrackerConfig::resolve(cli.file, &cwd);
    tracing::debug!(store = %config.store_path.display(), ?command, "dispatching");

    let tracker = Tracker::new(JsonFileStore::new(config.store_path));
    match command.run(&tracker) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}
