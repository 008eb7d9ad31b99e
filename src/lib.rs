//! notekeeper - small text notes with a flat index file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_delete, handle_find, handle_list, handle_new, handle_shell, handle_show,
    },
};

/// Sets up logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notekeeper={level}")));
    // A subscriber may already be installed when run() is called twice in one process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Command::Completions(args)) = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(args.shell, &mut command, "notes", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let repo_config = config.repository(cli.dir.as_ref());

    match &cli.command {
        None | Some(Command::Shell) => handle_shell(&repo_config),
        Some(Command::New(args)) => handle_new(args, &repo_config),
        Some(Command::List(args)) => handle_list(args, &repo_config),
        Some(Command::Find(args)) => handle_find(args, &repo_config),
        Some(Command::Show(args)) => handle_show(args, &repo_config),
        Some(Command::Delete(args)) => handle_delete(args, &repo_config),
        Some(Command::Completions(_)) => Ok(()),
    }
}
