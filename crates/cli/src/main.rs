mod cli;
mod commands;
mod logging;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands::Workspace;
use navorder_core::config::constants;

fn main() {
    if let Err(e) = constants::init_constants() {
        eprintln!("Failed to resolve executable path: {e}");
    }

    let (log_path, log_file) = match logging::open_run_log() {
        Ok((path, file)) => (Some(path), Some(file)),
        Err(e) => {
            eprintln!("Logging to console only: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .with(log_file.map(|log_file| {
            fmt::layer()
                .with_writer(log_file)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug"))
        }))
        .init();

    if let Some(path) = log_path {
        debug!("Debug log at {}", path.display());
    }

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Cli::parse();
    let workspace = Workspace::open(&args.root, args.config.as_deref(), args.locale)?;

    let output = match args.cmd {
        Commands::List {
            folder,
            exclude,
            json,
        } => workspace.list(&folder, exclude.as_deref(), json)?,
        Commands::Move { target, after } => workspace.move_after(&target, &after)?,
        Commands::Place {
            folder,
            key,
            after,
            title,
        } => workspace.place(&folder, &key, after.as_deref(), title.as_deref())?,
        Commands::Renumber { folder, dry_run } => workspace.renumber(&folder, dry_run)?,
    };

    println!("{output}");
    Ok(())
}
