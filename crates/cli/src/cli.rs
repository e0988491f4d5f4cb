use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Show the candidate neighbors of a folder
    List {
        /// Folder path, e.g. /docs
        folder: String,
        /// Resource to leave out of the list
        #[clap(short = 'x', long)]
        exclude: Option<String>,
        /// Print JSON instead of a table
        #[clap(short, long)]
        json: bool,
    },

    /// Move an existing resource after a neighbor
    Move {
        /// Resource path, e.g. /docs/intro.html
        target: String,
        /// Neighbor key, FIRST, LAST or NOCHANGE
        #[clap(short, long)]
        after: String,
    },

    /// Position a newly created resource
    Place {
        /// Folder holding the new resource
        folder: String,
        /// Path of the new resource
        key: String,
        /// Neighbor key, FIRST or LAST; appends when omitted
        #[clap(short, long)]
        after: Option<String>,
        /// Navigation label
        #[clap(short, long)]
        title: Option<String>,
    },

    /// Rewrite positions to 1, 2, 3, ... keeping the order
    Renumber {
        folder: String,
        /// Show the changes without writing them
        #[clap(short = 'n', long)]
        dry_run: bool,
    },
}

/// navorder Command
#[derive(Parser)]
#[command(about = None)]
pub struct Cli {
    /// Repository root directory
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,
    /// Config file (defaults to navorder.json in the root, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Locale for the first/last labels
    #[arg(short, long, global = true)]
    pub locale: Option<String>,
    #[command(subcommand)]
    pub cmd: Commands,
}
