//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagefeed CLI
#[derive(Parser, Debug)]
#[command(name = "pagefeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Feed definition file (YAML)
    #[arg(short, long, global = true)]
    pub feed: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection to the feed endpoint
    Check,

    /// Page through the feed and print item URLs
    Read {
        /// Maximum number of pages to fetch (0 = until the feed ends)
        #[arg(long, default_value = "0")]
        max_pages: usize,

        /// Override the configured page size
        #[arg(long)]
        page_size: Option<u64>,
    },

    /// Validate the feed definition
    Validate,
}
