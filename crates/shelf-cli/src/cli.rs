//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommand;
use crate::commands::records::RecordCommand;

/// Browse and edit a catalog of books and checkouts.
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Catalog backend URL (overrides the config file)
    #[arg(long, global = true, env = "SHELF_BACKEND_URL")]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Book operations
    Books(RecordCommand),

    /// Checkout operations
    Checkouts(RecordCommand),

    /// Show or change the stored configuration
    Config(ConfigCommand),
}
