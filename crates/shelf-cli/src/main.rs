//! shelf - CLI tool for browsing and editing a catalog of books and
//! checkouts.
//!
//! This is a thin host over `shelf-core`'s controllers, wired to the
//! backend through `shelf-http`.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::records;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    if let Err(e) = run(cli).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Books(cmd) => {
            let ctx = config::AppContext::resolve(cli.backend_url.as_deref())?;
            records::handle::<shelf_core::Book>(cmd, &ctx).await
        }
        Commands::Checkouts(cmd) => {
            let ctx = config::AppContext::resolve(cli.backend_url.as_deref())?;
            records::handle::<shelf_core::Checkout>(cmd, &ctx).await
        }
        Commands::Config(cmd) => commands::config::handle(cmd, cli.backend_url.as_deref()),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
