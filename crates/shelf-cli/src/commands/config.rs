//! Config subcommand implementation.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};

use shelf_core::BackendUrl;
use shelf_core::page::DEFAULT_PAGE_SIZE;

use crate::config::DEFAULT_BACKEND_URL;
use crate::config::storage::{self, StoredConfig};
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show,

    /// Store settings in the config file
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Backend URL to store
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Default page size for list commands
    #[arg(long)]
    pub page_size: Option<u32>,
}

pub fn handle(cmd: ConfigCommand, backend_flag: Option<&str>) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(backend_flag),
        ConfigSubcommand::Set(args) => set(args),
    }
}

fn show(backend_flag: Option<&str>) -> Result<()> {
    let stored = storage::load_config().context("Failed to load config")?;
    let path = storage::config_path()?;

    let backend = backend_flag
        .map(str::to_string)
        .or(stored.backend_url)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    let page_size = stored.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    output::field("Config file", &path.display().to_string());
    output::field("Backend URL", &backend);
    output::field("Page size", &page_size.to_string());
    Ok(())
}

fn set(args: SetArgs) -> Result<()> {
    if args.url.is_none() && args.page_size.is_none() {
        bail!("Nothing to set. Pass --url and/or --page-size.");
    }

    let mut config: StoredConfig = storage::load_config().context("Failed to load config")?;

    if let Some(url) = args.url {
        let backend = BackendUrl::new(&url).context("Invalid backend URL")?;
        config.backend_url = Some(backend.to_string());
    }
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            bail!("Page size must be greater than zero");
        }
        config.page_size = Some(page_size);
    }

    storage::save_config(&config)?;
    output::success("Configuration saved");
    Ok(())
}
