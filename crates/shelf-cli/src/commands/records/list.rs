//! List records command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use shelf_core::{ListController, PageRequest, PageRequestDelta, Resource, Sort, SortDirection};

use crate::config::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Records per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Column to sort by, e.g. title or borrowedBook
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc or desc)
    #[arg(long, default_value = "asc", requires = "sort")]
    pub direction: SortDirection,

    /// Only show rows containing this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Print rows as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run<R: Resource>(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let page_size = args.page_size.unwrap_or(ctx.page_size);
    let request = PageRequest::new(0, page_size).context("Invalid page size")?;

    let mut list: ListController<R, _> =
        ListController::with_request(Arc::clone(&ctx.catalog), request);

    let delta = PageRequestDelta {
        page_index: Some(args.page),
        page_size: None,
        sort: args
            .sort
            .map(|column| Some(Sort::new(column, args.direction))),
    };
    list.load(delta)
        .await
        .with_context(|| format!("Failed to list {}s", R::KIND))?;

    let Some(page) = list.current_page() else {
        return Ok(());
    };
    let rows = list.apply_local_filter(args.filter.as_deref().unwrap_or(""));

    if rows.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
    } else if args.json {
        for row in &rows {
            output::json(row)?;
        }
    } else {
        output::table::<R>(&rows);
    }

    output::page_footer(page, rows.len());
    Ok(())
}
