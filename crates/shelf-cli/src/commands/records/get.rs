//! Get record command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use shelf_core::{DetailController, Resource};

use crate::config::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Record id
    pub id: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<R: Resource>(args: GetArgs, ctx: &AppContext) -> Result<()> {
    let detail: DetailController<R, _> = DetailController::load(Arc::clone(&ctx.catalog), &args.id)
        .await
        .with_context(|| format!("Failed to get {} '{}'", R::KIND, args.id))?;

    if args.json {
        output::json_pretty(detail.record())?;
    } else {
        for (spec, value) in detail.form().iter() {
            output::field(spec.label, &value.to_string());
        }
    }

    Ok(())
}
