//! Delete record command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use shelf_core::{DetailController, Navigation, Resource};

use crate::config::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: String,
}

pub async fn run<R: Resource>(args: DeleteArgs, ctx: &AppContext) -> Result<()> {
    let mut detail: DetailController<R, _> =
        DetailController::load(Arc::clone(&ctx.catalog), &args.id)
            .await
            .with_context(|| format!("Failed to get {} '{}'", R::KIND, args.id))?;

    let Navigation::ToList(kind) = detail
        .delete()
        .await
        .with_context(|| format!("Failed to delete {} '{}'", R::KIND, args.id))?;

    output::success(&format!("Deleted {} {}", kind, args.id));
    Ok(())
}
