//! Edit record command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use shelf_core::{DetailController, Resource};

use crate::config::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record id
    pub id: String,

    /// Field assignment as name=value (repeatable); an empty value clears the field
    #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
    pub assignments: Vec<String>,
}

pub async fn run<R: Resource>(args: EditArgs, ctx: &AppContext) -> Result<()> {
    let mut detail: DetailController<R, _> =
        DetailController::load(Arc::clone(&ctx.catalog), &args.id)
            .await
            .with_context(|| format!("Failed to get {} '{}'", R::KIND, args.id))?;

    detail.enter_edit()?;

    for assignment in &args.assignments {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid assignment '{}': expected FIELD=VALUE", assignment))?;

        if let Err(e) = detail.set_field_input(field, value) {
            // Nothing has been sent yet; leave the record untouched
            detail.cancel()?;
            return Err(e).with_context(|| format!("Cannot set '{}'", field));
        }
    }

    detail
        .save()
        .await
        .with_context(|| format!("Failed to save {} '{}'", R::KIND, args.id))?;

    output::success(&format!("Saved {} {}", R::KIND, detail.record().id()));
    Ok(())
}
