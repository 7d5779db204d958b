//! Record subcommands shared by books and checkouts.

mod delete;
mod edit;
mod get;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

use shelf_core::Resource;

use crate::config::AppContext;

#[derive(Args, Debug)]
pub struct RecordCommand {
    #[command(subcommand)]
    pub command: RecordSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RecordSubcommand {
    /// List one page of records
    List(list::ListArgs),

    /// Show a single record
    Get(get::GetArgs),

    /// Change fields of a record and save it
    Edit(edit::EditArgs),

    /// Delete a record
    Delete(delete::DeleteArgs),
}

pub async fn handle<R: Resource>(cmd: RecordCommand, ctx: &AppContext) -> Result<()> {
    match cmd.command {
        RecordSubcommand::List(args) => list::run::<R>(args, ctx).await,
        RecordSubcommand::Get(args) => get::run::<R>(args, ctx).await,
        RecordSubcommand::Edit(args) => edit::run::<R>(args, ctx).await,
        RecordSubcommand::Delete(args) => delete::run::<R>(args, ctx).await,
    }
}
