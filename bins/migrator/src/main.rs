//! Applies the Fintrack schema.
//!
//! Reads `DATABASE_URL` (or `.env`). Subcommands: `up`, `down`, `status`, `fresh`, `refresh`,
//! `reset`.

use fintrack_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI installs its own tracing subscriber.
    cli::run_cli(Migrator).await;
}
