//! beacon-cli: command-line client for the Beacon Youth Initiative backend.
//! Drives the same form controllers, list views, and mailer workflow as the
//! library, so the CLI and any embedding UI share one validation path.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod context;
mod handlers;
mod io;
mod print;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};
use context::{CliError, build_ctx_from_cli};
use handlers::{admin, blog, contact, engage, enrollments, mailer, volunteers};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = build_ctx_from_cli(&cli)?;

    match cli.command {
        Commands::Enrollments(cmd) => enrollments::handle(&ctx, cmd.action).await?,
        Commands::Volunteers(cmd) => volunteers::handle(&ctx, cmd.action).await?,
        Commands::Contact(cmd) => contact::handle(&ctx, cmd.action).await?,
        Commands::Blog(cmd) => blog::handle(&ctx, cmd.action).await?,
        Commands::Mailer(cmd) => mailer::handle(&ctx, cmd.action).await?,
        Commands::Engage(cmd) => engage::handle(&ctx, cmd.action).await?,
        Commands::Admin(cmd) => admin::handle(&ctx, cmd.action).await?,
    }

    Ok(())
}
