//! starshelf CLI - personal repository bookmark organizer
//!
//! The only runtime surface is the `serve` subcommand, which starts the
//! HTTP API server. State is in-memory and lost when the process exits.

use anyhow::Result;
use clap::{Parser, Subcommand};
use starshelf_server::ServerArgs;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "starshelf",
    author,
    version,
    about = "Organize bookmarked code repositories with tags, notes, and status"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServerArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => starshelf_server::run_server(args).await?,
    }

    Ok(())
}
