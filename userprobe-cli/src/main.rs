//! userprobe CLI - runs the user record service
//!
//! Subcommands:
//! - `serve`: bootstrap the database, then serve the HTTP API
//! - `init`: bootstrap the database and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve a single user record with liveness and readiness probes."
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bootstrap the database, then serve the HTTP API
    Serve(ServeArgs),
    /// Bootstrap the database (create table, seed default user) and exit
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Init => commands::run_init().await?,
    }

    Ok(())
}
