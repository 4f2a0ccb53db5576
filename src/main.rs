/// Main entry point for the CyclePray MCP server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cycle_pray_mcp::config::{Config, LogLevel};
use cycle_pray_mcp::CyclePrayServer;

/// Command line arguments for the CyclePray MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses CYCLE_PRAY_DATABASE or a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = LogLevel::from_flags(args.debug, args.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(log_level.directive())
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting CyclePray MCP server");

    let config = Config::resolve(args.database, log_level)?;
    info!("Using database at: {}", config.database_path.display());

    let server = CyclePrayServer::new(config.database_path).await?;

    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("CyclePray MCP server shutdown complete");
    Ok(())
}
