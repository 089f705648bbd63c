mod cli;
mod config;
mod core;
mod server;
mod utils;

use cli::Cli;
use utils::logging;

/// WAT Time Server
///
/// Serves `GET /time`, the current West Africa Time (UTC+1) as JSON.
///
/// Usage: cargo run --bin wat-time-server -- --host 0.0.0.0 --port 5000
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config();

    // Initialize logging based on environment
    logging::init_logging()?;

    tracing::info!(
        "Starting WAT time server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.bind_addr()
    );

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running WAT time server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
