use std::net::IpAddr;

use clap::Parser;

use crate::config::{Config, DEFAULT_HOST, DEFAULT_PORT};

/// WAT Time Server
///
/// A small HTTP server reporting the current West Africa Time (UTC+1).
///
/// ## Endpoints
/// - `GET /time`: `{"current_time": "YYYY-MM-DD HH:MM:SS WAT"}`
///
/// ## Development
/// ```bash
/// cargo run --bin wat-time-server -- --port 5000
/// curl http://localhost:5000/time
/// ```
///
/// ## Environment Variables
/// - `WAT_TIME_HOST`: Address to listen on (default `0.0.0.0`)
/// - `WAT_TIME_PORT`: Port to listen on (default `5000`)
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "wat-time-server")]
#[command(about = "An HTTP server reporting the current West Africa Time as JSON")]
#[command(version)]
#[command(
    long_about = "An HTTP server with a single endpoint, GET /time, returning the current time \nin West Africa Time (UTC+1, no daylight saving) as a JSON document."
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "WAT_TIME_HOST", default_value_t = DEFAULT_HOST, value_name = "IP")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "WAT_TIME_PORT", default_value_t = DEFAULT_PORT, value_name = "PORT")]
    pub port: u16,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into()
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            host: cli.host,
            port: cli.port,
        }
    }
}
