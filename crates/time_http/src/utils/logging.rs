use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{TimeServerError, TimeServerResult};

/// Initialize logging based on environment configuration
///
/// # Environment Variables
/// - `RUST_LOG`: Filter directives (e.g. `info`, `wat_time_server=debug,tower_http=debug`)
/// - `LOG_LEVEL`: Fallback level used when `RUST_LOG` is unset
///
/// Logging stays disabled when neither variable is set.
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(TimeServerError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> TimeServerResult<()> {
    let Some(env_filter) = env_filter() else {
        return Ok(());
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| TimeServerError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

fn env_filter() -> Option<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    std::env::var("LOG_LEVEL").ok().map(EnvFilter::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test environment variable logging setup
    #[test]
    fn test_env_logging_setup() {
        // Without RUST_LOG or LOG_LEVEL this is a no-op; with them it installs once
        let result = init_logging();
        assert!(result.is_ok());
    }
}
