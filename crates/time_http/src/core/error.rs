use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum TimeServerError {
    #[error("Invalid fixed offset: {seconds} seconds")]
    InvalidOffset { seconds: i32 },
    #[error("Clock unavailable: {reason}")]
    ClockUnavailable { reason: String },
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl TimeServerError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for TimeServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        self.status_code().into_response()
    }
}

pub type TimeServerResult<T> = Result<T, TimeServerError>;

#[cfg(test)]
mod tests {
    use super::TimeServerError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_conversion() {
        let error = TimeServerError::InvalidOffset { seconds: 90_000 };
        assert!(error.to_string().contains("90000"));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_clock_error_is_internal() {
        let error = TimeServerError::ClockUnavailable {
            reason: "out of range".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Clock unavailable: out of range");
    }
}
