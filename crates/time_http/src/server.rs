use axum::{Json, Router, extract::State, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::core::{
    error::{TimeServerError, TimeServerResult},
    models::CurrentTimeResponse,
    provider::TimeServer,
};

/// Build the HTTP router. Only `GET /time` is registered; axum answers
/// unknown paths with 404 and other methods on `/time` with 405.
pub fn router(time_server: TimeServer) -> Router {
    Router::new()
        .route("/time", get(get_current_time))
        .layer(TraceLayer::new_for_http())
        .with_state(time_server)
}

/// Current time in West Africa Time
async fn get_current_time(
    State(time_server): State<TimeServer>,
) -> TimeServerResult<Json<CurrentTimeResponse>> {
    let reading = time_server.current_time()?;
    tracing::debug!(
        timestamp = %reading.timestamp.to_rfc3339(),
        current_time = %reading.formatted,
        "served current time"
    );
    Ok(Json(reading.into()))
}

pub async fn run(config: Config) -> TimeServerResult<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| TimeServerError::Bind { addr, source })?;

    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "WAT time server listening");

    axum::serve(listener, router(TimeServer::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("WAT time server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
