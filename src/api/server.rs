use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{services::get_wallpaper, state::AppState};
use crate::config::Config;
use crate::upstream::HttpSource;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every path and method goes to the wallpaper handler, which applies the prefix guard
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(get_wallpaper)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<(), AnyError> {
    let address = config.server.bind_addr;

    info!(base_url = %config.upstream.base_url, "Initializing archive client");
    let source = HttpSource::new(&config.upstream)
        .map_err(|e| format!("Failed to build archive client: {}", e))?;

    info!(
        cache_max_age = %config.server.cache_max_age,
        emit_cors_header = config.server.emit_cors_header,
        route_prefix = config.server.route_prefix.as_deref().unwrap_or("-"),
        "Deployment profile"
    );

    let state = AppState::new(config, Arc::new(source));
    let metrics = state.metrics.clone();
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "dailywall listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    metrics.log_snapshot();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
