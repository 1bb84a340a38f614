use coffee_menu_rust::config::Settings;
use coffee_menu_rust::menu::{AppState, MenuStore};
use coffee_menu_rust::router::create_app_router;
use coffee_menu_rust::telemetry::init_telemetry;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration and start logging
    let settings = Settings::load()?;
    init_telemetry(&settings.logging)?;

    // Initialize application state
    let menu = if settings.menu.seed_defaults {
        MenuStore::with_defaults()
    } else {
        MenuStore::new()
    };
    info!(items = menu.len(), "menu store ready");
    let state = Arc::new(AppState::new(menu));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
