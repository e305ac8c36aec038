//! Configuration Console service
//!
//! Browser-facing console for business-messaging configuration:
//! - Brand, agent, and location management via the remote API
//! - Form submissions decoded into nested configuration resources
//! - Launch/verification status on agent edit pages

use std::sync::Arc;

use tokio::signal;
use tracing::info;

use config_console::api::{self, ConsoleState};
use config_console::infrastructure::BusinessCommsClient;
use config_console::ConsoleConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("config_console=debug".parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting Configuration Console");

    let config = ConsoleConfig::from_env();
    let client = BusinessCommsClient::new(&config);
    let state = Arc::new(ConsoleState::new(client));

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_bind).await?;
    info!(http = %config.http_bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Configuration Console stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
