use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use purity::catalog::Catalog;
use purity::controller::Controller;
use purity::env_config;
use purity::server::{create_router, AppState, MemoryClipboard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog_path = env_config::catalog_path();
    let catalog = match Catalog::from_json_file(&catalog_path) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Failed to load catalog from {catalog_path}: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        path = %catalog_path,
        questions = catalog.len(),
        enabled = catalog.enabled_count(),
        "catalog loaded"
    );

    let controller = Controller::new(catalog, env_config::profile(), env_config::base_url());
    let state = AppState::new(controller, Some(Arc::new(MemoryClipboard::default())));
    let app = create_router(state);

    let port = env_config::server_port();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    tracing::info!("listening on port {port}, press Ctrl+C to stop");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("stopping server");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
