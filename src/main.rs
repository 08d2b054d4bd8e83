// SPDX-License-Identifier: MIT

//! LingoLeap API Server
//!
//! Serves the English learning platform: user accounts, static
//! lesson/game/video catalogs, and per-user progress and game scores.

use lingoleap::{config::Config, db::FirestoreDb, services::ContentService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting LingoLeap API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Load content catalog (built-in unless CATALOG_PATH points at a file)
    let content = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path, "Loading content catalog from file");
            ContentService::load_from_file(path).expect("Failed to load content catalog")
        }
        None => ContentService::default(),
    };
    tracing::info!(
        lessons = content.lessons().len(),
        games = content.games().len(),
        videos = content.videos().len(),
        "Content catalog ready"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        content,
    });

    // Build router
    let app = lingoleap::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lingoleap=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
