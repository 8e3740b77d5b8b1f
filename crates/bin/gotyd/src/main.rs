//! # gotyd — goty voting daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the store adapter and application services
//! - Build the axum router, injecting the services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use goty_adapter_http_axum::state::AppState;
use goty_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteGameStore};
use goty_app::services::catalog_service::CatalogService;
use goty_app::services::vote_service::VoteService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Store adapter
    let store = SqliteGameStore::new(db.pool().clone());
    let vote_store = SqliteGameStore::new(db.pool().clone());

    // Services
    let catalog_service = CatalogService::new(store);
    let vote_service = VoteService::new(vote_store);

    // HTTP
    let state = AppState::new(catalog_service, vote_service);
    let app = goty_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "gotyd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
