// ABOUTME: Server binary wiring configuration, store, and router together
// ABOUTME: Production entry point with structured logging and graceful shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Storefront API Server Binary
//!
//! Starts the REST API with user authentication, catalog, and order
//! management. Refuses to start without a `JWT_SECRET`.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use storefront_server::{
    config::environment::ServerConfig,
    database::{SqliteStore, StoreProvider},
    logging,
    resources::ServerResources,
    routes,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "storefront-server")]
#[command(about = "Storefront API - REST backend for catalog, orders, and authentication")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Startup-fatal when JWT_SECRET is absent
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("Starting storefront server: {}", config.summary());

    let database = SqliteStore::connect(&config.database.url).await?;
    database.migrate().await?;
    info!("Database initialized: {}", config.database.url);

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port)).await?;
    info!("Listening on port {http_port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
