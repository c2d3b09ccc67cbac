//! # Item Catalog Server
//!
//! Entry point: parse the bind address, set up tracing, start the store
//! actor, seed it, and serve the router until the process is stopped.

use clap::Parser;
use item_web::lifecycle::{setup_tracing, CatalogSystem};
use item_web::pages::Pages;
use item_web::routes::{router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Server-rendered item catalog.
#[derive(Parser, Debug)]
#[command(name = "item-web")]
struct Args {
    /// Address the HTTP server binds to.
    #[arg(long, env = "ITEM_WEB_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();
    let args = Args::parse();

    info!("Starting item catalog");

    // Start the store actor and seed it before accepting any request
    let system = CatalogSystem::start();
    system.seed().await.map_err(|e| e.to_string())?;

    let pages = Pages::new().map_err(|e| e.to_string())?;
    let app = router(AppState {
        store: system.store.clone(),
        pages: Arc::new(pages),
    });

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    info!(addr = %args.bind, "Listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    system.shutdown().await
}
