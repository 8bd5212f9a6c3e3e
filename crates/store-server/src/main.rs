//! Storefront HTTP Server
//!
//! Axum-based server providing the checkout API and hosting the WASM
//! storefront frontend.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_core::Catalog;
use store_payments::{CheckoutProcessor, StripeClient};

use crate::config::ServerConfig;
use crate::routes::router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Payments are mandatory
    let stripe = StripeClient::from_env().context("cannot start without a payment processor")?;
    let processor: Arc<dyn CheckoutProcessor> = Arc::new(stripe);
    tracing::info!("✓ Stripe configured");

    let catalog = Catalog::bundled().context("failed to load product catalog")?;
    tracing::info!("Loaded {} products", catalog.len());

    let addr = config.bind_addr.clone();
    let state = AppState::new(processor, catalog, config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🛒 storefront running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/products - Product catalog");
    tracing::info!("  POST /api/payment  - Create checkout session");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
