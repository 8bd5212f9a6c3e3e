//! Router

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{create_payment, health_check, list_products};
use crate::state::AppState;

/// API routes plus the WASM frontend
///
/// Unknown paths (including `/success` and `/cancel`) fall through to the
/// frontend's `index.html` so client-side routing can take over.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let frontend =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/products", get(list_products))
        .route("/api/payment", post(create_payment))
        .fallback_service(frontend)
        .with_state(state)
}
