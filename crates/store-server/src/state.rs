//! Application State

use std::sync::Arc;

use store_core::Catalog;
use store_payments::CheckoutProcessor;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout processor (Stripe in production)
    pub processor: Arc<dyn CheckoutProcessor>,

    /// Bundled product catalog
    pub catalog: Arc<Catalog>,

    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        processor: Arc<dyn CheckoutProcessor>,
        catalog: Catalog,
        config: ServerConfig,
    ) -> Self {
        Self {
            processor,
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
