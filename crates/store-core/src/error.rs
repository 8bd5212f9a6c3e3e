//! Error Types for the Storefront Domain

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Request body is not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Body parsed but the name or price is unusable
    #[error("Invalid product data: {0}")]
    InvalidProduct(String),

    /// Bundled catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl StoreError {
    /// Message returned to the client
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "Invalid request body",
            Self::InvalidProduct(_) => "Invalid product data. Name and valid price are required.",
            Self::Catalog(_) => "Product catalog is unavailable.",
        }
    }
}
