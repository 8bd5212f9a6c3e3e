//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Processor rejected or failed the request
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Detail surfaced to the client alongside the generic error
    pub fn details(&self) -> &str {
        match self {
            Self::Stripe(msg) | Self::Config(msg) => msg,
        }
    }
}
