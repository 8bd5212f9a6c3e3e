//! Payment Processor Abstraction

mod mock;

pub use mock::MockProcessor;

use async_trait::async_trait;

use crate::checkout::{CheckoutSession, SessionParams};
use crate::error::Result;

/// Checkout processor trait (Strategy pattern)
///
/// Implemented by [`StripeClient`](crate::StripeClient) for live payments and
/// [`MockProcessor`] for tests and offline demos.
#[async_trait]
pub trait CheckoutProcessor: Send + Sync {
    /// Create a hosted checkout session
    async fn create_session(&self, params: &SessionParams) -> Result<CheckoutSession>;

    /// Processor name
    fn name(&self) -> &str;
}
