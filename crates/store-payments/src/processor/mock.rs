//! Mock Checkout Processor
//!
//! Records every session request and answers without touching the network.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::CheckoutProcessor;
use crate::checkout::{CheckoutSession, SessionParams};
use crate::error::{PaymentError, Result};

/// In-memory processor that records calls
pub struct MockProcessor {
    /// Failure message returned for every call, if set
    failure: Option<String>,
    calls: Mutex<Vec<SessionParams>>,
}

impl Default for MockProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProcessor {
    /// Processor that always succeeds
    pub const fn new() -> Self {
        Self {
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Processor that fails every call with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Parameters received so far, oldest first
    pub fn calls(&self) -> Vec<SessionParams> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CheckoutProcessor for MockProcessor {
    async fn create_session(&self, params: &SessionParams) -> Result<CheckoutSession> {
        let seq = {
            let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
            calls.push(params.clone());
            calls.len()
        };

        if let Some(message) = &self.failure {
            return Err(PaymentError::Stripe(message.clone()));
        }

        let id = format!("cs_test_mock_{seq:04}");
        tracing::debug!(session_id = %id, "Mock checkout session created");

        Ok(CheckoutSession {
            url: format!("https://checkout.stripe.com/c/pay/{id}"),
            id,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use store_core::CheckoutRequest;

    fn params() -> SessionParams {
        let request = CheckoutRequest {
            name: "Desk Lamp".into(),
            price: dec!(64),
        };
        SessionParams::single_item(&request, "http://localhost:3000").unwrap()
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let processor = MockProcessor::new();

        let first = processor.create_session(&params()).await.unwrap();
        let second = processor.create_session(&params()).await.unwrap();

        assert_eq!(first.id, "cs_test_mock_0001");
        assert_ne!(first.id, second.id);
        assert!(first.url.ends_with(&first.id));

        let calls = processor.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].unit_amount, 6400);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let processor = MockProcessor::failing("card_declined");

        let err = processor.create_session(&params()).await.unwrap_err();
        assert_eq!(err.details(), "card_declined");
        assert_eq!(processor.calls().len(), 1);
    }
}
