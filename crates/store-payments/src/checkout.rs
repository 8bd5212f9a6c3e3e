//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach: one-off `payment` mode
//! sessions with a single inline-priced line item.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use store_core::{CheckoutRequest, Currency};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionPaymentMethodTypes, Currency as StripeCurrency,
};

use crate::error::{PaymentError, Result};
use crate::processor::CheckoutProcessor;

/// Placeholder Stripe substitutes with the real session id on redirect
const SESSION_ID_TEMPLATE: &str = "{CHECKOUT_SESSION_ID}";

/// Processor-agnostic description of a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Line item name shown on the hosted page
    pub product_name: String,

    pub description: String,

    /// Price per unit in cents
    pub unit_amount: i64,

    pub currency: Currency,

    pub quantity: u64,

    /// Redirect after successful payment; contains the session id template
    pub success_url: String,

    /// Redirect if the visitor abandons checkout
    pub cancel_url: String,
}

impl SessionParams {
    /// Parameters for buying exactly one unit of `request`, redirecting back to `origin`
    pub fn single_item(request: &CheckoutRequest, origin: &str) -> store_core::Result<Self> {
        let origin = origin.trim_end_matches('/');

        Ok(Self {
            product_name: request.name.clone(),
            description: format!("Purchase of {}", request.name),
            unit_amount: request.unit_amount()?,
            currency: Currency::Usd,
            quantity: 1,
            success_url: format!("{origin}/success?session_id={SESSION_ID_TEMPLATE}"),
            cancel_url: format!("{origin}/cancel"),
        })
    }
}

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Processor session ID
    pub id: String,

    /// URL to redirect the visitor to
    pub url: String,
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from the `STRIPE_SECRET_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        Self::from_secret(std::env::var("STRIPE_SECRET_KEY").ok())
    }

    fn from_secret(secret_key: Option<String>) -> Result<Self> {
        secret_key
            .filter(|key| !key.trim().is_empty())
            .map(|key| Self::new(&key))
            .ok_or_else(|| {
                PaymentError::Config(
                    "STRIPE_SECRET_KEY is not defined in environment variables".into(),
                )
            })
    }
}

const fn stripe_currency(currency: Currency) -> StripeCurrency {
    match currency {
        Currency::Usd => StripeCurrency::USD,
    }
}

/// Stripe request for a single-item `payment` mode session
fn checkout_params(request: &SessionParams) -> CreateCheckoutSession<'_> {
    let mut params = CreateCheckoutSession::new();
    params.mode = Some(CheckoutSessionMode::Payment);
    params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
    params.success_url = Some(request.success_url.as_str());
    params.cancel_url = Some(request.cancel_url.as_str());

    params.line_items = Some(vec![CreateCheckoutSessionLineItems {
        quantity: Some(request.quantity),
        price_data: Some(CreateCheckoutSessionLineItemsPriceData {
            currency: stripe_currency(request.currency),
            unit_amount: Some(request.unit_amount),
            product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                name: request.product_name.clone(),
                description: Some(request.description.clone()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }]);

    params
}

#[async_trait]
impl CheckoutProcessor for StripeClient {
    async fn create_session(&self, request: &SessionParams) -> Result<CheckoutSession> {
        let params = checkout_params(request);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
        })
    }

    fn name(&self) -> &str {
        "stripe"
    }
}
