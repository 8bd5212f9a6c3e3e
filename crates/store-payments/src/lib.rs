//! # store-payments
//!
//! Checkout session creation for the storefront.
//!
//! ## Stripe Checkout (Hosted)
//!
//! **Flow:** Product card → Redirect to Stripe's hosted page → Redirect back
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────────────┐
//! │  Storefront │────▶│  Stripe Hosted  │────▶│  /success?session_id=…   │
//! │  (catalog)  │     │  Checkout Page  │  └─▶│  /cancel                 │
//! └─────────────┘     └─────────────────┘     └──────────────────────────┘
//! ```
//!
//! The browser never sees card data; the server only creates the session
//! and hands back its URL.
//!
//! ## Processors
//!
//! [`CheckoutProcessor`] is the seam between the HTTP layer and the payment
//! provider:
//!
//! - [`StripeClient`]: live Stripe API via async-stripe
//! - [`MockProcessor`]: records calls, returns synthetic sessions or a fixed failure
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_core::CheckoutRequest;
//! use store_payments::{CheckoutProcessor, SessionParams, StripeClient};
//!
//! let stripe = StripeClient::from_env()?;
//! let params = SessionParams::single_item(&request, "https://shop.example.com")?;
//! let session = stripe.create_session(&params).await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
mod processor;

pub use checkout::{CheckoutSession, SessionParams, StripeClient};
pub use error::{PaymentError, Result};
pub use processor::{CheckoutProcessor, MockProcessor};
