//! # store-core
//!
//! Domain types shared by the storefront server and its WASM frontend.
//!
//! ## Checkout Flow
//!
//! ```text
//! ┌──────────────┐  {name, price}  ┌──────────────┐  SessionParams  ┌──────────────┐
//! │ Product card │────────────────▶│ /api/payment │────────────────▶│  Processor   │
//! │  (catalog)   │◀────────────────│  (validate)  │◀────────────────│  (Stripe)    │
//! └──────────────┘ {url, sessionId}└──────────────┘  {id, url}      └──────────────┘
//! ```
//!
//! Prices are `rust_decimal::Decimal` in memory and plain JSON numbers on the
//! wire. Conversion to integer cents happens once, in
//! [`CheckoutRequest::unit_amount`].

pub mod checkout;
pub mod error;
pub mod product;

pub use checkout::{CheckoutRequest, CheckoutResponse, Currency, ErrorBody};
pub use error::{Result, StoreError};
pub use product::{Catalog, Product};
