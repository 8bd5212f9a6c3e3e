//! Checkout Request and Wire Types
//!
//! Validation mirrors what the browser is allowed to send: a non-empty `name`
//! string and a positive numeric `price`. Anything else is rejected before a
//! payment processor is contacted.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StoreError};

/// Supported settlement currencies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
}

/// Body of `POST /api/payment`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Product name shown on the hosted checkout page
    pub name: String,

    /// Unit price in USD
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl CheckoutRequest {
    /// Parse and validate a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| StoreError::InvalidBody(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Validate an already-parsed JSON value
    ///
    /// `price` must be a JSON number; numeric strings are rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StoreError::InvalidProduct("name must be a non-empty string".into()))?;

        let price = value
            .get("price")
            .and_then(Value::as_f64)
            .ok_or_else(|| StoreError::InvalidProduct("price must be a number".into()))?;

        if price <= 0.0 {
            return Err(StoreError::InvalidProduct(format!(
                "price must be positive, got {price}"
            )));
        }

        let price = Decimal::from_f64(price).ok_or_else(|| {
            StoreError::InvalidProduct(format!("price {price} is out of range"))
        })?;

        let request = Self {
            name: name.to_string(),
            price,
        };
        request.unit_amount()?;

        Ok(request)
    }

    /// Price in the smallest currency unit: `round(price * 100)`, halves away from zero
    ///
    /// Fails if the amount overflows or rounds down to zero cents.
    pub fn unit_amount(&self) -> Result<i64> {
        self.price
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .filter(|cents| *cents > 0)
            .ok_or_else(|| {
                StoreError::InvalidProduct(format!(
                    "price {} is not a chargeable amount",
                    self.price
                ))
            })
    }
}

/// Successful response of `POST /api/payment`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Hosted checkout page to redirect the browser to
    pub url: String,

    pub session_id: String,
}

/// Error response body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
