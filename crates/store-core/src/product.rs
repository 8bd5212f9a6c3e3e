//! Product Catalog
//!
//! The catalog is a static JSON file compiled into the binary. Both the
//! server and the frontend read the same copy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutRequest;
use crate::error::{Result, StoreError};

const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

/// A product offered in the storefront
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Image URL shown on the product card
    pub image: String,

    /// Display title, also used as the checkout line item name
    pub title: String,

    pub description: String,

    /// Price in USD
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Build the checkout payload sent when this product's button is clicked
    pub fn checkout_request(&self) -> CheckoutRequest {
        CheckoutRequest {
            name: self.title.clone(),
            price: self.price,
        }
    }

    /// Button label, e.g. `Pay $29.99`
    pub fn pay_label(&self) -> String {
        format!("Pay ${}", self.price)
    }
}

/// Read-only product list
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog bundled at compile time
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from a JSON array of products
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| StoreError::Catalog(e.to_string()))?;

        if let Some(bad) = products.iter().find(|p| p.price <= Decimal::ZERO) {
            return Err(StoreError::Catalog(format!(
                "product '{}' has non-positive price {}",
                bad.title, bad.price
            )));
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
