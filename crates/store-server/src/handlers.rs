//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;

use store_core::{CheckoutRequest, CheckoutResponse, ErrorBody, Product, StoreError};
use store_payments::SessionParams;

use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub processor: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        processor: state.processor.name().to_string(),
    })
}

/// Bundled product catalog
///
/// The WASM frontend compiles the same catalog in, so this endpoint serves
/// external clients (scripts, other storefronts) only.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Create a hosted checkout session for a single product
///
/// The body is read as raw bytes so requests without a JSON content type are
/// still validated the same way.
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckoutResponse>, ApiError> {
    tracing::info!("Received payment request");

    let request = CheckoutRequest::from_slice(&body).map_err(reject)?;
    tracing::debug!(name = %request.name, price = %request.price, "Parsed request data");

    let origin = request_origin(&headers).unwrap_or(state.config.public_origin.as_str());
    let params = SessionParams::single_item(&request, origin).map_err(reject)?;

    tracing::info!(
        product = %params.product_name,
        unit_amount = params.unit_amount,
        processor = state.processor.name(),
        "Creating checkout session"
    );

    let session = state.processor.create_session(&params).await.map_err(|e| {
        tracing::error!(error = %e, "Payment processor error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::with_details("Payment processing error", e.details())),
        )
    })?;

    tracing::info!(session_id = %session.id, "Checkout session created");

    Ok(Json(CheckoutResponse {
        url: session.url,
        session_id: session.id,
    }))
}

fn reject(err: StoreError) -> ApiError {
    match &err {
        StoreError::InvalidBody(_) => tracing::error!(error = %err, "Error parsing request body"),
        _ => tracing::warn!(error = %err, "Rejected checkout request"),
    }
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.user_message())))
}

/// `Origin` header, ignoring the opaque `null` origin
fn request_origin(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "null")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, http::Request, Router};
    use serde_json::{json, Value};
    use store_core::{Catalog, Currency};
    use store_payments::MockProcessor;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::routes::router;

    const INVALID_PRODUCT: &str = "Invalid product data. Name and valid price are required.";

    fn app(processor: Arc<MockProcessor>) -> Router {
        let state = AppState::new(processor, Catalog::bundled().unwrap(), ServerConfig::default());
        router(state)
    }

    fn payment(body: &str) -> Request<Body> {
        Request::post("/api/payment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_payment() {
        let processor = Arc::new(MockProcessor::new());
        let request = Request::post("/api/payment")
            .header(header::ORIGIN, "https://shop.example.com")
            .body(Body::from(r#"{"name": "Wool Beanie", "price": 24.99}"#))
            .unwrap();

        let (status, body) = send(app(processor.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sessionId"], "cs_test_mock_0001");
        assert_eq!(body["url"], "https://checkout.stripe.com/c/pay/cs_test_mock_0001");

        let calls = processor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].product_name, "Wool Beanie");
        assert_eq!(calls[0].description, "Purchase of Wool Beanie");
        assert_eq!(calls[0].unit_amount, 2499);
        assert_eq!(calls[0].currency, Currency::Usd);
        assert_eq!(calls[0].quantity, 1);
        assert_eq!(
            calls[0].success_url,
            "https://shop.example.com/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(calls[0].cancel_url, "https://shop.example.com/cancel");
    }

    #[tokio::test]
    async fn test_unit_amount_is_rounded() {
        let processor = Arc::new(MockProcessor::new());

        let body = r#"{"name": "Mug", "price": 19.999}"#;
        let (status, _) = send(app(processor.clone()), payment(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(processor.calls()[0].unit_amount, 2000);
    }

    #[tokio::test]
    async fn test_default_origin_without_header() {
        let processor = Arc::new(MockProcessor::new());

        let body = r#"{"name": "Mug", "price": 18.5}"#;
        let (status, _) = send(app(processor.clone()), payment(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(processor.calls()[0].cancel_url, "http://localhost:3000/cancel");
    }

    #[tokio::test]
    async fn test_invalid_price_rejected() {
        for body in [
            r#"{"name": "Mug"}"#,
            r#"{"name": "Mug", "price": 0}"#,
            r#"{"name": "Mug", "price": -3}"#,
            r#"{"name": "Mug", "price": "18.50"}"#,
        ] {
            let processor = Arc::new(MockProcessor::new());
            let (status, response) = send(app(processor.clone()), payment(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response, json!({"error": INVALID_PRODUCT}), "{body}");
            assert!(processor.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_missing_name_rejected() {
        for body in [r#"{"price": 10}"#, r#"{"name": "", "price": 10}"#] {
            let processor = Arc::new(MockProcessor::new());
            let (status, response) = send(app(processor.clone()), payment(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response["error"], INVALID_PRODUCT);
            assert!(processor.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let processor = Arc::new(MockProcessor::new());

        let (status, response) =
            send(app(processor.clone()), payment("{\"name\": \"Mug\",")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "Invalid request body"}));
        assert!(processor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_processor_failure() {
        let processor = Arc::new(MockProcessor::failing("Your card was declined."));

        let (status, response) =
            send(app(processor.clone()), payment(r#"{"name": "Desk Lamp", "price": 64}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"], "Payment processing error");
        assert_eq!(response["details"], "Your card was declined.");
        assert_eq!(processor.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_payment_requires_post() {
        let request = Request::get("/api/payment").body(Body::empty()).unwrap();
        let (status, _) = send(app(Arc::new(MockProcessor::new())), request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_list_products() {
        let request = Request::get("/api/products").body(Body::empty()).unwrap();
        let (status, body) = send(app(Arc::new(MockProcessor::new())), request).await;

        assert_eq!(status, StatusCode::OK);
        let products = body.as_array().unwrap();
        assert_eq!(products.len(), Catalog::bundled().unwrap().len());
        assert!(products.iter().all(|p| p["price"].as_f64().unwrap() > 0.0));
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(Arc::new(MockProcessor::new())), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["processor"], "mock");
    }

    #[test]
    fn test_null_origin_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ORIGIN, "null".parse().unwrap());
        assert_eq!(request_origin(&headers), None);

        headers.insert(header::ORIGIN, "https://shop.example.com".parse().unwrap());
        assert_eq!(request_origin(&headers), Some("https://shop.example.com"));
    }
}
