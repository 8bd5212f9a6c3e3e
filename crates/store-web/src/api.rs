//! API Client

use store_core::{CheckoutRequest, CheckoutResponse, ErrorBody};

/// Origin of the page, used to build absolute API URLs
fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Create a checkout session and return the hosted checkout URL
pub async fn create_checkout(request: &CheckoutRequest) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/payment", origin()))
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: CheckoutResponse = response.json().await.map_err(|e| e.to_string())?;
        if data.url.is_empty() {
            return Err("No URL received from payment API".into());
        }
        Ok(data.url)
    } else {
        let data: ErrorBody = response
            .json()
            .await
            .unwrap_or_else(|_| ErrorBody::new("Request failed"));
        Err(match data.details {
            Some(details) => format!("{}: {}", data.error, details),
            None => data.error,
        })
    }
}

/// Send the browser to `url`
pub fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        leptos::logging::error!("Redirect to {url} failed: no window");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        leptos::logging::error!("Redirect to {url} failed: {e:?}");
    }
}
