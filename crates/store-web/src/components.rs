//! UI Components

use leptos::prelude::*;
use store_core::Product;

use crate::api;

/// Product card with a one-click checkout button
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let request = product.checkout_request();
    let pay_label = product.pay_label();
    let Product {
        image,
        title,
        description,
        ..
    } = product;
    let alt = title.clone();

    let checkout = move |_| {
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);

        let request = request.clone();
        leptos::task::spawn_local(async move {
            match api::create_checkout(&request).await {
                Ok(url) => api::redirect(&url),
                Err(e) => leptos::logging::error!("Payment failed: {e}"),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=image alt=alt />
            </div>
            <div class="product-body">
                <h2>{title}</h2>
                <p class="description">{description}</p>
                <button
                    class="btn btn-primary"
                    on:click=checkout
                    disabled=move || loading.get()
                >
                    {move || {
                        if loading.get() { "Processing...".to_string() } else { pay_label.clone() }
                    }}
                </button>
            </div>
        </div>
    }
}

/// Centered result panel used by the success and cancel pages
#[component]
pub fn ResultPanel(
    /// `success` or `cancel`, selects the badge colour
    kind: &'static str,
    icon: &'static str,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="result">
            <div class="result-panel">
                <div class=format!("badge badge-{kind}")>{icon}</div>
                <h1>{title}</h1>
                {children()}
                <a href="/" class="btn btn-primary">"Back to Home"</a>
            </div>
        </div>
    }
}
