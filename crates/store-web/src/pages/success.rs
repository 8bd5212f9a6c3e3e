//! Success Page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::ResultPanel;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = move || query.read().get("session_id");

    Effect::new(move |_| {
        if let Some(id) = session_id() {
            leptos::logging::log!("Payment successful. Session ID: {id}");
        }
    });

    view! {
        <ResultPanel kind="success" icon="✓" title="Payment Successful!">
            <p>
                "Thank you for your purchase. Your payment was successful and your order is being processed."
            </p>
            <Show when=move || session_id().is_some()>
                <p class="reference">"Reference: " {move || session_id().unwrap_or_default()}</p>
            </Show>
        </ResultPanel>
    }
}
