//! Cancel Page

use leptos::prelude::*;

use crate::components::ResultPanel;

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <ResultPanel kind="cancel" icon="✕" title="Payment Cancelled">
            <p>"Your payment was cancelled. No charges were made to your account."</p>
            <p class="help">
                "Need help? " <a href="mailto:support@example.com">"Contact support"</a>
            </p>
        </ResultPanel>
    }
}
