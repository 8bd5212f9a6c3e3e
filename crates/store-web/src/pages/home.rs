//! Home Page

use leptos::prelude::*;
use store_core::Catalog;

use crate::components::ProductCard;

#[component]
pub fn HomePage() -> impl IntoView {
    match Catalog::bundled() {
        Ok(catalog) => view! {
            <section class="catalog">
                <div class="grid">
                    {catalog
                        .products()
                        .iter()
                        .cloned()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
        Err(e) => {
            leptos::logging::error!("Catalog unavailable: {e}");
            view! { <p class="error">"Products are unavailable right now."</p> }.into_any()
        }
    }
}
