//! Landing page with a featured slice of the catalog.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::product_card::ProductCard;
use crate::util::gated_actions::use_add_to_cart;

/// How many products the landing page features.
const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell>
            <HomeContent/>
        </PageShell>
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products());
    let on_add = use_add_to_cart();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Groceries, delivered fresh"</h1>
                <p>"Shop the catalog and get same-day delivery from your local store."</p>
                <a class="btn btn--primary" href="/products">"Browse products"</a>
            </section>
            <section class="home-page__featured">
                <h2>"Featured"</h2>
                <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                    {move || {
                        products.get().map(|list| match list {
                            Some(list) => view! {
                                <div class="product-grid">
                                    {list
                                        .into_iter()
                                        .take(FEATURED_COUNT)
                                        .map(|p| view! { <ProductCard product=p on_add=on_add/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            None => view! { <p>"Products are unavailable right now."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
