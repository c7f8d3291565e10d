//! Catalog pages: full product list and single-product detail.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::PageShell;
use crate::components::product_card::ProductCard;
use crate::util::gated_actions::use_add_to_cart;
use crate::util::money::format_cents;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <PageShell>
            <ProductsContent/>
        </PageShell>
    }
}

#[component]
fn ProductsContent() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products());
    let on_add = use_add_to_cart();

    view! {
        <div class="products-page">
            <h1>"Products"</h1>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products.get().map(|list| match list {
                        Some(list) if list.is_empty() => {
                            view! { <p>"No products yet."</p> }.into_any()
                        }
                        Some(list) => view! {
                            <div class="product-grid">
                                {list
                                    .into_iter()
                                    .map(|p| view! { <ProductCard product=p on_add=on_add/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        None => view! { <p>"Products are unavailable right now."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    view! {
        <PageShell>
            <ProductDetailContent/>
        </PageShell>
    }
}

#[component]
fn ProductDetailContent() -> impl IntoView {
    let params = use_params_map();
    let product = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_product(&id).await }
    });
    let on_add = use_add_to_cart();

    view! {
        <div class="product-detail-page">
            <Suspense fallback=move || view! { <p>"Loading product..."</p> }>
                {move || {
                    product.get().map(|found| match found {
                        Some(p) => {
                            let id = p.id.clone();
                            view! {
                                <div class="product-detail">
                                    {p.image_url.clone().map(|url| view! {
                                        <img class="product-detail__image" src=url alt=p.name.clone()/>
                                    })}
                                    <h1>{p.name.clone()}</h1>
                                    <p class="product-detail__description">{p.description.clone()}</p>
                                    <span class="product-detail__price">{format_cents(p.price_cents)}</span>
                                    <button
                                        class="btn btn--primary"
                                        disabled=!p.in_stock
                                        on:click=move |_| on_add.run(id.clone())
                                    >
                                        {if p.in_stock { "Add to cart" } else { "Out of stock" }}
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                        None => view! { <p>"Product not found."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
