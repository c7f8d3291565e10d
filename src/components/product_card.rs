//! Catalog product card with an add-to-cart action.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::money::format_cents;

/// A single product tile for catalog grids.
///
/// `on_add` is supplied by the page so anonymous visitors can be routed
/// through the login detour instead of firing an authenticated call.
#[component]
pub fn ProductCard(product: Product, on_add: Callback<String>) -> impl IntoView {
    let id = product.id.clone();
    let detail_href = format!("/products/{}", product.id);

    view! {
        <div class="product-card">
            <a href=detail_href.clone() class="product-card__image">
                {product.image_url.clone().map(|url| view! { <img src=url alt=product.name.clone()/> })}
            </a>
            <a href=detail_href class="product-card__name">{product.name.clone()}</a>
            <span class="product-card__price">{format_cents(product.price_cents)}</span>
            <button
                class="btn btn--primary"
                disabled=!product.in_stock
                on:click=move |_| on_add.run(id.clone())
            >
                {if product.in_stock { "Add to cart" } else { "Out of stock" }}
            </button>
        </div>
    }
}
