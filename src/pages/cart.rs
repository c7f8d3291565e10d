//! Cart page for verified customers.
//!
//! Gating: requireAuth + requireVerified + role Customer. The cart fetch
//! only exists inside the shell's children, so denied visitors never issue
//! an authenticated request from this page.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::net::types::Role;
use crate::util::guard::RouteConstraints;
use crate::util::money::{cart_subtotal_cents, format_cents};

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::verified_roles(&[Role::Customer])>
            <CartContent/>
        </PageShell>
    }
}

#[component]
fn CartContent() -> impl IntoView {
    let cart = LocalResource::new(|| crate::net::api::fetch_cart());

    let set_quantity = move |product_id: String, quantity: u32| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_cart_item(&product_id, quantity).await {
                    Ok(()) => cart.refetch(),
                    Err(e) => log::warn!("cart update failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, quantity, &cart);
        }
    };

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Suspense fallback=move || view! { <p>"Loading cart..."</p> }>
                {move || {
                    cart.get().map(|items| match items {
                        Some(items) if items.is_empty() => view! {
                            <p>"Your cart is empty. " <a href="/products">"Browse products"</a></p>
                        }
                        .into_any(),
                        Some(items) => {
                            let subtotal = cart_subtotal_cents(&items);
                            view! {
                                <ul class="cart-lines">
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            let id = item.product.id.clone();
                                            let dec_id = id.clone();
                                            let inc_id = id.clone();
                                            let quantity = item.quantity;
                                            view! {
                                                <li class="cart-line">
                                                    <span class="cart-line__name">{item.product.name.clone()}</span>
                                                    <span class="cart-line__price">
                                                        {format_cents(item.product.price_cents)}
                                                    </span>
                                                    <div class="cart-line__quantity">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| set_quantity(
                                                                dec_id.clone(),
                                                                quantity.saturating_sub(1),
                                                            )
                                                        >
                                                            "-"
                                                        </button>
                                                        <span>{quantity}</span>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| set_quantity(inc_id.clone(), quantity + 1)
                                                        >
                                                            "+"
                                                        </button>
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <footer class="cart-page__footer">
                                    <span>"Subtotal: " {format_cents(subtotal)}</span>
                                    <a class="btn btn--primary" href="/checkout">"Checkout"</a>
                                </footer>
                            }
                            .into_any()
                        }
                        None => view! { <p>"Could not load your cart."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
