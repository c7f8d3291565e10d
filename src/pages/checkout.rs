//! Checkout page for verified customers.
//!
//! The quote (subtotal, shipping, discount, total) is computed server-side
//! and rendered verbatim. Order submission carries a client-generated
//! idempotency key so a double click cannot place two orders.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_shell::PageShell;
use crate::net::types::Role;
use crate::util::guard::RouteConstraints;
use crate::util::money::format_cents;
#[cfg(feature = "hydrate")]
use crate::util::redirect::HOME_PATH;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::verified_roles(&[Role::Customer])>
            <CheckoutContent/>
        </PageShell>
    }
}

#[component]
fn CheckoutContent() -> impl IntoView {
    let navigate = use_navigate();
    let quote = LocalResource::new(|| crate::net::api::fetch_checkout_quote());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_place_order = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let key = uuid::Uuid::new_v4();
                match crate::net::api::place_order(key).await {
                    Ok(()) => {
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Order failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <Suspense fallback=move || view! { <p>"Calculating your total..."</p> }>
                {move || {
                    quote.get().map(|found| match found {
                        Some(q) => {
                            let discount = q.discount_cents;
                            view! {
                                <dl class="checkout-summary">
                                    <dt>"Subtotal"</dt>
                                    <dd>{format_cents(q.subtotal_cents)}</dd>
                                    <dt>"Shipping"</dt>
                                    <dd>{format_cents(q.shipping_cents)}</dd>
                                    <Show when=move || discount != 0>
                                        <dt>"Discount"</dt>
                                        <dd>{format_cents(-discount)}</dd>
                                    </Show>
                                    <dt class="checkout-summary__total">"Total"</dt>
                                    <dd class="checkout-summary__total">{format_cents(q.total_cents)}</dd>
                                </dl>
                            }
                            .into_any()
                        }
                        None => view! { <p>"Could not calculate a quote for your cart."</p> }.into_any(),
                    })
                }}
            </Suspense>
            <Show when=move || !info.get().is_empty()>
                <p class="checkout-page__message">{move || info.get()}</p>
            </Show>
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_place_order>
                "Place order"
            </button>
        </div>
    }
}
