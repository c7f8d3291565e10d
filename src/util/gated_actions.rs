//! Gated storefront actions shared by catalog pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Add-to-cart is the one storefront action available on public pages that
//! requires a session. Anonymous clicks take the login detour: remember the
//! current path, then navigate to the login route, so the purchase intent
//! survives the round trip.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionStore;
use crate::util::redirect::{LOGIN_PATH, RedirectMemory};

/// Current path including query, for redirect bookkeeping.
pub fn current_path(location: &leptos_router::location::Location) -> String {
    let path = location.pathname.get_untracked();
    let search = location.search.get_untracked();
    if search.is_empty() { path } else { format!("{path}?{search}") }
}

/// Build the shared add-to-cart callback for catalog pages.
pub fn use_add_to_cart() -> Callback<String> {
    let store = expect_context::<SessionStore>();
    let memory = expect_context::<RedirectMemory>();
    let navigate = use_navigate();
    let location = use_location();

    Callback::new(move |product_id: String| {
        if !store.snapshot().is_authenticated() {
            memory.remember(&current_path(&location));
            navigate(LOGIN_PATH, NavigateOptions::default());
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::update_cart_item(&product_id, 1).await {
                log::warn!("add to cart failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product_id;
        }
    })
}
