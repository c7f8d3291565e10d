//! Session-aware top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::redirect::{HOME_PATH, RedirectMemory};

/// Top bar with storefront links, role-dependent admin links, and the
/// login/logout control.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let memory = expect_context::<RedirectMemory>();
    let navigate = use_navigate();
    let session = store.read();

    let role = move || session.get().role();
    let display_name = move || session.get().user.map(|u| u.name).unwrap_or_default();

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            // A logout abandons any pending auth detour.
            memory.forget();
            store.logout();
            navigate(HOME_PATH, NavigateOptions::default());
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"FreshMart"</a>
            <div class="navbar__links">
                <a href="/products">"Products"</a>
                <Show when=move || role() == Some(Role::Customer)>
                    <a href="/cart">"Cart"</a>
                </Show>
                <Show when=move || matches!(role(), Some(Role::Manager | Role::Admin))>
                    <a href="/admin/inventory">"Inventory"</a>
                    <a href="/admin/discounts">"Discounts"</a>
                </Show>
                <Show when=move || role() == Some(Role::Admin)>
                    <a href="/admin/stores">"Stores"</a>
                    <a href="/admin/users">"Users"</a>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! { <a class="btn" href="/login">"Sign in"</a> }
                >
                    <a href="/account" class="navbar__user">{display_name}</a>
                    <button class="btn" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
