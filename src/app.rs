//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    account::AccountPage,
    admin::{
        discounts::AdminDiscountsPage, inventory::AdminInventoryPage, stores::AdminStoresPage,
        users::AdminUsersPage,
    },
    cart::CartPage,
    checkout::CheckoutPage,
    denied::DeniedPage,
    home::HomePage,
    login::LoginPage,
    oauth_callback::OauthCallbackPage,
    products::{ProductDetailPage, ProductsPage},
    register::RegisterPage,
};
use crate::state::session::SessionStore;
use crate::util::redirect::{BrowserSlot, RedirectMemory};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the process-wide session store and redirect memory exactly
/// once and provides them via context; nothing else may create them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::new());
    provide_context(RedirectMemory::<BrowserSlot>::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/freshmart.css"/>
        <Title text="FreshMart"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=OauthCallbackPage/>
                    <Route path=StaticSegment("denied") view=DeniedPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("stores")) view=AdminStoresPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("inventory")) view=AdminInventoryPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("discounts")) view=AdminDiscountsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                </Routes>
            </main>
        </Router>
    }
}
