//! # freshmart
//!
//! Leptos + WASM storefront and admin console for the FreshMart grocery
//! marketplace. All business logic (authentication truth, pricing,
//! shipping, stock ledgers) lives server-side behind a REST API; this
//! crate owns the client-side route access-control model and the
//! redirect-resumption flow around login, registration, and OAuth.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
