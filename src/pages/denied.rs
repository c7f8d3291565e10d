//! Neutral access-denied page.
//!
//! Deliberately generic: it never names the roles a page required, only
//! that this account cannot view it.

use leptos::prelude::*;

#[component]
pub fn DeniedPage() -> impl IntoView {
    view! {
        <div class="denied-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have access to that page."</p>
            <a class="btn btn--primary" href="/">"Back to home"</a>
        </div>
    }
}
