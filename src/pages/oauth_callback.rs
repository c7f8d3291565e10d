//! OAuth callback landing page.
//!
//! The provider round trip ends here with a session cookie already set (or
//! not). Completion is identical to registration: reconcile first, then
//! resolve the remembered destination exactly once; on failure, back to
//! login with the redirect slot discarded.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionStore;
use crate::util::redirect::RedirectMemory;
#[cfg(feature = "hydrate")]
use crate::util::redirect::LOGIN_PATH;
use crate::util::resume::ResumeLatch;

#[component]
pub fn OauthCallbackPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let memory = expect_context::<RedirectMemory>();
    let navigate = use_navigate();
    let query = use_query_map();
    let latch = StoredValue::new(ResumeLatch::new());

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let memory = memory.clone();
        leptos::task::spawn_local(async move {
            let mut state = latch.get_value();
            if !state.begin() {
                return;
            }
            latch.set_value(state);
            store.reconcile().await;
            if store.snapshot().is_authenticated() {
                let redirect = query.get_untracked().get("redirect");
                let destination = memory.resolve_and_clear(redirect.as_deref());
                crate::util::resume::settle_before_navigation().await;
                navigate(&destination, NavigateOptions::default());
            } else {
                memory.forget();
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
            state.finish();
            latch.set_value(state);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&navigate, &memory, &store, &query, &latch);
    }

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="spinner" aria-label="Loading"></div>
                <p>"Completing sign-in..."</p>
            </div>
        </div>
    }
}
