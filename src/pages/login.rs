//! Login page: password form plus OAuth start link.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the password branch of auth completion: the login response
//! already carries the identity, so the session is populated synchronously
//! and the remembered destination is resolved without a second round-trip.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Credentials;
use crate::state::session::SessionStore;
use crate::util::redirect::{HOME_PATH, RedirectMemory};
use crate::util::resume::ResumeLatch;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let memory = expect_context::<RedirectMemory>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    // One navigation per completion event, no matter how often the submit
    // handler or surrounding effects re-fire.
    let latch = StoredValue::new(ResumeLatch::new());

    let on_submit = {
        let navigate = navigate.clone();
        let memory = memory.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let email_value = email.get().trim().to_owned();
            let password_value = password.get();
            if email_value.is_empty() || password_value.is_empty() {
                info.set("Enter both email and password.".to_owned());
                return;
            }
            busy.set(true);
            info.set(String::new());
            let credentials = Credentials { email: email_value, password: password_value };

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                let memory = memory.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&credentials).await {
                        Ok(user) => {
                            let mut state = latch.get_value();
                            if !state.begin() {
                                return;
                            }
                            latch.set_value(state);
                            // Session first; the destination is resolved
                            // only after the identity is in place.
                            store.login(user);
                            let redirect = query.get_untracked().get("redirect");
                            let destination = memory.resolve_and_clear(redirect.as_deref());
                            crate::util::resume::settle_before_navigation().await;
                            navigate(&destination, NavigateOptions::default());
                            state.finish();
                            latch.set_value(state);
                        }
                        Err(e) => {
                            info.set(e);
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, &memory, &store, &query, &latch, credentials);
            }
        }
    };

    let on_cancel = {
        let navigate = navigate.clone();
        let memory = memory.clone();
        move |_| {
            // Abandoning the flow must not leave a stale destination behind.
            memory.forget();
            navigate(HOME_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider"></div>
                <a href="/api/auth/oauth/google" class="btn">
                    "Sign in with Google"
                </a>
                <p class="auth-links">
                    <a href="/register">"Create an account"</a>
                    <button class="auth-links__home" on:click=on_cancel>
                        "Back to store"
                    </button>
                </p>
            </div>
        </div>
    }
}
