//! Registration page.
//!
//! Registration responses set the session cookie but do not carry the
//! identity, so completion reconciles the session first and only then
//! resolves the remembered destination. A failed reconcile falls back to
//! the login page and discards any remembered redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::RegisterForm;
use crate::state::session::SessionStore;
use crate::util::redirect::{HOME_PATH, RedirectMemory};
#[cfg(feature = "hydrate")]
use crate::util::redirect::LOGIN_PATH;
use crate::util::resume::ResumeLatch;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let memory = expect_context::<RedirectMemory>();
    let navigate = use_navigate();
    let query = use_query_map();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let latch = StoredValue::new(ResumeLatch::new());

    let on_submit = {
        let navigate = navigate.clone();
        let memory = memory.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let name_value = name.get().trim().to_owned();
            let email_value = email.get().trim().to_owned();
            let password_value = password.get();
            if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
                info.set("All fields are required.".to_owned());
                return;
            }
            busy.set(true);
            info.set(String::new());
            let form = RegisterForm {
                email: email_value,
                name: name_value,
                password: password_value,
            };

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                let memory = memory.clone();
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::api::register(&form).await {
                        info.set(e);
                        busy.set(false);
                        return;
                    }
                    let mut state = latch.get_value();
                    if !state.begin() {
                        return;
                    }
                    latch.set_value(state);
                    // The identity is only known after a reconcile; the
                    // destination must not be resolved before it completes.
                    store.reconcile().await;
                    if store.snapshot().is_authenticated() {
                        let redirect = query.get_untracked().get("redirect");
                        let destination = memory.resolve_and_clear(redirect.as_deref());
                        crate::util::resume::settle_before_navigation().await;
                        navigate(&destination, NavigateOptions::default());
                    } else {
                        // Failed completion must not silently resume a
                        // privileged flow later.
                        memory.forget();
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    state.finish();
                    latch.set_value(state);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, &memory, &store, &query, &latch, form);
            }
        }
    };

    let on_cancel = {
        let navigate = navigate.clone();
        let memory = memory.clone();
        move |_| {
            memory.forget();
            navigate(HOME_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href="/login">"Already have an account? Sign in"</a>
                    <button class="auth-links__home" on:click=on_cancel>
                        "Back to store"
                    </button>
                </p>
            </div>
        </div>
    }
}
