//! Interstitial prompts shown by the page shell instead of gated content.

use leptos::prelude::*;

/// Modal asking an anonymous visitor to log in before continuing.
///
/// `on_login` must remember the current path before navigating so the
/// destination survives the login detour; `on_home` abandons the flow.
#[component]
pub fn LoginPrompt(on_login: Callback<()>, on_home: Callback<()>) -> impl IntoView {
    view! {
        <div class="prompt-backdrop">
            <div class="prompt" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign in required"</h2>
                <p>"You need an account to view this page."</p>
                <div class="prompt__actions">
                    <button class="btn" on:click=move |_| on_home.run(())>
                        "Back to home"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_login.run(())>
                        "Sign in"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal asking a signed-in but unverified user to confirm their email.
#[component]
pub fn VerifyPrompt(on_home: Callback<()>) -> impl IntoView {
    view! {
        <div class="prompt-backdrop">
            <div class="prompt" on:click=move |ev| ev.stop_propagation()>
                <h2>"Verify your email"</h2>
                <p>"Check your inbox for a confirmation link, then reload this page."</p>
                <div class="prompt__actions">
                    <button class="btn" on:click=move |_| on_home.run(())>
                        "Back to home"
                    </button>
                </div>
            </div>
        </div>
    }
}
