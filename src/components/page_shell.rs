//! Per-route shell applying the access decision before any content renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route wraps its content in `PageShell` and declares constraints
//! once. The shell reconciles the session, evaluates the guard, and renders
//! an interstitial (spinner, login prompt, verification prompt, nothing)
//! until the decision is `Allow`. Page content is a closure, so page data
//! resources are never created for visitors who end up denied.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::prompts::{LoginPrompt, VerifyPrompt};
use crate::state::session::SessionStore;
use crate::util::guard::{self, AccessDecision, RouteConstraints};
use crate::util::redirect::{DENIED_PATH, HOME_PATH, LOGIN_PATH, RedirectMemory};

/// Route wrapper enforcing the declared access constraints.
#[component]
pub fn PageShell(
    /// Access constraints for this route. Defaults to public.
    #[prop(default = RouteConstraints::public())]
    constraints: RouteConstraints,
    children: ChildrenFn,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let memory = expect_context::<RedirectMemory>();
    let navigate = use_navigate();
    let location = use_location();

    store.ensure_reconciled();

    let session = store.read();
    let decision = Memo::new(move |_| {
        let current = session.get();
        // No decision until the first reconciliation completes; the
        // loading state below always clears because reconcile resolves
        // to anonymous on any failure.
        current.auth_checked.then(|| guard::evaluate(&constraints, &current))
    });

    // Forbidden navigates away exactly once, even across re-renders.
    let denial_fired = StoredValue::new(false);
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if let Some(AccessDecision::Forbidden { role }) = decision.get() {
                if !denial_fired.get_value() {
                    denial_fired.set_value(true);
                    log::debug!("role {role:?} not allowed here, redirecting to denial route");
                    navigate(DENIED_PATH, NavigateOptions::default());
                }
            }
        }
    });

    let go_login = Callback::new({
        let navigate = navigate.clone();
        let memory = memory.clone();
        move |()| {
            memory.remember(&crate::util::gated_actions::current_path(&location));
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let go_home = Callback::new({
        let navigate = navigate.clone();
        let memory = memory.clone();
        move |()| {
            memory.forget();
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    view! {
        {move || match decision.get() {
            None => view! {
                <div class="page-shell__loading">
                    <div class="spinner" aria-label="Loading"></div>
                </div>
            }
            .into_any(),
            Some(AccessDecision::Allow) => children().into_any(),
            Some(AccessDecision::NeedsLogin) => view! {
                <LoginPrompt on_login=go_login on_home=go_home/>
            }
            .into_any(),
            Some(AccessDecision::NeedsVerification) => view! {
                <VerifyPrompt on_home=go_home/>
            }
            .into_any(),
            // Nothing renders while the denial navigation is pending: not
            // even a flash of the protected shell.
            Some(AccessDecision::Forbidden { .. }) => ().into_any(),
        }}
    }
}
