//! Session state: the client's current belief about who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, navbar, and auth pages all read session state from one
//! `SessionStore` provided via context at the application root. Only the
//! store's own operations mutate it; no component writes fields directly.
//!
//! DESIGN
//! ======
//! `Session` is a plain value so its transitions stay unit-testable; the
//! store holds it in a single `RwSignal` and replaces the whole value on
//! every transition. Overlapping reconciles therefore never expose a torn
//! state: readers see either the previous session or the next, and the
//! last completion wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};

/// The authenticated identity as known to the client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Current user, or `None` for an anonymous visitor.
    pub user: Option<User>,
    /// Whether at least one reconciliation has completed since process
    /// start. Transitions false→true once and never reverts.
    pub auth_checked: bool,
}

impl Session {
    /// True when a user is present. Derived, never stored separately.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// True when the current user exists and has confirmed their email.
    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.verified)
    }

    /// Session after a reconciliation completes with `user` (or `None` on
    /// any failure). Marks the session checked in both cases.
    pub fn reconciled(self, user: Option<User>) -> Session {
        Session { user, auth_checked: true }
    }

    /// Session after a synchronous credential login.
    pub fn logged_in(self, user: User) -> Session {
        Session { user: Some(user), auth_checked: true }
    }

    /// Session after logout. `auth_checked` is preserved: the identity was
    /// resolved, it is just no longer present.
    pub fn logged_out(self) -> Session {
        Session { user: None, auth_checked: self.auth_checked }
    }
}

/// Process-wide handle to the session signal, provided via context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<Session>,
    reconcile_in_flight: StoredValue<bool>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Session::default()),
            reconcile_in_flight: StoredValue::new(false),
        }
    }

    /// Read-only access for components; mutation goes through the
    /// operations below.
    pub fn read(&self) -> ReadSignal<Session> {
        self.state.read_only()
    }

    /// Current session snapshot without subscribing.
    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    /// Kick off a reconciliation unless one already completed or is in
    /// flight. Safe to call from every page shell mount.
    pub fn ensure_reconciled(&self) {
        if self.state.get_untracked().auth_checked || self.reconcile_in_flight.get_value() {
            return;
        }
        self.reconcile_in_flight.set_value(true);
        let store = *self;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            store.reconcile().await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            // No network on the server: resolve to anonymous so guards
            // settle instead of spinning forever.
            store.state.update(|s| *s = s.clone().reconciled(None));
            store.reconcile_in_flight.set_value(false);
        }
    }

    /// Ask the server who is logged in and replace the session with the
    /// answer. Failures resolve to anonymous; they are never surfaced as
    /// errors because an unauthenticated visitor is the common case.
    pub async fn reconcile(&self) {
        let user = crate::net::api::fetch_current_user().await;
        if user.is_none() {
            log::debug!("session reconcile resolved anonymous");
        }
        self.state.update(|s| *s = s.clone().reconciled(user));
        self.reconcile_in_flight.set_value(false);
    }

    /// Populate the session from a login response without a second
    /// round-trip.
    pub fn login(&self, user: User) {
        self.state.update(|s| *s = s.clone().logged_in(user));
    }

    /// Log out: the server call is best-effort, the local state change is
    /// not. The UI must reflect logout even if the network call fails.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async {
                crate::net::api::logout().await;
            });
        }
        self.state.update(|s| *s = s.clone().logged_out());
    }
}
