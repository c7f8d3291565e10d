//! Route access decisions for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route declares its constraints once and asks `evaluate`
//! for a decision through the page shell, so the check ordering lives in
//! exactly one place instead of being re-derived per page.
//!
//! DESIGN
//! ======
//! The check order is load-bearing: authentication before role, role before
//! verification. An anonymous or wrong-role visitor must never learn whether
//! an account is verified, so they are told to log in or denied outright
//! before verification is ever inspected.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// Declarative access constraints for a route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteConstraints {
    /// Require a logged-in user.
    pub require_auth: bool,
    /// Require the user's email to be confirmed.
    pub require_verified: bool,
    /// Roles admitted to the route. Empty admits any authenticated role.
    pub allowed_roles: Vec<Role>,
}

impl RouteConstraints {
    /// No constraints: everyone is allowed.
    pub fn public() -> Self {
        Self::default()
    }

    /// Any logged-in user, verification not required.
    pub fn authenticated() -> Self {
        Self { require_auth: true, ..Self::default() }
    }

    /// A verified user holding one of `roles`.
    pub fn verified_roles(roles: &[Role]) -> Self {
        Self {
            require_auth: true,
            require_verified: true,
            allowed_roles: roles.to_vec(),
        }
    }

    /// Any user holding one of `roles`, verification not required.
    pub fn roles(roles: &[Role]) -> Self {
        Self {
            require_auth: true,
            require_verified: false,
            allowed_roles: roles.to_vec(),
        }
    }
}

/// Outcome of evaluating route constraints against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the page and begin its data fetches.
    Allow,
    /// Show the login prompt; no page content, no data fetches.
    NeedsLogin,
    /// Show the verification prompt; no page content, no data fetches.
    NeedsVerification,
    /// Render nothing and navigate to the denial route. The held role is
    /// for logging only and is never shown to the user.
    Forbidden {
        /// Role the session actually holds.
        role: Role,
    },
}

/// Pure decision function mapping (constraints, session) to an access
/// decision. Re-evaluation with the same inputs yields the same result.
pub fn evaluate(constraints: &RouteConstraints, session: &Session) -> AccessDecision {
    let needs_auth =
        constraints.require_auth || constraints.require_verified || !constraints.allowed_roles.is_empty();
    if !session.is_authenticated() {
        return if needs_auth { AccessDecision::NeedsLogin } else { AccessDecision::Allow };
    }

    if !constraints.allowed_roles.is_empty() {
        // Authenticated sessions always carry a role.
        let Some(role) = session.role() else {
            return AccessDecision::NeedsLogin;
        };
        if !constraints.allowed_roles.contains(&role) {
            return AccessDecision::Forbidden { role };
        }
    }

    if constraints.require_verified && !session.is_verified() {
        return AccessDecision::NeedsVerification;
    }

    AccessDecision::Allow
}
