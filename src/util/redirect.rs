//! Single-slot redirect memory: where the user was going before login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated pages remember the visitor's intended destination before sending
//! them to `/login`; the auth completion flows resolve it back into exactly
//! one navigation. The slot survives a full-page reload (OAuth leaves the
//! app entirely) but is scoped to the browser session.
//!
//! DESIGN
//! ======
//! Storage is a capability trait keyed by one fixed constant, so the real
//! client backs it with `sessionStorage` while tests use an in-memory cell
//! without changing the memory contract.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Fixed storage key for the redirect slot.
pub const REDIRECT_SLOT_KEY: &str = "freshmart_redirect_path";

/// Destination used when nothing better is known.
pub const HOME_PATH: &str = "/";

/// Neutral route shown after a forbidden decision.
pub const DENIED_PATH: &str = "/denied";

/// Login route; gated pages send visitors here.
pub const LOGIN_PATH: &str = "/login";

/// Routes belonging to the auth flow itself. Remembering one of these would
/// make login loop back into login.
const AUTH_FLOW_PATHS: &[&str] = &["/login", "/register", "/auth/callback", "/denied"];

/// True for routes that must never become a post-login destination.
pub fn is_auth_flow_path(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    AUTH_FLOW_PATHS.iter().any(|p| bare == *p)
}

/// Validate a redirect query value into a safe in-app destination.
///
/// Rejects anything that is not a same-app absolute path: external URLs,
/// protocol-relative `//` values, and auth-flow routes. Rejection means the
/// caller falls back to [`HOME_PATH`] rather than failing the navigation.
pub fn sanitize_redirect(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.starts_with('/') || raw.starts_with("//") {
        return None;
    }
    if is_auth_flow_path(raw) {
        return None;
    }
    Some(raw.to_owned())
}

/// Key-value capability backing the redirect slot.
pub trait SlotStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn clear(&self);
}

/// In-memory slot for tests and server rendering.
#[derive(Clone, Default)]
pub struct MemorySlot(std::rc::Rc<std::cell::RefCell<Option<String>>>);

impl SlotStorage for MemorySlot {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Browser `sessionStorage` slot. No-ops outside the browser so SSR paths
/// stay deterministic.
#[derive(Clone, Copy, Default)]
pub struct BrowserSlot;

impl SlotStorage for BrowserSlot {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
            storage.get_item(REDIRECT_SLOT_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
                let _ = storage.set_item(REDIRECT_SLOT_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
                let _ = storage.remove_item(REDIRECT_SLOT_KEY);
            }
        }
    }
}

/// At-most-one pending destination, shared process-wide via context.
#[derive(Clone, Default)]
pub struct RedirectMemory<S: SlotStorage = BrowserSlot> {
    storage: S,
}

impl<S: SlotStorage> RedirectMemory<S> {
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the slot with `path`. Auth-flow routes are ignored so the
    /// remembered destination can never loop back into the login flow.
    pub fn remember(&self, path: &str) {
        if is_auth_flow_path(path) {
            return;
        }
        self.storage.write(path);
    }

    /// Current value without clearing it.
    pub fn peek(&self) -> Option<String> {
        self.storage.read()
    }

    /// Read and clear the slot; [`HOME_PATH`] when empty. The clear happens
    /// before the value is returned, so a second consume in the same tick
    /// sees the slot empty rather than replaying the path.
    pub fn consume(&self) -> String {
        let value = self.storage.read();
        self.storage.clear();
        value.unwrap_or_else(|| HOME_PATH.to_owned())
    }

    /// Clear the slot without resolving it (cancel / go-home actions).
    pub fn forget(&self) {
        self.storage.clear();
    }

    /// Resolve a post-login destination and clear the slot.
    ///
    /// Precedence: a redirect query value on the current URL (already
    /// decoded by the router) wins over the remembered slot, which wins
    /// over [`HOME_PATH`]. A malformed or unsafe query value resolves to
    /// home. The slot is cleared in every branch so an unrelated later
    /// login cannot replay a stale destination.
    pub fn resolve_and_clear(&self, query_redirect: Option<&str>) -> String {
        match query_redirect {
            Some(raw) => {
                let destination = sanitize_redirect(raw).unwrap_or_else(|| HOME_PATH.to_owned());
                self.storage.clear();
                destination
            }
            None => self.consume(),
        }
    }
}
