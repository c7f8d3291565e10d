//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Identity and fetch failures degrade to `Option`/`Result<_, String>` so
//! pages never see raw transport errors: an anonymous visitor on a gated
//! page is the common case, not an error. Authenticated calls go through
//! one shared transport rule: on a 401, exactly one silent refresh attempt
//! and one retry; a second 401 propagates with no further refresh.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{
    Address, CartItem, CheckoutQuote, Credentials, Discount, InventoryRow, Product, RegisterForm,
    Role, StoreSummary, User,
};

/// Failure of an authenticated API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 that survived the one-shot refresh; treat as logged out.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// Network-level failure before a status was available.
    #[error("transport error: {0}")]
    Transport(String),
}

const UNAUTHORIZED: u16 = 401;

/// Whether a failed call should trigger the one-shot silent refresh.
/// Exactly one refresh per logical call: the retried request never
/// refreshes again, which is what prevents infinite refresh loops.
fn should_attempt_refresh(status: u16, already_refreshed: bool) -> bool {
    status == UNAUTHORIZED && !already_refreshed
}

fn product_endpoint(product_id: &str) -> String {
    format!("/api/products/{product_id}")
}

fn user_role_endpoint(user_id: &str) -> String {
    format!("/api/admin/users/{user_id}/role")
}

fn discount_active_endpoint(discount_id: &str) -> String {
    format!("/api/admin/discounts/{discount_id}/active")
}

// =============================================================
// Authenticated transport
// =============================================================

/// GET `path` with the refresh-retry-once rule applied.
async fn authed_get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut refreshed = false;
        loop {
            let resp = gloo_net::http::Request::get(path)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if resp.ok() {
                return resp
                    .json::<T>()
                    .await
                    .map_err(|e| ApiError::Transport(e.to_string()));
            }
            let status = resp.status();
            if should_attempt_refresh(status, refreshed) {
                refreshed = true;
                if refresh_session().await {
                    continue;
                }
            }
            return Err(if status == UNAUTHORIZED {
                ApiError::Unauthorized
            } else {
                ApiError::Status(status)
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// POST a JSON body to `path` with the refresh-retry-once rule applied.
/// Discards any response body; mutations only need the status.
async fn authed_post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut refreshed = false;
        loop {
            let resp = gloo_net::http::Request::post(path)
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let status = resp.status();
            if should_attempt_refresh(status, refreshed) {
                refreshed = true;
                if refresh_session().await {
                    continue;
                }
            }
            return Err(if status == UNAUTHORIZED {
                ApiError::Unauthorized
            } else {
                ApiError::Status(status)
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Log-and-forget adapter used by list pages: failures become `None`.
async fn authed_fetch<T: DeserializeOwned>(path: &str) -> Option<T> {
    match authed_get_json::<T>(path).await {
        Ok(value) => Some(value),
        Err(ApiError::Unauthorized) => None,
        Err(e) => {
            log::warn!("fetch {path} failed: {e}");
            None
        }
    }
}

// =============================================================
// Identity endpoints
// =============================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    authed_fetch::<User>("/api/auth/me").await
}

/// Attempt a credential login via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-displayable message when the credentials are rejected or
/// the request fails.
pub async fn login(credentials: &Credentials) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`. The response sets the
/// session cookie; callers reconcile afterwards to pick up the identity.
///
/// # Errors
///
/// Returns a user-displayable message on rejection or transport failure.
pub async fn register(form: &RegisterForm) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`. Best-effort:
/// callers clear local session state regardless of the outcome.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Renew the session transport credential via `POST /api/auth/refresh`.
/// Returns true when the server accepted the renewal.
pub async fn refresh_session() -> bool {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("attempting silent session refresh");
        gloo_net::http::Request::post("/api/auth/refresh")
            .send()
            .await
            .map_or(false, |resp| resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn login_failed_message(status: u16) -> String {
    if status == UNAUTHORIZED {
        "Email or password is incorrect.".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

fn register_failed_message(status: u16) -> String {
    if status == 409 {
        "An account with that email already exists.".to_owned()
    } else {
        format!("registration failed: {status}")
    }
}

// =============================================================
// Storefront endpoints
// =============================================================

/// Fetch the public product catalog.
pub async fn fetch_products() -> Option<Vec<Product>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/products").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Product>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one product by id.
pub async fn fetch_product(product_id: &str) -> Option<Product> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&product_endpoint(product_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Product>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        None
    }
}

/// Fetch the authenticated user's cart.
pub async fn fetch_cart() -> Option<Vec<CartItem>> {
    authed_fetch("/api/cart").await
}

/// Set the quantity for a product in the cart (0 removes the line).
///
/// # Errors
///
/// Returns a user-displayable message on failure.
pub async fn update_cart_item(product_id: &str, quantity: u32) -> Result<(), String> {
    authed_post_json(
        "/api/cart/items",
        &serde_json::json!({ "product_id": product_id, "quantity": quantity }),
    )
    .await
    .map_err(|e| e.to_string())
}

/// Fetch the server-computed checkout quote for the current cart.
pub async fn fetch_checkout_quote() -> Option<CheckoutQuote> {
    authed_fetch("/api/checkout/quote").await
}

/// Place the order for the current cart. `idempotency_key` lets the server
/// deduplicate a double-submitted checkout.
///
/// # Errors
///
/// Returns a user-displayable message on failure.
pub async fn place_order(idempotency_key: uuid::Uuid) -> Result<(), String> {
    authed_post_json(
        "/api/checkout/orders",
        &serde_json::json!({ "idempotency_key": idempotency_key }),
    )
    .await
    .map_err(|e| e.to_string())
}

/// Fetch the authenticated user's saved addresses.
pub async fn fetch_addresses() -> Option<Vec<Address>> {
    authed_fetch("/api/account/addresses").await
}

/// Create or update a saved address.
///
/// # Errors
///
/// Returns a user-displayable message on failure.
pub async fn save_address(address: &Address) -> Result<(), String> {
    authed_post_json("/api/account/addresses", address)
        .await
        .map_err(|e| e.to_string())
}

// =============================================================
// Admin endpoints
// =============================================================

/// Fetch store summaries for the admin stores page.
pub async fn fetch_stores() -> Option<Vec<StoreSummary>> {
    authed_fetch("/api/admin/stores").await
}

/// Fetch stock levels for the admin inventory page.
pub async fn fetch_inventory() -> Option<Vec<InventoryRow>> {
    authed_fetch("/api/admin/inventory").await
}

/// Apply a stock adjustment to one product in one warehouse.
///
/// # Errors
///
/// Returns a user-displayable message on failure.
pub async fn adjust_inventory(product_id: &str, warehouse_name: &str, delta: i64) -> Result<(), String> {
    authed_post_json(
        "/api/admin/inventory/adjustments",
        &serde_json::json!({
            "product_id": product_id,
            "warehouse_name": warehouse_name,
            "delta": delta,
        }),
    )
    .await
    .map_err(|e| e.to_string())
}

/// Fetch discounts for the admin discounts page.
pub async fn fetch_discounts() -> Option<Vec<Discount>> {
    authed_fetch("/api/admin/discounts").await
}

/// Activate or deactivate a discount.
///
/// # Errors
///
/// Returns a user-displayable message on failure.
pub async fn set_discount_active(discount_id: &str, active: bool) -> Result<(), String> {
    authed_post_json(&discount_active_endpoint(discount_id), &serde_json::json!({ "active": active }))
        .await
        .map_err(|e| e.to_string())
}

/// Fetch all users for the admin users page.
pub async fn fetch_users() -> Option<Vec<User>> {
    authed_fetch("/api/admin/users").await
}

/// Assign a role to a user.
///
/// # Errors
///
/// Returns a user-displayable message on failure.
pub async fn set_user_role(user_id: &str, role: Role) -> Result<(), String> {
    authed_post_json(&user_role_endpoint(user_id), &serde_json::json!({ "role": role }))
        .await
        .map_err(|e| e.to_string())
}
