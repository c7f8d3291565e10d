//! Shared wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror server response payloads so serde round-trips stay
//! lossless. All business computation (pricing, shipping, stock) happens
//! server-side; the client only renders what it is given.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role gating access to whole page classes.
///
/// The closed set is supplied by the identity endpoint; the route guard
/// treats values as opaque comparables and never interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Customer,
    Manager,
    Admin,
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
    /// Whether the email address has been confirmed.
    #[serde(default)]
    pub verified: bool,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// A catalog product summary for listing pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown on cards and detail pages.
    #[serde(default)]
    pub description: String,
    /// Unit price in minor currency units, as priced by the server.
    pub price_cents: i64,
    /// Primary image URL, if available.
    pub image_url: Option<String>,
    /// Whether the server currently reports the product as purchasable.
    #[serde(default)]
    pub in_stock: bool,
}

/// A line in the authenticated user's cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product being purchased.
    pub product: Product,
    /// Requested quantity.
    pub quantity: u32,
}

/// Server-computed checkout quote; the client renders it verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    /// Item subtotal in minor currency units.
    pub subtotal_cents: i64,
    /// Shipping cost in minor currency units.
    pub shipping_cents: i64,
    /// Applied discount in minor currency units, if any.
    #[serde(default)]
    pub discount_cents: i64,
    /// Grand total in minor currency units.
    pub total_cents: i64,
}

/// A saved delivery address on the account page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Unique address identifier (UUID string).
    pub id: String,
    /// Free-form address label (e.g. "Home").
    pub label: String,
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
}

/// A store summary row for the admin stores page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreSummary {
    /// Unique store identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// City the store operates in.
    pub city: String,
    /// Number of warehouses attached to this store.
    pub warehouse_count: u32,
}

/// A stock-level row for the admin inventory page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    /// Product identifier (UUID string).
    pub product_id: String,
    /// Product display name.
    pub product_name: String,
    /// Warehouse display name.
    pub warehouse_name: String,
    /// Units on hand as reported by the stock ledger.
    pub quantity: i64,
}

/// A discount row for the admin discounts page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Unique discount identifier (UUID string).
    pub id: String,
    /// Customer-facing discount code.
    pub code: String,
    /// Percentage off, 0-100.
    pub percent: u8,
    /// Whether the discount is currently redeemable.
    pub active: bool,
}

/// Credentials for the password login form.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload for the registration form.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}
