//! Display formatting for server-priced amounts.
//!
//! Prices arrive as minor currency units and are rendered verbatim; the
//! client never computes money beyond summing line totals for display.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format minor currency units as a dollar string, e.g. `1250` → `"$12.50"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Sum of `quantity * price` over cart lines, for the cart footer only.
/// The authoritative total always comes from the server's checkout quote.
pub fn cart_subtotal_cents(items: &[crate::net::types::CartItem]) -> i64 {
    items
        .iter()
        .map(|item| item.product.price_cents * i64::from(item.quantity))
        .sum()
}
