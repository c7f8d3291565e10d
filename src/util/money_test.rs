use super::*;
use crate::net::types::{CartItem, Product};

fn product(price_cents: i64) -> Product {
    Product {
        id: "p-1".to_owned(),
        name: "Oat milk".to_owned(),
        description: String::new(),
        price_cents,
        image_url: None,
        in_stock: true,
    }
}

#[test]
fn format_cents_pads_minor_units() {
    assert_eq!(format_cents(1250), "$12.50");
    assert_eq!(format_cents(5), "$0.05");
    assert_eq!(format_cents(0), "$0.00");
}

#[test]
fn format_cents_handles_negative_amounts() {
    assert_eq!(format_cents(-199), "-$1.99");
}

#[test]
fn cart_subtotal_multiplies_quantity_by_price() {
    let items = vec![
        CartItem { product: product(350), quantity: 2 },
        CartItem { product: product(125), quantity: 1 },
    ];
    assert_eq!(cart_subtotal_cents(&items), 825);
}

#[test]
fn cart_subtotal_of_empty_cart_is_zero() {
    assert_eq!(cart_subtotal_cents(&[]), 0);
}
