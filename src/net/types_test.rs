use super::*;

#[test]
fn role_deserializes_from_uppercase_wire_names() {
    assert_eq!(serde_json::from_str::<Role>("\"CUSTOMER\"").unwrap(), Role::Customer);
    assert_eq!(serde_json::from_str::<Role>("\"MANAGER\"").unwrap(), Role::Manager);
    assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
}

#[test]
fn role_rejects_unknown_wire_names() {
    assert!(serde_json::from_str::<Role>("\"SUPERUSER\"").is_err());
}

#[test]
fn user_verified_defaults_to_false_when_absent() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "a@example.com",
        "name": "Alice",
        "role": "CUSTOMER",
        "avatar_url": null,
    }))
    .unwrap();
    assert!(!user.verified);
}

#[test]
fn user_round_trips_through_json() {
    let user = User {
        id: "u-2".to_owned(),
        email: "b@example.com".to_owned(),
        name: "Bob".to_owned(),
        role: Role::Manager,
        verified: true,
        avatar_url: Some("https://cdn.example.com/b.png".to_owned()),
    };
    let back: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
    assert_eq!(back, user);
}

#[test]
fn checkout_quote_discount_defaults_to_zero() {
    let quote: CheckoutQuote = serde_json::from_value(serde_json::json!({
        "subtotal_cents": 1200,
        "shipping_cents": 300,
        "total_cents": 1500,
    }))
    .unwrap();
    assert_eq!(quote.discount_cents, 0);
}
