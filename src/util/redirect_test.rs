use super::*;

fn memory() -> RedirectMemory<MemorySlot> {
    RedirectMemory::with_storage(MemorySlot::default())
}

// =============================================================
// Slot semantics
// =============================================================

#[test]
fn consume_is_single_use() {
    let memory = memory();
    memory.remember("/cart");
    assert_eq!(memory.consume(), "/cart");
    assert_eq!(memory.consume(), HOME_PATH);
}

#[test]
fn consume_defaults_to_home_when_empty() {
    assert_eq!(memory().consume(), HOME_PATH);
}

#[test]
fn remember_overwrites_previous_value() {
    let memory = memory();
    memory.remember("/cart");
    memory.remember("/checkout");
    assert_eq!(memory.consume(), "/checkout");
}

#[test]
fn peek_does_not_clear() {
    let memory = memory();
    memory.remember("/cart");
    assert_eq!(memory.peek().as_deref(), Some("/cart"));
    assert_eq!(memory.consume(), "/cart");
}

#[test]
fn forget_discards_without_resolving() {
    let memory = memory();
    memory.remember("/cart");
    memory.forget();
    assert_eq!(memory.consume(), HOME_PATH);
}

#[test]
fn auth_flow_routes_are_never_remembered() {
    let memory = memory();
    for path in ["/login", "/register", "/auth/callback", "/denied", "/login?redirect=%2Fcart"] {
        memory.remember(path);
        assert_eq!(memory.peek(), None, "remembered {path}");
    }
    assert_eq!(memory.consume(), HOME_PATH);
}

#[test]
fn remembering_an_auth_route_does_not_clobber_a_real_one() {
    let memory = memory();
    memory.remember("/cart");
    memory.remember("/login");
    assert_eq!(memory.consume(), "/cart");
}

// =============================================================
// Redirect sanitization
// =============================================================

#[test]
fn sanitize_accepts_in_app_absolute_paths() {
    assert_eq!(sanitize_redirect("/cart").as_deref(), Some("/cart"));
    assert_eq!(
        sanitize_redirect("/products/abc?page=2").as_deref(),
        Some("/products/abc?page=2")
    );
}

#[test]
fn sanitize_rejects_external_and_malformed_values() {
    assert_eq!(sanitize_redirect("https://evil.example.com/"), None);
    assert_eq!(sanitize_redirect("//evil.example.com"), None);
    assert_eq!(sanitize_redirect("cart"), None);
    assert_eq!(sanitize_redirect(""), None);
    assert_eq!(sanitize_redirect("   "), None);
}

#[test]
fn sanitize_rejects_auth_flow_routes() {
    assert_eq!(sanitize_redirect("/login"), None);
    assert_eq!(sanitize_redirect("/denied"), None);
}

// =============================================================
// Destination resolution precedence
// =============================================================

#[test]
fn query_redirect_wins_over_slot_and_clears_it() {
    let memory = memory();
    memory.remember("/account");
    assert_eq!(memory.resolve_and_clear(Some("/cart")), "/cart");
    // Slot was cleared even though it lost: no stale replay later.
    assert_eq!(memory.consume(), HOME_PATH);
}

#[test]
fn slot_wins_when_no_query_redirect() {
    let memory = memory();
    memory.remember("/cart");
    assert_eq!(memory.resolve_and_clear(None), "/cart");
}

#[test]
fn resolution_defaults_to_home() {
    assert_eq!(memory().resolve_and_clear(None), HOME_PATH);
}

#[test]
fn malformed_query_redirect_falls_back_to_home() {
    let memory = memory();
    memory.remember("/cart");
    assert_eq!(memory.resolve_and_clear(Some("https://evil.example.com/")), HOME_PATH);
}
