use super::*;

// =============================================================
// One-shot refresh gate (the retry-once transport rule)
// =============================================================

#[test]
fn first_unauthorized_failure_triggers_refresh() {
    assert!(should_attempt_refresh(401, false));
}

#[test]
fn second_unauthorized_failure_does_not_refresh_again() {
    assert!(!should_attempt_refresh(401, true));
}

#[test]
fn non_unauthorized_statuses_never_refresh() {
    for status in [400, 403, 404, 500, 503] {
        assert!(!should_attempt_refresh(status, false), "status {status}");
        assert!(!should_attempt_refresh(status, true), "status {status}");
    }
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn product_endpoint_formats_expected_path() {
    assert_eq!(product_endpoint("p-42"), "/api/products/p-42");
}

#[test]
fn user_role_endpoint_formats_expected_path() {
    assert_eq!(user_role_endpoint("u-7"), "/api/admin/users/u-7/role");
}

#[test]
fn discount_active_endpoint_formats_expected_path() {
    assert_eq!(discount_active_endpoint("d-3"), "/api/admin/discounts/d-3/active");
}

// =============================================================
// User-facing failure messages
// =============================================================

#[test]
fn login_failed_message_is_friendly_for_bad_credentials() {
    assert_eq!(login_failed_message(401), "Email or password is incorrect.");
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn register_failed_message_calls_out_duplicate_email() {
    assert_eq!(
        register_failed_message(409),
        "An account with that email already exists."
    );
    assert_eq!(register_failed_message(422), "registration failed: 422");
}

#[test]
fn unauthorized_error_displays_without_status_detail() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
}
