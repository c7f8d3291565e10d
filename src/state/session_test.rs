use super::*;
use crate::net::types::{Role, User};

fn customer(verified: bool) -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        role: Role::Customer,
        verified,
        avatar_url: None,
    }
}

#[test]
fn default_session_is_anonymous_and_unchecked() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.auth_checked);
}

#[test]
fn reconciled_with_user_authenticates_and_marks_checked() {
    let session = Session::default().reconciled(Some(customer(true)));
    assert!(session.is_authenticated());
    assert!(session.auth_checked);
}

#[test]
fn reconciled_failure_marks_checked_but_stays_anonymous() {
    let session = Session::default().reconciled(None);
    assert!(!session.is_authenticated());
    assert!(session.auth_checked);
}

#[test]
fn auth_checked_never_reverts_across_later_failures() {
    let session = Session::default()
        .reconciled(Some(customer(true)))
        .reconciled(None);
    assert!(session.auth_checked);
    assert!(!session.is_authenticated());
}

#[test]
fn logged_in_populates_user_synchronously() {
    let session = Session::default().logged_in(customer(false));
    assert!(session.is_authenticated());
    assert!(session.auth_checked);
    assert_eq!(session.role(), Some(Role::Customer));
}

#[test]
fn logged_out_clears_user_but_keeps_checked() {
    let session = Session::default().logged_in(customer(true)).logged_out();
    assert!(!session.is_authenticated());
    assert!(session.auth_checked);
}

#[test]
fn is_verified_requires_both_user_and_flag() {
    assert!(!Session::default().is_verified());
    assert!(!Session::default().logged_in(customer(false)).is_verified());
    assert!(Session::default().logged_in(customer(true)).is_verified());
}

#[test]
fn is_authenticated_tracks_user_presence_exactly() {
    let mut session = Session::default();
    assert_eq!(session.is_authenticated(), session.user.is_some());
    session = session.logged_in(customer(true));
    assert_eq!(session.is_authenticated(), session.user.is_some());
    session = session.logged_out();
    assert_eq!(session.is_authenticated(), session.user.is_some());
}
