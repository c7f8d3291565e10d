use super::*;
use crate::net::types::User;

fn session_with(role: Role, verified: bool) -> Session {
    Session::default().logged_in(User {
        id: "u-1".to_owned(),
        email: "u@example.com".to_owned(),
        name: "U".to_owned(),
        role,
        verified,
        avatar_url: None,
    })
}

fn anonymous() -> Session {
    Session::default().reconciled(None)
}

// =============================================================
// Ordering: auth before role before verification
// =============================================================

#[test]
fn anonymous_always_needs_login_regardless_of_other_constraints() {
    let session = anonymous();
    let combos = [
        RouteConstraints::authenticated(),
        RouteConstraints::verified_roles(&[Role::Customer]),
        RouteConstraints::roles(&[Role::Admin]),
        RouteConstraints {
            require_auth: true,
            require_verified: true,
            allowed_roles: vec![Role::Manager, Role::Admin],
        },
    ];
    for constraints in combos {
        assert_eq!(evaluate(&constraints, &session), AccessDecision::NeedsLogin);
    }
}

#[test]
fn wrong_role_is_forbidden_before_verification_is_inspected() {
    // Unverified admin on a customer-only verified route: the role check
    // must win so verification status never leaks to the wrong audience.
    let session = session_with(Role::Admin, false);
    let constraints = RouteConstraints::verified_roles(&[Role::Customer]);
    assert_eq!(
        evaluate(&constraints, &session),
        AccessDecision::Forbidden { role: Role::Admin }
    );
}

#[test]
fn right_role_but_unverified_needs_verification() {
    let session = session_with(Role::Customer, false);
    let constraints = RouteConstraints::verified_roles(&[Role::Customer]);
    assert_eq!(evaluate(&constraints, &session), AccessDecision::NeedsVerification);
}

#[test]
fn verified_right_role_is_allowed() {
    let session = session_with(Role::Customer, true);
    let constraints = RouteConstraints::verified_roles(&[Role::Customer]);
    assert_eq!(evaluate(&constraints, &session), AccessDecision::Allow);
}

// =============================================================
// Role membership
// =============================================================

#[test]
fn empty_allowed_roles_admits_any_authenticated_role() {
    let constraints = RouteConstraints::authenticated();
    for role in [Role::Customer, Role::Manager, Role::Admin] {
        assert_eq!(evaluate(&constraints, &session_with(role, false)), AccessDecision::Allow);
    }
}

#[test]
fn role_list_admits_each_member() {
    let constraints = RouteConstraints::roles(&[Role::Manager, Role::Admin]);
    assert_eq!(
        evaluate(&constraints, &session_with(Role::Manager, true)),
        AccessDecision::Allow
    );
    assert_eq!(
        evaluate(&constraints, &session_with(Role::Admin, true)),
        AccessDecision::Allow
    );
    assert_eq!(
        evaluate(&constraints, &session_with(Role::Customer, true)),
        AccessDecision::Forbidden { role: Role::Customer }
    );
}

#[test]
fn admin_is_not_implicitly_admitted_to_manager_only_routes() {
    let constraints = RouteConstraints::roles(&[Role::Manager]);
    assert_eq!(
        evaluate(&constraints, &session_with(Role::Admin, true)),
        AccessDecision::Forbidden { role: Role::Admin }
    );
}

// =============================================================
// Public routes and determinism
// =============================================================

#[test]
fn public_routes_allow_anonymous_visitors() {
    assert_eq!(evaluate(&RouteConstraints::public(), &anonymous()), AccessDecision::Allow);
}

#[test]
fn role_or_verification_constraints_imply_authentication() {
    // A constraint set that forgot require_auth must still bounce
    // anonymous visitors to login, not leak a verification prompt.
    let constraints = RouteConstraints {
        require_auth: false,
        require_verified: true,
        allowed_roles: vec![Role::Customer],
    };
    assert_eq!(evaluate(&constraints, &anonymous()), AccessDecision::NeedsLogin);
}

#[test]
fn evaluation_is_pure_and_repeatable() {
    let session = session_with(Role::Customer, false);
    let constraints = RouteConstraints::verified_roles(&[Role::Customer]);
    let first = evaluate(&constraints, &session);
    let second = evaluate(&constraints, &session);
    assert_eq!(first, second);
}
