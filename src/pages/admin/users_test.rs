use super::*;

#[test]
fn parse_role_round_trips_every_role() {
    for role in [Role::Customer, Role::Manager, Role::Admin] {
        assert_eq!(parse_role(role_value(role)), Some(role));
    }
}

#[test]
fn parse_role_rejects_unknown_values() {
    assert_eq!(parse_role("ROOT"), None);
    assert_eq!(parse_role(""), None);
}
