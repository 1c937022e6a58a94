use super::*;

#[test]
fn every_route_has_unique_name_and_path() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name);
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn approvals_is_manager_only() {
    let route = meta(RouteName::Approvals);
    assert!(route.requires_auth);
    assert_eq!(route.roles, &[Role::Manager]);
}

#[test]
fn login_and_not_found_are_public_and_bare() {
    for name in [RouteName::Login, RouteName::NotFound] {
        let route = meta(name);
        assert!(!route.requires_auth);
        assert!(route.roles.is_empty());
        assert_eq!(route.layout, Layout::Empty);
    }
}

// =============================================================
// match_path
// =============================================================

#[test]
fn exact_paths_resolve() {
    assert_eq!(match_path("/").name, RouteName::Root);
    assert_eq!(match_path("/login").name, RouteName::Login);
    assert_eq!(match_path("/home").name, RouteName::Home);
    assert_eq!(match_path("/expenses").name, RouteName::Expenses);
    assert_eq!(match_path("/approvals").name, RouteName::Approvals);
}

#[test]
fn trailing_slashes_are_ignored() {
    assert_eq!(match_path("/expenses/").name, RouteName::Expenses);
    assert_eq!(match_path("").name, RouteName::Root);
}

#[test]
fn detail_paths_match_a_single_id_segment() {
    assert_eq!(match_path("/expenses/42").name, RouteName::ExpenseDetail);
    assert_eq!(match_path("/expenses/42/edit").name, RouteName::NotFound);
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(match_path("/nope").name, RouteName::NotFound);
    assert_eq!(match_path("/approvals/extra").name, RouteName::NotFound);
}
