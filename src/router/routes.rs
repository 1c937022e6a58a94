//! Static route metadata: auth requirements, role allow-lists, layout.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Every navigable route in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Root,
    Login,
    Home,
    Expenses,
    ExpenseDetail,
    Approvals,
    NotFound,
}

/// Which chrome a route renders inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Navbar + content.
    Default,
    /// Bare page (login, not-found).
    Empty,
}

/// Per-route guard/layout annotations.
#[derive(Clone, Copy, Debug)]
pub struct RouteMeta {
    pub name: RouteName,
    pub path: &'static str,
    pub requires_auth: bool,
    /// Empty means any authenticated role.
    pub roles: &'static [Role],
    pub layout: Layout,
}

pub const ROUTES: [RouteMeta; 7] = [
    RouteMeta {
        name: RouteName::Root,
        path: "/",
        requires_auth: true,
        roles: &[],
        layout: Layout::Default,
    },
    RouteMeta {
        name: RouteName::Login,
        path: "/login",
        requires_auth: false,
        roles: &[],
        layout: Layout::Empty,
    },
    RouteMeta {
        name: RouteName::Home,
        path: "/home",
        requires_auth: true,
        roles: &[],
        layout: Layout::Default,
    },
    RouteMeta {
        name: RouteName::Expenses,
        path: "/expenses",
        requires_auth: true,
        roles: &[],
        layout: Layout::Default,
    },
    RouteMeta {
        name: RouteName::ExpenseDetail,
        path: "/expenses/:id",
        requires_auth: true,
        roles: &[],
        layout: Layout::Default,
    },
    RouteMeta {
        name: RouteName::Approvals,
        path: "/approvals",
        requires_auth: true,
        roles: &[Role::Manager],
        layout: Layout::Default,
    },
    RouteMeta {
        name: RouteName::NotFound,
        path: "*",
        requires_auth: false,
        roles: &[],
        layout: Layout::Empty,
    },
];

/// Metadata for a route by name.
pub fn meta(name: RouteName) -> &'static RouteMeta {
    ROUTES
        .iter()
        .find(|r| r.name == name)
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Resolve a concrete path to its route metadata. Unknown paths map to
/// the catch-all not-found route.
pub fn match_path(path: &str) -> &'static RouteMeta {
    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    match trimmed {
        "/" => meta(RouteName::Root),
        "/login" => meta(RouteName::Login),
        "/home" => meta(RouteName::Home),
        "/expenses" => meta(RouteName::Expenses),
        "/approvals" => meta(RouteName::Approvals),
        _ => {
            let rest = trimmed.strip_prefix("/expenses/");
            match rest {
                Some(id) if !id.is_empty() && !id.contains('/') => meta(RouteName::ExpenseDetail),
                _ => meta(RouteName::NotFound),
            }
        }
    }
}
