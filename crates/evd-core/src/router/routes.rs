//! Route table and path matching.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Path the guard sends unauthenticated users to.
pub const AUTH_PATH: &str = "/auth";
/// Path the guard sends non-admin users to.
pub const HOME_PATH: &str = "/";

/// View a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RouteName {
    Map,
    Auth,
    Settings,
    CreateEvent,
    EventDetails,
    Dashboard,
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteName::Map => "Map",
            RouteName::Auth => "Auth",
            RouteName::Settings => "Settings",
            RouteName::CreateEvent => "CreateEvent",
            RouteName::EventDetails => "EventDetails",
            RouteName::Dashboard => "Dashboard",
        };
        f.pad(name)
    }
}

/// Access flags attached to a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    const OPEN: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };
    const AUTH: Self = Self {
        requires_auth: true,
        requires_admin: false,
    };
    const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
    };
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Pattern; `:name` segments capture a parameter.
    pub path: &'static str,
    pub name: RouteName,
    pub meta: RouteMeta,
    /// Whether captured params are handed to the view as props.
    pub props: bool,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: RouteName::Map,
        meta: RouteMeta::OPEN,
        props: false,
    },
    Route {
        path: "/auth",
        name: RouteName::Auth,
        meta: RouteMeta::OPEN,
        props: false,
    },
    Route {
        path: "/settings",
        name: RouteName::Settings,
        meta: RouteMeta::AUTH,
        props: false,
    },
    Route {
        path: "/create-event",
        name: RouteName::CreateEvent,
        meta: RouteMeta::ADMIN,
        props: false,
    },
    Route {
        path: "/event/:id",
        name: RouteName::EventDetails,
        meta: RouteMeta::OPEN,
        props: true,
    },
    Route {
        path: "/dashboard",
        name: RouteName::Dashboard,
        meta: RouteMeta::ADMIN,
        props: false,
    },
];

/// A path resolved against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub route: Route,
    /// Normalized path (no query, no fragment, no trailing slash).
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn name(&self) -> RouteName {
        self.route.name
    }

    pub fn meta(&self) -> RouteMeta {
        self.route.meta
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The `id` param as an event id, for the event details view.
    pub fn event_id(&self) -> Option<i64> {
        self.param("id")?.parse().ok()
    }
}

/// Drops the query string and fragment and splits into non-empty segments.
fn segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn match_route(route: &Route, path: &[&str]) -> Option<BTreeMap<String, String>> {
    let pattern = segments(route.path);
    if pattern.len() != path.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (expected, actual) in pattern.iter().zip(path) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), (*actual).to_string());
        } else if !expected.eq_ignore_ascii_case(actual) {
            return None;
        }
    }
    Some(params)
}

/// Resolves `path` to the first matching route.
///
/// Static segments match case-insensitively and a trailing slash is
/// ignored.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let parts = segments(path);
    ROUTES.iter().find_map(|route| {
        match_route(route, &parts).map(|params| RouteMatch {
            route: *route,
            path: format!("/{}", parts.join("/")),
            params,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: RouteName) -> &'static Route {
        ROUTES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_route_table_flags() {
        assert_eq!(route(RouteName::Map).meta, RouteMeta::default());
        assert_eq!(route(RouteName::Auth).meta, RouteMeta::default());
        assert_eq!(route(RouteName::EventDetails).meta, RouteMeta::default());
        assert!(route(RouteName::Settings).meta.requires_auth);
        assert!(!route(RouteName::Settings).meta.requires_admin);
        for name in [RouteName::CreateEvent, RouteName::Dashboard] {
            assert!(route(name).meta.requires_auth);
            assert!(route(name).meta.requires_admin);
        }
    }

    #[test]
    fn test_resolve_static_paths() {
        assert_eq!(resolve("/").unwrap().name(), RouteName::Map);
        assert_eq!(resolve("/auth").unwrap().name(), RouteName::Auth);
        assert_eq!(resolve("/settings").unwrap().name(), RouteName::Settings);
        assert_eq!(
            resolve("/create-event").unwrap().name(),
            RouteName::CreateEvent
        );
        assert_eq!(resolve("/dashboard").unwrap().name(), RouteName::Dashboard);
    }

    #[test]
    fn test_resolve_event_details_param() {
        let m = resolve("/event/42").unwrap();
        assert_eq!(m.name(), RouteName::EventDetails);
        assert_eq!(m.param("id"), Some("42"));
        assert_eq!(m.event_id(), Some(42));
        assert!(m.route.props);
    }

    #[test]
    fn test_non_numeric_event_id_still_matches() {
        let m = resolve("/event/abc").unwrap();
        assert_eq!(m.param("id"), Some("abc"));
        assert_eq!(m.event_id(), None);
    }

    #[test]
    fn test_resolve_normalizes_path() {
        let m = resolve("/Dashboard/?tab=stats#top").unwrap();
        assert_eq!(m.name(), RouteName::Dashboard);
        assert_eq!(m.path, "/Dashboard");
        assert_eq!(resolve("").unwrap().name(), RouteName::Map);
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        assert!(resolve("/nope").is_none());
        assert!(resolve("/event").is_none());
        assert!(resolve("/event/1/extra").is_none());
    }

    #[test]
    fn test_route_name_display() {
        assert_eq!(RouteName::CreateEvent.to_string(), "CreateEvent");
        assert_eq!(RouteName::Map.to_string(), "Map");
    }
}
