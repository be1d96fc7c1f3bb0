//! Client-side router.
//!
//! Maps locations to views through the static route table and runs the
//! navigation guard before every move. The router only remembers where it
//! currently is; the session it checks lives in [`AuthStore`].
//!
//! ## Module Structure
//!
//! - `routes.rs`: route table, `RouteMeta` flags, path matching
//! - `guard.rs`: the auth/admin guard

mod guard;
mod routes;

use std::collections::BTreeMap;

pub use guard::{GuardDecision, guard};
pub use routes::{
    AUTH_PATH, HOME_PATH, ROUTES, Route, RouteMatch, RouteMeta, RouteName, resolve,
};
use serde::Serialize;

use crate::features::auth::AuthStore;

/// Redirect hops allowed before a navigation is abandoned.
const MAX_REDIRECTS: usize = 8;

/// History base used in production builds.
pub const PRODUCTION_BASE: &str = "/pupsarin-tech/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    NotFound(String),
    #[error("too many redirects navigating to '{0}'")]
    RedirectLoop(String),
}

/// Result of a navigation that landed somewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    /// Where the router ended up.
    pub to: RouteMatch,
    /// The originally requested path, when the guard sent us elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    base: String,
    current: RouteMatch,
}

impl Router {
    /// Creates a router at `/` under the given history base.
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            current: home(),
        }
    }

    /// The history base, always with leading and trailing slashes.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn current(&self) -> &RouteMatch {
        &self.current
    }

    /// Renders an app path as a full location under the base.
    pub fn href(&self, path: &str) -> String {
        let prefix = self.base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{prefix}/{path}")
    }

    /// Strips the history base from a full location, if present.
    pub fn strip_base<'a>(&self, location: &'a str) -> &'a str {
        let prefix = self.base.trim_end_matches('/');
        if prefix.is_empty() {
            return location;
        }
        match location.strip_prefix(prefix) {
            Some("") => HOME_PATH,
            Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
            _ => location,
        }
    }

    /// Navigates to `location`, following guard redirects.
    ///
    /// The current location only changes when the navigation lands.
    pub fn navigate(
        &mut self,
        location: &str,
        auth: &AuthStore,
    ) -> Result<Navigation, RouteError> {
        let requested = self.strip_base(location);
        let mut target = requested.to_string();
        let mut redirected_from = None;

        for _ in 0..MAX_REDIRECTS {
            let matched =
                resolve(&target).ok_or_else(|| RouteError::NotFound(target.clone()))?;

            match guard(matched.meta(), auth) {
                GuardDecision::Proceed => {
                    tracing::debug!(path = %matched.path, route = %matched.name(), "navigated");
                    self.current = matched.clone();
                    return Ok(Navigation {
                        to: matched,
                        redirected_from,
                    });
                }
                GuardDecision::Redirect(to) => {
                    tracing::debug!(from = %matched.path, to, "guard redirect");
                    redirected_from.get_or_insert_with(|| matched.path.clone());
                    target = to.to_string();
                }
            }
        }

        Err(RouteError::RedirectLoop(requested.to_string()))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

fn home() -> RouteMatch {
    RouteMatch {
        route: ROUTES[0],
        path: HOME_PATH.to_string(),
        params: BTreeMap::new(),
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        HOME_PATH.to_string()
    } else {
        format!("/{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;

    fn auth() -> AuthStore {
        AuthStore::new(Arc::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )))
    }

    #[test]
    fn test_router_starts_at_map() {
        let router = Router::default();
        assert_eq!(router.current().name(), RouteName::Map);
        assert_eq!(router.base(), "/");
    }

    #[test]
    fn test_dashboard_unauthenticated_redirects_to_auth() {
        let mut router = Router::default();
        let nav = router.navigate("/dashboard", &auth()).unwrap();
        assert_eq!(nav.to.path, "/auth");
        assert_eq!(nav.to.name(), RouteName::Auth);
        assert_eq!(nav.redirected_from.as_deref(), Some("/dashboard"));
        assert_eq!(router.current().name(), RouteName::Auth);
    }

    #[test]
    fn test_dashboard_as_user_redirects_home() {
        let mut router = Router::default();
        let mut store = auth();
        store.login("user@example.com", "user123").unwrap();
        let nav = router.navigate("/dashboard", &store).unwrap();
        assert_eq!(nav.to.name(), RouteName::Map);
        assert!(nav.was_redirected());
    }

    #[test]
    fn test_dashboard_as_admin_proceeds() {
        let mut router = Router::default();
        let mut store = auth();
        store.login("admin@example.com", "admin123").unwrap();
        let nav = router.navigate("/dashboard", &store).unwrap();
        assert_eq!(nav.to.name(), RouteName::Dashboard);
        assert!(!nav.was_redirected());
    }

    #[test]
    fn test_settings_needs_login_but_not_admin() {
        let mut router = Router::default();
        let mut store = auth();
        assert_eq!(
            router.navigate("/settings", &store).unwrap().to.name(),
            RouteName::Auth
        );
        store.login("user@example.com", "user123").unwrap();
        assert_eq!(
            router.navigate("/settings", &store).unwrap().to.name(),
            RouteName::Settings
        );
    }

    #[test]
    fn test_event_details_is_open() {
        let mut router = Router::default();
        let nav = router.navigate("/event/12", &auth()).unwrap();
        assert_eq!(nav.to.name(), RouteName::EventDetails);
        assert_eq!(nav.to.event_id(), Some(12));
    }

    #[test]
    fn test_unknown_path_keeps_current_location() {
        let mut router = Router::default();
        router.navigate("/auth", &auth()).unwrap();
        let err = router.navigate("/missing", &auth()).unwrap_err();
        assert_eq!(err, RouteError::NotFound("/missing".to_string()));
        assert_eq!(err.to_string(), "no route matches '/missing'");
        assert_eq!(router.current().name(), RouteName::Auth);
    }

    #[test]
    fn test_production_base_is_stripped() {
        let mut router = Router::new("pupsarin-tech");
        assert_eq!(router.base(), PRODUCTION_BASE);
        assert_eq!(router.strip_base("/pupsarin-tech/settings"), "/settings");
        assert_eq!(router.strip_base("/pupsarin-tech"), "/");
        assert_eq!(router.strip_base("/pupsarin-techno"), "/pupsarin-techno");
        assert_eq!(router.strip_base("/settings"), "/settings");

        let nav = router
            .navigate("/pupsarin-tech/event/3", &auth())
            .unwrap();
        assert_eq!(nav.to.event_id(), Some(3));
    }

    #[test]
    fn test_href_joins_base() {
        assert_eq!(Router::default().href("/event/3"), "/event/3");
        assert_eq!(
            Router::new(PRODUCTION_BASE).href("/event/3"),
            "/pupsarin-tech/event/3"
        );
        assert_eq!(Router::new(PRODUCTION_BASE).href("/"), "/pupsarin-tech/");
    }

    #[test]
    fn test_navigation_wire_shape() {
        let mut router = Router::default();
        let nav = router.navigate("/create-event", &auth()).unwrap();
        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json["to"]["route"]["name"], "Auth");
        assert_eq!(json["redirectedFrom"], "/create-event");
    }
}
