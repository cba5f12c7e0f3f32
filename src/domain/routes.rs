//! Static route table and exact-match resolution.
//!
//! This table is the single source of truth for which view a path mounts.
//! The router enum in `app::pages::routes` only declares which paths the
//! router accepts; every rendered screen is looked up here.

use serde::Serialize;

use crate::shared::errors::{AppError, Result};

pub const ROOT_PATH: &str = "/";

/// View selected for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Landing,
    Placeholder { title: &'static str },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Placeholder { .. } => "placeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: [RouteEntry; 6] = [
    RouteEntry {
        path: ROOT_PATH,
        view: View::Landing,
    },
    RouteEntry {
        path: "/dashboard",
        view: View::Placeholder { title: "Dashboard" },
    },
    RouteEntry {
        path: "/budgets",
        view: View::Placeholder { title: "Budgets" },
    },
    RouteEntry {
        path: "/expenses",
        view: View::Placeholder { title: "Expenses" },
    },
    RouteEntry {
        path: "/reports",
        view: View::Placeholder { title: "Reports" },
    },
    RouteEntry {
        path: "/settings",
        view: View::Placeholder { title: "Settings" },
    },
];

/// Exact-match lookup. No wildcards, parameters or case folding; the router
/// has already normalized trailing slashes by the time a path gets here.
pub fn resolve(path: &str) -> Result<View> {
    if !path.starts_with('/') {
        return Err(AppError::InvalidPath(path.to_string()));
    }

    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.view)
        .ok_or_else(|| AppError::RouteNotFound(path.to_string()))
}

/// JSON description of the route table, logged at startup
pub fn manifest() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::NAVIGATION;

    #[test]
    fn test_every_navigation_path_is_routable() {
        for entry in NAVIGATION {
            assert!(
                ROUTES.iter().any(|route| route.path == entry.path),
                "no route for {}",
                entry.path
            );
            assert!(resolve(entry.path).is_ok());
        }
    }

    #[test]
    fn test_root_resolves_to_landing() {
        assert_eq!(resolve("/"), Ok(View::Landing));
    }

    #[test]
    fn test_placeholder_titles() {
        let expected = [
            ("/dashboard", "Dashboard"),
            ("/budgets", "Budgets"),
            ("/expenses", "Expenses"),
            ("/reports", "Reports"),
            ("/settings", "Settings"),
        ];
        for (path, title) in expected {
            assert_eq!(resolve(path), Ok(View::Placeholder { title }));
        }
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(
            resolve("/nope"),
            Err(AppError::RouteNotFound("/nope".to_string()))
        );
        assert_eq!(
            resolve("/Dashboard"),
            Err(AppError::RouteNotFound("/Dashboard".to_string()))
        );
        assert_eq!(
            resolve("/dashboard/2024"),
            Err(AppError::RouteNotFound("/dashboard/2024".to_string()))
        );
    }

    #[test]
    fn test_relative_paths_are_invalid() {
        assert_eq!(
            resolve("dashboard"),
            Err(AppError::InvalidPath("dashboard".to_string()))
        );
        assert_eq!(resolve(""), Err(AppError::InvalidPath(String::new())));
    }

    #[test]
    fn test_manifest_shape() {
        let manifest = manifest().unwrap();
        let routes = manifest.as_array().unwrap();
        assert_eq!(routes.len(), ROUTES.len());
        assert_eq!(routes[0]["path"], "/");
        assert_eq!(routes[0]["view"]["kind"], "landing");
        assert_eq!(routes[1]["view"]["kind"], "placeholder");
        assert_eq!(routes[1]["view"]["title"], "Dashboard");
    }
}
