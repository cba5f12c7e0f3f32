use dioxus::prelude::*;
use crate::app::layouts::NavigationRail;
use crate::app::pages::{LandingView, NotFoundView, PlaceholderView};
use crate::domain::navigation::page_title;
use crate::domain::routes::{View, manifest, resolve};
use crate::shared::hooks::use_current_path;
use crate::shared::logging::{log_route_not_found, log_route_resolved, log_route_table, log_route_table_error};

/// Paths the router accepts.
///
/// Every variant renders through [`ScreenView`], which looks the path up in
/// the static route table; the catch-all keeps unknown paths inside the shell
/// so they get the not-found screen instead of an empty content region.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/", Screen)]
    Landing {},
    #[route("/dashboard", Screen)]
    Dashboard {},
    #[route("/budgets", Screen)]
    Budgets {},
    #[route("/expenses", Screen)]
    Expenses {},
    #[route("/reports", Screen)]
    Reports {},
    #[route("/settings", Screen)]
    Settings {},
    #[route("/:..segments", NotFoundScreen)]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Spendemic shell initialized");
        match manifest() {
            Ok(routes) => log_route_table(&routes),
            Err(e) => log_route_table_error(&e),
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Top-level layout: navigation rail + content region
#[component]
fn Shell() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let current_path = use_current_path();
    let title = page_title(&current_path);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        document::Title { "{title}" }
        div { class: "c-shell app-container",
            NavigationRail { current_path }
            main { class: "c-shell__content main-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Screen() -> Element {
    let path = use_current_path();
    rsx! { ScreenView { path } }
}

#[component]
fn NotFoundScreen(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { ScreenView { path } }
}

/// Mounts exactly one view for `path`, by exact match against the route table
#[component]
pub fn ScreenView(path: String) -> Element {
    match resolve(&path) {
        Ok(view) => {
            log_route_resolved(&path, view.name());
            match view {
                View::Landing => rsx! { LandingView {} },
                View::Placeholder { title } => rsx! {
                    PlaceholderView { title: title.to_string() }
                },
            }
        }
        Err(e) => {
            log_route_not_found(&path, &e);
            rsx! { NotFoundView { path } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::{COMING_SOON, NOT_FOUND_TITLE};
    use crate::domain::navigation::NAVIGATION;
    use crate::domain::routes::ROUTES;
    use dioxus::history::{MemoryHistory, provide_history_context};
    use std::rc::Rc;
    use std::str::FromStr;

    fn render_path(path: &str) -> String {
        dioxus_ssr::render_element(rsx! {
            ScreenView { path: path.to_string() }
        })
    }

    /// Router + shell mounted at `path` on an in-memory history
    #[component]
    fn ShellAt(path: String) -> Element {
        use_hook(|| {
            provide_history_context(Rc::new(MemoryHistory::with_initial_path(path.clone())));
        });
        rsx! { Router::<Route> {} }
    }

    fn render_shell(path: &str) -> String {
        dioxus_ssr::render_element(rsx! {
            ShellAt { path: path.to_string() }
        })
    }

    const ACTIVE_MARKER: &str = "data-active=\"true\"";

    /// Label of the link rendered as active, if any
    fn active_label(html: &str) -> Option<&'static str> {
        let start = html.find(ACTIVE_MARKER)?;
        let link = &html[start..];
        let link = &link[..link.find("</a>").unwrap_or(link.len())];
        NAVIGATION
            .iter()
            .map(|entry| entry.label)
            .find(|label| link.contains(label))
    }

    #[test]
    fn test_route_variants_match_table() {
        let declared = [
            Route::Landing {},
            Route::Dashboard {},
            Route::Budgets {},
            Route::Expenses {},
            Route::Reports {},
            Route::Settings {},
        ];
        let paths: Vec<String> = declared.iter().map(|route| route.to_string()).collect();
        let table: Vec<String> = ROUTES.iter().map(|route| route.path.to_string()).collect();
        assert_eq!(paths, table);
    }

    #[test]
    fn test_navigation_paths_parse_to_declared_routes() {
        for entry in NAVIGATION {
            let route = Route::from_str(entry.path)
                .unwrap_or_else(|_| panic!("{} does not parse", entry.path));
            assert!(!matches!(route, Route::NotFound { .. }), "{}", entry.path);
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn test_unknown_paths_hit_catch_all() {
        let route = Route::from_str("/nope/deeper").unwrap_or_else(|_| panic!("catch-all"));
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["nope".to_string(), "deeper".to_string()]
            }
        );
    }

    #[test]
    fn test_placeholder_paths_render_title_and_coming_soon() {
        let expected = [
            ("/dashboard", "Dashboard"),
            ("/budgets", "Budgets"),
            ("/expenses", "Expenses"),
            ("/reports", "Reports"),
            ("/settings", "Settings"),
        ];
        for (path, title) in expected {
            let html = render_path(path);
            assert!(html.contains(title), "{path}: {html}");
            assert!(html.contains(COMING_SOON), "{path}: {html}");
            assert!(!html.contains(NOT_FOUND_TITLE));
        }
    }

    #[test]
    fn test_root_renders_landing() {
        let html = render_path("/");
        assert!(html.contains("Why Choose Spendemic?"));
        assert!(html.contains("Get Started"));
        assert!(!html.contains(COMING_SOON));
    }

    #[test]
    fn test_unmatched_path_renders_not_found() {
        let html = render_path("/nope");
        assert!(html.contains(NOT_FOUND_TITLE));
        assert!(html.contains("/nope"));
        assert!(!html.contains(COMING_SOON));
    }

    #[test]
    fn test_shell_marks_exactly_the_current_entry_active() {
        for entry in NAVIGATION {
            let html = render_shell(entry.path);
            assert_eq!(html.matches(ACTIVE_MARKER).count(), 1, "{}: {html}", entry.path);
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
            assert_eq!(active_label(&html), Some(entry.label));
            assert!(html.contains(COMING_SOON), "{}", entry.path);
        }
    }

    #[test]
    fn test_shell_rail_order_matches_table() {
        let html = render_shell("/");
        let positions: Vec<usize> = NAVIGATION
            .iter()
            .map(|entry| html.find(entry.path).unwrap_or_else(|| panic!("{} missing", entry.path)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_shell_landing_has_no_active_entry() {
        let html = render_shell("/");
        assert_eq!(html.matches(ACTIVE_MARKER).count(), 0);
        assert!(html.contains("Why Choose Spendemic?"));
    }

    #[test]
    fn test_shell_renders_not_found_inside_layout() {
        for path in ["/nope", "/Dashboard"] {
            let html = render_shell(path);
            assert_eq!(html.matches(ACTIVE_MARKER).count(), 0, "{path}");
            assert!(html.contains(NOT_FOUND_TITLE), "{path}");
            // rail is still mounted around the not-found screen
            assert!(html.contains("c-sidebar"), "{path}");
        }
    }

    #[test]
    fn test_shell_normalizes_trailing_slash() {
        let html = render_shell("/dashboard/");
        assert_eq!(active_label(&html), Some("Dashboard"));
        assert!(html.contains(COMING_SOON));
        assert!(!html.contains(NOT_FOUND_TITLE));
    }
}
