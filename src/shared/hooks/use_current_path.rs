use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Current location as a path string.
///
/// Subscribes the calling component to route changes, so it re-renders on
/// every navigation.
pub fn use_current_path() -> String {
    use_route::<Route>().to_string()
}
