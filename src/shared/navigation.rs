//! Seam between views and the navigation provider.
//!
//! Views never touch the router directly when they want to move somewhere;
//! they hand a target path to a [`NavigationSink`]. The Dioxus router's
//! [`Navigator`] is the production sink.

use dioxus::router::Navigator;

use crate::shared::logging::{log_navigation_failure, log_navigation_request};

/// Accepts navigation requests by target path
pub trait NavigationSink {
    fn navigate(&self, path: &str);
}

impl NavigationSink for Navigator {
    fn navigate(&self, path: &str) {
        log_navigation_request(path);
        if let Some(failure) = self.push(path) {
            log_navigation_failure(path, &format!("{failure:?}"));
        }
    }
}
