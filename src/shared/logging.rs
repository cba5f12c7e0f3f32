//! Structured logging for the Spendemic shell
//!
//! Every event carries an `operation` field so route resolution and
//! navigation can be filtered independently.

use crate::shared::errors::AppError;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RouteResolution,
    Navigation,
    Startup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RouteResolution => "route_resolution",
            LogOperation::Navigation => "navigation",
            LogOperation::Startup => "startup",
        }
    }
}

/// Log a successful route lookup
pub fn log_route_resolved(path: &str, view: &str) {
    tracing::debug!(
        operation = LogOperation::RouteResolution.as_str(),
        path = path,
        view = view,
        "Route resolved"
    );
}

/// Log a path with no route entry (rendered as not-found)
pub fn log_route_not_found(path: &str, error: &AppError) {
    tracing::warn!(
        operation = LogOperation::RouteResolution.as_str(),
        path = path,
        error = %error,
        "Falling back to not-found view"
    );
}

/// Log a navigation request issued by a view
pub fn log_navigation_request(target: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        "Navigation requested"
    );
}

/// Log a navigation the router refused
pub fn log_navigation_failure(target: &str, reason: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        reason = reason,
        "Navigation failed"
    );
}

/// Log the static route table once at startup
pub fn log_route_table(manifest: &serde_json::Value) {
    tracing::debug!(
        operation = LogOperation::Startup.as_str(),
        routes = %manifest,
        "Route table loaded"
    );
}

/// Log a route table that could not be serialized
pub fn log_route_table_error(error: &serde_json::Error) {
    tracing::warn!(
        operation = LogOperation::Startup.as_str(),
        error = %error,
        "Failed to serialize route table"
    );
}
