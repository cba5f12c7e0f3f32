//! Sidebar navigation table and active-entry matching

use serde::Serialize;

use crate::config::BRAND;
use crate::domain::icons::Icon;

/// One sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

/// Sidebar entries in display order
pub const NAVIGATION: [NavigationEntry; 5] = [
    NavigationEntry {
        label: "Dashboard",
        path: "/dashboard",
        icon: Icon::LayoutDashboard,
    },
    NavigationEntry {
        label: "Budgets",
        path: "/budgets",
        icon: Icon::Wallet,
    },
    NavigationEntry {
        label: "Expenses",
        path: "/expenses",
        icon: Icon::CreditCard,
    },
    NavigationEntry {
        label: "Reports",
        path: "/reports",
        icon: Icon::TrendingUp,
    },
    NavigationEntry {
        label: "Settings",
        path: "/settings",
        icon: Icon::Settings,
    },
];

/// Exact string match, no prefix matching
pub fn is_active(entry: &NavigationEntry, current_path: &str) -> bool {
    entry.path == current_path
}

/// A navigation entry paired with its active flag for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub entry: NavigationEntry,
    pub active: bool,
}

pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .map(|entry| NavItem {
            entry: *entry,
            active: is_active(entry, current_path),
        })
        .collect()
}

pub fn active_entry(current_path: &str) -> Option<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .find(|entry| is_active(entry, current_path))
}

/// Document title for the current location, e.g. "Spendemic · Budgets"
pub fn page_title(current_path: &str) -> String {
    match active_entry(current_path) {
        Some(entry) => format!("{} · {}", BRAND.name, entry.label),
        None => BRAND.name.to_string(),
    }
}
