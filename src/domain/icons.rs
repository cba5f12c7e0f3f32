//! Closed icon set used by the shell.
//!
//! Path data follows the Lucide stroke icons (24x24 viewBox, round caps).
//! Rectangles and circles are expressed as paths so every glyph renders
//! through the same `path` loop.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    Wallet,
    CreditCard,
    TrendingUp,
    Settings,
    Bot,
    DollarSign,
    Bell,
    GraduationCap,
    BookOpen,
    Users,
}

impl Icon {
    #[cfg(test)]
    pub const ALL: [Icon; 11] = [
        Icon::LayoutDashboard,
        Icon::Wallet,
        Icon::CreditCard,
        Icon::TrendingUp,
        Icon::Settings,
        Icon::Bot,
        Icon::DollarSign,
        Icon::Bell,
        Icon::GraduationCap,
        Icon::BookOpen,
        Icon::Users,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Wallet => "wallet",
            Icon::CreditCard => "credit-card",
            Icon::TrendingUp => "trending-up",
            Icon::Settings => "settings",
            Icon::Bot => "bot",
            Icon::DollarSign => "dollar-sign",
            Icon::Bell => "bell",
            Icon::GraduationCap => "graduation-cap",
            Icon::BookOpen => "book-open",
            Icon::Users => "users",
        }
    }

    /// SVG `d` attributes, drawn in order
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::LayoutDashboard => &[
                "M4 3h5a1 1 0 0 1 1 1v7a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
                "M15 3h5a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
                "M15 12h5a1 1 0 0 1 1 1v7a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1v-7a1 1 0 0 1 1-1z",
                "M4 16h5a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1z",
            ],
            Icon::Wallet => &[
                "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
                "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
            ],
            Icon::CreditCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            Icon::TrendingUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M15 12a3 3 0 1 1-6 0a3 3 0 1 1 6 0z",
            ],
            Icon::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Icon::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Icon::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Icon::GraduationCap => &["M22 10v6", "M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_icon_has_geometry() {
        for icon in Icon::ALL {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.name());
            assert!(icon.paths().iter().all(|d| d.starts_with('M')));
        }
    }

    #[test]
    fn test_icon_names_are_unique() {
        let names: HashSet<_> = Icon::ALL.iter().map(|icon| icon.name()).collect();
        assert_eq!(names.len(), Icon::ALL.len());
    }

    #[test]
    fn test_serialized_name_matches_name() {
        for icon in Icon::ALL {
            let json = serde_json::to_value(icon).unwrap();
            assert_eq!(json, serde_json::Value::String(icon.name().to_string()));
        }
    }
}
