//! Landing page content and the call-to-action

use serde::Serialize;

use crate::domain::icons::Icon;
use crate::shared::navigation::NavigationSink;

/// Where "Get Started" leads
pub const CTA_TARGET: &str = "/dashboard";

/// Feature card shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Bot,
        title: "AI-Powered Insights",
        description: "Get personalized financial recommendations powered by advanced AI",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Budget Forecasting",
        description: "Predict your future expenses with time-series analysis",
    },
    Feature {
        icon: Icon::DollarSign,
        title: "Multi-Currency Support",
        description: "Manage finances across multiple currencies seamlessly",
    },
    Feature {
        icon: Icon::Bell,
        title: "Smart Alerts",
        description: "Stay on track with intelligent budget notifications",
    },
];

/// Hero illustration icons with their pixel sizes
pub const HERO_ICONS: [(Icon, u32); 3] = [
    (Icon::GraduationCap, 60),
    (Icon::BookOpen, 50),
    (Icon::Users, 55),
];

/// Staggered fade-in delay for the feature card at `index`
pub fn feature_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

/// Issues exactly one navigation request, to [`CTA_TARGET`]
pub fn activate_call_to_action(sink: &impl NavigationSink) {
    sink.navigate(CTA_TARGET);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routes::{View, resolve};
    use crate::shared::navigation::testing::RecordingSink;

    #[test]
    fn test_call_to_action_navigates_once_to_dashboard() {
        let sink = RecordingSink::default();
        activate_call_to_action(&sink);
        assert_eq!(*sink.requests.borrow(), vec!["/dashboard".to_string()]);
    }

    #[test]
    fn test_call_to_action_target_is_first_placeholder() {
        assert_eq!(
            resolve(CTA_TARGET),
            Ok(View::Placeholder { title: "Dashboard" })
        );
    }

    #[test]
    fn test_feature_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "AI-Powered Insights",
                "Budget Forecasting",
                "Multi-Currency Support",
                "Smart Alerts"
            ]
        );
    }

    #[test]
    fn test_feature_delay() {
        assert_eq!(feature_delay(0), "0.0s");
        assert_eq!(feature_delay(1), "0.1s");
        assert_eq!(feature_delay(3), "0.3s");
    }
}
