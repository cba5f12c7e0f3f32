use dioxus::prelude::*;
use crate::app::components::IconGlyph;
use crate::app::styles::LANDING;
use crate::domain::landing::{Feature, feature_delay};

/// Landing feature card; cards fade in one after another by `index`
#[component]
pub fn FeatureCard(feature: Feature, index: usize) -> Element {
    let style = format!("{} animation-delay: {};", LANDING.feature_card, feature_delay(index));

    rsx! {
        div {
            class: "c-feature-card fade-in",
            style: "{style}",
            div {
                style: LANDING.feature_icon,
                IconGlyph { icon: feature.icon, size: 48, stroke_width: 1.5 }
            }
            h4 { style: LANDING.feature_title, {feature.title} }
            p { style: LANDING.feature_description, {feature.description} }
        }
    }
}
