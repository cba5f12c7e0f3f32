use dioxus::prelude::*;
use crate::app::components::{Button, ButtonVariant, FeatureCard, IconGlyph};
use crate::app::styles::LANDING;
use crate::config::BRAND;
use crate::domain::landing::{FEATURES, HERO_ICONS, activate_call_to_action};

/// Static landing page: hero, call-to-action, feature grid
#[component]
pub fn LandingView() -> Element {
    rsx! {
        div { class: "c-landing", style: LANDING.container,
            div { class: "c-landing__hero fade-in", style: LANDING.hero,
                h1 { style: LANDING.title, {BRAND.name} }
                h2 { style: LANDING.subtitle, {BRAND.hero_subtitle} }
                p { style: LANDING.tagline, {BRAND.tagline} }

                div { style: LANDING.illustration,
                    div { style: LANDING.illustration_icons,
                        for (icon, size) in HERO_ICONS {
                            IconGlyph { icon, size, style: LANDING.illustration_icon }
                        }
                    }
                    p { style: LANDING.illustration_caption, {BRAND.illustration_caption} }
                }

                // navigator() needs the router context, so only resolve it on click
                Button {
                    variant: ButtonVariant::CallToAction,
                    style: LANDING.cta_button,
                    onclick: move |_| activate_call_to_action(&navigator()),
                    {BRAND.cta_label}
                }
            }

            section { class: "c-landing__features", style: LANDING.features_section,
                h3 { style: LANDING.features_title, {BRAND.features_heading} }
                div { style: LANDING.features_grid,
                    for (index, feature) in FEATURES.iter().enumerate() {
                        FeatureCard { feature: *feature, index }
                    }
                }
            }
        }
    }
}
