use dioxus::prelude::*;
use crate::app::styles::NOTICE;

pub const COMING_SOON: &str = "Coming Soon";
pub const UNDER_DEVELOPMENT: &str = "This page is under development and will be available soon.";

/// Stand-in screen for sections that are not built yet.
/// The title is rendered as given, even when empty.
#[component]
pub fn PlaceholderView(title: String) -> Element {
    rsx! {
        div { class: "c-placeholder fade-in", style: NOTICE.container,
            div { style: NOTICE.card,
                div { style: NOTICE.icon_container,
                    span { style: NOTICE.icon, "🚧" }
                }
                h1 { class: "c-placeholder__title", style: NOTICE.title, "{title}" }
                p { class: "c-placeholder__message", style: NOTICE.message, {COMING_SOON} }
                p { style: NOTICE.description, {UNDER_DEVELOPMENT} }
                div { style: NOTICE.loader,
                    div { style: NOTICE.loader_bar }
                }
            }
        }
    }
}
