use dioxus::prelude::*;
use crate::app::components::{Button, ButtonVariant};
use crate::app::styles::NOTICE;
use crate::domain::routes::ROOT_PATH;
use crate::shared::navigation::NavigationSink;

pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Shown for any path without a route entry
#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div { class: "c-not-found fade-in", style: NOTICE.container,
            div { style: NOTICE.card,
                div { style: NOTICE.icon_container,
                    span { style: NOTICE.icon, "🧭" }
                }
                h1 { style: NOTICE.title, {NOT_FOUND_TITLE} }
                p { class: "c-not-found__path", style: NOTICE.description,
                    "Nothing lives at "
                    code { "{path}" }
                    " yet."
                }
                Button {
                    variant: ButtonVariant::Notice,
                    style: NOTICE.button,
                    onclick: move |_| navigator().navigate(ROOT_PATH),
                    "Back to Home"
                }
            }
        }
    }
}
