use dioxus::prelude::*;
use crate::domain::Icon;

/// Renders any [`Icon`] variant as an inline stroke SVG.
/// `style` lands on the wrapping span so color and filters inherit through
/// `currentColor`.
#[component]
pub fn IconGlyph(
    icon: Icon,
    #[props(default = 24)] size: u32,
    #[props(default)] style: &'static str,
    #[props(default = 2.0)] stroke_width: f32,
) -> Element {
    let name = icon.name();

    rsx! {
        span {
            class: "c-icon",
            style: "{style}",
            "data-icon": "{name}",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "{stroke_width}",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                for d in icon.paths() {
                    path { d: *d }
                }
            }
        }
    }
}
