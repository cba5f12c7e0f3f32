use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    /// Pulsing hero call-to-action
    CallToAction,
    /// Plain button inside a notice card
    Notice,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    style: &'static str,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant.unwrap_or(ButtonVariant::Notice) {
        ButtonVariant::CallToAction => "c-cta pulse",
        ButtonVariant::Notice => "c-button",
    };

    rsx! {
        button {
            class: "{variant_class}",
            style: "{style}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
