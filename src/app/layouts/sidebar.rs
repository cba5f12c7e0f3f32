use dioxus::prelude::*;
use crate::app::components::IconGlyph;
use crate::app::styles::SIDEBAR;
use crate::config::BRAND;
use crate::domain::navigation::{NavItem, nav_items};

/// Fixed navigation rail.
///
/// `current_path` is passed in by the shell rather than read from the router
/// here, so the rail stays a pure function of its props.
#[component]
pub fn NavigationRail(current_path: String) -> Element {
    let items = nav_items(&current_path);

    rsx! {
        aside { class: "c-sidebar", style: SIDEBAR.rail,
            div { class: "c-sidebar__header", style: SIDEBAR.logo,
                h1 { style: SIDEBAR.logo_text, {BRAND.name} }
                p { style: SIDEBAR.logo_subtext, {BRAND.rail_subtitle} }
                div { style: SIDEBAR.logo_divider }
            }
            nav { class: "c-sidebar__nav", style: SIDEBAR.nav,
                for item in items {
                    NavLinkItem { item }
                }
            }
            div { class: "c-sidebar__footer", style: SIDEBAR.footer,
                p { style: SIDEBAR.footer_text, {BRAND.footer_title} }
                p { style: SIDEBAR.footer_subtext, {BRAND.footer_subtitle} }
            }
        }
    }
}

#[component]
fn NavLinkItem(item: NavItem) -> Element {
    let link_class = if item.active {
        "c-nav-link c-nav-link--active"
    } else {
        "c-nav-link"
    };
    let row_style = SIDEBAR.link_style(item.active);
    let aria_current = if item.active { "page" } else { "false" };
    let active = item.active;

    rsx! {
        Link {
            to: item.entry.path,
            class: "{link_class}",
            span {
                style: "{row_style}",
                "aria-current": "{aria_current}",
                "data-active": "{active}",
                IconGlyph { icon: item.entry.icon, size: 20, style: SIDEBAR.icon }
                {item.entry.label}
            }
        }
    }
}
