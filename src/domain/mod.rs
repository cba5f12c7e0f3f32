pub mod icons;
pub mod landing;
pub mod navigation;
pub mod routes;

pub use icons::Icon;
pub use landing::{CTA_TARGET, FEATURES, Feature, HERO_ICONS, activate_call_to_action};
pub use navigation::{NAVIGATION, NavItem, NavigationEntry, nav_items};
pub use routes::{ROUTES, RouteEntry, View, resolve};
