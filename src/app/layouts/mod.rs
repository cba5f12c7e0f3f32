pub mod sidebar;

pub use sidebar::NavigationRail;
