// Custom Dioxus hooks
pub mod use_current_path;

pub use use_current_path::use_current_path;
