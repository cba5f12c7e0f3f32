// Static tables and resolution logic (no UI dependencies beyond serde)
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus views, layout and router
pub mod app;
