pub mod components;
pub mod layouts;
pub mod pages;
pub mod styles;

pub use pages::App;
