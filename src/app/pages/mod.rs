pub mod landing;
pub mod not_found;
pub mod placeholder;
pub mod routes;

pub use landing::LandingView;
pub use not_found::{NOT_FOUND_TITLE, NotFoundView};
pub use placeholder::{COMING_SOON, PlaceholderView};
pub use routes::{App, Route, ScreenView};
