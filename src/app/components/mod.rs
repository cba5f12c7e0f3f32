pub mod button;
pub mod card;
pub mod icon;

pub use button::{Button, ButtonVariant};
pub use card::FeatureCard;
pub use icon::IconGlyph;
