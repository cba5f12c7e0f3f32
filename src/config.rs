//! Static branding and runtime defaults

/// Copy shown by the shell chrome and the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandConfig {
    pub name: &'static str,
    pub rail_subtitle: &'static str,
    pub hero_subtitle: &'static str,
    pub tagline: &'static str,
    pub illustration_caption: &'static str,
    pub features_heading: &'static str,
    pub cta_label: &'static str,
    pub footer_title: &'static str,
    pub footer_subtitle: &'static str,
}

pub const BRAND: BrandConfig = BrandConfig {
    name: "Spendemic",
    rail_subtitle: "AI Financial Guide",
    hero_subtitle: "AI Financial Guide App for International Students",
    tagline: "One-stop solution for all things finance",
    illustration_caption: "Students on their way to success!",
    features_heading: "Why Choose Spendemic?",
    cta_label: "Get Started →",
    footer_title: "Master's Project",
    footer_subtitle: "CPSC 597 • CSUF",
};

/// Default level for the native tracing subscriber; `RUST_LOG` adds to it
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_heading_names_the_app() {
        assert!(BRAND.features_heading.contains(BRAND.name));
        assert!(BRAND.cta_label.starts_with("Get Started"));
    }
}
