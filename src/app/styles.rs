//! Inline style records.
//!
//! Plain CSS declarations grouped per component, kept apart from the markup
//! so the theme can change without touching behavior. Hover states and
//! keyframes live in `assets/css`, since inline styles cannot express them.

pub struct SidebarStyles {
    pub rail: &'static str,
    pub logo: &'static str,
    pub logo_text: &'static str,
    pub logo_subtext: &'static str,
    pub logo_divider: &'static str,
    pub nav: &'static str,
    pub link: &'static str,
    pub link_active: &'static str,
    pub icon: &'static str,
    pub footer: &'static str,
    pub footer_text: &'static str,
    pub footer_subtext: &'static str,
}

impl SidebarStyles {
    pub fn link_style(&self, active: bool) -> String {
        if active {
            format!("{}{}", self.link, self.link_active)
        } else {
            self.link.to_string()
        }
    }
}

pub const SIDEBAR: SidebarStyles = SidebarStyles {
    rail: "width: 250px; flex-shrink: 0; background: linear-gradient(180deg, var(--brand-maroon) 0%, var(--brand-maroon-dark) 100%); color: var(--brand-rose); padding: 20px; display: flex; flex-direction: column; gap: 30px; box-shadow: 4px 0 20px rgba(0, 0, 0, 0.5); position: relative;",
    logo: "border-bottom: 3px solid var(--brand-gold); padding-bottom: 20px; position: relative;",
    logo_text: "font-size: 2.2em; background: linear-gradient(135deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; margin: 0 0 5px 0; font-weight: 800; text-shadow: 0 0 20px rgba(255, 215, 0, 0.3);",
    logo_subtext: "font-size: 0.85em; color: var(--brand-rose); margin: 0; opacity: 0.9;",
    logo_divider: "position: absolute; bottom: -3px; left: 0; width: 60px; height: 3px; background: var(--brand-gold); box-shadow: 0 0 10px var(--brand-gold);",
    nav: "display: flex; flex-direction: column; gap: 8px; flex: 1;",
    link: "padding: 14px 18px; border-radius: 10px; transition: all 0.3s ease; font-size: 1.05em; font-weight: 500; border: 1px solid transparent; display: flex; align-items: center; gap: 12px;",
    link_active: " background: linear-gradient(135deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); color: var(--brand-maroon); font-weight: 700; border: 1px solid var(--brand-gold); box-shadow: 0 4px 15px rgba(255, 215, 0, 0.4); transform: translateX(5px);",
    icon: "flex-shrink: 0; display: inline-flex;",
    footer: "border-top: 2px solid var(--brand-maroon-light); padding-top: 15px; text-align: center;",
    footer_text: "font-size: 0.9em; color: var(--brand-gold); margin: 0 0 5px 0; font-weight: 600;",
    footer_subtext: "font-size: 0.75em; color: var(--brand-rose); margin: 0; opacity: 0.7;",
};

pub struct LandingStyles {
    pub container: &'static str,
    pub hero: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub illustration: &'static str,
    pub illustration_icons: &'static str,
    pub illustration_icon: &'static str,
    pub illustration_caption: &'static str,
    pub cta_button: &'static str,
    pub features_section: &'static str,
    pub features_title: &'static str,
    pub features_grid: &'static str,
    pub feature_card: &'static str,
    pub feature_icon: &'static str,
    pub feature_title: &'static str,
    pub feature_description: &'static str,
}

pub const LANDING: LandingStyles = LandingStyles {
    container: "max-width: 1100px; margin: 0 auto; padding: 40px 20px;",
    hero: "text-align: center; display: flex; flex-direction: column; align-items: center; gap: 20px; margin-bottom: 60px;",
    title: "font-size: 5em; background: linear-gradient(135deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; margin: 0; text-shadow: 0 0 30px rgba(255, 215, 0, 0.3); font-weight: 800;",
    subtitle: "font-size: 1.8em; color: var(--brand-rose); margin: 0; font-weight: 500;",
    tagline: "font-size: 1.2em; color: var(--brand-gold); margin-top: 10px; font-style: italic; opacity: 0.9;",
    illustration: "margin: 40px 0; padding: 40px; background: linear-gradient(135deg, var(--brand-maroon) 0%, var(--brand-maroon-light) 100%); border-radius: 20px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5), 0 0 20px rgba(255, 215, 0, 0.2); border: 2px solid var(--brand-gold);",
    illustration_icons: "display: flex; justify-content: center; align-items: center; gap: 30px; margin-bottom: 20px;",
    illustration_icon: "color: var(--brand-gold); filter: drop-shadow(0 4px 8px rgba(0, 0, 0, 0.3)); display: inline-flex;",
    illustration_caption: "font-size: 1.2em; color: var(--brand-gold); font-weight: 600; margin: 0;",
    cta_button: "margin-top: 20px; padding: 18px 50px; background: linear-gradient(135deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); color: var(--brand-maroon); border: none; border-radius: 12px; font-size: 1.3em; font-weight: 700; display: inline-block; transition: all 0.3s ease; cursor: pointer; box-shadow: 0 8px 25px rgba(255, 215, 0, 0.4);",
    features_section: "margin-top: 80px;",
    features_title: "font-size: 2.5em; color: var(--brand-gold); text-align: center; margin-bottom: 50px; font-weight: 700;",
    features_grid: "display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 30px;",
    feature_card: "background: linear-gradient(135deg, var(--brand-maroon) 0%, var(--brand-maroon-dark) 100%); padding: 30px; border-radius: 16px; text-align: center; border: 1px solid var(--brand-maroon-light); box-shadow: 0 8px 30px rgba(0, 0, 0, 0.4); transition: all 0.3s ease; cursor: pointer;",
    feature_icon: "color: var(--brand-gold); margin-bottom: 15px; display: flex; justify-content: center; align-items: center; filter: drop-shadow(0 4px 8px rgba(0, 0, 0, 0.3));",
    feature_title: "font-size: 1.4em; color: var(--brand-gold); margin-bottom: 12px; font-weight: 600;",
    feature_description: "font-size: 1em; color: var(--brand-rose); line-height: 1.6; margin: 0;",
};

/// Shared by the placeholder and not-found screens
pub struct NoticeStyles {
    pub container: &'static str,
    pub card: &'static str,
    pub icon_container: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub description: &'static str,
    pub loader: &'static str,
    pub loader_bar: &'static str,
    pub button: &'static str,
}

pub const NOTICE: NoticeStyles = NoticeStyles {
    container: "max-width: 800px; margin: 0 auto; padding: 60px 20px; text-align: center;",
    card: "background: linear-gradient(135deg, var(--brand-maroon) 0%, var(--brand-maroon-dark) 100%); padding: 60px 40px; border-radius: 20px; border: 2px solid var(--brand-gold); box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5), 0 0 20px rgba(255, 215, 0, 0.2);",
    icon_container: "margin-bottom: 20px;",
    icon: "font-size: 4em; filter: drop-shadow(0 4px 8px rgba(0, 0, 0, 0.3));",
    title: "font-size: 3em; color: var(--brand-gold); margin: 0 0 20px 0; font-weight: 700;",
    message: "font-size: 2em; background: linear-gradient(135deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; margin: 0 0 15px 0; font-weight: 600;",
    description: "font-size: 1.2em; color: var(--brand-rose); line-height: 1.6; margin: 0 0 30px 0;",
    loader: "width: 200px; height: 6px; background-color: var(--brand-maroon-dark); border-radius: 3px; margin: 0 auto; overflow: hidden;",
    loader_bar: "width: 50%; height: 100%; background: linear-gradient(90deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); border-radius: 3px; animation: shimmer 2s ease-in-out infinite;",
    button: "padding: 14px 36px; background: linear-gradient(135deg, var(--brand-gold) 0%, var(--brand-gold-dark) 100%); color: var(--brand-maroon); border: none; border-radius: 12px; font-size: 1.1em; font-weight: 700; cursor: pointer;",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_extends_base_style() {
        let inactive = SIDEBAR.link_style(false);
        let active = SIDEBAR.link_style(true);
        assert_eq!(inactive, SIDEBAR.link);
        assert!(active.starts_with(SIDEBAR.link));
        assert!(active.contains("var(--brand-gold)"));
    }
}
