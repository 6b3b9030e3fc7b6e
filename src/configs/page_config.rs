use serde::{ Serialize, Deserialize };
use crate::error::PageError;

/// Element ids, class names and storage key the controllers bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_toggle_id: String,
    pub sun_icon_id: String,
    pub moon_icon_id: String,
    pub menu_toggle_id: String,
    pub menu_panel_id: String,
    pub storage_key: String,
    pub dark_class: String,
    pub hidden_class: String,
    pub expanded_attribute: String,
    pub dark_media_query: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".to_string(),
            sun_icon_id: "iconSun".to_string(),
            moon_icon_id: "iconMoon".to_string(),
            menu_toggle_id: "menuToggle".to_string(),
            menu_panel_id: "mobileMenu".to_string(),
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
            hidden_class: "hidden".to_string(),
            expanded_attribute: "aria-expanded".to_string(),
            dark_media_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a partial override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PageError> {
        let fields = [
            ("theme_toggle_id", &self.theme_toggle_id),
            ("sun_icon_id", &self.sun_icon_id),
            ("moon_icon_id", &self.moon_icon_id),
            ("menu_toggle_id", &self.menu_toggle_id),
            ("menu_panel_id", &self.menu_panel_id),
            ("storage_key", &self.storage_key),
            ("dark_class", &self.dark_class),
            ("hidden_class", &self.hidden_class),
            ("expanded_attribute", &self.expanded_attribute),
            ("dark_media_query", &self.dark_media_query),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                log::warn!("Page config field {} is empty", name);
                return Err(PageError::Config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}
