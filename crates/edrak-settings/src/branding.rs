use serde::Serialize;

const CUSTOM_CSS: &str = "\n/* Add your custom CSS here for frontend styling */\n";

/// Application name, logo and stylesheet overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Branding {
    pub app_name: String,
    pub app_icon: String,
    /// Pixels.
    pub app_icon_width: u32,
    /// `None` keeps the application's default logo link.
    pub logo_target_path: Option<String>,
    pub logo_tooltip: String,
    pub logo_right_text: String,
    pub custom_css: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            app_name: "Edrak Analytics".to_owned(),
            app_icon: "/static/assets/images/edrak-logo.png".to_owned(),
            app_icon_width: 150,
            logo_target_path: None,
            logo_tooltip: "Edrak Analytics - Business Intelligence Platform".to_owned(),
            logo_right_text: String::new(),
            custom_css: CUSTOM_CSS.to_owned(),
        }
    }
}
