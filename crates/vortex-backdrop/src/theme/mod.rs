//! Light / tactical theme

mod preference;

pub use preference::{MemoryStore, PreferenceStore, ThemePreference};

use serde::{Deserialize, Serialize};

use crate::config::VortexConfig;

/// Page theme as exposed on the body's theme attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark default
    #[default]
    Tactical,
    /// Light mode
    Light,
}

impl Theme {
    /// Interpret a theme attribute value.
    ///
    /// Only `"light"` selects the light theme; absent or unknown values are
    /// the dark default.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Tactical,
        }
    }

    /// Attribute / storage value for this theme
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Tactical => "tactical",
            Theme::Light => "light",
        }
    }

    /// Shader blend factor: 0.0 dark, 1.0 light
    pub fn blend(&self) -> f32 {
        match self {
            Theme::Tactical => 0.0,
            Theme::Light => 1.0,
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Tactical => Theme::Light,
            Theme::Light => Theme::Tactical,
        }
    }

    /// CSS opacity of the background canvas under this theme
    pub fn canvas_opacity(&self, config: &VortexConfig) -> f32 {
        match self {
            Theme::Tactical => config.dark_opacity,
            Theme::Light => config.light_opacity,
        }
    }

    /// Console tag logged when the toggle switches into this theme
    pub fn coupling_label(&self) -> &'static str {
        match self {
            Theme::Tactical => "ARMED",
            Theme::Light => "VENT_MODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attribute() {
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("tactical")), Theme::Tactical);
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Tactical);
        assert_eq!(Theme::from_attribute(Some("LIGHT")), Theme::Tactical);
        assert_eq!(Theme::from_attribute(None), Theme::Tactical);
    }

    #[test]
    fn test_blend_is_exact() {
        assert_eq!(Theme::Tactical.blend(), 0.0);
        assert_eq!(Theme::Light.blend(), 1.0);
    }

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(Theme::Tactical.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_canvas_opacity() {
        let config = VortexConfig::default();
        assert!((Theme::Tactical.canvas_opacity(&config) - 0.55).abs() < f32::EPSILON);
        assert!((Theme::Light.canvas_opacity(&config) - 0.45).abs() < f32::EPSILON);
    }

    #[test]
    fn test_serde_ids_match_attribute() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Tactical).unwrap(), "\"tactical\"");
        for theme in [Theme::Light, Theme::Tactical] {
            assert_eq!(Theme::from_attribute(Some(theme.id())), theme);
        }
    }
}
