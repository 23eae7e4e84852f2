//! Background configuration

use serde::{Deserialize, Serialize};

use crate::error::BackdropError;

/// Tunables for the background, passed from the page as JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VortexConfig {
    /// Id of the canvas element used (or created) as drawing surface
    pub canvas_id: String,
    /// Attribute on `document.body` holding the current theme
    pub theme_attribute: String,
    /// Key the theme preference is persisted under
    pub theme_storage_key: String,
    /// Fraction of the remaining distance the pointer covers per frame
    pub pointer_smoothing: f64,
    /// Upper bound on the device pixel ratio used for the surface
    pub max_pixel_ratio: f64,
    /// CSS width below which the cheaper shader variant is built
    pub mobile_breakpoint: f64,
    /// Shader iterations at or above the breakpoint
    pub desktop_iterations: u32,
    /// Shader iterations below the breakpoint
    pub mobile_iterations: u32,
    /// Canvas opacity in the tactical (dark) theme
    pub dark_opacity: f32,
    /// Canvas opacity in the light theme
    pub light_opacity: f32,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            canvas_id: "neural-vortex".to_string(),
            theme_attribute: "data-theme".to_string(),
            theme_storage_key: "theme".to_string(),
            pointer_smoothing: 0.2,
            max_pixel_ratio: 1.5,
            mobile_breakpoint: 768.0,
            desktop_iterations: 15,
            mobile_iterations: 10,
            dark_opacity: 0.55,
            light_opacity: 0.45,
        }
    }
}

impl VortexConfig {
    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults; a blank string yields the
    /// default configuration.
    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: VortexConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Clamp values into ranges the renderer can use
    pub fn validated(mut self) -> Self {
        if self.pointer_smoothing > 1.0 {
            self.pointer_smoothing = 1.0;
        } else if self.pointer_smoothing.is_nan() || self.pointer_smoothing <= 0.0 {
            self.pointer_smoothing = 0.2;
        }
        if self.max_pixel_ratio.is_nan() || self.max_pixel_ratio < 1.0 {
            self.max_pixel_ratio = 1.0;
        }
        self.desktop_iterations = self.desktop_iterations.max(1);
        self.mobile_iterations = self.mobile_iterations.max(1);
        self
    }

    /// Shader iteration count for a viewport of the given CSS width
    pub fn iterations_for_width(&self, css_width: f64) -> u32 {
        if css_width < self.mobile_breakpoint {
            self.mobile_iterations
        } else {
            self.desktop_iterations
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VortexConfig::default();
        assert_eq!(config.canvas_id, "neural-vortex");
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.theme_storage_key, "theme");
        assert!((config.pointer_smoothing - 0.2).abs() < f64::EPSILON);
        assert!((config.max_pixel_ratio - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_blank_is_default() {
        assert_eq!(VortexConfig::from_json("").unwrap(), VortexConfig::default());
        assert_eq!(VortexConfig::from_json("   ").unwrap(), VortexConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = VortexConfig::from_json(r#"{"canvasId":"bg","maxPixelRatio":2.0}"#).unwrap();
        assert_eq!(config.canvas_id, "bg");
        assert!((config.max_pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.desktop_iterations, 15);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = VortexConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, BackdropError::Config(_)));
    }

    #[test]
    fn test_validated_clamps() {
        let config = VortexConfig {
            pointer_smoothing: 0.0,
            max_pixel_ratio: 0.5,
            desktop_iterations: 0,
            mobile_iterations: 0,
            ..Default::default()
        }
        .validated();
        assert!((config.pointer_smoothing - 0.2).abs() < f64::EPSILON);
        assert!((config.max_pixel_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.desktop_iterations, 1);
        assert_eq!(config.mobile_iterations, 1);

        let config = VortexConfig { pointer_smoothing: 3.0, ..Default::default() }.validated();
        assert!((config.pointer_smoothing - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_iterations_for_width() {
        let config = VortexConfig::default();
        assert_eq!(config.iterations_for_width(375.0), 10);
        assert_eq!(config.iterations_for_width(767.9), 10);
        assert_eq!(config.iterations_for_width(768.0), 15);
        assert_eq!(config.iterations_for_width(1920.0), 15);
    }
}
