//! Slider configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mapping::ValueRange;
use crate::palette::PaletteMode;
use crate::render::RenderContext;

/// Initial state and theme of a slider.
///
/// Missing fields take the defaults of a stock slider: range `0..1`, value
/// `0`, no snapping, enabled, full-saturation hue sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub range: ValueRange,
    pub value: f64,
    pub snap_to_value: bool,
    pub enabled: bool,
    pub palette: PaletteMode,
    pub theme: RenderContext,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            range: ValueRange::default(),
            value: 0.0,
            snap_to_value: false,
            enabled: true,
            palette: PaletteMode::default(),
            theme: RenderContext::default(),
        }
    }
}

impl SliderConfig {
    /// Parse a JSON document.
    ///
    /// ```
    /// use floem_color_slider::{PaletteMode, SliderConfig};
    /// let config = SliderConfig::from_json(
    ///     r#"{"range": {"min": 0, "max": 100}, "value": 40,
    ///         "palette": {"mode": "hue_sweep", "saturation": 0.5}}"#,
    /// ).unwrap();
    /// assert_eq!(config.palette, PaletteMode::HueSweep { saturation: 0.5 });
    /// assert!(config.enabled);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SliderConfig = serde_json::from_str(json)?;
        log::debug!("loaded slider config {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::error::SliderError;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SliderConfig::from_json("{}").unwrap(), SliderConfig::default());
    }

    #[test]
    fn theme_colors_are_hex() {
        let config = SliderConfig::from_json(
            r##"{"theme": {"frame_color": "#336699"}, "palette": {"mode": "dimmable"}}"##,
        )
        .unwrap();
        assert_eq!(config.theme.frame_color, Rgb::from_rgb8(0x33, 0x66, 0x99));
        assert_eq!(config.theme.shadow_alpha, RenderContext::default().shadow_alpha);
        assert_eq!(config.palette, PaletteMode::Dimmable);
    }

    #[test]
    fn malformed_documents_are_config_errors() {
        assert!(matches!(
            SliderConfig::from_json(r#"{"palette": {"mode": "plaid"}}"#),
            Err(SliderError::Config(_))
        ));
        assert!(matches!(
            SliderConfig::from_json(r#"{"theme": {"frame_color": "nope"}}"#),
            Err(SliderError::Config(_))
        ));
    }

    #[test]
    fn json_round_trip() {
        let config = SliderConfig {
            range: ValueRange::new(1000.0, 6500.0),
            value: 2700.0,
            snap_to_value: true,
            palette: PaletteMode::Gradient {
                start: Rgb::from_rgb8(255, 0, 0),
                end: Rgb::from_rgb8(0, 0, 255),
            },
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(SliderConfig::from_json(&json).unwrap(), config);
    }
}
