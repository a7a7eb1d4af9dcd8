//! Widget state of a single-knob color slider.

use crate::color::Rgb;
use crate::config::SliderConfig;
use crate::constants;
use crate::mapping::{from_pixel, to_normalized, ValueRange};
use crate::palette::{color_stops, ColorStops, PaletteMode};
use crate::render::{Interactive, KeyDirection, RenderContext};

/// State of a color slider: value, range, palette and interaction flags.
///
/// The gradient stops are regenerated whenever the palette or one of its
/// parameters changes, so reads never see stale colors.
#[derive(Debug, Clone)]
pub struct ColorSlider {
    range: ValueRange,
    value: f64,
    snap_to_value: bool,
    enabled: bool,
    palette: PaletteMode,
    stops: ColorStops,
    mouse_down: bool,
    dragging: bool,
}

impl Default for ColorSlider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl ColorSlider {
    pub fn new(config: SliderConfig) -> Self {
        let range = config.range;
        let palette = config.palette.normalized();
        Self {
            range,
            value: range.clamp(config.value),
            snap_to_value: config.snap_to_value,
            enabled: config.enabled,
            palette,
            stops: color_stops(&palette),
            mouse_down: false,
            dragging: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped to the range. Returns whether it changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let value = self.range.clamp(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Knob position along the track, 0.0–1.0.
    pub fn normalized(&self) -> f64 {
        to_normalized(self.value, self.range)
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Replace the range and re-clamp the current value into it.
    pub fn set_range(&mut self, range: ValueRange) {
        self.range = range;
        self.value = range.clamp(self.value);
    }

    pub fn snap_to_value(&self) -> bool {
        self.snap_to_value
    }

    pub fn set_snap_to_value(&mut self, snap: bool) {
        self.snap_to_value = snap;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling also ends any drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.mouse_down = false;
            self.dragging = false;
        }
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn palette(&self) -> &PaletteMode {
        &self.palette
    }

    /// Switch palette. Stops are regenerated only when the mode differs.
    pub fn set_palette(&mut self, palette: PaletteMode) -> bool {
        let palette = palette.normalized();
        if palette == self.palette {
            return false;
        }
        log::debug!("palette changed from {:?} to {:?}", self.palette, palette);
        self.palette = palette;
        self.stops = color_stops(&self.palette);
        true
    }

    /// Change the saturation of a hue sweep; other modes are left alone.
    pub fn set_saturation(&mut self, saturation: f64) -> bool {
        match self.palette {
            PaletteMode::HueSweep { .. } => {
                self.set_palette(PaletteMode::HueSweep { saturation })
            }
            _ => false,
        }
    }

    /// Change the bounds of a temperature sweep; other modes are left alone.
    pub fn set_kelvin_bounds(&mut self, min_kelvin: i32, max_kelvin: i32) -> bool {
        match self.palette {
            PaletteMode::TemperatureSweep { .. } => {
                self.set_palette(PaletteMode::TemperatureSweep {
                    min_kelvin,
                    max_kelvin,
                })
            }
            _ => false,
        }
    }

    /// Current gradient stops.
    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    /// Color of the track under the knob.
    pub fn selected_color(&self) -> Rgb {
        self.stops.interpolate(self.normalized())
    }

    /// Knob fill color, dimmed when the slider is disabled.
    pub fn knob_color(&self, ctx: &RenderContext) -> Rgb {
        let color = self.selected_color();
        if self.enabled {
            color
        } else {
            color.desaturated(ctx.disabled_dimming)
        }
    }

    /// Stops to paint, dimmed when the slider is disabled.
    pub(crate) fn display_stops(&self, ctx: &RenderContext) -> ColorStops {
        if self.enabled {
            self.stops
        } else {
            self.stops.map_colors(|c| c.desaturated(ctx.disabled_dimming))
        }
    }

    fn move_to_fraction(&mut self, fraction: f64) -> bool {
        let normalized = from_pixel(fraction, self.range, self.snap_to_value);
        self.set_value(self.range.value_at(normalized))
    }
}

impl Interactive for ColorSlider {
    fn pointer_down(&mut self, fraction: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.mouse_down = true;
        log::trace!("pointer down at {fraction}");
        self.move_to_fraction(fraction)
    }

    fn pointer_drag(&mut self, fraction: f64) -> bool {
        if !self.enabled || !self.mouse_down {
            return false;
        }
        self.dragging = true;
        self.move_to_fraction(fraction)
    }

    fn pointer_up(&mut self) {
        self.mouse_down = false;
        self.dragging = false;
    }

    fn key_step(&mut self, direction: KeyDirection) -> bool {
        if !self.enabled {
            return false;
        }
        let step = self.range.span() / constants::KEY_STEP_DIVISIONS;
        log::trace!("key step {direction:?} by {step}");
        match direction {
            KeyDirection::Right => self.set_value(self.value + step),
            KeyDirection::Left => self.set_value(self.value - step),
        }
    }
}
