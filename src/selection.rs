//! Range variant: a bar that selects a span of the track.
//!
//! The selection is kept as fractions of the track. Clicking moves the start
//! to the pointer and pulls the end along when the pointer passes it.

use crate::color::Rgb;
use crate::constants;
use crate::mapping::{clamp_unit, from_pixel, to_normalized, ValueRange};
use crate::palette::{color_stops, ColorStops, PaletteMode};
use crate::render::{Interactive, KeyDirection, RenderContext};

/// Selected span as fractions of the track, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub start: f64,
    pub end: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }
}

/// Which parts of a selection a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub start: bool,
    pub end: bool,
}

impl SelectionChange {
    pub fn any(&self) -> bool {
        self.start || self.end
    }
}

/// State of the range variant.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    range: ValueRange,
    selection: Selection,
    snap_to_value: bool,
    /// Clicks off the bar reposition it.
    pub allow_clicks_on_bar: bool,
    /// Fill the whole background instead of only up to the start.
    pub fill_up: bool,
    /// Color the bar with the background gradient at its position.
    pub colorize_bar: bool,
    pub bar_color: Rgb,
    enabled: bool,
    dragging: bool,
    palette: PaletteMode,
    stops: ColorStops,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(ValueRange::default(), PaletteMode::default())
    }
}

impl RangeSlider {
    pub fn new(range: ValueRange, palette: PaletteMode) -> Self {
        let palette = palette.normalized();
        Self {
            range,
            selection: Selection::default(),
            snap_to_value: false,
            allow_clicks_on_bar: true,
            fill_up: false,
            colorize_bar: false,
            bar_color: Rgb::from_rgb8(204, 204, 204),
            enabled: true,
            dragging: false,
            palette,
            stops: color_stops(&palette),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn set_snap_to_value(&mut self, snap: bool) {
        self.snap_to_value = snap;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.dragging = false;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn palette(&self) -> &PaletteMode {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: PaletteMode) -> bool {
        let palette = palette.normalized();
        if palette == self.palette {
            return false;
        }
        self.palette = palette;
        self.stops = color_stops(&self.palette);
        true
    }

    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    /// Background stops to paint, dimmed when the slider is disabled.
    pub(crate) fn display_stops(&self, ctx: &RenderContext) -> ColorStops {
        if self.enabled {
            self.stops
        } else {
            self.stops.map_colors(|c| c.desaturated(ctx.disabled_dimming))
        }
    }

    /// Value at the start of the selection.
    pub fn current(&self) -> f64 {
        self.selection.start * self.range.span() + self.range.min()
    }

    /// Move the start to `value`. The end stays put unless the start passes it.
    pub fn set_current(&mut self, value: f64) -> SelectionChange {
        let start = to_normalized(value, self.range);
        self.replace(Selection {
            start,
            end: self.selection.end.max(start),
        })
    }

    /// Pointer press or drag at `fraction` of the track width.
    pub fn update_for_click(&mut self, fraction: f64) -> SelectionChange {
        let x = from_pixel(fraction, self.range, self.snap_to_value);
        self.replace(Selection {
            start: x,
            end: self.selection.end.max(x),
        })
    }

    /// Width of the filled background for a track `width` wide.
    pub fn fill_width(&self, width: f64) -> f64 {
        if self.fill_up {
            width
        } else {
            clamp_unit(self.selection.start) * width
        }
    }

    /// Fill color of the bar.
    pub fn bar_fill(&self, ctx: &RenderContext) -> Rgb {
        let color = if self.colorize_bar {
            self.stops.interpolate(self.selection.start)
        } else {
            self.bar_color
        };
        if self.enabled {
            color
        } else {
            color.desaturated(ctx.disabled_dimming)
        }
    }

    fn replace(&mut self, selection: Selection) -> SelectionChange {
        let change = SelectionChange {
            start: selection.start != self.selection.start,
            end: selection.end != self.selection.end,
        };
        if change.any() {
            log::trace!("selection {:?} -> {:?}", self.selection, selection);
            self.selection = selection;
        }
        change
    }
}

impl Interactive for RangeSlider {
    fn pointer_down(&mut self, fraction: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.dragging = true;
        self.allow_clicks_on_bar && self.update_for_click(fraction).any()
    }

    fn pointer_drag(&mut self, fraction: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.dragging = true;
        self.update_for_click(fraction).any()
    }

    fn pointer_up(&mut self) {
        self.dragging = false;
    }

    fn key_step(&mut self, direction: KeyDirection) -> bool {
        if !self.enabled {
            return false;
        }
        let step = self.range.span() / constants::KEY_STEP_DIVISIONS;
        let target = match direction {
            KeyDirection::Right => (self.current() + step).min(self.range.max()),
            KeyDirection::Left => (self.current() - step).max(self.range.min()),
        };
        self.set_current(target).any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_slider() -> RangeSlider {
        RangeSlider::new(ValueRange::new(0.0, 100.0), PaletteMode::default())
    }

    #[test]
    fn starts_fully_selected() {
        let s = range_slider();
        assert_eq!(s.selection(), Selection { start: 0.0, end: 1.0 });
        assert_eq!(s.current(), 0.0);
    }

    #[test]
    fn click_moves_start_and_pushes_end() {
        let mut s = range_slider();
        s.set_current(20.0);
        let change = s.update_for_click(0.1);
        assert_eq!(change, SelectionChange { start: true, end: false });
        assert_eq!(s.selection(), Selection { start: 0.1, end: 1.0 });

        let mut s = range_slider();
        s.selection = Selection { start: 0.2, end: 0.4 };
        let change = s.update_for_click(0.6);
        assert_eq!(change, SelectionChange { start: true, end: true });
        assert_eq!(s.selection(), Selection { start: 0.6, end: 0.6 });
    }

    #[test]
    fn unchanged_click_reports_nothing() {
        let mut s = range_slider();
        assert!(!s.update_for_click(0.0).any());
        assert!(!s.update_for_click(-3.0).any());
    }

    #[test]
    fn click_snaps_to_whole_values() {
        let mut s = RangeSlider::new(ValueRange::new(0.0, 4.0), PaletteMode::Dimmable);
        s.set_snap_to_value(true);
        s.update_for_click(0.3);
        assert_eq!(s.current(), 1.0);
    }

    #[test]
    fn arrows_step_and_stop_at_bounds() {
        let mut s = range_slider();
        assert!(s.key_step(KeyDirection::Right));
        assert_eq!(s.current(), 5.0);
        assert!(s.key_step(KeyDirection::Left));
        assert_eq!(s.current(), 0.0);
        assert!(!s.key_step(KeyDirection::Left));
    }

    #[test]
    fn clicks_can_be_disabled() {
        let mut s = range_slider();
        s.allow_clicks_on_bar = false;
        assert!(!s.pointer_down(0.5));
        assert!(s.is_dragging());
        assert!(s.pointer_drag(0.5));
        s.pointer_up();
        assert!(!s.is_dragging());
    }

    #[test]
    fn fill_width_follows_start() {
        let mut s = range_slider();
        s.set_current(25.0);
        assert_eq!(s.fill_width(200.0), 50.0);
        s.fill_up = true;
        assert_eq!(s.fill_width(200.0), 200.0);
    }

    #[test]
    fn colorized_bar_takes_gradient_color() {
        let mut s = range_slider();
        let ctx = RenderContext::default();
        assert_eq!(s.bar_fill(&ctx), Rgb::from_rgb8(204, 204, 204));
        s.colorize_bar = true;
        s.set_current(50.0);
        assert_eq!(s.bar_fill(&ctx).to_rgb8(), (0, 255, 255));
    }

    #[test]
    fn degenerate_range_current_is_min() {
        let mut s = RangeSlider::new(ValueRange::new(3.0, 3.0), PaletteMode::default());
        s.set_current(10.0);
        assert_eq!(s.current(), 3.0);
    }
}
