//! Track and knob geometry, recomputed from the view bounds on demand.
//!
//! All coordinates are relative to the slider's own bounds, origin at the
//! top-left corner.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::mapping::clamp_unit;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 - dx, self.y1 - dy)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Snap to whole pixels and shift by half a pixel so 1px strokes stay sharp.
    pub fn crisp(&self) -> Self {
        Self::from_origin_size(
            self.x0.floor() + 0.5,
            self.y0.floor() + 0.5,
            self.width().floor(),
            self.height().floor(),
        )
    }
}

/// Bounds of a single-knob slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub width: f64,
    pub height: f64,
}

impl SliderGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The span the knob center travels: bounds inset by half the height.
    pub fn inner_rect(&self) -> Rect {
        self.bounds().inset(self.height / 2.0, 0.0)
    }

    /// Horizontal knob center for a normalized position.
    ///
    /// A track too short for the knob pins it at the left end.
    pub fn knob_center_x(&self, normalized: f64) -> f64 {
        let inner = self.inner_rect();
        if inner.width() <= 0.0 {
            return inner.x0;
        }
        inner.x0 + clamp_unit(normalized) * inner.width()
    }

    /// Square around the knob circle, already inset.
    pub fn knob_rect(&self, normalized: f64) -> Rect {
        let x = self.knob_center_x(normalized);
        Rect::from_origin_size(x - self.height * 0.5, 0.0, self.height, self.height)
            .inset(constants::KNOB_INSET, constants::KNOB_INSET)
    }

    /// Thin track holding the gradient, inset by the bezel margin.
    pub fn lined_track_rect(&self) -> Rect {
        let margin = constants::LINED_BEZEL_MARGIN;
        self.bounds().inset(margin / 2.0, margin)
    }

    /// Corner radius giving a track of `rect` fully rounded ends.
    pub fn track_radius(rect: &Rect) -> f64 {
        (rect.height() * 0.5).max(0.0)
    }

    /// Fraction of the usable track under a pointer at `x`.
    pub fn pointer_fraction(&self, x: f64) -> f64 {
        let inner = self.inner_rect();
        if inner.width() <= 0.0 {
            return 0.0;
        }
        clamp_unit((x - inner.x0) / inner.width())
    }
}

/// Shape of the range variant's bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnobStyle {
    #[default]
    Square,
    Circular,
}

/// Bounds and styling of the range variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeGeometry {
    pub width: f64,
    pub height: f64,
    pub knob_style: KnobStyle,
    pub bar_width: f64,
}

impl RangeGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            knob_style: KnobStyle::Square,
            bar_width: constants::BAR_WIDTH,
        }
    }

    pub fn with_knob_style(mut self, knob_style: KnobStyle) -> Self {
        self.knob_style = knob_style;
        self
    }

    fn slider_width(&self) -> f64 {
        match self.knob_style {
            KnobStyle::Square => self.bar_width,
            KnobStyle::Circular => self.height - constants::VERTICAL_SHADOW_PADDING,
        }
    }

    fn slider_height(&self, dragging: bool) -> f64 {
        if dragging {
            self.height - constants::VERTICAL_SHADOW_PADDING
        } else {
            self.slider_width()
        }
    }

    /// Outer frame.
    pub fn frame_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height).crisp()
    }

    /// Bar (knob) of the range variant at fractional position `start`.
    pub fn bar_rect(&self, start: f64, dragging: bool) -> Rect {
        let slider_width = self.slider_width();
        let slider_height = self.slider_height(dragging);
        let max_x = self.width - slider_width - constants::BAR_TRAILING_MARGIN;
        let x = (clamp_unit(start) * self.width - slider_width / 2.0)
            .max(0.0)
            .min(max_x);
        Rect::from_origin_size(
            x,
            (self.height - slider_height) / 2.0,
            slider_width,
            slider_height,
        )
        .crisp()
    }

    /// Filled background strip; `fill_width` comes from the selection.
    pub fn background_rect(&self, fill_width: f64, dragging: bool) -> Rect {
        let height = if dragging {
            self.height - constants::VERTICAL_SHADOW_PADDING
        } else {
            constants::IDLE_BACKGROUND_HEIGHT
        };
        Rect::from_origin_size(0.0, (self.height - height) / 2.0, fill_width, height).crisp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_travels_inner_track() {
        let g = SliderGeometry::new(200.0, 20.0);
        assert_eq!(g.knob_center_x(0.0), 10.0);
        assert_eq!(g.knob_center_x(1.0), 190.0);
        assert_eq!(g.knob_center_x(0.5), 100.0);
        assert_eq!(g.knob_center_x(4.0), 190.0);
    }

    #[test]
    fn knob_rect_is_inset_square() {
        let g = SliderGeometry::new(200.0, 20.0);
        assert_eq!(g.knob_rect(0.0), Rect::new(2.0, 2.0, 18.0, 18.0));
    }

    #[test]
    fn pointer_maps_to_fraction() {
        let g = SliderGeometry::new(120.0, 20.0);
        assert_eq!(g.pointer_fraction(10.0), 0.0);
        assert_eq!(g.pointer_fraction(60.0), 0.5);
        assert_eq!(g.pointer_fraction(500.0), 1.0);
        assert_eq!(g.pointer_fraction(-3.0), 0.0);
    }

    #[test]
    fn zero_width_track_pins_left() {
        let g = SliderGeometry::new(10.0, 20.0);
        assert_eq!(g.pointer_fraction(7.0), 0.0);
        assert_eq!(g.knob_center_x(0.8), g.inner_rect().x0);
    }

    #[test]
    fn lined_track_uses_bezel_margin() {
        let g = SliderGeometry::new(100.0, 24.0);
        assert_eq!(g.lined_track_rect(), Rect::new(4.0, 8.0, 96.0, 16.0));
        assert_eq!(SliderGeometry::track_radius(&g.lined_track_rect()), 4.0);
    }

    #[test]
    fn translate_moves_both_corners() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).translate(0.5, -0.5);
        assert_eq!(r, Rect::new(1.5, 1.5, 3.5, 3.5));
    }

    #[test]
    fn crisp_floors_and_offsets() {
        let r = Rect::from_origin_size(1.7, 2.2, 10.9, 3.5).crisp();
        assert_eq!(r, Rect::from_origin_size(1.5, 2.5, 10.0, 3.0));
    }

    #[test]
    fn bar_is_clamped_to_bounds() {
        let g = RangeGeometry::new(100.0, 20.0);
        assert_eq!(g.bar_rect(0.0, false).x0, 0.5);
        // max x = 100 - 8 - 1 = 91
        assert_eq!(g.bar_rect(1.0, false).x0, 91.5);
        assert_eq!(g.bar_rect(0.5, false).x0, 46.5);
    }

    #[test]
    fn dragging_grows_bar_and_background() {
        let g = RangeGeometry::new(100.0, 20.0).with_knob_style(KnobStyle::Circular);
        assert_eq!(g.bar_rect(0.5, true).height(), 17.0);
        assert_eq!(g.bar_rect(0.5, false).width(), 17.0);
        assert_eq!(g.background_rect(40.0, false).height(), 3.0);
        assert_eq!(g.background_rect(40.0, true).height(), 17.0);
    }
}
