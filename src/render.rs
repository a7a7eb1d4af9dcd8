//! Seams between the slider core and a host toolkit.
//!
//! A host implements [`Paintable`] over its drawing context and forwards
//! pointer and key input through [`Interactive`]. [`paint_slider`] and
//! [`paint_range_slider`] issue the draw calls for one frame in back-to-front
//! order.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants;
use crate::geometry::{KnobStyle, RangeGeometry, Rect, SliderGeometry};
use crate::palette::{color_stops, ColorStops, PaletteMode};
use crate::selection::RangeSlider;
use crate::slider::ColorSlider;

/// Theme colors injected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    /// Frame stroked around the gradient track.
    pub frame_color: Rgb,
    /// Soft shadow under the knob.
    pub shadow_color: Rgb,
    pub shadow_alpha: f64,
    /// Vertical shadow offset in view coordinates (positive is down).
    pub shadow_offset: f64,
    /// Knob outline.
    pub outline_color: Rgb,
    pub outline_alpha: f64,
    /// Saturation ratio for a disabled slider.
    pub disabled_dimming: f64,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            frame_color: Rgb::from_rgb8(142, 142, 147),
            shadow_color: Rgb::BLACK,
            shadow_alpha: 0.35,
            shadow_offset: -0.5,
            outline_color: Rgb::from_rgb8(77, 77, 77),
            outline_alpha: 0.3,
            disabled_dimming: constants::DISABLED_DIMMING_RATIO,
        }
    }
}

/// Frame and bar styling of the range variant.
///
/// Background colors come from the slider's palette; bar fill comes from
/// [`RangeSlider::bar_fill`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeTheme {
    pub frame_gradient_start: Rgb,
    pub frame_gradient_end: Rgb,
    /// Paint the frame with the full hue circle instead of start/end.
    pub frame_rainbow: bool,
    pub frame_radius: f64,
    pub background_radius: f64,
    /// Corner radius of a square bar.
    pub bar_radius: f64,
    pub bar_stroke_color: Rgb,
    pub bar_stroke_alpha: f64,
    /// Dark drop shadow under the bar. Takes precedence over `bar_glow`.
    pub bar_shadow: bool,
    /// Halo in the bar's own color.
    pub bar_glow: bool,
    /// Bar outline while it is being dragged.
    pub selected_stroke_color: Rgb,
    pub selected_stroke_alpha: f64,
}

impl Default for RangeTheme {
    fn default() -> Self {
        Self {
            frame_gradient_start: Rgb::WHITE,
            frame_gradient_end: Rgb::WHITE,
            frame_rainbow: false,
            frame_radius: 0.0,
            background_radius: 0.0,
            bar_radius: 0.0,
            bar_stroke_color: Rgb::WHITE,
            bar_stroke_alpha: 0.0,
            bar_shadow: true,
            bar_glow: false,
            selected_stroke_color: Rgb::WHITE,
            selected_stroke_alpha: 0.7,
        }
    }
}

impl RangeTheme {
    /// Gradient filling the frame.
    pub fn frame_stops(&self) -> ColorStops {
        if self.frame_rainbow {
            color_stops(&PaletteMode::HueSweep { saturation: 1.0 })
        } else {
            color_stops(&PaletteMode::Gradient {
                start: self.frame_gradient_start,
                end: self.frame_gradient_end,
            })
        }
    }

    /// Color and opacity of the bar shadow, if any.
    pub fn bar_shadow_color(&self, bar_fill: Rgb) -> Option<(Rgb, f64)> {
        if self.bar_shadow {
            Some((Rgb::BLACK, constants::BAR_SHADOW_ALPHA))
        } else if self.bar_glow {
            Some((bar_fill, 1.0))
        } else {
            None
        }
    }
}

/// Drawing primitives a host must provide.
///
/// Every shape is either a rounded rect given by its bounds and corner radius
/// or the circle inscribed in a rect.
pub trait Paintable {
    /// Fill a rounded rect with a left-to-right gradient through `stops`.
    ///
    /// The gradient runs from `x = extent.0` to `x = extent.1` and is clipped
    /// to `rect`.
    fn fill_track(&mut self, rect: Rect, radius: f64, stops: &ColorStops, extent: (f64, f64));

    /// Fill a rounded rect with a solid color; `blur` > 0 draws a soft shadow.
    fn fill_rect(&mut self, rect: Rect, radius: f64, color: Rgb, alpha: f64, blur: f64);

    fn stroke_rect(&mut self, rect: Rect, radius: f64, color: Rgb, alpha: f64, width: f64);

    /// Fill the circle inscribed in `rect`; `blur` > 0 draws a soft shadow.
    fn fill_knob(&mut self, rect: Rect, color: Rgb, alpha: f64, blur: f64);

    fn stroke_knob(&mut self, rect: Rect, color: Rgb, alpha: f64, width: f64);
}

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Left,
    Right,
}

/// Input a host forwards to a slider.
///
/// Pointer positions are fractions of the usable track width (see
/// [`SliderGeometry::pointer_fraction`]). Every method reports whether the
/// value changed.
pub trait Interactive {
    fn pointer_down(&mut self, fraction: f64) -> bool;
    fn pointer_drag(&mut self, fraction: f64) -> bool;
    fn pointer_up(&mut self);
    fn key_step(&mut self, direction: KeyDirection) -> bool;
}

/// Paint one frame of `slider` into `painter`.
///
/// The gradient fills the thin lined track and the frame is stroked on top
/// of it, then the knob shadow, fill and outline follow.
pub fn paint_slider(
    slider: &ColorSlider,
    geometry: &SliderGeometry,
    ctx: &RenderContext,
    painter: &mut impl Paintable,
) {
    if geometry.width <= 0.0 || geometry.height <= 0.0 {
        return;
    }

    let track = geometry.lined_track_rect();
    let radius = SliderGeometry::track_radius(&track);
    let stops = slider.display_stops(ctx);
    painter.fill_track(track, radius, &stops, (track.x0, track.x1));
    painter.stroke_rect(
        track,
        radius,
        ctx.frame_color,
        1.0,
        constants::FRAME_STROKE_WIDTH,
    );

    let knob = geometry.knob_rect(slider.normalized());
    painter.fill_knob(
        knob.translate(0.0, ctx.shadow_offset),
        ctx.shadow_color,
        ctx.shadow_alpha,
        constants::KNOB_SHADOW_BLUR,
    );
    painter.fill_knob(knob, slider.knob_color(ctx), 1.0, 0.0);
    painter.stroke_knob(
        knob,
        ctx.outline_color,
        ctx.outline_alpha,
        constants::KNOB_STROKE_WIDTH,
    );
}

/// Paint one frame of the range variant: frame, background strip, bar.
pub fn paint_range_slider(
    slider: &RangeSlider,
    geometry: &RangeGeometry,
    theme: &RangeTheme,
    ctx: &RenderContext,
    painter: &mut impl Paintable,
) {
    if geometry.width <= 0.0 || geometry.height <= 0.0 {
        return;
    }
    let dim = |c: Rgb| {
        if slider.is_enabled() {
            c
        } else {
            c.desaturated(ctx.disabled_dimming)
        }
    };
    let dragging = slider.is_dragging();

    let frame = geometry.frame_rect();
    painter.fill_track(
        frame,
        theme.frame_radius,
        &theme.frame_stops(),
        (0.0, geometry.width),
    );

    let background = geometry.background_rect(slider.fill_width(geometry.width), dragging);
    if background.width() > 0.0 {
        painter.fill_track(
            background,
            theme.background_radius,
            &slider.display_stops(ctx),
            (0.0, geometry.width),
        );
    }

    let bar = geometry.bar_rect(slider.selection().start, dragging);
    let fill = slider.bar_fill(ctx);
    let (stroke, stroke_alpha) = if dragging {
        (theme.selected_stroke_color, theme.selected_stroke_alpha)
    } else {
        (theme.bar_stroke_color, theme.bar_stroke_alpha)
    };
    let shadow = theme.bar_shadow_color(fill);
    let shadow_rect = bar.translate(0.0, constants::BAR_SHADOW_OFFSET);

    match geometry.knob_style {
        KnobStyle::Square => {
            if let Some((color, alpha)) = shadow {
                painter.fill_rect(
                    shadow_rect,
                    theme.bar_radius,
                    color,
                    alpha,
                    constants::BAR_SHADOW_BLUR,
                );
            }
            painter.fill_rect(bar, theme.bar_radius, fill, 1.0, 0.0);
            painter.stroke_rect(
                bar,
                theme.bar_radius,
                dim(stroke),
                stroke_alpha,
                constants::BAR_STROKE_WIDTH,
            );
        }
        KnobStyle::Circular => {
            if let Some((color, alpha)) = shadow {
                painter.fill_knob(shadow_rect, color, alpha, constants::BAR_SHADOW_BLUR);
            }
            painter.fill_knob(bar, fill, 1.0, 0.0);
            painter.stroke_knob(bar, dim(stroke), stroke_alpha, constants::BAR_STROKE_WIDTH);
        }
    }
}
