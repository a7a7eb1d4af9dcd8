//! Floem view hosting a [`ColorSlider`].
//!
//! The track is a rounded rect filled with the palette gradient; the knob is
//! a circle filled with the color under it. Value and palette are synced
//! from signals, and pointer/arrow-key input writes the value back.

use floem::kurbo::{Circle, Rect as KurboRect, Shape, Stroke};
use floem::peniko::{Color, Gradient};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    keyboard::{Key, NamedKey},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Rgb;
use crate::config::SliderConfig;
use crate::constants;
use crate::geometry::{Rect, SliderGeometry};
use crate::palette::{ColorStops, PaletteMode};
use crate::render::{paint_slider, Interactive, KeyDirection, Paintable, RenderContext};
use crate::slider::ColorSlider;

fn to_color(c: Rgb, alpha: f64) -> Color {
    Color::rgba(c.r / 255.0, c.g / 255.0, c.b / 255.0, alpha)
}

fn to_kurbo(r: Rect) -> KurboRect {
    KurboRect::new(r.x0, r.y0, r.x1, r.y1)
}

fn inscribed_circle(r: Rect) -> Circle {
    let radius = r.width().min(r.height()) / 2.0;
    Circle::new(r.center(), radius.max(0.0))
}

impl Paintable for PaintCx<'_> {
    fn fill_track(&mut self, rect: Rect, radius: f64, stops: &ColorStops, extent: (f64, f64)) {
        let r = to_kurbo(rect);
        let cy = r.center().y;
        let colors = stops.colors().map(|c| to_color(c, 1.0));
        let gradient = Gradient::new_linear((extent.0, cy), (extent.1, cy)).with_stops(colors);
        // Go through a BezPath so vello takes the general path handler
        // (its Rect fast-path only supports solid colors).
        let path = r.to_rounded_rect(radius).to_path(0.1);
        self.fill(&path, &gradient, 0.0);
    }

    fn fill_rect(&mut self, rect: Rect, radius: f64, color: Rgb, alpha: f64, blur: f64) {
        self.fill(
            &to_kurbo(rect).to_rounded_rect(radius),
            to_color(color, alpha),
            blur,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, radius: f64, color: Rgb, alpha: f64, width: f64) {
        self.stroke(
            &to_kurbo(rect).to_rounded_rect(radius),
            to_color(color, alpha),
            &Stroke::new(width),
        );
    }

    fn fill_knob(&mut self, rect: Rect, color: Rgb, alpha: f64, blur: f64) {
        self.fill(&inscribed_circle(rect), to_color(color, alpha), blur);
    }

    fn stroke_knob(&mut self, rect: Rect, color: Rgb, alpha: f64, width: f64) {
        self.stroke(
            &inscribed_circle(rect),
            to_color(color, alpha),
            &Stroke::new(width),
        );
    }
}

enum SliderUpdate {
    Value(f64),
    Palette(PaletteMode),
}

pub struct ColorSliderView {
    id: ViewId,
    slider: ColorSlider,
    theme: RenderContext,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    on_color: Option<Box<dyn Fn(Rgb)>>,
}

/// Creates a horizontal color slider.
///
/// - `value`: read and written; clamped to `config.range`.
/// - `palette`: read-only, the gradient painted on the track.
/// - `config`: range, snapping, enabled flag and theme. Its `value` and
///   `palette` are ignored in favor of the signals.
pub fn color_slider(
    value: RwSignal<f64>,
    palette: RwSignal<PaletteMode>,
    config: SliderConfig,
) -> ColorSliderView {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(SliderUpdate::Value(v));
    });

    create_effect(move |_| {
        let p = palette.get();
        id.update_state(SliderUpdate::Palette(p));
    });

    let theme = config.theme;
    let slider = ColorSlider::new(SliderConfig {
        value: value.get_untracked(),
        palette: palette.get_untracked(),
        ..config
    });

    ColorSliderView {
        id,
        slider,
        theme,
        size: Default::default(),
        on_change: Some(Box::new(move |v| {
            value.set(v);
        })),
        on_color: None,
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorSliderView {
    /// Call `f` with the knob color whenever the value changes through input.
    pub fn on_color(mut self, f: impl Fn(Rgb) + 'static) -> Self {
        self.on_color = Some(Box::new(f));
        self
    }

    fn geometry(&self) -> SliderGeometry {
        SliderGeometry::new(self.size.width as f64, self.size.height as f64)
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.slider.value());
        }
        if let Some(cb) = &self.on_color {
            cb(self.slider.knob_color(&self.theme));
        }
        self.id.request_layout();
    }
}

impl View for ColorSliderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => {
                    self.slider.set_value(v);
                }
                SliderUpdate::Palette(p) => {
                    self.slider.set_palette(p);
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(
        &mut self,
        cx: &mut EventCx,
        event: &Event,
    ) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.id.request_focus();
                let fraction = self.geometry().pointer_fraction(e.pos.x);
                if self.slider.pointer_down(fraction) {
                    self.notify();
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.slider.is_mouse_down() {
                    let fraction = self.geometry().pointer_fraction(e.pos.x);
                    if self.slider.pointer_drag(fraction) {
                        self.notify();
                    }
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.slider.pointer_up();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.slider.pointer_up();
                EventPropagation::Continue
            }
            Event::KeyDown(ke) => {
                let direction = match ke.key.logical_key {
                    Key::Named(NamedKey::ArrowRight) => KeyDirection::Right,
                    Key::Named(NamedKey::ArrowLeft) => KeyDirection::Left,
                    _ => return EventPropagation::Continue,
                };
                if self.slider.key_step(direction) {
                    self.notify();
                }
                EventPropagation::Stop
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<KurboRect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        paint_slider(&self.slider, &self.geometry(), &self.theme, cx);
    }
}
