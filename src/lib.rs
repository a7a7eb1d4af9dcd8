//! # floem-color-slider
//!
//! A horizontal slider whose track shows a color or color-temperature
//! gradient and whose knob is filled with the color under it.
//!
//! The core is toolkit-independent: [`to_normalized`] and [`from_pixel`] map
//! between values and track positions, [`color_stops`] builds the 11-stop
//! gradient of a [`PaletteMode`], and [`interpolate`] picks the color at a
//! position. [`ColorSlider`] bundles these into widget state, and
//! [`RangeSlider`] is the bar-style range variant. Hosts draw through the
//! [`Paintable`] trait and forward input through [`Interactive`].
//!
//! With the `view` feature (on by default) a ready-made Floem view is
//! provided.
//!
//! ## Usage
//!
//! ```rust
//! use floem_color_slider::{ColorSlider, PaletteMode, RenderContext, SliderConfig, ValueRange};
//!
//! let slider = ColorSlider::new(SliderConfig {
//!     range: ValueRange::new(0.0, 100.0),
//!     value: 50.0,
//!     palette: PaletteMode::HueSweep { saturation: 1.0 },
//!     ..Default::default()
//! });
//! assert_eq!(slider.normalized(), 0.5);
//! assert_eq!(slider.knob_color(&RenderContext::default()).to_rgb8(), (0, 255, 255));
//! ```

mod color;
mod config;
mod constants;
mod error;
mod geometry;
mod mapping;
mod math;
mod palette;
mod render;
mod selection;
mod slider;
#[cfg(feature = "view")]
mod view;

pub use color::Rgb;
pub use config::SliderConfig;
pub use error::{Result, SliderError};
pub use geometry::{KnobStyle, RangeGeometry, Rect, SliderGeometry};
pub use mapping::{from_pixel, to_normalized, ValueRange};
pub use palette::{
    color_stops, interpolate, ColorStop, ColorStops, PaletteKind, PaletteMode, STOP_COUNT,
};
pub use render::{
    paint_range_slider, paint_slider, Interactive, KeyDirection, Paintable, RangeTheme,
    RenderContext,
};
pub use selection::{RangeSlider, Selection, SelectionChange};
pub use slider::ColorSlider;
#[cfg(feature = "view")]
pub use view::{color_slider, ColorSliderView};

/// Black-body color of `kelvin + offset` Kelvin.
///
/// Channels are truncated whole numbers in 0–255.
///
/// ```
/// use floem_color_slider::kelvin_to_rgb;
/// assert_eq!(kelvin_to_rgb(6600, 0).to_rgb8(), (255, 255, 255));
/// ```
pub fn kelvin_to_rgb(kelvin: i32, offset: i32) -> Rgb {
    Rgb::from_kelvin(kelvin, offset)
}
