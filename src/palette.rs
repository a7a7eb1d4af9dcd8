//! Palette modes and the 11-stop gradients painted on the track.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants;
use crate::error::SliderError;
use crate::mapping::clamp_unit;

/// Number of color stops in every gradient.
pub const STOP_COUNT: usize = 11;

/// What the track gradient shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaletteMode {
    /// Full hue circle at fixed brightness.
    HueSweep { saturation: f64 },
    /// Black-body colors between two correlated color temperatures.
    TemperatureSweep { min_kelvin: i32, max_kelvin: i32 },
    /// Gray to white, for plain dimmers.
    Dimmable,
    /// Linear blend between two fixed colors.
    Gradient { start: Rgb, end: Rgb },
}

impl Default for PaletteMode {
    fn default() -> Self {
        PaletteMode::HueSweep { saturation: 1.0 }
    }
}

impl PaletteMode {
    /// The same mode with its parameters in their valid domain.
    ///
    /// Hue-sweep saturation is clamped to 0.0–1.0 with NaN mapped to 0.0, so
    /// equal-looking modes also compare equal.
    pub fn normalized(self) -> Self {
        match self {
            PaletteMode::HueSweep { saturation } => PaletteMode::HueSweep {
                saturation: clamp_unit(saturation),
            },
            other => other,
        }
    }

    pub fn kind(&self) -> PaletteKind {
        match self {
            PaletteMode::HueSweep { .. } => PaletteKind::Hue,
            PaletteMode::TemperatureSweep { .. } => PaletteKind::Temperature,
            PaletteMode::Dimmable => PaletteKind::Dimmable,
            PaletteMode::Gradient { .. } => PaletteKind::Gradient,
        }
    }
}

/// Tag naming a palette mode without its parameters.
///
/// The numeric values match the color types hosts have historically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Dimmable = 2,
    Hue = 3,
    Temperature = 4,
    Gradient = 5,
}

impl PaletteKind {
    /// The mode of this kind with default parameters.
    pub fn default_mode(self) -> PaletteMode {
        match self {
            PaletteKind::Dimmable => PaletteMode::Dimmable,
            PaletteKind::Hue => PaletteMode::default(),
            PaletteKind::Temperature => PaletteMode::TemperatureSweep {
                min_kelvin: constants::DEFAULT_MIN_KELVIN,
                max_kelvin: constants::DEFAULT_MAX_KELVIN,
            },
            PaletteKind::Gradient => PaletteMode::Gradient {
                start: Rgb::WHITE,
                end: Rgb::WHITE,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Dimmable => "dimmable",
            PaletteKind::Hue => "hue",
            PaletteKind::Temperature => "temperature",
            PaletteKind::Gradient => "gradient",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for PaletteKind {
    type Error = SliderError;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        match tag {
            2 => Ok(PaletteKind::Dimmable),
            3 => Ok(PaletteKind::Hue),
            4 => Ok(PaletteKind::Temperature),
            5 => Ok(PaletteKind::Gradient),
            other => Err(SliderError::UnsupportedPaletteMode(other.to_string())),
        }
    }
}

impl FromStr for PaletteKind {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dimmable" => Ok(PaletteKind::Dimmable),
            "hue" | "color" => Ok(PaletteKind::Hue),
            "temperature" => Ok(PaletteKind::Temperature),
            "gradient" | "extended_color" => Ok(PaletteKind::Gradient),
            _ => Err(SliderError::UnsupportedPaletteMode(s.to_string())),
        }
    }
}

/// One anchor of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the track, 0.0–1.0.
    pub position: f64,
    pub color: Rgb,
}

/// The stops of a track gradient, ordered by position.
///
/// Always exactly [`STOP_COUNT`] stops, the first at 0.0 and the last at 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStops([ColorStop; STOP_COUNT]);

impl ColorStops {
    /// Build stops at positions `i / 10` with colors from `color_at(i)`.
    fn from_fn(mut color_at: impl FnMut(usize) -> Rgb) -> Self {
        let mut stops = [ColorStop {
            position: 0.0,
            color: Rgb::BLACK,
        }; STOP_COUNT];
        for (i, stop) in stops.iter_mut().enumerate() {
            stop.position = i as f64 / (STOP_COUNT - 1) as f64;
            stop.color = color_at(i);
        }
        ColorStops(stops)
    }

    pub fn as_slice(&self) -> &[ColorStop] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorStop> {
        self.0.iter()
    }

    pub fn first(&self) -> &ColorStop {
        &self.0[0]
    }

    pub fn last(&self) -> &ColorStop {
        &self.0[STOP_COUNT - 1]
    }

    /// Colors only, in stop order.
    pub fn colors(&self) -> [Rgb; STOP_COUNT] {
        self.0.map(|s| s.color)
    }

    /// Same positions with every color passed through `f`.
    pub fn map_colors(&self, mut f: impl FnMut(Rgb) -> Rgb) -> Self {
        ColorStops(self.0.map(|s| ColorStop {
            position: s.position,
            color: f(s.color),
        }))
    }

    /// See [`interpolate`].
    pub fn interpolate(&self, position: f64) -> Rgb {
        interpolate(self, position)
    }
}

/// Generate the gradient stops for `mode`.
///
/// ```
/// use floem_color_slider::{color_stops, PaletteMode};
/// let stops = color_stops(&PaletteMode::HueSweep { saturation: 1.0 });
/// assert_eq!(stops.first().color.to_rgb8(), (255, 0, 0));
/// assert_eq!(stops.last().color.to_rgb8(), (255, 0, 0));
/// ```
pub fn color_stops(mode: &PaletteMode) -> ColorStops {
    let last = (STOP_COUNT - 1) as f64;
    let stops = match *mode {
        PaletteMode::HueSweep { saturation } => {
            ColorStops::from_fn(|i| Rgb::from_hsb(i as f64 / last, saturation, 1.0))
        }
        PaletteMode::TemperatureSweep {
            min_kelvin,
            max_kelvin,
        } => {
            let samples = kelvin_samples(min_kelvin, max_kelvin);
            ColorStops::from_fn(|i| {
                Rgb::from_kelvin(samples[i], constants::TEMPERATURE_SWEEP_OFFSET)
            })
        }
        PaletteMode::Dimmable => {
            let ramp = constants::DIMMABLE_RAMP.map(|(r, g, b)| Rgb::from_rgb8(r, g, b));
            ColorStops::from_fn(|i| sample_ramp(&ramp, i as f64 / last))
        }
        PaletteMode::Gradient { start, end } => {
            ColorStops::from_fn(|i| start.lerp(&end, i as f64 / last))
        }
    };
    log::debug!("generated {} color stops for {:?}", STOP_COUNT, mode);
    stops
}

/// Kelvin samples for a temperature sweep.
///
/// The upper end deliberately runs a tenth of the span past `max_kelvin`.
fn kelvin_samples(min_kelvin: i32, max_kelvin: i32) -> [i32; STOP_COUNT] {
    let min = min_kelvin as i64;
    let max = max_kelvin as i64;
    let to = max + (max - min) / 10;
    let mut samples = [0i32; STOP_COUNT];
    for (i, sample) in samples.iter_mut().enumerate() {
        let k = min + (to - min) * i as i64 / (STOP_COUNT - 1) as i64;
        *sample = k.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    }
    samples
}

/// Evenly spaced multi-color ramp sampled at `t`.
fn sample_ramp(ramp: &[Rgb], t: f64) -> Rgb {
    let segments = ramp.len() - 1;
    let scaled = clamp_unit(t) * segments as f64;
    let i = (scaled.floor() as usize).min(segments - 1);
    ramp[i].lerp(&ramp[i + 1], scaled - i as f64)
}

/// Color at `position` (clamped to 0.0–1.0), blending the two bracketing
/// stops linearly. A position exactly on a stop returns that stop's color.
///
/// ```
/// use floem_color_slider::{color_stops, interpolate, PaletteMode};
/// let stops = color_stops(&PaletteMode::HueSweep { saturation: 1.0 });
/// assert_eq!(interpolate(&stops, 0.5), stops.as_slice()[5].color);
/// assert_eq!(interpolate(&stops, 7.0), stops.last().color);
/// ```
pub fn interpolate(stops: &ColorStops, position: f64) -> Rgb {
    let p = clamp_unit(position);
    let stops = stops.as_slice();
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if p == a.position {
            return a.color;
        }
        if p == b.position {
            return b.color;
        }
        if p < b.position {
            let t = (p - a.position) / (b.position - a.position);
            return a.color.lerp(&b.color, t);
        }
    }
    stops[STOP_COUNT - 1].color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(c: Rgb, (r, g, b): (f64, f64, f64)) -> bool {
        (c.r - r).abs() < 1e-9 && (c.g - g).abs() < 1e-9 && (c.b - b).abs() < 1e-9
    }

    #[test]
    fn hue_sweep_wraps_at_both_ends() {
        let stops = color_stops(&PaletteMode::HueSweep { saturation: 1.0 });
        assert!(approx(stops.first().color, (255.0, 0.0, 0.0)));
        assert!(approx(stops.last().color, (255.0, 0.0, 0.0)));
        assert_eq!(stops.first().position, 0.0);
        assert_eq!(stops.last().position, 1.0);
    }

    #[test]
    fn hue_sweep_midpoint_is_cyan() {
        let stops = color_stops(&PaletteMode::HueSweep { saturation: 1.0 });
        assert_eq!(stops.as_slice()[5].color.to_rgb8(), (0, 255, 255));
    }

    #[test]
    fn hue_sweep_honors_saturation() {
        let stops = color_stops(&PaletteMode::HueSweep { saturation: 0.0 });
        assert!(stops.iter().all(|s| s.color == Rgb::WHITE));
    }

    #[test]
    fn normalized_mode_clamps_saturation() {
        let nan = PaletteMode::HueSweep {
            saturation: f64::NAN,
        };
        assert_eq!(nan.normalized(), PaletteMode::HueSweep { saturation: 0.0 });
        assert_eq!(nan.normalized(), nan.normalized());
        assert_eq!(
            PaletteMode::HueSweep { saturation: 3.0 }.normalized(),
            PaletteMode::default()
        );
        assert_eq!(PaletteMode::Dimmable.normalized(), PaletteMode::Dimmable);
        let stops = color_stops(&nan);
        assert!(stops.iter().all(|s| s.color == Rgb::WHITE));
    }

    #[test]
    fn temperature_sweep_overshoots_max() {
        let samples = kelvin_samples(2000, 7000);
        assert_eq!(samples[0], 2000);
        assert_eq!(samples[10], 7500);
        assert_eq!(samples[5], 4750);
    }

    #[test]
    fn temperature_overshoot_truncates() {
        // (1005 - 1000) / 10 == 0
        assert_eq!(kelvin_samples(1000, 1005)[10], 1005);
        // (1000 - 1019) / 10 == -1, truncated toward zero
        assert_eq!(kelvin_samples(1019, 1000)[10], 999);
    }

    #[test]
    fn temperature_stops_use_offset() {
        let stops = color_stops(&PaletteMode::TemperatureSweep {
            min_kelvin: 1000,
            max_kelvin: 6000,
        });
        assert_eq!(stops.first().color, Rgb::from_kelvin(1500, 0));
        assert_eq!(stops.last().color, Rgb::from_kelvin(7000, 0));
    }

    #[test]
    fn dimmable_runs_gray_to_white() {
        let stops = color_stops(&PaletteMode::Dimmable);
        assert_eq!(stops.first().color.to_rgb8(), (142, 142, 147));
        assert_eq!(stops.as_slice()[5].color.to_rgb8(), (204, 204, 204));
        assert_eq!(stops.last().color, Rgb::WHITE);
    }

    #[test]
    fn gradient_mode_blends_endpoints() {
        let start = Rgb::from_rgb8(0, 0, 0);
        let end = Rgb::from_rgb8(200, 100, 50);
        let stops = color_stops(&PaletteMode::Gradient { start, end });
        assert_eq!(stops.first().color, start);
        assert_eq!(stops.last().color, end);
        assert_eq!(stops.as_slice()[5].color.to_rgb8(), (100, 50, 25));
    }

    #[test]
    fn interpolation_hits_stops_exactly() {
        let stops = color_stops(&PaletteMode::HueSweep { saturation: 0.8 });
        assert_eq!(interpolate(&stops, 0.0), stops.first().color);
        assert_eq!(interpolate(&stops, 1.0), stops.last().color);
        for (i, stop) in stops.iter().enumerate() {
            assert_eq!(interpolate(&stops, i as f64 / 10.0), stop.color);
        }
    }

    #[test]
    fn interpolation_blends_between_stops() {
        let stops = color_stops(&PaletteMode::Gradient {
            start: Rgb::BLACK,
            end: Rgb::WHITE,
        });
        let c = interpolate(&stops, 0.55);
        assert!((c.r - 0.55 * 255.0).abs() < 1e-9, "{c:?}");
    }

    #[test]
    fn interpolation_clamps_position() {
        let stops = color_stops(&PaletteMode::Dimmable);
        assert_eq!(interpolate(&stops, -1.0), stops.first().color);
        assert_eq!(interpolate(&stops, f64::NAN), stops.first().color);
        assert_eq!(interpolate(&stops, 2.0), stops.last().color);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(PaletteKind::try_from(4_i64).unwrap(), PaletteKind::Temperature);
        assert!(matches!(
            PaletteKind::try_from(9_i64),
            Err(SliderError::UnsupportedPaletteMode(_))
        ));
        assert_eq!("Hue".parse::<PaletteKind>().unwrap(), PaletteKind::Hue);
        assert!(matches!(
            "plaid".parse::<PaletteKind>(),
            Err(SliderError::UnsupportedPaletteMode(_))
        ));
    }

    #[test]
    fn mode_serde_is_tagged() {
        let mode: PaletteMode = serde_json::from_str(
            r#"{"mode": "temperature_sweep", "min_kelvin": 2700, "max_kelvin": 6500}"#,
        )
        .unwrap();
        assert_eq!(
            mode,
            PaletteMode::TemperatureSweep {
                min_kelvin: 2700,
                max_kelvin: 6500
            }
        );
        assert_eq!(mode.kind(), PaletteKind::Temperature);
        assert!(serde_json::from_str::<PaletteMode>(r#"{"mode": "plaid"}"#).is_err());
    }
}
