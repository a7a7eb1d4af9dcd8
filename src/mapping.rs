//! Value ↔ position mapping.
//!
//! A slider value lives in a [`ValueRange`]; everything drawn on screen works
//! with the normalized position in 0.0–1.0. These functions never fail: bad
//! input is clamped or falls back to the lower boundary.

use serde::{Deserialize, Serialize};

/// Numeric range of a slider. `max >= min` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRange", into = "RawRange")]
pub struct ValueRange {
    min: f64,
    max: f64,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
}

impl From<RawRange> for ValueRange {
    fn from(raw: RawRange) -> Self {
        ValueRange::new(raw.min, raw.max)
    }
}

impl From<ValueRange> for RawRange {
    fn from(range: ValueRange) -> Self {
        RawRange {
            min: range.min,
            max: range.max,
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueRange {
    /// Create a range. Reversed bounds are swapped; NaN bounds become 0.0.
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_nan() { 0.0 } else { min };
        let max = if max.is_nan() { 0.0 } else { max };
        if max < min {
            log::warn!("reversed slider range {min}..{max}, swapping bounds");
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`; zero for a degenerate range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Value at normalized position `t` (clamped to 0.0–1.0).
    pub fn value_at(&self, t: f64) -> f64 {
        self.min + clamp_unit(t) * self.span()
    }
}

/// Clamp to 0.0–1.0, mapping NaN to 0.0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Normalized position of `value` within `range`.
///
/// A degenerate range returns `0.0`, the left end of the track.
///
/// ```
/// use floem_color_slider::{to_normalized, ValueRange};
/// let range = ValueRange::new(0.0, 100.0);
/// assert_eq!(to_normalized(50.0, range), 0.5);
/// assert_eq!(to_normalized(250.0, range), 1.0);
/// assert_eq!(to_normalized(7.0, ValueRange::new(3.0, 3.0)), 0.0);
/// ```
pub fn to_normalized(value: f64, range: ValueRange) -> f64 {
    if range.is_degenerate() {
        return 0.0;
    }
    clamp_unit((value - range.min) / range.span())
}

/// Normalized position for a pointer at `offset_fraction` of the usable
/// track width, optionally snapped to whole-number steps of `range`.
///
/// Snapping is skipped for a degenerate range.
///
/// ```
/// use floem_color_slider::{from_pixel, ValueRange};
/// let range = ValueRange::new(0.0, 4.0);
/// assert_eq!(from_pixel(0.3, range, false), 0.3);
/// assert_eq!(from_pixel(0.3, range, true), 0.25);
/// assert_eq!(from_pixel(-2.0, range, true), 0.0);
/// ```
pub fn from_pixel(offset_fraction: f64, range: ValueRange, snap: bool) -> f64 {
    let fraction = clamp_unit(offset_fraction);
    if snap && !range.is_degenerate() {
        let steps = range.span();
        (fraction * steps).round() / steps
    } else {
        fraction
    }
}
