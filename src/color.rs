//! Rgb type, the color value handed to hosts for painting.
//!
//! Stores channels as f64 in the 0.0–255.0 range so interpolated colors keep
//! their precision until the host quantizes them. Serializes as a hex string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SliderError};
use crate::mapping::clamp_unit;
use crate::math;

fn channel(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 255.0)
    }
}

/// RGB color with channels in the 0.0–255.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255.0, g: 255.0, b: 255.0 };
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    /// Create from channels, each clamped to 0.0–255.0. NaN becomes 0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Create from 0–255 integer channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Convert to 0–255 integer channels, rounding to nearest.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
        )
    }

    /// Create from HSB/HSV values (all 0.0–1.0). NaN components count as 0.
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let h = if h.is_finite() { h } else { 0.0 };
        let (r, g, bl) = math::hsb_to_rgb(h, clamp_unit(s), clamp_unit(b));
        Self::new(r * 255.0, g * 255.0, bl * 255.0)
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r / 255.0, self.g / 255.0, self.b / 255.0)
    }

    /// Black-body color of `kelvin + offset`.
    pub fn from_kelvin(kelvin: i32, offset: i32) -> Self {
        let (r, g, b) = math::kelvin_to_rgb(kelvin, offset);
        Self::new(r, g, b)
    }

    /// Scale the saturation by `ratio` (0.0 = gray, 1.0 = unchanged).
    pub fn desaturated(&self, ratio: f64) -> Self {
        let (h, s, b) = self.to_hsb();
        Self::from_hsb(h, s * clamp_unit(ratio), b)
    }

    /// Linear blend toward `other`; `t` is clamped to 0.0–1.0.
    pub fn lerp(&self, other: &Rgb, t: f64) -> Self {
        let t = clamp_unit(t);
        Self::new(
            math::lerp(self.r, other.r, t),
            math::lerp(self.g, other.g, t),
            math::lerp(self.b, other.b, t),
        )
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || SliderError::InvalidHex(hex.to_string());
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match stripped.len() {
            3 => {
                let r = parse(&stripped[0..1])?;
                let g = parse(&stripped[1..2])?;
                let b = parse(&stripped[2..3])?;
                Ok(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = parse(&stripped[0..2])?;
                let g = parse(&stripped[2..4])?;
                let b = parse(&stripped[4..6])?;
                Ok(Self::from_rgb8(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as uppercase hex (no `#` prefix), 6 chars.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
