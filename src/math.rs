//! Color math: HSB conversion and the black-body approximation.
//! HSB helpers use normalized f64 in 0.0–1.0; the Kelvin approximation
//! produces channels in 0.0–255.0.

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Truncate toward zero, then clamp into a color channel.
fn channel(x: f64) -> f64 {
    if x.is_finite() {
        x.trunc().clamp(0.0, 255.0)
    } else {
        0.0
    }
}

/// Black-body color of `kelvin + offset` (Tanner Helland approximation).
///
/// Channels are whole numbers in 0.0–255.0.
pub(crate) fn kelvin_to_rgb(kelvin: i32, offset: i32) -> (f64, f64, f64) {
    let t = (kelvin as f64 + offset as f64) / 100.0;

    let red = if t <= 66.0 {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };

    let green = if t <= 66.0 {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    (channel(red), channel(green), channel(blue))
}

/// Linear blend between `a` and `b`.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_white_at_6600k() {
        let (r, g, b) = kelvin_to_rgb(6600, 0);
        assert!((r - 255.0).abs() <= 2.0);
        assert!((g - 255.0).abs() <= 2.0);
        assert!((b - 255.0).abs() <= 2.0);
    }

    #[test]
    fn candle_light_is_warm() {
        let (r, g, b) = kelvin_to_rgb(1000, 0);
        assert!(r > g && g > b, "({r}, {g}, {b})");
        assert_eq!((r, g, b), (255.0, 67.0, 0.0));
    }

    #[test]
    fn hot_light_is_blue_shifted() {
        let (r, g, b) = kelvin_to_rgb(15000, 0);
        assert_eq!(b, 255.0);
        assert!(r < g && g < b, "({r}, {g}, {b})");
    }

    #[test]
    fn offset_shifts_temperature() {
        assert_eq!(kelvin_to_rgb(6100, 500), kelvin_to_rgb(6600, 0));
    }

    #[test]
    fn channels_truncate_not_round() {
        // t = 30: blue = 138.5177312231 * ln(20) - 305.0447927307 ≈ 109.92
        let (_, _, b) = kelvin_to_rgb(3000, 0);
        assert_eq!(b, 109.0);
    }

    #[test]
    fn non_positive_temperature_clamps() {
        assert_eq!(kelvin_to_rgb(0, 0), (255.0, 0.0, 0.0));
        assert_eq!(kelvin_to_rgb(-500, 0), (255.0, 0.0, 0.0));
    }

    #[test]
    fn hue_wraps_to_red() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsb_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn hsb_round_trips_primaries() {
        let (h, s, v) = rgb_to_hsb(0.0, 1.0, 1.0);
        assert!((h - 0.5).abs() < 1e-12);
        assert_eq!((s, v), (1.0, 1.0));
    }
}
