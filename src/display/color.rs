//! Complex-to-colour mapping used to tint amplitude bars.
//!
//! Phase picks the hue (0 rad is red, turning through green at 2π/3 and
//! blue at 4π/3); magnitude, clamped to 1, sets the brightness. Saturation
//! is always full.

use num_complex::Complex;
use std::f64::consts::TAU;

/// Maps a complex value to an RGB triple with channels in `[0, 1]`.
pub fn complex_to_rgb(value: Complex<f64>) -> (f64, f64, f64) {
    let mut hue = value.arg() / TAU;
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue >= 1.0 {
        hue -= 1.0;
    }
    let brightness = value.norm().min(1.0);
    hsv_to_rgb(hue, 1.0, brightness)
}

/// Same mapping as [`complex_to_rgb`], scaled to `0..=255`.
pub fn complex_to_rgb_ints(value: Complex<f64>) -> (u8, u8, u8) {
    let (r, g, b) = complex_to_rgb(value);
    (to_byte(r), to_byte(g), to_byte(b))
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
