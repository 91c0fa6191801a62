//! Shared palette cycling and HSL to RGB conversion.
//!
//! Every pattern picks stroke colors through [`palette_color`] so that
//! simultaneously drawn elements drift through the palette in sync.

use crate::constants::COLOR_SWAP_SPEED;

/// Accent palette: cyan, magenta, yellow, orange-red, medium purple.
pub const PALETTE: [&str; 5] = ["#00FFFF", "#FF00FF", "#FFFF00", "#FF4500", "#9370DB"];

/// Deterministic palette index for a clock value and a per-element offset.
#[inline]
pub fn palette_index(time: f32, offset: f32) -> usize {
    let step = (time * COLOR_SWAP_SPEED + offset).floor() as i64;
    step.rem_euclid(PALETTE.len() as i64) as usize
}

#[inline]
pub fn palette_color(time: f32, offset: f32) -> &'static str {
    PALETTE[palette_index(time, offset)]
}

/// Convert HSL (all components in `[0, 1]`) to 8-bit RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return [v, v, v];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    ]
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
