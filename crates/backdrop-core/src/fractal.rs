//! Escape-time fractal field.
//!
//! The only routine with real numerical content: a quadratic recurrence
//! iterated per sampled pixel block, mapped to a hue by iteration count.
//! Math is `f64` throughout so orbits are reproducible in tests.

use crate::color::hsl_to_rgb;
use crate::constants::*;
use crate::pixel::PixelBuffer;
use crate::scene::SceneState;

/// One step of the recurrence `x' = x^2 - y^2 + c1`, `y' = 2xy + c2`.
#[inline]
pub fn quadratic_step(x: f64, y: f64, c1: f64, c2: f64) -> (f64, f64) {
    (x * x - y * y + c1, 2.0 * x * y + c2)
}

/// Iterate from `(x0, y0)` until divergence or the iteration cap. A point
/// already outside the escape radius terminates with count zero.
pub fn escape_iterations(x0: f64, y0: f64, c1: f64, c2: f64, max_iterations: u32) -> u32 {
    let (mut x, mut y) = (x0, y0);
    let mut iteration = 0;
    while x * x + y * y <= FRACTAL_ESCAPE_RADIUS_SQ && iteration < max_iterations {
        (x, y) = quadratic_step(x, y, c1, c2);
        iteration += 1;
    }
    iteration
}

/// Time-varying recurrence constant.
#[inline]
pub fn drifted_c(time: f32) -> (f64, f64) {
    let t = time as f64 * FRACTAL_C_DRIFT_RATE;
    (FRACTAL_C_BASE[0] + t.sin(), FRACTAL_C_BASE[1] + t.cos())
}

/// Render the field into `buf`, one 3x3 block per sample. Samples that
/// never diverge stay transparent; the caller replaces the whole surface
/// with the result.
pub fn render_field(scene: &SceneState, buf: &mut PixelBuffer) {
    let (w, h) = (buf.width(), buf.height());
    if w == 0 || h == 0 {
        return;
    }
    let zoom = 1.5 + scene.pointer.x as f64 + (scene.time as f64 * 0.1).sin() * 0.5;
    let (c1, c2) = drifted_c(scene.time);
    let x_scale = 0.3 * zoom * w as f64;
    let y_scale = 0.3 * zoom * h as f64;

    for px in (0..w).step_by(FRACTAL_SAMPLE_STRIDE) {
        for py in (0..h).step_by(FRACTAL_SAMPLE_STRIDE) {
            let x0 = (px as f64 - w as f64 / 2.0) / x_scale + scene.pointer.x as f64 * 0.3;
            let y0 = (py as f64 - h as f64 / 2.0) / y_scale + scene.pointer.y as f64 * 0.3;

            let iteration = escape_iterations(x0, y0, c1, c2, FRACTAL_MAX_ITERATIONS);
            if iteration >= FRACTAL_MAX_ITERATIONS {
                continue;
            }

            let hue = (iteration as f32 / FRACTAL_MAX_ITERATIONS as f32 * 360.0
                + scene.time * FRACTAL_HUE_DRIFT)
                .rem_euclid(360.0);
            let rgb = hsl_to_rgb(hue / 360.0, FRACTAL_SATURATION, FRACTAL_LIGHTNESS);
            let alpha = (FRACTAL_ALPHA_BASE + iteration * FRACTAL_ALPHA_PER_ITER).min(255) as u8;
            for dx in 0..FRACTAL_SAMPLE_STRIDE {
                for dy in 0..FRACTAL_SAMPLE_STRIDE {
                    buf.put(px + dx, py + dy, rgb, alpha);
                }
            }
        }
    }
}
