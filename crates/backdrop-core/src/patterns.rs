//! The closed set of draw routines and the primitives they emit.
//!
//! Each builder turns the scene state into plain geometry; the web frontend
//! strokes the result onto the canvas. Zero-sized surfaces yield empty
//! output rather than degenerate shapes.

use crate::color::palette_color;
use crate::constants::*;
use crate::scene::SceneState;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Active draw routine. `Overlay` intentionally re-runs `Polygons` and
/// `Mesh` together rather than introducing a sixth visual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Polygons,
    Mesh,
    Fractal,
    Symmetry,
    Overlay,
}

impl Pattern {
    pub const COUNT: usize = 5;

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Pattern::Polygons => 0,
            Pattern::Mesh => 1,
            Pattern::Fractal => 2,
            Pattern::Symmetry => 3,
            Pattern::Overlay => 4,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Pattern::Polygons,
            1 => Pattern::Mesh,
            2 => Pattern::Fractal,
            3 => Pattern::Symmetry,
            _ => Pattern::Overlay,
        }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f32,
}

/// Closed stroked ring; at most six vertices in practice.
#[derive(Clone, Debug)]
pub struct Polygon {
    pub points: SmallVec<[Vec2; 8]>,
    pub stroke: Stroke,
}

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub stroke: Stroke,
}

/// Centered glyph overlay with a precomputed alpha.
#[derive(Clone, Debug)]
pub struct TitleBillboard {
    pub text: &'static str,
    pub center: Vec2,
    pub font_px: f32,
    pub alpha: f32,
    pub color: &'static str,
}

/// Concentric regular polygons, each layer spinning at its own speed and
/// direction.
pub fn spinning_polygons(scene: &SceneState, size: Vec2) -> Vec<Polygon> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let center = size * 0.5;
    let layers = 5 + (scene.pointer.y * 5.0) as usize;
    let pulse = scene.pulse_scale();

    let mut out = Vec::with_capacity(layers);
    for layer in 0..layers {
        // triangle, square, pentagon, hexagon
        let sides = 3 + layer % 4;
        let radius = (50.0 + layer as f32 * 30.0) * pulse * (0.5 + scene.pointer.x);
        let direction = if layer % 2 == 1 { 1.0 } else { -1.0 };
        let rotation = scene.time * direction * (0.05 + layer as f32 * 0.01);

        let mut points: SmallVec<[Vec2; 8]> = SmallVec::new();
        for i in 0..sides {
            let angle = (i as f32 / sides as f32) * TAU + rotation;
            points.push(center + Vec2::new(angle.cos(), angle.sin()) * radius);
        }
        out.push(Polygon {
            points,
            stroke: Stroke {
                color: palette_color(scene.time, layer as f32 / layers as f32),
                width: 2.0 + (layers - layer) as f32 * 0.5,
            },
        });
    }
    out
}

/// Centered glyph whose alpha follows the title pulse schedule, with a
/// brief flicker boost near the beat-locked waveform peak.
pub fn title_billboard(
    scene: &mut SceneState,
    size: Vec2,
    rng: &mut impl Rng,
) -> Option<TitleBillboard> {
    let base = scene.title.alpha(scene.time, rng);
    if base <= 0.0 {
        return None;
    }
    let flicker = (scene.time * GLITCH_FREQ * TAU).sin().abs();
    let boost = if flicker > TITLE_FLICKER_THRESHOLD {
        TITLE_FLICKER_BOOST
    } else {
        0.0
    };
    let font_px = (size.x.min(size.y) * 0.045).clamp(14.0, 30.0);
    Some(TitleBillboard {
        text: TITLE_GLYPH,
        center: size * 0.5,
        font_px,
        alpha: (base * TITLE_ALPHA_SCALE + boost).min(1.0),
        color: palette_color(scene.time, 0.0),
    })
}

/// Points on a noisy circle, sparsely interconnected.
pub fn mesh_segments(scene: &SceneState, size: Vec2, rng: &mut impl Rng) -> Vec<Segment> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let count = 20 + (scene.pointer.x * 20.0) as usize;
    let radius = size.x.min(size.y) / 3.0;
    let center = size * 0.5;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let angle = (i as f32 / count as f32) * TAU + scene.time * (0.02 + i as f32 * 0.005);
        let dist = radius * (0.5 + (scene.time + i as f32).sin() * 0.3);
        points.push(center + Vec2::new(angle.cos(), angle.sin()) * dist);
    }

    let mut out = Vec::new();
    for i in 0..count {
        for j in (i + 1)..count {
            if rng.gen::<f32>() < 0.2 {
                out.push(Segment {
                    a: points[i],
                    b: points[j],
                    stroke: Stroke {
                        color: palette_color(scene.time, (i + j) as f32 / (count as f32 * 2.0)),
                        width: 1.0 + (scene.time + (i + j) as f32).sin() * 0.5,
                    },
                });
            }
        }
    }
    out
}

/// Paired mirror-symmetric rays from the surface center.
pub fn symmetry_segments(scene: &SceneState, size: Vec2) -> Vec<Segment> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let center = size * 0.5;
    let count = 10 + (scene.pointer.y * 10.0) as usize;
    let pulse = scene.pulse_scale();

    let mut out = Vec::with_capacity(count * 2);
    for i in 0..count {
        let angle = (i as f32 / count as f32) * TAU + scene.time * 0.03;
        let length = size.y * 0.4 * (0.5 + (scene.time + i as f32).sin() * 0.3);
        let offset = Vec2::new(angle.cos(), angle.sin()) * length;
        let stroke = Stroke {
            color: palette_color(scene.time, i as f32 / count as f32),
            width: 1.5 + pulse,
        };
        out.push(Segment {
            a: center,
            b: center + offset,
            stroke,
        });
        out.push(Segment {
            a: center,
            b: center - offset,
            stroke,
        });
    }
    out
}
