//! Frame-to-frame simulation state for the backdrop.
//!
//! The scene owns a fixed-step clock rather than wall-clock deltas: the
//! visual speed stays constant regardless of the host's refresh cadence.

use crate::constants::*;
use crate::patterns::Pattern;
use crate::title::TitlePulse;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

pub struct SceneState {
    pub time: f32,
    /// Last known pointer position, normalized to `[0, 1]` on both axes.
    pub pointer: Vec2,
    pub pattern: Pattern,
    pub interacting: bool,
    pub last_move_time: f32,
    pub title: TitlePulse,
    fade_opacity: f32,
}

impl SceneState {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            time: 0.0,
            pointer: Vec2::new(0.5, 0.5),
            pattern: Pattern::Polygons,
            interacting: false,
            last_move_time: 0.0,
            title: TitlePulse::new(rng),
            fade_opacity: FADE_INITIAL,
        }
    }

    /// Advance the clock by one fixed step and ramp the trail fade.
    pub fn advance(&mut self) {
        self.time += TIME_STEP;
        self.fade_opacity = (self.fade_opacity + FADE_STEP).min(FADE_MAX);
    }

    /// Alpha of the black rectangle composited over the previous frame.
    #[inline]
    pub fn fade_alpha(&self) -> f32 {
        self.fade_opacity
    }

    /// Periodic radius modulation shared by the stroked patterns.
    #[inline]
    pub fn pulse_scale(&self) -> f32 {
        1.0 + PULSE_DEPTH * (self.time * PULSE_FREQ * TAU).sin().abs()
    }

    /// Whether this frame gets the translucent white strobe.
    #[inline]
    pub fn flash_active(&self) -> bool {
        (self.time * PULSE_FREQ * TAU).sin() > FLASH_THRESHOLD
    }

    /// Whether this frame gets the pixel-shift glitch.
    pub fn glitch_due(&self, rng: &mut impl Rng) -> bool {
        (self.time * GLITCH_FREQ * TAU).sin() > GLITCH_WAVE_THRESHOLD
            || rng.gen::<f32>() < GLITCH_RANDOM_CHANCE
    }

    pub fn pointer_moved(&mut self, uv: Vec2) {
        self.pointer = uv;
        self.last_move_time = self.time;
        self.interacting = true;
    }

    /// A touch lift cycles to the next pattern immediately.
    pub fn touch_ended(&mut self) {
        self.advance_pattern();
    }

    /// Auto-advance once input has paused long enough; returns whether the
    /// pattern changed.
    pub fn check_auto_advance(&mut self) -> bool {
        if self.interacting && self.time - self.last_move_time > STOP_THRESHOLD {
            self.advance_pattern();
            return true;
        }
        false
    }

    fn advance_pattern(&mut self) {
        self.pattern = self.pattern.next();
        self.interacting = false;
        log::debug!("[scene] pattern -> {:?}", self.pattern);
    }
}
