//! Randomly timed fade-in/fade-out of the centered title glyph.

use crate::constants::*;
use rand::Rng;

/// Two states driven purely by clock comparisons: waiting until `next`,
/// then pulsing for `duration` with a single smooth sine hump. One random
/// draw per transition.
#[derive(Clone, Debug)]
pub struct TitlePulse {
    active: bool,
    start: f32,
    duration: f32,
    next: f32,
}

impl TitlePulse {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            active: false,
            start: 0.0,
            duration: 0.0,
            next: TITLE_FIRST_DELAY_MIN + rng.gen::<f32>() * TITLE_FIRST_DELAY_SPAN,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clock value of the upcoming (or current) trigger.
    #[inline]
    pub fn next_trigger(&self) -> f32 {
        self.next
    }

    /// Current glyph alpha in `[0, 1]`; advances the schedule as a side
    /// effect of being sampled.
    pub fn alpha(&mut self, time: f32, rng: &mut impl Rng) -> f32 {
        if !self.active {
            if time >= self.next {
                self.active = true;
                self.start = time;
                self.duration = TITLE_DURATION_MIN + rng.gen::<f32>() * TITLE_DURATION_SPAN;
            }
            return 0.0;
        }

        let t = (time - self.start) / self.duration;
        if t >= 1.0 {
            self.active = false;
            self.next = time + TITLE_DOWNTIME_MIN + rng.gen::<f32>() * TITLE_DOWNTIME_SPAN;
            return 0.0;
        }

        // 0 -> 1 -> 0 smooth fade
        let wave = (std::f32::consts::PI * t).sin();
        wave.max(0.0).powf(TITLE_FADE_EXPONENT)
    }
}
