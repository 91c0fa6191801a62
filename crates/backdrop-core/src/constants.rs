/// Animation timing and effect tuning constants.
///
/// These constants express intended behavior (beat-derived frequencies,
/// ramp limits, trigger thresholds) and keep magic numbers out of the
/// draw code.
// Simulation clock step per frame; visual speed is decoupled from frame rate
pub const TIME_STEP: f32 = 0.02;

// Beat-derived frequencies (128 BPM source material)
pub const TEMPO: f32 = 128.0 / 60.0;
pub const PULSE_FREQ: f32 = TEMPO * 4.0;
pub const GLITCH_FREQ: f32 = TEMPO * 2.0;

// Full-surface strobe
pub const FLASH_THRESHOLD: f32 = 0.95;
pub const FLASH_ALPHA: f32 = 0.15;

// Depth of the periodic radius modulation shared by the stroked patterns
pub const PULSE_DEPTH: f32 = 0.2;

// Trail fade: alpha ramps up once per session, then holds at the cap
pub const FADE_INITIAL: f32 = 0.03;
pub const FADE_MAX: f32 = 0.08;
pub const FADE_STEP: f32 = 0.000_05;

// Idle gap after the last pointer move before the pattern auto-advances
pub const STOP_THRESHOLD: f32 = 0.5;

// Palette drift rate shared by every pattern
pub const COLOR_SWAP_SPEED: f32 = 0.03;

// Glitch triggers: a beat-locked waveform peak, plus a small per-frame chance
pub const GLITCH_WAVE_THRESHOLD: f32 = 0.95;
pub const GLITCH_RANDOM_CHANCE: f32 = 0.005;

// Glitch slice geometry (pixels)
pub const GLITCH_MIN_SLICES: u32 = 4;
pub const GLITCH_SLICE_SPAN: u32 = 4;
pub const GLITCH_SLICE_MIN_HEIGHT: u32 = 15;
pub const GLITCH_SLICE_HEIGHT_SPAN: u32 = 25;
pub const GLITCH_MAX_SHIFT: i32 = 40;

// Escape-time field
pub const FRACTAL_MAX_ITERATIONS: u32 = 80;
pub const FRACTAL_SAMPLE_STRIDE: usize = 3;
pub const FRACTAL_ESCAPE_RADIUS_SQ: f64 = 4.0;
pub const FRACTAL_C_BASE: [f64; 2] = [-0.8, 0.27];
pub const FRACTAL_C_DRIFT_RATE: f64 = 0.05;
pub const FRACTAL_HUE_DRIFT: f32 = 10.0;
pub const FRACTAL_SATURATION: f32 = 0.8;
pub const FRACTAL_LIGHTNESS: f32 = 0.6;
pub const FRACTAL_ALPHA_BASE: u32 = 128;
pub const FRACTAL_ALPHA_PER_ITER: u32 = 2;

// Centered title pulse schedule (sim-seconds)
pub const TITLE_FIRST_DELAY_MIN: f32 = 2.0;
pub const TITLE_FIRST_DELAY_SPAN: f32 = 4.0;
pub const TITLE_DURATION_MIN: f32 = 3.2;
pub const TITLE_DURATION_SPAN: f32 = 3.2;
pub const TITLE_DOWNTIME_MIN: f32 = 4.5;
pub const TITLE_DOWNTIME_SPAN: f32 = 10.0;
pub const TITLE_FADE_EXPONENT: f32 = 1.15;
pub const TITLE_ALPHA_SCALE: f32 = 0.75;
pub const TITLE_FLICKER_THRESHOLD: f32 = 0.97;
pub const TITLE_FLICKER_BOOST: f32 = 0.15;
pub const TITLE_GLYPH: &str = "Ⲁ Ⲙ Ⲟ ꓤ Ⲟ";
