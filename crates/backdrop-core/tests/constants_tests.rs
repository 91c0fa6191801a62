// Bounds and relationships between the tuning constants.

use backdrop_core::constants::*;
use backdrop_core::patterns::Pattern;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_ramp_is_well_formed() {
    assert!(FADE_INITIAL > 0.0);
    assert!(FADE_STEP > 0.0);
    assert!(FADE_INITIAL < FADE_MAX);
    assert!(FADE_MAX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trigger_thresholds_sit_inside_the_waveform_range() {
    assert!(FLASH_THRESHOLD > 0.0 && FLASH_THRESHOLD < 1.0);
    assert!(GLITCH_WAVE_THRESHOLD > 0.0 && GLITCH_WAVE_THRESHOLD < 1.0);
    assert!(TITLE_FLICKER_THRESHOLD > 0.0 && TITLE_FLICKER_THRESHOLD < 1.0);
    assert!(GLITCH_RANDOM_CHANCE > 0.0 && GLITCH_RANDOM_CHANCE < 0.05);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glitch_slice_geometry_is_positive() {
    assert!(GLITCH_MIN_SLICES > 0);
    assert!(GLITCH_SLICE_SPAN > 0);
    assert!(GLITCH_SLICE_MIN_HEIGHT > 0);
    assert!(GLITCH_MAX_SHIFT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn title_schedule_is_well_formed() {
    assert!(TITLE_FIRST_DELAY_MIN > 0.0);
    assert!(TITLE_DURATION_MIN > 0.0);
    assert!(TITLE_DOWNTIME_MIN > 0.0);
    assert!(TITLE_FADE_EXPONENT >= 1.0);
    assert!(TITLE_ALPHA_SCALE > 0.0 && TITLE_ALPHA_SCALE <= 1.0);
    assert!(TITLE_ALPHA_SCALE + TITLE_FLICKER_BOOST <= 1.0);
    assert!(!TITLE_GLYPH.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fractal_parameters_are_sane() {
    assert!(FRACTAL_MAX_ITERATIONS > 0);
    assert!(FRACTAL_SAMPLE_STRIDE > 0);
    assert_eq!(FRACTAL_ESCAPE_RADIUS_SQ, 4.0);
    assert!(FRACTAL_ALPHA_BASE <= 255);
    assert!(FRACTAL_SATURATION > 0.0 && FRACTAL_SATURATION <= 1.0);
    assert!(FRACTAL_LIGHTNESS > 0.0 && FRACTAL_LIGHTNESS < 1.0);
}

#[test]
fn pattern_count_matches_the_enum() {
    let mut pattern = Pattern::Polygons;
    for _ in 0..Pattern::COUNT {
        pattern = pattern.next();
    }
    assert_eq!(pattern, Pattern::Polygons);
    assert_eq!(Pattern::from_index(Pattern::COUNT + 2), Pattern::Fractal);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn beat_derived_frequencies_scale_from_tempo() {
    assert!(TEMPO > 0.0);
    assert!((PULSE_FREQ - TEMPO * 4.0).abs() < 1e-6);
    assert!((GLITCH_FREQ - TEMPO * 2.0).abs() < 1e-6);
    assert!(STOP_THRESHOLD > TIME_STEP);
}
