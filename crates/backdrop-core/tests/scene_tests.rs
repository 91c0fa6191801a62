// Scene clock, fade ramp, pattern cycling, and the title pulse schedule.

use backdrop_core::constants::*;
use backdrop_core::patterns::Pattern;
use backdrop_core::scene::SceneState;
use backdrop_core::title::TitlePulse;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_scene() -> (SceneState, StdRng) {
    let mut rng = StdRng::seed_from_u64(42);
    let scene = SceneState::new(&mut rng);
    (scene, rng)
}

#[test]
fn clock_advances_by_the_fixed_step() {
    let (mut scene, _) = make_scene();
    assert_eq!(scene.time, 0.0);
    scene.advance();
    assert!((scene.time - TIME_STEP).abs() < 1e-7);
}

#[test]
fn fade_alpha_ramps_monotonically_to_its_cap() {
    let (mut scene, _) = make_scene();
    let mut prev = scene.fade_alpha();
    assert!((prev - FADE_INITIAL).abs() < 1e-6);
    for _ in 0..2000 {
        scene.advance();
        let alpha = scene.fade_alpha();
        assert!(alpha >= prev);
        assert!(alpha <= FADE_MAX);
        prev = alpha;
    }
    assert!((prev - FADE_MAX).abs() < 1e-6);
}

#[test]
fn pulse_scale_stays_within_its_depth() {
    let (mut scene, _) = make_scene();
    for _ in 0..1000 {
        scene.advance();
        let scale = scene.pulse_scale();
        assert!((1.0..=1.0 + PULSE_DEPTH).contains(&scale));
    }
}

#[test]
fn flash_fires_only_near_the_waveform_peak() {
    let (mut scene, _) = make_scene();
    assert!(!scene.flash_active());
    scene.time = 0.25 / PULSE_FREQ;
    assert!(scene.flash_active());
}

#[test]
fn glitch_wave_trigger_is_deterministic_at_the_peak() {
    let (mut scene, mut rng) = make_scene();
    scene.time = 0.25 / GLITCH_FREQ;
    assert!(scene.glitch_due(&mut rng));
}

#[test]
fn touch_end_cycles_patterns_modulo_five() {
    let (mut scene, _) = make_scene();
    assert_eq!(scene.pattern, Pattern::Polygons);
    let order = [
        Pattern::Mesh,
        Pattern::Fractal,
        Pattern::Symmetry,
        Pattern::Overlay,
        Pattern::Polygons,
    ];
    for (n, expected) in order.iter().cycle().take(12).enumerate() {
        scene.touch_ended();
        assert_eq!(scene.pattern, *expected, "after {} touch ends", n + 1);
        assert_eq!(scene.pattern.index(), (n + 1) % Pattern::COUNT);
    }
}

#[test]
fn auto_advance_fires_only_after_the_idle_gap() {
    let (mut scene, _) = make_scene();
    scene.pointer_moved(Vec2::new(0.2, 0.8));
    assert!(scene.interacting);

    while scene.time - scene.last_move_time <= STOP_THRESHOLD {
        assert!(!scene.check_auto_advance());
        scene.advance();
    }
    assert!(scene.check_auto_advance());
    assert!(!scene.interacting);
    assert_eq!(scene.pattern, Pattern::Mesh);

    // idle without prior interaction never advances
    for _ in 0..100 {
        scene.advance();
        assert!(!scene.check_auto_advance());
    }
    assert_eq!(scene.pattern, Pattern::Mesh);
}

#[test]
fn title_pulse_is_zero_when_waiting_and_bounded_when_active() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pulse = TitlePulse::new(&mut rng);
    let mut time = 0.0f32;
    let mut saw_active = false;
    for _ in 0..20_000 {
        let alpha = pulse.alpha(time, &mut rng);
        if pulse.is_active() {
            saw_active = true;
            assert!((0.0..=1.0).contains(&alpha));
        } else {
            assert_eq!(alpha, 0.0);
        }
        time += TIME_STEP;
    }
    assert!(saw_active, "pulse never triggered over 400 sim-seconds");
}

#[test]
fn title_pulse_hump_is_zero_at_both_boundaries() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut pulse = TitlePulse::new(&mut rng);
    let trigger = pulse.next_trigger();

    // activation frame samples the hump at exactly t = 0
    assert_eq!(pulse.alpha(trigger, &mut rng), 0.0);
    assert!(pulse.is_active());

    // mid-pulse is strictly positive (durations are at least 3.2)
    assert!(pulse.alpha(trigger + 1.0, &mut rng) > 0.0);

    // past the end: zero again, with a strictly future reschedule
    let done = trigger + TITLE_DURATION_MIN + TITLE_DURATION_SPAN + 1.0;
    assert_eq!(pulse.alpha(done, &mut rng), 0.0);
    assert!(!pulse.is_active());
    assert!(pulse.next_trigger() > done);
}
