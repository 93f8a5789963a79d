// Host-side tests for the pressure/eruption state machine.

use caldera_core::constants::*;
use caldera_core::eruption::{PressureCycle, PressureVisuals};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn make_cycle() -> (PressureCycle, StdRng) {
    let mut rng = StdRng::seed_from_u64(42);
    let cycle = PressureCycle::new(&mut rng);
    (cycle, rng)
}

#[test]
fn initial_deadline_is_within_the_configured_window() {
    let (cycle, _) = make_cycle();
    let at = cycle.next_charge_at();
    assert!(at >= PRESSURE_MIN_DELAY_SEC as f64);
    assert!(at <= PRESSURE_MAX_DELAY_SEC as f64);
    assert_eq!(cycle.pressure(), 0.0);
    assert!(!cycle.is_charging());
}

#[test]
fn charging_ramps_monotonically_from_zero_to_eruption() {
    let (mut cycle, mut rng) = make_cycle();
    cycle.start_charge(false);
    assert!(cycle.is_charging());

    let mut now = 0.0_f64;
    let mut prev = 0.0_f32;
    let mut fired = false;
    for _ in 0..300 {
        now += DT as f64;
        if cycle.tick(DT, now, &mut rng) {
            fired = true;
            break;
        }
        let p = cycle.pressure();
        assert!((0.0..=1.0).contains(&p), "pressure out of range: {p}");
        assert!(p >= prev, "pressure regressed: {prev} -> {p}");
        prev = p;
    }
    assert!(fired, "eruption never fired");
    // the ramp took roughly the natural duration
    assert!((now as f32 - CHARGE_DURATION_SEC).abs() < 2.0 * DT);
    // pressure reads zero on the very step the eruption fires
    assert_eq!(cycle.pressure(), 0.0);
    assert!(!cycle.is_charging());
}

#[test]
fn reentrant_charge_start_does_not_restart_the_ramp() {
    let (mut cycle, mut rng) = make_cycle();
    cycle.start_charge(false);

    let mut now = 0.0_f64;
    while now < 1.0 {
        now += DT as f64;
        assert!(!cycle.tick(DT, now, &mut rng));
    }
    let mid = cycle.pressure();
    assert!(mid > 0.0);

    // a forced re-trigger mid-ramp must neither reset pressure nor swap in
    // the shorter duration
    cycle.start_charge(true);
    now += DT as f64;
    assert!(!cycle.tick(DT, now, &mut rng));
    assert!(cycle.pressure() >= mid, "ramp was restarted");

    // with the 2.6 s forced duration an eruption would land near t = 3.6;
    // the untouched natural ramp fires near t = 4.0
    while now < 3.8 {
        now += DT as f64;
        assert!(!cycle.tick(DT, now, &mut rng), "eruption fired early at {now:.2}");
    }
    let mut fired = false;
    while now < 4.2 {
        now += DT as f64;
        if cycle.tick(DT, now, &mut rng) {
            fired = true;
            break;
        }
    }
    assert!(fired, "natural eruption missing");
    assert_eq!(cycle.eruption_count(), 1);
}

#[test]
fn forced_ramp_completes_one_eruption_and_one_reschedule() {
    let (mut cycle, mut rng) = make_cycle();
    cycle.start_charge(true);

    let mut now = 0.0_f64;
    let mut eruptions = 0;
    while now < FORCED_CHARGE_DURATION_SEC as f64 + 0.1 {
        now += DT as f64;
        if cycle.tick(DT, now, &mut rng) {
            eruptions += 1;
        }
    }
    assert_eq!(eruptions, 1);
    assert_eq!(cycle.eruption_count(), 1);
    let gap = cycle.next_charge_at() - cycle.last_eruption_time();
    assert!(gap >= PRESSURE_MIN_DELAY_SEC as f64 && gap <= PRESSURE_MAX_DELAY_SEC as f64);
}

#[test]
fn idle_deadline_starts_the_next_charge() {
    let (mut cycle, mut rng) = make_cycle();
    let deadline = cycle.next_charge_at();
    let mut now = 0.0_f64;
    while now < deadline {
        now += 0.05;
        cycle.tick(0.05, now, &mut rng);
    }
    assert!(cycle.is_charging());
}

#[test]
fn cycle_repeats_for_the_whole_session() {
    let (mut cycle, mut rng) = make_cycle();
    let mut now = 0.0_f64;
    while now < 120.0 {
        now += 0.05;
        cycle.tick(0.05, now, &mut rng);
    }
    // 120 s fits at least three 24 + 4 s worst-case cycles
    assert!(
        cycle.eruption_count() >= 3,
        "only {} eruptions in 120s",
        cycle.eruption_count()
    );
}

#[test]
fn visuals_mapping_is_monotone_and_anchored_at_the_bases() {
    let at_rest = PressureVisuals::from_level(0.0);
    assert_eq!(at_rest.emissive_intensity, CORE_EMISSIVE_BASE);
    assert_eq!(at_rest.key_light, KEY_LIGHT_BASE);
    assert_eq!(at_rest.fill_light, FILL_LIGHT_BASE);
    assert_eq!(at_rest.core_scale, 1.0);
    assert_eq!(at_rest.glow_opacity, GLOW_OPACITY_BASE);

    let mut prev = at_rest;
    for i in 1..=10 {
        let v = PressureVisuals::from_level(i as f32 / 10.0);
        assert!(v.emissive_intensity >= prev.emissive_intensity);
        assert!(v.key_light >= prev.key_light);
        assert!(v.fill_light >= prev.fill_light);
        assert!(v.core_scale >= prev.core_scale);
        assert!(v.glow_opacity >= prev.glow_opacity);
        assert!(v.glow_opacity <= 1.0);
        prev = v;
    }

    // out-of-range levels clamp instead of extrapolating
    assert_eq!(
        PressureVisuals::from_level(5.0),
        PressureVisuals::from_level(1.0)
    );
    assert_eq!(
        PressureVisuals::from_level(-1.0),
        PressureVisuals::from_level(0.0)
    );
}
