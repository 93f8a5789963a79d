// Host-side integration tests for the whole simulation context.

use caldera_core::constants::*;
use caldera_core::scroll::HERO_REGION;
use caldera_core::sim::{build_sprite_instances, SimConfig, SimEvent, SimEvents, VolcanoSim};
use std::time::Duration;

const DT: Duration = Duration::from_micros(16_667);

fn make_sim() -> VolcanoSim {
    VolcanoSim::new(SimConfig::default(), 42).expect("default config is valid")
}

/// Step until the forced eruption fires; returns (event, steps taken).
fn force_and_run_to_eruption(sim: &mut VolcanoSim) -> (SimEvent, usize) {
    sim.set_region_progress(HERO_REGION, 0.4);
    sim.set_region_progress(HERO_REGION, 1.0);
    assert!(sim.cycle.is_charging());

    let mut events = SimEvents::new();
    for step in 0..400 {
        events.clear();
        sim.tick(DT, &mut events);
        if let Some(ev) = events.first() {
            return (*ev, step);
        }
    }
    panic!("forced eruption never fired");
}

#[test]
fn hero_leave_forces_one_short_ramp_eruption() {
    let mut sim = make_sim();
    let (ev, steps) = force_and_run_to_eruption(&mut sim);
    let SimEvent::Eruption {
        fragments,
        meteorites,
    } = ev;
    assert_eq!(fragments, FRAGMENT_BURST_COUNT);
    assert_eq!(meteorites, METEORITE_BURST_COUNT);

    // the short ramp, not the natural one
    let ramp = steps as f32 / 60.0;
    assert!(
        (ramp - FORCED_CHARGE_DURATION_SEC).abs() < 0.1,
        "ramp took {ramp:.2}s"
    );

    // exactly one burst and one reschedule
    assert_eq!(sim.cycle.eruption_count(), 1);
    let gap = sim.cycle.next_charge_at() - sim.cycle.last_eruption_time();
    assert!(gap >= PRESSURE_MIN_DELAY_SEC as f64 && gap <= PRESSURE_MAX_DELAY_SEC as f64);

    // no second eruption from the same leave
    let mut events = SimEvents::new();
    for _ in 0..300 {
        sim.tick(DT, &mut events);
    }
    assert!(events.is_empty(), "a second eruption fired");
}

#[test]
fn burst_is_visible_in_the_frame_that_spawned_it() {
    let mut sim = make_sim();
    let _ = force_and_run_to_eruption(&mut sim);
    // reading state right after the eruption tick: everything just spawned
    // is still active (nothing can expire within one frame)
    assert_eq!(
        sim.particles.active_count(),
        FRAGMENT_BURST_COUNT + METEORITE_BURST_COUNT
    );
}

#[test]
fn eruption_resets_pressure_and_visuals() {
    let mut sim = make_sim();
    let _ = force_and_run_to_eruption(&mut sim);
    assert_eq!(sim.cycle.pressure(), 0.0);
    let v = sim.visuals();
    assert_eq!(v.emissive_intensity, CORE_EMISSIVE_BASE);
    assert_eq!(v.glow_opacity, GLOW_OPACITY_BASE);
}

#[test]
fn eruption_triggers_shake_and_ember_pulse() {
    let mut sim = make_sim();
    assert!(!sim.shake.is_active());
    assert_eq!(sim.embers.point_size(), EMBER_SIZE_BASE);

    let _ = force_and_run_to_eruption(&mut sim);
    assert!(sim.shake.is_active());

    let mut events = SimEvents::new();
    let mut peak = 0.0_f32;
    for _ in 0..30 {
        sim.tick(DT, &mut events);
        peak = peak.max(sim.embers.point_size());
    }
    assert!(peak > EMBER_SIZE_BASE, "ember pulse never spiked");
    assert!(peak <= EMBER_SIZE_PEAK + 1e-4);
}

#[test]
fn instance_list_covers_every_renderable() {
    let mut sim = make_sim();
    let mut instances = Vec::new();

    build_sprite_instances(&sim, &mut instances);
    assert_eq!(instances.len(), EMBER_COUNT + ORB_COUNT);

    let _ = force_and_run_to_eruption(&mut sim);
    build_sprite_instances(&sim, &mut instances);
    assert_eq!(
        instances.len(),
        EMBER_COUNT + ORB_COUNT + FRAGMENT_BURST_COUNT + METEORITE_BURST_COUNT
    );
    for inst in &instances {
        assert!(inst.scale > 0.0);
        assert!(inst.color[3] >= 0.0 && inst.color[3] <= 1.0);
        assert!(inst.emissive >= 0.0);
    }
}

#[test]
fn same_seed_gives_identical_schedules() {
    let a = make_sim();
    let b = make_sim();
    assert_eq!(a.cycle.next_charge_at(), b.cycle.next_charge_at());

    let mut a = a;
    let mut b = b;
    let mut ea = SimEvents::new();
    let mut eb = SimEvents::new();
    for _ in 0..2000 {
        a.tick(DT, &mut ea);
        b.tick(DT, &mut eb);
    }
    assert_eq!(ea, eb);
    assert_eq!(a.cycle.eruption_count(), b.cycle.eruption_count());
    assert_eq!(a.particles.active_count(), b.particles.active_count());
}

#[test]
fn oversized_frame_gaps_are_clamped() {
    let mut sim = make_sim();
    let mut events = SimEvents::new();
    sim.tick(Duration::from_secs(10), &mut events);
    assert!((sim.elapsed() - MAX_STEP_SEC as f64).abs() < 1e-6);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut config = SimConfig::default();
    config.fragment_burst.count = 0;
    assert!(VolcanoSim::new(config, 1).is_err());
}

#[test]
fn orb_positions_bob_within_their_band() {
    let mut sim = make_sim();
    let bases: Vec<f32> = sim.orb_positions().map(|p| p.y).collect();
    assert_eq!(bases.len(), ORB_COUNT);

    let mut events = SimEvents::new();
    for _ in 0..600 {
        sim.tick(DT, &mut events);
        for p in sim.orb_positions() {
            // base y is within [-0.8, 0.8); the bob adds at most the amplitude
            assert!(p.y.abs() <= 0.8 + ORB_BOB_AMPLITUDE + 1e-4);
        }
    }
}
