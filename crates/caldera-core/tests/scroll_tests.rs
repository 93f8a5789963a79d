// Host-side tests for scroll/pointer binding math.

use caldera_core::constants::*;
use caldera_core::scroll::{
    hero_progress, pointer_rotation_target, region_progress, CameraRig, RegionEvent,
    ScrollBindings, BASALT_REGION, HERO_REGION, PUMICE_REGION, TUBE_REGION,
};
use glam::Vec2;

#[test]
fn region_progress_covers_the_bottom_to_top_span() {
    let vh = 900.0;
    let h = 600.0;
    // region top sitting at the viewport bottom: not yet entered
    assert_eq!(region_progress(vh, h, vh), 0.0);
    // region bottom has just cleared the viewport top
    assert_eq!(region_progress(-h, h, vh), 1.0);
    // halfway through the total travel
    let half = region_progress((vh - h) / 2.0, h, vh);
    assert!((half - 0.5).abs() < 1e-6);
}

#[test]
fn region_progress_is_monotone_while_scrolling() {
    let vh = 800.0;
    let h = 500.0;
    let mut prev = -1.0_f32;
    let mut top = vh + 200.0;
    while top > -(h + 200.0) {
        let p = region_progress(top, h, vh);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
        top -= 37.0;
    }
}

#[test]
fn region_progress_handles_degenerate_layout() {
    assert_eq!(region_progress(100.0, 0.0, 0.0), 0.0);
    assert_eq!(region_progress(0.0, -500.0, 200.0), 0.0);
}

#[test]
fn hero_progress_pins_from_top_to_top() {
    let h = 700.0;
    assert_eq!(hero_progress(0.0, h), 0.0);
    assert_eq!(hero_progress(-h, h), 1.0);
    assert_eq!(hero_progress(-2.0 * h, h), 1.0);
    assert_eq!(hero_progress(50.0, h), 0.0);
    assert_eq!(hero_progress(0.0, 0.0), 0.0);
}

#[test]
fn hero_leave_fires_exactly_once_per_crossing() {
    let mut bindings = ScrollBindings::new();
    assert_eq!(bindings.set_progress(HERO_REGION, 0.3), None);
    assert_eq!(bindings.set_progress(HERO_REGION, 0.9), None);
    assert_eq!(
        bindings.set_progress(HERO_REGION, 1.0),
        Some(RegionEvent::HeroLeft)
    );
    // staying past the end re-fires nothing
    assert_eq!(bindings.set_progress(HERO_REGION, 1.0), None);
    // scrolling back up re-arms the edge
    assert_eq!(bindings.set_progress(HERO_REGION, 0.2), None);
    assert_eq!(
        bindings.set_progress(HERO_REGION, 1.3),
        Some(RegionEvent::HeroLeft)
    );
}

#[test]
fn scalars_are_clamped_and_default_to_zero() {
    let mut bindings = ScrollBindings::new();
    assert_eq!(bindings.tunnel(), 0.0);
    assert_eq!(bindings.basalt_rise(), 0.0);
    assert_eq!(bindings.pumice_offset(), 0.0);

    bindings.set_progress(TUBE_REGION, 1.7);
    bindings.set_progress(BASALT_REGION, -0.4);
    bindings.set_progress(PUMICE_REGION, 0.25);
    assert_eq!(bindings.tunnel(), 1.0);
    assert_eq!(bindings.basalt_rise(), 0.0);
    assert_eq!(bindings.pumice_offset(), 0.25);
}

#[test]
fn portfolio_progress_maps_to_rotation_offsets() {
    let mut bindings = ScrollBindings::new();
    bindings.set_progress("portfolio", 1.0);
    let off = bindings.rotation_offset();
    assert!((off.x - PORTFOLIO_ROT_X_GAIN).abs() < 1e-6);
    assert!((off.y - PORTFOLIO_ROT_Y_GAIN).abs() < 1e-6);
}

#[test]
fn pointer_mapping_uses_the_fixed_gain() {
    let t = pointer_rotation_target(1.0, -1.0);
    assert!((t.x + POINTER_ROT_GAIN).abs() < 1e-6);
    assert!((t.y - POINTER_ROT_GAIN).abs() < 1e-6);
}

#[test]
fn camera_rig_eases_toward_its_target() {
    let mut rig = CameraRig::default();
    let target = Vec2::new(0.15, -0.1);
    let dt = 1.0 / 60.0;
    for _ in 0..600 {
        rig.update(dt, target);
    }
    // converges to the target plus the small constant-drift bias
    let err = (rig.rotation() - target).length();
    assert!(err < 0.2, "camera never settled: err={err}");

    // and keeps tracking when the target moves
    let target2 = Vec2::new(-0.2, 0.2);
    let before = (rig.rotation() - target2).length();
    for _ in 0..120 {
        rig.update(dt, target2);
    }
    let after = (rig.rotation() - target2).length();
    assert!(after < before, "camera did not move toward the new target");
}
