use glam::Vec3;

// Shared simulation/visual tuning constants used by the web frontend.

// Eruption cycle
pub const PRESSURE_MIN_DELAY_SEC: f32 = 10.0; // shortest idle gap between cycles
pub const PRESSURE_MAX_DELAY_SEC: f32 = 24.0;
pub const CHARGE_DURATION_SEC: f32 = 4.0; // natural ramp
pub const FORCED_CHARGE_DURATION_SEC: f32 = 2.6; // hero scroll-leave ramp

// Pressure level -> material mapping (all linear in the eased level)
pub const CORE_EMISSIVE_BASE: f32 = 0.75;
pub const CORE_EMISSIVE_GAIN: f32 = 1.4;
pub const KEY_LIGHT_BASE: f32 = 3.0;
pub const KEY_LIGHT_GAIN: f32 = 2.5;
pub const FILL_LIGHT_BASE: f32 = 1.5;
pub const FILL_LIGHT_GAIN: f32 = 1.3;
pub const CORE_SCALE_GAIN: f32 = 0.06;
pub const GLOW_OPACITY_BASE: f32 = 0.35;
pub const GLOW_OPACITY_GAIN: f32 = 0.3;

// Fragment bursts
pub const FRAGMENT_BURST_COUNT: usize = 140;
pub const FRAGMENT_GRAVITY: f32 = 4.5;
pub const FRAGMENT_LATERAL_SPEED_MIN: f32 = 0.3;
pub const FRAGMENT_LATERAL_SPEED_MAX: f32 = 1.5;
pub const FRAGMENT_UP_SPEED_MIN: f32 = 1.5;
pub const FRAGMENT_UP_SPEED_MAX: f32 = 3.5;
pub const FRAGMENT_LIFE_MIN: f32 = 1.6;
pub const FRAGMENT_LIFE_MAX: f32 = 2.3;
pub const FRAGMENT_EMISSIVE_GAIN: f32 = 2.0; // emissive = gain * fade

// Meteorite bursts
pub const METEORITE_BURST_COUNT: usize = 50;
pub const METEORITE_GRAVITY: f32 = 9.8;
pub const METEORITE_FLOOR_Y: f32 = -10.0;
pub const METEORITE_SPAWN_RADIUS: f32 = 9.0;
pub const METEORITE_SPAWN_Y_MIN: f32 = 12.0;
pub const METEORITE_SPAWN_Y_MAX: f32 = 20.0;
pub const METEORITE_LATERAL_SPEED_MAX: f32 = 1.8;
pub const METEORITE_FALL_SPEED_MAX: f32 = 2.0;
pub const METEORITE_LIFE_MIN: f32 = 2.4;
pub const METEORITE_LIFE_MAX: f32 = 3.6;

// Ambient ember field
pub const EMBER_COUNT: usize = 600;
pub const EMBER_HALF_EXTENT_XZ: f32 = 8.0;
pub const EMBER_MIN_Y: f32 = 0.0;
pub const EMBER_MAX_Y: f32 = 5.0;
pub const EMBER_RISE_MIN: f32 = 0.1;
pub const EMBER_RISE_MAX: f32 = 0.4;
pub const EMBER_WANDER: f32 = 0.15; // max lateral drift on x/z
pub const EMBER_SIZE_BASE: f32 = 0.06;
pub const EMBER_SIZE_PEAK: f32 = 0.14;
pub const EMBER_PULSE_HALF_SEC: f32 = 0.18; // spike up, then yoyo back
pub const EMBER_SPIN_RATE: f32 = 0.03; // whole-field spin, rad/s

// Camera rig
pub const POINTER_ROT_GAIN: f32 = 0.2;
pub const CAMERA_DAMPING_PER_SEC: f32 = 1.2; // matches the old per-frame 0.02 lerp at 60 Hz
pub const AUTO_SPIN_PITCH: f32 = 0.09; // rad/s
pub const AUTO_SPIN_YAW: f32 = 0.12;
pub const PORTFOLIO_ROT_X_GAIN: f32 = -0.5;
pub const PORTFOLIO_ROT_Y_GAIN: f32 = 0.6;

// Screen shake
pub const SHAKE_AMPLITUDE_PX: f32 = 4.0;
pub const SHAKE_HALF_PERIOD_SEC: f32 = 0.45;
pub const SHAKE_LEGS: u32 = 6; // initial sweep plus five yoyo repeats
pub const SHAKE_SETTLE_SEC: f32 = 0.2;

// Floating orbs
pub const ORB_COUNT: usize = 12;
pub const ORB_RADIUS: f32 = 0.08;
pub const ORB_BOB_AMPLITUDE: f32 = 0.5;

// Frame stepping
pub const MAX_STEP_SEC: f32 = 0.1; // clamp dt after a backgrounded tab resumes

pub const CORE_POSITION: [f32; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn core_position() -> Vec3 {
    Vec3::from(CORE_POSITION)
}
