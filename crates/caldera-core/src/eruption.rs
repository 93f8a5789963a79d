//! Pressure build-up and eruption cycle.
//!
//! The cycle is `Idle -> Charging -> (eruption fires) -> Idle`, forever.
//! While idle, a deadline in simulated time schedules the next charge; the
//! charge ramps pressure from 0 to 1 over an eased duration, and completing
//! the ramp fires the eruption and reschedules the next deadline. Deadlines
//! advance only through [`PressureCycle::tick`], so a paused frame loop
//! pauses the cycle with it.

use crate::constants::*;
use crate::ease::ease_in_out_cubic;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Charging,
}

#[derive(Clone, Debug)]
pub struct PressureCycle {
    pressure: f32,
    phase: Phase,
    charge_elapsed: f32,
    charge_duration: f32,
    next_charge_at: f64,
    last_eruption_time: f64,
    eruption_count: u64,
}

impl PressureCycle {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            pressure: 0.0,
            phase: Phase::Idle,
            charge_elapsed: 0.0,
            charge_duration: CHARGE_DURATION_SEC,
            next_charge_at: idle_delay(rng) as f64,
            last_eruption_time: 0.0,
            eruption_count: 0,
        }
    }

    #[inline]
    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        self.phase == Phase::Charging
    }

    #[inline]
    pub fn last_eruption_time(&self) -> f64 {
        self.last_eruption_time
    }

    #[inline]
    pub fn next_charge_at(&self) -> f64 {
        self.next_charge_at
    }

    #[inline]
    pub fn eruption_count(&self) -> u64 {
        self.eruption_count
    }

    /// Begin the pressure ramp. No-op while a ramp is already in flight, so
    /// repeated triggers cannot restart it or stack a second eruption.
    pub fn start_charge(&mut self, forced: bool) {
        if self.phase == Phase::Charging {
            return;
        }
        self.phase = Phase::Charging;
        self.charge_elapsed = 0.0;
        self.charge_duration = if forced {
            FORCED_CHARGE_DURATION_SEC
        } else {
            CHARGE_DURATION_SEC
        };
        log::debug!(
            "charge started (forced={forced}, duration={}s)",
            self.charge_duration
        );
    }

    /// Advance the cycle by `dt` seconds; `now` is the session's simulated
    /// time after `dt` has been applied. Returns `true` on the step where an
    /// eruption fires; pressure reads 0 on that step.
    pub fn tick(&mut self, dt: f32, now: f64, rng: &mut impl Rng) -> bool {
        match self.phase {
            Phase::Idle => {
                if now >= self.next_charge_at {
                    self.start_charge(false);
                }
                false
            }
            Phase::Charging => {
                self.charge_elapsed += dt;
                let t = (self.charge_elapsed / self.charge_duration).min(1.0);
                self.pressure = ease_in_out_cubic(t);
                if self.charge_elapsed >= self.charge_duration {
                    self.erupt(now, rng);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn erupt(&mut self, now: f64, rng: &mut impl Rng) {
        self.pressure = 0.0;
        self.phase = Phase::Idle;
        self.last_eruption_time = now;
        self.next_charge_at = now + idle_delay(rng) as f64;
        self.eruption_count += 1;
        log::debug!(
            "eruption #{} at t={now:.2}s, next charge at t={:.2}s",
            self.eruption_count,
            self.next_charge_at
        );
    }
}

#[inline]
fn idle_delay(rng: &mut impl Rng) -> f32 {
    PRESSURE_MIN_DELAY_SEC + rng.gen::<f32>() * (PRESSURE_MAX_DELAY_SEC - PRESSURE_MIN_DELAY_SEC)
}

/// Material/light values derived from the current pressure level.
///
/// The mapping is linear in the eased level, so it inherits monotonicity
/// from the ramp; every field stays inside its stated band for levels in
/// \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PressureVisuals {
    pub emissive_intensity: f32,
    pub key_light: f32,
    pub fill_light: f32,
    pub core_scale: f32,
    pub glow_opacity: f32,
}

impl PressureVisuals {
    pub fn from_level(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self {
            emissive_intensity: CORE_EMISSIVE_BASE + l * CORE_EMISSIVE_GAIN,
            key_light: KEY_LIGHT_BASE + l * KEY_LIGHT_GAIN,
            fill_light: FILL_LIGHT_BASE + l * FILL_LIGHT_GAIN,
            core_scale: 1.0 + l * CORE_SCALE_GAIN,
            glow_opacity: (GLOW_OPACITY_BASE + l * GLOW_OPACITY_GAIN).clamp(0.0, 1.0),
        }
    }
}
