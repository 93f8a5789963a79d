//! The per-session simulation context.
//!
//! All mutable state (pressure cycle, particle sets, ember field, camera
//! rig, scroll bindings) lives on [`VolcanoSim`] and is advanced by one
//! `tick` per display frame. Within a tick the state machine runs before the
//! particle update, so a burst fired by an eruption is present in the
//! instance list built for that same frame.

use crate::constants::*;
use crate::embers::EmberField;
use crate::eruption::{PressureCycle, PressureVisuals};
use crate::particles::{BurstConfig, ConfigError, ParticleSystem};
use crate::scroll::{pointer_rotation_target, CameraRig, RegionEvent, ScrollBindings};
use crate::shake::ScreenShake;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub fragment_burst: BurstConfig,
    pub meteorite_burst: BurstConfig,
    pub ember_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fragment_burst: BurstConfig::fragments(),
            meteorite_burst: BurstConfig::meteorites(),
            ember_count: EMBER_COUNT,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fragment_burst.validate()?;
        self.meteorite_burst.validate()?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimEvent {
    Eruption { fragments: usize, meteorites: usize },
}

pub type SimEvents = SmallVec<[SimEvent; 4]>;

/// Crater/plume "breathing" values derived from session time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Breathing {
    pub crater_opacity: f32,
    pub crater_scale: f32,
    pub plume_y: f32,
    pub plume_opacity: f32,
}

impl Breathing {
    pub fn at(t: f32) -> Self {
        Self {
            crater_opacity: 0.55 + (t * 2.0).sin() * 0.25,
            crater_scale: 1.0 + (t * 1.6).sin() * 0.06,
            plume_y: 9.0 + (t * 0.8).sin() * 0.6,
            plume_opacity: 0.25 + (t * 1.1).sin() * 0.1,
        }
    }
}

pub struct VolcanoSim {
    pub particles: ParticleSystem,
    pub embers: EmberField,
    pub cycle: PressureCycle,
    pub bindings: ScrollBindings,
    pub camera: CameraRig,
    pub shake: ScreenShake,
    config: SimConfig,
    orb_bases: Vec<Vec3>,
    pointer_target: Vec2,
    elapsed: f64,
    rng: StdRng,
}

impl VolcanoSim {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let embers = EmberField::new(config.ember_count, &mut rng);
        let cycle = PressureCycle::new(&mut rng);
        let orb_bases = (0..ORB_COUNT)
            .map(|_| {
                Vec3::new(
                    rng.gen::<f32>() * 3.0 - 1.5,
                    rng.gen::<f32>() * 1.6 - 0.8,
                    rng.gen::<f32>() * 2.0 - 1.0,
                )
            })
            .collect();
        Ok(Self {
            particles: ParticleSystem::new(),
            embers,
            cycle,
            bindings: ScrollBindings::new(),
            camera: CameraRig::default(),
            shake: ScreenShake::default(),
            config,
            orb_bases,
            pointer_target: Vec2::ZERO,
            elapsed: 0.0,
            rng,
        })
    }

    /// Simulated session time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Pointer position normalized to \[-1, 1\] on both axes.
    pub fn set_pointer_norm(&mut self, nx: f32, ny: f32) {
        self.pointer_target = pointer_rotation_target(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0));
    }

    /// Feed one named region's progress. Scrolling past the hero band forces
    /// an early charge with the short ramp.
    pub fn set_region_progress(&mut self, region: &str, progress: f32) {
        if let Some(RegionEvent::HeroLeft) = self.bindings.set_progress(region, progress) {
            log::info!("hero left, forcing pressure cycle");
            self.cycle.start_charge(true);
        }
    }

    /// Advance the whole simulation by one frame. Eruption side effects are
    /// reported through `events`; particle/ember/camera state is read back
    /// through the accessors afterwards.
    pub fn tick(&mut self, dt: Duration, events: &mut SimEvents) {
        let dt = dt.as_secs_f32().min(MAX_STEP_SEC);
        self.elapsed += dt as f64;

        // state machine first: a burst spawned here renders this same frame
        if self.cycle.tick(dt, self.elapsed, &mut self.rng) {
            let fragments = self
                .particles
                .spawn_fragments(&self.config.fragment_burst, &mut self.rng);
            let meteorites = self
                .particles
                .spawn_meteorites(&self.config.meteorite_burst, &mut self.rng);
            self.shake.trigger();
            self.embers.trigger_pulse();
            events.push(SimEvent::Eruption {
                fragments,
                meteorites,
            });
        }

        self.particles.update(dt);
        self.embers.update(dt);
        self.shake.tick(dt);

        let target = self.pointer_target + self.bindings.rotation_offset();
        self.camera.update(dt, target);
    }

    #[inline]
    pub fn visuals(&self) -> PressureVisuals {
        PressureVisuals::from_level(self.cycle.pressure())
    }

    #[inline]
    pub fn breathing(&self) -> Breathing {
        Breathing::at(self.elapsed as f32)
    }

    /// Whole-ember-field spin angle, radians.
    #[inline]
    pub fn ember_spin(&self) -> f32 {
        (self.elapsed * EMBER_SPIN_RATE as f64) as f32
    }

    /// Current positions of the floating orbs (base position plus bob).
    pub fn orb_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let t = self.elapsed as f32;
        self.orb_bases.iter().enumerate().map(move |(i, base)| {
            Vec3::new(
                base.x,
                base.y + (t + i as f32).sin() * ORB_BOB_AMPLITUDE,
                base.z,
            )
        })
    }
}

/// One billboard instance, laid out for the sprite vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub emissive: f32,
}

/// Fill `out` with every renderable particle for this frame: embers (spun
/// about Y as one field), fragments, meteorites, and the floating orbs.
pub fn build_sprite_instances(sim: &VolcanoSim, out: &mut Vec<SpriteInstance>) {
    out.clear();
    out.reserve(sim.embers.len() + sim.particles.active_count() + ORB_COUNT);

    let spin = sim.ember_spin();
    let (sin_s, cos_s) = spin.sin_cos();
    let ember_size = sim.embers.point_size();
    for e in sim.embers.embers() {
        let p = e.position;
        out.push(SpriteInstance {
            pos: [p.x * cos_s - p.z * sin_s, p.y, p.x * sin_s + p.z * cos_s],
            scale: ember_size,
            color: [1.0, 0.5 + 0.5 * e.warmth, 0.0, 0.8],
            emissive: 0.6,
        });
    }

    for p in sim.particles.fragments() {
        out.push(SpriteInstance {
            pos: p.position.to_array(),
            scale: 0.16,
            color: [0.9, 0.32 + 0.2 * p.seed, 0.05, p.fade()],
            emissive: p.emissive(),
        });
    }

    for p in sim.particles.meteorites() {
        out.push(SpriteInstance {
            pos: p.position.to_array(),
            scale: 0.22,
            color: [1.0, 0.45 + 0.25 * p.seed, 0.1, p.fade()],
            emissive: p.emissive(),
        });
    }

    for (i, pos) in sim.orb_positions().enumerate() {
        let phase = (sim.elapsed() as f32 * 0.7 + i as f32 * TAU / ORB_COUNT as f32).sin();
        out.push(SpriteInstance {
            pos: pos.to_array(),
            scale: ORB_RADIUS * 2.0,
            color: [1.0, 0.48, 0.0, 0.95],
            emissive: 1.5 + 0.3 * phase,
        });
    }
}
