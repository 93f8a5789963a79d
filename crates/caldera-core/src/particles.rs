//! Transient particle lifecycle: fragment and meteorite bursts.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
    pub life: f32,
    /// Per-particle random in \[0, 1), used for color variation.
    pub seed: f32,
}

impl Particle {
    /// Remaining-life factor, clamped so late frames never go negative.
    #[inline]
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.life).max(0.0)
    }

    #[inline]
    pub fn emissive(&self) -> f32 {
        self.fade() * FRAGMENT_EMISSIVE_GAIN
    }
}

/// Where and how a burst emits its particles.
#[derive(Clone, Debug)]
pub enum Emission {
    /// Radial ring burst from a single origin with upward bias.
    Fountain { origin: Vec3 },
    /// Spawn across an elevated disc, falling with lateral drift.
    Rain {
        center: Vec3,
        radius: f32,
        height: (f32, f32),
    },
}

#[derive(Clone, Debug)]
pub struct BurstConfig {
    pub count: usize,
    pub emission: Emission,
    /// Horizontal speed range.
    pub lateral_speed: (f32, f32),
    /// Upward speed range for fountains; downward magnitude for rain.
    pub vertical_speed: (f32, f32),
    pub life: (f32, f32),
}

impl BurstConfig {
    pub fn fragments() -> Self {
        Self {
            count: FRAGMENT_BURST_COUNT,
            emission: Emission::Fountain {
                origin: core_position(),
            },
            lateral_speed: (FRAGMENT_LATERAL_SPEED_MIN, FRAGMENT_LATERAL_SPEED_MAX),
            vertical_speed: (FRAGMENT_UP_SPEED_MIN, FRAGMENT_UP_SPEED_MAX),
            life: (FRAGMENT_LIFE_MIN, FRAGMENT_LIFE_MAX),
        }
    }

    pub fn meteorites() -> Self {
        Self {
            count: METEORITE_BURST_COUNT,
            emission: Emission::Rain {
                center: core_position(),
                radius: METEORITE_SPAWN_RADIUS,
                height: (METEORITE_SPAWN_Y_MIN, METEORITE_SPAWN_Y_MAX),
            },
            lateral_speed: (0.0, METEORITE_LATERAL_SPEED_MAX),
            vertical_speed: (0.0, METEORITE_FALL_SPEED_MAX),
            life: (METEORITE_LIFE_MIN, METEORITE_LIFE_MAX),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyBurst);
        }
        if !(self.life.0 > 0.0 && self.life.1 >= self.life.0) {
            return Err(ConfigError::BadLifetime(self.life.0, self.life.1));
        }
        for range in [self.lateral_speed, self.vertical_speed] {
            if range.1 < range.0 {
                return Err(ConfigError::ReversedRange(range.0, range.1));
            }
        }
        if let Emission::Rain { radius, height, .. } = &self.emission {
            if *radius <= 0.0 || height.1 < height.0 {
                return Err(ConfigError::BadSpawnVolume);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("burst count must be non-zero")]
    EmptyBurst,
    #[error("lifetime range [{0}, {1}] must be positive and ordered")]
    BadLifetime(f32, f32),
    #[error("speed range [{0}, {1}] is reversed")]
    ReversedRange(f32, f32),
    #[error("rain spawn volume is degenerate")]
    BadSpawnVolume,
}

/// Active fragment and meteorite sets, advanced once per frame.
#[derive(Default)]
pub struct ParticleSystem {
    fragments: Vec<Particle>,
    meteorites: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fragments(&self) -> &[Particle] {
        &self.fragments
    }

    #[inline]
    pub fn meteorites(&self) -> &[Particle] {
        &self.meteorites
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.fragments.len() + self.meteorites.len()
    }

    pub fn spawn_fragments(&mut self, cfg: &BurstConfig, rng: &mut impl Rng) -> usize {
        spawn_into(&mut self.fragments, cfg, rng)
    }

    pub fn spawn_meteorites(&mut self, cfg: &BurstConfig, rng: &mut impl Rng) -> usize {
        spawn_into(&mut self.meteorites, cfg, rng)
    }

    /// Advance physics and retire expired particles.
    ///
    /// Traversal runs in reverse index order: `swap_remove` then only touches
    /// slots that were already visited, so no survivor is skipped or stepped
    /// twice within the frame.
    pub fn update(&mut self, dt: f32) {
        for i in (0..self.fragments.len()).rev() {
            let p = &mut self.fragments[i];
            p.velocity.y -= FRAGMENT_GRAVITY * dt;
            p.position += p.velocity * dt;
            p.age += dt;
            if p.age >= p.life {
                self.fragments.swap_remove(i);
            }
        }
        for i in (0..self.meteorites.len()).rev() {
            let p = &mut self.meteorites[i];
            p.velocity.y -= METEORITE_GRAVITY * dt;
            p.position += p.velocity * dt;
            p.age += dt;
            if p.age >= p.life || p.position.y < METEORITE_FLOOR_Y {
                self.meteorites.swap_remove(i);
            }
        }
    }
}

fn spawn_into(out: &mut Vec<Particle>, cfg: &BurstConfig, rng: &mut impl Rng) -> usize {
    debug_assert!(cfg.validate().is_ok());
    out.reserve(cfg.count);
    for _ in 0..cfg.count {
        let lateral = sample(cfg.lateral_speed, rng);
        let vertical = sample(cfg.vertical_speed, rng);
        let angle = rng.gen::<f32>() * TAU;
        let (position, velocity) = match &cfg.emission {
            Emission::Fountain { origin } => (
                *origin,
                Vec3::new(angle.cos() * lateral, vertical, angle.sin() * lateral),
            ),
            Emission::Rain {
                center,
                radius,
                height,
            } => {
                // sqrt keeps the disc density uniform
                let r = radius * rng.gen::<f32>().sqrt();
                let drift = rng.gen::<f32>() * TAU;
                (
                    Vec3::new(
                        center.x + angle.cos() * r,
                        sample(*height, rng),
                        center.z + angle.sin() * r,
                    ),
                    Vec3::new(drift.cos() * lateral, -vertical, drift.sin() * lateral),
                )
            }
        };
        out.push(Particle {
            position,
            velocity,
            age: 0.0,
            life: sample(cfg.life, rng),
            seed: rng.gen(),
        });
    }
    cfg.count
}

#[inline]
fn sample((lo, hi): (f32, f32), rng: &mut impl Rng) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}
