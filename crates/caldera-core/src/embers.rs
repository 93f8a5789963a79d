//! Ambient ember field: a fixed pool that drifts and wraps, never expiring.

use crate::constants::*;
use crate::ease::ease_in_out_cubic;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Ember {
    pub position: Vec3,
    pub drift: Vec3,
    /// Color warmth in \[0, 1\]: 0 deep orange, 1 bright yellow.
    pub warmth: f32,
}

pub struct EmberField {
    embers: Vec<Ember>,
    pulse_t: f32,
    pulse_active: bool,
}

impl EmberField {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let embers = (0..count)
            .map(|_| Ember {
                position: Vec3::new(
                    (rng.gen::<f32>() * 2.0 - 1.0) * EMBER_HALF_EXTENT_XZ,
                    EMBER_MIN_Y + rng.gen::<f32>() * (EMBER_MAX_Y - EMBER_MIN_Y),
                    (rng.gen::<f32>() * 2.0 - 1.0) * EMBER_HALF_EXTENT_XZ,
                ),
                drift: Vec3::new(
                    (rng.gen::<f32>() * 2.0 - 1.0) * EMBER_WANDER,
                    EMBER_RISE_MIN + rng.gen::<f32>() * (EMBER_RISE_MAX - EMBER_RISE_MIN),
                    (rng.gen::<f32>() * 2.0 - 1.0) * EMBER_WANDER,
                ),
                warmth: rng.gen(),
            })
            .collect();
        Self {
            embers,
            pulse_t: 0.0,
            pulse_active: false,
        }
    }

    #[inline]
    pub fn embers(&self) -> &[Ember] {
        &self.embers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.embers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.embers.is_empty()
    }

    /// Advance drift and wrap each axis at the domain bounds. The pool size
    /// never changes.
    pub fn update(&mut self, dt: f32) {
        for e in &mut self.embers {
            e.position += e.drift * dt;
            e.position.x = wrap(e.position.x, -EMBER_HALF_EXTENT_XZ, EMBER_HALF_EXTENT_XZ);
            e.position.y = wrap(e.position.y, EMBER_MIN_Y, EMBER_MAX_Y);
            e.position.z = wrap(e.position.z, -EMBER_HALF_EXTENT_XZ, EMBER_HALF_EXTENT_XZ);
        }
        if self.pulse_active {
            self.pulse_t += dt;
            if self.pulse_t >= 2.0 * EMBER_PULSE_HALF_SEC {
                self.pulse_active = false;
            }
        }
    }

    /// Spike the point size briefly; eruptions call this.
    pub fn trigger_pulse(&mut self) {
        self.pulse_t = 0.0;
        self.pulse_active = true;
    }

    /// Current render point size: base, spiking to the peak and back over
    /// two eased half-periods.
    pub fn point_size(&self) -> f32 {
        if !self.pulse_active {
            return EMBER_SIZE_BASE;
        }
        let u = if self.pulse_t < EMBER_PULSE_HALF_SEC {
            self.pulse_t / EMBER_PULSE_HALF_SEC
        } else {
            (2.0 - self.pulse_t / EMBER_PULSE_HALF_SEC).max(0.0)
        };
        EMBER_SIZE_BASE + (EMBER_SIZE_PEAK - EMBER_SIZE_BASE) * ease_in_out_cubic(u)
    }
}

/// Teleport to the opposite bound once a coordinate crosses either edge.
#[inline]
fn wrap(v: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if v > max {
        v - span
    } else if v < min {
        v + span
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_teleports_to_opposite_bound() {
        assert_eq!(wrap(8.5, -8.0, 8.0), -7.5);
        assert_eq!(wrap(-8.25, -8.0, 8.0), 7.75);
        assert_eq!(wrap(3.0, -8.0, 8.0), 3.0);
    }

    #[test]
    fn pulse_returns_to_base_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = EmberField::new(4, &mut rng);
        assert_eq!(field.point_size(), EMBER_SIZE_BASE);
        field.trigger_pulse();
        let mut peak = 0.0_f32;
        for _ in 0..60 {
            field.update(1.0 / 120.0);
            peak = peak.max(field.point_size());
        }
        assert!(peak > EMBER_SIZE_BASE + 0.05);
        assert!(peak <= EMBER_SIZE_PEAK + 1e-4);
        assert_eq!(field.point_size(), EMBER_SIZE_BASE);
    }
}
