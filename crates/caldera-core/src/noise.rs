//! Procedural noise kernels mirrored by the WGSL scene shader.
//!
//! These are plain floating-point functions so the same fields can be
//! evaluated host-side (tests, CPU-driven placement) and in the fragment
//! shader without the two drifting apart.

use glam::{Vec2, Vec3};

/// GLSL-style fract: always in \[0, 1), unlike `f32::fract` for negatives.
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn hash2(p: Vec2) -> f32 {
    fract((p.dot(Vec2::new(127.1, 311.7))).sin() * 43758.547)
}

#[inline]
pub fn hash3(p: Vec3) -> f32 {
    fract((p.dot(Vec3::new(12.9898, 78.233, 45.164))).sin() * 43758.547)
}

/// 2-D value noise with Hermite interpolation. Output in \[0, 1).
pub fn value_noise2(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let a = hash2(i);
    let b = hash2(i + Vec2::new(1.0, 0.0));
    let c = hash2(i + Vec2::new(0.0, 1.0));
    let d = hash2(i + Vec2::new(1.0, 1.0));
    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);
    a * (1.0 - u.x) * (1.0 - u.y) + b * u.x * (1.0 - u.y) + c * (1.0 - u.x) * u.y + d * u.x * u.y
}

/// Fractal brownian motion over [`value_noise2`]: 4 octaves, lacunarity 2,
/// gain 0.5, renormalized to \[0, 1).
pub fn fbm2(p: Vec2) -> f32 {
    let mut sum = 0.0;
    let mut amp = 0.5;
    let mut q = p;
    for _ in 0..4 {
        sum += amp * value_noise2(q);
        q *= 2.0;
        amp *= 0.5;
    }
    // amplitudes sum to 0.9375
    sum / 0.9375
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_stay_in_unit_range() {
        for ix in -20..20 {
            for iy in -20..20 {
                let p = Vec2::new(ix as f32 * 0.73, iy as f32 * 1.31);
                let h = hash2(p);
                assert!((0.0..1.0).contains(&h), "hash2({p:?}) = {h}");
                let h3 = hash3(p.extend(ix as f32 * 0.11));
                assert!((0.0..1.0).contains(&h3), "hash3 out of range: {h3}");
            }
        }
    }

    #[test]
    fn value_noise_is_deterministic_and_bounded() {
        for i in 0..200 {
            let p = Vec2::new(i as f32 * 0.17 - 10.0, i as f32 * 0.29 - 20.0);
            let n = value_noise2(p);
            assert!((0.0..1.0).contains(&n), "noise({p:?}) = {n}");
            assert_eq!(n, value_noise2(p));
        }
    }

    #[test]
    fn value_noise_matches_lattice_hash_at_integers() {
        for ix in -5..5 {
            for iy in -5..5 {
                let p = Vec2::new(ix as f32, iy as f32);
                assert!((value_noise2(p) - hash2(p)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn noise_is_continuous_at_small_steps() {
        let eps = 1e-3;
        for i in 0..100 {
            let p = Vec2::new(i as f32 * 0.31, i as f32 * 0.47);
            let dn = (value_noise2(p + Vec2::splat(eps)) - value_noise2(p)).abs();
            assert!(dn < 0.05, "discontinuity at {p:?}: {dn}");
        }
    }

    #[test]
    fn fbm_is_bounded() {
        for i in 0..200 {
            let p = Vec2::new(i as f32 * 0.13, -(i as f32) * 0.07);
            let n = fbm2(p);
            assert!((0.0..1.0).contains(&n), "fbm({p:?}) = {n}");
        }
    }
}
