//! Spawn context for particle generation.
//!
//! Every generator draws its randomness through a [`SpawnContext`]
//! rather than a global RNG, so a field can be regenerated
//! bit-for-bit from a pinned seed. One context serves a whole
//! `generate` call.
//!
//! ```ignore
//! let mut ctx = SpawnContext::seeded(42);
//! let radius = ctx.random() * max_radius;
//! let jitter = ctx.signed() * ctx.falloff(5.0) * 0.1 * radius;
//! ```

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Seeded random source with helpers for the spawn patterns the galaxy
/// variants share.
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context from an optional seed.
    ///
    /// `Some(seed)` gives reproducible generation; `None` seeds from
    /// system entropy for a different field every run.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self {
                rng: SmallRng::from_entropy(),
            },
        }
    }

    /// Create a context with a fixed seed. Same seed, same field.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // ========== Random primitives ==========

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// `+1.0` or `-1.0`, each with probability 0.5.
    #[inline]
    pub fn signed(&mut self) -> f32 {
        if self.rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    /// Power-law falloff draw: `U(0,1)^power`.
    ///
    /// Higher powers concentrate samples near zero. The spiral arms use
    /// power 5 for jitter (tight arms, sparse outliers) and the
    /// elliptical radius uses power 5 for a dense core.
    #[inline]
    pub fn falloff(&mut self, power: f32) -> f32 {
        self.random().powf(power)
    }

    // ========== Angles ==========

    /// Random angle in `[0, 2π)`.
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.random() * TAU
    }

    /// Polar angle `acos(2U − 1)`, distributed so that directions are
    /// uniform on the sphere (no pole clustering).
    #[inline]
    pub fn polar_angle(&mut self) -> f32 {
        (2.0 * self.random() - 1.0).acos()
    }

    // ========== Position helpers ==========

    /// Random point inside a cube of given half-size, centered at origin.
    pub fn random_in_cube(&mut self, half_size: f32) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(-half_size..half_size),
            self.rng.gen_range(-half_size..half_size),
            self.rng.gen_range(-half_size..half_size),
        )
    }

    /// Random point in the unit cube `[0, 1)³`.
    pub fn random_in_unit_cube(&mut self) -> Vec3 {
        Vec3::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_determinism() {
        let mut a = SpawnContext::seeded(7);
        let mut b = SpawnContext::seeded(7);
        for _ in 0..64 {
            assert_eq!(a.random().to_bits(), b.random().to_bits());
        }
    }

    #[test]
    fn test_random_in_range() {
        let mut ctx = SpawnContext::seeded(1);
        for _ in 0..100 {
            let v = ctx.random();
            assert!((0.0..1.0).contains(&v));
            let r = ctx.random_range(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&r));
        }
    }

    #[test]
    fn test_signed_is_unit() {
        let mut ctx = SpawnContext::seeded(2);
        let mut saw_pos = false;
        let mut saw_neg = false;
        for _ in 0..100 {
            let s = ctx.signed();
            assert!(s == 1.0 || s == -1.0);
            saw_pos |= s > 0.0;
            saw_neg |= s < 0.0;
        }
        assert!(saw_pos && saw_neg);
    }

    #[test]
    fn test_falloff_concentrates() {
        let mut ctx = SpawnContext::seeded(3);
        let n = 2000;
        let mean: f32 = (0..n).map(|_| ctx.falloff(5.0)).sum::<f32>() / n as f32;
        // E[U^5] = 1/6; anything close to uniform's 1/2 would be wrong
        assert!(mean < 0.25, "mean {} not concentrated near zero", mean);
    }

    #[test]
    fn test_polar_angle_range() {
        let mut ctx = SpawnContext::seeded(4);
        for _ in 0..100 {
            let phi = ctx.polar_angle();
            assert!((0.0..=std::f32::consts::PI).contains(&phi));
        }
    }

    #[test]
    fn test_cube_bounds() {
        let mut ctx = SpawnContext::seeded(5);
        for _ in 0..100 {
            let p = ctx.random_in_cube(0.5);
            assert!(p.x.abs() <= 0.5 && p.y.abs() <= 0.5 && p.z.abs() <= 0.5);

            let q = ctx.random_in_unit_cube();
            assert!((0.0..1.0).contains(&q.x));
            assert!((0.0..1.0).contains(&q.y));
            assert!((0.0..1.0).contains(&q.z));
        }
    }
}
