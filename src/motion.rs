//! Per-frame motion for the main field.
//!
//! Two advance rules, one active per tick depending on the variant:
//!
//! - **Spiral advance** — a stateless rigid-ish rotation of every
//!   `(x, z)` pair about the field's vertical axis. Particles farther
//!   from the center turn slower, which reads as differential rotation
//!   even though nothing here is Keplerian.
//! - **Orbit advance** — the one stateful rule: each particle's
//!   [`OrbitRecord`] angle integrates over time and the position is
//!   re-projected onto its ellipse. The semi-axes never change, so a
//!   particle stays on the ellipse it was generated on.
//!
//! Both rules accept an arbitrary `delta_time`; the per-frame tuning
//! constants are rates at a 60 Hz reference frame, so the animation
//! speed is independent of the host's actual frame pacing. A zero
//! `delta_time` touches nothing.

use crate::field::{OrbitRecord, ParticleField};
use crate::Vec3;
use std::f32::consts::PI;

/// Angular step of the spiral advance per reference frame, at the
/// field center.
pub const SPIRAL_STEP: f32 = PI / 900.0;

/// Fraction of the rotation rate lost at the outer rim.
pub const ROTATION_LAG: f32 = 0.8;

/// Base angular velocity of elliptical orbits, radians per second.
pub const ORBIT_RATE: f32 = PI / 20.0;

/// Semi-major-axis normalization for the elliptical variant's lag.
pub const ELLIPTICAL_NORM: f32 = 10.0;

/// Frame rate the per-frame constants were tuned at.
pub(crate) const REFERENCE_HZ: f32 = 60.0;

/// Rotate every particle about the field's vertical axis.
///
/// `radius` is the generation radius used to normalize the lag: a
/// particle at the rim turns at `1 − ROTATION_LAG` times the center
/// rate. The update is stateless; rotation accumulates only through
/// the buffer itself.
pub fn advance_spiral(field: &mut ParticleField, radius: f32, speed: f32, delta_time: f32) {
    if delta_time == 0.0 {
        return;
    }
    let center = field.center();
    let base = SPIRAL_STEP * speed * delta_time * REFERENCE_HZ;

    for i in 0..field.len() {
        let p = field.position(i);
        let x = p.x - center.x;
        let z = p.z - center.z;
        let d = (x * x + z * z).sqrt();

        let lag = if radius > 0.0 {
            1.0 - (d / radius) * ROTATION_LAG
        } else {
            1.0
        };
        let (sin, cos) = (base * lag).sin_cos();

        field.set_position(
            i,
            Vec3::new(
                center.x + x * cos - z * sin,
                p.y,
                center.z + x * sin + z * cos,
            ),
        );
    }
}

/// Advance every orbit record and re-project its particle.
///
/// `norm` is the characteristic scale dividing the semi-major axis for
/// the lag term: [`ELLIPTICAL_NORM`] for elliptical fields, the disk
/// radius for quasar disks. Vertical positions are fixed at generation
/// and left untouched.
pub fn advance_orbits(
    field: &mut ParticleField,
    orbits: &mut [OrbitRecord],
    norm: f32,
    speed: f32,
    delta_time: f32,
) {
    if delta_time == 0.0 {
        return;
    }
    let center = field.center();

    for (i, orbit) in orbits.iter_mut().enumerate() {
        let lag = if norm > 0.0 {
            1.0 - (orbit.semi_major / norm) * ROTATION_LAG
        } else {
            1.0
        };
        orbit.angle += lag * ORBIT_RATE * speed * delta_time;

        let p = field.position(i);
        field.set_position(
            i,
            Vec3::new(
                center.x + orbit.semi_major * orbit.angle.cos(),
                p.y,
                center.z + orbit.semi_minor * orbit.angle.sin(),
            ),
        );
    }
}
