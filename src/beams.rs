//! Quasar beam companion field.
//!
//! The quasar variant pairs its accretion disk with two polar jets: a
//! fixed-size particle field streaming out of the disk plane along ±y.
//! The beams are generated and advanced independently of the main
//! field — they have their own count, their own update rule, and no
//! orbit records.
//!
//! Each particle drifts toward its beam tip, decelerating as it
//! approaches, and once past `±beam_height` restarts from a small
//! jitter near the disk plane. The loop is implicit: there is no
//! per-particle velocity or lifetime, just position.

use crate::galaxy::GalaxyConfig;
use crate::field::ParticleField;
use crate::motion::REFERENCE_HZ;
use crate::spawn::SpawnContext;
use crate::Vec3;

/// Particles per beam pair, independent of the disk's count.
pub const BEAM_COUNT: usize = 2_000;

/// Radius of the beam cylinder.
pub const BEAM_RADIUS: f32 = 0.05;

/// The ramp key is `height / 2.5`, so beams taller than 2.5 saturate
/// to the outside color at the tip.
const COLOR_KEY_SCALE: f32 = 2.5;

/// Per-frame drift factor toward the beam tip, scaled by the distance
/// still to travel.
const DRIFT_FACTOR: f32 = 0.004;

/// Per-frame drift floor so particles cannot stall at the tip.
const DRIFT_MIN: f32 = 0.001;

/// Magnitude of the near-plane jitter a particle restarts from after
/// crossing the tip.
const RESTART_JITTER: f32 = 0.05;

/// Generate the beam field: random points inside a thin vertical
/// cylinder, mirrored to both jets, colored by unsigned height.
pub fn spawn_beams(config: &GalaxyConfig, ctx: &mut SpawnContext) -> ParticleField {
    let mut field = ParticleField::new(BEAM_COUNT, config.center).with_colors();

    for i in 0..BEAM_COUNT {
        let r = ctx.random() * BEAM_RADIUS;
        let theta = ctx.random_angle();
        let height = ctx.random() * config.beam_height;
        let side = ctx.signed();

        let local = Vec3::new(r * theta.cos(), side * height, r * theta.sin());
        field.set_position(i, config.center + local);
        field.set_color(i, config.ramp.sample(height / COLOR_KEY_SCALE));
    }
    field
}

/// Stream every beam particle toward its tip, looping past
/// `±beam_height` back to a small jitter near the disk plane.
///
/// The per-frame drift constants are scaled by `delta_time` at the
/// 60 Hz reference, so pacing doesn't change the apparent stream rate.
pub fn advance_beams(
    field: &mut ParticleField,
    beam_height: f32,
    ctx: &mut SpawnContext,
    delta_time: f32,
) {
    if delta_time == 0.0 {
        return;
    }
    let center = field.center();
    let scale = delta_time * REFERENCE_HZ;

    for i in 0..field.len() {
        let p = field.position(i);
        let mut y = p.y - center.y;

        if y <= 0.0 {
            y -= (ctx.random() * DRIFT_FACTOR * (beam_height + y) + DRIFT_MIN) * scale;
            if y < -beam_height {
                y = -ctx.random() * RESTART_JITTER;
            }
        } else {
            y += (ctx.random() * DRIFT_FACTOR * (beam_height - y) + DRIFT_MIN) * scale;
            if y > beam_height {
                y = ctx.random() * RESTART_JITTER;
            }
        }

        field.set_position(i, Vec3::new(p.x, center.y + y, p.z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn beam_config() -> GalaxyConfig {
        GalaxyConfig::new().with_beam_height(2.5).with_seed(11)
    }

    #[test]
    fn test_spawn_count_and_bounds() {
        let config = beam_config();
        let mut ctx = SpawnContext::seeded(11);
        let field = spawn_beams(&config, &mut ctx);

        assert_eq!(field.len(), BEAM_COUNT);
        assert!(field.colors().is_some());

        for i in 0..field.len() {
            let p = field.position(i);
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            assert!(planar <= BEAM_RADIUS + 1e-6);
            assert!(p.y.abs() <= 2.5);
        }
    }

    #[test]
    fn test_both_jets_populated() {
        let config = beam_config();
        let mut ctx = SpawnContext::seeded(11);
        let field = spawn_beams(&config, &mut ctx);

        let up = (0..field.len()).filter(|&i| field.position(i).y > 0.0).count();
        assert!(up > BEAM_COUNT / 4);
        assert!(up < BEAM_COUNT * 3 / 4);
    }

    #[test]
    fn test_advance_zero_delta_is_noop() {
        let config = beam_config();
        let mut ctx = SpawnContext::seeded(11);
        let mut field = spawn_beams(&config, &mut ctx);

        let before = field.positions().to_vec();
        advance_beams(&mut field, 2.5, &mut ctx, 0.0);
        assert_eq!(field.positions(), &before[..]);
    }

    #[test]
    fn test_drift_moves_away_from_plane() {
        let mut field = ParticleField::new(2, Vec3::ZERO);
        field.set_position(0, Vec3::new(0.0, 0.1, 0.0));
        field.set_position(1, Vec3::new(0.0, -0.1, 0.0));
        let mut ctx = SpawnContext::seeded(3);

        advance_beams(&mut field, 2.5, &mut ctx, DT);
        assert!(field.position(0).y > 0.1);
        assert!(field.position(1).y < -0.1);
    }

    #[test]
    fn test_height_bounded_over_many_frames() {
        let height = 2.5;
        let config = beam_config();
        let mut ctx = SpawnContext::seeded(11);
        let mut field = spawn_beams(&config, &mut ctx);

        // Worst single step happens right at the disk plane
        let bound = height + DRIFT_FACTOR * height + DRIFT_MIN;
        for _ in 0..2_000 {
            advance_beams(&mut field, height, &mut ctx, DT);
            for i in 0..field.len() {
                assert!(field.position(i).y.abs() <= bound);
            }
        }
    }

    #[test]
    fn test_particles_loop_back() {
        let mut field = ParticleField::new(1, Vec3::ZERO);
        field.set_position(0, Vec3::new(0.0, 2.49, 0.0));
        let mut ctx = SpawnContext::seeded(4);

        // A particle this close to the tip must wrap within a few frames
        let mut wrapped = false;
        for _ in 0..5_000 {
            advance_beams(&mut field, 2.5, &mut ctx, DT);
            if field.position(0).y < 1.0 {
                wrapped = true;
                break;
            }
        }
        assert!(wrapped, "particle never looped back to the disk plane");
    }

    #[test]
    fn test_planar_coordinates_untouched() {
        let mut field = ParticleField::new(1, Vec3::ZERO);
        field.set_position(0, Vec3::new(0.02, 0.5, -0.03));
        let mut ctx = SpawnContext::seeded(5);

        for _ in 0..100 {
            advance_beams(&mut field, 2.5, &mut ctx, DT);
        }
        let p = field.position(0);
        assert_eq!(p.x, 0.02);
        assert_eq!(p.z, -0.03);
    }
}
