//! Cursor-driven force fields.
//!
//! The host's picking routine casts the pointer ray against an
//! invisible reference plane and hands the hit to the engine as a
//! [`CursorField`]. While a force mode is engaged, every particle
//! within the interaction threshold of that point is pushed away from
//! it (repulsion) or pulled toward it (attraction), with linear
//! falloff to zero at the threshold boundary and an independent random
//! factor per axis so the displacement looks organic rather than
//! smooth.
//!
//! Two GUI triggers control the mode; holding both resolves to
//! [`ForceMode::Idle`], never to whichever was pressed last. An
//! inactive cursor makes the whole application a no-op — a pick that
//! hasn't happened yet must not become a force centered at the origin.
//!
//! The displacement is intentionally not reversible or norm-preserving:
//! repeated frames keep pushing or pulling.

use crate::field::ParticleField;
use crate::spawn::SpawnContext;
use crate::Vec3;

/// Default interaction radius around the cursor point.
pub const DEFAULT_THRESHOLD: f32 = 1.0;

/// Default displacement gain.
pub const DEFAULT_STRENGTH: f32 = 0.1;

/// Where the pointer ray currently hits the reference plane, if it
/// does. Produced externally; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CursorField {
    /// No pick has happened yet, or the pointer left the surface.
    #[default]
    Inactive,
    /// The pick point in world space.
    Active(Vec3),
}

impl CursorField {
    /// The pick point, if active.
    #[inline]
    pub fn point(&self) -> Option<Vec3> {
        match self {
            CursorField::Inactive => None,
            CursorField::Active(p) => Some(*p),
        }
    }

    /// Whether a pick point is available.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, CursorField::Active(_))
    }
}

/// The force sub-state for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceMode {
    /// No force applied.
    #[default]
    Idle,
    /// Push particles away from the cursor.
    Repel,
    /// Pull particles toward the cursor.
    Attract,
}

impl ForceMode {
    /// Resolve the two independent GUI triggers into a mode.
    ///
    /// Exactly one trigger engages its force; both at once resolve to
    /// `Idle` (mutual exclusion, not last-writer-wins).
    pub fn resolve(repelling: bool, attracting: bool) -> ForceMode {
        match (repelling, attracting) {
            (true, false) => ForceMode::Repel,
            (false, true) => ForceMode::Attract,
            _ => ForceMode::Idle,
        }
    }
}

/// Threshold-bounded force field configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceField {
    /// Interaction radius: particles farther than this from the cursor
    /// are unaffected.
    pub threshold: f32,
    /// Displacement gain applied inside the threshold.
    pub strength: f32,
}

impl ForceField {
    /// Force field with the stock threshold and strength.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strength: DEFAULT_STRENGTH,
        }
    }

    /// Set the interaction radius.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the displacement gain.
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Apply one frame of force to every particle inside the threshold.
    ///
    /// `scale` falls off linearly from 1 at the cursor to 0 at the
    /// threshold boundary; each axis is additionally modulated by an
    /// independent `U(0,1)` draw. No-ops for an idle mode or an
    /// inactive cursor.
    pub fn apply(
        &self,
        field: &mut ParticleField,
        cursor: CursorField,
        mode: ForceMode,
        ctx: &mut SpawnContext,
    ) {
        let Some(center) = cursor.point() else {
            return;
        };
        if mode == ForceMode::Idle {
            return;
        }

        for i in 0..field.len() {
            let p = field.position(i);
            let offset = p - center;
            let dist = offset.length();
            if dist >= self.threshold {
                continue;
            }

            let dir = match mode {
                ForceMode::Repel => offset,
                ForceMode::Attract => -offset,
                ForceMode::Idle => unreachable!(),
            };
            let scale = (self.threshold - dist) / self.threshold;
            let random = Vec3::new(ctx.random(), ctx.random(), ctx.random());

            field.set_position(i, p + dir * scale * self.strength * random);
        }
    }
}

impl Default for ForceField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(points: &[Vec3]) -> ParticleField {
        let mut field = ParticleField::new(points.len(), Vec3::ZERO);
        for (i, p) in points.iter().enumerate() {
            field.set_position(i, *p);
        }
        field
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(ForceMode::resolve(false, false), ForceMode::Idle);
        assert_eq!(ForceMode::resolve(true, false), ForceMode::Repel);
        assert_eq!(ForceMode::resolve(false, true), ForceMode::Attract);
        // Both triggers held: mutual exclusion wins
        assert_eq!(ForceMode::resolve(true, true), ForceMode::Idle);
    }

    #[test]
    fn test_inactive_cursor_is_noop() {
        let mut field = field_with(&[Vec3::new(0.1, 0.0, 0.0)]);
        let before = field.positions().to_vec();
        let mut ctx = SpawnContext::seeded(1);

        ForceField::new().apply(&mut field, CursorField::Inactive, ForceMode::Repel, &mut ctx);
        assert_eq!(field.positions(), &before[..]);
    }

    #[test]
    fn test_idle_mode_is_noop() {
        let mut field = field_with(&[Vec3::new(0.1, 0.0, 0.0)]);
        let before = field.positions().to_vec();
        let mut ctx = SpawnContext::seeded(1);

        let cursor = CursorField::Active(Vec3::ZERO);
        ForceField::new().apply(&mut field, cursor, ForceMode::Idle, &mut ctx);
        assert_eq!(field.positions(), &before[..]);
    }

    #[test]
    fn test_boundary_particle_receives_no_displacement() {
        // Exactly at the threshold: scale is zero
        let mut field = field_with(&[Vec3::new(1.0, 0.0, 0.0)]);
        let before = field.positions().to_vec();
        let mut ctx = SpawnContext::seeded(2);

        let force = ForceField::new().with_threshold(1.0);
        force.apply(&mut field, CursorField::Active(Vec3::ZERO), ForceMode::Repel, &mut ctx);
        assert_eq!(field.positions(), &before[..]);
    }

    #[test]
    fn test_particle_beyond_threshold_untouched() {
        let mut field = field_with(&[Vec3::new(5.0, 5.0, 5.0)]);
        let before = field.positions().to_vec();
        let mut ctx = SpawnContext::seeded(2);

        let force = ForceField::new();
        force.apply(&mut field, CursorField::Active(Vec3::ZERO), ForceMode::Attract, &mut ctx);
        assert_eq!(field.positions(), &before[..]);
    }

    #[test]
    fn test_particle_at_cursor_stays_put() {
        // scale is maximal there, but the displacement direction is the
        // zero vector, so nothing can move
        let cursor_point = Vec3::new(0.3, 0.0, -0.2);
        let mut field = field_with(&[cursor_point]);
        let mut ctx = SpawnContext::seeded(3);

        ForceField::new().apply(
            &mut field,
            CursorField::Active(cursor_point),
            ForceMode::Repel,
            &mut ctx,
        );
        assert_eq!(field.position(0), cursor_point);
    }

    #[test]
    fn test_repel_pushes_outward() {
        let cursor = CursorField::Active(Vec3::ZERO);
        let mut field = field_with(&[Vec3::new(0.4, 0.1, -0.2)]);
        let before = field.position(0).length();
        let mut ctx = SpawnContext::seeded(4);

        for _ in 0..10 {
            ForceField::new().apply(&mut field, cursor, ForceMode::Repel, &mut ctx);
        }
        assert!(field.position(0).length() > before);
    }

    #[test]
    fn test_attract_pulls_inward() {
        let cursor = CursorField::Active(Vec3::ZERO);
        let mut field = field_with(&[Vec3::new(0.4, 0.1, -0.2)]);
        let before = field.position(0).length();
        let mut ctx = SpawnContext::seeded(4);

        for _ in 0..10 {
            ForceField::new().apply(&mut field, cursor, ForceMode::Attract, &mut ctx);
        }
        assert!(field.position(0).length() < before);
    }

    #[test]
    fn test_falloff_weakens_with_distance() {
        // Two particles on the same ray, one near, one far; over many
        // stochastic applications the near one must move farther
        let cursor = CursorField::Active(Vec3::ZERO);
        let near_start = Vec3::new(0.1, 0.0, 0.0);
        let far_start = Vec3::new(0.8, 0.0, 0.0);

        let mut near_total = 0.0;
        let mut far_total = 0.0;
        let mut ctx = SpawnContext::seeded(5);
        for _ in 0..50 {
            let mut field = field_with(&[near_start, far_start]);
            ForceField::new().apply(&mut field, cursor, ForceMode::Repel, &mut ctx);
            near_total += (field.position(0) - near_start).length() / near_start.length();
            far_total += (field.position(1) - far_start).length() / far_start.length();
        }
        assert!(near_total > far_total);
    }
}
