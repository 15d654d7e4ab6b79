//! Simulation facade: owns the active field and runs the frame loop's
//! engine side.
//!
//! The host render loop talks to exactly one [`Simulation`]: it feeds
//! pointer picks and GUI edits in, calls [`Simulation::tick`] once per
//! frame, and uploads the buffers whenever [`Simulation::take_redraw`]
//! reports a change.
//!
//! Two kinds of edits, two behaviors:
//! - **Generation-affecting** (variant, any [`GalaxyConfig`] field):
//!   go through [`set_variant`](Simulation::set_variant) /
//!   [`set_config`](Simulation::set_config), which synchronously
//!   rebuild the whole field. The rebuild is atomic — on a validation
//!   error the old field stays, untouched and visible.
//! - **Dynamics-affecting** (speed, force triggers, cursor): plain
//!   setters that take effect on the next tick, no regeneration.
//!
//! # Example
//!
//! ```ignore
//! use gpe::prelude::*;
//!
//! let mut sim = Simulation::new(Variant::Spiral, GalaxyConfig::new())?
//!     .with_speed(1.5);
//!
//! loop {
//!     let (_, delta) = time.update();
//!     sim.set_cursor(picker.hit_point());
//!     sim.tick(delta);
//!     if sim.take_redraw() {
//!         renderer.upload(sim.field().position_bytes());
//!     }
//! }
//! ```

use crate::beams::{advance_beams, spawn_beams};
use crate::error::ConfigError;
use crate::field::{OrbitRecord, ParticleField};
use crate::forces::{CursorField, ForceField, ForceMode};
use crate::galaxy::{generate_with, GalaxyConfig, Variant};
use crate::motion::{advance_orbits, advance_spiral, ELLIPTICAL_NORM};
use crate::spawn::SpawnContext;
use crate::time::PulseClock;
use crate::Vec3;

/// The engine-side state of one visualization: active variant, its
/// generated buffers, and the live dynamics settings.
pub struct Simulation {
    variant: Variant,
    config: GalaxyConfig,
    speed: f32,
    force: ForceField,
    repelling: bool,
    attracting: bool,
    cursor: CursorField,
    pulse: PulseClock,
    field: ParticleField,
    orbits: Vec<OrbitRecord>,
    beams: Option<ParticleField>,
    ctx: SpawnContext,
    needs_redraw: bool,
}

impl Simulation {
    /// Generate the initial field and stand the simulation up.
    pub fn new(variant: Variant, config: GalaxyConfig) -> Result<Self, ConfigError> {
        config.validate_for(variant)?;
        let mut ctx = SpawnContext::new(config.seed);
        let generated = generate_with(variant, &config, &mut ctx);
        let beams = (variant == Variant::QuasarDisk).then(|| spawn_beams(&config, &mut ctx));

        Ok(Self {
            variant,
            config,
            speed: 1.0,
            force: ForceField::new(),
            repelling: false,
            attracting: false,
            cursor: CursorField::Inactive,
            pulse: PulseClock::heartbeat(),
            field: generated.field,
            orbits: generated.orbits,
            beams,
            ctx,
            needs_redraw: true,
        })
    }

    /// Set the animation speed multiplier.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Replace the force-field settings.
    pub fn with_force_field(mut self, force: ForceField) -> Self {
        self.force = force;
        self
    }

    // ========== Generation-affecting edits ==========

    /// Switch to another variant, regenerating the field.
    ///
    /// On a validation error the current field, variant, and orbit
    /// records are left exactly as they were.
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), ConfigError> {
        let config = self.config.clone();
        self.regenerate(variant, config)
    }

    /// Replace the generation parameters, regenerating the field.
    pub fn set_config(&mut self, config: GalaxyConfig) -> Result<(), ConfigError> {
        self.regenerate(self.variant, config)
    }

    fn regenerate(&mut self, variant: Variant, config: GalaxyConfig) -> Result<(), ConfigError> {
        config.validate_for(variant)?;

        // Build everything before touching the live state, so the old
        // field stays visible until the new one fully exists.
        let mut ctx = SpawnContext::new(config.seed);
        let generated = generate_with(variant, &config, &mut ctx);
        let beams = (variant == Variant::QuasarDisk).then(|| spawn_beams(&config, &mut ctx));

        self.variant = variant;
        self.config = config;
        self.field = generated.field;
        self.orbits = generated.orbits;
        self.beams = beams;
        self.ctx = ctx;
        self.pulse = PulseClock::heartbeat();
        self.needs_redraw = true;
        Ok(())
    }

    // ========== Dynamics-affecting edits ==========

    /// Set the animation speed multiplier. Takes effect next tick.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Engage or release the repulsion trigger.
    pub fn set_repelling(&mut self, on: bool) {
        self.repelling = on;
    }

    /// Engage or release the attraction trigger.
    pub fn set_attracting(&mut self, on: bool) {
        self.attracting = on;
    }

    /// Feed the latest pointer pick point.
    pub fn set_cursor(&mut self, point: Vec3) {
        self.cursor = CursorField::Active(point);
    }

    /// Mark the cursor as gone (pointer left the surface).
    pub fn clear_cursor(&mut self) {
        self.cursor = CursorField::Inactive;
    }

    // ========== Frame loop ==========

    /// Advance the simulation by `delta_time` seconds.
    ///
    /// Runs the active variant's motion rule, then the cursor force
    /// field if a trigger is engaged, and raises the redraw flag. A
    /// zero delta leaves every buffer untouched.
    pub fn tick(&mut self, delta_time: f32) {
        if delta_time == 0.0 {
            return;
        }

        match self.variant {
            Variant::Spiral => {
                advance_spiral(&mut self.field, self.config.radius, self.speed, delta_time);
            }
            Variant::Elliptical => {
                advance_orbits(
                    &mut self.field,
                    &mut self.orbits,
                    ELLIPTICAL_NORM,
                    self.speed,
                    delta_time,
                );
            }
            Variant::QuasarDisk => {
                advance_orbits(
                    &mut self.field,
                    &mut self.orbits,
                    self.config.radius,
                    self.speed,
                    delta_time,
                );
                if let Some(beams) = self.beams.as_mut() {
                    advance_beams(beams, self.config.beam_height, &mut self.ctx, delta_time);
                }
            }
            Variant::Heartbeat => {
                // The pulse alternates expansion and contraction about
                // the field's own center, reusing the force rule.
                let mode = if self.pulse.advance(delta_time) {
                    ForceMode::Repel
                } else {
                    ForceMode::Attract
                };
                let center = CursorField::Active(self.field.center());
                self.force.apply(&mut self.field, center, mode, &mut self.ctx);
            }
            Variant::Irregular => {}
        }

        let mode = ForceMode::resolve(self.repelling, self.attracting);
        self.force
            .apply(&mut self.field, self.cursor, mode, &mut self.ctx);

        self.needs_redraw = true;
    }

    /// Read and clear the redraw flag. Returns whether the buffers
    /// changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ========== Accessors ==========

    /// The active variant.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The active generation parameters.
    #[inline]
    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// The main particle field.
    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The quasar beam field, present only for [`Variant::QuasarDisk`].
    #[inline]
    pub fn beams(&self) -> Option<&ParticleField> {
        self.beams.as_ref()
    }

    /// The orbit records, empty for variants without orbital structure.
    #[inline]
    pub fn orbits(&self) -> &[OrbitRecord] {
        &self.orbits
    }

    /// The animation speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The force mode the next tick will apply, after trigger
    /// resolution.
    #[inline]
    pub fn force_mode(&self) -> ForceMode {
        ForceMode::resolve(self.repelling, self.attracting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beams::BEAM_COUNT;

    fn sim(variant: Variant) -> Simulation {
        Simulation::new(
            variant,
            GalaxyConfig::new().with_count(500).with_seed(21),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Simulation::new(Variant::Spiral, GalaxyConfig::new().with_count(0));
        assert_eq!(err.err(), Some(ConfigError::ZeroParticleCount));
    }

    #[test]
    fn test_new_generates_field() {
        let sim = sim(Variant::Spiral);
        assert_eq!(sim.field().len(), 500);
        assert!(sim.orbits().is_empty());
        assert!(sim.beams().is_none());
    }

    #[test]
    fn test_quasar_gets_companion_beams() {
        let sim = sim(Variant::QuasarDisk);
        assert_eq!(sim.orbits().len(), 500);
        assert_eq!(sim.beams().unwrap().len(), BEAM_COUNT);
    }

    #[test]
    fn test_variant_switch_regenerates() {
        let mut sim = sim(Variant::Spiral);
        sim.set_variant(Variant::Elliptical).unwrap();

        assert_eq!(sim.variant(), Variant::Elliptical);
        assert_eq!(sim.orbits().len(), 500);

        sim.set_variant(Variant::Heartbeat).unwrap();
        assert!(sim.orbits().is_empty());
        assert!(sim.field().colors().is_none());
    }

    #[test]
    fn test_failed_switch_keeps_old_field() {
        let mut sim = Simulation::new(
            Variant::Elliptical,
            GalaxyConfig::new().with_count(100).with_branches(0).with_seed(1),
        )
        .unwrap();
        let before = sim.field().positions().to_vec();

        // Spiral validation fails on the zero branch count
        assert_eq!(
            sim.set_variant(Variant::Spiral),
            Err(ConfigError::ZeroBranchCount)
        );
        assert_eq!(sim.variant(), Variant::Elliptical);
        assert_eq!(sim.field().positions(), &before[..]);
    }

    #[test]
    fn test_count_change_rebuilds_wholesale() {
        let mut sim = sim(Variant::Spiral);
        let config = sim.config().clone().with_count(1000);
        sim.set_config(config).unwrap();
        assert_eq!(sim.field().len(), 1000);
        assert_eq!(sim.field().positions().len(), 3000);
    }

    #[test]
    fn test_failed_config_edit_keeps_old_field() {
        let mut sim = sim(Variant::Spiral);
        let before = sim.field().positions().to_vec();

        let bad = sim.config().clone().with_radius(f32::NAN);
        assert!(sim.set_config(bad).is_err());
        assert_eq!(sim.field().positions(), &before[..]);
        assert_eq!(sim.config().count, 500);
    }

    #[test]
    fn test_speed_edit_does_not_regenerate() {
        let mut sim = sim(Variant::Spiral);
        let before = sim.field().positions().to_vec();
        sim.set_speed(3.0);
        assert_eq!(sim.speed(), 3.0);
        assert_eq!(sim.field().positions(), &before[..]);
    }

    #[test]
    fn test_zero_delta_tick_is_noop() {
        let mut sim = sim(Variant::Elliptical);
        sim.take_redraw();
        let before = sim.field().positions().to_vec();

        sim.tick(0.0);
        assert_eq!(sim.field().positions(), &before[..]);
        assert!(!sim.take_redraw());
    }

    #[test]
    fn test_tick_raises_redraw() {
        let mut sim = sim(Variant::Spiral);
        assert!(sim.take_redraw()); // initial generation
        assert!(!sim.take_redraw()); // flag cleared

        sim.tick(1.0 / 60.0);
        assert!(sim.take_redraw());
    }

    #[test]
    fn test_tick_moves_spiral_particles() {
        let mut sim = sim(Variant::Spiral);
        let before = sim.field().positions().to_vec();
        sim.tick(1.0 / 60.0);
        assert_ne!(sim.field().positions(), &before[..]);
    }

    #[test]
    fn test_both_triggers_resolve_to_idle() {
        // Irregular has no motion law, so any movement would come from
        // the force field alone
        let mut sim = sim(Variant::Irregular);
        sim.set_cursor(Vec3::new(0.5, 0.5, 0.5));
        sim.set_repelling(true);
        sim.set_attracting(true);
        assert_eq!(sim.force_mode(), ForceMode::Idle);

        let before = sim.field().positions().to_vec();
        sim.tick(1.0 / 60.0);
        assert_eq!(sim.field().positions(), &before[..]);
    }

    #[test]
    fn test_single_trigger_applies_force() {
        let mut sim = sim(Variant::Irregular);
        sim.set_cursor(Vec3::new(0.5, 0.5, 0.5));
        sim.set_repelling(true);

        let before = sim.field().positions().to_vec();
        sim.tick(1.0 / 60.0);
        assert_ne!(sim.field().positions(), &before[..]);
    }

    #[test]
    fn test_stale_cursor_applies_nothing() {
        let mut sim = sim(Variant::Irregular);
        sim.set_repelling(true); // trigger armed, but no pick yet

        let before = sim.field().positions().to_vec();
        sim.tick(1.0 / 60.0);
        assert_eq!(sim.field().positions(), &before[..]);
    }

    #[test]
    fn test_heartbeat_pulses_particles() {
        let mut sim = sim(Variant::Heartbeat);
        let before = sim.field().positions().to_vec();

        for _ in 0..12 {
            sim.tick(1.0 / 60.0);
        }
        assert_ne!(sim.field().positions(), &before[..]);
        for i in 0..sim.field().len() {
            let p = sim.field().position(i);
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
    }
}
