//! Galaxy variants and field generation.
//!
//! Each [`Variant`] maps a [`GalaxyConfig`] to a freshly allocated
//! [`ParticleField`] through a closed-form spawn law plus controlled
//! randomness from a [`SpawnContext`]. Generation is a pure function of
//! `(variant, config, seed)`: no globals, no side effects beyond
//! allocation, O(count) for every variant.
//!
//! # Variants
//!
//! | Variant | Shape | Orbit records | Colors |
//! |---------|-------|---------------|--------|
//! | [`Variant::Spiral`] | Flat multi-arm spiral | no | yes |
//! | [`Variant::Elliptical`] | Stretched ellipsoid, dense core | yes | yes |
//! | [`Variant::QuasarDisk`] | Thin uniform accretion disk | yes | yes |
//! | [`Variant::Heartbeat`] | Uniform cube, pulsed by forces | no | no |
//! | [`Variant::Irregular`] | Placeholder scatter | no | no |
//!
//! The quasar's polar beams are a separate fixed-size companion field;
//! see the [`beams`](crate::beams) module.
//!
//! # Example
//!
//! ```ignore
//! use gpe::prelude::*;
//!
//! let config = GalaxyConfig::new()
//!     .with_count(50_000)
//!     .with_radius(5.0)
//!     .with_branches(3)
//!     .with_seed(42);
//!
//! let generated = generate(Variant::Spiral, &config)?;
//! renderer.upload(generated.field.position_bytes());
//! ```

use crate::color::ColorRamp;
use crate::error::ConfigError;
use crate::field::{OrbitRecord, ParticleField};
use crate::spawn::SpawnContext;
use crate::Vec3;
use std::f32::consts::TAU;

/// How many times an arm wraps per unit radius in the spiral variant.
pub const SPIN_FACTOR: f32 = 3.0;

/// Fraction of a particle's radius used as per-axis arm jitter.
pub const DEFAULT_ARM_JITTER: f32 = 0.1;

/// Jitter power for spiral arms: `U^5` keeps most particles tight to
/// the arm with a sparse halo of outliers.
const ARM_JITTER_POWER: f32 = 5.0;

/// Radial falloff power for the elliptical core.
const CORE_FALLOFF_POWER: f32 = 5.0;

/// Vertical squash applied to the quasar disk.
const DISK_FLATTEN: f32 = 0.15;

/// Minimum magnitude a trig term may take in the orbit back-derivation.
/// Dividing by raw `cos θ`/`sin θ` near a multiple of π/2 would inject
/// near-infinite semi-axes (and NaN at exactly zero) into the field.
const TRIG_EPSILON: f32 = 1e-3;

/// The closed set of galaxy shapes the engine can generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Multi-arm spiral galaxy. Arms twist with radius; particles lag
    /// behind the core when animated (differential rotation).
    #[default]
    Spiral,

    /// Elliptical galaxy: a stretched ellipsoid with a dense core.
    /// Every particle carries an [`OrbitRecord`] and circles its own
    /// ellipse when animated.
    Elliptical,

    /// Quasar accretion disk: a thin, uniformly dense disk with the
    /// same orbital animation as the elliptical variant, paired with
    /// polar jets from the [`beams`](crate::beams) module.
    QuasarDisk,

    /// Uniform cube of particles pulsed in and out by alternating
    /// force-field phases. No orbital structure.
    Heartbeat,

    /// Placeholder scatter in the unit cube.
    Irregular,
}

impl Variant {
    /// Whether fields of this variant carry per-particle orbit records.
    pub fn has_orbits(&self) -> bool {
        matches!(self, Variant::Elliptical | Variant::QuasarDisk)
    }

    /// Whether fields of this variant carry a color buffer.
    pub fn has_colors(&self) -> bool {
        matches!(
            self,
            Variant::Spiral | Variant::Elliptical | Variant::QuasarDisk
        )
    }

    /// Human-readable name for panels and demos.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Spiral => "Spiral",
            Variant::Elliptical => "Elliptical",
            Variant::QuasarDisk => "Quasar Disk",
            Variant::Heartbeat => "Heartbeat",
            Variant::Irregular => "Irregular",
        }
    }
}

/// Generation parameters, immutable during one `generate` call.
///
/// Build with chained `with_*` setters; fields are public so a control
/// panel can display them, but edits should flow through a new config
/// and a fresh `generate` call.
///
/// # Example
///
/// ```ignore
/// let config = GalaxyConfig::new()
///     .with_count(100_000)
///     .with_axes(4.0, 2.0)
///     .with_ramp(ColorRamp::new(parse_hex("#ff0055").unwrap(), Vec3::Z));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyConfig {
    /// Number of particles in the main field.
    pub count: usize,
    /// Spatial radius of the spiral / quasar disk. Zero collapses the
    /// field onto its center.
    pub radius: f32,
    /// Number of spiral arms.
    pub branches: u32,
    /// Elliptical semi-axes `(a, b)`: x and z stretch. Vertical stretch
    /// is fixed at 1.
    pub semi_axes: (f32, f32),
    /// Half-height of each quasar beam.
    pub beam_height: f32,
    /// Per-axis jitter fraction for spiral arms.
    pub arm_jitter: f32,
    /// Inner/outer color ramp for variants that mix colors.
    pub ramp: ColorRamp,
    /// World-space center the field is generated around.
    pub center: Vec3,
    /// Seed for the spawn RNG. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl GalaxyConfig {
    /// Create a config with the stock panel defaults.
    pub fn new() -> Self {
        Self {
            count: 10_000,
            radius: 5.0,
            branches: 3,
            semi_axes: (4.0, 2.0),
            beam_height: 2.5,
            arm_jitter: DEFAULT_ARM_JITTER,
            ramp: ColorRamp::default(),
            center: Vec3::ZERO,
            seed: None,
        }
    }

    /// Set the particle count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the spiral / disk radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of spiral arms.
    pub fn with_branches(mut self, branches: u32) -> Self {
        self.branches = branches;
        self
    }

    /// Set the elliptical semi-axes.
    pub fn with_axes(mut self, a: f32, b: f32) -> Self {
        self.semi_axes = (a, b);
        self
    }

    /// Set the quasar beam half-height.
    pub fn with_beam_height(mut self, height: f32) -> Self {
        self.beam_height = height;
        self
    }

    /// Set the spiral arm jitter fraction. Zero gives mathematically
    /// exact arms.
    pub fn with_arm_jitter(mut self, jitter: f32) -> Self {
        self.arm_jitter = jitter;
        self
    }

    /// Set the color ramp.
    pub fn with_ramp(mut self, ramp: ColorRamp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Set the world-space center.
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Pin the spawn RNG seed for reproducible fields.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate this config for generating `variant`.
    ///
    /// Only the fields the variant consumes are checked, so a spiral
    /// can be generated while the (unused) elliptical axes hold a
    /// work-in-progress value in the panel.
    pub fn validate_for(&self, variant: Variant) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroParticleCount);
        }
        match variant {
            Variant::Spiral => {
                if !(self.radius >= 0.0) || !self.radius.is_finite() {
                    return Err(ConfigError::NegativeRadius(self.radius));
                }
                if self.branches == 0 {
                    return Err(ConfigError::ZeroBranchCount);
                }
            }
            Variant::Elliptical => {
                let (a, b) = self.semi_axes;
                if !(a > 0.0) || !a.is_finite() {
                    return Err(ConfigError::DegenerateAxis { axis: 'a', value: a });
                }
                if !(b > 0.0) || !b.is_finite() {
                    return Err(ConfigError::DegenerateAxis { axis: 'b', value: b });
                }
            }
            Variant::QuasarDisk => {
                if !(self.radius >= 0.0) || !self.radius.is_finite() {
                    return Err(ConfigError::NegativeRadius(self.radius));
                }
                if !(self.beam_height > 0.0) || !self.beam_height.is_finite() {
                    return Err(ConfigError::NonPositiveBeamHeight(self.beam_height));
                }
            }
            Variant::Heartbeat | Variant::Irregular => {}
        }
        Ok(())
    }
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of one `generate` call: the field plus, for orbit-based
/// variants, the index-aligned orbit records the updater advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// The generated point cloud.
    pub field: ParticleField,
    /// One record per particle for [`Variant::Elliptical`] and
    /// [`Variant::QuasarDisk`]; empty otherwise.
    pub orbits: Vec<OrbitRecord>,
}

/// Generate a fresh field for `variant`.
///
/// Fails before any allocation if the config is invalid for the
/// variant. The returned buffers fully replace any previous field; the
/// engine never resizes a field in place.
pub fn generate(variant: Variant, config: &GalaxyConfig) -> Result<Generated, ConfigError> {
    config.validate_for(variant)?;
    let mut ctx = SpawnContext::new(config.seed);
    Ok(generate_with(variant, config, &mut ctx))
}

/// Generate using a caller-supplied spawn context.
///
/// Lets the simulation facade thread one RNG through a disk-plus-beams
/// regeneration. The config must already be validated.
pub(crate) fn generate_with(
    variant: Variant,
    config: &GalaxyConfig,
    ctx: &mut SpawnContext,
) -> Generated {
    match variant {
        Variant::Spiral => Generated {
            field: spawn_spiral(config, ctx),
            orbits: Vec::new(),
        },
        Variant::Elliptical => {
            let (a, b) = config.semi_axes;
            spawn_ellipsoid(config, ctx, a, b, 1.0, CORE_FALLOFF_POWER)
        }
        Variant::QuasarDisk => {
            spawn_ellipsoid(config, ctx, config.radius, config.radius, DISK_FLATTEN, 1.0)
        }
        Variant::Heartbeat => Generated {
            field: spawn_heartbeat(config, ctx),
            orbits: Vec::new(),
        },
        Variant::Irregular => Generated {
            field: spawn_irregular(config, ctx),
            orbits: Vec::new(),
        },
    }
}

/// Spiral arms: uniform radius draw, arm angle by particle index,
/// radius-proportional twist, power-law jitter on every axis.
fn spawn_spiral(config: &GalaxyConfig, ctx: &mut SpawnContext) -> ParticleField {
    let mut field = ParticleField::new(config.count, config.center).with_colors();
    let branches = config.branches;

    for i in 0..config.count {
        let radius = ctx.random() * config.radius;
        let branch_angle = (i as u32 % branches) as f32 / branches as f32 * TAU;
        let spin = radius * SPIN_FACTOR;

        let jx = ctx.signed() * ctx.falloff(ARM_JITTER_POWER) * config.arm_jitter * radius;
        let jy = ctx.signed() * ctx.falloff(ARM_JITTER_POWER) * config.arm_jitter * radius;
        let jz = ctx.signed() * ctx.falloff(ARM_JITTER_POWER) * config.arm_jitter * radius;

        let local = Vec3::new(
            (branch_angle + spin).sin() * radius + jx,
            jy,
            (branch_angle + spin).cos() * radius + jz,
        );
        field.set_position(i, config.center + local);

        let t = if config.radius > 0.0 {
            radius / config.radius
        } else {
            0.0
        };
        field.set_color(i, config.ramp.sample(t));
    }
    field
}

/// Shared ellipsoid construction for the elliptical galaxy and the
/// quasar disk: spherical draw stretched by `(a, c, b)`, with the
/// ellipse each particle lies on back-derived into an [`OrbitRecord`].
fn spawn_ellipsoid(
    config: &GalaxyConfig,
    ctx: &mut SpawnContext,
    a: f32,
    b: f32,
    vertical: f32,
    falloff_power: f32,
) -> Generated {
    let mut field = ParticleField::new(config.count, config.center).with_colors();
    let mut orbits = Vec::with_capacity(config.count);

    for i in 0..config.count {
        let r = ctx.falloff(falloff_power);
        let theta = ctx.random_angle();
        let phi = ctx.polar_angle();

        let x = a * r * phi.sin() * theta.cos();
        let y = vertical * r * phi.cos();
        let z = b * r * phi.sin() * theta.sin();

        field.set_position(i, config.center + Vec3::new(x, y, z));
        field.set_color(i, config.ramp.sample(r));
        orbits.push(derive_orbit(x, z, theta));
    }

    Generated { field, orbits }
}

/// Reconstruct the ellipse a particle lies on from its coordinates and
/// azimuth. The trig terms are clamped away from zero so a `theta` near
/// a multiple of π/2 cannot blow the semi-axes up to infinity or NaN.
fn derive_orbit(x: f32, z: f32, theta: f32) -> OrbitRecord {
    OrbitRecord {
        semi_major: (x / clamp_trig(theta.cos())).abs(),
        semi_minor: (z / clamp_trig(theta.sin())).abs(),
        angle: theta,
    }
}

#[inline]
fn clamp_trig(v: f32) -> f32 {
    if v.abs() < TRIG_EPSILON {
        TRIG_EPSILON.copysign(v)
    } else {
        v
    }
}

/// Heartbeat: a uniform cube of side 1 around the center. Motion comes
/// entirely from the alternating force-field pulse at update time.
fn spawn_heartbeat(config: &GalaxyConfig, ctx: &mut SpawnContext) -> ParticleField {
    let mut field = ParticleField::new(config.count, config.center);
    for i in 0..config.count {
        field.set_position(i, config.center + ctx.random_in_cube(0.5));
    }
    field
}

/// Irregular: uniform scatter in the unit cube.
// TODO: replace with a real irregular-galaxy distribution
fn spawn_irregular(config: &GalaxyConfig, ctx: &mut SpawnContext) -> ParticleField {
    let mut field = ParticleField::new(config.count, config.center);
    for i in 0..config.count {
        field.set_position(i, config.center + ctx.random_in_unit_cube());
    }
    field
}
