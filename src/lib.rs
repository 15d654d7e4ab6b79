//! # GPE - Galaxy Particle Engine
//!
//! Procedural galaxy point clouds with a simple, renderer-agnostic API.
//!
//! GPE generates flat position/color buffers for a closed set of galaxy
//! shapes and animates them frame to frame. It owns no window, GPU, or
//! GUI: the host render loop feeds it a per-frame delta time plus a 3D
//! cursor point and uploads the raw buffers it gets back.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gpe::prelude::*;
//!
//! let config = GalaxyConfig::new()
//!     .with_count(100_000)
//!     .with_radius(5.0)
//!     .with_branches(3)
//!     .with_seed(42);
//!
//! let mut sim = Simulation::new(Variant::Spiral, config)?;
//!
//! loop {
//!     let (_, delta) = time.update();
//!     sim.tick(delta);
//!     if sim.take_redraw() {
//!         renderer.upload(sim.field().position_bytes());
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Fields
//!
//! A [`ParticleField`] is a flat `f32` buffer of `(x, y, z)` triples,
//! optionally paired with a same-layout RGB buffer. Generation replaces
//! a field wholesale; ticks mutate positions in place; colors never
//! change after generation.
//!
//! ### Variants
//!
//! [`Variant`] is the closed set of shapes the engine generates:
//!
//! | Variant | Motion rule |
//! |---------|-------------|
//! | [`Variant::Spiral`] | Differential rotation about the center |
//! | [`Variant::Elliptical`] | Per-particle elliptical orbits |
//! | [`Variant::QuasarDisk`] | Orbits, plus streaming polar beams |
//! | [`Variant::Heartbeat`] | Alternating force-field pulse |
//! | [`Variant::Irregular`] | None (placeholder) |
//!
//! ### Forces
//!
//! A [`ForceField`] pushes or pulls particles around the externally
//! picked [`CursorField`] point, with linear falloff to zero at its
//! threshold. Engaging both triggers at once resolves to idle.
//!
//! ### Determinism
//!
//! All randomness flows through a seedable [`SpawnContext`]; pin
//! [`GalaxyConfig::seed`] and the same field is generated every run.

pub mod beams;
pub mod color;
mod error;
pub mod field;
pub mod forces;
pub mod galaxy;
pub mod motion;
mod simulation;
pub mod spawn;
pub mod time;

pub use bytemuck;
pub use color::{parse_hex, ColorRamp};
pub use error::ConfigError;
pub use field::{OrbitRecord, ParticleField};
pub use forces::{CursorField, ForceField, ForceMode};
pub use galaxy::{generate, GalaxyConfig, Generated, Variant};
pub use glam::Vec3;
pub use simulation::Simulation;
pub use spawn::SpawnContext;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use gpe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{parse_hex, ColorRamp};
    pub use crate::error::ConfigError;
    pub use crate::field::{OrbitRecord, ParticleField};
    pub use crate::forces::{CursorField, ForceField, ForceMode};
    pub use crate::galaxy::{generate, GalaxyConfig, Generated, Variant};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::{PulseClock, Time};
    pub use crate::Vec3;
}
