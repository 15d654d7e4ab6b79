//! Error types for GPE.
//!
//! Generation is the only fallible surface in the engine: a bad
//! configuration is rejected before any buffer is allocated, so the
//! previously generated field stays intact and visible.

use std::fmt;

/// Errors produced when validating a [`GalaxyConfig`](crate::GalaxyConfig)
/// against the variant being generated.
///
/// All variants are recoverable: the caller (typically a GUI panel)
/// rejects the parameter change and keeps the current field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The particle count is zero. A field must hold at least one particle.
    ZeroParticleCount,
    /// The spatial radius is negative or not finite. Zero is allowed and
    /// collapses the field to its center.
    NegativeRadius(f32),
    /// A spiral galaxy needs at least one branch.
    ZeroBranchCount,
    /// An elliptical semi-axis is zero, negative, or not finite.
    DegenerateAxis {
        /// Which semi-axis failed validation (`'a'` or `'b'`).
        axis: char,
        /// The rejected value.
        value: f32,
    },
    /// The quasar beam height is zero, negative, or not finite.
    NonPositiveBeamHeight(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroParticleCount => {
                write!(f, "Particle count must be at least 1")
            }
            ConfigError::NegativeRadius(r) => {
                write!(f, "Galaxy radius must be non-negative and finite, got {}", r)
            }
            ConfigError::ZeroBranchCount => {
                write!(f, "Spiral branch count must be at least 1")
            }
            ConfigError::DegenerateAxis { axis, value } => {
                write!(
                    f,
                    "Elliptical semi-axis '{}' must be positive and finite, got {}",
                    axis, value
                )
            }
            ConfigError::NonPositiveBeamHeight(h) => {
                write!(f, "Beam height must be positive and finite, got {}", h)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
