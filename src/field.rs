//! Particle field buffers.
//!
//! A [`ParticleField`] is the unit of data the engine trades with the
//! external renderer: one flat `f32` buffer of `(x, y, z)` triples,
//! optionally paired with a same-layout color buffer. Generation
//! replaces a field wholesale; the per-frame updater mutates its
//! positions in place. Colors are written once at generation and never
//! touched again.
//!
//! The renderer never sees engine types: it consumes the raw buffers
//! through [`ParticleField::position_bytes`] / [`ParticleField::color_bytes`],
//! which are zero-copy `bytemuck` casts suitable for direct upload.

use glam::Vec3;

/// A generated point cloud: flat position buffer, optional color buffer,
/// and the world-space center the field was generated around.
///
/// Invariant: `positions.len() == 3 * count`, and the same for the color
/// buffer when present. The count is fixed for the lifetime of the field;
/// changing particle count means generating a new field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    /// Flat `(x, y, z)` triples.
    positions: Vec<f32>,
    /// Flat `(r, g, b)` triples in 0..1, if the variant mixes colors.
    colors: Option<Vec<f32>>,
    /// Number of particles.
    count: usize,
    /// World-space center the field was generated around.
    center: Vec3,
}

impl ParticleField {
    /// Create a field of `count` particles at the origin of `center`,
    /// with every position zeroed and no color buffer.
    pub fn new(count: usize, center: Vec3) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            colors: None,
            count,
            center,
        }
    }

    /// Allocate a zeroed color buffer alongside the positions.
    pub fn with_colors(mut self) -> Self {
        self.colors = Some(vec![0.0; self.count * 3]);
        self
    }

    /// Number of particles in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// World-space center of the field.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Position of particle `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        let base = i * 3;
        Vec3::new(
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        )
    }

    /// Overwrite the position of particle `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        let base = i * 3;
        self.positions[base] = p.x;
        self.positions[base + 1] = p.y;
        self.positions[base + 2] = p.z;
    }

    /// Color of particle `i`, if the field carries colors.
    #[inline]
    pub fn color(&self, i: usize) -> Option<Vec3> {
        self.colors.as_ref().map(|c| {
            let base = i * 3;
            Vec3::new(c[base], c[base + 1], c[base + 2])
        })
    }

    /// Overwrite the color of particle `i`. No-op on colorless fields.
    #[inline]
    pub fn set_color(&mut self, i: usize, rgb: Vec3) {
        if let Some(c) = self.colors.as_mut() {
            let base = i * 3;
            c[base] = rgb.x;
            c[base + 1] = rgb.y;
            c[base + 2] = rgb.z;
        }
    }

    /// The raw position buffer.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Mutable access to the raw position buffer.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.positions
    }

    /// The raw color buffer, if present.
    #[inline]
    pub fn colors(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }

    /// Position buffer as bytes, ready for vertex-buffer upload.
    #[inline]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color buffer as bytes, if present.
    #[inline]
    pub fn color_bytes(&self) -> Option<&[u8]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }
}

/// Per-particle orbital parameters for the elliptical and quasar-disk
/// variants.
///
/// Records are index-aligned with the field that produced them:
/// `orbits[i]` drives `positions[3i..3i+3]`. The semi-axes are fixed at
/// generation; only `angle` advances frame to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRecord {
    /// Semi-major axis of the particle's ellipse (x extent), >= 0.
    pub semi_major: f32,
    /// Semi-minor axis of the particle's ellipse (z extent), >= 0.
    pub semi_minor: f32,
    /// Current phase angle in radians. Unbounded; wraps through trig.
    pub angle: f32,
}
