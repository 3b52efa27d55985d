//! Skinning Settings & Fixed Limits
//!
//! This module defines the load-time configuration of the animation core.
//!
//! The fixed limits mirror what the GPU skinning pass can consume: a uniform
//! array of at most [`MAX_BONES`] matrices, and [`MAX_BONES_PER_VERTEX`]
//! influences packed into each vertex.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use skelanim::settings::{SkinningSettings, UpAxis};
//!
//! // Default: Z-up source assets, 200 bones, 25 ticks per second fallback
//! let settings = SkinningSettings::default();
//!
//! // Y-up assets for a shader compiled with a smaller bone array
//! let settings = SkinningSettings {
//!     up_axis: UpAxis::YUp,
//!     max_bones: 64,
//!     ..Default::default()
//! };
//! ```

use glam::{Mat4, Vec3};

/// Maximum number of bone matrices handed to the renderer.
pub const MAX_BONES: usize = 200;

/// Number of bone influence slots per vertex.
pub const MAX_BONES_PER_VERTEX: usize = 4;

/// Tick rate used when an animation declares zero ticks per second.
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

// ---------------------------------------------------------------------------
// UpAxis
// ---------------------------------------------------------------------------

/// Up-axis convention of the source asset.
///
/// The rendering convention is Y-up. Assets authored Z-up get a fixed
/// −90° rotation about X folded into the global inverse transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpAxis {
    /// Source already matches the target convention.
    YUp,
    /// Source is Z-up and needs the correction rotation.
    #[default]
    ZUp,
}

impl UpAxis {
    /// Rotation applied to the scene root before it is inverted.
    #[must_use]
    pub fn correction(self) -> Mat4 {
        match self {
            UpAxis::YUp => Mat4::IDENTITY,
            UpAxis::ZUp => Mat4::from_axis_angle(Vec3::X, -std::f32::consts::FRAC_PI_2),
        }
    }
}

// ---------------------------------------------------------------------------
// SkinningSettings
// ---------------------------------------------------------------------------

/// Load-time configuration for [`SkinnedModel`](crate::model::SkinnedModel).
#[derive(Debug, Clone, PartialEq)]
pub struct SkinningSettings {
    /// Bone count cap. Exceeding it is a fatal load error.
    pub max_bones: usize,
    /// Tick rate substituted for clips declaring `0`.
    pub default_ticks_per_second: f32,
    /// Up-axis convention of imported assets.
    pub up_axis: UpAxis,
    /// Store texture coordinates as `(u, 1 - v)`.
    pub flip_tex_coord_v: bool,
}

impl Default for SkinningSettings {
    fn default() -> Self {
        Self {
            max_bones: MAX_BONES,
            default_ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            up_axis: UpAxis::default(),
            flip_tex_coord_v: true,
        }
    }
}
