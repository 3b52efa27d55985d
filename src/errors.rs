//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`AnimationError`] covers every fatal configuration
//! condition the animation core can report:
//! - Skeleton limits (bone count, per-vertex influence capacity)
//! - Playback requests (animation indices, blend factors, asymmetric channels)
//! - Malformed imported data (empty or unsorted keyframe tracks, bad indices)
//!
//! Recoverable load-time conditions (missing normals, texture coordinates or
//! textures) never surface here; they are substituted and logged instead.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, AnimationError>`.
//!
//! ```rust,ignore
//! use skelanim::errors::{AnimationError, Result};
//!
//! fn pick_clip(count: usize, index: usize) -> Result<()> {
//!     if index >= count {
//!         return Err(AnimationError::AnimationIndexOutOfRange { index, count });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the animation core.
///
/// None of these errors are retried: evaluation is deterministic, so the same
/// inputs always fail the same way. They indicate an asset that does not fit
/// the engine's fixed limits, or a host request that breaks a precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    // ========================================================================
    // Skeleton Limits
    // ========================================================================
    /// More bones than the fixed maximum the skinning pass supports.
    #[error("Bone count {count} exceeds the supported maximum of {max}")]
    BoneLimitExceeded {
        /// Number of bones the asset requires
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// A vertex already uses every influence slot.
    #[error("Vertex {vertex} already has {capacity} bone influences, cannot add bone {bone}")]
    TooManyInfluences {
        /// Global vertex index
        vertex: u32,
        /// Bone that could not be added
        bone: u32,
        /// Per-vertex slot capacity
        capacity: usize,
    },

    /// A bone weight references a vertex that does not exist.
    #[error("Vertex index {vertex} out of bounds (vertex count: {count})")]
    VertexIndexOutOfRange {
        /// The invalid vertex index
        vertex: u32,
        /// Number of vertices available
        count: usize,
    },

    // ========================================================================
    // Playback Errors
    // ========================================================================
    /// Playback requested on a model that loaded no animations.
    #[error("The model has no animations")]
    NoAnimations,

    /// Animation index outside the loaded clip set.
    #[error("Invalid animation index {index}, clip count is {count}")]
    AnimationIndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of loaded clips
        count: usize,
    },

    /// Blend factor outside `[0, 1]` (or NaN).
    #[error("Invalid blend factor {0}, expected a value in [0, 1]")]
    InvalidBlendFactor(f32),

    /// Only one of the two blended clips animates this node.
    #[error("Node '{node}' is animated by only one of the blended clips ({animated_by}), blending it is not supported")]
    AsymmetricChannel {
        /// Name of the offending node
        node: String,
        /// Name of the clip that does define the channel
        animated_by: String,
    },

    // ========================================================================
    // Data Errors
    // ========================================================================
    /// A keyframe track without keys.
    #[error("Keyframe track is empty")]
    EmptyTrack,

    /// Times and values of a keyframe track differ in length.
    #[error("Keyframe track has {times} times but {values} values")]
    KeyCountMismatch {
        /// Number of key times
        times: usize,
        /// Number of key values
        values: usize,
    },

    /// Key times are not strictly increasing.
    #[error("Keyframe times must be strictly increasing (violated at key {index})")]
    UnsortedKeys {
        /// Index of the first key that is not after its predecessor
        index: usize,
    },

    /// A node handle that does not belong to the hierarchy.
    #[error("Invalid hierarchy node: {0}")]
    InvalidNode(String),

    /// A mesh references a material that was not imported.
    #[error("Mesh '{mesh}' references material {index}, material count is {count}")]
    MaterialIndexOutOfRange {
        /// Mesh name
        mesh: String,
        /// The invalid material index
        index: u32,
        /// Number of imported materials
        count: usize,
    },
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;
