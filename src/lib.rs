#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Skeletal animation evaluation core.
//!
//! Given a bind-pose node [`Hierarchy`], a [`BoneTable`] of offset matrices
//! and one or more keyframed [`AnimationClip`]s, computes the final skinning
//! matrix of every bone for any point in time, optionally blending two clips.
//!
//! ```rust,ignore
//! use skelanim::{PlaybackClock, SkinnedModel, SkinningSettings};
//!
//! let mut model = SkinnedModel::from_import(&scene, &SkinningSettings::default())?;
//! let clock = PlaybackClock::new();
//!
//! // Every frame
//! let bones = model.bone_transforms_blended(clock.elapsed_seconds(), 0, 1, 0.5)?;
//! renderer.upload_bones(&bones);
//! ```

pub mod animation;
pub mod errors;
pub mod import;
pub mod model;
pub mod scene;
pub mod settings;
pub mod skeleton;

pub use animation::{
    AnimationClip, AnimationEvaluator, KeyframeTrack, LocalTransform, NodeAnimTrack, PlaybackClock,
};
pub use errors::{AnimationError, Result};
pub use model::{Material, MeshEntry, SkinnedModel, SkinnedVertex, TextureRef};
pub use scene::{Hierarchy, HierarchyNode, NodeHandle};
pub use settings::{MAX_BONES, MAX_BONES_PER_VERTEX, SkinningSettings, UpAxis};
pub use skeleton::{BoneInfo, BoneTable, VertexBoneData, VertexSkinWeights};
