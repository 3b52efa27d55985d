//! Bone identity and skin-weight bookkeeping.
//!
//! - [`BoneTable`]: bone name → stable index, offset matrices, final transforms
//! - [`VertexSkinWeights`]: per-vertex bone influences consumed by GPU skinning

pub mod bone_table;
pub mod skin;

pub use bone_table::{BoneInfo, BoneTable};
pub use skin::{VertexBoneData, VertexSkinWeights};
