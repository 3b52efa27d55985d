//! Load-time assembly of a skinned model from imported scene data.

pub mod material;
pub mod mesh;
pub mod skinned_model;

pub use material::{Material, TextureRef};
pub use mesh::{MeshEntry, SkinnedVertex};
pub use skinned_model::SkinnedModel;
