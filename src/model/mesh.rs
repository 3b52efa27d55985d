use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::skeleton::VertexBoneData;

/// Interleaved vertex as consumed by the skinning vertex shader:
/// position, tex coord, normal, bone ids, bone weights.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SkinnedVertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
    pub bones: VertexBoneData,
}

/// Normal substituted for meshes that do not provide any.
pub const DEFAULT_NORMAL: Vec3 = Vec3::Y;

/// Draw range of one imported mesh inside the shared buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshEntry {
    pub name: String,
    pub num_indices: u32,
    /// Added to every index of this mesh when drawing.
    pub base_vertex: u32,
    pub base_index: u32,
    pub material_index: u32,
}
