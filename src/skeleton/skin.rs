use bytemuck::{Pod, Zeroable};

use crate::errors::{AnimationError, Result};
use crate::settings::MAX_BONES_PER_VERTEX;

/// Up to four `(bone, weight)` influences of one vertex, laid out for direct
/// upload as two `uvec4` / `vec4` vertex attributes.
///
/// A slot is free while its weight is exactly `0.0`. Weights are stored as
/// given and never renormalized.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VertexBoneData {
    pub bone_ids: [u32; MAX_BONES_PER_VERTEX],
    pub weights: [f32; MAX_BONES_PER_VERTEX],
}

impl VertexBoneData {
    /// Stores the influence in the first free slot and returns that slot, or
    /// `None` when all slots are taken.
    pub fn add_bone_data(&mut self, bone_id: u32, weight: f32) -> Option<usize> {
        let slot = self.weights.iter().position(|&w| w == 0.0)?;
        self.bone_ids[slot] = bone_id;
        self.weights[slot] = weight;
        Some(slot)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn influence_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }

    /// Occupied `(bone, weight)` pairs in slot order.
    pub fn influences(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.bone_ids
            .iter()
            .zip(&self.weights)
            .filter(|(_, w)| **w != 0.0)
            .map(|(&id, &w)| (id, w))
    }

    #[must_use]
    pub fn weight_sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

/// Skin data for every vertex of a model, indexed by global vertex id.
#[derive(Debug, Clone, Default)]
pub struct VertexSkinWeights {
    vertices: Vec<VertexBoneData>,
}

impl VertexSkinWeights {
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![VertexBoneData::default(); vertex_count],
        }
    }

    /// Adds one influence to `vertex`. A fifth influence on the same vertex
    /// is a fatal configuration error.
    pub fn add_influence(&mut self, vertex: u32, bone_id: u32, weight: f32) -> Result<()> {
        let count = self.vertices.len();
        let data = self
            .vertices
            .get_mut(vertex as usize)
            .ok_or(AnimationError::VertexIndexOutOfRange { vertex, count })?;

        if data.add_bone_data(bone_id, weight).is_none() {
            log::error!(
                "Vertex {vertex} has more than {MAX_BONES_PER_VERTEX} bone influences (adding bone {bone_id})"
            );
            return Err(AnimationError::TooManyInfluences {
                vertex,
                bone: bone_id,
                capacity: MAX_BONES_PER_VERTEX,
            });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, vertex: u32) -> Option<&VertexBoneData> {
        self.vertices.get(vertex as usize)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[VertexBoneData] {
        &self.vertices
    }

    /// Raw bytes for a GPU vertex buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
