use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::errors::{AnimationError, Result};
use crate::settings::MAX_BONES;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneInfo {
    /// Maps a vertex from mesh space into this bone's space at bind pose
    /// (the inverse bind matrix).
    pub offset_matrix: Mat4,
    /// Rewritten by every evaluation; this is what the renderer uploads.
    pub final_transform: Mat4,
}

impl BoneInfo {
    #[must_use]
    pub fn new(offset_matrix: Mat4) -> Self {
        Self {
            offset_matrix,
            final_transform: Mat4::ZERO,
        }
    }
}

/// Bone identities and per-bone matrices.
///
/// Indices are handed out in first-seen order and never change for the
/// lifetime of the table, so `bones[i]` always lines up with slot `i` of the
/// skinning shader's bone array.
#[derive(Debug, Clone)]
pub struct BoneTable {
    name_to_index: FxHashMap<String, u32>,
    bones: Vec<BoneInfo>,
    max_bones: usize,
}

impl Default for BoneTable {
    fn default() -> Self {
        Self::new(MAX_BONES)
    }
}

impl BoneTable {
    #[must_use]
    pub fn new(max_bones: usize) -> Self {
        Self {
            name_to_index: FxHashMap::default(),
            bones: Vec::new(),
            max_bones,
        }
    }

    /// Returns the id of `name`, registering it with `offset_matrix` if it
    /// has not been seen yet.
    ///
    /// The offset of an already known bone is left untouched.
    pub fn get_or_create_bone_id(&mut self, name: &str, offset_matrix: Mat4) -> Result<u32> {
        if let Some(&id) = self.name_to_index.get(name) {
            return Ok(id);
        }

        if self.bones.len() >= self.max_bones {
            log::error!(
                "The number of bones in the model exceeds the maximum supported ({}), rejecting '{name}'",
                self.max_bones
            );
            return Err(AnimationError::BoneLimitExceeded {
                count: self.bones.len() + 1,
                max: self.max_bones,
            });
        }

        let id = self.bones.len() as u32;
        self.name_to_index.insert(name.to_owned(), id);
        self.bones.push(BoneInfo::new(offset_matrix));
        Ok(id)
    }

    #[inline]
    #[must_use]
    pub fn bone_id(&self, name: &str) -> Option<u32> {
        self.name_to_index.get(name).copied()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&BoneInfo> {
        self.bones.get(id as usize)
    }

    /// Panics if `id` was not issued by this table.
    #[inline]
    #[must_use]
    pub fn offset_matrix(&self, id: u32) -> Mat4 {
        self.bones[id as usize].offset_matrix
    }

    #[inline]
    pub fn set_final_transform(&mut self, id: u32, transform: Mat4) {
        self.bones[id as usize].final_transform = transform;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn max_bones(&self) -> usize {
        self.max_bones
    }

    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[BoneInfo] {
        &self.bones
    }

    /// Bone names ordered by id.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![""; self.bones.len()];
        for (name, &id) in &self.name_to_index {
            names[id as usize] = name.as_str();
        }
        names
    }

    /// Copies out the final transforms in bone-index order.
    #[must_use]
    pub fn final_transforms(&self) -> Vec<Mat4> {
        self.bones.iter().map(|bone| bone.final_transform).collect()
    }
}
