//! Bone Transform Evaluation
//!
//! Walks the bind-pose hierarchy once per call and writes every bone's final
//! skinning matrix:
//!
//! ```text
//! final = global_inverse * global(node) * offset(bone)
//! ```
//!
//! A node animated by the clip uses its sampled `T * R * S` as the local
//! transform; any other node keeps its static bind-pose transform. The
//! evaluator itself holds only the load-time constant `global_inverse`, so a
//! single instance can be shared by every clip of a model.

use glam::Mat4;

use crate::animation::clip::AnimationClip;
use crate::errors::{AnimationError, Result};
use crate::scene::hierarchy::{Hierarchy, HierarchyNode, NodeHandle};
use crate::settings::UpAxis;
use crate::skeleton::BoneTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationEvaluator {
    global_inverse_transform: Mat4,
}

impl Default for AnimationEvaluator {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl AnimationEvaluator {
    #[must_use]
    pub fn new(global_inverse_transform: Mat4) -> Self {
        Self {
            global_inverse_transform,
        }
    }

    /// Derives the global inverse from the scene root's bind transform,
    /// applying the up-axis correction before inverting.
    #[must_use]
    pub fn from_root_transform(root_transform: Mat4, up_axis: UpAxis) -> Self {
        Self::new((up_axis.correction() * root_transform).inverse())
    }

    #[inline]
    #[must_use]
    pub fn global_inverse_transform(&self) -> Mat4 {
        self.global_inverse_transform
    }

    /// Evaluates a single clip at `elapsed_seconds` of wall-clock time.
    ///
    /// Returns one matrix per bone in stable bone-index order. The same
    /// matrices are also stored in `bones`.
    pub fn evaluate_clip(
        &self,
        hierarchy: &Hierarchy,
        bones: &mut BoneTable,
        clip: &AnimationClip,
        elapsed_seconds: f32,
    ) -> Vec<Mat4> {
        let ticks = clip.animation_time_ticks(elapsed_seconds);

        // The closure never fails and every handle visited comes from
        // `hierarchy` itself, so the walk cannot return `InvalidNode`.
        let result: Result<()> = self.traverse(hierarchy, bones, &mut |node: &HierarchyNode| {
            Ok(match clip.channel(&node.name) {
                Some(channel) => channel.sample(ticks).to_matrix(),
                None => node.local_transform,
            })
        });
        debug_assert!(result.is_ok());

        bones.final_transforms()
    }

    /// Evaluates two clips at the same wall-clock time and blends them with
    /// `blend_factor` (`0` = `start`, `1` = `end`).
    ///
    /// Each clip converts the elapsed time with its own tick rate and
    /// duration. A node animated by only one of the two clips is rejected,
    /// as is a blend factor outside `[0, 1]`.
    pub fn evaluate_blended(
        &self,
        hierarchy: &Hierarchy,
        bones: &mut BoneTable,
        start: &AnimationClip,
        end: &AnimationClip,
        elapsed_seconds: f32,
        blend_factor: f32,
    ) -> Result<Vec<Mat4>> {
        if !(0.0..=1.0).contains(&blend_factor) {
            log::error!("Invalid blend factor {blend_factor}");
            return Err(AnimationError::InvalidBlendFactor(blend_factor));
        }

        let start_ticks = start.animation_time_ticks(elapsed_seconds);
        let end_ticks = end.animation_time_ticks(elapsed_seconds);

        self.traverse(hierarchy, bones, &mut |node: &HierarchyNode| {
            match (start.channel(&node.name), end.channel(&node.name)) {
                (Some(a), Some(b)) => {
                    let a = a.sample(start_ticks);
                    let b = b.sample(end_ticks);
                    Ok(a.blend(&b, blend_factor).to_matrix())
                }
                (None, None) => Ok(node.local_transform),
                (Some(_), None) => Err(asymmetric_channel(node, start, end, start)),
                (None, Some(_)) => Err(asymmetric_channel(node, start, end, end)),
            }
        })?;

        Ok(bones.final_transforms())
    }

    /// Depth-first walk from the hierarchy root with an identity parent.
    fn traverse<F>(&self, hierarchy: &Hierarchy, bones: &mut BoneTable, local: &mut F) -> Result<()>
    where
        F: FnMut(&HierarchyNode) -> Result<Mat4>,
    {
        self.visit(hierarchy, hierarchy.root(), Mat4::IDENTITY, bones, local)
    }

    fn visit<F>(
        &self,
        hierarchy: &Hierarchy,
        handle: NodeHandle,
        parent_transform: Mat4,
        bones: &mut BoneTable,
        local: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&HierarchyNode) -> Result<Mat4>,
    {
        let node = hierarchy
            .get(handle)
            .ok_or_else(|| AnimationError::InvalidNode(format!("{handle:?}")))?;

        let global_transform = parent_transform * local(node)?;

        if let Some(bone_id) = bones.bone_id(&node.name) {
            let offset = bones.offset_matrix(bone_id);
            bones.set_final_transform(
                bone_id,
                self.global_inverse_transform * global_transform * offset,
            );
        }

        for &child in node.children() {
            self.visit(hierarchy, child, global_transform, bones, local)?;
        }

        Ok(())
    }
}

fn asymmetric_channel(
    node: &HierarchyNode,
    start: &AnimationClip,
    end: &AnimationClip,
    animated_by: &AnimationClip,
) -> AnimationError {
    log::error!(
        "Node '{}' is animated by '{}' only, cannot blend '{}' with '{}'",
        node.name,
        animated_by.name,
        start.name,
        end.name
    );
    AnimationError::AsymmetricChannel {
        node: node.name.clone(),
        animated_by: animated_by.name.clone(),
    }
}
