use std::path::Path;

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::animation::{AnimationClip, AnimationEvaluator};
use crate::errors::{AnimationError, Result};
use crate::import::{MeshImport, SceneImport};
use crate::model::material::Material;
use crate::model::mesh::{DEFAULT_NORMAL, MeshEntry, SkinnedVertex};
use crate::scene::Hierarchy;
use crate::settings::SkinningSettings;
use crate::skeleton::{BoneTable, VertexSkinWeights};

/// A loaded skinned model: bind-pose hierarchy, bones, skin weights, clips
/// and the vertex/index data ready for upload.
///
/// Everything except the bones' final transforms is fixed after
/// [`SkinnedModel::from_import`].
#[derive(Debug, Clone)]
pub struct SkinnedModel {
    hierarchy: Hierarchy,
    bones: BoneTable,
    evaluator: AnimationEvaluator,
    clips: Vec<AnimationClip>,

    meshes: Vec<MeshEntry>,
    materials: Vec<Material>,

    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Vec<u32>,
    skin_weights: VertexSkinWeights,
}

impl SkinnedModel {
    pub fn from_import(scene: &SceneImport, settings: &SkinningSettings) -> Result<Self> {
        let hierarchy = Hierarchy::from_import(&scene.root);
        let evaluator = AnimationEvaluator::from_root_transform(scene.root.transform, settings.up_axis);

        // Count vertices and indices, laying meshes out back to back
        let mut meshes = Vec::with_capacity(scene.meshes.len());
        let mut num_vertices = 0u32;
        let mut num_indices = 0u32;
        for mesh in &scene.meshes {
            if !scene.materials.is_empty() && mesh.material_index as usize >= scene.materials.len() {
                log::error!(
                    "Mesh '{}' references missing material {}",
                    mesh.name,
                    mesh.material_index
                );
                return Err(AnimationError::MaterialIndexOutOfRange {
                    mesh: mesh.name.clone(),
                    index: mesh.material_index,
                    count: scene.materials.len(),
                });
            }

            let entry = MeshEntry {
                name: mesh.name.clone(),
                num_indices: mesh.indices.len() as u32,
                base_vertex: num_vertices,
                base_index: num_indices,
                material_index: mesh.material_index,
            };
            num_vertices += mesh.positions.len() as u32;
            num_indices += entry.num_indices;
            meshes.push(entry);
        }

        let mut model = Self {
            hierarchy,
            bones: BoneTable::new(settings.max_bones),
            evaluator,
            clips: Vec::with_capacity(scene.animations.len()),
            meshes,
            materials: Vec::with_capacity(scene.materials.len()),
            positions: Vec::with_capacity(num_vertices as usize),
            normals: Vec::with_capacity(num_vertices as usize),
            tex_coords: Vec::with_capacity(num_vertices as usize),
            indices: Vec::with_capacity(num_indices as usize),
            skin_weights: VertexSkinWeights::new(num_vertices as usize),
        };

        for (index, mesh) in scene.meshes.iter().enumerate() {
            model.init_single_mesh(index, mesh, settings)?;
        }

        let model_dir = scene
            .source_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        model.materials = scene
            .materials
            .iter()
            .map(|m| Material::from_import(m, model_dir))
            .collect();

        for animation in &scene.animations {
            model.clips.push(AnimationClip::from_import(
                animation,
                settings.default_ticks_per_second,
            )?);
        }

        log::debug!(
            "Loaded skinned model: {} nodes, {} meshes, {} vertices, {} bones, {} animations",
            model.hierarchy.len(),
            model.meshes.len(),
            num_vertices,
            model.bones.len(),
            model.clips.len()
        );

        Ok(model)
    }

    fn init_single_mesh(&mut self, mesh_index: usize, mesh: &MeshImport, settings: &SkinningSettings) -> Result<()> {
        let vertex_count = mesh.positions.len();

        let normals = mesh.normals.as_ref().filter(|n| n.len() == vertex_count);
        if normals.is_none() {
            log::warn!("Mesh '{}' has no normals, substituting {DEFAULT_NORMAL}", mesh.name);
        }
        let tex_coords = mesh.tex_coords.as_ref().filter(|t| t.len() == vertex_count);
        if tex_coords.is_none() {
            log::warn!("Mesh '{}' has no texture coordinates, substituting zero", mesh.name);
        }

        for i in 0..vertex_count {
            self.positions.push(mesh.positions[i]);
            self.normals.push(normals.map_or(DEFAULT_NORMAL, |n| n[i]));

            let uv = tex_coords.map_or(Vec2::ZERO, |t| t[i]);
            self.tex_coords.push(if settings.flip_tex_coord_v {
                Vec2::new(uv.x, 1.0 - uv.y)
            } else {
                uv
            });
        }

        self.indices.extend_from_slice(&mesh.indices);

        self.load_mesh_bones(mesh_index, mesh, settings)
    }

    fn load_mesh_bones(&mut self, mesh_index: usize, mesh: &MeshImport, settings: &SkinningSettings) -> Result<()> {
        if mesh.bones.len() > settings.max_bones {
            log::error!(
                "The number of bones in mesh '{}' ({}) is larger than the maximum supported ({})",
                mesh.name,
                mesh.bones.len(),
                settings.max_bones
            );
            return Err(AnimationError::BoneLimitExceeded {
                count: mesh.bones.len(),
                max: settings.max_bones,
            });
        }

        let base_vertex = self.meshes[mesh_index].base_vertex;
        for bone in &mesh.bones {
            let bone_id = self.bones.get_or_create_bone_id(&bone.name, bone.offset_matrix)?;

            for vw in &bone.weights {
                if vw.vertex_id as usize >= mesh.positions.len() {
                    return Err(AnimationError::VertexIndexOutOfRange {
                        vertex: vw.vertex_id,
                        count: mesh.positions.len(),
                    });
                }
                self.skin_weights
                    .add_influence(base_vertex + vw.vertex_id, bone_id, vw.weight)?;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Animation
    // ========================================================================

    /// Final bone transforms for one clip, in bone-index order.
    pub fn bone_transforms(&mut self, elapsed_seconds: f32, animation_index: usize) -> Result<Vec<Mat4>> {
        let clip = clip_at(&self.clips, animation_index)?;

        Ok(self
            .evaluator
            .evaluate_clip(&self.hierarchy, &mut self.bones, clip, elapsed_seconds))
    }

    /// Final bone transforms blended between two clips.
    pub fn bone_transforms_blended(
        &mut self,
        elapsed_seconds: f32,
        start_animation: usize,
        end_animation: usize,
        blend_factor: f32,
    ) -> Result<Vec<Mat4>> {
        let start = clip_at(&self.clips, start_animation)?;
        let end = clip_at(&self.clips, end_animation)?;

        self.evaluator.evaluate_blended(
            &self.hierarchy,
            &mut self.bones,
            start,
            end,
            elapsed_seconds,
            blend_factor,
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn clip(&self, index: usize) -> Result<&AnimationClip> {
        clip_at(&self.clips, index)
    }

    #[inline]
    #[must_use]
    pub fn clips(&self) -> &[AnimationClip] {
        &self.clips
    }

    #[inline]
    #[must_use]
    pub fn num_bones(&self) -> usize {
        self.bones.len()
    }

    #[inline]
    #[must_use]
    pub fn bone_table(&self) -> &BoneTable {
        &self.bones
    }

    #[inline]
    #[must_use]
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    #[inline]
    #[must_use]
    pub fn global_inverse_transform(&self) -> Mat4 {
        self.evaluator.global_inverse_transform()
    }

    #[inline]
    #[must_use]
    pub fn meshes(&self) -> &[MeshEntry] {
        &self.meshes
    }

    #[inline]
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// The first material with a non-zero ambient colour, falling back to
    /// the first material.
    #[must_use]
    pub fn representative_material(&self) -> Option<&Material> {
        self.materials
            .iter()
            .find(|m| m.ambient_color != Vec4::ZERO)
            .or_else(|| self.materials.first())
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn skin_weights(&self) -> &VertexSkinWeights {
        &self.skin_weights
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Builds the interleaved vertex buffer contents.
    #[must_use]
    pub fn interleaved_vertices(&self) -> Vec<SkinnedVertex> {
        self.positions
            .iter()
            .zip(&self.tex_coords)
            .zip(&self.normals)
            .zip(self.skin_weights.as_slice())
            .map(|(((&position, &tex_coord), &normal), &bones)| SkinnedVertex {
                position,
                tex_coord,
                normal,
                bones,
            })
            .collect()
    }
}

fn clip_at(clips: &[AnimationClip], index: usize) -> Result<&AnimationClip> {
    if clips.is_empty() {
        log::error!("Animation {index} requested but the model has no animations");
        return Err(AnimationError::NoAnimations);
    }
    clips.get(index).ok_or_else(|| {
        log::error!("Invalid animation index {index}, max is {}", clips.len());
        AnimationError::AnimationIndexOutOfRange {
            index,
            count: clips.len(),
        }
    })
}
