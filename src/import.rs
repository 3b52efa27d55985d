//! Import Collaborator Interface
//!
//! Plain data handed over by whatever parses the source file format. Nothing
//! here is interpreted yet; [`SkinnedModel::from_import`] validates and
//! converts it.
//!
//! Every type derives `serde` so a scene can be described as JSON:
//!
//! ```json
//! {
//!   "root": { "name": "Armature", "children": [ { "name": "Hip" } ] },
//!   "animations": [ { "name": "Idle", "ticks_per_second": 30.0, "duration": 60.0 } ]
//! }
//! ```
//!
//! Matrices are column-major arrays of 16 floats, quaternions are `[x, y, z, w]`.
//!
//! [`SkinnedModel::from_import`]: crate::model::SkinnedModel::from_import

use std::path::PathBuf;

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

fn identity() -> Mat4 {
    Mat4::IDENTITY
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneImport {
    /// Path of the file the scene came from; external textures resolve
    /// relative to its directory.
    #[serde(default)]
    pub source_path: Option<PathBuf>,
    pub root: NodeImport,
    #[serde(default)]
    pub meshes: Vec<MeshImport>,
    #[serde(default)]
    pub materials: Vec<MaterialImport>,
    #[serde(default)]
    pub animations: Vec<AnimationImport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeImport {
    pub name: String,
    #[serde(default = "identity")]
    pub transform: Mat4,
    #[serde(default)]
    pub children: Vec<NodeImport>,
}

impl Default for NodeImport {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Mat4::IDENTITY,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshImport {
    #[serde(default)]
    pub name: String,
    pub positions: Vec<Vec3>,
    #[serde(default)]
    pub normals: Option<Vec<Vec3>>,
    /// First UV channel.
    #[serde(default)]
    pub tex_coords: Option<Vec<Vec2>>,
    /// Triangle list, indices relative to this mesh's vertices.
    #[serde(default)]
    pub indices: Vec<u32>,
    #[serde(default)]
    pub material_index: u32,
    #[serde(default)]
    pub bones: Vec<BoneImport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoneImport {
    pub name: String,
    #[serde(default = "identity")]
    pub offset_matrix: Mat4,
    #[serde(default)]
    pub weights: Vec<VertexWeightImport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexWeightImport {
    /// Index relative to the owning mesh.
    pub vertex_id: u32,
    pub weight: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialImport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ambient: Option<Vec3>,
    #[serde(default)]
    pub diffuse: Option<Vec3>,
    #[serde(default)]
    pub specular: Option<Vec3>,
    #[serde(default)]
    pub diffuse_texture: Option<TextureImport>,
    #[serde(default)]
    pub specular_exponent_texture: Option<TextureImport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureImport {
    /// Texture data stored inside the scene file.
    Embedded { index: u32 },
    /// Path as written in the file, usually relative to it.
    File { path: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationImport {
    pub name: String,
    /// `0` means "not declared".
    #[serde(default)]
    pub ticks_per_second: f32,
    pub duration: f32,
    #[serde(default)]
    pub channels: Vec<ChannelImport>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelImport {
    pub node_name: String,
    pub position_keys: Vec<KeyImport<Vec3>>,
    pub rotation_keys: Vec<KeyImport<Quat>>,
    pub scale_keys: Vec<KeyImport<Vec3>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyImport<T> {
    /// Time in ticks.
    pub time: f32,
    pub value: T,
}

impl<T> KeyImport<T> {
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}
