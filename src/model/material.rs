use std::path::{Path, PathBuf};

use glam::{Vec3, Vec4};

use crate::import::{MaterialImport, TextureImport};

/// Where a material's texture comes from. Decoding is left to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureRef {
    Embedded(u32),
    File(PathBuf),
}

impl TextureRef {
    /// Resolves an imported reference; file paths become relative to
    /// `model_dir` with a leading `./` stripped.
    #[must_use]
    pub fn resolve(import: &TextureImport, model_dir: &Path) -> Self {
        match import {
            TextureImport::Embedded { index } => TextureRef::Embedded(*index),
            TextureImport::File { path } => {
                let relative = path
                    .strip_prefix("./")
                    .or_else(|| path.strip_prefix(".\\"))
                    .unwrap_or(path.as_str());
                TextureRef::File(model_dir.join(relative))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient_color: Vec4,
    pub diffuse_color: Vec4,
    pub specular_color: Vec4,
    /// `None` when the material has no diffuse texture.
    pub diffuse_texture: Option<TextureRef>,
    pub specular_exponent_texture: Option<TextureRef>,
}

impl Material {
    /// Converts imported material data. A missing ambient colour becomes
    /// all ones; missing diffuse/specular colours stay zero.
    #[must_use]
    pub fn from_import(import: &MaterialImport, model_dir: &Path) -> Self {
        let ambient_color = import.ambient.map_or_else(
            || {
                log::warn!("Material '{}' has no ambient colour, using white", import.name);
                Vec4::ONE
            },
            |c| c.extend(0.0),
        );
        let diffuse_color = import.diffuse.unwrap_or(Vec3::ZERO).extend(0.0);
        let specular_color = import.specular.unwrap_or(Vec3::ZERO).extend(0.0);

        let diffuse_texture = import
            .diffuse_texture
            .as_ref()
            .map(|t| TextureRef::resolve(t, model_dir));
        if diffuse_texture.is_none() {
            log::warn!("Material '{}' has no diffuse texture", import.name);
        }

        Self {
            name: import.name.clone(),
            ambient_color,
            diffuse_color,
            specular_color,
            diffuse_texture,
            specular_exponent_texture: import
                .specular_exponent_texture
                .as_ref()
                .map(|t| TextureRef::resolve(t, model_dir)),
        }
    }
}
