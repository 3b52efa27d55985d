use glam::{Mat4, Quat, Vec3};

/// A node's animated local transform, kept in decomposed TRS form so two
/// clips can be blended component-wise before composing a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LocalTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Blends towards `other`: `(1 - f) * self + f * other` for translation
    /// and scale, spherical blend for rotation.
    ///
    /// The weighted sum is written out so the endpoints reproduce `self` and
    /// `other` exactly.
    #[must_use]
    pub fn blend(&self, other: &Self, factor: f32) -> Self {
        let keep = 1.0 - factor;
        Self {
            translation: keep * self.translation + factor * other.translation,
            rotation: self.rotation.slerp(other.rotation, factor).normalize(),
            scale: keep * self.scale + factor * other.scale,
        }
    }

    /// Composes `Translate * Rotate * Scale`.
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}
