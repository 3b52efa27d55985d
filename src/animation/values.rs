use glam::{Quat, Vec3};

/// Values a [`KeyframeTrack`](super::KeyframeTrack) can interpolate between
/// two bracketing keys.
pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + t * (end - start)
    }
}

impl Interpolatable for Quat {
    /// Shortest-arc slerp, renormalized to absorb floating-point drift.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t).normalize()
    }
}
