//! Keyframe Animation
//!
//! - [`KeyframeTrack`]: ordered keys with linear / spherical interpolation
//! - [`AnimationClip`]: per-node channels with tick rate and duration
//! - [`AnimationEvaluator`]: hierarchy walk producing final bone transforms,
//!   for one clip or two blended clips
//! - [`PlaybackClock`]: pausable wall-clock time source for evaluation

mod values;
pub mod tracks;
pub mod clip;
pub mod pose;
pub mod evaluator;
pub mod clock;

pub use clip::{AnimationClip, NodeAnimTrack};
pub use clock::PlaybackClock;
pub use evaluator::AnimationEvaluator;
pub use pose::LocalTransform;
pub use tracks::KeyframeTrack;
pub use values::Interpolatable;
