use std::collections::hash_map::Entry;

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::pose::LocalTransform;
use crate::animation::tracks::KeyframeTrack;
use crate::animation::values::Interpolatable;
use crate::errors::Result;
use crate::import::{AnimationImport, KeyImport};
use crate::settings::DEFAULT_TICKS_PER_SECOND;

/// Position, rotation and scale keys driving a single node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAnimTrack {
    pub position: KeyframeTrack<Vec3>,
    pub rotation: KeyframeTrack<Quat>,
    pub scale: KeyframeTrack<Vec3>,
}

impl NodeAnimTrack {
    #[must_use]
    pub fn new(
        position: KeyframeTrack<Vec3>,
        rotation: KeyframeTrack<Quat>,
        scale: KeyframeTrack<Vec3>,
    ) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// A channel that only animates rotation; position and scale stay at
    /// the identity values.
    #[must_use]
    pub fn rotation_only(rotation: KeyframeTrack<Quat>) -> Self {
        Self::new(
            KeyframeTrack::constant(Vec3::ZERO),
            rotation,
            KeyframeTrack::constant(Vec3::ONE),
        )
    }

    /// Samples all three channels independently at `ticks`.
    #[must_use]
    pub fn sample(&self, ticks: f32) -> LocalTransform {
        LocalTransform {
            translation: self.position.sample(ticks),
            rotation: self.rotation.sample(ticks),
            scale: self.scale.sample(ticks),
        }
    }
}

/// One imported animation sequence: per-node channels keyed by node name.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    ticks_per_second: f32,
    duration_ticks: f32,
    channels: FxHashMap<String, NodeAnimTrack>,
}

impl AnimationClip {
    /// Creates an empty clip. A `ticks_per_second` of `0` falls back to
    /// [`DEFAULT_TICKS_PER_SECOND`].
    #[must_use]
    pub fn new(name: impl Into<String>, ticks_per_second: f32, duration_ticks: f32) -> Self {
        Self::with_default_rate(name, ticks_per_second, duration_ticks, DEFAULT_TICKS_PER_SECOND)
    }

    fn with_default_rate(
        name: impl Into<String>,
        ticks_per_second: f32,
        duration_ticks: f32,
        default_rate: f32,
    ) -> Self {
        let ticks_per_second = if ticks_per_second == 0.0 {
            default_rate
        } else {
            ticks_per_second
        };

        Self {
            name: name.into(),
            ticks_per_second,
            duration_ticks,
            channels: FxHashMap::default(),
        }
    }

    /// Builds a clip from imported key data, validating every track.
    pub fn from_import(import: &AnimationImport, default_ticks_per_second: f32) -> Result<Self> {
        let mut clip = Self::with_default_rate(
            import.name.clone(),
            import.ticks_per_second,
            import.duration,
            default_ticks_per_second,
        );

        for channel in &import.channels {
            clip.insert_channel(
                channel.node_name.clone(),
                NodeAnimTrack::new(
                    track_from_keys(&channel.position_keys)?,
                    track_from_keys(&channel.rotation_keys)?,
                    track_from_keys(&channel.scale_keys)?,
                ),
            );
        }

        log::trace!(
            "Animation '{}': {} channels, {} ticks at {} ticks/s",
            clip.name,
            clip.channels.len(),
            clip.duration_ticks,
            clip.ticks_per_second
        );

        Ok(clip)
    }

    #[must_use]
    pub fn with_channel(mut self, node_name: impl Into<String>, track: NodeAnimTrack) -> Self {
        self.insert_channel(node_name, track);
        self
    }

    /// Adds the channel for `node_name`. The first channel declared for a
    /// node wins; later duplicates are ignored.
    pub fn insert_channel(&mut self, node_name: impl Into<String>, track: NodeAnimTrack) {
        match self.channels.entry(node_name.into()) {
            Entry::Vacant(entry) => {
                entry.insert(track);
            }
            Entry::Occupied(entry) => {
                log::warn!(
                    "Animation '{}' declares node '{}' twice, ignoring the later channel",
                    self.name,
                    entry.key()
                );
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn channel(&self, node_name: &str) -> Option<&NodeAnimTrack> {
        self.channels.get(node_name)
    }

    #[inline]
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    #[must_use]
    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    #[inline]
    #[must_use]
    pub fn duration_ticks(&self) -> f32 {
        self.duration_ticks
    }

    /// Playback loops on whole ticks: the fractional part of the declared
    /// duration is discarded.
    #[inline]
    #[must_use]
    pub fn loop_duration_ticks(&self) -> f32 {
        self.duration_ticks.trunc()
    }

    /// Converts wall-clock seconds into clip-local ticks, wrapped into the
    /// loop duration.
    ///
    /// Clips shorter than one whole tick stay pinned at tick `0`, as does a
    /// non-finite `elapsed_seconds`.
    #[must_use]
    pub fn animation_time_ticks(&self, elapsed_seconds: f32) -> f32 {
        if !elapsed_seconds.is_finite() {
            log::warn!(
                "Animation '{}' sampled at non-finite time {elapsed_seconds}, using tick 0",
                self.name
            );
            return 0.0;
        }

        let ticks = elapsed_seconds * self.ticks_per_second;
        let duration = self.loop_duration_ticks();
        if duration <= 0.0 {
            return 0.0;
        }
        ticks % duration
    }
}

fn track_from_keys<T: Interpolatable>(keys: &[KeyImport<T>]) -> Result<KeyframeTrack<T>> {
    let (times, values): (Vec<f32>, Vec<T>) = keys.iter().map(|k| (k.time, k.value)).unzip();
    KeyframeTrack::new(times, values)
}
