use crate::animation::values::Interpolatable;
use crate::errors::{AnimationError, Result};

/// A sequence of keys for one channel of one node.
///
/// Keys are stored as parallel `times` / `values` arrays. A track always has
/// at least one key and its times are strictly increasing; both are checked
/// by [`KeyframeTrack::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(AnimationError::KeyCountMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.is_empty() {
            return Err(AnimationError::EmptyTrack);
        }
        if let Some(index) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AnimationError::UnsortedKeys { index: index + 1 });
        }

        Ok(Self { times, values })
    }

    /// A single-key track, constant over time.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self {
            times: vec![0.0],
            values: vec![value],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Time of the last key.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times[self.times.len() - 1]
    }

    /// Returns the smallest `i` such that `times[i + 1] > time`.
    ///
    /// Falls back to `0` when no key after `time` exists, which includes
    /// single-key tracks. Key counts per node are small, so this is a plain
    /// linear scan.
    #[must_use]
    pub fn find_key_index(&self, time: f32) -> usize {
        self.times
            .windows(2)
            .position(|w| time < w[1])
            .unwrap_or(0)
    }

    /// Normalized position of `time` between key `index` and key `index + 1`.
    #[must_use]
    pub fn blend_factor(&self, index: usize, time: f32) -> f32 {
        let next = index + 1;
        debug_assert!(next < self.times.len(), "no key after index {index}");

        let t0 = self.times[index];
        let t1 = self.times[next];
        (time - t0) / (t1 - t0)
    }

    /// Samples the track at `time` (in ticks).
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        // Fast path: static data (single keyframe)
        if self.times.len() == 1 {
            return self.values[0];
        }

        // At or past the final key the lookup falls back to index 0, so the
        // final value is held here instead.
        if time >= self.end_time() {
            return self.values[self.values.len() - 1];
        }

        let index = self.find_key_index(time);
        if self.times[index] > time {
            return self.values[index];
        }

        let factor = self.blend_factor(index, time);
        debug_assert!(
            (0.0..=1.0).contains(&factor),
            "interpolation factor {factor} out of range"
        );

        T::interpolate_linear(self.values[index], self.values[index + 1], factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_key_index_scans_for_first_later_key() {
        let track = KeyframeTrack::new(vec![0.0, 1.0, 2.0, 4.0], vec![0.0_f32; 4]).unwrap();

        assert_eq!(track.find_key_index(0.0), 0);
        assert_eq!(track.find_key_index(0.99), 0);
        assert_eq!(track.find_key_index(1.0), 1);
        assert_eq!(track.find_key_index(3.5), 2);
        // Past the final key: fallback to 0
        assert_eq!(track.find_key_index(4.0), 0);
        assert_eq!(track.find_key_index(10.0), 0);
    }

    #[test]
    fn find_key_index_single_key() {
        let track = KeyframeTrack::constant(3.0_f32);
        assert_eq!(track.find_key_index(-1.0), 0);
        assert_eq!(track.find_key_index(100.0), 0);
    }

    #[test]
    fn new_rejects_malformed_keys() {
        assert_eq!(
            KeyframeTrack::<f32>::new(vec![], vec![]),
            Err(AnimationError::EmptyTrack)
        );
        assert_eq!(
            KeyframeTrack::new(vec![0.0, 1.0], vec![1.0_f32]),
            Err(AnimationError::KeyCountMismatch { times: 2, values: 1 })
        );
        assert_eq!(
            KeyframeTrack::new(vec![0.0, 2.0, 2.0], vec![0.0_f32; 3]),
            Err(AnimationError::UnsortedKeys { index: 2 })
        );
    }
}
