#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Wall-clock playback time with pause support.
///
/// Produces the `elapsed_seconds` fed to the evaluator: time since the clock
/// started, minus every interval spent paused. The `*_at` variants take an
/// explicit instant so hosts can drive the clock from their own frame time.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    start_time: Instant,
    paused_since: Option<Instant>,
    /// Accumulated length of finished pauses
    total_paused: Duration,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock {
    /// Creates a running clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    #[must_use]
    pub fn started_at(start_time: Instant) -> Self {
        Self {
            start_time,
            paused_since: None,
            total_paused: Duration::ZERO,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    /// No-op if already paused.
    pub fn pause_at(&mut self, now: Instant) {
        if self.paused_since.is_none() {
            self.paused_since = Some(now);
        }
    }

    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    /// No-op if not paused.
    pub fn resume_at(&mut self, now: Instant) {
        if let Some(since) = self.paused_since.take() {
            self.total_paused += now.saturating_duration_since(since);
        }
    }

    /// Toggles between paused and running.
    pub fn toggle_at(&mut self, now: Instant) {
        if self.is_paused() {
            self.resume_at(now);
        } else {
            self.pause_at(now);
        }
    }

    /// Restarts playback from zero at `now`, running.
    pub fn reset_at(&mut self, now: Instant) {
        *self = Self::started_at(now);
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds_at(Instant::now())
    }

    /// Playback time at `now`. While paused the value stays frozen at the
    /// moment the pause began.
    #[must_use]
    pub fn elapsed_seconds_at(&self, now: Instant) -> f32 {
        let now = self.paused_since.unwrap_or(now);
        let running = now.saturating_duration_since(self.start_time);
        running.saturating_sub(self.total_paused).as_secs_f32()
    }
}
