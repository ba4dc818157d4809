// Scheduling helpers for the frame loop.

use std::time::{Duration, Instant};

/// A cancellable one-shot task: scheduling again replaces whatever was pending,
/// so only the last request fires once things have been quiet for `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Cancel any pending value and schedule `value` for `now + delay`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((at, _)) if now >= *at);
        if !due {
            return None;
        }
        self.pending.take().map(|(_, v)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Counts frames and reports frames-per-second once per `window`.
#[derive(Debug)]
pub struct FpsCounter {
    window: Duration,
    since: Instant,
    frames: u32,
    last: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { window: Duration::from_secs(1), since: now, frames: 0, last: 0.0 }
    }

    /// Count one frame. Returns a fresh FPS sample when a window closes.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.since);
        if elapsed < self.window {
            return None;
        }
        self.last = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(self.last)
    }

    pub fn last(&self) -> f32 {
        self.last
    }
}
