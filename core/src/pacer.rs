//! Fixed-interval frame pacing for when the host is not syncing to vblank.

use std::time::{Duration, Instant};

/// One 60 Hz frame (16,666.67 µs).
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Monotonic time source and sleep primitive.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

/// [`Instant`] and [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

pub struct FramePacer<C: Clock = SystemClock> {
    clock: C,
    interval: Duration,
    frame_start: Instant,
}

impl FramePacer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FramePacer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FramePacer<C> {
    pub fn with_clock(clock: C) -> Self {
        let frame_start = clock.now();
        Self {
            clock,
            interval: FRAME_INTERVAL,
            frame_start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Block until one interval has passed since the previous frame.
    ///
    /// Does nothing at all when `vsync` is set: the host paces presentation.
    /// Otherwise sleeps for the rest of the interval (if any) and starts the
    /// next frame. Returns how long it slept.
    pub fn pace_frame(&mut self, vsync: bool) -> Duration {
        if vsync {
            return Duration::ZERO;
        }
        let elapsed = self.clock.now().saturating_duration_since(self.frame_start);
        let remaining = self.interval.saturating_sub(elapsed);
        if !remaining.is_zero() {
            self.clock.sleep(remaining);
        }
        self.frame_start = self.clock.now();
        remaining
    }
}
