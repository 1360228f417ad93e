//! Host-agnostic frame pacing.
//!
//! The host calls `advance` from whatever periodic callback it has (a
//! display-refresh callback on the web, a manual loop in tests) and runs a
//! frame whenever it returns true.

use crate::constants::FPS_WINDOW_MS;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Scheduler {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    /// Start ticking. The first `advance` after a start always yields a frame.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulated = self.interval;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed elapsed wall time; true when a frame is due.
    ///
    /// At most one frame per call. Time owed beyond a single interval is
    /// dropped, so a stall renders the current state once rather than
    /// replaying missed frames.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.accumulated += elapsed;
        if self.accumulated < self.interval {
            return false;
        }
        let rest = self.accumulated - self.interval;
        self.accumulated = if rest >= self.interval {
            Duration::ZERO
        } else {
            rest
        };
        true
    }
}

/// Frames-per-second over a rolling one second window.
#[derive(Clone, Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    window: Duration,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one rendered frame that took `dt` since the previous one.
    /// Returns the new reading when a window closes.
    pub fn frame(&mut self, dt: Duration) -> Option<u32> {
        self.frames += 1;
        self.window += dt;
        if self.window >= Duration::from_millis(FPS_WINDOW_MS) {
            self.fps = self.frames;
            self.frames = 0;
            self.window = Duration::ZERO;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
