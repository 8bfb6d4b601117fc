//! Time management utilities
//!
//! `Timer` measures real frame deltas from a monotonic clock; `FixedTimestep`
//! turns those variable deltas into a whole number of fixed simulation ticks
//! plus an interpolation fraction for the renderer.

use std::time::Instant;

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Restart delta measurement from the current instant
    ///
    /// Called when the loop starts so the first frame does not absorb all the
    /// time spent in initialization.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
        self.delta_time = 0.0;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Fixed-timestep accumulator
///
/// Accumulates real frame time and drains it in whole ticks of a fixed
/// interval. The leftover fraction of a tick is exposed as the interpolation
/// alpha used to blend rendered poses between the last two simulation states.
///
/// The drain is bounded by `max_ticks_per_frame`: after a long stall the
/// simulation catches up by at most that many ticks and the remaining backlog
/// is dropped, which trades a small simulation hiccup for not spiraling into
/// ever-longer frames.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_interval: f32,
    accumulator: f32,
    alpha: f32,
    max_ticks_per_frame: u32,
}

impl FixedTimestep {
    /// Create an accumulator running at the given tick rate (ticks per second)
    pub fn new(tick_rate: f32, max_ticks_per_frame: u32) -> Self {
        assert!(tick_rate > 0.0, "tick rate must be positive");
        Self {
            tick_interval: 1.0 / tick_rate,
            accumulator: 0.0,
            alpha: 0.0,
            max_ticks_per_frame,
        }
    }

    /// Add a frame's worth of real time and return how many fixed ticks to run
    ///
    /// Updates the interpolation alpha as a side effect. The returned count is
    /// capped at `max_ticks_per_frame`; any backlog beyond the cap is dropped
    /// with a warning so the accumulator ends below one interval.
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        self.accumulator += frame_delta;

        let mut ticks = 0;
        while self.accumulator >= self.tick_interval && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick_interval;
            ticks += 1;
        }

        if self.accumulator >= self.tick_interval {
            log::warn!(
                "Frame stalled: dropping {:.3}s of simulation backlog after {} catch-up ticks",
                self.accumulator - self.accumulator % self.tick_interval,
                ticks
            );
            self.accumulator %= self.tick_interval;
        }

        self.alpha = self.accumulator / self.tick_interval;
        ticks
    }

    /// Fraction of the way from the last completed tick to the next, in `[0, 1)`
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The fixed simulation interval in seconds
    pub fn tick_interval(&self) -> f32 {
        self.tick_interval
    }

    /// Unconsumed real time currently in the accumulator
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}
