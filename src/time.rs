//! Timing for the host frame loop.
//!
//! [`Time`] is the per-frame clock a host render loop drives: call
//! `update()` once per frame and read back `(elapsed, delta)` to feed
//! the engine's `tick`. [`PulseClock`] is the fixed-interval phase
//! toggler behind the heartbeat variant: every 0.1 s of accumulated
//! delta time it flips between the expansion and contraction phase.
//!
//! The engine itself never reads a wall clock — it only consumes the
//! `delta_time` the host hands it, so frame pacing stays the host's
//! concern.

use std::time::Instant;

/// Interval between heartbeat phase flips, in seconds.
pub const HEARTBEAT_INTERVAL: f32 = 0.1;

/// Frame clock for host loops.
///
/// ```ignore
/// let mut time = Time::new();
/// loop {
///     let (_, delta) = time.update();
///     sim.tick(delta);
/// }
/// ```
#[derive(Debug)]
pub struct Time {
    /// When the clock was created or reset.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total elapsed time in seconds.
    elapsed_secs: f32,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Multiplier applied to delta and elapsed time.
    time_scale: f32,
    /// Whether the clock is paused.
    paused: bool,
}

impl Time {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            time_scale: 1.0,
            paused: false,
        }
    }

    /// Advance the clock. Call once per frame.
    ///
    /// Returns `(elapsed, delta)` in seconds. While paused, delta is 0
    /// and elapsed stops increasing.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();
        if self.paused {
            self.last_frame = now;
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32() * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.last_frame = now;
        self.frame_count += 1;

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total scaled time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Scaled time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Pause the clock; `delta()` reads 0 until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause.
    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    /// Set the time scale multiplier (clamped to >= 0).
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset to a fresh clock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-interval phase toggler.
///
/// Accumulates delta time and flips its boolean phase every `interval`
/// seconds. The heartbeat variant drives its repel/attract alternation
/// from one of these at [`HEARTBEAT_INTERVAL`].
#[derive(Debug, Clone, Copy)]
pub struct PulseClock {
    /// Seconds between phase flips.
    interval: f32,
    /// Delta time accumulated since the last flip.
    accumulated: f32,
    /// Current phase.
    phase: bool,
}

impl PulseClock {
    /// Create a toggler that flips every `interval` seconds.
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
            phase: false,
        }
    }

    /// Toggler at the heartbeat cadence.
    pub fn heartbeat() -> Self {
        Self::new(HEARTBEAT_INTERVAL)
    }

    /// Accumulate `delta_time` and return the (possibly flipped) phase.
    ///
    /// A delta spanning several intervals flips once per interval, so
    /// a long frame cannot leave the phase stuck.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        self.accumulated += delta_time.max(0.0);
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            self.phase = !self.phase;
        }
        self.phase
    }

    /// The current phase without advancing.
    #[inline]
    pub fn phase(&self) -> bool {
        self.phase
    }
}
