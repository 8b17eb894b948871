//! Simulation time model.
//!
//! # Design
//!
//! Time advances in discrete frames.  Each frame carries a scalar `dt` in
//! seconds that agents use to scale their displacement.  `FrameClock` keeps
//! the integer frame counter (exact, used for output intervals) and the
//! accumulated elapsed seconds (used only for reporting).
//!
//! A fixed `frame_secs` is the default for reproducible runs; callers that
//! drive the simulation from a real render loop pass their own `dt` per step.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute simulation frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and the simulated seconds elapsed since frame 0.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    pub current_frame: Frame,
    pub elapsed_secs:  f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame that lasted `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_frame = Frame(self.current_frame.0 + 1);
        self.elapsed_secs += dt as f64;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_frame, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON scenario file by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per frame for `Sim::run`.  Default: 1/60.
    pub frame_secs: f32,

    /// Total frames to simulate with `Sim::run`.
    pub total_frames: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a snapshot every N frames.  0 disables snapshots.
    pub output_interval_frames: u64,
}

impl SimConfig {
    /// The frame at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// `true` if a snapshot is due at `frame`.
    #[inline]
    pub fn is_snapshot_frame(&self, frame: Frame) -> bool {
        self.output_interval_frames > 0 && frame.0 % self.output_interval_frames == 0
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_secs:             1.0 / 60.0,
            total_frames:           600,
            seed:                   0,
            num_threads:            None,
            output_interval_frames: 1,
        }
    }
}
