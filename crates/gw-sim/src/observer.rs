//! Simulation observer trait for progress reporting and data collection.

use gw_agent::Agent;
use gw_core::Frame;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, moving: usize) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame}: {moving} agents moving");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any processing.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called at the end of each frame.
    ///
    /// `moving` is the number of agents in the MOVING state after the frame.
    fn on_frame_end(&mut self, _frame: Frame, _moving: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_frames`).
    ///
    /// Provides read-only access to every agent so output writers can record
    /// state without the sim knowing any output format.
    fn on_snapshot(&mut self, _frame: Frame, _agents: &[Agent]) {}

    /// Called once after the final frame of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
