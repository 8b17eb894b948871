//! The `Sim` struct and its frame loop.

use std::sync::Arc;

use gw_agent::Agent;
use gw_behavior::{TargetSnapshot, TrackedTarget};
use gw_core::{AgentId, Frame, FrameClock, GwError, SimConfig};
use gw_grid::{GridMap, RoutePlanner};

use crate::{NoopObserver, SimObserver, SimResult, TargetDriver};

/// The main simulation runner.
///
/// `Sim<P>` owns every agent, the planner, and the per-frame target
/// snapshot.  Each frame:
///
/// 1. The [`TargetDriver`], if any, updates the target snapshot.
/// 2. Every agent runs one [`Agent::tick`] against that snapshot
///    (optionally parallel with the `parallel` feature).
/// 3. Observers are notified.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: RoutePlanner> {
    /// Global configuration (frame length, total frames, seed, …).
    pub config: SimConfig,

    /// Current frame and elapsed simulated seconds.
    pub clock: FrameClock,

    /// The shared map every agent plans against.
    pub map: Arc<GridMap>,

    /// Route planner shared by all agents.
    pub planner: P,

    pub(crate) target: TargetSnapshot,
    pub(crate) driver: Option<Box<dyn TargetDriver>>,
    pub(crate) agents: Vec<Agent>,
}

impl<P: RoutePlanner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()` with a fixed
    /// `config.frame_secs` per frame.
    ///
    /// Calls observer hooks at every frame boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let dt = self.config.frame_secs;
        while self.clock.current_frame < self.config.end_frame() {
            self.process_frame(dt, observer);
        }
        tracing::info!(
            frames = self.clock.current_frame.0,
            elapsed_secs = self.clock.elapsed_secs,
            "simulation finished"
        );
        observer.on_sim_end(self.clock.current_frame);
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `end_frame`, does not call `on_sim_end`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let dt = self.config.frame_secs;
        for _ in 0..n {
            self.process_frame(dt, observer);
        }
        Ok(())
    }

    /// Advance one frame of `dt` seconds without observers.  Returns the
    /// number of agents MOVING afterwards.
    ///
    /// For callers driving the simulation from their own loop (e.g. a
    /// render loop with variable frame time).
    pub fn step(&mut self, dt: f32) -> usize {
        self.process_frame(dt, &mut NoopObserver)
    }

    /// Reset every agent: clear routes, return to DECIDING, relocate.
    pub fn reset_agents(&mut self) -> SimResult<()> {
        for agent in &mut self.agents {
            agent.reset()?;
        }
        tracing::info!(agents = self.agents.len(), "all agents reset");
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        self.agents
            .get(id.index())
            .ok_or_else(|| GwError::AgentNotFound(id).into())
    }

    pub fn agent_mut(&mut self, id: AgentId) -> SimResult<&mut Agent> {
        self.agents
            .get_mut(id.index())
            .ok_or_else(|| GwError::AgentNotFound(id).into())
    }

    pub fn target(&self) -> &TargetSnapshot {
        &self.target
    }

    /// Mutable target snapshot for callers that move the target themselves.
    pub fn target_mut(&mut self) -> &mut TargetSnapshot {
        &mut self.target
    }

    /// Replace the snapshot with the current state of `target`.
    pub fn track<T: TrackedTarget + ?Sized>(&mut self, target: &T) {
        self.target = TargetSnapshot::capture(target);
    }

    pub fn frame(&self) -> Frame {
        self.clock.current_frame
    }

    // ── Frame processing ──────────────────────────────────────────────────

    fn process_frame<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> usize {
        let frame = self.clock.current_frame;
        observer.on_frame_start(frame);

        if let Some(driver) = self.driver.as_mut() {
            driver.update(frame, dt, &mut self.target);
        }

        self.tick_agents(dt);
        let moving = self.agents.iter().filter(|a| a.is_moving()).count();

        observer.on_frame_end(frame, moving);
        if self.config.is_snapshot_frame(frame) {
            observer.on_snapshot(frame, &self.agents);
        }

        self.clock.advance(dt);
        moving
    }

    fn tick_agents(&mut self, dt: f32) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let planner = &self.planner;
        let target  = &self.target;
        let agents  = &mut self.agents;

        #[cfg(not(feature = "parallel"))]
        {
            for agent in agents.iter_mut() {
                agent.tick(planner, target, dt);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents.par_iter_mut().for_each(|agent| {
                agent.tick(planner, target, dt);
            });
        }
    }
}
