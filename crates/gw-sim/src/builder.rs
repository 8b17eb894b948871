//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use gw_agent::{Agent, AgentConfig};
use gw_behavior::TargetSnapshot;
use gw_core::{AgentId, FrameClock, GridCoord, SimConfig};
use gw_grid::{GridError, GridMap, RoutePlanner};

use crate::{Sim, SimError, SimResult, TargetDriver};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: frame length, total frames, seed, …
/// - `Arc<GridMap>`: the shared, immutable map
/// - `P: RoutePlanner`: e.g. [`gw_grid::GridPlanner`]
/// - [`TargetSnapshot`]: initial state of the tracked target
///
/// # Optional inputs
///
/// | Method                   | Default                             |
/// |--------------------------|-------------------------------------|
/// | `.agent(cfg)`            | no agents                           |
/// | `.agent_at(cfg, coord)`  | random walkable spawn               |
/// | `.target_driver(d)`      | target never moves                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, map, GridPlanner::new(), target)
///     .agents(vec![AgentConfig::new(BehaviorKind::Wander); 10])
///     .agent_at(AgentConfig::new(BehaviorKind::ChaseDirect), GridCoord::new(0, 0))
///     .build()?;
/// ```
pub struct SimBuilder<P: RoutePlanner> {
    config:  SimConfig,
    map:     Arc<GridMap>,
    planner: P,
    target:  TargetSnapshot,
    agents:  Vec<(AgentConfig, Option<GridCoord>)>,
    driver:  Option<Box<dyn TargetDriver>>,
}

impl<P: RoutePlanner> SimBuilder<P> {
    pub fn new(config: SimConfig, map: Arc<GridMap>, planner: P, target: TargetSnapshot) -> Self {
        Self {
            config,
            map,
            planner,
            target,
            agents: Vec::new(),
            driver: None,
        }
    }

    /// Add one agent spawned on a random walkable cell.
    pub fn agent(mut self, config: AgentConfig) -> Self {
        self.agents.push((config, None));
        self
    }

    /// Add several agents, each spawned on a random walkable cell.
    pub fn agents(mut self, configs: impl IntoIterator<Item = AgentConfig>) -> Self {
        self.agents.extend(configs.into_iter().map(|c| (c, None)));
        self
    }

    /// Add one agent spawned on `coord`, which must be walkable.
    pub fn agent_at(mut self, config: AgentConfig, coord: GridCoord) -> Self {
        self.agents.push((config, Some(coord)));
        self
    }

    pub fn target_driver(mut self, driver: impl TargetDriver + 'static) -> Self {
        self.driver = Some(Box::new(driver));
        self
    }

    /// Validate inputs, construct and reset every agent, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Agent ids are assigned in insertion order.  Each agent's RNG is seeded
    /// from `config.seed` and its id.
    ///
    /// # Errors
    ///
    /// `SimError::Config` for a bad frame length; `SimError::Agent` for an
    /// invalid agent config or a map with no walkable cells;
    /// `SimError::Grid` for a spawn coordinate outside the map.
    pub fn build(self) -> SimResult<Sim<P>> {
        if !(self.config.frame_secs.is_finite() && self.config.frame_secs > 0.0) {
            return Err(SimError::Config(format!(
                "frame_secs must be finite and > 0, got {}",
                self.config.frame_secs
            )));
        }

        let mut agents = Vec::with_capacity(self.agents.len());
        for (i, (cfg, spawn)) in self.agents.into_iter().enumerate() {
            let id = AgentId(i as u32);
            let mut agent = Agent::new(id, cfg, Arc::clone(&self.map), self.config.seed)?;
            if let Some(coord) = spawn {
                let cell = self.map.cell_at(coord).ok_or(GridError::OutOfBounds(coord))?;
                agent.place(cell)?;
            }
            agents.push(agent);
        }

        tracing::info!(
            agents = agents.len(),
            width = self.map.width(),
            height = self.map.height(),
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock:   FrameClock::new(),
            config:  self.config,
            map:     self.map,
            planner: self.planner,
            target:  self.target,
            driver:  self.driver,
            agents,
        })
    }
}
