//! The `Agent` type: owned state, construction, and reset.

use std::fmt;
use std::sync::Arc;

use gw_behavior::{BehaviorKind, DecisionContext, GoalSelector, Marker, TargetSnapshot};
use gw_core::{AgentId, AgentRng, CellId, Vec2};
use gw_grid::{GridMap, Route};

use crate::{AgentConfig, AgentError, AgentResult, AgentState};

/// Random cell draws tried during relocation before falling back to the
/// map's walkable-cell list.
pub const MAX_RELOCATION_ATTEMPTS: usize = 64;

/// One NPC.
///
/// All fields are private to the crate; the state machine in
/// [`controller`](crate::controller) is the only writer after construction.
pub struct Agent {
    pub(crate) id:       AgentId,
    pub(crate) config:   AgentConfig,
    pub(crate) map:      Arc<GridMap>,
    pub(crate) selector: Box<dyn GoalSelector>,
    pub(crate) rng:      AgentRng,

    pub(crate) state:    AgentState,
    /// Last cell fully reached.
    pub(crate) current:  CellId,
    /// Cell being approached while MOVING.
    pub(crate) target:   Option<CellId>,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) marker:   Marker,
    pub(crate) route:    Route,
    /// Pursuit goal with no route from `current`.  Cleared whenever
    /// `current` changes.
    pub(crate) unreachable: Option<CellId>,
}

impl Agent {
    /// Build an agent running the selector for `config.behavior`, then
    /// [`reset`](Self::reset) it onto a random walkable cell.
    ///
    /// # Errors
    ///
    /// `AgentError::Config` for an invalid config; `AgentError::NoWalkableCell`
    /// if `map` has nowhere to stand.
    pub fn new(id: AgentId, config: AgentConfig, map: Arc<GridMap>, seed: u64) -> AgentResult<Self> {
        config.validate()?;
        let selector = config.behavior.build_selector(config.chase_offset)?;
        Self::assemble(id, config, map, seed, selector)
    }

    /// Like [`new`](Self::new) but with a caller-supplied selector.
    /// `config.behavior` is ignored in favour of `selector.kind()`.
    pub fn with_selector(
        id:       AgentId,
        config:   AgentConfig,
        map:      Arc<GridMap>,
        seed:     u64,
        selector: Box<dyn GoalSelector>,
    ) -> AgentResult<Self> {
        config.validate()?;
        Self::assemble(id, config, map, seed, selector)
    }

    /// Construct and reset from an already validated config.
    fn assemble(
        id:       AgentId,
        config:   AgentConfig,
        map:      Arc<GridMap>,
        seed:     u64,
        selector: Box<dyn GoalSelector>,
    ) -> AgentResult<Self> {
        let marker = selector.marker();
        let behavior = selector.kind();
        let mut agent = Self {
            id,
            config:   AgentConfig { behavior, ..config },
            map,
            selector,
            rng:      AgentRng::new(seed, id),
            state:    AgentState::Deciding,
            current:  CellId::INVALID,
            target:   None,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            marker,
            route:    Route::new(),
            unreachable: None,
        };
        agent.reset()?;
        Ok(agent)
    }

    // ── Reset & placement ─────────────────────────────────────────────────

    /// Clear the route, return to DECIDING, and relocate to a freshly chosen
    /// walkable cell.
    ///
    /// Draws up to [`MAX_RELOCATION_ATTEMPTS`] random cells, then picks from
    /// the map's walkable list.  Always terminates.
    pub fn reset(&mut self) -> AgentResult<()> {
        self.clear_motion();
        let cell = self.find_walkable_cell()?;
        self.current = cell;
        self.position = self.map.position(cell);
        tracing::info!(agent = %self.id, cell = %self.map.coord_of(cell), "agent reset");
        Ok(())
    }

    /// Put the agent on a specific walkable cell, clearing its route and
    /// returning it to DECIDING.
    pub fn place(&mut self, cell: CellId) -> AgentResult<()> {
        if !self.map.is_walkable(cell) {
            return Err(AgentError::NotWalkable(cell));
        }
        self.clear_motion();
        self.current = cell;
        self.position = self.map.position(cell);
        Ok(())
    }

    fn clear_motion(&mut self) {
        self.route.clear();
        self.state = AgentState::Deciding;
        self.target = None;
        self.unreachable = None;
        self.velocity = Vec2::ZERO;
        self.marker = self.selector.marker();
    }

    fn find_walkable_cell(&mut self) -> AgentResult<CellId> {
        let n = self.map.cell_count() as u32;
        if n > 0 {
            for _ in 0..MAX_RELOCATION_ATTEMPTS {
                let candidate = CellId(self.rng.gen_range(0..n));
                if self.map.is_walkable(candidate) {
                    return Ok(candidate);
                }
            }
        }
        match self.rng.choose(self.map.walkable_cells()) {
            Some(&cell) => {
                tracing::warn!(
                    agent = %self.id,
                    attempts = MAX_RELOCATION_ATTEMPTS,
                    "random relocation exhausted; picked from walkable list"
                );
                Ok(cell)
            }
            None => Err(AgentError::NoWalkableCell {
                width:  self.map.width(),
                height: self.map.height(),
            }),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn behavior(&self) -> BehaviorKind {
        self.selector.kind()
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn current_cell(&self) -> CellId {
        self.current
    }

    pub fn target_cell(&self) -> Option<CellId> {
        self.target
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Cells still queued after the current target.
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn route_len(&self) -> usize {
        self.route.len()
    }

    pub fn map(&self) -> &Arc<GridMap> {
        &self.map
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state == AgentState::Moving
    }

    pub(crate) fn decision_context(&self, target: &TargetSnapshot) -> DecisionContext<'_> {
        DecisionContext::new(
            &self.map,
            self.position,
            self.current,
            *target,
            self.config.vision_radius,
        )
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("behavior", &self.selector.kind())
            .field("state", &self.state)
            .field("current", &self.current)
            .field("target", &self.target)
            .field("position", &self.position)
            .field("route_len", &self.route.len())
            .finish()
    }
}
