//! The `GoalSelector` trait and the read-only context it decides from.

use gw_core::{CellId, Vec2};
use gw_grid::GridMap;

use crate::{BehaviorKind, Marker, TargetSnapshot};

/// What the agent should plan toward on this decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Follow the current random walk, refilling it when empty.
    Wander,
    /// Plan the shortest path to this cell.
    Pursue(CellId),
}

/// Everything a selector may look at when deciding.
///
/// Built by the agent on the stack for each decision; borrows the shared map
/// and copies the per-frame target snapshot.
#[derive(Copy, Clone)]
pub struct DecisionContext<'a> {
    pub map:           &'a GridMap,
    /// Agent's continuous world position.
    pub agent_pos:     Vec2,
    /// Last cell the agent fully reached.
    pub current:       CellId,
    pub target:        TargetSnapshot,
    pub vision_radius: f32,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(
        map:           &'a GridMap,
        agent_pos:     Vec2,
        current:       CellId,
        target:        TargetSnapshot,
        vision_radius: f32,
    ) -> Self {
        Self { map, agent_pos, current, target, vision_radius }
    }

    /// `true` when the target is at most `vision_radius` away.
    #[inline]
    pub fn target_in_vision(&self) -> bool {
        self.agent_pos.within(self.target.position, self.vision_radius)
    }
}

/// Pluggable goal selection.
///
/// One boxed selector is owned by each agent for its lifetime.  The agent
/// state machine calls [`select_goal`](Self::select_goal) on every decision
/// and, for pursuit selectors, again at every full cell arrival.
///
/// # Thread safety
///
/// Agents may be ticked in parallel, so selectors must be `Send + Sync` and
/// keep no mutable state.
pub trait GoalSelector: Send + Sync {
    fn kind(&self) -> BehaviorKind;

    /// Marker shown while this selector drives the agent.
    fn marker(&self) -> Marker {
        self.kind().marker()
    }

    /// Whether this selector ever returns [`Goal::Pursue`].  Non-pursuit
    /// selectors skip the arrival-time re-plan entirely.
    fn is_pursuit(&self) -> bool {
        self.kind().is_pursuit()
    }

    fn select_goal(&self, ctx: &DecisionContext<'_>) -> Goal;
}
