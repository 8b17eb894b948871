//! The three built-in strategies and their serialisable selector.

use std::fmt;

use gw_core::Vec2;

use crate::{BehaviorError, BehaviorResult, DecisionContext, Goal, GoalSelector, Marker};

/// Default lateral offset (world units, along +x) for [`ChaseOffset`].
pub const DEFAULT_CHASE_OFFSET: f32 = 2.0;

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// Which strategy an agent runs.  Fixed at configuration time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BehaviorKind {
    #[default]
    Wander,
    ChaseDirect,
    ChaseOffset,
}

impl BehaviorKind {
    pub fn marker(self) -> Marker {
        match self {
            BehaviorKind::Wander      => Marker::White,
            BehaviorKind::ChaseDirect => Marker::Red,
            BehaviorKind::ChaseOffset => Marker::Blue,
        }
    }

    pub fn is_pursuit(self) -> bool {
        !matches!(self, BehaviorKind::Wander)
    }

    /// Random-walk length used when no step bound is configured: long
    /// strolls for wanderers, short ones for chasers waiting on vision.
    pub fn default_walk_steps(self) -> usize {
        match self {
            BehaviorKind::Wander => 20,
            BehaviorKind::ChaseDirect | BehaviorKind::ChaseOffset => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::Wander      => "wander",
            BehaviorKind::ChaseDirect => "chase_direct",
            BehaviorKind::ChaseOffset => "chase_offset",
        }
    }

    /// Instantiate the selector for this kind.  `offset` is only read by
    /// [`BehaviorKind::ChaseOffset`].
    pub fn build_selector(self, offset: f32) -> BehaviorResult<Box<dyn GoalSelector>> {
        Ok(match self {
            BehaviorKind::Wander      => Box::new(Wander),
            BehaviorKind::ChaseDirect => Box::new(ChaseDirect),
            BehaviorKind::ChaseOffset => Box::new(ChaseOffset::new(offset)?),
        })
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

/// Never pursues; always follows the random walk.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wander;

impl GoalSelector for Wander {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Wander
    }

    fn select_goal(&self, _ctx: &DecisionContext<'_>) -> Goal {
        Goal::Wander
    }
}

// ── ChaseDirect ───────────────────────────────────────────────────────────────

/// Pursues the cell nearest the target whenever it is in vision.
///
/// The goal is the nearest cell of any kind.  If that cell is blocked the
/// planner finds no route and the agent wanders for the tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct ChaseDirect;

impl GoalSelector for ChaseDirect {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::ChaseDirect
    }

    fn select_goal(&self, ctx: &DecisionContext<'_>) -> Goal {
        if !ctx.target_in_vision() {
            return Goal::Wander;
        }
        ctx.map
            .nearest_cell(ctx.target.position)
            .map_or(Goal::Wander, Goal::Pursue)
    }
}

// ── ChaseOffset ───────────────────────────────────────────────────────────────

/// Pursues a point `offset` world units along +x from the target's cell,
/// snapped to the nearest walkable cell.
#[derive(Copy, Clone, Debug)]
pub struct ChaseOffset {
    offset: f32,
}

impl ChaseOffset {
    pub fn new(offset: f32) -> BehaviorResult<Self> {
        if !offset.is_finite() {
            return Err(BehaviorError::InvalidOffset(offset));
        }
        Ok(Self { offset })
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Default for ChaseOffset {
    fn default() -> Self {
        Self { offset: DEFAULT_CHASE_OFFSET }
    }
}

impl GoalSelector for ChaseOffset {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::ChaseOffset
    }

    fn select_goal(&self, ctx: &DecisionContext<'_>) -> Goal {
        if !ctx.target_in_vision() {
            return Goal::Wander;
        }
        let Some(anchor) = ctx.map.nearest_cell(ctx.target.position) else {
            return Goal::Wander;
        };
        let aim = ctx.map.position(anchor) + Vec2::new(self.offset, 0.0);
        match ctx.map.nearest_walkable_cell(aim) {
            Some(cell) => Goal::Pursue(cell),
            None => {
                tracing::debug!(%aim, "no walkable cell near chase offset");
                Goal::Wander
            }
        }
    }
}
