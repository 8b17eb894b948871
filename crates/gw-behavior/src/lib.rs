//! `gw-behavior`: how an agent picks where to go next.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`target`]   | `TrackedTarget` trait, `TargetSnapshot` per-frame value       |
//! | [`goal`]     | `Goal`, `DecisionContext<'a>`, `GoalSelector` trait           |
//! | [`strategy`] | `Wander`, `ChaseDirect`, `ChaseOffset`, `BehaviorKind`        |
//! | [`marker`]   | `Marker`: observational colour tag per strategy              |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! The agent state machine in gw-agent is shared by every strategy.  The
//! only thing a strategy decides is the planning goal while the agent is
//! DECIDING (or arriving at a cell mid-chase):
//!
//! - [`Goal::Wander`]: follow or refill the bounded random walk.
//! - [`Goal::Pursue`]: plan a shortest path to the given cell.
//!
//! Selectors read only through `&DecisionContext`, so a single boxed
//! selector per agent is `Send + Sync` and never holds per-tick state.

pub mod error;
pub mod goal;
pub mod marker;
pub mod strategy;
pub mod target;

#[cfg(test)]
mod tests;

pub use error::{BehaviorError, BehaviorResult};
pub use goal::{DecisionContext, Goal, GoalSelector};
pub use marker::Marker;
pub use strategy::{BehaviorKind, ChaseDirect, ChaseOffset, Wander, DEFAULT_CHASE_OFFSET};
pub use target::{TargetSnapshot, TrackedTarget};
