//! `gw-core`: foundational types for the `gridwalk` NPC framework.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`geo`]         | `Vec2` world-space vector, `GridCoord`                |
//! | [`time`]        | `Frame`, `FrameClock`, `SimConfig`                    |
//! | [`rng`]         | `AgentRng`: seeded per-agent stream                   |
//! | [`error`]       | `GwError`, `GwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GwError, GwResult};
pub use geo::{GridCoord, Vec2};
pub use ids::{AgentId, CellId};
pub use rng::AgentRng;
pub use time::{Frame, FrameClock, SimConfig};
