//! `gw-agent`: one NPC: its configuration, state machine, and motion.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`config`]     | `AgentConfig`: speed, vision, walk bound, behavior         |
//! | [`state`]      | `AgentState` (`Deciding`, `Chasing`, `Moving`)              |
//! | [`agent`]      | `Agent`: owned route, RNG, selector; `new`, `reset`        |
//! | [`controller`] | `Agent::tick`: one state-machine transition per call       |
//! | [`motion`]     | Clamped step toward a cell, `ARRIVAL_THRESHOLD`             |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                              |
//!
//! # Tick model
//!
//! Every call to [`Agent::tick`] performs at most one transition:
//!
//! ```text
//!            ┌──────── route empty ────────┐
//!            ▼                             │
//!       DECIDING ── pursue ──► CHASING ────┤
//!            │                    │        │
//!            └─ wander ─► MOVING ◄┘ pop    │
//!                           │              │
//!                 arrival ──┴─ re-plan ────┘ (chase + in vision → CHASING)
//! ```
//!
//! The map is shared read-only through `Arc<GridMap>`.  Each agent owns its
//! route and RNG, so agents can be ticked in any order or in parallel.

pub mod agent;
pub mod config;
pub mod controller;
pub mod error;
pub mod motion;
pub mod state;


pub use agent::{Agent, MAX_RELOCATION_ATTEMPTS};
pub use config::AgentConfig;
pub use controller::TickOutcome;
pub use error::{AgentError, AgentResult};
pub use motion::ARRIVAL_THRESHOLD;
pub use state::AgentState;
