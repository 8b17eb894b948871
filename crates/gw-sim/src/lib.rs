//! `gw-sim`: frame loop orchestrator for the gridwalk framework.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① on_frame_start(frame)
//!   ② Target   : the optional TargetDriver updates the target snapshot.
//!   ③ Agents   : Agent::tick(planner, &target, dt) for every agent
//!                 (parallel with the `parallel` feature).
//!   ④ on_frame_end(frame, moving_agents)
//!   ⑤ on_snapshot(frame, agents) every `output_interval_frames`
//! on_sim_end(final_frame)
//! ```
//!
//! Agents never see each other; ordering inside ③ does not affect results.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Ticks agents on Rayon's thread pool.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_agent::AgentConfig;
//! use gw_behavior::{BehaviorKind, TargetSnapshot};
//! use gw_grid::GridPlanner;
//! use gw_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, map, GridPlanner::new(), TargetSnapshot::at(pos))
//!     .agent(AgentConfig::new(BehaviorKind::ChaseDirect))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use driver::TargetDriver;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
