//! `gw-grid`: grid map, spatial indexing, and route planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`map`]     | `GridMap` (dense cells + R-tree), `GridMapBuilder`, `Cell`  |
//! | [`route`]   | `Route`: front-consumed cell sequence                      |
//! | [`planner`] | `RoutePlanner` trait, `GridPlanner` (A* + random walk)      |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod map;
pub mod planner;
pub mod route;

mod walk;


pub use error::{GridError, GridResult};
pub use map::{Cell, GridMap, GridMapBuilder};
pub use planner::{GridPlanner, Heuristic, RoutePlanner};
pub use route::Route;
