//! Route-planning trait and the default grid planner.
//!
//! # Pluggability
//!
//! Agents call planning through the [`RoutePlanner`] trait, so applications
//! can swap in a different search (jump-point search, flow fields, a
//! recording wrapper in tests) without touching the agent state machine.
//! The default [`GridPlanner`] runs A* for shortest paths and a
//! visited-avoiding random walk for wandering.
//!
//! # Cost units
//!
//! One orthogonal step costs [`STEP_COST`] (1 000 milli-steps).  Integer
//! costs keep the frontier ordering exact; the scale leaves room for a
//! Euclidean heuristic that stays admissible after rounding down.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gw_core::{AgentRng, CellId, GridCoord};

use crate::map::GridMap;
use crate::route::Route;
use crate::walk;

/// Cost of one orthogonal step between adjacent walkable cells.
pub const STEP_COST: u32 = 1_000;

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// Both operations are pure functions of the map and their arguments: no
/// hidden state, no map mutation, and a non-walkable cell is never part of a
/// returned route.  An empty [`Route`] is a normal answer, not a failure.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one planner can serve every
/// agent during a parallel update.
pub trait RoutePlanner: Send + Sync {
    /// Minimum-step route from `start` to `goal`, excluding `start`.
    ///
    /// Empty when the goal is unreachable, when either endpoint is blocked,
    /// or when `start == goal`.
    fn shortest_path(&self, map: &GridMap, start: CellId, goal: CellId) -> Route;

    /// Random walk of at most `max_steps` cells from `start`, excluding
    /// `start`.  Consecutive cells are always grid-adjacent and walkable.
    fn random_walk(
        &self,
        map:       &GridMap,
        start:     CellId,
        max_steps: usize,
        rng:       &mut AgentRng,
    ) -> Route;
}

impl<P: RoutePlanner + ?Sized> RoutePlanner for &P {
    fn shortest_path(&self, map: &GridMap, start: CellId, goal: CellId) -> Route {
        (**self).shortest_path(map, start, goal)
    }

    fn random_walk(
        &self,
        map:       &GridMap,
        start:     CellId,
        max_steps: usize,
        rng:       &mut AgentRng,
    ) -> Route {
        (**self).random_walk(map, start, max_steps, rng)
    }
}

// ── GridPlanner ───────────────────────────────────────────────────────────────

/// A* distance estimate to the goal.
///
/// Both variants are consistent on a 4-connected grid with uniform step
/// cost, so A* with a closed set returns optimal routes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// L1 distance.  Exact on an open grid, so it expands the fewest nodes.
    #[default]
    Manhattan,
    /// Straight-line distance, rounded down.
    Euclidean,
}

impl Heuristic {
    #[inline]
    fn estimate(self, from: GridCoord, to: GridCoord) -> u32 {
        match self {
            Heuristic::Manhattan => from.manhattan(to) * STEP_COST,
            Heuristic::Euclidean => {
                let dx = (from.x - to.x) as f64;
                let dy = (from.y - to.y) as f64;
                ((dx * dx + dy * dy).sqrt() * STEP_COST as f64).floor() as u32
            }
        }
    }
}

/// The default planner: A* shortest paths and bounded random walks.
#[derive(Copy, Clone, Debug, Default)]
pub struct GridPlanner {
    pub heuristic: Heuristic,
}

impl GridPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl RoutePlanner for GridPlanner {
    fn shortest_path(&self, map: &GridMap, start: CellId, goal: CellId) -> Route {
        astar(map, start, goal, self.heuristic)
    }

    fn random_walk(
        &self,
        map:       &GridMap,
        start:     CellId,
        max_steps: usize,
        rng:       &mut AgentRng,
    ) -> Route {
        walk::random_walk(map, start, max_steps, rng)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(map: &GridMap, start: CellId, goal: CellId, heuristic: Heuristic) -> Route {
    if start == goal || !map.is_walkable(start) || !map.is_walkable(goal) {
        return Route::new();
    }

    let n = map.cell_count();
    let goal_coord = map.coord_of(goal);
    let h = |c: CellId| heuristic.estimate(map.coord_of(c), goal_coord);

    // g[v] = best known cost from start to v.
    let mut g      = vec![u32::MAX; n];
    // prev[v] = predecessor on the best known route; INVALID if unreached.
    let mut prev   = vec![CellId::INVALID; n];
    let mut closed = vec![false; n];

    g[start.index()] = 0;

    // Min-heap on (f, seq).  `seq` increases with every push, so among equal
    // f-costs the node inserted first pops first.
    let mut heap: BinaryHeap<Reverse<(u32, u64, CellId)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((h(start), seq, start)));

    while let Some(Reverse((_, _, cell))) = heap.pop() {
        if cell == goal {
            return reconstruct(&prev, goal);
        }
        if closed[cell.index()] {
            continue;
        }
        closed[cell.index()] = true;

        let cost = g[cell.index()];
        for next in map.walkable_neighbors(cell) {
            if closed[next.index()] {
                continue;
            }
            let new_cost = cost.saturating_add(STEP_COST);
            if new_cost < g[next.index()] {
                g[next.index()] = new_cost;
                prev[next.index()] = cell;
                seq += 1;
                heap.push(Reverse((new_cost.saturating_add(h(next)), seq, next)));
            }
        }
    }

    tracing::trace!(%start, %goal, "no route: goal unreachable");
    Route::new()
}

/// Walk `prev` back from `goal`; the start cell (whose `prev` is INVALID) is
/// left out.
fn reconstruct(prev: &[CellId], goal: CellId) -> Route {
    let mut cells = Vec::new();
    let mut cur = goal;
    while prev[cur.index()] != CellId::INVALID {
        cells.push(cur);
        cur = prev[cur.index()];
    }
    cells.reverse();
    Route::from(cells)
}
