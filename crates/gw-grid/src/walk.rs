//! Bounded random walk used for wandering.

use rustc_hash::FxHashSet;

use gw_core::{AgentRng, CellId};

use crate::map::GridMap;
use crate::route::Route;

/// Walk at most `max_steps` cells from `start`.
///
/// Each step picks uniformly among walkable neighbours this walk has not yet
/// visited; when all of them have been visited it picks among every walkable
/// neighbour instead, so a walk in a dead end backs out rather than
/// stopping.  A start with no walkable neighbour, or a blocked start, yields
/// an empty route.  The loop runs at most `max_steps` times.
pub(crate) fn random_walk(
    map:       &GridMap,
    start:     CellId,
    max_steps: usize,
    rng:       &mut AgentRng,
) -> Route {
    if max_steps == 0 || !map.is_walkable(start) {
        return Route::new();
    }

    let mut visited: FxHashSet<CellId> = FxHashSet::default();
    visited.insert(start);

    let mut cells = Vec::with_capacity(max_steps);
    let mut candidates: Vec<CellId> = Vec::with_capacity(4);
    let mut unvisited: Vec<CellId> = Vec::with_capacity(4);
    let mut current = start;

    for _ in 0..max_steps {
        candidates.clear();
        candidates.extend(map.walkable_neighbors(current));

        unvisited.clear();
        unvisited.extend(candidates.iter().copied().filter(|c| !visited.contains(c)));

        let pool = if unvisited.is_empty() { &candidates } else { &unvisited };
        let Some(&next) = rng.choose(pool) else {
            break;
        };

        visited.insert(next);
        cells.push(next);
        current = next;
    }

    Route::from(cells)
}
