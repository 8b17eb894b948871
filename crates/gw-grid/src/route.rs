//! The `Route` type: an ordered, front-consumed sequence of cells.

use std::collections::VecDeque;

use gw_core::CellId;

/// Cells to traverse in order.  The start cell is never included: the first
/// element is the first step away from where the route was planned.
///
/// Consumed destructively with [`pop_front`](Self::pop_front).  An empty
/// route is a normal outcome (unreachable goal, isolated start, zero steps).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    cells: VecDeque<CellId>,
}

impl Route {
    /// An empty route.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove and return the next cell to step onto.
    #[inline]
    pub fn pop_front(&mut self) -> Option<CellId> {
        self.cells.pop_front()
    }

    /// The next cell without consuming it.
    #[inline]
    pub fn front(&self) -> Option<CellId> {
        self.cells.front().copied()
    }

    /// Final cell of the route, if any.
    #[inline]
    pub fn destination(&self) -> Option<CellId> {
        self.cells.back().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }

    /// Copy the remaining cells into a `Vec` (front first).
    pub fn to_vec(&self) -> Vec<CellId> {
        self.cells.iter().copied().collect()
    }
}

impl From<Vec<CellId>> for Route {
    fn from(cells: Vec<CellId>) -> Self {
        Self { cells: cells.into() }
    }
}

impl FromIterator<CellId> for Route {
    fn from_iter<I: IntoIterator<Item = CellId>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}
