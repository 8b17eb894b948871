//! Grid map representation and builder.
//!
//! # Data layout
//!
//! Cells are stored densely in row-major order.  `CellId(y * width + x)`
//! indexes every per-cell array (`cell_pos`, `walkable`), so neighbour lookup
//! is pure integer arithmetic with no hashing.
//!
//! Walkability is fixed when the map is built.  A `GridMap` is never mutated
//! afterwards, which is what lets many agents plan against one shared
//! `Arc<GridMap>` from parallel workers without locks.
//!
//! # Spatial index
//!
//! Two R-trees (via `rstar`) map a world position to the nearest cell: one
//! over every cell and one over walkable cells only.  Query cost depends on
//! tree depth, not on a linear scan of the whole grid.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gw_core::{CellId, GridCoord, Vec2};

use crate::{GridError, GridResult};

// ── R-tree cell entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: the cell's world position and
/// its id.
#[derive(Clone)]
struct CellEntry {
    point: [f32; 2],
    id:    CellId,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A read-only view of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id:       CellId,
    pub coord:    GridCoord,
    /// World-space position of the cell centre.
    pub pos:      Vec2,
    pub walkable: bool,
}

// ── GridMap ───────────────────────────────────────────────────────────────────

/// Immutable rectangular grid of cells plus spatial indexes.
///
/// Do not construct directly; use [`GridMapBuilder`].
pub struct GridMap {
    width:     u32,
    height:    u32,
    cell_size: f32,
    origin:    Vec2,

    /// World position of each cell centre.  Indexed by `CellId`.
    pub cell_pos: Vec<Vec2>,

    /// Walkable flag of each cell.  Indexed by `CellId`.
    pub walkable: Vec<bool>,

    /// Every walkable cell in ascending `CellId` order.
    walkable_cells: Vec<CellId>,

    spatial_idx:  RTree<CellEntry>,
    walkable_idx: RTree<CellEntry>,
}

impl GridMap {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn cell_count(&self) -> usize {
        self.cell_pos.len()
    }

    pub fn walkable_count(&self) -> usize {
        self.walkable_cells.len()
    }

    // ── Cell lookup ───────────────────────────────────────────────────────

    /// `true` if `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// The cell at `coord`, or `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, coord: GridCoord) -> Option<CellId> {
        if !self.contains(coord) {
            return None;
        }
        Some(CellId(coord.y as u32 * self.width + coord.x as u32))
    }

    /// Grid coordinate of `id`.  The id must belong to this map.
    #[inline]
    pub fn coord_of(&self, id: CellId) -> GridCoord {
        GridCoord::new((id.0 % self.width) as i32, (id.0 / self.width) as i32)
    }

    /// Full view of a cell, or `None` for an id outside this map.
    pub fn cell(&self, id: CellId) -> Option<Cell> {
        let pos = *self.cell_pos.get(id.index())?;
        Some(Cell {
            id,
            coord:    self.coord_of(id),
            pos,
            walkable: self.walkable[id.index()],
        })
    }

    /// World position of a cell centre.  The id must belong to this map.
    #[inline]
    pub fn position(&self, id: CellId) -> Vec2 {
        self.cell_pos[id.index()]
    }

    /// `false` for blocked cells and for ids outside this map.
    #[inline]
    pub fn is_walkable(&self, id: CellId) -> bool {
        self.walkable.get(id.index()).copied().unwrap_or(false)
    }

    /// Iterator over every cell in `CellId` order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count() as u32).filter_map(|i| self.cell(CellId(i)))
    }

    /// All walkable cells in ascending `CellId` order.
    pub fn walkable_cells(&self) -> &[CellId] {
        &self.walkable_cells
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// In-bounds 4-neighbours of `id` in the fixed order +x, −x, +y, −y.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.coord_of(id)
            .neighbors()
            .filter_map(|c| self.cell_at(c))
    }

    /// Walkable 4-neighbours of `id`, same order as [`neighbors`](Self::neighbors).
    #[inline]
    pub fn walkable_neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors(id).filter(|&c| self.walkable[c.index()])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The cell whose centre is nearest to `pos`, walkable or not.
    ///
    /// Returns `None` only for a map with no cells (which the builder
    /// rejects, so in practice never).
    pub fn nearest_cell(&self, pos: Vec2) -> Option<CellId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// The walkable cell whose centre is nearest to `pos`.
    ///
    /// Returns `None` if the map has no walkable cells.
    pub fn nearest_walkable_cell(&self, pos: Vec2) -> Option<CellId> {
        self.walkable_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Up to `k` cells nearest to `pos`, sorted by ascending distance.
    pub fn k_nearest_cells(&self, pos: Vec2, k: usize) -> Vec<CellId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── GridMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`GridMap`], then call [`build`](Self::build).
///
/// Every cell starts walkable; block cells individually, by rectangle, or
/// parse the whole layout from ASCII art.
///
/// # Example
///
/// ```
/// use gw_core::GridCoord;
/// use gw_grid::GridMapBuilder;
///
/// let mut b = GridMapBuilder::new(4, 3);
/// b.block(GridCoord::new(1, 1)).unwrap();
/// let map = b.build().unwrap();
/// assert_eq!(map.cell_count(), 12);
/// assert_eq!(map.walkable_count(), 11);
/// ```
pub struct GridMapBuilder {
    width:     u32,
    height:    u32,
    cell_size: f32,
    origin:    Vec2,
    walkable:  Vec<bool>,
}

impl GridMapBuilder {
    /// A `width` × `height` grid, all cells walkable, unit cell size, origin
    /// at (0, 0).
    pub fn new(width: u32, height: u32) -> Self {
        let n = width as usize * height as usize;
        Self {
            width,
            height,
            cell_size: 1.0,
            origin:    Vec2::ZERO,
            walkable:  vec![true; n],
        }
    }

    /// World-space distance between adjacent cell centres.
    pub fn cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// World position of the centre of cell (0, 0).
    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Parse a layout where each line is one row (`y` = line index from 0)
    /// and each character one cell: `.` walkable, `#` blocked.
    ///
    /// Blank leading/trailing lines and surrounding whitespace are ignored, so
    /// indented string literals parse as expected.
    pub fn from_ascii(layout: &str) -> GridResult<Self> {
        let lines: Vec<&str> = layout.lines().map(str::trim).collect();
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let last = lines.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
        let rows = &lines[first..last.max(first)];

        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut walkable = Vec::with_capacity(width * rows.len());
        for (line, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::Ascii {
                    line,
                    reason: format!("expected {width} columns, found {}", row.chars().count()),
                });
            }
            for ch in row.chars() {
                match ch {
                    '.' => walkable.push(true),
                    '#' => walkable.push(false),
                    other => {
                        return Err(GridError::Ascii {
                            line,
                            reason: format!("unknown cell character {other:?}"),
                        });
                    }
                }
            }
        }

        Ok(Self {
            width:     width as u32,
            height:    rows.len() as u32,
            cell_size: 1.0,
            origin:    Vec2::ZERO,
            walkable,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index_of(&self, coord: GridCoord) -> GridResult<usize> {
        if coord.x < 0
            || coord.y < 0
            || coord.x as u32 >= self.width
            || coord.y as u32 >= self.height
        {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    pub fn set_walkable(&mut self, coord: GridCoord, walkable: bool) -> GridResult<()> {
        let i = self.index_of(coord)?;
        self.walkable[i] = walkable;
        Ok(())
    }

    pub fn block(&mut self, coord: GridCoord) -> GridResult<()> {
        self.set_walkable(coord, false)
    }

    /// Block every cell in the inclusive rectangle spanned by corners `a` and
    /// `b`, given in either order.
    pub fn block_rect(&mut self, a: GridCoord, b: GridCoord) -> GridResult<()> {
        // Validate both corners before touching anything.
        self.index_of(a)?;
        self.index_of(b)?;
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                self.block(GridCoord::new(x, y))?;
            }
        }
        Ok(())
    }

    /// Consume the builder and produce a [`GridMap`].
    ///
    /// Time complexity: O(N) for the dense arrays + O(N log N) for the two
    /// R-tree bulk loads.
    pub fn build(self) -> GridResult<GridMap> {
        let cell_count = self.width as u64 * self.height as u64;
        if self.width == 0 || self.height == 0 || cell_count >= u32::MAX as u64 {
            return Err(GridError::InvalidDimensions { width: self.width, height: self.height });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(self.cell_size));
        }

        let cell_pos: Vec<Vec2> = (0..cell_count as u32)
            .map(|i| {
                let x = (i % self.width) as f32;
                let y = (i / self.width) as f32;
                self.origin + Vec2::new(x, y) * self.cell_size
            })
            .collect();

        let walkable_cells: Vec<CellId> = self
            .walkable
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w)
            .map(|(i, _)| CellId(i as u32))
            .collect();

        let entry = |id: CellId| CellEntry {
            point: [cell_pos[id.index()].x, cell_pos[id.index()].y],
            id,
        };
        let spatial_idx = RTree::bulk_load((0..cell_count as u32).map(|i| entry(CellId(i))).collect());
        let walkable_idx = RTree::bulk_load(walkable_cells.iter().map(|&c| entry(c)).collect());

        Ok(GridMap {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            origin: self.origin,
            cell_pos,
            walkable: self.walkable,
            walkable_cells,
            spatial_idx,
            walkable_idx,
        })
    }
}
