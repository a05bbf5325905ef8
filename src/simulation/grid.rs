//! # Uniform Grid (broad phase)
//!
//! This module implements a **uniform spatial grid** used to cut the number
//! of candidate collision pairs. Instead of testing every body against every
//! other body (`O(N²)`), each body is dropped into the square cell that
//! contains its centre, and the narrow phase only compares bodies in the same
//! or adjacent cells.
//!
//! ## Core Concepts
//!
//! - World space `[0, width) x [0, height)` is cut into square cells of edge
//!   `cell_size`; the grid has `ceil(width / cell_size)` columns and
//!   `ceil(height / cell_size)` rows.
//! - Cells are stored flat, row-major: `row * grid_width + col`.
//! - Each [`Cell`] only holds body indices; the grid never owns bodies.
//! - The grid is cleared and rebuilt every sub-step, so it never carries stale
//!   positions across steps.
//!
//! ## Neighbourhoods
//!
//! When `cell_size` is at least the largest body diameter, two overlapping
//! bodies always sit in the same cell or in two cells touching each other
//! (including diagonally). Neighbours are always addressed in `(col, row)`
//! space and bounds-checked per axis: stepping `+1` from the last column must
//! never wrap into the first column of the next row, which naive flat-index
//! arithmetic (`index + 1`) would do.

use super::engine::MAX_GRID_CELLS;
use super::error::SimulationError;
use super::states::{Body, BodyIndex, NVec2};

/// Forward half of the 3x3 neighbourhood.
///
/// Visiting only these offsets (plus the cell itself) from every cell reaches
/// each adjacent cell pair exactly once: the other half is covered when the
/// neighbour visits us.
pub const FORWARD_NEIGHBOURS: [(i64, i64); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

/// Indices of the bodies whose centre currently lies in one grid cell
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub bodies: Vec<BodyIndex>,
}

impl Cell {
    pub fn push(&mut self, index: BodyIndex) {
        self.bodies.push(index);
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Fixed-size uniform grid over the world rectangle.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_size: f64,
    grid_width: usize,
    grid_height: usize,
    world: NVec2,
    cells: Vec<Cell>,
}

impl UniformGrid {
    /// Build an empty grid covering `world` with cells of edge `cell_size`.
    ///
    /// Both arguments are expected to be positive and finite, as checked by
    /// [`Engine::validate`](super::engine::Engine::validate). Grids holding
    /// more than [`MAX_GRID_CELLS`] cells are refused.
    pub fn new(world: NVec2, cell_size: f64) -> Result<Self, SimulationError> {
        let cols = (world.x / cell_size).ceil();
        let rows = (world.y / cell_size).ceil();
        let too_large = || SimulationError::GridTooLarge(cols, rows);

        // NaN and oversized ratios fail here instead of saturating in the cast
        if !(cols <= MAX_GRID_CELLS as f64 && rows <= MAX_GRID_CELLS as f64) {
            return Err(too_large());
        }
        let (grid_width, grid_height) = (cols as usize, rows as usize);
        let count = grid_width
            .checked_mul(grid_height)
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or_else(too_large)?;

        Ok(Self {
            cell_size,
            grid_width,
            grid_height,
            world,
            cells: vec![Cell::default(); count],
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid_width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid_height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell, keeping their allocations for the next rebuild.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
    }

    /// Cell coordinates `(col, row)` containing `position`.
    ///
    /// The result may lie outside the grid (negative, or past the last
    /// column/row); [`UniformGrid::cell_index`] tells whether it is valid.
    pub fn cell_coords(&self, position: &NVec2) -> (i64, i64) {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }

    /// Flat index of cell `(col, row)`, or `None` outside the grid.
    pub fn cell_index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.grid_width || row >= self.grid_height {
            return None;
        }
        Some(row * self.grid_width + col)
    }

    pub fn cell(&self, col: i64, row: i64) -> Option<&Cell> {
        self.cell_index(col, row).map(|i| &self.cells[i])
    }

    /// Record body `index` in the cell containing `position`.
    ///
    /// Returns `false` (and stores nothing) when `position` falls outside the
    /// grid; the body is then simply absent from this sub-step's broad phase.
    pub fn insert(&mut self, index: BodyIndex, position: &NVec2) -> bool {
        let (col, row) = self.cell_coords(position);
        match self.cell_index(col, row) {
            Some(i) => {
                self.cells[i].push(index);
                true
            }
            None => false,
        }
    }

    /// Whether a body is eligible for the broad phase this sub-step.
    ///
    /// A body must be strictly more than one radius away from every world
    /// edge; bodies hugging an edge are skipped for collision detection (they
    /// are still clamped by the border enforcer).
    pub fn within_margin(&self, body: &Body) -> bool {
        let r = body.radius;
        body.x.x > r && body.x.x < self.world.x - r && body.x.y > r && body.x.y < self.world.y - r
    }

    /// Clear the grid and re-index every eligible body from its current
    /// position. Returns the number of bodies indexed.
    pub fn rebuild(&mut self, bodies: &[Body]) -> usize {
        self.clear();

        let mut indexed = 0;
        for (i, body) in bodies.iter().enumerate() {
            if self.within_margin(body) && self.insert(BodyIndex(i), &body.x) {
                indexed += 1;
            }
        }
        indexed
    }

    /// Total number of indices stored across all cells.
    pub fn indexed_count(&self) -> usize {
        self.cells.iter().map(Cell::len).sum()
    }

    /// Every in-bounds cell of the 3x3 block centred on `(col, row)`,
    /// including the centre itself.
    pub fn neighbourhood(&self, col: i64, row: i64) -> impl Iterator<Item = &Cell> + '_ {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (col + dx, row + dy)))
            .filter_map(move |(c, r)| self.cell(c, r))
    }
}
