//! Lattice coordinates and the square occupancy grid.

use serde::{Deserialize, Serialize};

/// A cell of the square lattice.
///
/// Coordinates are signed so that neighbour arithmetic near the border
/// cannot wrap; cells outside the grid are simply never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Row coordinate.
    pub x: i32,
    /// Column coordinate.
    pub y: i32,
}

/// Orthogonal neighbour offsets, in the canonical scan order used by every
/// kernel that enumerates candidates.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal neighbour offsets, in the canonical scan order used by the
/// pull move when searching for its L cell.
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

impl Pos {
    /// Creates a cell from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True when the two cells are lattice-adjacent (topological
    /// neighbours).
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }

    /// True when the two cells sit on a common diagonal, i.e. they span a
    /// unit square. This is the corner-move precondition on the residues
    /// before and after the pivot.
    pub fn is_diagonal(self, other: Pos) -> bool {
        self.manhattan(other) == 2 && self.x != other.x && self.y != other.y
    }

    /// The cell translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours, in canonical order.
    pub fn neighbours(self) -> [Pos; 4] {
        NEIGHBOUR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// The four diagonal neighbours, in canonical order.
    pub fn diagonals(self) -> [Pos; 4] {
        DIAGONAL_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

/// Square occupancy grid mapping cells to 1-based chain indices, with 0
/// for empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: i32,
    cells: Vec<u16>,
}

impl Grid {
    pub(crate) fn new(side: usize) -> Self {
        Self {
            side: side as i32,
            cells: vec![0; side * side],
        }
    }

    /// Side length of the grid.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// True when the cell lies inside the grid.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.side && pos.y >= 0 && pos.y < self.side
    }

    /// Chain index occupying the cell, or 0 when the cell is empty or
    /// outside the grid.
    pub fn occupant(&self, pos: Pos) -> u16 {
        if self.in_bounds(pos) {
            self.cells[self.index(pos)]
        } else {
            0
        }
    }

    /// True when the cell is inside the grid and unoccupied. Out-of-bounds
    /// cells are never empty, which keeps every move inside the grid.
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[self.index(pos)] == 0
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    pub(crate) fn set(&mut self, pos: Pos, chain_index: u16) {
        debug_assert!(self.in_bounds(pos));
        let index = self.index(pos);
        self.cells[index] = chain_index;
    }

    pub(crate) fn clear(&mut self, pos: Pos) {
        debug_assert!(self.in_bounds(pos));
        let index = self.index(pos);
        self.cells[index] = 0;
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.x * self.side + pos.y) as usize
    }
}
