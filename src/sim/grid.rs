//! Board geometry: discrete cells and the playfield's logical bounds
//!
//! Row 0 is the water (hazard lane), rows 1..=3 are the stone lanes where
//! enemies run and gems sit, and the bottom row is the player's start row.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::IntRange;
use crate::consts::{CELL_HEIGHT, CELL_WIDTH, FIRST_LANE_ROW, HAZARD_ROW, LAST_LANE_ROW};

/// One discrete `(col, row)` grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Neighbouring cell offset by `(dcol, drow)`
    pub fn offset(self, dcol: i32, drow: i32) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }
}

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub columns: i32,
    pub rows: i32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 6,
        }
    }
}

impl GridGeometry {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    pub fn last_column(&self) -> i32 {
        self.columns - 1
    }

    pub fn last_row(&self) -> i32 {
        self.rows - 1
    }

    /// Where the player starts and respawns: centered on the bottom row
    pub fn start_cell(&self) -> Cell {
        Cell::new(self.columns / 2, self.last_row())
    }

    /// Columns a collectible may be placed in
    pub fn column_range(&self) -> IntRange {
        IntRange::fixed(0, self.last_column().max(0))
    }

    /// Rows enemies run in and collectibles are placed in
    pub fn lane_range(&self) -> IntRange {
        IntRange::fixed(FIRST_LANE_ROW, LAST_LANE_ROW)
    }

    /// Distinct cells available to collectibles
    pub fn lane_capacity(&self) -> usize {
        (self.columns.max(0) as usize) * self.lane_range().len() as usize
    }

    pub fn is_hazard(&self, cell: Cell) -> bool {
        cell.row == HAZARD_ROW
    }

    pub fn is_lane(&self, cell: Cell) -> bool {
        self.lane_range().contains(cell.row) && self.column_range().contains(cell.col)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.columns).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }

    /// Clamp a player move to the board. The hazard row stays reachable.
    pub fn clamp_player(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.col.clamp(0, self.last_column()),
            cell.row.clamp(HAZARD_ROW, self.last_row()),
        )
    }

    /// Enemies past the last column have left the board
    pub fn is_past_right_edge(&self, cell: Cell) -> bool {
        cell.col > self.last_column()
    }

    /// Top-left pixel of a cell's tile, for renderers
    pub fn cell_to_pixel(&self, cell: Cell) -> Vec2 {
        Vec2::new(cell.col as f32 * CELL_WIDTH, cell.row as f32 * CELL_HEIGHT)
    }

    /// Pixel size of the whole board
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * CELL_WIDTH,
            self.rows as f32 * CELL_HEIGHT,
        )
    }
}
