//! Per-player path tables: linear position ↔ grid coordinate.
//!
//! Each player walks a linear path of positions 1–16 across the board. A
//! [`PathTable`] maps grid coordinates to linear positions, with `0` or `-1`
//! marking cells that are not on that player's path. The two tables are
//! mirror images in the outer rows (each player's private lane) and identical
//! in the middle row, which both paths physically share. That overlap is
//! exactly where capture is possible.
//!
//! Lookups never fail: a coordinate or position with no mapping answers
//! `None`, and callers treat it as "not on this path".

use serde::{Deserialize, Serialize};

use super::board::{COLS, ROWS};

/// Position of a piece not yet entered onto the board.
pub const OFF_BOARD: i8 = -1;

/// Last position on the path.
pub const MAX_POSITION: i8 = 16;

/// Position marking a piece that has completed the path.
pub const EXIT_POSITION: i8 = 17;

/// The capture-immune private entry lane.
pub const SAFE_ZONE: std::ops::RangeInclusive<i8> = 1..=4;

/// Check if a linear position is on the board (1–16).
#[must_use]
pub const fn is_on_path(position: i8) -> bool {
    position >= 1 && position <= MAX_POSITION
}

/// Check if a linear position is in the capture-immune safe zone (1–4).
#[must_use]
pub const fn is_safe_zone(position: i8) -> bool {
    position >= *SAFE_ZONE.start() && position <= *SAFE_ZONE.end()
}

/// A grid coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One player's mapping between grid coordinates and linear path positions.
///
/// Entries of `0` or `-1` mean the cell is not on this player's path
/// (the opponent's private lane and the cut-out corners respectively).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTable {
    cells: [[i8; COLS]; ROWS],
}

impl PathTable {
    /// Path for the first player: private lane along the bottom row.
    #[must_use]
    pub const fn player_one() -> Self {
        Self {
            cells: [
                [0, 0, 0, 0, -1, -1, 12, 13],
                [5, 6, 7, 8, 9, 10, 11, 14],
                [4, 3, 2, 1, -1, -1, 16, 15],
            ],
        }
    }

    /// Path for the second player: the mirror image, private lane on top.
    #[must_use]
    pub const fn player_two() -> Self {
        Self {
            cells: [
                [4, 3, 2, 1, -1, -1, 16, 15],
                [5, 6, 7, 8, 9, 10, 11, 14],
                [0, 0, 0, 0, -1, -1, 12, 13],
            ],
        }
    }

    /// Linear position at a grid coordinate, or `None` if the cell is not
    /// on this path.
    #[must_use]
    pub fn position_at(&self, coord: Coord) -> Option<i8> {
        if coord.row >= ROWS || coord.col >= COLS {
            return None;
        }
        let position = self.cells[coord.row][coord.col];
        is_on_path(position).then_some(position)
    }

    /// Grid coordinate of a linear position, or `None` for positions off
    /// the path (off-board, exited, or out of domain).
    #[must_use]
    pub fn coord_of(&self, position: i8) -> Option<Coord> {
        if !is_on_path(position) {
            return None;
        }

        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] == position {
                    return Some(Coord::new(row, col));
                }
            }
        }

        None
    }
}
