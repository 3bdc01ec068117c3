//! The game board: a fixed 3×8 grid of cells.
//!
//! Only two cell kinds carry rules semantics:
//!
//! - `Disabled` cells are not part of the board (the cut-out corners).
//! - `Rosette` cells block capture and grant the mover an extra turn.
//!
//! The remaining kinds (`Plain`, `Eye`, `Dots`, `Cross`, `ZigZag`) are
//! decorative patterns for renderers and behave identically to `Plain`.
//!
//! The board is immutable after creation; rosette status is always derived
//! from it, never stored on pieces or players.

use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLS: usize = 8;

/// Kind of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Not part of the board.
    Disabled,
    /// Rosette cell: safe from capture, grants another turn.
    Rosette,
    /// Plain cell.
    Plain,
    /// Eye pattern (plays as plain).
    Eye,
    /// Five-dots pattern (plays as plain).
    Dots,
    /// Cross pattern (plays as plain).
    Cross,
    /// Zig-zag pattern (plays as plain).
    ZigZag,
}

impl CellKind {
    /// Check if this cell is a rosette.
    #[must_use]
    pub const fn is_rosette(self) -> bool {
        matches!(self, CellKind::Rosette)
    }

    /// Check if this cell is part of the board at all.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, CellKind::Disabled)
    }
}

/// The game board.
///
/// A fixed grid of [`CellKind`]s, immutable after creation. Out-of-range
/// lookups answer [`CellKind::Disabled`] rather than panicking, so callers
/// can treat "off the grid" and "cut-out corner" uniformly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellKind; COLS]; ROWS],
}

impl Board {
    /// Create a board from explicit cell data.
    #[must_use]
    pub const fn new(cells: [[CellKind; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// The standard board layout.
    ///
    /// Rosettes sit at (0,0), (0,6), (1,3), (2,0) and (2,6); the four cells
    /// at columns 4–5 of the outer rows are cut out.
    #[must_use]
    pub const fn standard() -> Self {
        use CellKind::{Cross, Disabled, Dots, Eye, Plain, Rosette, ZigZag};

        Self::new([
            [Rosette, Plain, Eye, Plain, Disabled, Disabled, Rosette, Dots],
            [ZigZag, Eye, Cross, Rosette, Eye, Cross, Plain, Eye],
            [Rosette, Plain, Eye, Plain, Disabled, Disabled, Rosette, Dots],
        ])
    }

    /// Get the cell kind at the given coordinate.
    ///
    /// Out-of-range coordinates answer [`CellKind::Disabled`].
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> CellKind {
        if row < ROWS && col < COLS {
            self.cells[row][col]
        } else {
            CellKind::Disabled
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
