//! Players and their pieces.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two players. The first player is
//! `PlayerId::ONE` and moves first.
//!
//! ## Piece
//!
//! A small value record holding only a linear position. Pieces are addressed
//! by `(PlayerId, slot index)`; off-board pieces are interchangeable, so no
//! identity beyond the slot is needed. Positions live in a closed domain:
//! `-1` (off-board), `1..=16` (on the path) or `17` (exited). Only the move
//! executor mutates them.

use serde::{Deserialize, Serialize};

use super::path::{is_on_path, PathTable, EXIT_POSITION, OFF_BOARD};

/// Number of pieces per player.
pub const PIECES_PER_PLAYER: usize = 7;

/// Player identifier for a two-player game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (moves first).
    pub const ONE: PlayerId = PlayerId(0);

    /// The second player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Both player IDs, in turn order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::ONE, PlayerId::TWO];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Display color hint for a player. Carries no rules semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// A single game piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    position: i8,
}

impl Piece {
    /// Create a piece off the board.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: OFF_BOARD }
    }

    /// Current linear position.
    #[must_use]
    pub const fn position(self) -> i8 {
        self.position
    }

    /// Check if the piece is on the board (positions 1–16).
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        is_on_path(self.position)
    }

    /// Check if the piece has not yet entered the board.
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        self.position == OFF_BOARD
    }

    /// Check if the piece has completed the path.
    #[must_use]
    pub const fn has_exited(self) -> bool {
        self.position >= EXIT_POSITION
    }

    pub(crate) fn set_position(&mut self, position: i8) {
        self.position = position;
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::new()
    }
}

/// A player: identity, display color, path table and seven pieces.
///
/// Counters over the pieces always satisfy
/// `off_board_count + on_board_count + exited_count == 7`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    color: PlayerColor,
    path: PathTable,
    pieces: [Piece; PIECES_PER_PLAYER],
}

impl Player {
    /// Create a player with all pieces off the board.
    #[must_use]
    pub fn new(id: PlayerId, color: PlayerColor, path: PathTable) -> Self {
        Self {
            id,
            color,
            path,
            pieces: [Piece::new(); PIECES_PER_PLAYER],
        }
    }

    /// This player's ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// This player's display color.
    #[must_use]
    pub const fn color(&self) -> PlayerColor {
        self.color
    }

    /// This player's path table.
    #[must_use]
    pub const fn path(&self) -> &PathTable {
        &self.path
    }

    /// All pieces, by slot.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece in a given slot.
    #[must_use]
    pub fn piece(&self, slot: usize) -> Piece {
        self.pieces[slot]
    }

    pub(crate) fn piece_mut(&mut self, slot: usize) -> &mut Piece {
        &mut self.pieces[slot]
    }

    /// Slot of the piece at a given on-path position, if any.
    ///
    /// A player never has two pieces on the same position, so at most one
    /// slot matches.
    #[must_use]
    pub fn slot_at_position(&self, position: i8) -> Option<usize> {
        if !is_on_path(position) {
            return None;
        }
        self.pieces.iter().position(|p| p.position() == position)
    }

    /// Lowest slot holding an off-board piece, if any.
    #[must_use]
    pub fn first_off_board_slot(&self) -> Option<usize> {
        self.pieces.iter().position(|p| p.is_off_board())
    }

    /// Count of pieces not yet entered.
    #[must_use]
    pub fn off_board_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_off_board()).count()
    }

    /// Count of pieces on the board.
    #[must_use]
    pub fn on_board_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_on_board()).count()
    }

    /// Count of pieces that have completed the path.
    #[must_use]
    pub fn exited_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.has_exited()).count()
    }
}
