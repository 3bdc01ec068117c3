//! The single mutable game-state root.
//!
//! [`GameState`] owns the board, both players and the "current player"
//! pointer. It is threaded explicitly into every core operation — never
//! ambient or global — so each test can spin up a fresh state in isolation.
//!
//! All mutation funnels through the move executor ([`crate::rules`]) and the
//! turn coordinator ([`crate::turn`]); this module itself only offers the
//! read-only queries a renderer needs plus the turn switch.

use serde::{Deserialize, Serialize};

use super::board::{Board, CellKind};
use super::path::{Coord, PathTable};
use super::player::{Piece, Player, PlayerColor, PlayerId, PIECES_PER_PLAYER};

/// Complete state of one game.
///
/// Constructed once per game and discarded at game end; there is no
/// persistence across sessions beyond serde snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
}

impl GameState {
    /// Start a new game: standard board, seven pieces per player off the
    /// board, player one (Red) to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            players: [
                Player::new(PlayerId::ONE, PlayerColor::Red, PathTable::player_one()),
                Player::new(PlayerId::TWO, PlayerColor::Blue, PathTable::player_two()),
            ],
            current: PlayerId::ONE,
        }
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// A player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// ID of the player whose turn it is.
    #[must_use]
    pub const fn current(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent_player(&self) -> &Player {
        self.player(self.current.opponent())
    }

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// The piece occupying a grid cell, with its owner, if any.
    ///
    /// Each player's table is consulted in turn; in a legal state a cell
    /// holds at most one piece.
    #[must_use]
    pub fn piece_at(&self, row: usize, col: usize) -> Option<(PlayerId, Piece)> {
        let coord = Coord::new(row, col);

        for player in &self.players {
            if let Some(position) = player.path().position_at(coord) {
                if let Some(slot) = player.slot_at_position(position) {
                    return Some((player.id(), player.piece(slot)));
                }
            }
        }

        None
    }

    /// Check if a linear position is a rosette cell for the given player.
    ///
    /// Derived from the board cell at that player's mapped coordinate;
    /// positions off the path are never rosettes.
    #[must_use]
    pub fn is_rosette(&self, player: PlayerId, position: i8) -> bool {
        self.player(player)
            .path()
            .coord_of(position)
            .map(|c| self.board.cell(c.row, c.col).is_rosette())
            .unwrap_or(false)
    }

    /// The winner, if a player has brought all seven pieces home.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.exited_count() >= PIECES_PER_PLAYER)
            .map(Player::id)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Cell kind at a grid coordinate, for rendering.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> CellKind {
        self.board.cell(row, col)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
