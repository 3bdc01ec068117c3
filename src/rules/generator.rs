//! Legal-move enumeration.
//!
//! Given the current player and a roll, [`legal_moves`] produces every
//! candidate move, tagged as one of three kinds:
//!
//! - **Enter**: bring an off-board piece in at the position equal to the
//!   roll. Requires an off-board piece and a usable destination.
//! - **Advance**: move an on-board piece forward by the roll, staying on
//!   the path.
//! - **Exit**: move an on-board piece off the far end. Only an exact sum of
//!   17 exits; overshoot is illegal.
//!
//! A destination is usable if it is empty, or holds an opponent piece that
//! is neither in the safe zone (positions 1–4) nor on a rosette. A
//! destination holding the mover's own piece is never usable. Blocked cells
//! simply produce no candidate: the opponent there is protected, not
//! captured.
//!
//! A roll of 0 yields no moves by definition. A nonzero roll can also yield
//! an empty list when every destination is blocked; the turn coordinator
//! treats that as a forced pass.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::path::{is_safe_zone, EXIT_POSITION, MAX_POSITION};
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Candidate-move list. At most 8 entries (seven pieces plus one enter),
/// so it never leaves the stack.
pub type MoveList = SmallVec<[Move; 8]>;

/// A candidate move for the current player.
///
/// Pieces are addressed by slot index; `from`/`dest` are linear positions
/// in the mover's frame. Moves compare structurally, which is how the
/// executor validates membership in the generated set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Bring an off-board piece in at `dest` (the roll value).
    Enter { dest: i8 },
    /// Advance the piece in `slot` from `from` to `dest`.
    Advance { slot: usize, from: i8, dest: i8 },
    /// Move the piece in `slot` off the board (exact exit).
    Exit { slot: usize, from: i8 },
}

impl Move {
    /// Destination position of this move ([`EXIT_POSITION`] for exits).
    #[must_use]
    pub const fn dest(self) -> i8 {
        match self {
            Move::Enter { dest } | Move::Advance { dest, .. } => dest,
            Move::Exit { .. } => EXIT_POSITION,
        }
    }

    /// Slot of the moved piece, or `None` for an enter (any off-board
    /// piece serves, they are interchangeable).
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Move::Enter { .. } => None,
            Move::Advance { slot, .. } | Move::Exit { slot, .. } => Some(slot),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Enter { dest } => write!(f, "Add a new piece to position {dest}"),
            Move::Advance { from, dest, .. } => {
                write!(f, "Move piece at position {from} to position {dest}")
            }
            Move::Exit { from, .. } => {
                write!(f, "Move piece at position {from} off the board (completes path)")
            }
        }
    }
}

/// Enumerate the legal moves for the current player and the given roll.
///
/// The order is stable: the enter move first (if any), then on-board pieces
/// in slot order.
#[must_use]
pub fn legal_moves(state: &GameState, roll: u8) -> MoveList {
    let mut moves = MoveList::new();

    // No dice sum of zero moves anything.
    if roll == 0 {
        return moves;
    }
    // Rolls beyond the path length cannot land or exit anything.
    let Ok(roll) = i8::try_from(roll) else {
        return moves;
    };
    if roll > MAX_POSITION {
        return moves;
    }

    let mover = state.current();
    let player = state.current_player();

    if player.off_board_count() > 0 && destination_usable(state, mover, roll) {
        moves.push(Move::Enter { dest: roll });
    }

    for (slot, piece) in player.pieces().iter().enumerate() {
        if !piece.is_on_board() {
            continue;
        }

        let from = piece.position();
        let dest = from + roll;

        if dest <= MAX_POSITION {
            if destination_usable(state, mover, dest) {
                moves.push(Move::Advance { slot, from, dest });
            }
        } else if dest == EXIT_POSITION {
            moves.push(Move::Exit { slot, from });
        }
    }

    moves
}

/// Blocking rule: can the mover land on `dest`?
///
/// Empty cells are usable. Occupied cells are usable only when the occupant
/// is an opponent piece outside the safe zone and off any rosette — landing
/// there captures it. The mover's own pieces never stack.
fn destination_usable(state: &GameState, mover: PlayerId, dest: i8) -> bool {
    let Some(coord) = state.player(mover).path().coord_of(dest) else {
        // Not on the mover's path at all.
        return false;
    };

    match state.piece_at(coord.row, coord.col) {
        None => true,
        Some((owner, _)) if owner == mover => false,
        Some(_) => !is_safe_zone(dest) && !state.is_rosette(mover, dest),
    }
}
