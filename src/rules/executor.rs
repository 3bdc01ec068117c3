//! Move application: relocation, capture and rosette semantics.
//!
//! [`apply_move`] is the only entry point that mutates pieces. It validates
//! the supplied move against the freshly generated legal set before touching
//! anything, so every call either fully applies its effect (relocation,
//! capture, rosette bonus) or leaves the state untouched.
//!
//! Turn handover is deliberately not handled here; the turn coordinator
//! decides between replay and switch based on the returned outcome.

use serde::{Deserialize, Serialize};

use crate::core::path::{is_safe_zone, EXIT_POSITION, OFF_BOARD};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::GameError;

use super::generator::{legal_moves, Move};

/// What an applied move did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// An opponent piece was sent back off the board.
    pub captured: bool,
    /// The piece landed on a rosette; the mover keeps the turn.
    pub rosette: bool,
    /// The piece completed the path.
    pub exited: bool,
}

/// Apply a move for the current player.
///
/// The move must be a member of [`legal_moves`] for this state and roll;
/// anything else — including any move once a winner exists — is rejected
/// with the state unchanged.
pub fn apply_move(state: &mut GameState, mv: &Move, roll: u8) -> Result<MoveOutcome, GameError> {
    if state.is_over() {
        return Err(GameError::GameOver);
    }
    if !legal_moves(state, roll).contains(mv) {
        return Err(GameError::IllegalMove);
    }

    let mover = state.current();

    let outcome = match *mv {
        Move::Enter { dest } => {
            // Off-board pieces are interchangeable; take the lowest slot.
            // Membership above guarantees one exists.
            let slot = state
                .player(mover)
                .first_off_board_slot()
                .ok_or(GameError::IllegalMove)?;
            state.player_mut(mover).piece_mut(slot).set_position(dest);
            land(state, mover, dest)
        }
        Move::Advance { slot, dest, .. } => {
            state.player_mut(mover).piece_mut(slot).set_position(dest);
            land(state, mover, dest)
        }
        Move::Exit { slot, from } => {
            // Exit needs an exact sum of 17. Membership already enforces
            // this; the check stays so a misused executor cannot corrupt
            // a piece.
            if i32::from(from) + i32::from(roll) != i32::from(EXIT_POSITION) {
                return Err(GameError::IllegalMove);
            }
            state.player_mut(mover).piece_mut(slot).set_position(EXIT_POSITION);
            MoveOutcome {
                captured: false,
                rosette: false,
                exited: true,
            }
        }
    };

    Ok(outcome)
}

/// Post-landing checks shared by enter and advance.
fn land(state: &mut GameState, mover: PlayerId, dest: i8) -> MoveOutcome {
    MoveOutcome {
        captured: check_capture(state, mover, dest),
        rosette: state.is_rosette(mover, dest),
        exited: false,
    }
}

/// Capture check after landing on `dest`.
///
/// Fires only when the destination is outside the safe zone, not a rosette,
/// and physically shared — the opponent's table maps the same coordinate to
/// a valid position — with an opponent piece sitting there. The captured
/// piece returns off-board. A cell holds at most one piece, so at most one
/// capture per move.
fn check_capture(state: &mut GameState, mover: PlayerId, dest: i8) -> bool {
    if is_safe_zone(dest) || state.is_rosette(mover, dest) {
        return false;
    }

    let Some(coord) = state.player(mover).path().coord_of(dest) else {
        return false;
    };

    let opponent = mover.opponent();
    let Some(opponent_position) = state.player(opponent).path().position_at(coord) else {
        // Not a shared cell.
        return false;
    };
    let Some(slot) = state.player(opponent).slot_at_position(opponent_position) else {
        return false;
    };

    state.player_mut(opponent).piece_mut(slot).set_position(OFF_BOARD);
    true
}
