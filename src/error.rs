//! Error taxonomy for mutating operations.
//!
//! Topology lookup misses are not errors — they answer `Option::None` and
//! every call site treats them as "not on this path". Errors are reserved
//! for host mistakes: picking a move outside the generated set, mutating a
//! finished game, or calling the turn machine out of phase. In every error
//! case the game state is left untouched.

use thiserror::Error;

/// Errors from the rules executor and turn coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The supplied move is not a member of the legal-move set for the
    /// current state and roll.
    #[error("move is not legal for the current state and roll")]
    IllegalMove,

    /// A mutating operation was invoked after a winner was recorded.
    #[error("the game is already over")]
    GameOver,

    /// The turn machine was asked to roll outside `AwaitingRoll`.
    #[error("not awaiting a roll")]
    NotAwaitingRoll,

    /// The turn machine was asked for a selection outside
    /// `AwaitingSelection`.
    #[error("no move selection is pending")]
    NotAwaitingSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::IllegalMove.to_string(),
            "move is not legal for the current state and roll"
        );
        assert_eq!(GameError::GameOver.to_string(), "the game is already over");
    }
}
