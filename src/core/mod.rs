//! Core engine types: board, path tables, players, dice, game state.
//!
//! These are the fundamental building blocks the rules layer operates on.
//! Everything here is either immutable after construction (board, path
//! tables) or mutated only through the rules executor and turn coordinator.

pub mod board;
pub mod dice;
pub mod path;
pub mod player;
pub mod state;

pub use board::{Board, CellKind, COLS, ROWS};
pub use dice::{DiceSource, GameDice, GameDiceState, ScriptedDice, DICE_COUNT};
pub use path::{
    is_on_path, is_safe_zone, Coord, PathTable, EXIT_POSITION, MAX_POSITION, OFF_BOARD, SAFE_ZONE,
};
pub use player::{Piece, Player, PlayerColor, PlayerId, PIECES_PER_PLAYER};
pub use state::GameState;
