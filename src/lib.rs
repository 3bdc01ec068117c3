//! # ur-engine
//!
//! A headless rules engine for the Royal Game of Ur.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no terminal, no I/O. Renderers and input handling live
//!    in host programs that call in with resolved values (a roll, a move
//!    selection index) and read the updated state back.
//!
//! 2. **Deterministic**: the only nondeterministic input is an injected
//!    [`DiceSource`] (four independent binary trials per roll). Seed it, or
//!    script it, and every game replays exactly.
//!
//! 3. **Explicit state root**: a single [`GameState`] is threaded into
//!    every operation — never global — so each test starts from a fresh,
//!    isolated state.
//!
//! ## Modules
//!
//! - `core`: board, path tables, players and pieces, dice, game state
//! - `rules`: legal-move enumeration and move application
//! - `turn`: the roll → select → execute → (replay | switch) state machine
//! - `error`: error taxonomy for mutating operations
//!
//! ## The game in one paragraph
//!
//! Two players race seven pieces each along a 16-position path over a 3×8
//! board. The outer rows are private lanes; the middle row is shared by
//! both paths, and landing on an opponent piece there sends it home —
//! unless the piece sits on a rosette, which also grants the mover an
//! extra turn. Entry positions 1–4 are each player's private safe zone.
//! Pieces leave the board only on an exact roll past position 16; the
//! first player to bring all seven home wins.

pub mod core;
pub mod error;
pub mod rules;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    is_on_path, is_safe_zone, Board, CellKind, Coord, DiceSource, GameDice, GameDiceState,
    GameState, PathTable, Piece, Player, PlayerColor, PlayerId, ScriptedDice, COLS, DICE_COUNT,
    EXIT_POSITION, MAX_POSITION, OFF_BOARD, PIECES_PER_PLAYER, ROWS, SAFE_ZONE,
};

pub use crate::error::GameError;

pub use crate::rules::{apply_move, legal_moves, Move, MoveList, MoveOutcome};

pub use crate::turn::{Phase, RollOutcome, TurnEngine};
