//! The rules layer: legal-move enumeration and move application.
//!
//! `generator` answers "what can the current player do with this roll";
//! `executor` applies one of those answers. Both operate on
//! [`crate::core::GameState`] and are pure of turn sequencing, which lives
//! in [`crate::turn`].

pub mod executor;
pub mod generator;

pub use executor::{apply_move, MoveOutcome};
pub use generator::{legal_moves, Move, MoveList};
