//! The turn coordinator: a small state machine over the rules layer.
//!
//! One turn runs roll → generate → select → execute → (replay | switch).
//! [`TurnEngine`] sequences it:
//!
//! - `AwaitingRoll` — [`TurnEngine::roll`] draws 0–4 from the injected
//!   [`DiceSource`]. A zero roll, or a nonzero roll with no legal moves, is
//!   a forced pass: the turn switches and the machine stays in
//!   `AwaitingRoll`. Otherwise the candidate list is held and the machine
//!   enters `AwaitingSelection`.
//! - `AwaitingSelection` — an external actor picks one candidate by index
//!   via [`TurnEngine::choose`]; the engine only validates the selection,
//!   it never chooses. After execution: winner ⇒ `GameOver`; rosette ⇒ the
//!   mover keeps the turn; otherwise the turn switches.
//! - `GameOver` — terminal. Every further mutating call errors and leaves
//!   the state untouched.
//!
//! The engine performs no I/O and never blocks; hosts call in with
//! already-resolved values and read the updated state back.

use crate::core::dice::DiceSource;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::GameError;
use crate::rules::{apply_move, legal_moves, Move, MoveList, MoveOutcome};

/// Where the turn machine is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the dice.
    AwaitingRoll,
    /// Moves generated; waiting for a selection.
    AwaitingSelection,
    /// A winner has been recorded; no further mutation is accepted.
    GameOver,
}

/// Result of one roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// Zero roll or every destination blocked: the turn passed to the
    /// other player.
    NoMoves { roll: u8 },
    /// Candidate moves are pending selection.
    MovesAvailable { roll: u8, moves: MoveList },
}

/// Drives a game from fresh state to `GameOver`.
///
/// Generic over the dice so tests and replays can inject a deterministic
/// source.
///
/// ## Example
///
/// ```
/// use ur_engine::{Phase, RollOutcome, ScriptedDice, TurnEngine};
///
/// let mut engine = TurnEngine::new(ScriptedDice::from_rolls(&[2]));
/// match engine.roll().unwrap() {
///     RollOutcome::MovesAvailable { moves, .. } => {
///         assert_eq!(moves.len(), 1); // fresh game: single enter
///         engine.choose(0).unwrap();
///     }
///     RollOutcome::NoMoves { .. } => unreachable!("a 2 always enters"),
/// }
/// assert_eq!(engine.phase(), Phase::AwaitingRoll);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<D: DiceSource> {
    state: GameState,
    dice: D,
    phase: Phase,
    pending_roll: u8,
    pending_moves: MoveList,
}

impl<D: DiceSource> TurnEngine<D> {
    /// Start a fresh game with the given dice.
    #[must_use]
    pub fn new(dice: D) -> Self {
        Self::with_state(GameState::new(), dice)
    }

    /// Resume from an existing state (e.g. a deserialized snapshot).
    #[must_use]
    pub fn with_state(state: GameState, dice: D) -> Self {
        let phase = if state.is_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingRoll
        };
        Self {
            state,
            dice,
            phase,
            pending_roll: 0,
            pending_moves: MoveList::new(),
        }
    }

    /// The game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, once the machine is in `GameOver`.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// The candidate moves pending selection (empty outside
    /// `AwaitingSelection`).
    #[must_use]
    pub fn pending_moves(&self) -> &[Move] {
        &self.pending_moves
    }

    /// The roll awaiting selection, if any.
    #[must_use]
    pub fn pending_roll(&self) -> Option<u8> {
        matches!(self.phase, Phase::AwaitingSelection).then_some(self.pending_roll)
    }

    /// Roll the dice for the current player.
    ///
    /// Only legal in `AwaitingRoll`. A forced pass switches the player and
    /// keeps the machine in `AwaitingRoll`; otherwise the machine moves to
    /// `AwaitingSelection` with the returned candidates held.
    pub fn roll(&mut self) -> Result<RollOutcome, GameError> {
        match self.phase {
            Phase::AwaitingRoll => {}
            Phase::AwaitingSelection => return Err(GameError::NotAwaitingRoll),
            Phase::GameOver => return Err(GameError::GameOver),
        }

        let roll = self.dice.roll();
        let moves = legal_moves(&self.state, roll);

        if moves.is_empty() {
            self.state.switch_player();
            return Ok(RollOutcome::NoMoves { roll });
        }

        self.pending_roll = roll;
        self.pending_moves = moves.clone();
        self.phase = Phase::AwaitingSelection;
        Ok(RollOutcome::MovesAvailable { roll, moves })
    }

    /// Execute the pending candidate at `index`.
    ///
    /// Only legal in `AwaitingSelection`; an index outside the pending list
    /// is an illegal selection and changes nothing.
    pub fn choose(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        match self.phase {
            Phase::AwaitingSelection => {}
            Phase::AwaitingRoll => return Err(GameError::NotAwaitingSelection),
            Phase::GameOver => return Err(GameError::GameOver),
        }

        let mv = *self
            .pending_moves
            .get(index)
            .ok_or(GameError::IllegalMove)?;

        let outcome = apply_move(&mut self.state, &mv, self.pending_roll)?;

        self.pending_moves.clear();
        self.pending_roll = 0;

        if self.state.is_over() {
            self.phase = Phase::GameOver;
        } else {
            if !outcome.rosette {
                self.state.switch_player();
            }
            self.phase = Phase::AwaitingRoll;
        }

        Ok(outcome)
    }
}
