//! Dice as an injected capability.
//!
//! A roll is the sum of four independent fair binary trials (four two-sided
//! dice), so totals follow Binomial(4, ½): 0–4 with 2 the most likely. The
//! engine never owns a generator; hosts inject a [`DiceSource`] so
//! move-generation and turn-sequencing stay fully deterministic under test.
//!
//! ## Implementations
//!
//! - [`GameDice`]: seeded ChaCha8 stream. Same seed, same sequence.
//! - [`ScriptedDice`]: replays a fixed list of rolls, for tests and replays.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of binary dice per roll.
pub const DICE_COUNT: u8 = 4;

/// Source of dice randomness.
///
/// The only nondeterministic input the engine consumes. `roll` sums
/// [`DICE_COUNT`] independent flips, so its result is always in `0..=4`.
pub trait DiceSource {
    /// One binary pip outcome.
    fn flip(&mut self) -> bool;

    /// Roll the dice: the number of flips that came up marked.
    fn roll(&mut self) -> u8 {
        (0..DICE_COUNT).filter(|_| self.flip()).count() as u8
    }
}

/// Deterministic dice over a seeded ChaCha8 stream.
///
/// Uses ChaCha8 for speed while keeping cryptographic-quality randomness;
/// the same seed always produces the same sequence of rolls.
#[derive(Clone, Debug)]
pub struct GameDice {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameDice {
    /// Create dice with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameDiceState {
        GameDiceState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameDiceState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameDice {
    fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Serializable dice state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDiceState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Dice that replay a fixed script of rolls.
///
/// Each scripted roll is decomposed into its four binary flips, so the
/// totals seen by the engine match the script exactly. An exhausted script
/// flips unmarked forever (every further roll is 0).
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    flips: VecDeque<bool>,
}

impl ScriptedDice {
    /// Script a sequence of roll totals. Each must be at most 4.
    #[must_use]
    pub fn from_rolls(rolls: &[u8]) -> Self {
        let mut flips = VecDeque::new();
        for &roll in rolls {
            assert!(roll <= DICE_COUNT, "a roll of four binary dice is at most 4");
            for i in 0..DICE_COUNT {
                flips.push_back(i < roll);
            }
        }
        Self { flips }
    }

    /// Append one more scripted roll.
    pub fn push_roll(&mut self, roll: u8) {
        assert!(roll <= DICE_COUNT, "a roll of four binary dice is at most 4");
        for i in 0..DICE_COUNT {
            self.flips.push_back(i < roll);
        }
    }

    /// Check if the script has been fully consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.flips.is_empty()
    }
}

impl DiceSource for ScriptedDice {
    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_in_domain() {
        let mut dice = GameDice::new(42);
        for _ in 0..1000 {
            assert!(dice.roll() <= 4);
        }
    }

    #[test]
    fn test_determinism() {
        let mut dice1 = GameDice::new(42);
        let mut dice2 = GameDice::new(42);

        for _ in 0..100 {
            assert_eq!(dice1.roll(), dice2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut dice1 = GameDice::new(1);
        let mut dice2 = GameDice::new(2);

        let seq1: Vec<_> = (0..20).map(|_| dice1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| dice2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_mean_near_two() {
        // Binomial(4, 0.5) has mean 2; a long run should land close.
        let mut dice = GameDice::new(7);
        let total: u32 = (0..4000).map(|_| u32::from(dice.roll())).sum();
        let mean = f64::from(total) / 4000.0;

        assert!((mean - 2.0).abs() < 0.1, "mean was {mean}");
    }

    #[test]
    fn test_state_round_trip() {
        let mut dice = GameDice::new(42);
        for _ in 0..37 {
            dice.roll();
        }

        let state = dice.state();
        let expected: Vec<_> = (0..10).map(|_| dice.roll()).collect();

        let mut restored = GameDice::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameDice::new(42).state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameDiceState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_scripted_rolls() {
        let mut dice = ScriptedDice::from_rolls(&[0, 4, 2, 1]);

        assert_eq!(dice.roll(), 0);
        assert_eq!(dice.roll(), 4);
        assert_eq!(dice.roll(), 2);
        assert_eq!(dice.roll(), 1);
        assert!(dice.is_exhausted());
        // Exhausted script keeps answering 0.
        assert_eq!(dice.roll(), 0);
    }

    #[test]
    fn test_scripted_push() {
        let mut dice = ScriptedDice::default();
        dice.push_roll(3);
        assert_eq!(dice.roll(), 3);
    }

    #[test]
    #[should_panic(expected = "at most 4")]
    fn test_scripted_rejects_impossible_roll() {
        let _ = ScriptedDice::from_rolls(&[5]);
    }
}
