//! Dice module
//!
//! Implements the die tally engine:
//! - Scoring modes (sum, Fate, White Wolf, Scion)
//! - Pluggable die sources (thread RNG, scripted faces)
//! - Pool rolling with clamping and exploding White Wolf pools

mod mode;
mod source;
mod tally;

pub use mode::{ScoringMode, WW_EXPLODE_FACE};
pub use source::{DieSource, ScriptedDice, ThreadRngSource};
pub use tally::{roll, roll_async, DiceRoll, Faces, FateFace, RollOutcome, MAX_DICE, MAX_SIDES};
