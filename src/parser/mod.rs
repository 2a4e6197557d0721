//! Dice notation parser
//!
//! Turns notation like "2x1d20+1d4" into a total plus per-term breakdowns.

mod notation;

pub use notation::{ParseResult, Roller, MAX_REPETITION_DEPTH};
