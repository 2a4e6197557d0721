//! Die tally engine
//!
//! Rolls a pool of dice and folds the faces into a score according to a
//! [`ScoringMode`].

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::{DieSource, ScoringMode};

/// Largest pool that will be rolled
pub const MAX_DICE: u32 = 100;

/// Largest die that will be rolled
pub const MAX_SIDES: u32 = 1000;

/// A pool of dice, e.g. "3d10"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    /// Number of dice to roll
    pub count: u32,
    /// Number of sides per die
    pub sides: u32,
}

impl DiceRoll {
    /// Create a new pool, clamped into the rollable range
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }.clamped()
    }

    /// Clamp count to `0..=100` and sides to `1..=1000`
    pub fn clamped(self) -> Self {
        Self {
            count: self.count.min(MAX_DICE),
            sides: self.sides.clamp(1, MAX_SIDES),
        }
    }

    /// Roll the pool under the given mode
    pub fn roll(&self, source: &dyn DieSource, mode: ScoringMode) -> RollOutcome {
        roll(source, self.count, self.sides, mode)
    }
}

impl FromStr for DiceRoll {
    type Err = String;

    /// Parse "NdS"; oversized numbers saturate and are then clamped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim().to_lowercase();
        let (count, sides) = notation
            .split_once('d')
            .ok_or_else(|| format!("Missing 'd' in dice notation: {}", s))?;

        let count = parse_saturating(count).ok_or_else(|| format!("Invalid dice count: {}", count))?;
        let sides = parse_saturating(sides).ok_or_else(|| format!("Invalid die sides: {}", sides))?;

        Ok(DiceRoll::new(count, sides))
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Parse an all-digit string, saturating at `u32::MAX`
fn parse_saturating(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Face of a Fate die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FateFace {
    Minus,
    Blank,
    Plus,
}

impl FateFace {
    /// Map a d6 face to its Fate symbol
    pub fn from_face(face: u32) -> Self {
        match ScoringMode::Fate.score(face) {
            -1 => FateFace::Minus,
            0 => FateFace::Blank,
            _ => FateFace::Plus,
        }
    }
}

impl fmt::Display for FateFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            FateFace::Minus => "[-]",
            FateFace::Blank => "[ ]",
            FateFace::Plus => "[+]",
        };
        write!(f, "{}", symbol)
    }
}

/// Faces that came up in a roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Faces {
    /// Raw face values
    Numeric(Vec<u32>),
    /// Fate symbols
    Fate(Vec<FateFace>),
}

impl Faces {
    /// Number of dice that were rolled
    pub fn len(&self) -> usize {
        match self {
            Faces::Numeric(faces) => faces.len(),
            Faces::Fate(faces) => faces.len(),
        }
    }

    /// Whether no dice were rolled
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The outcome of rolling one pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// Folded score
    pub total: i64,
    /// Faces in the order they were drawn
    pub faces: Faces,
}

/// Roll `count` dice with `sides` sides and score them under `mode`.
///
/// Both parameters are clamped first. In White Wolf mode every 10 adds one
/// more die to the pool, and that die can explode again.
pub fn roll(source: &dyn DieSource, count: u32, sides: u32, mode: ScoringMode) -> RollOutcome {
    let pool = DiceRoll { count, sides }.clamped();

    let mut queue: VecDeque<u32> = std::iter::repeat(pool.sides)
        .take(pool.count as usize)
        .collect();
    let mut drawn = Vec::with_capacity(queue.len());
    let mut total: i64 = 0;

    while let Some(sides) = queue.pop_front() {
        let face = source.draw(sides);
        total += mode.score(face);
        if mode.explodes(face) {
            queue.push_back(sides);
        }
        drawn.push(face);
    }

    debug!(
        "rolled {} ({}): {} dice, total {}",
        pool,
        mode,
        drawn.len(),
        total
    );

    let faces = match mode {
        ScoringMode::Fate => Faces::Fate(drawn.into_iter().map(FateFace::from_face).collect()),
        ScoringMode::Sum | ScoringMode::WhiteWolf | ScoringMode::Scion => Faces::Numeric(drawn),
    };

    RollOutcome { total, faces }
}

/// Async entry point used when fanning out many rolls at once
pub async fn roll_async(
    source: &dyn DieSource,
    pool: DiceRoll,
    mode: ScoringMode,
) -> RollOutcome {
    pool.roll(source, mode)
}
