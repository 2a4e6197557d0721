//! Scoring modes
//!
//! A mode decides how a pool of raw die faces folds into a score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Face that adds another die to a White Wolf pool
pub const WW_EXPLODE_FACE: u32 = 10;

/// How a pool of dice is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Plain sum of the faces
    #[default]
    Sum,
    /// Fudge/Fate dice: each d6 counts -1, 0 or +1
    Fate,
    /// White Wolf: count successes on 8+, tens add a die to the pool
    #[serde(alias = "ww")]
    WhiteWolf,
    /// Scion: count successes on 7+, tens count twice
    Scion,
}

impl ScoringMode {
    /// Score contributed by a single face
    pub fn score(self, face: u32) -> i64 {
        match self {
            ScoringMode::Sum => i64::from(face),
            ScoringMode::Fate => match face {
                0..=2 => -1,
                3 | 4 => 0,
                _ => 1,
            },
            ScoringMode::WhiteWolf => i64::from(face > 7),
            ScoringMode::Scion => {
                if face == 10 {
                    2
                } else if face > 6 {
                    1
                } else {
                    0
                }
            }
        }
    }

    /// Whether this face grows the pool by one more die
    pub fn explodes(self, face: u32) -> bool {
        match self {
            ScoringMode::WhiteWolf => face == WW_EXPLODE_FACE,
            ScoringMode::Sum | ScoringMode::Fate | ScoringMode::Scion => false,
        }
    }

    /// Whether a face counts as a success worth highlighting
    pub fn highlights(self, face: u32) -> bool {
        match self {
            ScoringMode::WhiteWolf => (8..=10).contains(&face),
            ScoringMode::Scion => (7..=10).contains(&face),
            ScoringMode::Sum | ScoringMode::Fate => false,
        }
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" | "default" => Ok(ScoringMode::Sum),
            "fate" | "fudge" => Ok(ScoringMode::Fate),
            "ww" | "whitewolf" | "white-wolf" => Ok(ScoringMode::WhiteWolf),
            "scion" => Ok(ScoringMode::Scion),
            other => Err(format!("Unknown scoring mode: {}", other)),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoringMode::Sum => "sum",
            ScoringMode::Fate => "fate",
            ScoringMode::WhiteWolf => "ww",
            ScoringMode::Scion => "scion",
        };
        write!(f, "{}", name)
    }
}
