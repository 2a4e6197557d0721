//! Sources of die faces
//!
//! Rolling goes through [`DieSource`] so hosts and tests can force the faces
//! that come up.

use std::collections::VecDeque;

use parking_lot::Mutex;
use rand::Rng;

/// Something that can draw a single die face
pub trait DieSource: Send + Sync {
    /// Draw one face, uniform in `1..=sides`
    fn draw(&self, sides: u32) -> u32;
}

/// Faces drawn from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl DieSource for ThreadRngSource {
    fn draw(&self, sides: u32) -> u32 {
        rand::rng().random_range(1..=sides.max(1))
    }
}

/// A predetermined sequence of faces
///
/// Faces are handed out in order. Once the script runs dry the last face
/// keeps repeating; an empty script always draws 1. Every face is clamped
/// into `1..=sides` of the die being rolled.
#[derive(Debug, Default)]
pub struct ScriptedDice {
    faces: Mutex<VecDeque<u32>>,
    last: Mutex<Option<u32>>,
}

impl ScriptedDice {
    /// Script the given faces in order
    pub fn sequence(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: Mutex::new(faces.into_iter().collect()),
            last: Mutex::new(None),
        }
    }

    /// Always draw the same face
    pub fn always(face: u32) -> Self {
        Self::sequence([face])
    }

    /// Number of scripted faces not yet drawn
    pub fn remaining(&self) -> usize {
        self.faces.lock().len()
    }
}

impl DieSource for ScriptedDice {
    fn draw(&self, sides: u32) -> u32 {
        let next = self.faces.lock().pop_front();
        let mut last = self.last.lock();
        let face = next.or(*last).unwrap_or(1);
        *last = Some(face);
        face.clamp(1, sides.max(1))
    }
}
