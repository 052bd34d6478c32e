//! Difficulty ladder: score-driven placement ranges and scroll speed.

use crate::core::constants::{SCORE_THRESHOLD_HARD, SCORE_THRESHOLD_NORMAL};

/// Difficulty levels, ordered easiest to hardest. A session only ever
/// moves up the ladder because selection is a pure function of the
/// monotonic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Level for a cumulative score. Banded, idempotent: re-evaluating
    /// at the same score yields the same level.
    pub fn for_score(score: u32) -> Self {
        if score >= SCORE_THRESHOLD_HARD {
            Difficulty::Hard
        } else if score >= SCORE_THRESHOLD_NORMAL {
            Difficulty::Normal
        } else {
            Difficulty::Easy
        }
    }

    /// Inclusive range for the horizontal offset between consecutive
    /// pairs, in field units.
    pub fn horizontal_range(&self) -> (i32, i32) {
        match self {
            Self::Easy => (300, 350),
            Self::Normal => (280, 330),
            Self::Hard => (250, 310),
        }
    }

    /// Inclusive range for a pair's gap height, in field units.
    pub fn vertical_range(&self) -> (i32, i32) {
        match self {
            Self::Easy => (150, 200),
            Self::Normal => (120, 170),
            Self::Hard => (90, 140),
        }
    }

    /// Leftward obstacle scroll speed in units/second, applied to all
    /// pairs uniformly.
    pub fn scroll_speed(&self) -> f64 {
        match self {
            Self::Easy => 200.0,
            Self::Normal => 250.0,
            Self::Hard => 300.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}
