//! Obstacle pairs and the placement rule that positions them.
//!
//! The pool is fixed at creation: pairs are repositioned when they scroll
//! off the left edge, never destroyed or reallocated.

use crate::core::constants::{EDGE_MARGIN, FIELD_HEIGHT, OBSTACLE_PAIRS, OBSTACLE_WIDTH};
use crate::core::difficulty::Difficulty;
use rand::Rng;

/// One upper + one lower column with a traversable gap between them.
///
/// `upper_y` is the bottom edge of the upper column (top of the gap);
/// the lower column starts at `upper_y + gap_height`. Positions are
/// integer-valued when placed but stored as f64 for smooth scrolling.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    /// Left edge of both columns.
    pub x: f64,
    /// Top of the gap.
    pub upper_y: f64,
    /// Vertical extent of the gap.
    pub gap_height: f64,
}

impl ObstaclePair {
    /// Bottom of the gap (top edge of the lower column).
    pub fn lower_y(&self) -> f64 {
        self.upper_y + self.gap_height
    }

    pub fn right_edge(&self) -> f64 {
        self.x + OBSTACLE_WIDTH
    }

    /// True once the pair has fully exited the visible field on the left.
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() <= 0.0
    }
}

/// Reposition a pair to extend the chain past `rightmost_x`.
///
/// Horizontal offset, gap height and gap position are uniform integers
/// drawn from the active difficulty's ranges; the gap is kept at least
/// `EDGE_MARGIN` away from both field edges.
pub fn place_pair<R: Rng>(
    pair: &mut ObstaclePair,
    rightmost_x: f64,
    difficulty: Difficulty,
    rng: &mut R,
) {
    let (h_min, h_max) = difficulty.horizontal_range();
    let (v_min, v_max) = difficulty.vertical_range();

    let horizontal_offset = rng.random_range(h_min..=h_max);
    let gap_height = rng.random_range(v_min..=v_max);
    let upper_y = rng.random_range(EDGE_MARGIN..=(FIELD_HEIGHT as i32 - EDGE_MARGIN - gap_height));

    pair.x = rightmost_x + horizontal_offset as f64;
    pair.upper_y = upper_y as f64;
    pair.gap_height = gap_height as f64;
}

/// Largest x among all pairs, the anchor for the next placement.
pub fn rightmost_x(pairs: &[ObstaclePair]) -> f64 {
    pairs.iter().map(|p| p.x).fold(0.0, f64::max)
}

/// Build the fixed pool: all pairs start at x = 0, then each is placed
/// in sequence off the previous rightmost, yielding a staggered chain.
pub fn seed_pool<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Vec<ObstaclePair> {
    let mut pairs = vec![
        ObstaclePair {
            x: 0.0,
            upper_y: 0.0,
            gap_height: 0.0,
        };
        OBSTACLE_PAIRS
    ];
    for i in 0..pairs.len() {
        let anchor = rightmost_x(&pairs);
        place_pair(&mut pairs[i], anchor, difficulty, rng);
    }
    pairs
}
