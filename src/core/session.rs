//! Session state: everything one play-through mutates, owned in a
//! single struct and reset as a unit. No part of the game lives in
//! statics or scene-level fields.

use crate::core::avatar::Avatar;
use crate::core::constants::{AVATAR_WIDTH, AVATAR_X};
use crate::core::difficulty::Difficulty;
use crate::core::obstacle::{seed_pool, ObstaclePair};
use crate::core::tasks::TaskQueue;
use rand::Rng;

/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Motion frozen. Covers both the pause modal and the resume
    /// countdown; flap input is rejected throughout.
    Paused,
    /// Motion frozen, restart pending on the task queue.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,

    pub avatar: Avatar,
    /// The fixed obstacle pool. Length never changes after seeding.
    pub obstacles: Vec<ObstaclePair>,

    pub difficulty: Difficulty,
    /// Cached from the difficulty so every pair scrolls uniformly.
    pub scroll_speed: f64,

    /// Pairs cleared this session.
    pub score: u32,
    /// Mirror of the persisted best, for the HUD.
    pub best: u32,

    /// Some(n) while the resume countdown runs; drives "Fly in: N".
    pub countdown: Option<u8>,
    pub tasks: TaskQueue,

    // Fixed-timestep bookkeeping
    pub accumulated_time_ms: u64,
    pub tick_count: u64,

    /// Flap input waiting to be consumed by the next physics tick.
    pub flap_queued: bool,
}

impl Session {
    /// Fresh session: avatar at the start pose, pool seeded on Easy,
    /// score zeroed. `best` is whatever the store last held.
    pub fn new<R: Rng>(best: u32, rng: &mut R) -> Self {
        let difficulty = Difficulty::Easy;
        Self {
            phase: Phase::Playing,
            avatar: Avatar::new(),
            obstacles: seed_pool(difficulty, rng),
            difficulty,
            scroll_speed: difficulty.scroll_speed(),
            score: 0,
            best,
            countdown: None,
            tasks: TaskQueue::new(),
            accumulated_time_ms: 0,
            tick_count: 0,
            flap_queued: false,
        }
    }

    /// Full reset after game over: everything back to initial except
    /// the mirrored best, which survives the session boundary.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let best = self.best;
        *self = Session::new(best, rng);
    }

    /// Switch the active level and the uniform scroll speed together.
    pub fn apply_difficulty(&mut self, level: Difficulty) {
        self.difficulty = level;
        self.scroll_speed = level.scroll_speed();
    }

    /// The earliest pair the avatar has not yet cleared, if any.
    pub fn next_gap(&self) -> Option<&ObstaclePair> {
        let avatar_left = AVATAR_X - AVATAR_WIDTH / 2.0;
        self.obstacles
            .iter()
            .filter(|p| p.right_edge() > avatar_left)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }
}
