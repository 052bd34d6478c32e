//! Play logic: input processing and the fixed-timestep update.
//!
//! All functions are free functions over `&mut Session` with an
//! injected RNG and store, so the whole game runs headlessly and
//! deterministically under a seeded generator.

use crate::core::avatar::Avatar;
use crate::core::constants::{
    AVATAR_WIDTH, AVATAR_X, COUNTDOWN_INTERVAL_MS, COUNTDOWN_START, FLAP_IMPULSE, GRAVITY,
    MAX_FRAME_DT_MS, OBSTACLE_WIDTH, PHYSICS_TICK_MS, RESTART_DELAY_MS,
};
use crate::core::difficulty::Difficulty;
use crate::core::obstacle::{place_pair, rightmost_x, ObstaclePair};
use crate::core::score::{save_high_score, KeyValueStore};
use crate::core::session::{Phase, Session};
use crate::core::tasks::TaskKind;
use rand::Rng;

/// Player input relevant to the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    /// Upward impulse request.
    Flap,
    /// Freeze motion and open the pause modal.
    Pause,
    /// Leave the pause modal into the resume countdown.
    Resume,
}

/// What happened during one update, for scenes, tests and the
/// simulator. Defaults to "nothing happened".
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Physics ticks executed.
    pub ticks: u32,
    /// Pairs recycled (and therefore scored) this update.
    pub scored: u32,
    /// The persisted best was overwritten.
    pub new_best: bool,
    /// The ladder moved to a new level.
    pub difficulty_change: Option<Difficulty>,
    /// Playing ended this update.
    pub game_over: bool,
    /// Counter value after a countdown tick fired (0 on the last one).
    pub countdown_tick: Option<u8>,
    /// The countdown finished and motion resumed.
    pub resumed: bool,
    /// The restart delay fired and the session was reset.
    pub restarted: bool,
}

/// Route an input event. Gating is strict: flap only queues while
/// Playing, so nothing leaks through the pause modal, the countdown
/// window or the game-over freeze.
pub fn process_input(session: &mut Session, input: PlayInput) {
    match input {
        PlayInput::Flap => {
            if session.phase == Phase::Playing {
                session.flap_queued = true;
            }
        }
        PlayInput::Pause => {
            if session.phase == Phase::Playing {
                session.phase = Phase::Paused;
                session.countdown = None;
                // A flap buffered just before the pause must not fire on resume
                session.flap_queued = false;
            }
        }
        PlayInput::Resume => {
            if session.phase == Phase::Paused && session.countdown.is_none() {
                session.countdown = Some(COUNTDOWN_START);
                session
                    .tasks
                    .schedule(TaskKind::CountdownTick, COUNTDOWN_INTERVAL_MS, true);
            }
        }
    }
}

/// Advance the session by `dt_ms` of wall time: poll the task queue,
/// then run as many fixed physics ticks as the accumulator allows.
/// `dt_ms` is clamped so a stalled frame cannot fast-forward the game.
pub fn update<R: Rng, S: KeyValueStore>(
    session: &mut Session,
    dt_ms: u64,
    rng: &mut R,
    store: &mut S,
) -> TickResult {
    let mut result = TickResult::default();
    let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);

    // 1. Scheduled tasks first, so a due restart or countdown step
    //    takes effect before any physics this frame
    for kind in session.tasks.advance(dt_ms) {
        match kind {
            TaskKind::CountdownTick => {
                if let Some(n) = session.countdown {
                    let n = n.saturating_sub(1);
                    result.countdown_tick = Some(n);
                    if n == 0 {
                        session.countdown = None;
                        session.tasks.cancel(TaskKind::CountdownTick);
                        session.phase = Phase::Playing;
                        result.resumed = true;
                    } else {
                        session.countdown = Some(n);
                    }
                }
            }
            TaskKind::Restart => {
                session.reset(rng);
                result.restarted = true;
            }
        }
    }

    // 2. A reset session starts clean on the next frame
    if result.restarted {
        return result;
    }

    // 3. Physics only runs while Playing; Paused and GameOver freeze
    //    motion but the queue above still ticked
    if session.phase != Phase::Playing {
        return result;
    }

    session.accumulated_time_ms += dt_ms;
    while session.accumulated_time_ms >= PHYSICS_TICK_MS {
        session.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_physics(session, rng, store, &mut result);
        result.ticks += 1;
        session.tick_count += 1;
        if session.phase != Phase::Playing {
            break;
        }
    }

    result
}

/// One 16ms physics tick.
fn step_physics<R: Rng, S: KeyValueStore>(
    session: &mut Session,
    rng: &mut R,
    store: &mut S,
    result: &mut TickResult,
) {
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // 1. Consume buffered flap
    if session.flap_queued {
        session.flap_queued = false;
        session.avatar.flap(FLAP_IMPULSE);
    }

    // 2. Integrate gravity and vertical motion
    session.avatar.velocity += GRAVITY * dt;
    session.avatar.y += session.avatar.velocity * dt;

    // 3. Wind down the flap animation
    if session.avatar.flap_timer > 0 {
        session.avatar.flap_timer -= 1;
    }

    // 4. Bounds check
    if session.avatar.is_out_of_bounds() {
        game_over(session, result);
        return;
    }

    // 5. Scroll all pairs left at the uniform speed
    for pair in &mut session.obstacles {
        pair.x -= session.scroll_speed * dt;
    }

    // 6. Recycle pairs that fully exited on the left
    recycle_obstacles(session, rng, store, result);

    // 7. Obstacle collision
    if session
        .obstacles
        .iter()
        .any(|p| overlaps(&session.avatar, p))
    {
        game_over(session, result);
    }
}

/// Reposition every fully exited pair to the right end of the chain.
/// Per recycled pair, in this order: score, persist best, re-evaluate
/// the difficulty ladder.
fn recycle_obstacles<R: Rng, S: KeyValueStore>(
    session: &mut Session,
    rng: &mut R,
    store: &mut S,
    result: &mut TickResult,
) {
    for i in 0..session.obstacles.len() {
        if !session.obstacles[i].is_off_screen() {
            continue;
        }

        // Anchor on the rightmost pair as it stands now, so back-to-back
        // recycles chain instead of overlapping
        let anchor = rightmost_x(&session.obstacles);
        place_pair(&mut session.obstacles[i], anchor, session.difficulty, rng);

        session.score += 1;
        result.scored += 1;

        if save_high_score(store, session.score) {
            session.best = session.score;
            result.new_best = true;
        }

        let level = Difficulty::for_score(session.score);
        if level != session.difficulty {
            session.apply_difficulty(level);
            result.difficulty_change = Some(level);
        }
    }
}

/// Axis-aligned overlap between the avatar box and either column of a
/// pair. Touching edges do not collide.
fn overlaps(avatar: &Avatar, pair: &ObstaclePair) -> bool {
    let avatar_left = AVATAR_X - AVATAR_WIDTH / 2.0;
    let avatar_right = AVATAR_X + AVATAR_WIDTH / 2.0;

    let horizontal = avatar_right > pair.x && avatar_left < pair.x + OBSTACLE_WIDTH;
    if !horizontal {
        return false;
    }

    // Upper column spans [0, upper_y], lower column [lower_y, field bottom]
    avatar.top() < pair.upper_y || avatar.bottom() > pair.lower_y()
}

/// Freeze the session and arm the one-shot restart.
fn game_over(session: &mut Session, result: &mut TickResult) {
    session.phase = Phase::GameOver;
    session.flap_queued = false;
    session.tasks.schedule(TaskKind::Restart, RESTART_DELAY_MS, false);
    result.game_over = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{
        AVATAR_START_Y, FIELD_HEIGHT, HIGH_SCORE_KEY, OBSTACLE_PAIRS,
    };
    use crate::core::score::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn harness() -> (Session, ChaCha8Rng, MemoryStore) {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        let session = Session::new(0, &mut rng);
        (session, rng, MemoryStore::new())
    }

    /// Drive the session in 50ms frames (the real poll cadence) and
    /// merge the per-frame results.
    fn run(
        session: &mut Session,
        total_ms: u64,
        rng: &mut ChaCha8Rng,
        store: &mut MemoryStore,
    ) -> TickResult {
        let mut merged = TickResult::default();
        let mut elapsed = 0;
        while elapsed < total_ms {
            let step = 50.min(total_ms - elapsed);
            let r = update(session, step, rng, store);
            merged.ticks += r.ticks;
            merged.scored += r.scored;
            merged.new_best |= r.new_best;
            merged.game_over |= r.game_over;
            merged.resumed |= r.resumed;
            merged.restarted |= r.restarted;
            if r.difficulty_change.is_some() {
                merged.difficulty_change = r.difficulty_change;
            }
            if r.countdown_tick.is_some() {
                merged.countdown_tick = r.countdown_tick;
            }
            elapsed += step;
        }
        merged
    }

    /// Park a pair right on the avatar column with its gap well away
    /// from the avatar, so the next tick collides.
    fn park_blocking_pair(session: &mut Session) {
        session.obstacles[0].x = AVATAR_X - OBSTACLE_WIDTH / 2.0;
        session.obstacles[0].upper_y = 100.0;
        session.obstacles[0].gap_height = 120.0;
    }

    // ── Input gating ──

    #[test]
    fn test_flap_queues_while_playing() {
        let (mut session, _, _) = harness();
        process_input(&mut session, PlayInput::Flap);
        assert!(session.flap_queued);
    }

    #[test]
    fn test_flap_rejected_while_paused() {
        let (mut session, _, _) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Flap);
        assert!(!session.flap_queued);
    }

    #[test]
    fn test_flap_rejected_after_game_over() {
        let (mut session, _, _) = harness();
        session.phase = Phase::GameOver;
        process_input(&mut session, PlayInput::Flap);
        assert!(!session.flap_queued);
    }

    #[test]
    fn test_pause_clears_a_buffered_flap() {
        let (mut session, _, _) = harness();
        process_input(&mut session, PlayInput::Flap);
        process_input(&mut session, PlayInput::Pause);
        assert_eq!(session.phase, Phase::Paused);
        assert!(!session.flap_queued);
    }

    #[test]
    fn test_pause_only_applies_while_playing() {
        let (mut session, _, _) = harness();
        session.phase = Phase::GameOver;
        process_input(&mut session, PlayInput::Pause);
        assert_eq!(session.phase, Phase::GameOver);
    }

    #[test]
    fn test_resume_requires_the_pause_modal() {
        let (mut session, _, _) = harness();
        process_input(&mut session, PlayInput::Resume);
        assert_eq!(session.countdown, None);
        assert!(session.tasks.is_empty());
    }

    #[test]
    fn test_resume_starts_the_countdown() {
        let (mut session, _, _) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Resume);
        assert_eq!(session.countdown, Some(COUNTDOWN_START));
        assert!(session.tasks.is_scheduled(TaskKind::CountdownTick));
        assert_eq!(session.phase, Phase::Paused, "still paused until 0");
    }

    #[test]
    fn test_double_resume_does_not_stack_countdowns() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Resume);
        process_input(&mut session, PlayInput::Resume);

        // One interval later exactly one decrement has happened
        run(&mut session, 1000, &mut rng, &mut store);
        assert_eq!(session.countdown, Some(2));
    }

    // ── Physics ──

    #[test]
    fn test_gravity_pulls_the_avatar_down() {
        let (mut session, mut rng, mut store) = harness();
        update(&mut session, 16, &mut rng, &mut store);
        assert!(session.avatar.y > AVATAR_START_Y);
        assert!(session.avatar.velocity > 0.0);
    }

    #[test]
    fn test_flap_moves_the_avatar_up() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Flap);
        update(&mut session, 16, &mut rng, &mut store);
        assert!(session.avatar.y < AVATAR_START_Y);
        assert!(session.avatar.velocity < 0.0);
        assert!(!session.flap_queued, "buffer consumed by the tick");
    }

    #[test]
    fn test_obstacles_scroll_left() {
        let (mut session, mut rng, mut store) = harness();
        let xs: Vec<f64> = session.obstacles.iter().map(|p| p.x).collect();
        update(&mut session, 16, &mut rng, &mut store);
        for (pair, old_x) in session.obstacles.iter().zip(xs) {
            assert!(pair.x < old_x);
        }
    }

    #[test]
    fn test_sub_tick_time_accumulates() {
        let (mut session, mut rng, mut store) = harness();
        let r = update(&mut session, 8, &mut rng, &mut store);
        assert_eq!(r.ticks, 0);
        let r = update(&mut session, 8, &mut rng, &mut store);
        assert_eq!(r.ticks, 1);
    }

    #[test]
    fn test_stalled_frame_is_clamped() {
        let (mut session, mut rng, mut store) = harness();
        let r = update(&mut session, 10_000, &mut rng, &mut store);
        assert_eq!(r.ticks as u64, MAX_FRAME_DT_MS / PHYSICS_TICK_MS);
    }

    #[test]
    fn test_pause_freezes_motion() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Pause);
        let y = session.avatar.y;
        let x = session.obstacles[0].x;
        run(&mut session, 500, &mut rng, &mut store);
        assert_eq!(session.avatar.y, y);
        assert_eq!(session.obstacles[0].x, x);
    }

    #[test]
    fn test_free_fall_ends_the_session_on_the_floor() {
        let (mut session, mut rng, mut store) = harness();
        let r = run(&mut session, 1000, &mut rng, &mut store);
        assert!(r.game_over);
        assert_eq!(session.phase, Phase::GameOver);
        assert!(session.avatar.bottom() >= FIELD_HEIGHT);
    }

    #[test]
    fn test_ceiling_exit_ends_the_session() {
        let (mut session, mut rng, mut store) = harness();
        session.avatar.y = 10.0;
        session.avatar.velocity = -FLAP_IMPULSE;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert!(r.game_over);
    }

    // ── Collision ──

    #[test]
    fn test_collision_with_a_column_ends_the_session() {
        let (mut session, mut rng, mut store) = harness();
        park_blocking_pair(&mut session);
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert!(r.game_over);
        assert_eq!(session.phase, Phase::GameOver);
    }

    #[test]
    fn test_avatar_fits_through_a_centered_gap() {
        let (mut session, mut rng, mut store) = harness();
        session.obstacles[0].x = AVATAR_X - OBSTACLE_WIDTH / 2.0;
        session.obstacles[0].upper_y = AVATAR_START_Y - 100.0;
        session.obstacles[0].gap_height = 200.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert!(!r.game_over);
    }

    #[test]
    fn test_game_over_freezes_motion_and_input() {
        let (mut session, mut rng, mut store) = harness();
        park_blocking_pair(&mut session);
        update(&mut session, 16, &mut rng, &mut store);

        let y = session.avatar.y;
        process_input(&mut session, PlayInput::Flap);
        update(&mut session, 16, &mut rng, &mut store);
        assert_eq!(session.avatar.y, y);
    }

    // ── Game over / restart ──

    #[test]
    fn test_restart_fires_after_the_fixed_delay() {
        let (mut session, mut rng, mut store) = harness();
        park_blocking_pair(&mut session);
        update(&mut session, 16, &mut rng, &mut store);
        assert!(session.tasks.is_scheduled(TaskKind::Restart));

        let r = run(&mut session, RESTART_DELAY_MS, &mut rng, &mut store);
        assert!(r.restarted);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.difficulty, Difficulty::Easy);
        assert_eq!(session.avatar.y, AVATAR_START_Y);
        assert_eq!(session.obstacles.len(), OBSTACLE_PAIRS);
    }

    #[test]
    fn test_restart_keeps_the_mirrored_best() {
        let (mut session, mut rng, mut store) = harness();
        session.best = 42;
        park_blocking_pair(&mut session);
        update(&mut session, 16, &mut rng, &mut store);
        run(&mut session, RESTART_DELAY_MS, &mut rng, &mut store);
        assert_eq!(session.best, 42);
    }

    // ── Recycling and scoring ──

    #[test]
    fn test_recycle_keeps_the_pool_size_fixed() {
        let (mut session, mut rng, mut store) = harness();
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert_eq!(r.scored, 1);
        assert_eq!(session.obstacles.len(), OBSTACLE_PAIRS);
    }

    #[test]
    fn test_recycled_pair_rejoins_the_chain_on_the_right() {
        let (mut session, mut rng, mut store) = harness();
        let old_rightmost = rightmost_x(&session.obstacles);
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        update(&mut session, 16, &mut rng, &mut store);
        assert!(session.obstacles[0].x > old_rightmost);
    }

    #[test]
    fn test_partial_scroll_off_does_not_score() {
        let (mut session, mut rng, mut store) = harness();
        // Right edge still a few units inside the field
        session.obstacles[0].x = -OBSTACLE_WIDTH + 10.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert_eq!(r.scored, 0);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_each_recycled_pair_scores_exactly_once() {
        let (mut session, mut rng, mut store) = harness();
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        session.obstacles[1].x = -OBSTACLE_WIDTH - 60.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert_eq!(r.scored, 2);
        assert_eq!(session.score, 2);
    }

    #[test]
    fn test_recycle_persists_a_new_best() {
        let (mut session, mut rng, mut store) = harness();
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert!(r.new_best);
        assert_eq!(store.get(HIGH_SCORE_KEY), Some("1".to_string()));
        assert_eq!(session.best, 1);
    }

    #[test]
    fn test_recycle_leaves_a_higher_stored_best_alone() {
        let (mut session, mut rng, mut store) = harness();
        store.set(HIGH_SCORE_KEY, "10");
        session.best = 10;
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert!(!r.new_best);
        assert_eq!(store.get(HIGH_SCORE_KEY), Some("10".to_string()));
    }

    #[test]
    fn test_crossing_the_first_threshold_moves_the_ladder_once() {
        let (mut session, mut rng, mut store) = harness();
        session.score = 9;
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);

        assert_eq!(session.score, 10);
        assert_eq!(r.difficulty_change, Some(Difficulty::Normal));
        assert_eq!(session.difficulty, Difficulty::Normal);
        assert!((session.scroll_speed - 250.0).abs() < f64::EPSILON);

        // Next recycle stays inside the band: no new change event
        session.obstacles[1].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert_eq!(r.difficulty_change, None);
        assert_eq!(session.difficulty, Difficulty::Normal);
    }

    #[test]
    fn test_persist_runs_before_the_difficulty_check() {
        let (mut session, mut rng, mut store) = harness();
        session.score = 9;
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);

        // Same recycle event: the store already holds the threshold
        // score and the ladder moved on it
        assert_eq!(store.get(HIGH_SCORE_KEY), Some("10".to_string()));
        assert_eq!(r.difficulty_change, Some(Difficulty::Normal));
    }

    #[test]
    fn test_second_threshold_reaches_hard() {
        let (mut session, mut rng, mut store) = harness();
        session.score = 19;
        session.apply_difficulty(Difficulty::Normal);
        session.obstacles[0].x = -OBSTACLE_WIDTH - 1.0;
        let r = update(&mut session, 16, &mut rng, &mut store);
        assert_eq!(r.difficulty_change, Some(Difficulty::Hard));
        assert!((session.scroll_speed - 300.0).abs() < f64::EPSILON);
    }

    // ── Countdown ──

    #[test]
    fn test_countdown_runs_three_ticks_then_resumes() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Resume);

        let r = run(&mut session, 1000, &mut rng, &mut store);
        assert_eq!(r.countdown_tick, Some(2));
        assert_eq!(session.countdown, Some(2));

        let r = run(&mut session, 1000, &mut rng, &mut store);
        assert_eq!(r.countdown_tick, Some(1));

        let r = run(&mut session, 1000, &mut rng, &mut store);
        assert_eq!(r.countdown_tick, Some(0));
        assert!(r.resumed);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.countdown, None);
        assert!(
            !session.tasks.is_scheduled(TaskKind::CountdownTick),
            "timer removed on completion"
        );
    }

    #[test]
    fn test_flap_during_countdown_has_no_effect() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Resume);
        let y = session.avatar.y;

        run(&mut session, 1000, &mut rng, &mut store);
        process_input(&mut session, PlayInput::Flap);
        run(&mut session, 1000, &mut rng, &mut store);

        assert!(!session.flap_queued);
        assert_eq!(session.avatar.y, y, "no motion before the countdown ends");
    }

    #[test]
    fn test_pause_during_countdown_is_ignored() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Resume);
        run(&mut session, 1000, &mut rng, &mut store);

        process_input(&mut session, PlayInput::Pause);
        assert_eq!(session.countdown, Some(2), "countdown unaffected");

        run(&mut session, 2000, &mut rng, &mut store);
        assert_eq!(session.phase, Phase::Playing);
    }

    #[test]
    fn test_motion_resumes_only_after_the_countdown() {
        let (mut session, mut rng, mut store) = harness();
        process_input(&mut session, PlayInput::Pause);
        process_input(&mut session, PlayInput::Resume);
        let y = session.avatar.y;

        run(&mut session, 2999, &mut rng, &mut store);
        assert_eq!(session.avatar.y, y);

        run(&mut session, 200, &mut rng, &mut store);
        assert!(session.avatar.y > y, "falling again after resume");
    }
}
