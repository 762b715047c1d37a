//! Obstacle generation on a fixed step cadence.

use super::types::{GameSession, Obstacle};
use rand::Rng;
use tracing::debug;

/// Whether `frame_count` is a spawn frame.
///
/// Frame 0 never spawns: the counter is bumped before this check, so the
/// first obstacle arrives on frame `spawn_interval`.
pub fn is_spawn_frame(frame_count: u64, spawn_interval: u64) -> bool {
    frame_count > 0 && frame_count % spawn_interval == 0
}

/// Append one obstacle at the right edge with a random gap-top offset drawn
/// uniformly from the config's spawn range.
pub fn spawn_obstacle<R: Rng>(session: &mut GameSession, rng: &mut R) {
    let config = session.config();
    let (min_top, max_top) = config.spawn_range();
    let gap_top = rng.gen_range(min_top..=max_top);
    let obstacle = Obstacle::new(config.playfield_width, gap_top, config.gap_height);

    debug!(
        frame = session.frame_count,
        gap_top = obstacle.gap_top,
        "obstacle spawned"
    );
    session.obstacles.push(obstacle);
}

/// Spawn an obstacle if the current frame is on cadence. Only acts while
/// the session is running. Returns true if one was spawned.
pub fn maybe_spawn<R: Rng>(session: &mut GameSession, rng: &mut R) -> bool {
    if !session.is_running() {
        return false;
    }
    if !is_spawn_frame(session.frame_count, session.config().spawn_interval) {
        return false;
    }
    spawn_obstacle(session, rng);
    true
}
