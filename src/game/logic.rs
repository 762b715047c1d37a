//! Game logic for Flappy Nano: the Idle / Running / Ended state machine and
//! the per-step simulation that ties the other engines together.

use super::collision::sweep_obstacles;
use super::physics::{apply_flap, integrate, PhysicsOutcome};
use super::spawner::maybe_spawn;
use super::types::{Collision, GamePhase, GameSession};
use rand::Rng;
use tracing::info;

/// UI-agnostic input signals. Every input channel (keys, mouse, taps) maps
/// onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Leave the idle screen without flapping.
    Start,
    /// Upward impulse; also starts the game from idle.
    Flap,
    /// Back to the idle screen after a crash.
    Retry,
}

/// Result of a single simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Session was not running; nothing changed.
    Skipped,
    /// Step completed and the session is still running.
    Advanced { scored: u32, spawned: bool },
    /// A terminal collision ended the session on this step.
    Ended(Collision),
}

/// Idle -> Running. Returns false (no-op) from any other phase.
pub fn start(session: &mut GameSession) -> bool {
    if session.phase != GamePhase::Idle {
        return false;
    }
    session.obstacles.clear();
    session.score = 0;
    session.frame_count = 0;
    session.phase = GamePhase::Running;
    info!("session started");
    true
}

/// Flap. Starts the session first when idle; ignored once ended.
pub fn flap(session: &mut GameSession) -> bool {
    match session.phase {
        GamePhase::Ended => false,
        GamePhase::Idle => {
            start(session);
            apply_flap(&mut session.avatar, &session.config);
            true
        }
        GamePhase::Running => {
            apply_flap(&mut session.avatar, &session.config);
            true
        }
    }
}

/// Ended -> Idle with a full reset. Ignored in any other phase.
pub fn retry(session: &mut GameSession) -> bool {
    if session.phase != GamePhase::Ended {
        return false;
    }
    session.reset();
    info!("session reset for retry");
    true
}

/// Apply one input. Returns true if the session changed.
pub fn process_input(session: &mut GameSession, input: GameInput) -> bool {
    match input {
        GameInput::Start => start(session),
        GameInput::Flap => flap(session),
        GameInput::Retry => retry(session),
    }
}

/// Run one simulation step.
///
/// Order: frame counter, obstacle spawn, avatar physics (a ground hit ends
/// the step there), then the obstacle sweep (scroll, score, collide, prune).
pub fn step<R: Rng>(session: &mut GameSession, rng: &mut R) -> StepOutcome {
    if !session.is_running() {
        return StepOutcome::Skipped;
    }

    session.frame_count += 1;
    let spawned = maybe_spawn(session, rng);

    if integrate(&mut session.avatar, &session.config) == PhysicsOutcome::GroundHit {
        return end_session(session, Collision::Ground);
    }

    let sweep = sweep_obstacles(session);
    if sweep.collided {
        return end_session(session, Collision::Obstacle);
    }

    StepOutcome::Advanced {
        scored: sweep.scored,
        spawned,
    }
}

fn end_session(session: &mut GameSession, collision: Collision) -> StepOutcome {
    session.end(collision);
    info!(
        score = session.score,
        frames = session.frame_count,
        cause = ?collision,
        "session ended"
    );
    StepOutcome::Ended(collision)
}
