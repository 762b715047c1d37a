//! Autopilot used by the simulator.
//!
//! Aims for a line just above the bottom of the next gap and flaps whenever
//! the avatar is about to sink below it.

use crate::game::{GameSession, Obstacle};

/// Clearance kept above the gap bottom, on top of the avatar radius.
const GAP_CLEARANCE: f64 = 24.0;

/// Where the pilot is steering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PilotTarget {
    /// Height the avatar's center should stay above.
    pub line: f64,
}

impl PilotTarget {
    /// Target for the nearest obstacle the avatar has not yet cleared, or
    /// mid-screen when none is coming.
    pub fn for_session(session: &GameSession) -> Self {
        let config = session.config();
        let next = next_obstacle(session);
        let line = match next {
            Some(obstacle) => obstacle.gap_bottom - session.avatar.radius - GAP_CLEARANCE,
            None => config.playfield_height / 2.0,
        };
        Self { line }
    }
}

fn next_obstacle(session: &GameSession) -> Option<&Obstacle> {
    let width = session.config().obstacle_width;
    session
        .obstacles
        .iter()
        .find(|o| o.trailing_edge(width) >= session.avatar.left())
}

/// Flap if next step's position would fall below the target line.
pub fn wants_flap(session: &GameSession) -> bool {
    let target = PilotTarget::for_session(session);
    let avatar = &session.avatar;
    let next_y = avatar.y + avatar.velocity + session.config().gravity;
    next_y > target.line
}
