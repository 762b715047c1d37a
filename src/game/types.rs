//! Flappy Nano session data structures.
//!
//! One `GameSession` owns everything a running game mutates. Nothing here is
//! global, so any number of sessions can run side by side.

use crate::config::{ConfigError, GameConfig};
use serde::Serialize;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Waiting for the first input. Avatar shown, nothing moves.
    Idle,
    /// Simulation stepping.
    Running,
    /// Terminal collision happened. State frozen for the final frame.
    Ended,
}

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Collision {
    /// Avatar fell through the bottom boundary.
    Ground,
    /// Avatar overlapped an obstacle outside its gap.
    Obstacle,
}

/// The player-controlled ball.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Fixed horizontal center.
    pub x: f64,
    /// Vertical center (down is positive).
    pub y: f64,
    /// Vertical velocity per step (positive = falling).
    pub velocity: f64,
    pub radius: f64,
}

impl Avatar {
    /// Avatar at rest at the config's starting height.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.avatar_x,
            y: config.initial_avatar_y(),
            velocity: 0.0,
            radius: config.avatar_radius,
        }
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }

    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn right(&self) -> f64 {
        self.x + self.radius
    }
}

/// A scrolling barrier pair with a passable gap between `gap_top` and
/// `gap_bottom`.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Leading (left) edge. Decreases every step.
    pub x: f64,
    /// Lower end of the top segment.
    pub gap_top: f64,
    /// Upper end of the bottom segment. Always `gap_top + gap_height`.
    pub gap_bottom: f64,
    /// Set once the avatar has cleared this obstacle.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_top: f64, gap_height: f64) -> Self {
        Self {
            x,
            gap_top,
            gap_bottom: gap_top + gap_height,
            scored: false,
        }
    }

    /// Right edge, given the shared obstacle width.
    pub fn trailing_edge(&self, width: f64) -> f64 {
        self.x + width
    }
}

/// Main game state: avatar, obstacles, counters and phase.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub avatar: Avatar,
    /// Active obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    /// Obstacles cleared this session.
    pub score: u32,
    /// Steps taken since the session started running.
    pub frame_count: u64,
    pub phase: GamePhase,
    /// Cause of the end, set on entry to `Ended`.
    pub collision: Option<Collision>,
}

impl GameSession {
    /// Create an idle session, rejecting configs the simulation cannot run.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            avatar: Avatar::new(&config),
            config,
            obstacles: Vec::new(),
            score: 0,
            frame_count: 0,
            phase: GamePhase::Idle,
            collision: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full reset back to the idle screen.
    pub fn reset(&mut self) {
        self.avatar = Avatar::new(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.frame_count = 0;
        self.phase = GamePhase::Idle;
        self.collision = None;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Enter `Ended`, recording the cause.
    pub(crate) fn end(&mut self, collision: Collision) {
        self.phase = GamePhase::Ended;
        self.collision = Some(collision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(GameConfig::default()).unwrap();
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.score, 0);
        assert_eq!(session.frame_count, 0);
        assert!(session.obstacles.is_empty());
        assert!(session.collision.is_none());
        assert!((session.avatar.y - 300.0).abs() < f64::EPSILON);
        assert!((session.avatar.x - 80.0).abs() < f64::EPSILON);
        assert_eq!(session.avatar.velocity, 0.0);
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let config = GameConfig {
            gap_height: 1000.0,
            ..Default::default()
        };
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_obstacle_gap_bottom_follows_gap_height() {
        let obstacle = Obstacle::new(400.0, 55.5, 140.0);
        assert!((obstacle.gap_bottom - 195.5).abs() < f64::EPSILON);
        assert!(!obstacle.scored);
        assert!((obstacle.trailing_edge(50.0) - 450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_avatar_edges() {
        let avatar = Avatar::new(&GameConfig::default());
        assert!((avatar.top() - 288.0).abs() < f64::EPSILON);
        assert!((avatar.bottom() - 312.0).abs() < f64::EPSILON);
        assert!((avatar.left() - 68.0).abs() < f64::EPSILON);
        assert!((avatar.right() - 92.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        session.score = 7;
        session.frame_count = 412;
        session.avatar.y = 20.0;
        session.avatar.velocity = 3.0;
        session.obstacles.push(Obstacle::new(10.0, 40.0, 140.0));
        session.end(Collision::Obstacle);

        session.reset();

        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.score, 0);
        assert_eq!(session.frame_count, 0);
        assert!(session.obstacles.is_empty());
        assert!(session.collision.is_none());
        assert_eq!(session.avatar, Avatar::new(session.config()));
    }
}
