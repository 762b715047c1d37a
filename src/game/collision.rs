//! Obstacle scrolling, scoring, collision detection and pruning.

use super::types::{Avatar, GameSession, Obstacle};
use tracing::debug;

/// What a sweep over the obstacles found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Obstacles newly scored this sweep.
    pub scored: u32,
    /// True if an obstacle hit the avatar.
    pub collided: bool,
}

/// Avatar and obstacle overlap horizontally.
pub fn overlaps_horizontally(avatar: &Avatar, obstacle: &Obstacle, width: f64) -> bool {
    avatar.right() > obstacle.x && avatar.left() < obstacle.trailing_edge(width)
}

/// Avatar pokes out of the gap, above its top or below its bottom.
pub fn outside_gap(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    avatar.top() < obstacle.gap_top || avatar.bottom() > obstacle.gap_bottom
}

/// Terminal obstacle collision: both conditions at once.
pub fn hits(avatar: &Avatar, obstacle: &Obstacle, width: f64) -> bool {
    overlaps_horizontally(avatar, obstacle, width) && outside_gap(avatar, obstacle)
}

/// Avatar's center is fully past the obstacle's trailing edge.
pub fn is_cleared(avatar: &Avatar, obstacle: &Obstacle, width: f64) -> bool {
    obstacle.trailing_edge(width) < avatar.x
}

/// Scroll, score and collide every obstacle in spawn order, then prune.
///
/// For each obstacle: move it left, score it if newly cleared, then test for
/// a hit. A hit stops the sweep immediately, leaving later obstacles
/// unmoved and skipping the prune so the final frame stays as it was.
pub fn sweep_obstacles(session: &mut GameSession) -> SweepResult {
    let width = session.config().obstacle_width;
    let speed = session.config().scroll_speed;
    let prune_margin = session.config().prune_margin;

    let mut result = SweepResult {
        scored: 0,
        collided: false,
    };

    for obstacle in &mut session.obstacles {
        obstacle.x -= speed;

        if !obstacle.scored && is_cleared(&session.avatar, obstacle, width) {
            obstacle.scored = true;
            result.scored += 1;
        }

        if hits(&session.avatar, obstacle, width) {
            result.collided = true;
            break;
        }
    }

    session.score += result.scored;
    if result.scored > 0 {
        debug!(score = session.score, "obstacle cleared");
    }

    if !result.collided {
        prune_offscreen(&mut session.obstacles, width, prune_margin);
    }

    result
}

/// Drop obstacles whose trailing edge is more than `margin` past the left
/// edge.
pub fn prune_offscreen(obstacles: &mut Vec<Obstacle>, width: f64, margin: f64) {
    obstacles.retain(|o| o.trailing_edge(width) >= -margin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::types::GamePhase;

    fn running_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        session.phase = GamePhase::Running;
        session
    }

    fn avatar_at(y: f64) -> Avatar {
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.y = y;
        avatar
    }

    #[test]
    fn test_collision_against_gap_edges() {
        // Gap from 40 to 180, obstacle directly over the avatar column
        let obstacle = Obstacle::new(60.0, 40.0, 140.0);
        assert!(hits(&avatar_at(45.0), &obstacle, 50.0));
        assert!(!hits(&avatar_at(60.0), &obstacle, 50.0));
        assert!(hits(&avatar_at(170.0), &obstacle, 50.0));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let avatar = avatar_at(5.0 + 12.0);
        // Obstacle left edge exactly at avatar's right edge: no overlap
        let obstacle = Obstacle::new(92.0, 200.0, 140.0);
        assert!(!overlaps_horizontally(&avatar, &obstacle, 50.0));
        assert!(!hits(&avatar, &obstacle, 50.0));
        // Trailing edge exactly at avatar's left edge: no overlap either
        let obstacle = Obstacle::new(18.0, 200.0, 140.0);
        assert!(!overlaps_horizontally(&avatar, &obstacle, 50.0));
    }

    #[test]
    fn test_sweep_moves_obstacles() {
        let mut session = running_session();
        session.obstacles.push(Obstacle::new(300.0, 240.0, 140.0));
        let result = sweep_obstacles(&mut session);
        assert!(!result.collided);
        assert!((session.obstacles[0].x - 297.8).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_scores_once() {
        let mut session = running_session();
        // Trailing edge lands at 79.8 < 80 after one move
        session.obstacles.push(Obstacle::new(32.0, 240.0, 140.0));

        let result = sweep_obstacles(&mut session);
        assert_eq!(result.scored, 1);
        assert_eq!(session.score, 1);
        assert!(session.obstacles[0].scored);

        for _ in 0..5 {
            let result = sweep_obstacles(&mut session);
            assert_eq!(result.scored, 0);
        }
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_sweep_stops_at_first_hit() {
        let mut session = running_session();
        session.avatar.y = 100.0;
        // First obstacle hits (gap far below), second would be moved otherwise
        session.obstacles.push(Obstacle::new(70.0, 300.0, 140.0));
        session.obstacles.push(Obstacle::new(350.0, 300.0, 140.0));

        let result = sweep_obstacles(&mut session);
        assert!(result.collided);
        assert!((session.obstacles[0].x - 67.8).abs() < 1e-9);
        assert!((session.obstacles[1].x - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_counted_before_collision_on_same_obstacle() {
        let mut session = running_session();
        // Obstacle that is cleared by center but still overlaps the avatar's
        // left edge: scoring and collision on one frame.
        session.avatar.y = 100.0;
        session.obstacles.push(Obstacle::new(22.0, 300.0, 140.0));
        let result = sweep_obstacles(&mut session);
        assert_eq!(result.scored, 1);
        assert!(result.collided);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_prune_threshold() {
        let mut obstacles = vec![
            Obstacle::new(-60.0, 40.0, 140.0),
            Obstacle::new(-60.5, 40.0, 140.0),
            Obstacle::new(100.0, 40.0, 140.0),
        ];
        prune_offscreen(&mut obstacles, 50.0, 10.0);
        // -60 + 50 = -10 stays, -10.5 goes
        assert_eq!(obstacles.len(), 2);
        assert!((obstacles[0].x + 60.0).abs() < f64::EPSILON);
        assert!((obstacles[1].x - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sweep_prunes_after_moving() {
        let mut session = running_session();
        // Trailing edge -9.0 before the move, -11.2 after
        session.obstacles.push(Obstacle::new(-59.0, 240.0, 140.0));
        session.obstacles.push(Obstacle::new(200.0, 240.0, 140.0));
        sweep_obstacles(&mut session);
        assert_eq!(session.obstacles.len(), 1);
        assert!((session.obstacles[0].x - 197.8).abs() < 1e-9);
    }
}
