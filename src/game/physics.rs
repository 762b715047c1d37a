//! Avatar integration: constant per-step gravity and a velocity-override flap.

use super::types::Avatar;
use crate::config::GameConfig;

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsOutcome {
    /// Avatar moved freely.
    Airborne,
    /// Avatar hit the ceiling; clamped with velocity zeroed.
    CeilingClamped,
    /// Avatar went through the ground. Terminal.
    GroundHit,
}

/// Advance the avatar by one step.
///
/// Gravity is per step, not per second; the tick rate sets the real-time
/// feel. A ground hit clamps the avatar to rest on the ground and returns
/// immediately.
pub fn integrate(avatar: &mut Avatar, config: &GameConfig) -> PhysicsOutcome {
    avatar.velocity += config.gravity;
    avatar.y += avatar.velocity;

    if avatar.bottom() > config.playfield_height {
        avatar.y = config.playfield_height - avatar.radius;
        return PhysicsOutcome::GroundHit;
    }

    // Soft ceiling
    if avatar.top() < 0.0 {
        avatar.y = avatar.radius;
        avatar.velocity = 0.0;
        return PhysicsOutcome::CeilingClamped;
    }

    PhysicsOutcome::Airborne
}

/// Set velocity to the upward impulse, discarding whatever it was.
pub fn apply_flap(avatar: &mut Avatar, config: &GameConfig) {
    avatar.velocity = config.flap_impulse;
}
