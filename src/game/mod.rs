//! Flappy Nano simulation core.
//!
//! An avatar falls under per-step gravity and flaps upward on input while
//! gap obstacles scroll in from the right. Clearing an obstacle scores a
//! point; touching one, or the ground, ends the session.

pub mod collision;
pub mod logic;
pub mod physics;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use types::*;
