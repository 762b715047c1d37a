//! Flappy Nano - Terminal Flappy-Style Game Library
//!
//! This module exposes the game logic for testing, the headless simulator
//! and external use.

pub mod build_info;
pub mod config;
pub mod driver;
pub mod game;
pub mod persistence;
pub mod share;
pub mod simulator;

pub use config::{ConfigError, GameConfig};
pub use driver::{Driver, FixedRateClock, ManualTicks, PumpReport, TickSource};
pub use game::{Collision, GameInput, GamePhase, GameSession, StepOutcome};
