//! Headless simulator for Flappy Nano.
//!
//! Plays many sessions with a simple autopilot, driven by `ManualTicks`
//! instead of a wall clock, to check that the tuning produces playable
//! gaps. Uses the same driver and step function as the terminal game.

mod config;
mod pilot;
mod report;
mod runner;

pub use config::SimConfig;
pub use pilot::{wants_flap, PilotTarget};
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
