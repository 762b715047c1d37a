//! Terminal rendering and input for Flappy Nano.

pub mod game_common;
pub mod game_scene;
pub mod input;
