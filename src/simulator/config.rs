//! Simulation configuration.

use crate::config::GameConfig;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = fresh entropy per run)
    pub seed: Option<u64>,

    /// Step cap per session, so a perfect pilot still terminates
    pub max_steps_per_run: u64,

    /// Game tuning shared by every run
    pub game: GameConfig,

    /// Print one line per run
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            max_steps_per_run: 100_000,
            game: GameConfig::default(),
            verbose: false,
        }
    }
}

impl SimConfig {
    /// Small batch for quick checks and tests.
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            max_steps_per_run: 20_000,
            ..Default::default()
        }
    }
}
