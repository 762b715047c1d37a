//! Simulation runner: plays sessions through the real driver.

use super::config::SimConfig;
use super::pilot::wants_flap;
use super::report::{RunStats, SimReport};
use crate::config::ConfigError;
use crate::driver::{Driver, ManualTicks};
use crate::game::GameSession;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run the whole batch and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut stats = simulate_single_run(config, &mut rng)?;
        stats.seed = seed;

        if config.verbose {
            println!(
                "Run {}/{} - score {}, steps {}, flaps {}, ended by {:?}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.steps,
                stats.flaps,
                stats.collision
            );
        }
        runs.push(stats);
    }

    Ok(SimReport::from_runs(runs))
}

/// Play one session from idle until it ends or hits the step cap.
pub fn simulate_single_run<R: Rng>(
    config: &SimConfig,
    rng: &mut R,
) -> Result<RunStats, ConfigError> {
    let session = GameSession::new(config.game.clone())?;
    let mut driver = Driver::new(session, ManualTicks::new());
    let mut flaps = 0u64;

    driver.start();
    while driver.session().is_running() && driver.session().frame_count < config.max_steps_per_run
    {
        if wants_flap(driver.session()) {
            driver.flap();
            flaps += 1;
        }
        driver.ticks_mut().advance(1);
        driver.pump(rng);
    }

    let session = driver.into_session();
    debug!(score = session.score, steps = session.frame_count, "simulated run finished");

    Ok(RunStats {
        seed: None,
        score: session.score,
        steps: session.frame_count,
        flaps,
        collision: session.collision,
    })
}
