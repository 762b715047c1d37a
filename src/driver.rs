//! Clock and driver: decides when simulation steps run.
//!
//! The session never schedules itself. A [`TickSource`] reports how many
//! steps are owed, and the [`Driver`] runs them only while the session is
//! running. Once a step ends the session, the remaining owed ticks are
//! dropped and nothing runs until the next start.

use crate::game::{process_input, step, GameInput, GamePhase, GameSession, StepOutcome};
use rand::Rng;
use std::time::{Duration, Instant};

/// Largest slice of wall-clock time credited per poll. Stops a burst of
/// catch-up steps after the process was suspended or the terminal stalled.
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

/// Anything that can say how many simulation steps are due.
pub trait TickSource {
    /// Steps owed since the previous poll.
    fn due_ticks(&mut self) -> u32;

    /// Forget any time accumulated so far.
    fn restart(&mut self) {}
}

/// Wall-clock tick source stepping at a fixed rate.
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    interval: Duration,
    last_poll: Instant,
    accumulated: Duration,
}

impl FixedRateClock {
    /// Clock producing `hz` ticks per second. `hz` of zero is treated as one.
    /// The interval never drops below one nanosecond.
    pub fn new(hz: u32) -> Self {
        Self {
            interval: (Duration::from_secs(1) / hz.max(1)).max(Duration::from_nanos(1)),
            last_poll: Instant::now(),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Credit `elapsed` wall time and return the whole ticks it completes.
    fn credit(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed.min(MAX_FRAME_TIME);
        let ticks = (self.accumulated.as_nanos() / self.interval.as_nanos()) as u32;
        self.accumulated -= self.interval * ticks;
        ticks
    }
}

impl TickSource for FixedRateClock {
    fn due_ticks(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_poll);
        self.last_poll = now;
        self.credit(elapsed)
    }

    fn restart(&mut self) {
        self.last_poll = Instant::now();
        self.accumulated = Duration::ZERO;
    }
}

/// Headless tick source advanced by hand. Used by tests and the simulator.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    pending: u32,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owe `n` more steps.
    pub fn advance(&mut self, n: u32) {
        self.pending = self.pending.saturating_add(n);
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

impl TickSource for ManualTicks {
    fn due_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }

    fn restart(&mut self) {
        self.pending = 0;
    }
}

/// Summary of one [`Driver::pump`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpReport {
    /// Steps actually simulated.
    pub steps: u32,
    /// Points scored across those steps.
    pub scored: u32,
    /// True if one of the steps ended the session.
    pub ended: bool,
}

/// Owns a session and its tick source, and is the only thing that steps it.
///
/// Inputs and steps both go through `&mut self`, so they can never
/// interleave with a step in progress.
#[derive(Debug)]
pub struct Driver<T: TickSource> {
    session: GameSession,
    ticks: T,
}

impl<T: TickSource> Driver<T> {
    pub fn new(session: GameSession, ticks: T) -> Self {
        Self { session, ticks }
    }

    /// Read-only view for render sinks and share formatting.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Apply an input. Entering `Running` restarts the clock so time spent
    /// on the idle screen is never replayed as steps.
    pub fn apply(&mut self, input: GameInput) -> bool {
        let was_running = self.session.is_running();
        let changed = process_input(&mut self.session, input);
        if !was_running && self.session.is_running() {
            self.ticks.restart();
        }
        changed
    }

    pub fn start(&mut self) -> bool {
        self.apply(GameInput::Start)
    }

    pub fn flap(&mut self) -> bool {
        self.apply(GameInput::Flap)
    }

    pub fn retry(&mut self) -> bool {
        self.apply(GameInput::Retry)
    }

    /// Run every owed step while the session keeps running.
    ///
    /// Owed ticks are drained even when nothing runs, so idle or ended time
    /// does not pile up.
    pub fn pump<R: Rng>(&mut self, rng: &mut R) -> PumpReport {
        let due = self.ticks.due_ticks();
        let mut report = PumpReport::default();

        if self.session.phase != GamePhase::Running {
            return report;
        }

        for _ in 0..due {
            match step(&mut self.session, rng) {
                StepOutcome::Advanced { scored, .. } => {
                    report.steps += 1;
                    report.scored += scored;
                }
                StepOutcome::Ended(_) => {
                    report.steps += 1;
                    report.ended = true;
                    break;
                }
                StepOutcome::Skipped => break,
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn driver() -> Driver<ManualTicks> {
        let session = GameSession::new(GameConfig::default()).unwrap();
        Driver::new(session, ManualTicks::new())
    }

    #[test]
    fn test_clock_interval() {
        let clock = FixedRateClock::new(50);
        assert_eq!(clock.interval(), Duration::from_millis(20));
        assert_eq!(FixedRateClock::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_clock_interval_never_zero() {
        let mut clock = FixedRateClock::new(u32::MAX);
        assert_eq!(clock.interval(), Duration::from_nanos(1));
        assert_eq!(clock.credit(Duration::from_millis(1)), 1_000_000);
    }

    #[test]
    fn test_clock_accumulates_partial_ticks() {
        let mut clock = FixedRateClock::new(50);
        assert_eq!(clock.credit(Duration::from_millis(15)), 0);
        assert_eq!(clock.credit(Duration::from_millis(15)), 1);
        assert_eq!(clock.credit(Duration::from_millis(50)), 3);
    }

    #[test]
    fn test_clock_clamps_long_stalls() {
        let mut clock = FixedRateClock::new(50);
        // Five seconds of stall only counts as 100ms
        assert_eq!(clock.credit(Duration::from_secs(5)), 5);
    }

    #[test]
    fn test_clock_restart_drops_remainder() {
        let mut clock = FixedRateClock::new(50);
        clock.credit(Duration::from_millis(19));
        clock.restart();
        assert_eq!(clock.credit(Duration::from_millis(19)), 0);
    }

    #[test]
    fn test_manual_ticks_drain() {
        let mut ticks = ManualTicks::new();
        ticks.advance(3);
        ticks.advance(2);
        assert_eq!(ticks.due_ticks(), 5);
        assert_eq!(ticks.due_ticks(), 0);
    }

    #[test]
    fn test_pump_does_nothing_while_idle() {
        let mut driver = driver();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        driver.ticks_mut().advance(10);
        let report = driver.pump(&mut rng);
        assert_eq!(report.steps, 0);
        assert_eq!(driver.session().frame_count, 0);
        // Idle ticks were drained, not banked
        assert_eq!(driver.ticks_mut().pending(), 0);
    }

    #[test]
    fn test_start_restarts_tick_source() {
        let mut driver = driver();
        driver.ticks_mut().advance(10);
        assert!(driver.start());
        assert_eq!(driver.ticks_mut().pending(), 0);
    }

    #[test]
    fn test_pump_runs_owed_steps() {
        let mut driver = driver();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        driver.start();
        driver.ticks_mut().advance(5);
        let report = driver.pump(&mut rng);
        assert_eq!(report.steps, 5);
        assert!(!report.ended);
        assert_eq!(driver.session().frame_count, 5);
    }

    #[test]
    fn test_pump_stops_at_end() {
        let mut driver = driver();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        driver.start();
        // Free fall from mid-screen hits the ground well within 100 steps
        driver.ticks_mut().advance(100);
        let report = driver.pump(&mut rng);
        assert!(report.ended);
        assert!(report.steps < 100);
        assert!(driver.session().is_ended());
        let frames = driver.session().frame_count;

        driver.ticks_mut().advance(50);
        let report = driver.pump(&mut rng);
        assert_eq!(report.steps, 0);
        assert_eq!(driver.session().frame_count, frames);
    }

    #[test]
    fn test_retry_then_flap_runs_again() {
        let mut driver = driver();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        driver.flap();
        driver.ticks_mut().advance(200);
        driver.pump(&mut rng);
        assert!(driver.session().is_ended());

        assert!(!driver.flap());
        assert!(driver.retry());
        assert_eq!(driver.session().phase, GamePhase::Idle);
        assert!(driver.flap());
        driver.ticks_mut().advance(1);
        assert_eq!(driver.pump(&mut rng).steps, 1);
    }

    #[test]
    fn test_pump_reports_scoring() {
        let mut driver = driver();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        driver.start();
        // Gap around the avatar, trailing edge about to pass its center
        driver.session.obstacles.push(Obstacle::new(31.0, 230.0, 140.0));
        driver.ticks_mut().advance(1);
        let report = driver.pump(&mut rng);
        assert_eq!(report.scored, 1);
        assert_eq!(driver.session().score, 1);
    }
}
