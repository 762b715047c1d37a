//! Simulation report generation.

use crate::game::Collision;
use serde::Serialize;

/// Result of one simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub score: u32,
    pub steps: u64,
    pub flaps: u64,
    /// None when the step cap was hit first.
    pub collision: Option<Collision>,
}

impl RunStats {
    pub fn timed_out(&self) -> bool {
        self.collision.is_none()
    }
}

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub ground_hits: u32,
    pub obstacle_hits: u32,
    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_steps: f64,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |cause: Option<Collision>| {
            runs.iter().filter(|r| r.collision == cause).count() as u32
        };
        let (avg_score, avg_steps) = if runs.is_empty() {
            (0.0, 0.0)
        } else {
            (
                runs.iter().map(|r| r.score as f64).sum::<f64>() / num_runs as f64,
                runs.iter().map(|r| r.steps as f64).sum::<f64>() / num_runs as f64,
            )
        };

        Self {
            num_runs,
            runs_timed_out: count(None),
            ground_hits: count(Some(Collision::Ground)),
            obstacle_hits: count(Some(Collision::Obstacle)),
            avg_score,
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_steps,
            runs,
        }
    }

    /// Print a human-readable summary.
    pub fn print(&self) {
        println!("=== Flappy Nano Simulation ===");
        println!("Runs:           {}", self.num_runs);
        println!(
            "Score:          avg {:.1}, min {}, max {}",
            self.avg_score, self.min_score, self.max_score
        );
        println!("Steps per run:  {:.0}", self.avg_steps);
        println!("Ended by:");
        println!("  ground        {}", self.ground_hits);
        println!("  pipe          {}", self.obstacle_hits);
        println!("  step cap      {}", self.runs_timed_out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, collision: Option<Collision>) -> RunStats {
        RunStats {
            seed: Some(1),
            score,
            steps: 100,
            flaps: 5,
            collision,
        }
    }

    #[test]
    fn test_report_aggregates() {
        let report = SimReport::from_runs(vec![
            run(2, Some(Collision::Ground)),
            run(6, Some(Collision::Obstacle)),
            run(10, None),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.ground_hits, 1);
        assert_eq!(report.obstacle_hits, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_score - 6.0).abs() < f64::EPSILON);
        assert_eq!(report.min_score, 2);
        assert_eq!(report.max_score, 10);
        assert!(report.runs[2].timed_out());
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert_eq!(report.max_score, 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = SimReport::from_runs(vec![run(3, Some(Collision::Obstacle))]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["runs"][0]["collision"], "Obstacle");
    }
}
