//! Flappy Nano headless simulator CLI.
//!
//! Plays sessions with the autopilot and reports how far it gets.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100 runs, seed 42
//!   cargo run --bin simulate -- -n 500 --seed 7     # Reproducible batch
//!   cargo run --bin simulate -- --config my.json    # Try a different tuning
//!   cargo run --bin simulate -- --json > report.json

use flappy_nano::config::GameConfig;
use flappy_nano::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

struct CliArgs {
    sim: SimConfig,
    json: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        sim: SimConfig::default(),
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                i += 1;
                cli.sim.num_runs = parse_number(args.get(i), "--runs");
            }
            "--seed" => {
                i += 1;
                cli.sim.seed = Some(parse_number(args.get(i), "--seed"));
            }
            "--random" => cli.sim.seed = None,
            "--max-steps" => {
                i += 1;
                cli.sim.max_steps_per_run = parse_number(args.get(i), "--max-steps");
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("--config requires a path");
                    std::process::exit(1);
                };
                cli.sim.game = match GameConfig::load(Path::new(path)) {
                    Ok(game) => game,
                    Err(e) => {
                        eprintln!("Invalid configuration: {e}");
                        std::process::exit(1);
                    }
                };
            }
            "-v" | "--verbose" => cli.sim.verbose = true,
            "--json" => cli.json = true,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    cli
}

fn parse_number<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Flappy Nano Headless Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -n, --runs N      Sessions to play (default: 100)\n\
         \x20 --seed N          Base RNG seed (default: 42)\n\
         \x20 --random          Fresh entropy for every run\n\
         \x20 --max-steps N     Step cap per session (default: 100000)\n\
         \x20 --config PATH     Game config JSON\n\
         \x20 -v, --verbose     One line per run\n\
         \x20 --json            Print the full report as JSON\n\
         \x20 -h, --help        Show this help"
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    let env_filter =
        EnvFilter::try_from_env("FLAPPY_NANO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let report = match run_simulation(&cli.sim) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        report.print();
    }
}
