//! Flappy Nano terminal front end.
//!
//! Owns the terminal: reads input, pumps the driver once per loop and draws
//! the session. All game rules live in the library.

mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_nano::build_info;
use flappy_nano::config::GameConfig;
use flappy_nano::driver::{Driver, FixedRateClock};
use flappy_nano::game::GameSession;
use flappy_nano::persistence;
use flappy_nano::share::{share_message, ShareMessage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ui::input::{map_event, UiAction};

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "FLAPPY_NANO_LOG";

struct CliArgs {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    share_link: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        seed: None,
        share_link: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                cli.config_path = Some(PathBuf::from(required_value(&args, i, "--config")));
            }
            "--seed" => {
                i += 1;
                let value = required_value(&args, i, "--seed");
                match value.parse() {
                    Ok(seed) => cli.seed = Some(seed),
                    Err(_) => {
                        eprintln!("--seed requires a number, got '{}'", value);
                        std::process::exit(1);
                    }
                }
            }
            "--share-link" => {
                i += 1;
                cli.share_link = Some(required_value(&args, i, "--share-link").to_string());
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'flappy-nano --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    cli
}

fn required_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("{} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Flappy Nano - fall, flap, and thread the gaps\n");
    println!("Usage: flappy-nano [OPTIONS]\n");
    println!("Options:");
    println!("  --config PATH       Config file (default: ~/.flappy_nano/config.json)");
    println!("  --seed N            Seed obstacle placement for a repeatable run");
    println!("  --share-link URL    Link included in the share message");
    println!("  --version, -v       Show version information");
    println!("  --help, -h          Show this help message");
    println!("\nControls: Space/Up/click flap, Enter start, R retry, S share, Q quit");
    println!("Logs go to ~/.flappy_nano/flappy_nano.log ({} sets the filter)", LOG_ENV);
}

/// Log to a file: stdout belongs to the terminal UI.
fn init_logging() {
    let Ok(path) = persistence::log_path() else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}

fn load_session(config_path: Option<PathBuf>) -> io::Result<GameSession> {
    // An explicit path must exist; the default one may be absent
    let (path, config) = match config_path {
        Some(path) => {
            let config = GameConfig::load(&path);
            (path, config)
        }
        None => {
            let path = persistence::config_path()?;
            let config = GameConfig::load_or_default(&path);
            (path, config)
        }
    };

    let session = config.and_then(GameSession::new);
    match session {
        Ok(session) => {
            info!(path = %path.display(), "configuration loaded");
            Ok(session)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "configuration rejected");
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    let cli = parse_args();
    init_logging();

    // Config problems are reported before the terminal goes raw
    let session = load_session(cli.config_path)?;
    let tick_rate = session.config().tick_rate_hz;
    let mut driver = Driver::new(session, FixedRateClock::new(tick_rate));
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(
        &mut terminal,
        &mut driver,
        &mut rng,
        cli.share_link.as_deref(),
    );

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(score = driver.session().score, "exiting");
    result
}

/// Main loop: pump, draw, then wait up to one tick for input.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    driver: &mut Driver<FixedRateClock>,
    rng: &mut ChaCha8Rng,
    share_link: Option<&str>,
) -> io::Result<()> {
    let frame_budget = driver.ticks_mut().interval();
    let mut share: Option<ShareMessage> = None;

    loop {
        driver.pump(rng);

        terminal.draw(|frame| {
            let area = frame.size();
            ui::game_scene::render_game(frame, area, driver.session(), share.as_ref());
        })?;

        if !event::poll(frame_budget)? {
            continue;
        }

        // Drain everything queued so one slow frame never lags input
        loop {
            match map_event(&event::read()?) {
                UiAction::Game(input) => {
                    driver.apply(input);
                    if !driver.session().is_ended() {
                        share = None;
                    }
                }
                UiAction::Share => {
                    share = share_message(driver.session(), share_link);
                    if let Some(message) = &share {
                        info!(url = %message.intent_url, "share message prepared");
                    }
                }
                UiAction::Quit => return Ok(()),
                UiAction::None => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}
