//! Game configuration: every tunable constant of a session.
//!
//! Values are supplied once when a session is created and never change for
//! its lifetime. A JSON file may override any subset of fields; anything
//! left out keeps the default tuning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fastest wall-clock step rate a config may ask for.
pub const MAX_TICK_RATE_HZ: u32 = 1000;

/// Immutable tuning for one game session.
///
/// Units are playfield pixels and simulation steps. Positive y points down,
/// so the ceiling is y = 0 and the ground is y = `playfield_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width. New obstacles enter at this x.
    pub playfield_width: f64,
    /// Playfield height. The ground sits here.
    pub playfield_height: f64,
    /// Fixed horizontal position of the avatar's center.
    pub avatar_x: f64,
    /// Avatar radius.
    pub avatar_radius: f64,
    /// Velocity added every step.
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward). Overrides, never adds.
    pub flap_impulse: f64,
    /// Vertical size of every obstacle's gap.
    pub gap_height: f64,
    /// Horizontal size of every obstacle.
    pub obstacle_width: f64,
    /// Steps between obstacle spawns.
    pub spawn_interval: u64,
    /// Distance obstacles scroll left per step.
    pub scroll_speed: f64,
    /// Smallest allowed gap-top offset.
    pub top_margin: f64,
    /// Space kept free below the lowest possible gap.
    pub bottom_margin: f64,
    /// How far past the left edge an obstacle's trailing edge may go before
    /// it is pruned.
    pub prune_margin: f64,
    /// Simulation steps per second when driven by a wall clock.
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: 400.0,
            playfield_height: 600.0,
            avatar_x: 80.0,
            avatar_radius: 12.0,
            gravity: 0.4,
            flap_impulse: -7.0,
            gap_height: 140.0,
            obstacle_width: 50.0,
            spawn_interval: 90,
            scroll_speed: 2.2,
            top_margin: 40.0,
            bottom_margin: 120.0,
            prune_margin: 10.0,
            tick_rate_hz: 60,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("flap impulse must point upward (negative), got {0}")]
    ImpulseNotUpward(f64),

    #[error("spawn interval must be at least one step")]
    ZeroSpawnInterval,

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    #[error("tick rate of {0} Hz is above the {} Hz limit", MAX_TICK_RATE_HZ)]
    TickRateTooHigh(u32),

    #[error("avatar of radius {radius} does not fit inside a playfield {height} tall")]
    AvatarTooLarge { radius: f64, height: f64 },

    #[error("avatar column {x} lies outside a playfield {width} wide")]
    AvatarOffField { x: f64, width: f64 },

    #[error(
        "gap height {gap_height} with margins {top_margin}/{bottom_margin} leaves no \
         spawn range in a playfield {playfield_height} tall"
    )]
    NoSpawnRange {
        gap_height: f64,
        top_margin: f64,
        bottom_margin: f64,
        playfield_height: f64,
    },

    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GameConfig {
    /// Load a config from a JSON file that must exist.
    ///
    /// A file that cannot be read or parsed is an error, as is a parsed
    /// config that fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    /// Used for the implicit `~/.flappy_nano/config.json`.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every precondition the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("avatar_x", self.avatar_x),
            ("avatar_radius", self.avatar_radius),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("prune_margin", self.prune_margin),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("avatar_radius", self.avatar_radius),
            ("gravity", self.gravity),
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("prune_margin", self.prune_margin),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.flap_impulse >= 0.0 {
            return Err(ConfigError::ImpulseNotUpward(self.flap_impulse));
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(ConfigError::TickRateTooHigh(self.tick_rate_hz));
        }
        if self.avatar_radius * 2.0 > self.playfield_height {
            return Err(ConfigError::AvatarTooLarge {
                radius: self.avatar_radius,
                height: self.playfield_height,
            });
        }
        if self.avatar_x < 0.0 || self.avatar_x > self.playfield_width {
            return Err(ConfigError::AvatarOffField {
                x: self.avatar_x,
                width: self.playfield_width,
            });
        }

        let (min_top, max_top) = self.spawn_range();
        if min_top > max_top {
            return Err(ConfigError::NoSpawnRange {
                gap_height: self.gap_height,
                top_margin: self.top_margin,
                bottom_margin: self.bottom_margin,
                playfield_height: self.playfield_height,
            });
        }

        Ok(())
    }

    /// Inclusive `(min, max)` range for a new obstacle's gap-top offset.
    pub fn spawn_range(&self) -> (f64, f64) {
        let min_top = self.top_margin;
        let max_top = self.playfield_height - self.gap_height - self.bottom_margin;
        (min_top, max_top)
    }

    /// Avatar's starting height: the vertical middle of the playfield.
    pub fn initial_avatar_y(&self) -> f64 {
        self.playfield_height / 2.0
    }
}
