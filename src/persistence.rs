//! Locations of the files flappy-nano reads and writes under ~/.flappy_nano/.
//!
//! Only the config file and the log live here. Scores are never saved.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Name of the data directory inside the user's home.
pub const DATA_DIR_NAME: &str = ".flappy_nano";

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "flappy_nano.log";

/// Get the ~/.flappy_nano/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default config file path.
pub fn config_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(CONFIG_FILE))
}

/// Log file path used by the terminal front end.
pub fn log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().expect("data_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(DATA_DIR_NAME));
    }

    #[test]
    fn test_file_paths_live_in_data_dir() {
        let config = config_path().expect("config_path should succeed");
        let log = log_path().expect("log_path should succeed");
        assert!(config.to_string_lossy().ends_with(".flappy_nano/config.json"));
        assert_eq!(config.parent(), log.parent());
    }
}
