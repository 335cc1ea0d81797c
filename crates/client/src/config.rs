//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Where the client finds its content, its save and its logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub save_file: PathBuf,
    pub log_dir: PathBuf,
    /// Fixed RNG seed; a random one is drawn when unset.
    pub seed: Option<u64>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FIGHTS_DATA_DIR` - content directory (default: `crates/game/content/data`)
    /// - `FIGHTS_SAVE_FILE` - save file (default: platform data dir, `player.sav`)
    /// - `FIGHTS_LOG_DIR` - log directory (default: platform cache dir, `logs`)
    /// - `FIGHTS_SEED` - RNG seed for reproducible sessions
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env("FIGHTS_DATA_DIR").unwrap_or_else(default_data_dir),
            save_file: read_env("FIGHTS_SAVE_FILE").unwrap_or_else(default_save_file),
            log_dir: read_env("FIGHTS_LOG_DIR").unwrap_or_else(default_log_dir),
            seed: read_env("FIGHTS_SEED"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "fights")
}

/// Content shipped with the workspace, found relative to the executable
/// (`target/<profile>/fights`) or else the working directory.
fn default_data_dir() -> PathBuf {
    const RELATIVE: &str = "crates/game/content/data";

    env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join(RELATIVE))
        })
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| {
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(RELATIVE)
        })
}

fn default_save_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("player.sav")
}

fn default_log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/fights"))
        .join("logs")
}
