//! Service configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCRATCH_DIR: &str = "tmp";
pub const DEFAULT_SCRATCH_RETENTION_SECS: u64 = 3600;
pub const DEFAULT_SAVED_STATE_PATH: &str = "saved_state.json";
pub const DEFAULT_ASSETS_DIR: &str = "img";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Where exported PNGs are written and swept.
    pub scratch_dir: PathBuf,
    /// Exports older than this are deleted before the next export.
    pub scratch_retention: Duration,
    /// Snapshot offered as the circles page initial drawing.
    pub saved_state_path: PathBuf,
    /// Page background images.
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SCRATCH_DIR`: default `tmp`
    /// - `SCRATCH_RETENTION_SECS`: default 3600
    /// - `SAVED_STATE_PATH`: default `saved_state.json`
    /// - `ASSETS_DIR`: default `img`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            scratch_dir: env_path("SCRATCH_DIR", DEFAULT_SCRATCH_DIR),
            scratch_retention: Duration::from_secs(env_parse(
                "SCRATCH_RETENTION_SECS",
                DEFAULT_SCRATCH_RETENTION_SECS,
            )),
            saved_state_path: env_path("SAVED_STATE_PATH", DEFAULT_SAVED_STATE_PATH),
            assets_dir: env_path("ASSETS_DIR", DEFAULT_ASSETS_DIR),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            scratch_dir: PathBuf::from(DEFAULT_SCRATCH_DIR),
            scratch_retention: Duration::from_secs(DEFAULT_SCRATCH_RETENTION_SECS),
            saved_state_path: PathBuf::from(DEFAULT_SAVED_STATE_PATH),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
