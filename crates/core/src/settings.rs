//! User-tunable settings: maze size, animation speed, cell size, and an optional seed.
//! Size and speed input from any surface goes through the same validators here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MAZE_SIZE: usize = 5;
pub const MAX_MAZE_SIZE: usize = 50;
pub const DEFAULT_MAZE_SIZE: usize = 10;

pub const MIN_STEP_INTERVAL_MS: u64 = 1;
pub const MAX_STEP_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 100;

pub const MIN_CELL_PX: f32 = 4.0;
pub const MAX_CELL_PX: f32 = 64.0;
pub const DEFAULT_CELL_PX: f32 = 20.0;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("maze size must be a whole number, got '{0}'")]
    NotANumber(String),
    #[error("maze size must be between 5 and 50, got {0}")]
    OutOfRange(i64),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpeedError {
    #[error("step interval must be a whole number of milliseconds, got '{0}'")]
    NotANumber(String),
    #[error("step interval must be between 1 and 5000 ms, got {0}")]
    OutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error(transparent)]
    Speed(#[from] SpeedError),
    #[error("cell size must be between 4 and 64 px, got {0}")]
    CellSize(f32),
}

pub fn validate_size(value: i64) -> Result<usize, SizeError> {
    if (MIN_MAZE_SIZE as i64..=MAX_MAZE_SIZE as i64).contains(&value) {
        Ok(value as usize)
    } else {
        Err(SizeError::OutOfRange(value))
    }
}

/// Parses raw text from a size field. Surrounding whitespace is ignored.
pub fn parse_size_input(raw: &str) -> Result<usize, SizeError> {
    let trimmed = raw.trim();
    let value =
        trimmed.parse::<i64>().map_err(|_| SizeError::NotANumber(trimmed.to_string()))?;
    validate_size(value)
}

pub fn validate_step_interval(millis: i64) -> Result<Duration, SpeedError> {
    if (MIN_STEP_INTERVAL_MS as i64..=MAX_STEP_INTERVAL_MS as i64).contains(&millis) {
        Ok(Duration::from_millis(millis as u64))
    } else {
        Err(SpeedError::OutOfRange(millis))
    }
}

pub fn parse_step_interval_input(raw: &str) -> Result<Duration, SpeedError> {
    let trimmed = raw.trim();
    let millis =
        trimmed.parse::<i64>().map_err(|_| SpeedError::NotANumber(trimmed.to_string()))?;
    validate_step_interval(millis)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeSettings {
    pub size: usize,
    pub step_interval_ms: u64,
    pub cell_px: f32,
    pub seed: Option<u64>,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_MAZE_SIZE,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            cell_px: DEFAULT_CELL_PX,
            seed: None,
        }
    }
}

impl MazeSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        settings.validated()
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)
            .map_err(|source| SettingsError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn validated(self) -> Result<Self, SettingsError> {
        validate_size(i64::try_from(self.size).unwrap_or(i64::MAX))?;
        validate_step_interval(i64::try_from(self.step_interval_ms).unwrap_or(i64::MAX))?;
        if !self.cell_px.is_finite() || !(MIN_CELL_PX..=MAX_CELL_PX).contains(&self.cell_px) {
            return Err(SettingsError::CellSize(self.cell_px));
        }
        Ok(self)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}
