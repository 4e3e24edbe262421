#![forbid(unsafe_code)]

//! Puzzle configuration.
//!
//! Every section has a `Default` matching the shipped 3×3 board, so a
//! partial config file only needs the values it overrides. Call
//! [`PuzzleConfig::validate`] before building a board from untrusted input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },
    #[error("tile size must be a positive finite number (got {0})")]
    TileSize(f32),
    #[error("swipe threshold ratio must lie in (0, 0.5] (got {0})")]
    SwipeThreshold(f32),
    #[error("max retries must be at least 1")]
    MaxRetries,
    #[error("wave period must be at least 1")]
    WavePeriod,
}

/// Drag thresholds for the rotation controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationConfig {
    /// Edge length of one tile in pixels (default: 96).
    pub tile_size: f32,
    /// Swipe threshold as a fraction of `tile_size` (default: 0.1).
    pub swipe_threshold_ratio: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            tile_size: 96.0,
            swipe_threshold_ratio: 0.1,
        }
    }
}

impl RotationConfig {
    /// Distance in pixels a drag must cover before its axis is decided.
    #[inline]
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.tile_size * self.swipe_threshold_ratio
    }

    /// Distance in pixels between two rotation ticks.
    #[inline]
    #[must_use]
    pub fn tick_distance(&self) -> f32 {
        self.swipe_threshold() * 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::TileSize(self.tile_size));
        }
        if !(self.swipe_threshold_ratio > 0.0 && self.swipe_threshold_ratio <= 0.5) {
            return Err(ConfigError::SwipeThreshold(self.swipe_threshold_ratio));
        }
        Ok(())
    }
}

/// Limits for the scramble generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    /// Rounds of exhausted line pools before giving up (default: 3).
    pub max_retries: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self { max_retries: 3 }
    }
}

/// Full puzzle configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    pub rows: usize,
    pub cols: usize,
    /// Waves per difficulty step. Defaults to `rows` when absent.
    pub wave_period: Option<usize>,
    pub rotation: RotationConfig,
    pub scramble: ScrambleConfig,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            wave_period: None,
            rotation: RotationConfig::default(),
            scramble: ScrambleConfig::default(),
        }
    }
}

impl PuzzleConfig {
    /// Effective wave period.
    #[must_use]
    pub fn wave_period(&self) -> usize {
        self.wave_period.unwrap_or(self.rows)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.rotation.validate()?;
        if self.scramble.max_retries == 0 {
            return Err(ConfigError::MaxRetries);
        }
        if self.wave_period() == 0 {
            return Err(ConfigError::WavePeriod);
        }
        Ok(())
    }
}
