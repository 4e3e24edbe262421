#![forbid(unsafe_code)]

//! Wave-to-difficulty schedule.
//!
//! Difficulty grows by one scramble attempt every `period` waves and is
//! capped at `(R + C) * 2`. Waves that are multiples of the period are
//! checkpoints, where the owner typically rebuilds the target from the
//! player's board instead of the previous target.

use crate::config::PuzzleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSchedule {
    period: usize,
    max_attempts: usize,
}

impl WaveSchedule {
    /// # Panics
    ///
    /// Panics if `period` or either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize, period: usize) -> Self {
        assert!(rows > 0 && cols > 0, "schedule needs a non-empty board");
        assert!(period > 0, "wave period must be non-zero");
        Self {
            period,
            max_attempts: (rows + cols) * 2,
        }
    }

    /// Schedule for a validated config.
    #[must_use]
    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.rows, config.cols, config.wave_period())
    }

    #[inline]
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Scramble attempts for `wave`.
    #[must_use]
    pub fn attempt_count(&self, wave: usize) -> usize {
        (wave / self.period + 1).min(self.max_attempts)
    }

    #[must_use]
    pub fn is_checkpoint(&self, wave: usize) -> bool {
        wave % self.period == 0
    }
}
