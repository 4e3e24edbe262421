#![forbid(unsafe_code)]

//! Scramble generation with a recorded inverse move list.
//!
//! [`ScrambleSolver::run`] rotates whole lines of a private copy of the
//! source grid and records, for every move, the step that undoes it.
//!
//! # Line pools
//!
//! Rows and columns are drawn from two shuffled pools. A line leaves its pool
//! once rotated, so a round touches every line at most once before the pool
//! is refilled. Lines whose cells all share one color are skipped: rotating
//! them changes nothing and would inflate the move count.
//!
//! When one pool runs dry it is refilled right after the next move on the
//! other axis, which keeps both axes eligible. A *round* ends once both pools
//! have been drained since the previous round; `retry_count` counts finished
//! rounds and the run stops after `max_retries` of them.
//!
//! # Invariants
//!
//! 1. Every recorded amount is non-zero modulo the line length.
//! 2. No move targets a line that was monochrome just before it.
//! 3. [`RotateResult::restore`] returns the source grid.
//! 4. A run performs at most `max_retries * (R + 1) * (C + 1)` moves.
//!
//! # Frames
//!
//! Sources are generated bottom-up (see
//! [`ToroidalGrid::reverse_rows`](crate::torus::ToroidalGrid::reverse_rows)),
//! so row indices in [`SolutionStep`] are mapped back to the top-down board
//! frame (`R - 1 - row`). Column indices need no mapping, but their direction
//! flips with the row order, which is why row amounts are negated and column
//! amounts are not.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ScrambleConfig;
use crate::grid::{Axis, Grid};
use crate::random::RandomSource;

/// One recorded inverse move, in the top-down board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolutionStep {
    pub axis: Axis,
    pub index: usize,
    /// Cells move toward index 0 when positive (left/up), away when negative.
    pub amount: i32,
}

impl SolutionStep {
    /// Apply this step to a grid in the board frame.
    pub fn apply(&self, grid: &mut Grid) {
        grid.rotate_line(self.axis, self.index, self.amount);
    }
}

/// Output of one scramble run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateResult {
    /// Scrambled colors, in the same frame as the source.
    pub colors: Grid,
    /// Rounds in which every line pool was drained.
    pub retry_count: usize,
    /// Inverse moves in generation order.
    pub solution_steps: Vec<SolutionStep>,
}

impl RotateResult {
    /// Number of moves needed to undo the scramble.
    #[must_use]
    pub fn difficulty(&self) -> usize {
        self.solution_steps.len()
    }

    /// Replay the solution and return the grid the scramble started from.
    ///
    /// Steps are applied latest first, in the board frame.
    #[must_use]
    pub fn restore(&self) -> Grid {
        let mut board = self.colors.reversed_rows();
        for step in self.solution_steps.iter().rev() {
            step.apply(&mut board);
        }
        board.reversed_rows()
    }
}

/// Shuffled indices of lines not yet rotated this round.
#[derive(Debug)]
struct LinePool {
    axis: Axis,
    total: usize,
    indexes: Vec<usize>,
    drained: bool,
}

impl LinePool {
    fn shuffled<R: RandomSource + ?Sized>(axis: Axis, total: usize, random: &mut R) -> Self {
        let mut pool = Self {
            axis,
            total,
            indexes: Vec::with_capacity(total),
            drained: false,
        };
        pool.reshuffle(random);
        pool
    }

    /// Refill with a fresh Fisher–Yates permutation.
    fn reshuffle<R: RandomSource + ?Sized>(&mut self, random: &mut R) {
        self.indexes.clear();
        self.indexes.extend(0..self.total);
        for i in (0..self.total).rev() {
            let j = random.next_index(i + 1);
            self.indexes.swap(i, j);
        }
    }

    fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// First pooled line that is not monochrome.
    fn first_rotatable(&self, grid: &Grid) -> Option<usize> {
        self.indexes
            .iter()
            .copied()
            .find(|&index| !grid.is_line_monochrome(self.axis, index))
    }

    fn remove(&mut self, index: usize) {
        self.indexes.retain(|&i| i != index);
        if self.indexes.is_empty() {
            self.drained = true;
        }
    }

    fn remaining_fraction(&self) -> f64 {
        self.indexes.len() as f64 / self.total as f64
    }
}

/// Generates scrambles by bounded whole-line rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleSolver {
    max_retries: usize,
}

impl Default for ScrambleSolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES)
    }
}

impl ScrambleSolver {
    pub const DEFAULT_MAX_RETRIES: usize = 3;

    #[must_use]
    pub const fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    #[must_use]
    pub fn from_config(config: &ScrambleConfig) -> Self {
        Self::new(config.max_retries)
    }

    #[must_use]
    pub const fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Scramble `source` with up to `attempt_count` non-trivial moves.
    ///
    /// Never fails. Returns fewer steps when the grid runs out of rotatable
    /// lines or the retry budget is spent.
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        source: &Grid,
        random: &mut R,
        attempt_count: usize,
    ) -> RotateResult {
        let mut work = source.clone();
        let mut rows = LinePool::shuffled(Axis::Horizontal, work.rows(), random);
        let mut columns = LinePool::shuffled(Axis::Vertical, work.cols(), random);
        let mut steps = Vec::with_capacity(attempt_count.min(work.rows() + work.cols()));
        let mut retry_count = 0;

        while steps.len() < attempt_count && retry_count < self.max_retries {
            if rows.drained && columns.drained {
                retry_count += 1;
                rows.drained = false;
                columns.drained = false;
                if rows.is_empty() {
                    rows.reshuffle(random);
                }
                if columns.is_empty() {
                    columns.reshuffle(random);
                }
                debug!(retry_count, steps = steps.len(), "line pools drained, new round");
            }

            let row = rows.first_rotatable(&work);
            let column = columns.first_rotatable(&work);
            let (axis, index) = match (row, column) {
                (None, None) => {
                    debug!(steps = steps.len(), "no rotatable line left");
                    break;
                }
                (Some(row), None) => (Axis::Horizontal, row),
                (None, Some(column)) => (Axis::Vertical, column),
                (Some(row), Some(column)) => {
                    let row_rate = random.next_unit() * rows.remaining_fraction();
                    let column_rate = random.next_unit() * columns.remaining_fraction();
                    if row_rate >= column_rate {
                        (Axis::Horizontal, row)
                    } else {
                        (Axis::Vertical, column)
                    }
                }
            };

            let line_len = work.line_len(axis);
            let magnitude = random.next_index(line_len - 1) + 1;
            let step = match axis {
                Axis::Horizontal => {
                    work.rotate_row_left(index, magnitude);
                    rows.remove(index);
                    if columns.is_empty() {
                        columns.reshuffle(random);
                    }
                    SolutionStep {
                        axis,
                        index: work.rows() - 1 - index,
                        amount: -(magnitude as i32),
                    }
                }
                Axis::Vertical => {
                    work.rotate_column_up(index, magnitude);
                    columns.remove(index);
                    if rows.is_empty() {
                        rows.reshuffle(random);
                    }
                    SolutionStep {
                        axis,
                        index,
                        amount: magnitude as i32,
                    }
                }
            };
            trace!(?axis, index, magnitude, "scramble move");
            steps.push(step);
        }

        RotateResult {
            colors: work,
            retry_count,
            solution_steps: steps,
        }
    }
}
