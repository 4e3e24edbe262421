#![forbid(unsafe_code)]

//! Board storage with a doubled, mirrored buffer.
//!
//! [`ToroidalGrid`] keeps the canonical R×C board in the top-left quadrant of
//! a 2R×2C buffer. The other three quadrants are live copies, so a renderer
//! dragging a line past an edge always has the next tile available.
//!
//! # Invariants
//!
//! 1. All four R×C quadrants are equal after every public mutation.
//! 2. Dimensions never change after construction.

use crate::color::Color;
use crate::grid::{Axis, Grid};

/// Canonical board plus mirrored doubled buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToroidalGrid {
    rows: usize,
    cols: usize,
    /// 2R×2C, row-major.
    doubled: Vec<Color>,
}

impl ToroidalGrid {
    /// Create a toroidal grid holding `grid`.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let mut torus = Self {
            rows: grid.rows(),
            cols: grid.cols(),
            doubled: vec![Color::None; grid.rows() * grid.cols() * 4],
        };
        torus.reset(grid);
        torus
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn doubled_index(&self, row: usize, col: usize) -> usize {
        row * self.cols * 2 + col
    }

    /// Replace every color with the contents of `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `grid` has different dimensions.
    pub fn reset(&mut self, grid: &Grid) {
        assert!(
            grid.rows() == self.rows && grid.cols() == self.cols,
            "reset with {}x{} grid on {}x{} board",
            grid.rows(),
            grid.cols(),
            self.rows,
            self.cols
        );
        for (pos, color) in grid.iter() {
            self.set(pos.row, pos.col, color);
        }
    }

    /// Read a canonical cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the R×C board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.check(row, col);
        self.doubled[self.doubled_index(row, col)]
    }

    /// Write a canonical cell and its three mirrors.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the R×C board.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.check(row, col);
        for (r, c) in [
            (row, col),
            (row, col + self.cols),
            (row + self.rows, col),
            (row + self.rows, col + self.cols),
        ] {
            let index = self.doubled_index(r, c);
            self.doubled[index] = color;
        }
    }

    /// Read any cell of the doubled buffer.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the 2R×2C buffer.
    #[must_use]
    pub fn doubled(&self, row: usize, col: usize) -> Color {
        assert!(
            row < self.rows * 2 && col < self.cols * 2,
            "doubled cell ({row}, {col}) out of range"
        );
        self.doubled[self.doubled_index(row, col)]
    }

    /// The full doubled line: 2C cells for a row, 2R cells for a column.
    #[must_use]
    pub fn doubled_line(&self, axis: Axis, index: usize) -> Vec<Color> {
        match axis {
            Axis::Horizontal => {
                self.check(index, 0);
                (0..self.cols * 2).map(|c| self.doubled(index, c)).collect()
            }
            Axis::Vertical => {
                self.check(0, index);
                (0..self.rows * 2).map(|r| self.doubled(r, index)).collect()
            }
        }
    }

    /// Overwrite a canonical line (mirrors follow).
    pub fn set_line(&mut self, axis: Axis, index: usize, colors: &[Color]) {
        let len = match axis {
            Axis::Horizontal => self.cols,
            Axis::Vertical => self.rows,
        };
        assert_eq!(colors.len(), len, "line length mismatch");
        for (offset, &color) in colors.iter().enumerate() {
            match axis {
                Axis::Horizontal => self.set(index, offset, color),
                Axis::Vertical => self.set(offset, index, color),
            }
        }
    }

    /// Deep copy of the canonical board.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        Grid::from_fn(self.rows, self.cols, |r, c| self.get(r, c))
    }

    /// Canonical board with the row order reversed (bottom row first).
    ///
    /// Scramble sources are generated bottom-up, so callers wanting that view
    /// go through here rather than reversing ad hoc.
    #[must_use]
    pub fn reverse_rows(&self) -> Grid {
        self.snapshot().reversed_rows()
    }

    /// Whether all four quadrants match the canonical one.
    #[must_use]
    pub fn is_mirror_consistent(&self) -> bool {
        (0..self.rows).all(|r| {
            (0..self.cols).all(|c| {
                let color = self.doubled(r, c);
                self.doubled(r, c + self.cols) == color
                    && self.doubled(r + self.rows, c) == color
                    && self.doubled(r + self.rows, c + self.cols) == color
            })
        })
    }

    fn check(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for {}x{} board",
            self.rows,
            self.cols
        );
    }
}
