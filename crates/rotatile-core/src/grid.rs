#![forbid(unsafe_code)]

//! Rectangular color matrix and line primitives.
//!
//! A [`Grid`] is the logical R×C board. Rows are numbered top to bottom,
//! columns left to right. A *line* is a whole row or a whole column; every
//! mutation the puzzle performs is a cyclic rotation of one line.
//!
//! # Invariants
//!
//! 1. `rows >= 1` and `cols >= 1`.
//! 2. Storage holds exactly `rows * cols` cells at all times.
//!
//! Out-of-range indices are caller bugs and panic.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Malformed grid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown color letter {0:?}")]
    UnknownColor(char),
}

/// Orientation of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// A row; tiles move left/right.
    Horizontal,
    /// A column; tiles move up/down.
    Vertical,
}

/// A cell coordinate in the canonical board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular matrix of colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Build a grid from row vectors.
    ///
    /// Fails if there are no rows, no columns, or rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// A grid with every cell set to `color`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, color: Color) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![color; rows * cols],
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Parse the letter form, rows separated by `/` or newlines
    /// (e.g. `"RRR/YYY/BBB"`). Whitespace inside rows is ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows = text
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| Color::from_letter(ch).ok_or(GridError::UnknownColor(ch)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
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

    /// Number of cells in one line along `axis`.
    #[inline]
    #[must_use]
    pub const fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.cols,
            Axis::Vertical => self.rows,
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        let index = self.index(row, col);
        self.cells[index] = color;
    }

    /// Cells of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Color] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols]
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Color> + '_ {
        assert!(
            col < self.cols,
            "column {col} out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells.iter().skip(col).step_by(self.cols).copied()
    }

    /// Cells of the `index`-th line along `axis`.
    #[must_use]
    pub fn line(&self, axis: Axis, index: usize) -> Vec<Color> {
        match axis {
            Axis::Horizontal => self.row(index).to_vec(),
            Axis::Vertical => self.column(index).collect(),
        }
    }

    /// Overwrite the `index`-th line along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `colors` does not have exactly one line's worth of cells.
    pub fn set_line(&mut self, axis: Axis, index: usize, colors: &[Color]) {
        assert_eq!(colors.len(), self.line_len(axis), "line length mismatch");
        for (offset, &color) in colors.iter().enumerate() {
            match axis {
                Axis::Horizontal => self.set(index, offset, color),
                Axis::Vertical => self.set(offset, index, color),
            }
        }
    }

    /// Whether every cell of the line shares one color.
    #[must_use]
    pub fn is_line_monochrome(&self, axis: Axis, index: usize) -> bool {
        let line = self.line(axis, index);
        line.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// Cyclically rotate a line. Positive `amount` moves every cell toward
    /// index 0 (left for rows, up for columns); negative moves it away.
    pub fn rotate_line(&mut self, axis: Axis, index: usize, amount: i32) {
        let len = self.line_len(axis);
        let shift = i64::from(amount).rem_euclid(len as i64) as usize;
        if shift == 0 {
            return;
        }
        let mut line = self.line(axis, index);
        line.rotate_left(shift);
        self.set_line(axis, index, &line);
    }

    /// Rotate a row left by `amount` cells.
    pub fn rotate_row_left(&mut self, row: usize, amount: usize) {
        let start = self.index(row, 0);
        let cols = self.cols;
        self.cells[start..start + cols].rotate_left(amount % cols);
    }

    /// Rotate a column up by `amount` cells.
    pub fn rotate_column_up(&mut self, col: usize, amount: usize) {
        let mut line: Vec<Color> = self.column(col).collect();
        line.rotate_left(amount % self.rows);
        self.set_line(Axis::Vertical, col, &line);
    }

    /// Copy of this grid with the row order reversed.
    #[must_use]
    pub fn reversed_rows(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in (0..self.rows).rev() {
            cells.extend_from_slice(self.row(row));
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Row vectors, top to bottom.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.cells.chunks(self.cols).map(<[Color]>::to_vec).collect()
    }

    /// Iterate `(position, color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Color)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &color)| (CellPos::new(i / cols, i % cols), color))
    }
}

impl TryFrom<Vec<Vec<Color>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Color>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Color>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for color in row {
                write!(f, "{color}")?;
            }
        }
        Ok(())
    }
}
