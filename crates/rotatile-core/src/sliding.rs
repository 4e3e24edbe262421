#![forbid(unsafe_code)]

//! A doubled line of tiles being dragged.
//!
//! The line holds 2N tiles copied from the doubled buffer, laid out at tile
//! centers `i * S + S / 2`. Translating shifts every center; a tile that
//! falls fully past one end is moved to the other end so the visible window
//! `[0, N * S)` is always covered.
//!
//! # Invariants
//!
//! 1. Consecutive tile centers are exactly `S` apart.
//! 2. After every translation the front center lies in `[-S/2, S/2]`.
//! 3. The tile sequence is always a cyclic rotation of the input colors.

use serde::Serialize;
use tracing::trace;

use crate::color::Color;
use crate::grid::Axis;

/// One tile of a sliding line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlidingTile {
    pub color: Color,
    /// Center position along the line axis, in pixels.
    pub offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlidingLine {
    axis: Axis,
    index: usize,
    tile_size: f32,
    tiles: Vec<SlidingTile>,
}

impl SlidingLine {
    /// # Panics
    ///
    /// Panics if `colors` is empty or has odd length.
    #[must_use]
    pub fn new(axis: Axis, index: usize, colors: &[Color], tile_size: f32) -> Self {
        assert!(
            !colors.is_empty() && colors.len() % 2 == 0,
            "sliding line needs a doubled line (got {} tiles)",
            colors.len()
        );
        let tiles = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| SlidingTile {
                color,
                offset: Self::center(i, tile_size),
            })
            .collect();
        Self {
            axis,
            index,
            tile_size,
            tiles,
        }
    }

    #[inline]
    fn center(slot: usize, tile_size: f32) -> f32 {
        slot as f32 * tile_size + tile_size / 2.0
    }

    #[inline]
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// All 2N tiles, front first.
    #[must_use]
    pub fn tiles(&self) -> &[SlidingTile] {
        &self.tiles
    }

    /// Length of the canonical line (N).
    #[must_use]
    pub fn line_len(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Shift every tile by `delta` pixels and wrap overflowing tiles.
    pub fn translate(&mut self, delta: f32) {
        for tile in &mut self.tiles {
            tile.offset += delta;
        }
        self.wrap();
    }

    fn wrap(&mut self) {
        let size = self.tile_size;
        let span = size * self.tiles.len() as f32;
        for _ in 0..self.tiles.len() {
            let front = self.tiles[0].offset;
            if front + size / 2.0 >= 0.0 {
                break;
            }
            let back = self.tiles[self.tiles.len() - 1].offset;
            self.tiles.rotate_left(1);
            let last = self.tiles.len() - 1;
            self.tiles[last].offset = back + size;
            trace!(axis = ?self.axis, index = self.index, "tile wrapped to back");
        }
        for _ in 0..self.tiles.len() {
            let back = self.tiles[self.tiles.len() - 1].offset;
            if back + size / 2.0 <= span {
                break;
            }
            let front = self.tiles[0].offset;
            self.tiles.rotate_right(1);
            self.tiles[0].offset = front - size;
            trace!(axis = ?self.axis, index = self.index, "tile wrapped to front");
        }
    }

    /// Align to the nearest tile boundary and return the canonical colors.
    pub fn snap(&mut self) -> Vec<Color> {
        if self.tiles[0].offset < 0.0 {
            self.tiles.rotate_left(1);
        }
        let size = self.tile_size;
        for (slot, tile) in self.tiles.iter_mut().enumerate() {
            tile.offset = Self::center(slot, size);
        }
        self.tiles[..self.line_len()]
            .iter()
            .map(|tile| tile.color)
            .collect()
    }
}
