#![forbid(unsafe_code)]

//! Pointer input consumed by the rotation controller.
//!
//! Positions are in grid-local pixels with the origin at the top-left corner
//! of the board. `prev_delta` is the movement since the previous event and
//! `start_delta` the movement since pointer-down.

use serde::{Deserialize, Serialize};

use crate::grid::Axis;

/// A point or displacement in grid-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along `axis` (x for horizontal, y for vertical).
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Raw pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down {
        pos: Point,
    },
    Move {
        pos: Point,
        prev_delta: Point,
        start_delta: Point,
    },
    Up {
        pos: Point,
    },
}

impl PointerEvent {
    /// Whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::Down { pos } | Self::Up { pos } => pos.is_finite(),
            Self::Move {
                pos,
                prev_delta,
                start_delta,
            } => pos.is_finite() && prev_delta.is_finite() && start_delta.is_finite(),
        }
    }

    /// Down, `steps` equal moves covering `delta`, then up.
    ///
    /// `steps == 0` produces a tap.
    #[must_use]
    pub fn straight_drag(start: Point, delta: Point, steps: usize) -> Vec<Self> {
        let mut events = Vec::with_capacity(steps + 2);
        events.push(Self::Down { pos: start });
        let mut pos = start;
        for i in 1..=steps {
            let fraction = i as f32 / steps as f32;
            let target = Point::new(start.x + delta.x * fraction, start.y + delta.y * fraction);
            events.push(Self::Move {
                pos: target,
                prev_delta: target - pos,
                start_delta: target - start,
            });
            pos = target;
        }
        events.push(Self::Up { pos });
        events
    }
}
