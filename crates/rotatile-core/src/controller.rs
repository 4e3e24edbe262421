#![forbid(unsafe_code)]

//! Drag-to-rotation controller.
//!
//! [`RotationController`] turns pointer events into whole-line rotations of a
//! [`ToroidalGrid`]. It borrows the grid per event and never owns it.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──down──▶ Pending ──move past threshold──▶ Dragging
//!    ▲                │                                 │
//!    └──────up────────┴────────────────up───────────────┘
//! ```
//!
//! - **Pending**: the touched cell and a snapshot of the board are captured.
//!   The axis is not decided until the drag leaves the dead zone around the
//!   start point and is clearly more horizontal than vertical (or vice versa).
//! - **Dragging**: the locked row or column slides with the pointer, clamped
//!   to one tile per event. Every `2 × threshold` pixels of raw movement
//!   emits a [`RotationEvent::RotationTick`].
//! - **Release** snaps the line to the nearest tile, writes it back to the
//!   grid and reports whether the board differs from the snapshot.
//!
//! # Invariants
//!
//! 1. At most one gesture is active; pointer-down during a gesture is ignored.
//! 2. Every gesture that emits `LineTouched` while not busy ends with exactly
//!    one `LineFinished`, unless it is dropped by busy or [`reset`].
//! 3. The grid is only written on snap, so it never holds a half-rotated line.
//! 4. The axis is decided at most once per gesture.
//!
//! # Failure Modes
//!
//! - Move or up without a prior down is ignored.
//! - Events with non-finite coordinates are ignored.
//! - While busy, a drag in progress is snapped on the next event without a
//!   `LineFinished`. A pending gesture survives busy moves and is dropped by
//!   a busy pointer-up.
//!
//! [`reset`]: RotationController::reset

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::RotationConfig;
use crate::grid::{Axis, CellPos, Grid};
use crate::handlers::RotationHandlers;
use crate::pointer::{Point, PointerEvent};
use crate::sliding::SlidingLine;
use crate::torus::ToroidalGrid;

/// The canonical cells of a locked line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTiles {
    pub axis: Axis,
    pub index: usize,
    pub cells: Vec<CellPos>,
}

impl LineTiles {
    fn new(axis: Axis, index: usize, rows: usize, cols: usize) -> Self {
        let cells = match axis {
            Axis::Horizontal => (0..cols).map(|col| CellPos::new(index, col)).collect(),
            Axis::Vertical => (0..rows).map(|row| CellPos::new(row, index)).collect(),
        };
        Self { axis, index, cells }
    }
}

/// Notifications produced by [`RotationController::handle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RotationEvent {
    /// Pointer went down on `cell`.
    LineTouched { cell: CellPos },
    /// The drag axis was locked onto `line`.
    AxisDecided { line: LineTiles },
    /// The drag covered another tick distance.
    RotationTick,
    /// The gesture ended; `changed` is true if any color moved.
    LineFinished { changed: bool },
}

/// Coarse gesture phase, for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Pending,
    Dragging,
}

#[derive(Debug)]
struct Drag {
    line: SlidingLine,
    /// Raw movement since the last tick.
    accumulated: f32,
}

#[derive(Debug)]
struct Gesture {
    touched: CellPos,
    snapshot: Grid,
    drag: Option<Drag>,
}

/// Stateful pointer-to-rotation controller.
///
/// Call [`handle`](RotationController::handle) for each pointer event.
pub struct RotationController {
    config: RotationConfig,
    gesture: Option<Gesture>,
    busy: bool,
    handlers: RotationHandlers,
}

impl std::fmt::Debug for RotationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationController")
            .field("phase", &self.phase())
            .field("busy", &self.busy)
            .finish()
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(RotationConfig::default())
    }
}

impl RotationController {
    /// # Panics
    ///
    /// Panics if `config` fails [`RotationConfig::validate`].
    #[must_use]
    pub fn new(config: RotationConfig) -> Self {
        assert!(config.validate().is_ok(), "invalid rotation config: {config:?}");
        Self {
            config,
            gesture: None,
            busy: false,
            handlers: RotationHandlers::default(),
        }
    }

    /// Process a pointer event against `grid`.
    ///
    /// Returned events are also dispatched, in order, to registered handlers.
    pub fn handle(&mut self, grid: &mut ToroidalGrid, event: &PointerEvent) -> Vec<RotationEvent> {
        let mut out = Vec::with_capacity(2);

        if !event.is_finite() {
            trace!(?event, "ignoring non-finite pointer event");
            return out;
        }

        match *event {
            PointerEvent::Down { pos } => self.on_down(grid, pos, &mut out),
            PointerEvent::Move {
                prev_delta,
                start_delta,
                ..
            } => self.on_move(grid, prev_delta, start_delta, &mut out),
            PointerEvent::Up { .. } => self.on_up(grid, &mut out),
        }

        for event in &out {
            self.handlers.dispatch(event);
        }
        out
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match &self.gesture {
            None => GesturePhase::Idle,
            Some(Gesture { drag: None, .. }) => GesturePhase::Pending,
            Some(Gesture { drag: Some(_), .. }) => GesturePhase::Dragging,
        }
    }

    /// Sliding tiles of the active drag, for renderers.
    #[must_use]
    pub fn line_view(&self) -> Option<&SlidingLine> {
        self.gesture
            .as_ref()
            .and_then(|g| g.drag.as_ref())
            .map(|d| &d.line)
    }

    /// Lock or unlock input. Takes effect on the next event.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Drop any gesture without notifying and without touching the grid.
    pub fn reset(&mut self) {
        self.gesture = None;
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Replace the configuration. Thresholds apply from the next event.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`RotationConfig::validate`].
    pub fn set_config(&mut self, config: RotationConfig) {
        assert!(config.validate().is_ok(), "invalid rotation config: {config:?}");
        self.config = config;
    }

    pub fn handlers_mut(&mut self) -> &mut RotationHandlers {
        &mut self.handlers
    }

    /// Cell under `pos`, clamped to the board.
    #[must_use]
    pub fn hit_test(&self, grid: &ToroidalGrid, pos: Point) -> CellPos {
        let size = self.config.tile_size;
        let clamp = |v: f32, n: usize| ((v / size).floor().max(0.0) as usize).min(n - 1);
        CellPos::new(clamp(pos.y, grid.rows()), clamp(pos.x, grid.cols()))
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl RotationController {
    fn on_down(&mut self, grid: &ToroidalGrid, pos: Point, out: &mut Vec<RotationEvent>) {
        if self.busy {
            trace!("pointer down ignored while busy");
            return;
        }
        if self.gesture.is_some() {
            trace!("pointer down ignored during gesture");
            return;
        }
        let touched = self.hit_test(grid, pos);
        self.gesture = Some(Gesture {
            touched,
            snapshot: grid.snapshot(),
            drag: None,
        });
        out.push(RotationEvent::LineTouched { cell: touched });
    }

    fn on_move(
        &mut self,
        grid: &mut ToroidalGrid,
        prev_delta: Point,
        start_delta: Point,
        out: &mut Vec<RotationEvent>,
    ) {
        if self.busy {
            if self.phase() == GesturePhase::Dragging {
                self.settle_busy(grid);
            }
            return;
        }
        let threshold = self.config.swipe_threshold();
        let tile_size = self.config.tile_size;
        let tick_distance = self.config.tick_distance();
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };

        if gesture.drag.is_none() {
            let dx = start_delta.x.abs();
            let dy = start_delta.y.abs();
            if (dx < threshold && dy < threshold) || (dx - dy).abs() < threshold {
                return;
            }
            let axis = if dx > dy {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let index = match axis {
                Axis::Horizontal => gesture.touched.row,
                Axis::Vertical => gesture.touched.col,
            };
            debug!(?axis, index, dx, dy, "drag axis locked");
            gesture.drag = Some(Drag {
                line: SlidingLine::new(axis, index, &grid.doubled_line(axis, index), tile_size),
                accumulated: 0.0,
            });
            out.push(RotationEvent::AxisDecided {
                line: LineTiles::new(axis, index, grid.rows(), grid.cols()),
            });
        }

        let Some(drag) = gesture.drag.as_mut() else {
            return;
        };
        let delta = prev_delta.along(drag.line.axis());
        drag.line.translate(delta.clamp(-tile_size, tile_size));
        drag.accumulated += delta;
        if drag.accumulated.abs() > tick_distance {
            trace!(accumulated = drag.accumulated, "rotation tick");
            drag.accumulated = 0.0;
            out.push(RotationEvent::RotationTick);
        }
    }

    fn on_up(&mut self, grid: &mut ToroidalGrid, out: &mut Vec<RotationEvent>) {
        if self.busy {
            self.settle_busy(grid);
            return;
        }
        let Some(gesture) = self.gesture.take() else {
            trace!("pointer up without gesture");
            return;
        };
        let changed = match gesture.drag {
            Some(drag) => Self::snap(grid, drag, &gesture.snapshot),
            None => false,
        };
        out.push(RotationEvent::LineFinished { changed });
    }

    /// Finish or drop the current gesture silently.
    fn settle_busy(&mut self, grid: &mut ToroidalGrid) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        match gesture.drag {
            Some(drag) => {
                let changed = Self::snap(grid, drag, &gesture.snapshot);
                debug!(changed, "drag settled while busy");
            }
            None => trace!("pending gesture dropped while busy"),
        }
    }

    /// Snap the line, write it to the grid and compare against `snapshot`.
    fn snap(grid: &mut ToroidalGrid, mut drag: Drag, snapshot: &Grid) -> bool {
        let axis = drag.line.axis();
        let index = drag.line.index();
        let colors = drag.line.snap();
        grid.set_line(axis, index, &colors);
        let changed = grid.snapshot() != *snapshot;
        debug!(?axis, index, changed, "line snapped");
        changed
    }
}
