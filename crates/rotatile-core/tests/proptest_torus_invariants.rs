//! Property-based invariant tests for the toroidal grid and the controller.
//!
//! 1. All four quadrants stay equal under set, reset and gestures
//! 2. Gestures only permute colors within one line
//! 3. A tap never changes the board
//! 4. A completed drag changes exactly one line or none
//! 5. Each non-busy pointer-down is matched by one LineFinished on up
//! 6. No panics on arbitrary event streams

use proptest::prelude::*;
use rotatile_core::{
    Axis, Color, GesturePhase, Grid, Point, PointerEvent, RotationController, RotationEvent,
    ToroidalGrid,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Red), Just(Color::Yellow), Just(Color::Blue)]
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(color_strategy(), cols), rows)
            .prop_map(|rows| Grid::from_rows(rows).expect("rectangular by construction"))
    })
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| Point::new(x, y))
}

#[derive(Debug, Clone)]
enum Op {
    Pointer(PointerEvent),
    Busy(bool),
    Reset,
}

fn pointer_strategy() -> impl Strategy<Value = PointerEvent> {
    prop_oneof![
        point_strategy().prop_map(|pos| PointerEvent::Down { pos }),
        (point_strategy(), point_strategy(), point_strategy()).prop_map(
            |(pos, prev_delta, start_delta)| PointerEvent::Move {
                pos,
                prev_delta,
                start_delta,
            }
        ),
        point_strategy().prop_map(|pos| PointerEvent::Up { pos }),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => pointer_strategy().prop_map(Op::Pointer),
        1 => any::<bool>().prop_map(Op::Busy),
        1 => Just(Op::Reset),
    ]
}

fn color_counts(grid: &Grid) -> [usize; 4] {
    let mut counts = [0; 4];
    for (_, color) in grid.iter() {
        let slot = Color::ALL
            .iter()
            .position(|&c| c == color)
            .expect("known color");
        counts[slot] += 1;
    }
    counts
}

/// Lines (axis, index) whose contents differ between `a` and `b`.
fn differing_lines(a: &Grid, b: &Grid) -> (Vec<usize>, Vec<usize>) {
    let rows = (0..a.rows()).filter(|&r| a.row(r) != b.row(r)).collect();
    let cols = (0..a.cols())
        .filter(|&c| a.line(Axis::Vertical, c) != b.line(Axis::Vertical, c))
        .collect();
    (rows, cols)
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Mirror invariant
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mirrors_hold_under_set_and_reset(
        source in grid_strategy(),
        writes in proptest::collection::vec((0usize..4, 0usize..4, color_strategy()), 0..32),
    ) {
        let mut torus = ToroidalGrid::new(&source);
        for (row, col, color) in writes {
            torus.set(row % source.rows(), col % source.cols(), color);
            prop_assert!(torus.is_mirror_consistent());
        }
        torus.reset(&source);
        prop_assert!(torus.is_mirror_consistent());
        prop_assert_eq!(torus.snapshot(), source);
    }

    #[test]
    fn mirrors_hold_under_gestures(
        source in grid_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut torus = ToroidalGrid::new(&source);
        let mut ctl = RotationController::default();
        for op in &ops {
            match op {
                Op::Pointer(event) => {
                    ctl.handle(&mut torus, event);
                }
                Op::Busy(busy) => ctl.set_busy(*busy),
                Op::Reset => ctl.reset(),
            }
            prop_assert!(torus.is_mirror_consistent());
        }
        prop_assert_eq!(color_counts(&torus.snapshot()), color_counts(&source));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3–4. Tap idempotence and single-line drags
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tap_never_changes_board(
        source in grid_strategy(),
        pos in point_strategy(),
    ) {
        let mut torus = ToroidalGrid::new(&source);
        let mut ctl = RotationController::default();
        ctl.handle(&mut torus, &PointerEvent::Down { pos });
        let events = ctl.handle(&mut torus, &PointerEvent::Up { pos });
        prop_assert_eq!(events, vec![RotationEvent::LineFinished { changed: false }]);
        prop_assert_eq!(torus.snapshot(), source);
    }

    #[test]
    fn drag_changes_at_most_one_line(
        source in grid_strategy(),
        start in (0.0f32..384.0, 0.0f32..384.0),
        delta in point_strategy(),
        steps in 1usize..8,
    ) {
        let mut torus = ToroidalGrid::new(&source);
        let mut ctl = RotationController::default();
        let mut finished = Vec::new();
        for event in PointerEvent::straight_drag(Point::new(start.0, start.1), delta, steps) {
            for out in ctl.handle(&mut torus, &event) {
                if let RotationEvent::LineFinished { changed } = out {
                    finished.push(changed);
                }
            }
        }
        let after = torus.snapshot();
        let (rows, cols) = differing_lines(&source, &after);
        prop_assert!(rows.len() <= 1 || cols.len() <= 1);
        prop_assert_eq!(finished.len(), 1);
        prop_assert_eq!(finished[0], after != source);
        prop_assert_eq!(ctl.phase(), GesturePhase::Idle);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5–6. Event pairing on arbitrary streams
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn touches_pair_with_finishes(
        source in grid_strategy(),
        events in proptest::collection::vec(pointer_strategy(), 0..64),
    ) {
        let mut torus = ToroidalGrid::new(&source);
        let mut ctl = RotationController::default();
        let mut open = false;
        for event in &events {
            for out in ctl.handle(&mut torus, event) {
                match out {
                    RotationEvent::LineTouched { .. } => {
                        prop_assert!(!open);
                        open = true;
                    }
                    RotationEvent::LineFinished { .. } => {
                        prop_assert!(open);
                        open = false;
                    }
                    RotationEvent::AxisDecided { .. } | RotationEvent::RotationTick => {
                        prop_assert!(open);
                    }
                }
            }
        }
        prop_assert_eq!(open, ctl.phase() != GesturePhase::Idle);
    }
}
