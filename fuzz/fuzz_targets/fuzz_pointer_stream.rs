#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rotatile_core::{
    Color, Grid, Point, PointerEvent, RotationController, RotationEvent, ToroidalGrid,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Down { x: f32, y: f32 },
    Move { px: f32, py: f32, sx: f32, sy: f32 },
    Up,
    Busy(bool),
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Input {
    rows: u8,
    cols: u8,
    cells: Vec<u8>,
    ops: Vec<Op>,
}

const PALETTE: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

fuzz_target!(|input: Input| {
    let rows = usize::from(input.rows % 6) + 1;
    let cols = usize::from(input.cols % 6) + 1;
    let grid = Grid::from_fn(rows, cols, |r, c| {
        let byte = input.cells.get(r * cols + c).copied().unwrap_or(0);
        PALETTE[usize::from(byte) % PALETTE.len()]
    });
    let counts = |g: &Grid| PALETTE.map(|color| g.iter().filter(|(_, c)| *c == color).count());
    let before = counts(&grid);

    let mut board = ToroidalGrid::new(&grid);
    let mut controller = RotationController::default();
    let mut open = false;

    for op in input.ops.iter().take(256) {
        let event = match *op {
            Op::Down { x, y } => PointerEvent::Down {
                pos: Point::new(x, y),
            },
            Op::Move { px, py, sx, sy } => PointerEvent::Move {
                pos: Point::ZERO,
                prev_delta: Point::new(px, py),
                start_delta: Point::new(sx, sy),
            },
            Op::Up => PointerEvent::Up { pos: Point::ZERO },
            Op::Busy(busy) => {
                controller.set_busy(busy);
                continue;
            }
            Op::Reset => {
                controller.reset();
                open = false;
                continue;
            }
        };
        for out in controller.handle(&mut board, &event) {
            match out {
                RotationEvent::LineTouched { .. } => {
                    assert!(!open, "touch while a gesture is open");
                    open = true;
                }
                RotationEvent::LineFinished { .. } => {
                    assert!(open, "finish without touch");
                    open = false;
                }
                RotationEvent::AxisDecided { .. } | RotationEvent::RotationTick => {
                    assert!(open, "drag event without touch");
                }
            }
        }
        if controller.is_busy() {
            open = false;
        }
        assert!(board.is_mirror_consistent(), "mirror quadrants diverged");
    }

    assert_eq!(counts(&board.snapshot()), before, "colors were not conserved");
});
