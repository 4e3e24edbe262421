#![no_main]

use libfuzzer_sys::fuzz_target;
use rotatile_core::{Color, Grid, ScrambleSolver, SequenceRandom};

const PALETTE: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

fuzz_target!(|data: &[u8]| {
    // Header: dimensions, attempt count, retry budget.
    if data.len() < 5 {
        return;
    }
    let rows = usize::from(data[0] % 8) + 1;
    let cols = usize::from(data[1] % 8) + 1;
    let attempts = usize::from(data[2]);
    let max_retries = usize::from(data[3] % 6);
    let payload = &data[4..];

    let source = Grid::from_fn(rows, cols, |r, c| {
        PALETTE[usize::from(payload[(r * cols + c) % payload.len()]) % PALETTE.len()]
    });
    let draws: Vec<f64> = payload.iter().map(|&b| f64::from(b) / 256.0).collect();
    let mut random = SequenceRandom::new(draws);

    let result = ScrambleSolver::new(max_retries).run(&source, &mut random, attempts);

    assert!(result.difficulty() <= attempts);
    assert!(result.difficulty() <= max_retries * (rows + 1) * (cols + 1));
    for step in &result.solution_steps {
        let len = source.line_len(step.axis) as i32;
        assert_ne!(step.amount.rem_euclid(len), 0, "no-op step {step:?}");
    }
    assert_eq!(result.restore(), source, "solution does not restore the source");
});
