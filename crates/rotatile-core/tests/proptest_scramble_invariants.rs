//! Property-based invariant tests for the scramble generator.
//!
//! 1. Restoring the solution yields the source grid
//! 2. Every step amount is non-zero modulo the line length
//! 3. No move targets a line that was monochrome just before it
//! 4. Move count is bounded by the retry budget
//! 5. Determinism: same seed, same result
//! 6. Scrambling only permutes colors

use proptest::prelude::*;
use rotatile_core::random::seeded;
use rotatile_core::{Axis, Color, Grid, RotateResult, ScrambleSolver};

// ── Strategies ──────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Red), Just(Color::Yellow), Just(Color::Blue)]
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(color_strategy(), cols), rows)
            .prop_map(|rows| Grid::from_rows(rows).expect("rectangular by construction"))
    })
}

/// Replay the scramble forward in the generation frame, checking each move.
fn replay_forward(source: &Grid, result: &RotateResult) -> Grid {
    let mut work = source.clone();
    for step in &result.solution_steps {
        let (index, amount) = match step.axis {
            Axis::Horizontal => (source.rows() - 1 - step.index, -step.amount),
            Axis::Vertical => (step.index, step.amount),
        };
        assert!(
            !work.is_line_monochrome(step.axis, index),
            "move on monochrome line: {step:?}"
        );
        work.rotate_line(step.axis, index, amount);
    }
    work
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

// ═══════════════════════════════════════════════════════════════════════
// 1. Solvability
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn restore_yields_source(
        source in grid_strategy(),
        seed in any::<u64>(),
        attempts in 0usize..40,
    ) {
        let result = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        prop_assert_eq!(result.restore(), source);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2–3. No-op-free moves
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn amounts_are_non_trivial(
        source in grid_strategy(),
        seed in any::<u64>(),
        attempts in 0usize..40,
    ) {
        let result = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        for step in &result.solution_steps {
            let len = source.line_len(step.axis) as i32;
            prop_assert_ne!(step.amount.rem_euclid(len), 0);
        }
    }

    #[test]
    fn forward_replay_matches_and_skips_monochrome(
        source in grid_strategy(),
        seed in any::<u64>(),
        attempts in 0usize..40,
    ) {
        let result = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        prop_assert_eq!(replay_forward(&source, &result), result.colors);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Bounded termination
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_count_bounded_by_retry_budget(
        source in grid_strategy(),
        seed in any::<u64>(),
        max_retries in 0usize..5,
    ) {
        let solver = ScrambleSolver::new(max_retries);
        let result = solver.run(&source, &mut seeded(seed), usize::MAX);
        let bound = max_retries * (source.rows() + 1) * (source.cols() + 1);
        prop_assert!(result.difficulty() <= bound);
        prop_assert!(result.retry_count <= max_retries);
    }

    #[test]
    fn never_exceeds_attempt_count(
        source in grid_strategy(),
        seed in any::<u64>(),
        attempts in 0usize..40,
    ) {
        let result = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        prop_assert!(result.difficulty() <= attempts);
    }

    #[test]
    fn monochrome_source_yields_no_steps(
        rows in 1usize..=5,
        cols in 1usize..=5,
        color in color_strategy(),
        seed in any::<u64>(),
    ) {
        let source = Grid::filled(rows, cols, color);
        let result = ScrambleSolver::default().run(&source, &mut seeded(seed), 100);
        prop_assert!(result.solution_steps.is_empty());
        prop_assert_eq!(result.colors, source);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5–6. Determinism and conservation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_seed_same_result(
        source in grid_strategy(),
        seed in any::<u64>(),
        attempts in 0usize..20,
    ) {
        let a = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        let b = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn scramble_preserves_color_counts(
        source in grid_strategy(),
        seed in any::<u64>(),
        attempts in 0usize..20,
    ) {
        let result = ScrambleSolver::default().run(&source, &mut seeded(seed), attempts);
        prop_assert_eq!(color_counts(&result.colors), color_counts(&source));
    }
}
