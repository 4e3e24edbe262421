#![forbid(unsafe_code)]

//! `rotatile scramble`: generate a seeded target from a board.

use std::io::Write;

use clap::Args;
use rotatile_core::random::seeded;
use rotatile_core::{Grid, PuzzleConfig, RotateResult, ScrambleSolver, ToroidalGrid, WaveSchedule};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::output::{OutputFormat, write_grid, write_json};
use crate::settings::resolve_board;

#[derive(Debug, Clone, Args)]
pub struct ScrambleArgs {
    /// Board rows as R/Y/B letters separated by '/'. Random when omitted.
    #[arg(long)]
    pub board: Option<String>,

    /// Seed for board generation and scrambling.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of scramble attempts.
    #[arg(long, conflicts_with = "wave")]
    pub attempts: Option<usize>,

    /// Take the attempt count from the wave schedule.
    #[arg(long)]
    pub wave: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct ScrambleReport {
    pub seed: u64,
    pub attempts: usize,
    pub checkpoint: Option<bool>,
    pub board: Grid,
    /// Board with rows reversed, as handed to the solver.
    pub source: Grid,
    pub result: RotateResult,
    pub restored: bool,
}

pub fn build_report(args: &ScrambleArgs, config: &PuzzleConfig) -> Result<ScrambleReport> {
    let mut rng = seeded(args.seed);
    let board = resolve_board(args.board.as_deref(), config, &mut rng)?;
    let schedule = WaveSchedule::new(
        board.rows(),
        board.cols(),
        config.wave_period.unwrap_or(board.rows()),
    );
    let attempts = match (args.attempts, args.wave) {
        (Some(attempts), _) => attempts,
        (None, Some(wave)) => schedule.attempt_count(wave),
        (None, None) => schedule.attempt_count(0),
    };

    let source = ToroidalGrid::new(&board).reverse_rows();
    let result = ScrambleSolver::from_config(&config.scramble).run(&source, &mut rng, attempts);
    let restored = result.restore() == source;
    info!(
        seed = args.seed,
        attempts,
        difficulty = result.difficulty(),
        retries = result.retry_count,
        "scramble generated"
    );

    Ok(ScrambleReport {
        seed: args.seed,
        attempts,
        checkpoint: args.wave.map(|wave| schedule.is_checkpoint(wave)),
        board,
        source,
        result,
        restored,
    })
}

pub fn run_scramble(args: &ScrambleArgs, config: &PuzzleConfig, out: &mut dyn Write) -> Result<()> {
    let report = build_report(args, config)?;
    match args.format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Text => write_text(&report, out),
    }
}

fn write_text(report: &ScrambleReport, out: &mut dyn Write) -> Result<()> {
    write_grid(out, "board", &report.board)?;
    write_grid(out, "target", &report.result.colors)?;
    write!(
        out,
        "attempts: {}  difficulty: {}  retries: {}",
        report.attempts,
        report.result.difficulty(),
        report.result.retry_count
    )?;
    if let Some(checkpoint) = report.checkpoint {
        write!(out, "  checkpoint: {checkpoint}")?;
    }
    writeln!(out)?;
    writeln!(out, "solution:")?;
    for (n, step) in report.result.solution_steps.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:?} {} by {}",
            n + 1,
            step.axis,
            step.index,
            step.amount
        )?;
    }
    writeln!(out, "restored: {}", report.restored)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(board: Option<&str>, attempts: Option<usize>, wave: Option<usize>) -> ScrambleArgs {
        ScrambleArgs {
            board: board.map(str::to_string),
            seed: 7,
            attempts,
            wave,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn explicit_attempts_win() {
        let request = args(Some("RYB/YBR/BRY"), Some(5), None);
        let report = build_report(&request, &PuzzleConfig::default()).expect("report");
        assert_eq!(report.attempts, 5);
        assert!(report.result.difficulty() <= 5);
        assert!(report.restored);
        assert_eq!(report.checkpoint, None);
    }

    #[test]
    fn wave_drives_attempts() {
        let request = args(Some("RYB/YBR/BRY"), None, Some(7));
        let report = build_report(&request, &PuzzleConfig::default()).expect("report");
        assert_eq!(report.attempts, 3);
        assert_eq!(report.checkpoint, Some(false));
    }

    #[test]
    fn source_is_board_reversed() {
        let request = args(Some("RRR/YYY/BBB"), Some(1), None);
        let report = build_report(&request, &PuzzleConfig::default()).expect("report");
        assert_eq!(report.source, Grid::parse("BBB/YYY/RRR").expect("fixture"));
    }

    #[test]
    fn random_board_follows_config_size() {
        let config = PuzzleConfig {
            rows: 4,
            cols: 5,
            ..Default::default()
        };
        let report = build_report(&args(None, Some(2), None), &config).expect("report");
        assert_eq!((report.board.rows(), report.board.cols()), (4, 5));
    }

    #[test]
    fn text_output_lists_steps() {
        let mut out = Vec::new();
        run_scramble(&args(Some("RRR/YYY/BBB"), Some(1), None), &PuzzleConfig::default(), &mut out)
            .expect("run");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("board:\nRRR\nYYY\nBBB\n"));
        assert!(text.contains("  1. Vertical "));
        assert!(text.ends_with("restored: true\n"));
    }

    #[test]
    fn json_output_round_trips_grid() {
        let mut out = Vec::new();
        let mut json_args = args(Some("RY/YB"), Some(2), None);
        json_args.format = OutputFormat::Json;
        run_scramble(&json_args, &PuzzleConfig::default(), &mut out).expect("run");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value["board"], serde_json::json!([["Red", "Yellow"], ["Yellow", "Blue"]]));
        assert_eq!(value["restored"], true);
    }
}
