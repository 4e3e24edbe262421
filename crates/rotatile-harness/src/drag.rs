#![forbid(unsafe_code)]

//! `rotatile drag`: replay pointer events against a board.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rotatile_core::{
    Grid, Point, PointerEvent, PuzzleConfig, RotationController, RotationEvent, ToroidalGrid,
};
use serde::Serialize;
use tracing::info;

use crate::error::{HarnessError, Result};
use crate::output::{OutputFormat, parse_point, write_grid, write_json};

#[derive(Debug, Clone, Args)]
pub struct DragArgs {
    /// Board rows as R/Y/B letters separated by '/'.
    #[arg(long)]
    pub board: String,

    /// Pointer-down position as `x,y` pixels.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: Option<Point>,

    /// Total drag displacement as `x,y` pixels.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub by: Option<Point>,

    /// Number of move events the drag is split into.
    #[arg(long, default_value_t = 4)]
    pub steps: usize,

    /// JSON file with a list of pointer events, replayed instead of a
    /// straight drag.
    #[arg(long, conflicts_with_all = ["from", "by"])]
    pub script: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct DragReport {
    pub before: Grid,
    pub after: Grid,
    pub events: Vec<RotationEvent>,
}

fn pointer_events(args: &DragArgs) -> Result<Vec<PointerEvent>> {
    if let Some(path) = &args.script {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::ReadFile {
            path: path.clone(),
            source,
        })?;
        return Ok(serde_json::from_str(&text)?);
    }
    match (args.from, args.by) {
        (Some(from), Some(by)) => Ok(PointerEvent::straight_drag(from, by, args.steps)),
        _ => Err(HarnessError::Usage(
            "drag needs --script or both --from and --by".to_string(),
        )),
    }
}

pub fn build_report(args: &DragArgs, config: &PuzzleConfig) -> Result<DragReport> {
    let before = Grid::parse(&args.board)?;
    let pointer = pointer_events(args)?;
    let mut board = ToroidalGrid::new(&before);
    let mut controller = RotationController::new(config.rotation.clone());

    let mut events = Vec::new();
    for event in &pointer {
        events.extend(controller.handle(&mut board, event));
    }
    info!(
        pointer_events = pointer.len(),
        rotation_events = events.len(),
        "drag replayed"
    );

    Ok(DragReport {
        before,
        after: board.snapshot(),
        events,
    })
}

pub fn run_drag(args: &DragArgs, config: &PuzzleConfig, out: &mut dyn Write) -> Result<()> {
    let report = build_report(args, config)?;
    match args.format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Text => {
            write_grid(out, "before", &report.before)?;
            writeln!(out, "events:")?;
            for event in &report.events {
                match event {
                    RotationEvent::LineTouched { cell } => {
                        writeln!(out, "  touched row {} col {}", cell.row, cell.col)?;
                    }
                    RotationEvent::AxisDecided { line } => {
                        writeln!(out, "  locked {:?} {}", line.axis, line.index)?;
                    }
                    RotationEvent::RotationTick => writeln!(out, "  tick")?,
                    RotationEvent::LineFinished { changed } => {
                        writeln!(out, "  finished changed={changed}")?;
                    }
                }
            }
            write_grid(out, "after", &report.after)
        }
    }
}
