#![forbid(unsafe_code)]

//! `rotatile waves`: print the attempt schedule.

use std::io::Write;

use clap::Args;
use rotatile_core::{PuzzleConfig, WaveSchedule};
use serde::Serialize;

use crate::error::Result;
use crate::output::{OutputFormat, write_json};

#[derive(Debug, Clone, Args)]
pub struct WavesArgs {
    /// Number of waves to list, starting at wave 0.
    #[arg(long, default_value_t = 12)]
    pub count: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveRow {
    pub wave: usize,
    pub attempts: usize,
    pub checkpoint: bool,
}

#[must_use]
pub fn schedule_rows(schedule: &WaveSchedule, count: usize) -> Vec<WaveRow> {
    (0..count)
        .map(|wave| WaveRow {
            wave,
            attempts: schedule.attempt_count(wave),
            checkpoint: schedule.is_checkpoint(wave),
        })
        .collect()
}

pub fn run_waves(args: &WavesArgs, config: &PuzzleConfig, out: &mut dyn Write) -> Result<()> {
    let rows = schedule_rows(&WaveSchedule::from_config(config), args.count);
    match args.format {
        OutputFormat::Json => write_json(out, &rows),
        OutputFormat::Text => {
            writeln!(out, "{:>5}  {:>8}  checkpoint", "wave", "attempts")?;
            for row in &rows {
                let mark = if row.checkpoint { "*" } else { "" };
                writeln!(out, "{:>5}  {:>8}  {mark}", row.wave, row.attempts)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_schedule() {
        let rows = schedule_rows(&WaveSchedule::new(3, 3, 3), 4);
        assert_eq!(
            rows,
            vec![
                WaveRow {
                    wave: 0,
                    attempts: 1,
                    checkpoint: true,
                },
                WaveRow {
                    wave: 1,
                    attempts: 1,
                    checkpoint: false,
                },
                WaveRow {
                    wave: 2,
                    attempts: 1,
                    checkpoint: false,
                },
                WaveRow {
                    wave: 3,
                    attempts: 2,
                    checkpoint: true,
                },
            ]
        );
    }

    #[test]
    fn text_table_marks_checkpoints() {
        let mut out = Vec::new();
        let args = WavesArgs {
            count: 4,
            format: OutputFormat::Text,
        };
        run_waves(&args, &PuzzleConfig::default(), &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with('*'));
        assert!(!lines[2].ends_with('*'));
        assert!(lines[4].ends_with('*'));
    }

    #[test]
    fn json_lists_every_wave() {
        let mut out = Vec::new();
        let args = WavesArgs {
            count: 30,
            format: OutputFormat::Json,
        };
        run_waves(&args, &PuzzleConfig::default(), &mut out).expect("run");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        let rows = value.as_array().expect("array");
        assert_eq!(rows.len(), 30);
        assert_eq!(rows[29]["attempts"], 10);
    }
}
