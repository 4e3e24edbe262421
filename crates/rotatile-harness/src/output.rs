#![forbid(unsafe_code)]

//! Output helpers shared by the subcommands.

use std::io::Write;

use clap::ValueEnum;
use rotatile_core::{Grid, Point};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// A labelled grid, one row per line.
pub fn write_grid(out: &mut dyn Write, label: &str, grid: &Grid) -> Result<()> {
    writeln!(out, "{label}:")?;
    writeln!(out, "{grid}")?;
    Ok(())
}

/// Parse `x,y` into a point.
pub fn parse_point(text: &str) -> std::result::Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {text:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|err| format!("bad coordinate {part:?}: {err}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("10,-4.5"), Ok(Point::new(10.0, -4.5)));
        assert_eq!(parse_point(" 1 , 2 "), Ok(Point::new(1.0, 2.0)));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn grid_block_format() {
        let mut out = Vec::new();
        let grid = Grid::parse("RY/BR").expect("fixture");
        write_grid(&mut out, "board", &grid).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "board:\nRY\nBR\n");
    }
}
