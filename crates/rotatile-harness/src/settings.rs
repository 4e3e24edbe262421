#![forbid(unsafe_code)]

//! Config file loading and board setup.

use std::fs;
use std::path::Path;

use rand::Rng;
use rotatile_core::{Color, Grid, PuzzleConfig};
use tracing::debug;

use crate::error::{HarnessError, Result};

/// Load and validate a TOML config, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<PuzzleConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| HarnessError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str::<PuzzleConfig>(&text)?
        }
        None => PuzzleConfig::default(),
    };
    config.validate()?;
    debug!(
        rows = config.rows,
        cols = config.cols,
        tile_size = config.rotation.tile_size,
        "config loaded"
    );
    Ok(config)
}

/// Uniformly random red/yellow/blue board.
pub fn random_board<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    const PALETTE: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];
    Grid::from_fn(rows, cols, |_, _| PALETTE[rng.random_range(0..PALETTE.len())])
}

/// Parse `--board` text, or draw a random board sized by `config`.
pub fn resolve_board<R: Rng>(
    text: Option<&str>,
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<Grid> {
    match text {
        Some(text) => Ok(Grid::parse(text)?),
        None => Ok(random_board(config.rows, config.cols, rng)),
    }
}
