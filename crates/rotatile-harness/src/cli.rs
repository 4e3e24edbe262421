#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::drag::{DragArgs, run_drag};
use crate::error::Result;
use crate::logging;
use crate::scramble::{ScrambleArgs, run_scramble};
use crate::settings::load_config;
use crate::waves::{WavesArgs, run_waves};

#[derive(Debug, Parser)]
#[command(
    name = "rotatile",
    about = "Headless harness for the rotatile puzzle core",
    version
)]
pub struct Cli {
    /// Puzzle config file (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scramble a board and print the target with its solution.
    Scramble(ScrambleArgs),

    /// Print scramble attempts and checkpoints per wave.
    Waves(WavesArgs),

    /// Replay a drag against a board.
    Drag(DragArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Scramble(args) => run_scramble(&args, &config, out),
        Commands::Waves(args) => run_waves(&args, &config, out),
        Commands::Drag(args) => run_drag(&args, &config, out),
    }
}
