#![forbid(unsafe_code)]

//! Headless harness over `rotatile-core`.
//!
//! Generates scrambles, prints the wave schedule and replays scripted drags
//! so the core can be inspected without a renderer.

pub mod cli;
pub mod drag;
pub mod error;
pub mod logging;
pub mod output;
pub mod scramble;
pub mod settings;
pub mod waves;

pub use cli::run_from_env;
pub use error::{HarnessError, Result};
