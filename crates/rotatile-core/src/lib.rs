#![forbid(unsafe_code)]

//! Core: toroidal color grid, scramble generation, and drag-to-rotation input.
//!
//! # Role in rotatile
//! `rotatile-core` holds every rule of the rotation puzzle and nothing about
//! how it is drawn. The harness binary and any game front end drive it with
//! pointer events and random sources, and read colors back out.
//!
//! # Primary responsibilities
//! - **ToroidalGrid**: the board plus a mirrored 2R×2C buffer for wrap-around.
//! - **ScrambleSolver**: bounded line rotations with a recorded inverse.
//! - **RotationController**: pointer gestures to whole-line rotations.
//! - **WaveSchedule**: scramble difficulty per wave.
//!
//! # How it fits in the system
//! An owner reads the board through [`ToroidalGrid::reverse_rows`], scrambles
//! it with [`ScrambleSolver::run`] to get a target, and lets the player drag
//! lines through [`RotationController::handle`] until the board matches.

pub mod color;
pub mod config;
pub mod controller;
pub mod grid;
pub mod handlers;
pub mod pointer;
pub mod random;
pub mod schedule;
pub mod scramble;
pub mod sliding;
pub mod torus;

pub use color::Color;
pub use config::{ConfigError, PuzzleConfig, RotationConfig, ScrambleConfig};
pub use controller::{GesturePhase, LineTiles, RotationController, RotationEvent};
pub use grid::{Axis, CellPos, Grid, GridError};
pub use handlers::{RotationHandlers, Subscription};
pub use pointer::{Point, PointerEvent};
pub use random::{RandomSource, SequenceRandom};
pub use schedule::WaveSchedule;
pub use scramble::{RotateResult, ScrambleSolver, SolutionStep};
pub use sliding::{SlidingLine, SlidingTile};
pub use torus::ToroidalGrid;
