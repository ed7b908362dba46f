//! TUI Minesweeper (workspace facade crate).
//!
//! This package exposes `tui_minesweeper::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, and adds the
//! pieces that tie them together: the game controller, the CLI and log setup.

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_input as input;
pub use tui_minesweeper_term as term;
pub use tui_minesweeper_types as types;

pub mod cli;
pub mod controller;
pub mod logging;

pub use controller::{GameController, GameEnd, GamePhase};
