//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the minefield model and the cursor. It has **no
//! dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: a seeded RNG (or an explicit layout) produces the same field
//! - **Testable**: every rule is checked without a terminal
//! - **Portable**: usable from the terminal front end or headless
//!
//! # Module Structure
//!
//! - [`grid`]: cell arena, mine placement, flood-fill reveal, flags, win/loss
//! - [`cursor`]: clamped selection movement
//!
//! # Game Rules
//!
//! - **Mines**: `round(width * height * 0.1)` distinct cells, placed once
//! - **Reveal**: uncovering a mine ends the game; uncovering a cell with no
//!   neighbouring mines uncovers its whole zero region plus its numbered border
//! - **Flags**: toggle on hidden cells only; flags may exceed the mine count
//! - **Win**: every mine flagged, with no extra flags
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::Grid;
//! use tui_minesweeper_types::{Outcome, Pos};
//!
//! let mut grid = Grid::with_mines(3, 3, &[Pos::new(2, 2)]).unwrap();
//!
//! // Flood fill from the far corner uncovers everything but the mine
//! let changed = grid.reveal(Pos::new(0, 0));
//! assert_eq!(changed.len(), 8);
//!
//! grid.toggle_flag(Pos::new(2, 2));
//! assert!(grid.is_finished());
//! assert_eq!(grid.outcome(), Outcome::Won);
//! ```

pub mod cursor;
pub mod grid;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use cursor::Cursor;
pub use grid::{Cell, Grid, GridError};
