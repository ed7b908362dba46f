//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid logic, input decoding, terminal rendering).
//!
//! # Grid Dimensions
//!
//! Grids are at least [`MIN_DIMENSION`] cells in each direction and at most
//! [`MAX_WIDTH`] x [`MAX_HEIGHT`], so every cell and the line below the grid
//! have a screen coordinate. The number of mines is derived from the area:
//!
//! | Grid | Cells | Mines |
//! |------|-------|-------|
//! | 3x3 | 9 | 1 |
//! | 5x5 | 25 | 3 |
//! | 10x10 | 100 | 10 |
//! | 30x16 | 480 | 48 |
//!
//! # Screen Layout
//!
//! The board is drawn below a fixed six-line header (title, help text and
//! the "Mines left" counter):
//!
//! - `X_OFFSET`: 2 columns of left margin
//! - `Y_OFFSET`: 6 header rows
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{mine_count_for, Command, Direction, Pos};
//!
//! assert_eq!(mine_count_for(3, 3), 1);
//! assert_eq!(mine_count_for(5, 5), 3);
//!
//! assert_eq!(Command::ToggleFlag.as_str(), "toggleFlag");
//! assert_eq!(Command::Move(Direction::Up).as_str(), "moveUp");
//!
//! assert_eq!(Pos::new(2, 1).x, 2);
//! ```

/// Smallest accepted width or height
pub const MIN_DIMENSION: u16 = 3;

/// Fraction of cells that hold a mine
pub const MINE_DENSITY: f64 = 0.1;

/// Screen column of grid column 0
pub const X_OFFSET: u16 = 2;

/// Screen row of grid row 0
pub const Y_OFFSET: u16 = 6;

/// Screen row of the "Mines left" counter
pub const MINES_LEFT_ROW: u16 = Y_OFFSET - 1;

/// Largest accepted width: the last column must still have a screen column
pub const MAX_WIDTH: u16 = u16::MAX - X_OFFSET;

/// Largest accepted height: the row below the grid must still have a screen row
pub const MAX_HEIGHT: u16 = u16::MAX - Y_OFFSET;

/// Number of mines placed on a `width` x `height` grid.
///
/// Rounds half away from zero, so a 5x5 grid (2.5) gets 3 mines.
pub fn mine_count_for(width: u16, height: u16) -> usize {
    let area = f64::from(width) * f64::from(height);
    (area * MINE_DENSITY).round() as usize
}


/// A cell coordinate on the grid
///
/// `x` grows left to right, `y` grows top to bottom; `(0, 0)` is the top-left
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Pos {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Cursor movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Logical commands produced by the input decoder
///
/// The controller applies these to the cursor and the grid. [`Command::None`]
/// stands for any byte sequence the decoder did not recognise and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell
    Move(Direction),
    /// Jump to the first column
    Home,
    /// Jump to the last column
    End,
    /// Jump to the first row
    PageUp,
    /// Jump to the last row
    PageDown,
    /// Reveal the cell under the cursor
    Reveal,
    /// Flag or unflag the cell under the cursor
    ToggleFlag,
    /// Leave the game
    Quit,
    /// Unrecognised input
    None,
}

impl Command {
    /// Convert to camelCase string (used in log output)
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(Direction::Up) => "moveUp",
            Command::Move(Direction::Down) => "moveDown",
            Command::Move(Direction::Left) => "moveLeft",
            Command::Move(Direction::Right) => "moveRight",
            Command::Home => "home",
            Command::End => "end",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::Reveal => "reveal",
            Command::ToggleFlag => "toggleFlag",
            Command::Quit => "quit",
            Command::None => "none",
        }
    }
}

/// Final result of a game
///
/// Never stored: derived from the grid once play stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Message printed after the terminal is restored
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "Well done",
            Outcome::Lost => "BLAM!",
        }
    }
}
