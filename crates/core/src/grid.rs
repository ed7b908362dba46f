//! Grid module - owns the minefield
//!
//! The grid is a `width x height` arena of cells in row-major order
//! (`y * width + x`). Every cell carries its own coordinates, so lookups and
//! neighbour walks are O(1).
//!
//! Mines are placed once at construction and never move. That makes a cell's
//! touching count a pure function of the layout, so it is memoized on first
//! access.

use std::cell::OnceCell;

use arrayvec::ArrayVec;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{mine_count_for, Outcome, Pos, MAX_HEIGHT, MAX_WIDTH, MIN_DIMENSION};

/// Errors raised while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(
        "grid must be between {min}x{min} and {max_w}x{max_h}, got {width}x{height}",
        min = MIN_DIMENSION,
        max_w = MAX_WIDTH,
        max_h = MAX_HEIGHT
    )]
    InvalidDimension { width: u16, height: u16 },
    #[error("mine at ({}, {}) is out of bounds or duplicated", .0.x, .0.y)]
    InvalidMine(Pos),
    #[error("a {width}x{height} grid cannot hold {count} mines")]
    MineCount { width: u16, height: u16, count: usize },
}

/// A single square of the minefield
#[derive(Debug, Clone)]
pub struct Cell {
    pos: Pos,
    is_mine: bool,
    is_hidden: bool,
    is_flagged: bool,
    touching: OnceCell<u8>,
}

impl Cell {
    fn new(pos: Pos) -> Self {
        Self {
            pos,
            is_mine: false,
            is_hidden: true,
            is_flagged: false,
            touching: OnceCell::new(),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Touching count if it has already been computed
    pub fn cached_touching(&self) -> Option<u8> {
        self.touching.get().copied()
    }
}

/// The minefield: cells, mine layout, flag bookkeeping and the finished latch
#[derive(Debug, Clone)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
    /// Mine positions in placement order
    mines: Vec<Pos>,
    flagged_count: usize,
    finished: bool,
}

impl Grid {
    /// Create a grid with randomly placed mines
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        Self::with_rng(width, height, &mut rand::rng())
    }

    /// Create a grid drawing mine positions from `rng`
    ///
    /// Positions are sampled uniformly and duplicates are rejected until
    /// `round(width * height * 0.1)` distinct mines are placed. That count is
    /// always below the cell count, so sampling terminates.
    pub fn with_rng<R: Rng>(width: u16, height: u16, rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Self::empty(width, height)?;
        let target = mine_count_for(width, height);

        let mut draws = 0usize;
        while grid.mines.len() < target {
            draws += 1;
            let pos = Pos::new(rng.random_range(0..width), rng.random_range(0..height));
            let idx = grid.index_of(pos);
            if grid.cells[idx].is_mine {
                continue;
            }
            grid.cells[idx].is_mine = true;
            grid.mines.push(pos);
        }

        debug!(width, height, mines = target, draws, "placed mines");
        Ok(grid)
    }

    /// Create a grid with an explicit mine layout
    ///
    /// The mine count is the length of `mines`. Every position must be in
    /// bounds and distinct, and at least one cell must stay mine-free.
    pub fn with_mines(width: u16, height: u16, mines: &[Pos]) -> Result<Self, GridError> {
        let mut grid = Self::empty(width, height)?;
        if mines.is_empty() || mines.len() >= grid.cells.len() {
            return Err(GridError::MineCount {
                width,
                height,
                count: mines.len(),
            });
        }

        for &pos in mines {
            let idx = grid.index(pos).ok_or(GridError::InvalidMine(pos))?;
            if grid.cells[idx].is_mine {
                return Err(GridError::InvalidMine(pos));
            }
            grid.cells[idx].is_mine = true;
            grid.mines.push(pos);
        }

        Ok(grid)
    }

    fn empty(width: u16, height: u16) -> Result<Self, GridError> {
        if !(MIN_DIMENSION..=MAX_WIDTH).contains(&width)
            || !(MIN_DIMENSION..=MAX_HEIGHT).contains(&height)
        {
            return Err(GridError::InvalidDimension { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Pos::new(x, y))))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
            mines: Vec::new(),
            flagged_count: 0,
            finished: false,
        })
    }

    /// Calculate flat index from a position, `None` if out of bounds
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| self.index_of(pos))
    }

    #[inline(always)]
    fn index_of(&self, pos: Pos) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Get the cell at `pos`, `None` if out of bounds
    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, left to right
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Mine positions in placement order
    pub fn mines(&self) -> &[Pos] {
        &self.mines
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_count
    }

    /// Mines not yet accounted for by a flag
    ///
    /// Over-flagging is allowed, so this goes negative once there are more
    /// flags than mines.
    pub fn mines_remaining(&self) -> i64 {
        self.mines.len() as i64 - self.flagged_count as i64
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// In-bounds positions around `pos`, excluding `pos` itself
    ///
    /// Corners have 3 neighbours, edges 5 and interior cells 8. Out-of-bounds
    /// positions have none.
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        let mut out = ArrayVec::new();
        if !self.contains(pos) {
            return out;
        }

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = i32::from(pos.x) + dx;
                let ny = i32::from(pos.y) + dy;
                if nx < 0 || ny < 0 || nx >= i32::from(self.width) || ny >= i32::from(self.height)
                {
                    continue;
                }
                out.push(Pos::new(nx as u16, ny as u16));
            }
        }
        out
    }

    /// Number of mines among the neighbours of `pos` (memoized per cell)
    pub fn touching(&self, pos: Pos) -> u8 {
        let Some(idx) = self.index(pos) else {
            return 0;
        };
        *self.cells[idx].touching.get_or_init(|| {
            self.neighbors(pos)
                .iter()
                .filter(|n| self.cells[self.index_of(**n)].is_mine)
                .count() as u8
        })
    }

    /// Reveal the cell at `pos`, flood-filling from zero-touching cells
    ///
    /// Returns every position whose state changed, in reveal order. Revealing
    /// a cell that is already revealed (or out of bounds) changes nothing.
    ///
    /// A revealed mine finishes the game and nothing else is uncovered. A
    /// flagged safe cell loses its flag, which can complete a win. The flood
    /// fill uses an explicit work-list with a visited set, never enters
    /// flagged cells or mines, and stops expanding at numbered cells.
    pub fn reveal(&mut self, pos: Pos) -> Vec<Pos> {
        let mut changed = Vec::new();
        let Some(idx) = self.index(pos) else {
            return changed;
        };
        if !self.cells[idx].is_hidden {
            return changed;
        }

        let was_flagged = self.cells[idx].is_flagged;
        self.uncover(idx);
        changed.push(pos);

        if self.cells[idx].is_mine {
            self.finished = true;
            info!(x = pos.x, y = pos.y, "mine revealed");
            return changed;
        }
        if was_flagged {
            self.check_flags_complete();
        }

        let mut visited = vec![false; self.cells.len()];
        visited[idx] = true;
        let mut work = vec![pos];

        while let Some(current) = work.pop() {
            if self.touching(current) > 0 {
                continue;
            }
            for next in self.neighbors(current) {
                let next_idx = self.index_of(next);
                if visited[next_idx] {
                    continue;
                }
                let cell = &self.cells[next_idx];
                if !cell.is_hidden || cell.is_flagged || cell.is_mine {
                    continue;
                }
                visited[next_idx] = true;
                self.uncover(next_idx);
                changed.push(next);
                work.push(next);
            }
        }

        debug!(x = pos.x, y = pos.y, revealed = changed.len(), "reveal");
        changed
    }

    /// Flip the flag on a hidden cell
    ///
    /// Returns `false` (and does nothing) for revealed or out-of-bounds cells.
    /// Flagging the last unflagged mine with no spare flags finishes the game.
    pub fn toggle_flag(&mut self, pos: Pos) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.cells[idx];
        if !cell.is_hidden {
            return false;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }

        self.check_flags_complete();
        true
    }

    /// Latch a win once every mine is flagged and no flag is spare.
    fn check_flags_complete(&mut self) {
        if self.flagged_count == self.mines.len() && self.all_mines_flagged() {
            self.finished = true;
            info!(mines = self.mines.len(), "all mines flagged");
        }
    }

    /// True when every mine carries a flag
    pub fn all_mines_flagged(&self) -> bool {
        self.mines
            .iter()
            .all(|&pos| self.cells[self.index_of(pos)].is_flagged)
    }

    /// Result of the game as it stands: won iff every mine is flagged
    pub fn outcome(&self) -> Outcome {
        if self.all_mines_flagged() {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }

    fn uncover(&mut self, idx: usize) {
        let cell = &mut self.cells[idx];
        if cell.is_flagged {
            cell.is_flagged = false;
            self.flagged_count -= 1;
        }
        cell.is_hidden = false;
    }
}
