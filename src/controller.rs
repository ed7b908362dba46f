//! GameController: the top-level game loop.
//!
//! The controller owns the grid, the cursor, the input decoder and the
//! renderer. Each turn it parks the terminal cursor on the selection, decodes
//! one key press, applies it and redraws only what changed. It is generic over
//! its byte source and sink so whole games can be scripted in tests.

use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{Cursor, Grid};
use crate::input::InputDecoder;
use crate::term::TerminalRenderer;
use crate::types::{Command, Outcome, Pos};

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// How a call to [`GameController::run`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The grid reached a finished state
    Finished(Outcome),
    /// The player quit (or input ended) before the game finished
    Quit,
}

impl GameEnd {
    /// Process exit status: 0 for a win, 1 for a loss, 130 for a quit
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GameEnd::Finished(Outcome::Won) => ExitCode::SUCCESS,
            GameEnd::Finished(Outcome::Lost) => ExitCode::from(1),
            GameEnd::Quit => ExitCode::from(130),
        }
    }
}

pub struct GameController<R: Read, W: Write> {
    grid: Grid,
    cursor: Cursor,
    input: InputDecoder<R>,
    renderer: TerminalRenderer<W>,
}

impl<R: Read, W: Write> GameController<R, W> {
    pub fn new(grid: Grid, input: R, output: W) -> Self {
        let cursor = Cursor::new(grid.width(), grid.height());
        Self {
            grid,
            cursor,
            input: InputDecoder::new(input),
            renderer: TerminalRenderer::new(output),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Pos {
        self.cursor.pos()
    }

    pub fn phase(&self) -> GamePhase {
        if !self.grid.is_finished() {
            return GamePhase::Playing;
        }
        match self.grid.outcome() {
            Outcome::Won => GamePhase::Won,
            Outcome::Lost => GamePhase::Lost,
        }
    }

    /// Hand back the grid and the output sink.
    pub fn into_parts(self) -> (Grid, W) {
        (self.grid, self.renderer.into_inner())
    }

    /// Play until the grid is finished or the player quits.
    ///
    /// Draws the full board first and leaves the terminal cursor below the
    /// board on return.
    pub fn run(&mut self) -> Result<GameEnd> {
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            mines = self.grid.mine_count(),
            "game started"
        );
        self.renderer.draw_full(&self.grid)?;

        let mut quit = false;
        while !self.grid.is_finished() {
            self.renderer.place_cursor(self.cursor.pos())?;
            let command = self
                .input
                .next_command()
                .context("failed to read input")?;
            if !self.step(command)? {
                quit = true;
                break;
            }
        }

        self.renderer.finish(&self.grid)?;

        let end = if quit {
            GameEnd::Quit
        } else {
            GameEnd::Finished(self.grid.outcome())
        };
        info!(?end, "game over");
        Ok(end)
    }

    /// Apply one command. Returns `false` when the command asks to quit.
    pub fn step(&mut self, command: Command) -> Result<bool> {
        debug!(command = command.as_str(), "step");
        let pos = self.cursor.pos();

        match command {
            Command::Quit => return Ok(false),
            Command::Reveal => {
                let flagged = self.grid.flagged_count();
                let changed = self.grid.reveal(pos);
                self.renderer.draw_cells(&self.grid, &changed)?;
                if self.grid.flagged_count() != flagged {
                    self.renderer.draw_mines_left(&self.grid)?;
                }
            }
            Command::ToggleFlag => {
                if self.grid.toggle_flag(pos) {
                    self.renderer.draw_cells(&self.grid, &[pos])?;
                    self.renderer.draw_mines_left(&self.grid)?;
                }
            }
            Command::None => {}
            _ => {
                self.cursor.apply(command);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn controller(mines: &[Pos]) -> GameController<&'static [u8], Vec<u8>> {
        let grid = Grid::with_mines(5, 5, mines).unwrap();
        GameController::new(grid, &b""[..], Vec::new())
    }

    #[test]
    fn step_moves_cursor_without_touching_grid() {
        let mut c = controller(&[Pos::new(4, 4)]);
        assert!(c.step(Command::Move(Direction::Right)).unwrap());
        assert!(c.step(Command::PageDown).unwrap());
        assert_eq!(c.cursor(), Pos::new(1, 4));

        let (grid, out) = c.into_parts();
        assert!(grid.cells().iter().all(|cell| cell.is_hidden()));
        assert!(out.is_empty());
    }

    #[test]
    fn step_quit_returns_false() {
        let mut c = controller(&[Pos::new(4, 4)]);
        assert!(!c.step(Command::Quit).unwrap());
        assert!(c.step(Command::None).unwrap());
        assert_eq!(c.phase(), GamePhase::Playing);
    }

    #[test]
    fn flag_redraws_cell_and_counter() {
        let mut c = controller(&[Pos::new(4, 4)]);
        c.step(Command::ToggleFlag).unwrap();
        let (grid, out) = c.into_parts();
        assert_eq!(grid.flagged_count(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('M'));
        assert!(text.contains("Mines left: 0"));
    }
}
