//! TerminalRenderer: flushes encoded board output to a terminal.
//!
//! The board is drawn in full once; afterwards only cells that changed and
//! the mines-left counter are redrawn.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, style::Print, QueueableCommand};
use tracing::trace;

use crate::board_view::BoardView;
use crate::core::Grid;
use crate::session;
use crate::types::Pos;

pub struct TerminalRenderer<W: Write> {
    out: W,
    view: BoardView,
    buf: Vec<u8>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            view: BoardView::default(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the screen and draw header and grid.
    ///
    /// Also records the row below the grid as the cursor's exit row, in case
    /// the terminal is restored before [`TerminalRenderer::finish`] runs.
    pub fn draw_full(&mut self, grid: &Grid) -> Result<()> {
        session::set_exit_row(Some(self.view.footer_row(grid)));
        self.buf.clear();
        self.view.encode_full_into(grid, &mut self.buf)?;
        self.flush_buf()
    }

    /// Redraw the given cells.
    pub fn draw_cells(&mut self, grid: &Grid, cells: &[Pos]) -> Result<()> {
        if cells.is_empty() {
            return Ok(());
        }
        trace!(count = cells.len(), "redraw cells");
        self.buf.clear();
        for &pos in cells {
            self.view.encode_cell_into(grid, pos, &mut self.buf)?;
        }
        self.flush_buf()
    }

    /// Redraw the mines-left counter.
    pub fn draw_mines_left(&mut self, grid: &Grid) -> Result<()> {
        self.buf.clear();
        self.view.encode_mines_left_into(grid, &mut self.buf)?;
        self.flush_buf()
    }

    /// Put the terminal cursor on the selected cell.
    pub fn place_cursor(&mut self, pos: Pos) -> Result<()> {
        let (col, row) = self.view.screen_pos(pos);
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(col, row))?;
        self.flush_buf()
    }

    /// Park the cursor on the line below the grid so later output lands
    /// under the board.
    pub fn finish(&mut self, grid: &Grid) -> Result<()> {
        session::set_exit_row(None);
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, self.view.footer_row(grid)))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
