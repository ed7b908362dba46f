//! BoardView: encodes grid state as terminal control sequences.
//!
//! This module is pure (no I/O). Every encoder appends crossterm commands to
//! a byte buffer, so output can be unit-tested without a terminal.

use std::io;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::Grid;
use crate::glyph::{Glyph, Palette, CLASSIC};
use crate::types::{Pos, MINES_LEFT_ROW, X_OFFSET, Y_OFFSET};

const MINES_LEFT_LABEL: &str = "Mines left: ";

/// Maps grid coordinates to screen coordinates and encodes what goes there
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    x_offset: u16,
    y_offset: u16,
    palette: &'static Palette,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            x_offset: X_OFFSET,
            y_offset: Y_OFFSET,
            palette: &CLASSIC,
        }
    }
}

impl BoardView {
    /// Screen `(column, row)` of a grid position
    pub fn screen_pos(&self, pos: Pos) -> (u16, u16) {
        (
            self.x_offset.saturating_add(pos.x),
            self.y_offset.saturating_add(pos.y),
        )
    }

    /// First screen row below the grid
    pub fn footer_row(&self, grid: &Grid) -> u16 {
        self.y_offset.saturating_add(grid.height())
    }

    /// Clear the screen and draw header plus every row.
    pub fn encode_full_into(&self, grid: &Grid, out: &mut Vec<u8>) -> io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.encode_header_into(out)?;
        self.encode_mines_left_into(grid, out)?;

        for y in 0..grid.height() {
            out.queue(cursor::MoveTo(self.x_offset, self.y_offset.saturating_add(y)))?;
            for cell in grid.row(y) {
                self.encode_glyph_into(Glyph::for_cell(grid, cell.pos()), out)?;
            }
        }
        Ok(())
    }

    /// Redraw a single cell in place.
    pub fn encode_cell_into(&self, grid: &Grid, pos: Pos, out: &mut Vec<u8>) -> io::Result<()> {
        let (col, row) = self.screen_pos(pos);
        out.queue(cursor::MoveTo(col, row))?;
        self.encode_glyph_into(Glyph::for_cell(grid, pos), out)
    }

    /// Redraw the "Mines left" line.
    pub fn encode_mines_left_into(&self, grid: &Grid, out: &mut Vec<u8>) -> io::Result<()> {
        out.queue(cursor::MoveTo(self.x_offset, MINES_LEFT_ROW))?;
        out.queue(Print(MINES_LEFT_LABEL))?;
        out.queue(Print(grid.mines_remaining()))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        Ok(())
    }

    fn encode_header_into(&self, out: &mut Vec<u8>) -> io::Result<()> {
        out.queue(cursor::MoveTo(self.x_offset, 0))?;
        out.queue(SetForegroundColor(Color::DarkYellow))?;
        out.queue(Print("*_*_*_* "))?;
        out.queue(SetForegroundColor(Color::DarkBlue))?;
        out.queue(Print("Minesweeper"))?;
        out.queue(SetForegroundColor(Color::DarkYellow))?;
        out.queue(Print(" *_*_*_*"))?;
        out.queue(ResetColor)?;

        let help: [(u16, &[(&str, &str)]); 2] = [
            (2, &[("Move:", " Arrows|Home|End|PgUp|PgDown")]),
            (3, &[("Reveal:", " Space;   "), ("Mark:", " m")]),
        ];
        for (row, parts) in help {
            out.queue(cursor::MoveTo(self.x_offset, row))?;
            for (label, text) in parts {
                out.queue(SetAttribute(Attribute::Bold))?;
                out.queue(Print(label))?;
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(Print(text))?;
            }
        }
        Ok(())
    }

    fn encode_glyph_into(&self, glyph: Glyph, out: &mut Vec<u8>) -> io::Result<()> {
        let style = self.palette.style(glyph);
        out.queue(SetForegroundColor(style.fg))?;
        if let Some(bg) = style.bg {
            out.queue(SetBackgroundColor(bg))?;
        }
        out.queue(Print(glyph.ch()))?;
        out.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_HEIGHT, MAX_WIDTH};

    /// Drop CSI sequences, keeping printed text and a `|` per cursor move.
    fn visible_text(bytes: &[u8]) -> String {
        let mut out = String::new();
        let mut iter = bytes.iter().copied().peekable();
        while let Some(b) = iter.next() {
            if b == 0x1b && iter.peek() == Some(&b'[') {
                iter.next();
                for c in iter.by_ref() {
                    if (0x40..=0x7e).contains(&c) {
                        if c == b'H' {
                            out.push('|');
                        }
                        break;
                    }
                }
            } else {
                out.push(b as char);
            }
        }
        out
    }

    #[test]
    fn screen_pos_applies_header_offsets() {
        let view = BoardView::default();
        assert_eq!(view.screen_pos(Pos::new(0, 0)), (2, 6));
        assert_eq!(view.screen_pos(Pos::new(4, 3)), (6, 9));
    }

    #[test]
    fn screen_pos_fits_largest_grid() {
        let view = BoardView::default();
        let corner = Pos::new(MAX_WIDTH - 1, MAX_HEIGHT - 1);
        assert_eq!(view.screen_pos(corner), (u16::MAX - 1, u16::MAX - 1));

        let grid = Grid::with_mines(3, MAX_HEIGHT, &[Pos::new(0, 0)]).unwrap();
        assert_eq!(view.footer_row(&grid), u16::MAX);

        // Positions past the grid clamp to the screen edge instead of wrapping
        assert_eq!(view.screen_pos(Pos::new(u16::MAX, u16::MAX)), (u16::MAX, u16::MAX));
    }

    #[test]
    fn cell_redraw_moves_then_prints_glyph() {
        let mut grid = Grid::with_mines(3, 3, &[Pos::new(2, 2)]).unwrap();
        grid.toggle_flag(Pos::new(1, 0));

        let mut out = Vec::new();
        BoardView::default()
            .encode_cell_into(&grid, Pos::new(1, 0), &mut out)
            .unwrap();

        let text = String::from_utf8(out.clone()).unwrap();
        // 1-based row;col for screen (3, 6)
        assert!(text.starts_with("\x1b[7;4H"));
        assert!(text.ends_with("M\x1b[0m"));
        assert_eq!(visible_text(&out), "|M");
    }

    #[test]
    fn full_draw_contains_header_and_rows() {
        let mut grid = Grid::with_mines(3, 3, &[Pos::new(2, 2)]).unwrap();
        grid.reveal(Pos::new(0, 0));

        let mut out = Vec::new();
        BoardView::default().encode_full_into(&grid, &mut out).unwrap();
        let text = visible_text(&out);

        assert!(text.contains("Minesweeper"));
        assert!(text.contains("Move: Arrows|Home|End|PgUp|PgDown"));
        assert!(text.contains("Mines left: 1"));
        assert!(text.ends_with("|+++|+11|+1?"));
    }

    #[test]
    fn mines_left_can_go_negative() {
        let mut grid = Grid::with_mines(3, 3, &[Pos::new(2, 2)]).unwrap();
        grid.toggle_flag(Pos::new(0, 0));
        grid.toggle_flag(Pos::new(1, 0));

        let mut out = Vec::new();
        BoardView::default()
            .encode_mines_left_into(&grid, &mut out)
            .unwrap();
        assert!(visible_text(&out).starts_with("|Mines left: -1"));
    }
}
