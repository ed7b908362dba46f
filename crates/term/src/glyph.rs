//! Glyphs and the color palette used to draw cells.

use crossterm::style::Color;

use crate::core::Grid;
use crate::types::Pos;

/// What a cell looks like on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Hidden cell carrying a flag (`M`)
    Flag,
    /// Hidden cell (`?`)
    Hidden,
    /// Revealed mine (`X`)
    Mine,
    /// Revealed cell with no neighbouring mines (`+`)
    Empty,
    /// Revealed cell touching 1..=8 mines
    Number(u8),
}

impl Glyph {
    /// Glyph for the cell at `pos`; out-of-bounds positions read as hidden.
    pub fn for_cell(grid: &Grid, pos: Pos) -> Self {
        let Some(cell) = grid.cell(pos) else {
            return Glyph::Hidden;
        };
        if cell.is_flagged() {
            Glyph::Flag
        } else if cell.is_hidden() {
            Glyph::Hidden
        } else if cell.is_mine() {
            Glyph::Mine
        } else {
            match grid.touching(pos) {
                0 => Glyph::Empty,
                n => Glyph::Number(n),
            }
        }
    }

    pub fn ch(&self) -> char {
        match self {
            Glyph::Flag => 'M',
            Glyph::Hidden => '?',
            Glyph::Mine => 'X',
            Glyph::Empty => '+',
            Glyph::Number(n) => char::from_digit(u32::from(*n), 10).unwrap_or('?'),
        }
    }
}

/// Foreground/background pair for one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl GlyphStyle {
    const fn fg(fg: Color) -> Self {
        Self { fg, bg: None }
    }

    const fn on(fg: Color, bg: Color) -> Self {
        Self { fg, bg: Some(bg) }
    }
}

/// Immutable glyph-to-color table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    flag: GlyphStyle,
    hidden: GlyphStyle,
    mine: GlyphStyle,
    empty: GlyphStyle,
    /// Colors for 1..=4; larger numbers use `number_default`
    numbers: [GlyphStyle; 4],
    number_default: GlyphStyle,
}

/// The classic palette, shared by every renderer
pub static CLASSIC: Palette = Palette::classic();

impl Palette {
    pub const fn classic() -> Self {
        Self {
            flag: GlyphStyle::on(Color::White, Color::Black),
            hidden: GlyphStyle::on(Color::White, Color::Grey),
            mine: GlyphStyle::fg(Color::Black),
            empty: GlyphStyle::fg(Color::Grey),
            numbers: [
                GlyphStyle::fg(Color::DarkBlue),
                GlyphStyle::fg(Color::DarkGreen),
                GlyphStyle::fg(Color::DarkRed),
                GlyphStyle::fg(Color::DarkMagenta),
            ],
            number_default: GlyphStyle::fg(Color::Reset),
        }
    }

    pub fn style(&self, glyph: Glyph) -> GlyphStyle {
        match glyph {
            Glyph::Flag => self.flag,
            Glyph::Hidden => self.hidden,
            Glyph::Mine => self.mine,
            Glyph::Empty => self.empty,
            Glyph::Number(n @ 1..=4) => self.numbers[usize::from(n) - 1],
            Glyph::Number(_) => self.number_default,
        }
    }
}
