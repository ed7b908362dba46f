//! Cursor module - the player's selection on the grid
//!
//! Movement is clamped: pressing an arrow key against an edge leaves the
//! cursor where it is. Home/End jump to the first/last column and
//! PageUp/PageDown to the first/last row.

use crate::types::{Command, Direction, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    width: u16,
    height: u16,
}

impl Cursor {
    /// Cursor at the top-left cell of a `width` x `height` grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            pos: Pos::default(),
            width,
            height,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Apply a navigation command, returning whether the cursor moved
    ///
    /// Non-navigation commands are ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.pos;
        let last_x = self.width.saturating_sub(1);
        let last_y = self.height.saturating_sub(1);

        match command {
            Command::Move(Direction::Up) => self.pos.y = self.pos.y.saturating_sub(1),
            Command::Move(Direction::Down) => self.pos.y = (self.pos.y + 1).min(last_y),
            Command::Move(Direction::Left) => self.pos.x = self.pos.x.saturating_sub(1),
            Command::Move(Direction::Right) => self.pos.x = (self.pos.x + 1).min(last_x),
            Command::Home => self.pos.x = 0,
            Command::End => self.pos.x = last_x,
            Command::PageUp => self.pos.y = 0,
            Command::PageDown => self.pos.y = last_y,
            _ => {}
        }

        self.pos != before
    }
}
