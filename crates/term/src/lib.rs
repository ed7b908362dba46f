//! Terminal rendering module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay. It
//! avoids widget/layout libraries: the board is drawn once and then patched
//! cell by cell with cursor moves and SGR color sequences.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep encoding pure ([`BoardView`]) and I/O thin ([`TerminalRenderer`])
//! - Always hand the terminal back in cooked mode ([`TerminalSession`])

pub mod board_view;
pub mod glyph;
pub mod renderer;
pub mod session;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_types as types;

pub use board_view::BoardView;
pub use glyph::{Glyph, GlyphStyle, Palette, CLASSIC};
pub use renderer::TerminalRenderer;
pub use session::TerminalSession;
