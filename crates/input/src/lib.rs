//! Terminal input module (game-facing).
//!
//! This module is intentionally independent of any terminal library. It reads
//! raw bytes from a blocking source (stdin in raw mode) and maps them into
//! [`crate::types::Command`]s, matching the escape sequences terminals send
//! for arrow and navigation keys explicitly.

pub mod decoder;
pub mod map;

pub use tui_minesweeper_types as types;

pub use decoder::InputDecoder;
pub use map::{decode_byte, decode_escape, decode_tilde};
