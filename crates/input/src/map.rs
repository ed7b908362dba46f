//! Byte mapping from raw terminal input to commands.

use crate::types::{Command, Direction};

/// Escape byte that introduces a navigation key sequence
pub const ESC: u8 = 0x1b;

/// Ctrl-C as delivered in raw mode (signals are not generated)
pub const CTRL_C: u8 = 0x03;

/// Map a single byte (not part of an escape sequence) to a command.
pub fn decode_byte(byte: u8) -> Command {
    match byte {
        b' ' => Command::Reveal,
        b'm' | b'M' => Command::ToggleFlag,
        b'q' | CTRL_C => Command::Quit,
        _ => Command::None,
    }
}

/// Map the two bytes following ESC to a command.
///
/// Covers both CSI (`ESC [`) and SS3 (`ESC O`) cursor-key encodings.
pub fn decode_escape(intro: u8, key: u8) -> Command {
    if intro != b'[' && intro != b'O' {
        return Command::None;
    }
    match key {
        b'A' => Command::Move(Direction::Up),
        b'B' => Command::Move(Direction::Down),
        b'C' => Command::Move(Direction::Right),
        b'D' => Command::Move(Direction::Left),
        b'H' => Command::Home,
        b'F' => Command::End,
        _ => Command::None,
    }
}

/// Map a `ESC [ <digit> ~` sequence to a command.
///
/// `1`/`7` are Home and `4`/`8` End depending on the terminal (xterm vs rxvt).
pub fn decode_tilde(intro: u8, digit: u8, terminator: u8) -> Command {
    if intro != b'[' || terminator != b'~' {
        return Command::None;
    }
    match digit {
        b'1' | b'7' => Command::Home,
        b'4' | b'8' => Command::End,
        b'5' => Command::PageUp,
        b'6' => Command::PageDown,
        _ => Command::None,
    }
}
