//! InputDecoder: turns a blocking byte stream into commands.
//!
//! One call to [`InputDecoder::next_command`] consumes exactly one key press:
//! a single byte, `ESC` plus two bytes, or `ESC [ <digit> ~`. The decoder keeps
//! no state between calls.

use std::io::{self, ErrorKind, Read};

use tracing::{trace, warn};

use crate::map::{decode_byte, decode_escape, decode_tilde, ESC};
use crate::types::Command;

pub struct InputDecoder<R> {
    reader: R,
}

impl<R: Read> InputDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Block until one key press is read and decode it.
    ///
    /// End of input and an interrupted read both decode to [`Command::Quit`]
    /// so the caller shuts down through its normal cleanup path. Any other
    /// I/O error is returned.
    pub fn next_command(&mut self) -> io::Result<Command> {
        match self.decode() {
            Ok(command) => {
                trace!(command = command.as_str(), "decoded");
                Ok(command)
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                warn!("input interrupted, quitting");
                Ok(Command::Quit)
            }
            Err(err) => Err(err),
        }
    }

    fn decode(&mut self) -> io::Result<Command> {
        let Some(byte) = self.read_byte()? else {
            return Ok(Command::Quit);
        };
        if byte != ESC {
            return Ok(decode_byte(byte));
        }

        let (Some(intro), Some(key)) = (self.read_byte()?, self.read_byte()?) else {
            return Ok(Command::Quit);
        };
        if intro == b'[' && key.is_ascii_digit() {
            let Some(terminator) = self.read_byte()? else {
                return Ok(Command::Quit);
            };
            return Ok(decode_tilde(intro, key, terminator));
        }
        Ok(decode_escape(intro, key))
    }

    /// Read one byte, `None` at end of input
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.reader.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}
