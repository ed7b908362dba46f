//! Decoder tests - every navigation key encoding a terminal may send

use tui_minesweeper::input::InputDecoder;
use tui_minesweeper::types::{Command, Direction};

fn decode_one(bytes: &[u8]) -> Command {
    InputDecoder::new(bytes).next_command().unwrap()
}

#[test]
fn test_navigation_table() {
    let cases: &[(&[u8], Command)] = &[
        (b"\x1b[A", Command::Move(Direction::Up)),
        (b"\x1b[B", Command::Move(Direction::Down)),
        (b"\x1b[C", Command::Move(Direction::Right)),
        (b"\x1b[D", Command::Move(Direction::Left)),
        (b"\x1bOA", Command::Move(Direction::Up)),
        (b"\x1bOB", Command::Move(Direction::Down)),
        (b"\x1bOC", Command::Move(Direction::Right)),
        (b"\x1bOD", Command::Move(Direction::Left)),
        (b"\x1b[H", Command::Home),
        (b"\x1bOH", Command::Home),
        (b"\x1b[1~", Command::Home),
        (b"\x1b[7~", Command::Home),
        (b"\x1b[F", Command::End),
        (b"\x1bOF", Command::End),
        (b"\x1b[4~", Command::End),
        (b"\x1b[8~", Command::End),
        (b"\x1b[5~", Command::PageUp),
        (b"\x1b[6~", Command::PageDown),
    ];

    for (bytes, expected) in cases {
        assert_eq!(decode_one(bytes), *expected, "sequence {:?}", bytes);
    }
}

#[test]
fn test_single_byte_commands() {
    assert_eq!(decode_one(b" "), Command::Reveal);
    assert_eq!(decode_one(b"m"), Command::ToggleFlag);
    assert_eq!(decode_one(b"\x03"), Command::Quit);
    assert_eq!(decode_one(b"a"), Command::None);
}

#[test]
fn test_decoder_consumes_exactly_one_key() {
    let mut decoder = InputDecoder::new(&b"\x1b[5~\x1b[Dm"[..]);
    assert_eq!(decoder.next_command().unwrap(), Command::PageUp);
    assert_eq!(decoder.next_command().unwrap(), Command::Move(Direction::Left));
    assert_eq!(decoder.next_command().unwrap(), Command::ToggleFlag);
    assert_eq!(decoder.next_command().unwrap(), Command::Quit);
    assert!(decoder.into_inner().is_empty());
}
