//! Integration tests for the game loop, driven by scripted key bytes

use tui_minesweeper::core::Grid;
use tui_minesweeper::types::{Outcome, Pos};
use tui_minesweeper::{GameController, GameEnd, GamePhase};

const UP: &[u8] = b"\x1b[A";
const DOWN: &[u8] = b"\x1b[B";
const RIGHT: &[u8] = b"\x1b[C";
const LEFT: &[u8] = b"\x1b[D";
const END: &[u8] = b"\x1b[F";
const PAGE_DOWN: &[u8] = b"\x1b[6~";

fn script(keys: &[&[u8]]) -> Vec<u8> {
    keys.concat()
}

fn play(width: u16, height: u16, mines: &[Pos], keys: &[&[u8]]) -> (GameEnd, Grid, String) {
    let grid = Grid::with_mines(width, height, mines).unwrap();
    let input = script(keys);
    let mut controller = GameController::new(grid, input.as_slice(), Vec::new());
    let end = controller.run().unwrap();
    let (grid, out) = controller.into_parts();
    (end, grid, String::from_utf8(out).unwrap())
}

#[test]
fn test_flood_then_flag_wins() {
    let (end, grid, _) = play(
        3,
        3,
        &[Pos::new(2, 2)],
        &[b" ", RIGHT, RIGHT, DOWN, DOWN, b"m"],
    );
    assert_eq!(end, GameEnd::Finished(Outcome::Won));
    assert!(grid.is_finished());
    assert!(grid.all_mines_flagged());
}

#[test]
fn test_jump_keys_reach_far_corner() {
    let (end, _, _) = play(6, 4, &[Pos::new(5, 3)], &[END, PAGE_DOWN, b"m"]);
    assert_eq!(end, GameEnd::Finished(Outcome::Won));
}

#[test]
fn test_revealing_mine_loses() {
    let (end, grid, out) = play(5, 5, &[Pos::new(0, 0), Pos::new(3, 3)], &[b" "]);
    assert_eq!(end, GameEnd::Finished(Outcome::Lost));
    assert_eq!(grid.cells().iter().filter(|c| !c.is_hidden()).count(), 1);
    assert!(out.contains('X'));
}

#[test]
fn test_input_after_finish_is_not_consumed() {
    let (end, grid, _) = play(5, 5, &[Pos::new(0, 0), Pos::new(3, 3)], &[b" ", RIGHT, b" "]);
    assert_eq!(end, GameEnd::Finished(Outcome::Lost));
    assert!(grid.cell(Pos::new(1, 0)).unwrap().is_hidden());
}

#[test]
fn test_quit_keys_end_game_unfinished() {
    for quit in [&b"\x03"[..], b"q"] {
        let (end, grid, _) = play(4, 4, &[Pos::new(3, 3)], &[RIGHT, quit, b" "]);
        assert_eq!(end, GameEnd::Quit);
        assert!(!grid.is_finished());
        assert!(grid.cells().iter().all(|c| c.is_hidden()));
    }
}

#[test]
fn test_end_of_input_quits() {
    let (end, grid, _) = play(4, 4, &[Pos::new(3, 3)], &[RIGHT]);
    assert_eq!(end, GameEnd::Quit);
    assert!(!grid.is_finished());
}

#[test]
fn test_movement_is_clamped() {
    let grid = Grid::with_mines(4, 4, &[Pos::new(3, 3)]).unwrap();
    let input = script(&[UP, LEFT, LEFT, RIGHT, b"\x1b[Z", b"x"]);
    let mut controller = GameController::new(grid, input.as_slice(), Vec::new());
    assert_eq!(controller.run().unwrap(), GameEnd::Quit);
    assert_eq!(controller.cursor(), Pos::new(1, 0));
    assert_eq!(controller.phase(), GamePhase::Playing);
}

#[test]
fn test_phase_reflects_outcome() {
    let grid = Grid::with_mines(3, 3, &[Pos::new(0, 0)]).unwrap();
    let mut controller = GameController::new(grid, &b"m"[..], Vec::new());
    controller.run().unwrap();
    assert_eq!(controller.phase(), GamePhase::Won);

    let grid = Grid::with_mines(3, 3, &[Pos::new(0, 0)]).unwrap();
    let mut controller = GameController::new(grid, &b" "[..], Vec::new());
    controller.run().unwrap();
    assert_eq!(controller.phase(), GamePhase::Lost);
}

#[test]
fn test_output_draws_board_then_patches_cells() {
    let (_, _, out) = play(3, 3, &[Pos::new(2, 2)], &[b"m", b"m"]);

    // Full draw starts with a screen clear and shows the counter
    assert!(out.starts_with("\x1b[2J"));
    assert!(out.contains("Mines left: 1"));
    // Flagging then unflagging redraws the counter each time
    assert!(out.contains("Mines left: 0"));
    assert_eq!(out.matches("Mines left: ").count(), 3);
    // Cursor ends on the line below a 3-row grid (row 9, 1-based 10)
    assert!(out.ends_with("\x1b[10;1H\r\n"));
}

#[test]
fn test_unflag_on_reveal_updates_counter() {
    let (_, grid, out) = play(4, 4, &[Pos::new(3, 3)], &[RIGHT, b"m", b" "]);
    assert_eq!(grid.flagged_count(), 0);
    assert!(!grid.cell(Pos::new(1, 0)).unwrap().is_hidden());
    assert_eq!(out.matches("Mines left: ").count(), 3);
}

#[test]
fn test_revealing_spare_flag_wins_game() {
    let (end, grid, out) = play(
        4,
        4,
        &[Pos::new(0, 0), Pos::new(3, 3)],
        &[b"m", END, PAGE_DOWN, b"m", LEFT, LEFT, UP, b"m", b" "],
    );
    assert_eq!(end, GameEnd::Finished(Outcome::Won));
    assert_eq!(grid.flagged_count(), 2);
    assert!(out.contains("Mines left: -1"));
}
