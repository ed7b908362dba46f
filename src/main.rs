//! Terminal Minesweeper runner (default binary).
//!
//! Reads raw bytes from stdin and draws with cursor-addressed writes on the
//! normal screen, so the final board stays visible after the game ends.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tui_minesweeper::cli::Cli;
use tui_minesweeper::logging::init_file_logging;
use tui_minesweeper::term::TerminalSession;
use tui_minesweeper::{GameController, GameEnd};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let grid = cli.build_grid()?;
    info!(width = cli.width, height = cli.height, seed = ?cli.seed, "starting");

    let session = TerminalSession::enter()?;
    let mut controller = GameController::new(grid, io::stdin().lock(), io::stdout());
    let result = controller.run();

    // Always restore terminal state before reporting anything.
    drop(session);

    let end = result?;
    if let GameEnd::Finished(outcome) = end {
        println!("{}", outcome.message());
    }
    Ok(end.exit_code())
}
