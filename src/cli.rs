//! Command-line interface for tui-minesweeper.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{Grid, GridError};
use crate::types::{MAX_HEIGHT, MAX_WIDTH};

/// Minesweeper in the terminal
#[derive(Parser, Debug)]
#[command(name = "tui-minesweeper")]
#[command(about = "Minesweeper in the terminal", long_about = None)]
#[command(version)]
#[command(after_help = "Minimum grid size 3x3\n\
Move with the arrow keys, Home/End and PgUp/PgDown\n\
Reveal with space bar\n\
Mark with 'm'")]
pub struct Cli {
    /// Grid width in cells (3 to 65533)
    #[arg(value_parser = clap::value_parser!(u16).range(3..=i64::from(MAX_WIDTH)))]
    pub width: u16,

    /// Grid height in cells (3 to 65529)
    #[arg(value_parser = clap::value_parser!(u16).range(3..=i64::from(MAX_HEIGHT)))]
    pub height: u16,

    /// Seed for mine placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a log to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the grid these arguments describe.
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        match self.seed {
            Some(seed) => {
                Grid::with_rng(self.width, self.height, &mut StdRng::seed_from_u64(seed))
            }
            None => Grid::new(self.width, self.height),
        }
    }
}
