//! Tile Solver - CLI
//!
//! Finds every dictionary word that can be spelled from a rack of tiles.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tile_solver::{
    commands::{SolveRequest, solve_rack},
    solver::{
        CancelToken, DEFAULT_MIN_CHARACTERS, DEFAULT_PATTERN, DEFAULT_SPLIT_THRESHOLD,
        DEFAULT_WILDCARD, SolveConfig,
    },
};

#[derive(Parser)]
#[command(
    name = "tile_solver",
    about = "Solve scrabble sequences: list every word spelled by a rack of tiles",
    version,
    author
)]
struct Cli {
    /// Input sequence to solve, letters plus the wildcard marker
    #[arg(short, long)]
    input: String,

    /// Run in sequential mode on the calling thread
    #[arg(short, long)]
    sequential: bool,

    /// Minimum characters for a match to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_MIN_CHARACTERS)]
    min_characters: usize,

    /// Regex every match must satisfy in full
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    regex: String,

    /// Word list, one word per line
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Character standing for a blank tile
    #[arg(short, long, default_value_t = DEFAULT_WILDCARD)]
    wildcard: char,

    /// Worker threads (default: all cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Work units with more free tiles than this are split further
    #[arg(long, default_value_t = DEFAULT_SPLIT_THRESHOLD)]
    split_threshold: usize,

    /// Hide the live status line
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn solve_config(&self) -> Result<SolveConfig> {
        let mut config = SolveConfig::new()
            .with_parallel(!self.sequential)
            .with_min_characters(self.min_characters)
            .with_split_threshold(self.split_threshold)
            .with_pattern(&self.regex)?;
        if let Some(threads) = self.threads {
            config = config.with_threads(threads)?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cancel = CancelToken::new();
    let handler = cancel.clone();
    ctrlc::set_handler(move || handler.cancel()).context("Failed to install Ctrl+C handler")?;

    let request = SolveRequest {
        config: cli.solve_config()?,
        input: cli.input,
        wildcard: cli.wildcard,
        dictionary: cli.dictionary,
        show_status: !cli.quiet,
    };

    solve_rack(&request, &cancel)?;
    Ok(())
}
