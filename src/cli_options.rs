/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordseek.

Wordseek is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordseek is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordseek. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a puzzle from words given on the command line:
//!
//! ```text
//! $ wordseek cat owl dog
//! TWCDX
//! GRAEO
//! UKTWK
//! DOGCV
//! OWLHN
//!
//! CAT
//! DOG
//! OWL
//! ```
//!
//! Read the words from a file, save the puzzle, and print the solution:
//!
//! ```text
//! $ wordseek -f animals.txt --width 12 --height 8 -o puzzle.json --solve
//! ```
//!
//! Print a saved puzzle:
//!
//! ```text
//! $ wordseek -l puzzle.json
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use wordseek::finder::WordSeekFinder;
use wordseek::generator::grid_builder::{self, GridBuilder};
use wordseek::generator::puzzle::WordSeekPuzzle;
use wordseek::generator::word_list::WordList;
use wordseek::saver::puzzle::SaverPuzzle;

/// Generate word-seek puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Words to hide in the grid
    words: Vec<String>,

    /// File with the words to hide, one word per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of columns (computed from the words by default)
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows (computed from the words by default)
    #[arg(long)]
    height: Option<usize>,

    /// Seed for generating the same puzzle again
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random attempts per word before scanning the grid
    #[arg(long, default_value_t = grid_builder::MAX_ATTEMPTS)]
    attempts: usize,

    /// Save the puzzle to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load a saved puzzle instead of generating one
    #[arg(short, long, conflicts_with_all = ["words", "file", "width", "height", "seed"])]
    load: Option<PathBuf>,

    /// Print the location of each word
    #[arg(short, long, default_value_t = false)]
    solve: bool,

    /// Print some statistics after generating the puzzle
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Build or load the puzzle, and then print it.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let puzzle: WordSeekPuzzle = match &args.load {
        Some(path) => SaverPuzzle::new(path)
            .get_puzzle()?
            .ok_or_else(|| format!("No such file: {}", path.display()))?,
        None => generate(args)?,
    };

    if let Some(path) = &args.output {
        SaverPuzzle::new(path).save_puzzle(&puzzle)?;
        debug!("Puzzle saved to {}", path.display());
    }

    println!("{}", puzzle.get_grid());
    println!();
    println!("{}", puzzle.get_words_output());

    if args.solve {
        println!();
        let finder = WordSeekFinder::new(puzzle.get_grid().clone());
        for (word, location) in finder.find_all(puzzle.get_word_list()) {
            match location {
                Some(l) => println!("{word} {l}"),
                None => println!("{word} not found"),
            }
        }
    }
    Ok(())
}

/// Generate a puzzle from the words in the command line and in the word file.
fn generate(args: &Args) -> Result<WordSeekPuzzle, Box<dyn Error>> {
    let mut words: Vec<String> = args.words.clone();
    if let Some(path) = &args.file {
        words.extend(WordList::load_from_path(path)?.iter().map(str::to_string));
    }
    let word_list = WordList::new(words)?;

    let (width, height) = grid_builder::compute_size(&word_list, args.width, args.height)?;
    let mut builder = GridBuilder::new(width, height)
        .max_attempts(args.attempts)
        .resizable(args.width.is_none(), args.height.is_none());
    let puzzle: WordSeekPuzzle = match args.seed {
        Some(seed) => {
            WordSeekPuzzle::with_builder(word_list, &mut builder, &mut StdRng::seed_from_u64(seed))?
        }
        None => WordSeekPuzzle::with_builder(word_list, &mut builder, &mut rand::rng())?,
    };

    // Print some stats
    if args.summary {
        eprintln!(
            "
              size = {}x{}
             words = {}
        iterations = {}
         fallbacks = {}
              time = {}s",
            puzzle.get_width(),
            puzzle.get_height(),
            puzzle.get_word_list().len(),
            builder.iteration,
            builder.fallbacks,
            builder.duration
        );
    }
    Ok(puzzle)
}
