/*
lib.rs

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

//! Generate and solve word-seek (word search) puzzles.
//!
//! ```
//! use wordseek::finder::WordSeekFinder;
//! use wordseek::generator::puzzle::WordSeekPuzzle;
//! use wordseek::generator::word_list::WordList;
//!
//! let words = WordList::new(["rust", "crab"]).unwrap();
//! let puzzle = WordSeekPuzzle::new(words, None, None).unwrap();
//! println!("{}\n\n{}", puzzle.get_grid(), puzzle.get_words_output());
//!
//! let finder = WordSeekFinder::new(puzzle.get_grid().clone());
//! assert!(finder.find_word("RUST").is_some());
//! ```

pub mod errors;
pub mod finder;
pub mod generator;
pub mod saver;
