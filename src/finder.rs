/*
finder.rs

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

//! Find words in a word-seek grid.
//!
//! The grid does not need to come from [`crate::generator::puzzle::WordSeekPuzzle`]: any
//! rectangular grid of letters can be searched.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::WordSeekError;
use crate::generator::direction::Direction;
use crate::generator::grid::{Grid, Position};
use crate::generator::word_list::WordList;

/// Location of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct FindResult {
    /// Cell of the first letter.
    pub start: Position,

    /// Cell of the last letter.
    pub end: Position,

    /// Direction from the first letter to the last one.
    pub direction: Direction,
}

impl fmt::Display for FindResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} {}", self.start, self.end, self.direction)
    }
}

/// Word finder.
#[derive(Debug, Clone)]
pub struct WordSeekFinder {
    grid: Grid,
}

impl WordSeekFinder {
    /// Create a [`WordSeekFinder`] object for the given grid.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Create a [`WordSeekFinder`] object from the rows of a grid.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, WordSeekError> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    /// Create a [`WordSeekFinder`] object from the textual representation of a grid.
    pub fn from_text(text: &str) -> Result<Self, WordSeekError> {
        Ok(Self::new(text.parse()?))
    }

    /// Return the location of the first occurrence of the word, or None if the word is not in
    /// the grid.
    ///
    /// Cells are visited in row-major order, and for each cell the directions are tried in the
    /// [`Direction::all`] order. The search is not case-sensitive.
    pub fn find_word(&self, word: &str) -> Option<FindResult> {
        let word: Vec<u8> = word.bytes().map(|c| c.to_ascii_uppercase()).collect();
        let len: usize = word.len();
        if len == 0 {
            return None;
        }

        for start in self.grid.positions() {
            if self.grid.get(start) != Some(word[0]) {
                continue;
            }
            for direction in Direction::all() {
                if self.matches(&word, start, direction) {
                    let end: Position = start.step(direction, len - 1)?;
                    debug!(
                        "Found {} at {start} -> {end} {direction}",
                        String::from_utf8_lossy(&word)
                    );
                    return Some(FindResult {
                        start,
                        end,
                        direction,
                    });
                }
            }
        }
        debug!("{} not found", String::from_utf8_lossy(&word));
        None
    }

    /// Search all the words of the list, in the list order.
    pub fn find_all(&self, word_list: &WordList) -> Vec<(String, Option<FindResult>)> {
        word_list
            .iter()
            .map(|word| (word.to_string(), self.find_word(word)))
            .collect()
    }

    /// Whether the word starts at the given cell in the given direction.
    ///
    /// Stop at the first mismatch or when leaving the grid.
    fn matches(&self, word: &[u8], start: Position, direction: Direction) -> bool {
        word.iter().enumerate().all(|(i, letter)| {
            start
                .step(direction, i)
                .and_then(|pos| self.grid.get(pos))
                .is_some_and(|l| l == *letter)
        })
    }
}
