/*
errors.rs

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

//! Errors raised while building or reading word-seek grids.
//!
//! Searching a grid never fails: a word that does not occur in the grid is reported as
//! [`None`] by [`crate::finder::WordSeekFinder::find_word`].

/// Type of errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordSeekError {
    /// The word is empty or contains a character that cannot be placed in the grid.
    #[error("Invalid word \"{word}\": only letters and digits are allowed")]
    InvalidWord { word: String },

    /// The requested grid cannot hold the longest word.
    #[error("Grid size {width}x{height} is too small for the word \"{word}\" ({len} letters)")]
    InvalidSize {
        width: usize,
        height: usize,
        word: String,
        len: usize,
    },

    /// No position and direction are left for the word, even after scanning the whole grid.
    #[error("Cannot place the word \"{word}\" in the {width}x{height} grid")]
    PlacementExhausted {
        word: String,
        width: usize,
        height: usize,
    },

    /// A saved placement does not spell its word in the grid, or does not match the word list.
    #[error("Invalid placement for the word \"{word}\"")]
    InvalidPlacement { word: String },

    /// A grid row does not have the same length as the first row.
    #[error("Grid row {row} has {found} letters instead of {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A grid cell holds something else than a letter or a digit.
    #[error("Invalid character '{invalid_char}' in the grid at row {row}, column {col}")]
    InvalidGridCharacter {
        row: usize,
        col: usize,
        invalid_char: char,
    },
}

impl WordSeekError {
    /// Build an [`WordSeekError::InvalidWord`] error for the given word.
    pub(crate) fn invalid_word(word: &str) -> Self {
        WordSeekError::InvalidWord {
            word: word.to_string(),
        }
    }
}
