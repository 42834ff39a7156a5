/*
puzzle.rs

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

//! Word-seek puzzle: the grid and the list of the words to find.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::grid_builder::{GridBuilder, compute_size};
use super::placement::Placement;
use super::word_list::WordList;
use crate::errors::WordSeekError;

/// Puzzle object.
///
/// The puzzle is fully built when the object is created, and never changes afterward.
/// A deserialized puzzle is checked the same way: every word has a placement, and every
/// placement spells its word in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "PuzzleRecord")]
pub struct WordSeekPuzzle {
    /// Words hidden in the grid, in the order they were supplied.
    words: WordList,

    /// Completed grid.
    grid: Grid,

    /// Where each word has been placed (solution).
    placements: Vec<Placement>,
}

/// Unchecked puzzle, as read from a saved file.
#[derive(Deserialize)]
struct PuzzleRecord {
    words: WordList,
    grid: Grid,
    placements: Vec<Placement>,
}

impl TryFrom<PuzzleRecord> for WordSeekPuzzle {
    type Error = WordSeekError;

    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        for placement in &record.placements {
            let in_grid: bool = !placement.word.is_empty()
                && placement.cells().count() == placement.len()
                && placement
                    .cells()
                    .all(|(pos, letter)| record.grid.get(pos) == Some(letter));
            if !in_grid || !record.words.iter().any(|w| w == placement.word) {
                return Err(WordSeekError::InvalidPlacement {
                    word: placement.word.clone(),
                });
            }
        }
        if let Some(word) = record
            .words
            .iter()
            .find(|w| !record.placements.iter().any(|p| p.word == *w))
        {
            return Err(WordSeekError::InvalidPlacement {
                word: word.to_string(),
            });
        }
        Ok(Self {
            words: record.words,
            grid: record.grid,
            placements: record.placements,
        })
    }
}

impl WordSeekPuzzle {
    /// Create a [`WordSeekPuzzle`] object by using the thread random number generator.
    ///
    /// When `width` or `height` is not provided, it is computed from the words.
    ///
    /// # Errors
    ///
    /// See [`WordSeekPuzzle::with_rng`].
    pub fn new(
        words: WordList,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<Self, WordSeekError> {
        Self::with_rng(words, width, height, &mut rand::rng())
    }

    /// Create a [`WordSeekPuzzle`] object by using the provided random number generator.
    ///
    /// # Errors
    ///
    /// The method returns [`WordSeekError::InvalidSize`] if the grid is too small for the
    /// longest word, and [`WordSeekError::PlacementExhausted`] if a word cannot be placed.
    /// Only a grid with both dimensions provided can run out of room: the computed dimensions
    /// grow until every word fits.
    pub fn with_rng<R: Rng>(
        words: WordList,
        width: Option<usize>,
        height: Option<usize>,
        rng: &mut R,
    ) -> Result<Self, WordSeekError> {
        let (w, h) = compute_size(&words, width, height)?;
        debug!(
            "New puzzle: {} words  requested size = {width:?}x{height:?}  size = {w}x{h}",
            words.len()
        );
        let (grid, placements) = GridBuilder::new(w, h)
            .resizable(width.is_none(), height.is_none())
            .build(&words, rng)?;
        Ok(Self {
            words,
            grid,
            placements,
        })
    }

    /// Create a [`WordSeekPuzzle`] object from a [`GridBuilder`] object that the caller has
    /// configured, such as for changing the number of random attempts per word.
    pub fn with_builder<R: Rng>(
        words: WordList,
        builder: &mut GridBuilder,
        rng: &mut R,
    ) -> Result<Self, WordSeekError> {
        let (grid, placements) = builder.build(&words, rng)?;
        Ok(Self {
            words,
            grid,
            placements,
        })
    }

    /// Number of columns (0 for an empty grid).
    pub fn get_width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows (0 for an empty grid).
    pub fn get_height(&self) -> usize {
        self.grid.height()
    }

    /// Return the grid, for example to give it to [`crate::finder::WordSeekFinder`].
    pub fn get_grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the grid as a list of rows.
    pub fn get_grid_letters(&self) -> Vec<String> {
        self.grid.rows()
    }

    /// Return the words to find, sorted and separated by newline characters.
    pub fn get_words_output(&self) -> String {
        self.words.sorted().join("\n")
    }

    /// Return the words, in the order they were supplied.
    pub fn get_word_list(&self) -> &WordList {
        &self.words
    }

    /// Return where each word has been placed, in placement order.
    pub fn get_placements(&self) -> &[Placement] {
        &self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_seeded_puzzles_are_reproducible() {
        let words = WordList::new(["GRID", "SEEK", "WORD"]).unwrap();
        let p1 =
            WordSeekPuzzle::with_rng(words.clone(), None, None, &mut StdRng::seed_from_u64(3))
                .unwrap();
        let p2 = WordSeekPuzzle::with_rng(words, None, None, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_with_builder() {
        let words = WordList::new(["ABCD"]).unwrap();
        let mut builder = GridBuilder::new(4, 1).max_attempts(0);
        let puzzle =
            WordSeekPuzzle::with_builder(words, &mut builder, &mut StdRng::seed_from_u64(1))
                .unwrap();
        assert_eq!(puzzle.get_grid_letters(), ["ABCD"]);
        assert_eq!(builder.fallbacks, 1);
    }

    #[test]
    fn test_missing_dimension_is_computed() {
        let words = WordList::new(["AB", "CD", "EF", "GH"]).unwrap();
        let puzzle =
            WordSeekPuzzle::with_rng(words, Some(1), None, &mut StdRng::seed_from_u64(5))
                .unwrap();
        assert_eq!(puzzle.get_width(), 1);
        assert!(puzzle.get_height() >= 8);
        assert_eq!(puzzle.get_placements().len(), 4);
    }

    #[test]
    fn test_deserialize_checks_placements() {
        let valid = r#"{"words": ["CAT"], "grid": ["CAT", "XYZ"],
            "placements": [{"word": "CAT", "start": {"row": 0, "col": 0}, "direction": "E"}]}"#;
        let puzzle: WordSeekPuzzle = serde_json::from_str(valid).unwrap();
        assert_eq!(puzzle.get_words_output(), "CAT");

        // Wrong direction, the letters do not match
        let wrong = valid.replace(r#""E""#, r#""S""#);
        assert!(serde_json::from_str::<WordSeekPuzzle>(&wrong).is_err());

        // Outside the grid
        let outside = valid.replace(r#""col": 0"#, r#""col": 5"#);
        assert!(serde_json::from_str::<WordSeekPuzzle>(&outside).is_err());

        // Word without a placement
        let missing = r#"{"words": ["CAT"], "grid": ["CAT"], "placements": []}"#;
        assert!(serde_json::from_str::<WordSeekPuzzle>(missing).is_err());

        // Placement for a word that is not in the list
        let unknown = valid.replace(r#"["CAT"]"#, r#"["XYZ"]"#);
        assert!(serde_json::from_str::<WordSeekPuzzle>(&unknown).is_err());
    }

    #[test]
    fn test_invalid_size_is_reported() {
        let words = WordList::new(["LONGWORD"]).unwrap();
        assert!(matches!(
            WordSeekPuzzle::new(words, Some(4), Some(4)),
            Err(WordSeekError::InvalidSize { len: 8, .. })
        ));
    }
}
