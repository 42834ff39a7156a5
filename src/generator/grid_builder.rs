/*
grid_builder.rs

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

//! Build a word-seek grid.
//!
//! Each word is tried at a random direction and starting cell, up to
//! [`GridBuilder::max_attempts`] times. When all the random attempts fail, the builder scans every
//! direction and starting cell in order and keeps the first run that does not conflict with the
//! letters already in the grid. Only then the word is reported as impossible to place.
//!
//! Once every word is placed, the remaining cells receive random letters from `A` to `Z`.

use log::{debug, info, warn};
use rand::Rng;
use std::ops::Range;
use std::time::Instant;

use super::direction::Direction;
use super::grid::{Grid, Position};
use super::placement::Placement;
use super::word_list::{WordList, normalize_word};
use crate::errors::WordSeekError;

/// Default number of random attempts per word before falling back to the exhaustive scan.
pub const MAX_ATTEMPTS: usize = 100;

/// Ratio between the grid area and the number of letters to place, when the grid size is
/// computed from the words.
const AREA_FACTOR: usize = 2;

/// Status of a grid cell during construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Cell {
    Empty,
    Letter(u8),
}

/// Compute the grid size from the words and the optional requested dimensions.
///
/// When both dimensions are missing, the grid is a square one cell wider than the longest word,
/// and at least twice as large as the number of letters to place.
/// When only one dimension is missing, it is computed from the other one so that the area is
/// twice the number of letters, and it can hold the longest word.
/// The grid is empty (0x0) when there are no words and a dimension is zero or missing.
///
/// # Errors
///
/// The method returns [`WordSeekError::InvalidSize`] when the longest word does not fit in the
/// grid, in any direction.
pub fn compute_size(
    word_list: &WordList,
    width: Option<usize>,
    height: Option<usize>,
) -> Result<(usize, usize), WordSeekError> {
    let longest: usize = word_list.longest();
    let area: usize = AREA_FACTOR * word_list.total_letters();
    let (w, h) = if word_list.is_empty() {
        (width.unwrap_or(0), height.unwrap_or(0))
    } else {
        match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, other_side(area, w, longest)),
            (None, Some(h)) => (other_side(area, h, longest), h),
            (None, None) => {
                let side: usize = (longest + 1).max((area as f64).sqrt().ceil() as usize);
                (side, side)
            }
        }
    };

    if word_list.is_empty() {
        if w == 0 || h == 0 {
            return Ok((0, 0));
        }
        return Ok((w, h));
    }

    if w == 0 || h == 0 || longest > w.max(h) {
        let word: &str = word_list
            .iter()
            .find(|word| word.len() == longest)
            .unwrap_or_default();
        return Err(WordSeekError::InvalidSize {
            width: w,
            height: h,
            word: word.to_string(),
            len: longest,
        });
    }
    debug!("Grid size = {w}x{h}  Longest word = {longest}");
    Ok((w, h))
}

/// Return the dimension that gives the requested area along with the provided dimension.
fn other_side(area: usize, side: usize, longest: usize) -> usize {
    if side == 0 {
        return 0;
    }
    longest.max(area.div_ceil(side))
}

/// Return the range of the starting coordinates along one axis, or None if the word does not fit
/// along that axis.
fn start_range(delta: isize, len: usize, size: usize) -> Option<Range<usize>> {
    if len == 0 || len > size {
        return None;
    }
    match delta {
        1 => Some(0..size - len + 1),
        -1 => Some(len - 1..size),
        _ => Some(0..size),
    }
}

/// [`GridBuilder`] object.
pub struct GridBuilder {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Number of random attempts it took to place the words during the last build.
    pub iteration: usize,

    /// Number of words that needed the exhaustive scan during the last build.
    pub fallbacks: usize,

    /// Duration in seconds of the last build.
    pub duration: f32,

    /// Number of random attempts per word.
    max_attempts: usize,

    /// Whether the width can be increased when a word cannot be placed.
    grow_width: bool,

    /// Whether the height can be increased when a word cannot be placed.
    grow_height: bool,

    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl GridBuilder {
    /// Create the object for a grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            iteration: 0,
            fallbacks: 0,
            duration: 0.0,
            max_attempts: MAX_ATTEMPTS,
            grow_width: false,
            grow_height: false,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Set the number of random attempts per word.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Allow the builder to enlarge the given dimensions when there is no room left for a word.
    ///
    /// Use it for the dimensions that the caller did not request explicitly.
    pub fn resizable(mut self, width: bool, height: bool) -> Self {
        self.grow_width = width;
        self.grow_height = height;
        self
    }

    /// Place all the words of the list and fill the remaining cells.
    ///
    /// Longer words are placed first. The grid is cleared before placing the words, so the
    /// object can be used several times.
    /// If a word cannot be placed and the grid is [`GridBuilder::resizable`], then the resizable
    /// dimensions grow by one cell and all the words are placed again. Past
    /// `(letters + 1) * (longest + 1)` cells along a resizable axis, a free run always exists
    /// for the next word, which bounds the growth.
    ///
    /// # Errors
    ///
    /// The method returns an error if a word does not fit in the grid, or if there is no room
    /// left for a word in a grid that cannot grow. See [`GridBuilder::place_word`].
    pub fn build<R: Rng>(
        &mut self,
        word_list: &WordList,
        rng: &mut R,
    ) -> Result<(Grid, Vec<Placement>), WordSeekError> {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.fallbacks = 0;
        self.duration = 0.0;
        let limit: usize = (word_list.total_letters() + 1) * (word_list.longest() + 1);

        loop {
            match self.place_all(word_list, rng) {
                Err(WordSeekError::PlacementExhausted { word, .. }) if self.grow(limit) => {
                    warn!(
                        "No room left for {word}, retrying with a {}x{} grid",
                        self.width, self.height
                    );
                }
                res => {
                    self.duration = start.elapsed().as_secs_f32();
                    return res;
                }
            }
        }
    }

    /// Enlarge the resizable dimensions that are below the limit.
    ///
    /// Return `false` if no dimension could grow.
    fn grow(&mut self, limit: usize) -> bool {
        let mut grown: bool = false;
        if self.grow_width && self.width < limit {
            self.width += 1;
            grown = true;
        }
        if self.grow_height && self.height < limit {
            self.height += 1;
            grown = true;
        }
        grown
    }

    /// Place the words in a cleared grid and fill the remaining cells.
    fn place_all<R: Rng>(
        &mut self,
        word_list: &WordList,
        rng: &mut R,
    ) -> Result<(Grid, Vec<Placement>), WordSeekError> {
        self.cells = vec![Cell::Empty; self.width * self.height];

        let mut words: Vec<&str> = word_list.iter().collect();
        words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
        for word in words {
            placements.push(self.place_word(word, rng)?);
        }
        let grid: Grid = self.fill(rng);

        info!(
            "Built a {}x{} grid with {} words: iterations = {}  fallbacks = {}",
            self.width,
            self.height,
            placements.len(),
            self.iteration,
            self.fallbacks
        );
        Ok((grid, placements))
    }

    /// Place a word and write its letters into the grid.
    ///
    /// # Errors
    ///
    /// The method returns [`WordSeekError::InvalidWord`] for an empty word or a word with invalid
    /// characters, [`WordSeekError::InvalidSize`] if the word is longer than both dimensions of
    /// the grid, and [`WordSeekError::PlacementExhausted`] if every run of cells conflicts with
    /// the letters already placed.
    pub fn place_word<R: Rng>(
        &mut self,
        word: &str,
        rng: &mut R,
    ) -> Result<Placement, WordSeekError> {
        let word: String = normalize_word(word)?;
        let len: usize = word.len();
        if len > self.width.max(self.height) {
            return Err(WordSeekError::InvalidSize {
                width: self.width,
                height: self.height,
                word,
                len,
            });
        }

        for attempt in 0..self.max_attempts {
            self.iteration += 1;
            let direction: Direction = Direction::random(rng);
            let (dr, dc) = direction.delta();
            let (Some(rows), Some(cols)) = (
                start_range(dr, len, self.height),
                start_range(dc, len, self.width),
            ) else {
                debug!("    {word}: direction {direction} too long for the grid");
                continue;
            };
            let start = Position::new(rng.random_range(rows), rng.random_range(cols));
            let placement = Placement::new(&word, start, direction);
            if self.fits(&placement) {
                debug!("Placed {placement} (attempt {attempt})");
                self.commit(&placement);
                return Ok(placement);
            }
        }

        warn!(
            "No random position for {word} after {} attempts, scanning the grid",
            self.max_attempts
        );
        self.fallbacks += 1;
        match self.scan(&word) {
            Some(placement) => {
                debug!("Placed {placement} (scan)");
                self.commit(&placement);
                Ok(placement)
            }
            None => Err(WordSeekError::PlacementExhausted {
                word,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Try every direction and starting cell in order and return the first valid placement.
    fn scan(&self, word: &str) -> Option<Placement> {
        let len: usize = word.len();
        for direction in Direction::all() {
            let (dr, dc) = direction.delta();
            let (Some(rows), Some(cols)) = (
                start_range(dr, len, self.height),
                start_range(dc, len, self.width),
            ) else {
                continue;
            };
            for row in rows {
                for col in cols.clone() {
                    let placement = Placement::new(word, Position::new(row, col), direction);
                    if self.fits(&placement) {
                        return Some(placement);
                    }
                }
            }
        }
        None
    }

    /// Whether every cell of the run is empty or already holds the expected letter.
    fn fits(&self, placement: &Placement) -> bool {
        placement.word.bytes().enumerate().all(|(i, letter)| {
            match placement.start.step(placement.direction, i) {
                Some(pos) => match self.cell(pos) {
                    Some(Cell::Empty) => true,
                    Some(Cell::Letter(l)) => l == letter,
                    None => false,
                },
                None => false,
            }
        })
    }

    /// Write the letters of the word into the grid.
    fn commit(&mut self, placement: &Placement) {
        for (pos, letter) in placement.cells() {
            let index: usize = pos.row * self.width + pos.col;
            self.cells[index] = Cell::Letter(letter);
        }
    }

    /// Return the cell at the given position, or None if outside the grid.
    fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    /// Fill the empty cells with random letters and return the grid.
    fn fill<R: Rng>(&self, rng: &mut R) -> Grid {
        let letters: Vec<u8> = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Letter(l) => *l,
                Cell::Empty => rng.random_range(b'A'..=b'Z'),
            })
            .collect();
        Grid::from_letters(self.width, self.height, letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_compute_size_without_words() {
        let empty = WordList::default();
        assert_eq!(compute_size(&empty, None, None), Ok((0, 0)));
        assert_eq!(compute_size(&empty, Some(5), Some(10)), Ok((5, 10)));
        assert_eq!(compute_size(&empty, Some(0), Some(10)), Ok((0, 0)));
        assert_eq!(compute_size(&empty, Some(4), None), Ok((0, 0)));
    }

    #[test]
    fn test_compute_size_fits_the_longest_word() {
        let list = WordList::new(["BBBBB", "AAAAAAAAAAA", "CC"]).unwrap();
        let (w, h) = compute_size(&list, None, None).unwrap();
        assert!(w >= 11 && h >= 11);
        assert!(w * h >= 2 * list.total_letters());

        let list = WordList::new(["A", "B", "C", "D", "E", "F", "G", "H"]).unwrap();
        assert_eq!(compute_size(&list, None, None), Ok((4, 4)));
    }

    #[test]
    fn test_compute_size_rejects_small_grids() {
        let list = WordList::new(["CAT", "HORSE"]).unwrap();
        assert_eq!(
            compute_size(&list, Some(4), Some(3)),
            Err(WordSeekError::InvalidSize {
                width: 4,
                height: 3,
                word: "HORSE".to_string(),
                len: 5
            })
        );
        assert!(compute_size(&list, Some(0), Some(8)).is_err());
        assert_eq!(compute_size(&list, Some(5), Some(1)), Ok((5, 1)));
        assert_eq!(compute_size(&list, Some(9), None), Ok((9, 5)));
    }

    #[test]
    fn test_compute_size_is_wider_than_the_longest_word() {
        let list = WordList::new(["HOUSE", "TRAIN"]).unwrap();
        assert_eq!(compute_size(&list, None, None), Ok((6, 6)));
    }

    #[test]
    fn test_compute_size_from_one_dimension() {
        let list = WordList::new(["AB", "CD", "EF", "GH"]).unwrap();
        assert_eq!(compute_size(&list, Some(1), None), Ok((1, 16)));
        assert_eq!(compute_size(&list, None, Some(4)), Ok((4, 4)));
        assert!(compute_size(&list, Some(0), None).is_err());
    }

    #[test]
    fn test_resizable_grid_grows() {
        let list = WordList::new(["A", "B"]).unwrap();
        let mut builder = GridBuilder::new(1, 1).resizable(true, true);
        let (grid, placements) = builder.build(&list, &mut rng()).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(placements.len(), 2);

        let mut builder = GridBuilder::new(1, 1).resizable(false, true);
        let (grid, _) = builder.build(&list, &mut rng()).unwrap();
        assert_eq!((grid.width(), grid.height()), (1, 2));
    }

    #[test]
    fn test_fixed_grid_does_not_grow() {
        let list = WordList::new(["A", "B"]).unwrap();
        let mut builder = GridBuilder::new(1, 1);
        assert!(matches!(
            builder.build(&list, &mut rng()),
            Err(WordSeekError::PlacementExhausted { .. })
        ));
        assert_eq!((builder.width, builder.height), (1, 1));
    }

    #[test]
    fn test_start_range() {
        assert_eq!(start_range(1, 3, 5), Some(0..3));
        assert_eq!(start_range(-1, 3, 5), Some(2..5));
        assert_eq!(start_range(0, 3, 5), Some(0..5));
        assert_eq!(start_range(0, 6, 5), None);
        assert_eq!(start_range(1, 0, 5), None);
    }

    #[test]
    fn test_scan_places_at_first_free_run() {
        let mut builder = GridBuilder::new(3, 3).max_attempts(0);
        let mut rng = rng();

        let p = builder.place_word("abc", &mut rng).unwrap();
        assert_eq!(p.start, Position::new(2, 0));
        assert_eq!(p.direction, Direction::N);

        // Same letters: the run can be shared
        let p = builder.place_word("ABC", &mut rng).unwrap();
        assert_eq!(p.start, Position::new(2, 0));

        // Conflicting letters: the next column is used
        let p = builder.place_word("XYZ", &mut rng).unwrap();
        assert_eq!(p.start, Position::new(2, 1));
        assert_eq!(builder.fallbacks, 3);
    }

    #[test]
    fn test_placement_exhausted() {
        let mut builder = GridBuilder::new(1, 1);
        let mut rng = rng();
        builder.place_word("A", &mut rng).unwrap();
        assert_eq!(
            builder.place_word("B", &mut rng),
            Err(WordSeekError::PlacementExhausted {
                word: "B".to_string(),
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn test_word_longer_than_grid() {
        let mut builder = GridBuilder::new(2, 2);
        assert!(matches!(
            builder.place_word("ABC", &mut rng()),
            Err(WordSeekError::InvalidSize { len: 3, .. })
        ));
        assert!(matches!(
            builder.place_word("", &mut rng()),
            Err(WordSeekError::InvalidWord { .. })
        ));
    }

    #[test]
    fn test_build_fills_every_cell() {
        let list = WordList::new(["RUST", "CRAB", "OWNER", "BORROW", "TRAIT"]).unwrap();
        let (w, h) = compute_size(&list, None, None).unwrap();
        let mut builder = GridBuilder::new(w, h);
        let (grid, placements) = builder.build(&list, &mut rng()).unwrap();

        assert_eq!(grid.width(), w);
        assert_eq!(grid.height(), h);
        assert!(grid.to_string().bytes().all(|c| c == b'\n' || c.is_ascii_uppercase()));
        assert_eq!(placements.len(), list.len());
        for placement in &placements {
            assert_eq!(placement.cells().count(), placement.len());
            for (pos, letter) in placement.cells() {
                assert_eq!(grid.get(pos), Some(letter));
            }
        }
    }

    #[test]
    fn test_build_places_longest_words_first() {
        let list = WordList::new(["CC", "AAAAAAAAAAA", "BBBBB"]).unwrap();
        let mut builder = GridBuilder::new(11, 11);
        let (_, placements) = builder.build(&list, &mut rng()).unwrap();
        let order: Vec<&str> = placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(order, ["AAAAAAAAAAA", "BBBBB", "CC"]);
    }
}
