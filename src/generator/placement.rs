/*
placement.rs

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

//! Word placement in the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;
use super::grid::Position;

/// A word committed to a straight run of cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word, in uppercase.
    pub word: String,

    /// Cell of the first letter.
    pub start: Position,

    /// Direction from the first letter to the last one.
    pub direction: Direction,
}

impl Placement {
    /// Create a [`Placement`] object.
    pub fn new(word: &str, start: Position, direction: Direction) -> Self {
        Self {
            word: word.to_string(),
            start,
            direction,
        }
    }

    /// Number of cells covered by the word.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Cell of the last letter.
    ///
    /// Return None if the word would run before the first row or column, which cannot happen for
    /// placements produced by the builder.
    pub fn end(&self) -> Option<Position> {
        self.start
            .step(self.direction, self.len().saturating_sub(1))
    }

    /// Return the cells covered by the word, with the letter for each of them.
    pub fn cells(&self) -> impl Iterator<Item = (Position, u8)> {
        self.word
            .bytes()
            .enumerate()
            .filter_map(|(i, letter)| self.start.step(self.direction, i).map(|p| (p, letter)))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.end() {
            Some(end) => write!(
                f,
                "{} {} -> {} {}",
                self.word, self.start, end, self.direction
            ),
            None => write!(f, "{} {} {}", self.word, self.start, self.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_the_direction() {
        let p = Placement::new("OWL", Position::new(2, 2), Direction::NW);
        let cells: Vec<(Position, u8)> = p.cells().collect();
        assert_eq!(
            cells,
            [
                (Position::new(2, 2), b'O'),
                (Position::new(1, 1), b'W'),
                (Position::new(0, 0), b'L'),
            ]
        );
        assert_eq!(p.end(), Some(Position::new(0, 0)));
        assert_eq!(p.to_string(), "OWL (2,2) -> (0,0) NW");
    }
}
