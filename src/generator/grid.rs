/*
grid.rs

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

//! Rectangular grid of letters.
//!
//! The textual representation of a grid is its rows joined by newline characters, without a
//! trailing newline:
//!
//! ```text
//! CATX
//! QOWL
//! ZDOG
//! ```
//!
//! An empty grid (0x0) is the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::WordSeekError;
use crate::generator::direction::Direction;

/// Cell coordinates in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position `steps` cells away in the given direction, or None if it falls before
    /// the first row or column.
    pub fn step(&self, direction: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row: usize = self.row.checked_add_signed(dr * steps as isize)?;
        let col: usize = self.col.checked_add_signed(dc * steps as isize)?;
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Grid of letters, stored row by row.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// `width * height` letters in row-major order.
    letters: Vec<u8>,
}

impl Grid {
    /// Create an empty (0x0) grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a grid from its letters in row-major order.
    ///
    /// Only the builder uses it, after all the cells are filled.
    pub(crate) fn from_letters(width: usize, height: usize, letters: Vec<u8>) -> Self {
        debug_assert_eq!(letters.len(), width * height);
        if width == 0 || height == 0 {
            return Self::empty();
        }
        Self {
            width,
            height,
            letters,
        }
    }

    /// Create a grid from a list of rows.
    ///
    /// Letters are converted to uppercase.
    ///
    /// # Errors
    ///
    /// The method returns an error if the rows do not have the same length, or if a cell is not
    /// an ASCII letter or digit.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, WordSeekError> {
        let width: usize = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut letters: Vec<u8> = Vec::with_capacity(width * rows.len());

        for (row, r) in rows.iter().enumerate() {
            let r: &str = r.as_ref();
            let found: usize = r.chars().count();
            if found != width {
                return Err(WordSeekError::RaggedGrid {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, c) in r.chars().enumerate() {
                if !c.is_ascii_alphanumeric() {
                    return Err(WordSeekError::InvalidGridCharacter {
                        row,
                        col,
                        invalid_char: c,
                    });
                }
                letters.push(c.to_ascii_uppercase() as u8);
            }
        }
        Ok(Self::from_letters(width, rows.len(), letters))
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Return the letter at the given position, or None if the position is outside the grid.
    pub fn get(&self, pos: Position) -> Option<u8> {
        if self.contains(pos) {
            Some(self.letters[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    /// Return the grid as a list of `height` strings of `width` letters each.
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        self.letters
            .chunks(self.width)
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect()
    }

    /// Iterate over all the positions, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width: usize = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

impl FromStr for Grid {
    type Err = WordSeekError;

    /// Parse the textual representation of a grid. Surrounding blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        Self::from_rows(&rows)
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = WordSeekError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "cat\nowl\ndog\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(Position::new(1, 2)), Some(b'L'));
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.to_string(), "CAT\nOWL\nDOG");
        assert_eq!(grid.rows(), ["CAT", "OWL", "DOG"]);
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid = "".parse().unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.to_string(), "");
        assert!(grid.rows().is_empty());
        assert_eq!(grid.positions().count(), 0);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        assert_eq!(
            Grid::from_rows(&["ABC", "AB"]),
            Err(WordSeekError::RaggedGrid {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_characters_are_rejected() {
        assert_eq!(
            Grid::from_rows(&["AB", "A?"]),
            Err(WordSeekError::InvalidGridCharacter {
                row: 1,
                col: 1,
                invalid_char: '?'
            })
        );
    }

    #[test]
    fn test_position_step() {
        let p = Position::new(1, 1);
        assert_eq!(p.step(Direction::SE, 2), Some(Position::new(3, 3)));
        assert_eq!(p.step(Direction::NW, 1), Some(Position::new(0, 0)));
        assert_eq!(p.step(Direction::NW, 2), None);
        assert_eq!(p.step(Direction::E, 0), Some(p));
    }

    #[test]
    fn test_serde_uses_rows() {
        let grid: Grid = "AB\nCD".parse().unwrap();
        let json: String = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["AB","CD"]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>(r#"["AB","C"]"#).is_err());
    }
}
