/*
direction.rs

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

//! Directions along which words are placed and searched.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// One of the eight compass-aligned unit steps in the grid.
///
/// The declaration order is the enumeration order used by [`Direction::all`], and therefore
/// the order in which the finder tries the directions from a given cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

/// Number of directions.
pub const NUM_DIRECTIONS: usize = 8;

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Direction::N => "N",
            Direction::S => "S",
            Direction::E => "E",
            Direction::W => "W",
            Direction::NE => "NE",
            Direction::NW => "NW",
            Direction::SE => "SE",
            Direction::SW => "SW",
        };
        write!(f, "{name}")
    }
}

impl Direction {
    /// Return the `(row, column)` step of the direction.
    ///
    /// Rows grow downward, so north is `(-1, 0)`.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// Return the eight directions in enumeration order.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..NUM_DIRECTIONS).filter_map(Direction::from_repr)
    }

    /// Return a direction chosen uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Direction {
        Direction::from_repr(rng.random_range(0..NUM_DIRECTIONS)).unwrap_or(Direction::E)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_all_directions_are_distinct_unit_steps() {
        let deltas: HashSet<(isize, isize)> = Direction::all().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), NUM_DIRECTIONS);
        assert!(!deltas.contains(&(0, 0)));
        for (dr, dc) in deltas {
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
        }
    }

    #[test]
    fn test_enumeration_order() {
        let names: Vec<String> = Direction::all().map(|d| d.to_string()).collect();
        assert_eq!(names, ["N", "S", "E", "W", "NE", "NW", "SE", "SW"]);
    }

    #[test]
    fn test_random_covers_every_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Direction> = (0..500).map(|_| Direction::random(&mut rng)).collect();
        assert_eq!(seen.len(), NUM_DIRECTIONS);
    }
}
