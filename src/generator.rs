/*
generator.rs

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

//! Generate word-seek puzzles.
//!
//! A [`word_list::WordList`] object holds the words to hide.
//! The words are normalized to uppercase when the list is created.
//!
//! A [`puzzle::WordSeekPuzzle`] object is the puzzle itself.
//! Creating the object builds the grid in one step, by using a [`grid_builder::GridBuilder`]
//! object:
//!
//! * The grid size is computed from the words, unless the caller provides it.
//!   See [`grid_builder::compute_size`].
//!
//! * Each word is placed along one of the eight [`direction::Direction`] directions.
//!   Words can cross each other when they share the same letter in the crossing cell.
//!   If random attempts fail too many times, then the builder scans the grid for a free run of
//!   cells. If there is none, then an error is returned.
//!
//! * The cells that no word uses receive random letters.
//!
//! The puzzle keeps the [`placement::Placement`] of every word, which is the solution.

pub mod direction;
pub mod grid;
pub mod grid_builder;
pub mod placement;
pub mod puzzle;
pub mod word_list;
