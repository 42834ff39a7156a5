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

//! Save a puzzle to a JSON file, and load it back.
//!
//! The saved object is a serialization of the [`WordSeekPuzzle`] object in JSON format by using
//! [`serde`]. The grid is saved as its list of rows, so the file can be read and edited by hand:
//!
//! ```json
//! {
//!   "words": ["CAT", "OWL"],
//!   "grid": ["CATQ", "XOWL", "ZDOG", "TACK"],
//!   "placements": [
//!     {"word": "CAT", "start": {"row": 0, "col": 0}, "direction": "E"},
//!     {"word": "OWL", "start": {"row": 1, "col": 1}, "direction": "E"}
//!   ]
//! }
//! ```
//!
//! When loading, the words and the grid rows are validated again.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::puzzle::WordSeekPuzzle;

/// Object to save and restore a puzzle.
pub struct SaverPuzzle {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object for the given file.
    pub fn new<P: Into<PathBuf>>(save_file: P) -> Self {
        let save_file: PathBuf = save_file.into();
        debug!("Puzzle file: {save_file:?}");
        SaverPuzzle { save_file }
    }

    /// Retrieve the saved [`WordSeekPuzzle`] object.
    ///
    /// Return None if the file does not exist.
    pub fn get_puzzle(&self) -> Result<Option<WordSeekPuzzle>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let puzzle: WordSeekPuzzle = serde_json::from_reader(reader)?;
        Ok(Some(puzzle))
    }

    /// Save the provided [`WordSeekPuzzle`] object.
    pub fn save_puzzle(&self, puzzle: &WordSeekPuzzle) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved puzzle.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::word_list::WordList;
    use std::fs;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let saver = SaverPuzzle::new(dir.path().join("puzzle.json"));
        assert!(saver.get_puzzle().unwrap().is_none());

        let words = WordList::new(["CAT", "OWL", "DOG"]).unwrap();
        let puzzle = WordSeekPuzzle::new(words, None, None).unwrap();
        saver.save_puzzle(&puzzle).unwrap();
        assert_eq!(saver.get_puzzle().unwrap(), Some(puzzle));

        saver.delete_save();
        assert!(saver.get_puzzle().unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.json");
        fs::write(
            &path,
            r#"{"words": ["CAT"], "grid": ["CAT", "CA"], "placements": []}"#,
        )
        .unwrap();
        assert!(SaverPuzzle::new(&path).get_puzzle().is_err());

        fs::write(&path, "not json").unwrap();
        assert!(SaverPuzzle::new(&path).get_puzzle().is_err());
    }
}
