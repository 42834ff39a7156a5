/*
word_list.rs

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

//! List of the words to hide in the grid.
//!
//! Words are normalized to uppercase when the list is created.
//! A word is made of ASCII letters and digits only, and duplicated words (after normalization)
//! are dropped, keeping the first occurrence.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::errors::WordSeekError;

/// Ordered set of the words, as supplied by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vec<String>,
}

impl TryFrom<Vec<String>> for WordList {
    type Error = WordSeekError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        WordList::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words
    }
}

/// Normalize a word to uppercase.
///
/// # Errors
///
/// Return [`WordSeekError::InvalidWord`] if the word is empty or if it contains a character other
/// than an ASCII letter or digit.
pub fn normalize_word(word: &str) -> Result<String, WordSeekError> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(WordSeekError::invalid_word(word));
    }
    Ok(word.to_ascii_uppercase())
}

impl WordList {
    /// Create a [`WordList`] object from the provided words.
    ///
    /// # Errors
    ///
    /// The method returns an error if one of the words is invalid. See [`normalize_word`].
    pub fn new<I, S>(words: I) -> Result<Self, WordSeekError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for word in words {
            let w: String = normalize_word(word.as_ref())?;
            if list.contains(&w) {
                debug!("Skipping duplicated word {w}");
                continue;
            }
            list.push(w);
        }
        Ok(Self { words: list })
    }

    /// Load the words from a file.
    ///
    /// The file holds one word per line. Blank lines and lines starting with `#` are skipped.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content: String = fs::read_to_string(path.as_ref())?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Ok(Self::new(words)?)
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in the order they were supplied.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Return the length of the longest word, or 0 for an empty list.
    pub fn longest(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }

    /// Return the number of letters in all the words.
    pub fn total_letters(&self) -> usize {
        self.words.iter().map(String::len).sum()
    }

    /// Return a copy of the words sorted in lexicographic order.
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.clone();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_words_are_normalized_and_deduplicated() {
        let list = WordList::new(["rust", "Crab", "RUST", "c4t"]).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), ["RUST", "CRAB", "C4T"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.longest(), 4);
        assert_eq!(list.total_letters(), 11);
    }

    #[test]
    fn test_invalid_words_are_rejected() {
        assert_eq!(
            WordList::new([""]),
            Err(WordSeekError::InvalidWord {
                word: String::new()
            })
        );
        assert!(WordList::new(["two words"]).is_err());
        assert!(WordList::new(["café"]).is_err());
    }

    #[test]
    fn test_empty_list() {
        let list = WordList::new(Vec::<String>::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.longest(), 0);
        assert!(list.sorted().is_empty());
    }

    #[test]
    fn test_sorted_does_not_change_supply_order() {
        let list = WordList::new(["BBBBB", "AAAAAAAAAAA", "CC"]).unwrap();
        assert_eq!(list.sorted(), ["AAAAAAAAAAA", "BBBBB", "CC"]);
        assert_eq!(list.iter().next(), Some("BBBBB"));
    }

    #[test]
    fn test_load_from_path_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# animals\ncat\n\n  dog  \n#bird\nowl").unwrap();
        let list = WordList::load_from_path(file.path()).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), ["CAT", "DOG", "OWL"]);
    }
}
