//! The word store: a sorted, fixed-length word list
//!
//! Loaded once per process from a file or the built-in list, then read-only.
//! All words share one length, established by the first word seen; the list
//! is kept sorted so membership checks are a binary search.

use crate::wordlists::{BUILTIN_BLOB, BUILTIN_WORD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum StoreError {
    /// The word file could not be read
    Unreadable { path: String, source: io::Error },
    /// A word's length disagreed with the rest of the file
    InconsistentLength { word: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Failed to open word file {path}: {source}")
            }
            Self::InconsistentLength { word } => {
                write!(f, "Invalid word file: Inconsistent word length: {word}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::InconsistentLength { .. } => None,
        }
    }
}

/// Sorted collection of equal-length lowercase words
///
/// Owns the random number generator used for secret-word selection, so no
/// process-global RNG state is involved.
#[derive(Debug)]
pub struct WordStore {
    words: Vec<String>,
    rng: StdRng,
}

impl WordStore {
    /// Load a word list from a file, one word per line
    ///
    /// Lines are trimmed of surrounding whitespace and lowercased; lines
    /// that are blank after trimming are skipped. The first word establishes
    /// the required length.
    ///
    /// # Errors
    /// Returns `StoreError::Unreadable` if the file cannot be read, or
    /// `StoreError::InconsistentLength` if any word's length differs from
    /// the first word's. A file with no words at all is not an error; it
    /// yields an empty store, which callers must refuse to play with.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StoreError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_lines(&content)
    }

    /// Build a store from line-delimited text
    ///
    /// # Errors
    /// Returns `StoreError::InconsistentLength` on the first word whose
    /// length differs from the first word's.
    pub fn from_lines(content: &str) -> Result<Self, StoreError> {
        let mut words: Vec<String> = Vec::new();
        let mut word_len = 0;

        for line in content.lines() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }

            // All words must be the same length
            if word_len == 0 {
                word_len = word.len();
            }
            if word.len() != word_len {
                return Err(StoreError::InconsistentLength {
                    word: word.to_string(),
                });
            }

            words.push(word.to_lowercase());
        }

        // Keep the list sorted so we can binary search it
        words.sort_unstable();

        Ok(Self::with_words(words))
    }

    /// Build the store from the built-in compiled word list
    ///
    /// The blob is a concatenation of fixed-length words, so it is
    /// consistent by construction and just gets sliced apart.
    #[must_use]
    pub fn builtin() -> Self {
        let mut words: Vec<String> = BUILTIN_BLOB
            .as_bytes()
            .chunks_exact(BUILTIN_WORD_SIZE)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();

        // Generated pre-sorted, but the lookup invariant is cheap to restore
        words.sort_unstable();

        Self::with_words(words)
    }

    fn with_words(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// True if `word` is in the list; case-sensitive, so callers must
    /// lowercase first
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Pick a word uniformly at random, or `None` on an empty store
    pub fn random_word(&mut self) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..self.words.len());
        Some(&self.words[idx])
    }

    /// The shared length of every word, or 0 for an empty store
    #[must_use]
    pub fn word_size(&self) -> usize {
        self.words.first().map_or(0, String::len)
    }

    /// Number of words in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
