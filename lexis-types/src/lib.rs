//! Core types for the Lexis vocabulary extractor.
//!
//! This crate holds the types that cross crate boundaries:
//!
//! - **Word lists**: the sorted, deduplicated result of an extraction
//! - **Statistics**: per-run counters reported by the CLI
//! - **List files**: the five flat files a run reads and writes
//! - **Errors**: I/O failures tagged with the offending path

#![warn(missing_docs)]

use core::fmt;
use std::path::PathBuf;

/// Sorted, deduplicated list of words.
///
/// Ordering is plain `String` ordering, which for UTF-8 is codepoint order.
/// No locale collation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Builds a list from arbitrary words, sorting and deduplicating them.
    ///
    /// Empty strings are dropped.
    pub fn from_unsorted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Wraps a vector the caller has already sorted and deduplicated.
    ///
    /// Panics in debug builds if the invariant does not hold.
    #[inline]
    pub fn from_sorted(words: Vec<String>) -> Self {
        debug_assert!(
            words.windows(2).all(|w| w[0] < w[1]),
            "word list: input not strictly ascending"
        );
        Self { words }
    }

    /// Merges another list into this one, keeping the invariant.
    pub fn merge(&mut self, other: &WordList) {
        if other.is_empty() {
            return;
        }
        self.words.extend(other.words.iter().cloned());
        self.words.sort_unstable();
        self.words.dedup();
    }

    /// Returns `true` if `word` is in the list.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Borrow the underlying words.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Consumes the list, returning the words.
    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

/// Newline-joined, without a trailing newline.
impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in &self.words {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(word)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Counters collected during one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Non-empty tokens produced by the tokenizer, duplicates included.
    pub tokens: usize,
    /// Distinct tokens after deduplication.
    pub unique: usize,
    /// Distinct tokens dropped because they are in the ignored list.
    pub ignored: usize,
    /// Distinct tokens dropped because they are in the known list.
    pub known: usize,
    /// Words written to the output.
    pub emitted: usize,
}

impl fmt::Display for ExtractStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tokens={} unique={} ignored={} known={} new={}",
            self.tokens, self.unique, self.ignored, self.known, self.emitted
        )
    }
}

/// One of the flat files a run touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListFile {
    /// Raw foreign-language text.
    Input,
    /// Literal strings stripped before tokenization.
    SpecialChars,
    /// Words excluded without being counted as known.
    IgnoredWords,
    /// Vocabulary already mastered.
    KnownWords,
    /// The extracted word list.
    Output,
}

impl ListFile {
    /// Every file, in the order a run reads them (output last).
    pub const ALL: [ListFile; 5] = [
        ListFile::Input,
        ListFile::SpecialChars,
        ListFile::IgnoredWords,
        ListFile::KnownWords,
        ListFile::Output,
    ];

    /// File name used when no override is given.
    #[inline]
    pub const fn default_name(self) -> &'static str {
        match self {
            ListFile::Input => "input.txt",
            ListFile::SpecialChars => "special-chars.txt",
            ListFile::IgnoredWords => "ignored-words.txt",
            ListFile::KnownWords => "known-words.txt",
            ListFile::Output => "output.txt",
        }
    }
}

impl fmt::Display for ListFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListFile::Input => "input",
            ListFile::SpecialChars => "special characters",
            ListFile::IgnoredWords => "ignored words",
            ListFile::KnownWords => "known words",
            ListFile::Output => "output",
        };
        f.write_str(label)
    }
}

/// Errors raised while reading or writing list files.
#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    /// The file could not be read.
    #[error("failed to read {kind} file {path}")]
    Read {
        /// Which list the file holds.
        kind: ListFile,
        /// Path that was opened.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid UTF-8.
    #[error("{kind} file {path} is not valid UTF-8")]
    Utf8 {
        /// Which list the file holds.
        kind: ListFile,
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// The file could not be written.
    #[error("failed to write {kind} file {path}")]
    Write {
        /// Which list the file holds.
        kind: ListFile,
        /// Path that was written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for fallible Lexis operations.
pub type Result<T, E = LexisError> = core::result::Result<T, E>;
