//! Flat-file I/O boundary.
//!
//! A run reads four newline-delimited UTF-8 files and writes one:
//!
//! | file                | role                        |
//! |---------------------|-----------------------------|
//! | `input.txt`         | raw text                    |
//! | `special-chars.txt` | literal strings to strip    |
//! | `ignored-words.txt` | excluded, not known         |
//! | `known-words.txt`   | excluded, already mastered  |
//! | `output.txt`        | extracted words (written)   |
//!
//! Any failure is returned to the caller; nothing is retried or skipped.

use std::fs;
use std::path::{Path, PathBuf};

use lexis_types::{ExtractStats, LexisError, ListFile, Result, WordList};
use tracing::{debug, info};

use crate::analyzer::SpecialChars;
use crate::extractor::Extractor;
use crate::lexicon::{self, Lexicon};

/// Where the five files live.
///
/// Every path is resolved against `dir`; an absolute override ignores it.
/// With no `dir`, paths are relative to the process working directory.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceConfig {
    /// Base directory.
    pub dir: Option<PathBuf>,
    /// Override for `input.txt`.
    pub input: Option<PathBuf>,
    /// Override for `special-chars.txt`.
    pub special_chars: Option<PathBuf>,
    /// Override for `ignored-words.txt`.
    pub ignored_words: Option<PathBuf>,
    /// Override for `known-words.txt`.
    pub known_words: Option<PathBuf>,
    /// Override for `output.txt`.
    pub output: Option<PathBuf>,
}

impl WorkspaceConfig {
    fn override_for(&self, file: ListFile) -> Option<&Path> {
        match file {
            ListFile::Input => self.input.as_deref(),
            ListFile::SpecialChars => self.special_chars.as_deref(),
            ListFile::IgnoredWords => self.ignored_words.as_deref(),
            ListFile::KnownWords => self.known_words.as_deref(),
            ListFile::Output => self.output.as_deref(),
        }
    }
}

/// Contents of the four input files.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Raw text.
    pub text: String,
    /// Strings stripped before tokenization.
    pub special_chars: SpecialChars,
    /// Words excluded without being known.
    pub ignored: Lexicon,
    /// Words already mastered.
    pub known: Lexicon,
}

/// Outcome of [`Workspace::learn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnReport {
    /// Words in the output file.
    pub output_words: usize,
    /// Words that were not yet known.
    pub added: usize,
    /// Size of the known list after merging.
    pub known_total: usize,
}

/// Resolved file locations plus the operations that use them.
#[derive(Debug, Clone)]
pub struct Workspace {
    paths: [PathBuf; 5],
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&WorkspaceConfig::default())
    }
}

impl Workspace {
    /// Resolves every path from `config`.
    pub fn new(config: &WorkspaceConfig) -> Self {
        let base = config.dir.as_deref().unwrap_or(Path::new(""));
        let paths = ListFile::ALL.map(|file| match config.override_for(file) {
            Some(path) => base.join(path),
            None => base.join(file.default_name()),
        });
        Self { paths }
    }

    /// Path of one of the five files.
    #[inline]
    pub fn path(&self, file: ListFile) -> &Path {
        &self.paths[file as usize]
    }

    /// Reads a whole file as UTF-8.
    pub fn read(&self, file: ListFile) -> Result<String> {
        let path = self.path(file);
        let bytes = fs::read(path).map_err(|source| LexisError::Read {
            kind: file,
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| LexisError::Utf8 {
            kind: file,
            path: path.to_path_buf(),
            source,
        })?;
        debug!(file = %file, path = %path.display(), bytes = text.len(), "read list file");
        Ok(text)
    }

    /// Reads a file as a sorted word list.
    pub fn read_words(&self, file: ListFile) -> Result<WordList> {
        let text = self.read(file)?;
        Ok(WordList::from_unsorted(lexicon::lines(&text)))
    }

    /// Writes `words` newline-joined, without a trailing newline.
    pub fn write_words(&self, file: ListFile, words: &WordList) -> Result<()> {
        let path = self.path(file);
        fs::write(path, words.to_string()).map_err(|source| LexisError::Write {
            kind: file,
            path: path.to_path_buf(),
            source,
        })?;
        debug!(file = %file, path = %path.display(), words = words.len(), "wrote list file");
        Ok(())
    }

    /// Reads the four input files.
    pub fn load(&self) -> Result<Inputs> {
        let text = self.read(ListFile::Input)?;
        let special_chars = SpecialChars::parse(&self.read(ListFile::SpecialChars)?);
        let ignored = Lexicon::parse(&self.read(ListFile::IgnoredWords)?);
        let known = Lexicon::parse(&self.read(ListFile::KnownWords)?);

        debug!(
            special_chars = special_chars.len(),
            ignored = ignored.len(),
            known = known.len(),
            "loaded inputs"
        );

        Ok(Inputs {
            text,
            special_chars,
            ignored,
            known,
        })
    }

    /// Reads the inputs, extracts the unfamiliar words, writes the output.
    pub fn extract(&self) -> Result<(WordList, ExtractStats)> {
        let inputs = self.load()?;
        let mut extractor = Extractor::with_special_chars(inputs.special_chars);
        let (words, stats) = extractor.extract(&inputs.text, &inputs.ignored, &inputs.known);

        self.write_words(ListFile::Output, &words)?;
        info!(
            %stats,
            output = %self.path(ListFile::Output).display(),
            "extracted vocabulary"
        );
        Ok((words, stats))
    }

    /// Merges the output list into the known list and rewrites it sorted.
    ///
    /// The output file is left untouched.
    pub fn learn(&self) -> Result<LearnReport> {
        let learned = self.read_words(ListFile::Output)?;
        let mut known = self.read_words(ListFile::KnownWords)?;
        let before = known.len();

        known.merge(&learned);
        self.write_words(ListFile::KnownWords, &known)?;

        let report = LearnReport {
            output_words: learned.len(),
            added: known.len() - before,
            known_total: known.len(),
        };
        info!(
            added = report.added,
            known = report.known_total,
            path = %self.path(ListFile::KnownWords).display(),
            "merged output into known words"
        );
        Ok(report)
    }
}
