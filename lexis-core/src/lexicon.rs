//! Exclusion lists.
//!
//! A [`Lexicon`] holds the ignored or known words. Lookups are exact,
//! case-sensitive string equality: entries are compared against the
//! already-lowercased tokens as written, so a capitalized entry never
//! matches.

use lexis_types::WordList;
use rustc_hash::FxHashSet;

/// Iterates over the lines of a list file.
///
/// Splits on `\n`, strips one trailing `\r` per line and skips empty lines.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
}

/// Set of words used to filter extracted tokens.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<Box<str>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a newline-delimited word list.
    pub fn parse(text: &str) -> Self {
        lines(text).collect()
    }

    /// Adds a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            return false;
        }
        self.words.insert(word.into())
    }

    /// Returns `true` if `word` is in the lexicon.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the lexicon is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words as a sorted list, e.g. for writing back to disk.
    pub fn to_word_list(&self) -> WordList {
        WordList::from_unsorted(self.words.iter().map(|w| w.to_string()))
    }
}

impl<'a> FromIterator<&'a str> for Lexicon {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for word in iter {
            lexicon.insert(word);
        }
        lexicon
    }
}

impl From<&WordList> for Lexicon {
    fn from(list: &WordList) -> Self {
        list.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_strips_cr_and_blank_lines() {
        let out: Vec<_> = lines("uno\r\n\r\ndos\n\ntres").collect();
        assert_eq!(out, ["uno", "dos", "tres"]);
    }

    #[test]
    fn lines_keeps_inner_whitespace() {
        let out: Vec<_> = lines(" a \n\tb").collect();
        assert_eq!(out, [" a ", "\tb"]);
    }

    #[test]
    fn parse_dedups() {
        let lex = Lexicon::parse("gato\nperro\ngato\n");
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("gato"));
        assert!(lex.contains("perro"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let lex = Lexicon::parse("Gato");
        assert!(lex.contains("Gato"));
        assert!(!lex.contains("gato"));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut lex = Lexicon::new();
        assert!(lex.insert("casa"));
        assert!(!lex.insert("casa"));
    }

    #[test]
    fn empty_text_is_empty_lexicon() {
        assert!(Lexicon::parse("").is_empty());
        assert!(Lexicon::parse("\n\r\n").is_empty());
    }

    #[test]
    fn to_word_list_is_sorted() {
        let lex = Lexicon::parse("perro\ncasa\ngato");
        assert_eq!(lex.to_word_list().as_slice(), ["casa", "gato", "perro"]);
    }
}
