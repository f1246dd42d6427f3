//! Streaming line tokenizer.
//!
//! Second stage of the pipeline: takes the normalizer's output, where every
//! word sits on its own line, and emits each non-empty line as a token.
//!
//! ```ignore
//! "hola\n\nmundo\n" -> "hola", "mundo"
//! ```
//!
//! Tokens are slices of the input, so tokenizing allocates nothing. Empty
//! lines (produced by whitespace runs or by stripped punctuation) are skipped.
//! Every non-empty line is emitted, however many there are.

use core::str;
use memchr::memchr_iter;

/// Splits normalized text on `\n`.
///
/// ## Example
///
/// ```
/// use lexis_core::analyzer::tokenizer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer::new().tokenize("uno\n\ndos\ntres", |text| words.push(text));
///
/// assert_eq!(words, ["uno", "dos", "tres"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits each non-empty line in order.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str),
    {
        let bytes = normalized.as_bytes();
        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;

        for i in memchr_iter(b'\n', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8 and `\n` (0x0A) is never a
                // continuation byte, so `bytes[start..i]` is a valid subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariant as above, `start` follows a `\n` byte.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text);
        }
    }

    /// Number of tokens `tokenize` would emit.
    pub fn count(&self, normalized: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(normalized, |_| n += 1);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<&str> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text| out.push(text));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hola"), ["hola"]);
    }

    #[test]
    fn two_words_in_order() {
        assert_eq!(collect("hola\nmundo"), ["hola", "mundo"]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("\n").is_empty());
        assert!(collect("\n\n\n").is_empty());
    }

    #[test]
    fn empty_lines_skipped() {
        assert_eq!(collect("\n\nuno\n\n\ndos\n"), ["uno", "dos"]);
    }

    #[test]
    fn duplicates_are_emitted() {
        assert_eq!(collect("a\nb\na"), ["a", "b", "a"]);
    }

    #[test]
    fn multibyte_tokens_intact() {
        assert_eq!(collect("café\nniño\n日本語"), ["café", "niño", "日本語"]);
    }

    #[test]
    fn spaces_are_not_separators() {
        // The normalizer has already turned whitespace into line breaks
        assert_eq!(collect("a b"), ["a b"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hola\nmundo");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn every_line_of_a_large_input_is_emitted() {
        let n = 200_000usize;
        let input = "w\n".repeat(n);
        let mut last = None;
        let mut seen = 0usize;
        Tokenizer::new().tokenize(&input, |text| {
            seen += 1;
            last = Some(text);
        });
        assert_eq!(seen, n);
        assert_eq!(last, Some("w"));
    }

    #[test]
    fn count_matches_emitted() {
        assert_eq!(Tokenizer::new().count("uno\n\ndos\ntres\n"), 3);
        assert_eq!(Tokenizer::new().count(""), 0);
    }
}
