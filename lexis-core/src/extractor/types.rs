//! Extractor state.

use crate::analyzer::{NormalizerConfig, SpecialChars, TextNormalizer, Tokenizer};

/// Initial capacity of the normalization buffer.
pub const INITIAL_BUFFER_CAPACITY: usize = 4096;

/// Turns raw text into a list of unfamiliar words.
///
/// Owns the normalizer and a scratch buffer that is reused across calls, so
/// running several extractions with the same special characters only
/// allocates for the results.
#[derive(Debug)]
pub struct Extractor {
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) norm_buf: String,
    /// Number of completed extractions
    pub(crate) runs: u64,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Creates an extractor that strips no special characters.
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Creates an extractor that strips the given special characters.
    pub fn with_special_chars(special_chars: SpecialChars) -> Self {
        Self::with_config(NormalizerConfig { special_chars })
    }

    /// Creates an extractor with a custom normalizer configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config),
            tokenizer: Tokenizer::new(),
            norm_buf: String::with_capacity(INITIAL_BUFFER_CAPACITY),
            runs: 0,
        }
    }

    /// The normalizer used for every extraction.
    #[inline]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Number of completed extractions.
    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }
}
