//! Text analysis pipeline.
//!
//! - **Normalizer**: lowercases, turns whitespace into line breaks, strips
//!   special characters
//! - **Tokenizer**: splits normalized text into non-empty lines

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, SpecialChars, TextNormalizer};
pub use tokenizer::Tokenizer;
