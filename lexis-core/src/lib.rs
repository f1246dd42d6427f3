//! Vocabulary extraction for language study.
//!
//! Given a body of foreign-language text, Lexis produces the sorted,
//! deduplicated list of words that are neither ignored nor already known.
//!
//! ```
//! use lexis_core::{Extractor, Lexicon, SpecialChars};
//!
//! let mut extractor = Extractor::with_special_chars(SpecialChars::parse(",\n."));
//! let known = Lexicon::parse("gato");
//! let words = extractor.extract_words("El gato, el perro.", &Lexicon::parse("el"), &known);
//!
//! assert_eq!(words.to_string(), "perro");
//! ```

pub mod analyzer;
pub mod extractor;
pub mod lexicon;
pub mod workspace;

pub use analyzer::{NormalizerConfig, SpecialChars, TextNormalizer, Tokenizer};
pub use extractor::Extractor;
pub use lexicon::Lexicon;
pub use lexis_types::{ExtractStats, LexisError, ListFile, Result, WordList};
pub use workspace::{Inputs, LearnReport, Workspace, WorkspaceConfig};
