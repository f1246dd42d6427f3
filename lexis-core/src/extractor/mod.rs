//! Vocabulary extraction.
//!
//! Runs the full in-memory pipeline over one body of text:
//!
//! ```text
//! raw text -> normalize -> tokenize -> sort + dedup -> - ignored -> - known -> WordList
//! ```
//!
//! Threading:
//! - [`Extractor`] reuses a scratch buffer and takes `&mut self`; it is meant
//!   to be owned by a single thread.

mod api;
mod builder;
mod filter;
mod types;

pub use types::{Extractor, INITIAL_BUFFER_CAPACITY};
