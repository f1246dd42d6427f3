//! Public extraction API.

use crate::extractor::builder::unique_tokens;
use crate::extractor::filter::remove_listed;
use crate::extractor::types::Extractor;
use crate::lexicon::Lexicon;
use lexis_types::{ExtractStats, WordList};
use tracing::{debug, trace};

impl Extractor {
    /// Extracts the words of `text` that are in neither exclusion list.
    ///
    /// Steps: normalize, tokenize, sort and deduplicate, drop ignored words,
    /// drop known words. A word in both lists is counted as ignored.
    pub fn extract(
        &mut self,
        text: &str,
        ignored: &Lexicon,
        known: &Lexicon,
    ) -> (WordList, ExtractStats) {
        self.normalizer.normalize_into(text, &mut self.norm_buf);
        trace!(
            input_bytes = text.len(),
            normalized_bytes = self.norm_buf.len(),
            "normalized input"
        );

        let mut stats = ExtractStats::default();
        let mut words = unique_tokens(&self.tokenizer, &self.norm_buf, &mut stats);

        stats.ignored = remove_listed(&mut words, ignored);
        stats.known = remove_listed(&mut words, known);
        stats.emitted = words.len();

        let list = WordList::from_sorted(words.into_iter().map(str::to_owned).collect());
        self.runs += 1;

        debug!(run = self.runs, %stats, "extraction finished");
        (list, stats)
    }

    /// Like [`Extractor::extract`], discarding the statistics.
    #[inline]
    pub fn extract_words(&mut self, text: &str, ignored: &Lexicon, known: &Lexicon) -> WordList {
        self.extract(text, ignored, known).0
    }
}
