//! Working word set construction.

use crate::analyzer::Tokenizer;
use lexis_types::ExtractStats;

/// Collects the distinct tokens of `normalized` in codepoint order.
///
/// Updates `stats.tokens` and `stats.unique`.
pub(crate) fn unique_tokens<'n>(
    tokenizer: &Tokenizer,
    normalized: &'n str,
    stats: &mut ExtractStats,
) -> Vec<&'n str> {
    let mut words = Vec::new();
    tokenizer.tokenize(normalized, |text| words.push(text));
    stats.tokens = words.len();

    // `str` ordering is byte order, which for UTF-8 equals codepoint order
    words.sort_unstable();
    words.dedup();
    stats.unique = words.len();

    words
}
