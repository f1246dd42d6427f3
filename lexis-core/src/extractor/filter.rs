//! Set-difference filtering against exclusion lists.

use crate::lexicon::Lexicon;

/// Removes every word present in `lexicon`, preserving order.
///
/// Returns the number of words removed.
#[inline]
pub(crate) fn remove_listed(words: &mut Vec<&str>, lexicon: &Lexicon) -> usize {
    if lexicon.is_empty() {
        return 0;
    }
    let before = words.len();
    words.retain(|w| !lexicon.contains(w));
    before - words.len()
}
