use smallvec::SmallVec;

/// ASCII fold: uppercase to lowercase, whitespace to `\n`, everything else
/// unchanged. Matches `char::is_whitespace` on the ASCII range.
const ASCII_FOLD: [u8; 128] = build_ascii_fold();

const fn build_ascii_fold() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0usize;
    while b < 128 {
        table[b] = match b as u8 {
            b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => b'\n',
            c => c.to_ascii_lowercase(),
        };
        b += 1;
    }
    table
}

/// Ordered list of literal strings removed from normalized text.
///
/// Entries are usually single characters (punctuation, digits, quotes) but
/// any non-empty string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialChars {
    entries: SmallVec<[String; 16]>,
}

impl SpecialChars {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a newline-delimited list. A trailing `\r` is stripped from each
    /// line and empty lines are skipped; nothing else is trimmed, so a line
    /// holding a single space is a valid entry.
    pub fn parse(text: &str) -> Self {
        crate::lexicon::lines(text).collect()
    }

    /// Appends an entry. Empty strings are ignored.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !entry.is_empty() {
            self.entries.push(entry);
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing will be stripped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in removal order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// If every entry is exactly one `char`, returns them sorted and
    /// deduplicated.
    fn single_chars(&self) -> Option<SmallVec<[char; 32]>> {
        let mut out = SmallVec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => out.push(c),
                _ => return None,
            }
        }
        out.sort_unstable();
        out.dedup();
        Some(out)
    }
}

impl<S: Into<String>> FromIterator<S> for SpecialChars {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SpecialChars::new();
        for entry in iter {
            set.push(entry);
        }
        set
    }
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Literal strings removed after case folding, in list order.
    pub special_chars: SpecialChars,
}

/// How special characters are removed.
#[derive(Debug, Clone)]
enum Strip {
    /// All entries are single chars: removed during the folding pass.
    Fused(SmallVec<[char; 32]>),
    /// At least one multi-char entry: removed one entry at a time afterwards.
    Sequential,
}

/// Prepares raw text for tokenization.
///
/// Performs the following operations, in order:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Replaces every whitespace character with a single `\n`
/// - Removes every configured special string, in list order
///
/// Runs of whitespace are *not* collapsed; the tokenizer skips the empty
/// lines they produce.
///
/// # Examples
///
/// ```
/// use lexis_core::analyzer::normalizer::{NormalizerConfig, SpecialChars, TextNormalizer};
///
/// let normalizer = TextNormalizer::new(NormalizerConfig {
///     special_chars: SpecialChars::parse(",\n."),
/// });
/// assert_eq!(normalizer.normalize("Hola, Mundo."), "hola\nmundo");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    strip: Strip,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        // Removing distinct single chars commutes, so list order only matters
        // once a multi-char entry is present.
        let strip = match config.special_chars.single_chars() {
            Some(set) => Strip::Fused(set),
            None => Strip::Sequential,
        };
        Self { config, strip }
    }

    /// The special strings this normalizer removes.
    #[inline]
    pub fn special_chars(&self) -> &SpecialChars {
        &self.config.special_chars
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let fused: &[char] = match &self.strip {
            Strip::Fused(set) => set.as_slice(),
            Strip::Sequential => &[],
        };

        if input.is_ascii() {
            for b in input.bytes() {
                push_folded(out, ASCII_FOLD[b as usize] as char, fused);
            }
        } else {
            // Whole-string lowering applies context rules such as final sigma
            // that per-char lowering misses.
            for ch in input.to_lowercase().chars() {
                let folded = if ch.is_whitespace() { '\n' } else { ch };
                push_folded(out, folded, fused);
            }
        }

        if let Strip::Sequential = self.strip {
            for entry in self.config.special_chars.iter() {
                if out.contains(entry) {
                    *out = out.replace(entry, "");
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[inline(always)]
fn push_folded(out: &mut String, c: char, strip: &[char]) {
    if strip.is_empty() || strip.binary_search(&c).is_err() {
        out.push(c);
    }
}
