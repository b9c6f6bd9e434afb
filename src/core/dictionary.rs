//! Dictionary of accepted words
//!
//! An immutable set of uppercase words with O(1) membership tests on raw bytes,
//! so candidates can be checked without building a `String` first.

use rustc_hash::FxHashSet;

/// Read-only word set shared by every worker of a run
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Box<[u8]>>,
}

impl Dictionary {
    /// Build a dictionary from words in any case
    ///
    /// Entries are trimmed and upper-cased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use tile_solver::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", " Act ", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(b"ACT"));
    /// assert!(!dictionary.contains(b"act"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_ascii_uppercase().into_bytes().into_boxed_slice())
                }
            })
            .collect();

        Self { words }
    }

    /// Check whether `candidate` is a dictionary word
    #[inline]
    #[must_use]
    pub fn contains(&self, candidate: &[u8]) -> bool {
        self.words.contains(candidate)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_normalizes_case() {
        let dictionary = Dictionary::from_words(["listen", "SILENT", "Lints"]);
        assert!(dictionary.contains(b"LISTEN"));
        assert!(dictionary.contains(b"SILENT"));
        assert!(dictionary.contains(b"LINTS"));
        assert!(!dictionary.contains(b"listen"));
    }

    #[test]
    fn from_words_skips_blank_entries() {
        let dictionary = Dictionary::from_words(["", "   ", "CAT", "\tAT\r"]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(b"AT"));
    }

    #[test]
    fn from_words_deduplicates() {
        let dictionary = Dictionary::from_words(["cat", "CAT", "Cat"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains(b"A"));
    }
}
