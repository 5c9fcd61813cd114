//! Word lists and the working corpus
//!
//! Provides embedded word lists compiled into the binary, a file loader for
//! custom lists, and the [`Corpus`] value assembled from a common and an
//! uncommon subset.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, UNCOMMON, UNCOMMON_COUNT};

use crate::core::Word;
use loader::words_from_slice;

/// The working word corpus
///
/// Built once at startup from the union of the common and uncommon lists,
/// deduplicated and sorted lexicographically so that iteration order - and
/// with it every tie-break downstream - is deterministic. Immutable after
/// construction; components borrow it rather than sharing mutable state.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    common: Vec<Word>,
}

impl Corpus {
    /// Assemble a corpus from the two subsets
    ///
    /// The subsets may overlap; the union is deduplicated. The common
    /// subset is retained as a distinguished value (a latent extension
    /// point for answer weighting - no algorithm consumes it yet).
    #[must_use]
    pub fn new(common: Vec<Word>, uncommon: Vec<Word>) -> Self {
        let mut words: Vec<Word> = common.iter().cloned().chain(uncommon).collect();
        words.sort();
        words.dedup();

        Self { words, common }
    }

    /// Corpus from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(COMMON), words_from_slice(UNCOMMON))
    }

    /// All corpus words, sorted lexicographically
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The distinguished common subset
    #[must_use]
    pub fn common(&self) -> &[Word] {
        &self.common
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words
            .binary_search_by(|word| word.text().cmp(text))
            .ok()
            .map(|index| &self.words[index])
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.find(word.text()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn common_count_matches_const() {
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn uncommon_count_matches_const() {
        assert_eq!(UNCOMMON.len(), UNCOMMON_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in COMMON.iter().chain(UNCOMMON) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn corpus_is_sorted_and_unique() {
        let corpus = Corpus::embedded();

        for pair in corpus.words().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn corpus_union_deduplicates_overlap() {
        let common = words(&["crane", "slate"]);
        let uncommon = words(&["slate", "irate"]);

        let corpus = Corpus::new(common, uncommon);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.common().len(), 2);
    }

    #[test]
    fn corpus_contains_both_subsets() {
        let corpus = Corpus::embedded();

        assert!(
            corpus.len() <= COMMON.len() + UNCOMMON.len(),
            "union cannot exceed sum of subsets"
        );
        for text in ["about", "lares", "zonal"] {
            assert!(corpus.find(text).is_some(), "'{text}' missing from corpus");
        }
    }

    #[test]
    fn find_misses_absent_words() {
        let corpus = Corpus::new(words(&["crane"]), vec![]);

        assert!(corpus.find("crane").is_some());
        assert!(corpus.find("slate").is_none());
    }
}
