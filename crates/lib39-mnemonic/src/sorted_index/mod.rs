//! Word list sorted by word, for lookup and correction hints.

use lib39_wordlist::{WordList, WORD_LIST_SIZE};

use crate::MnemonicError;

/// A word list projected into lexicographic order.
///
/// Each entry keeps its original index. Lookups are binary searches; a miss
/// reports the two entries bracketing where the word would sort.
#[derive(Debug)]
pub struct SortedWordIndex<'a> {
    entries: Vec<(&'a str, u16)>,
}

impl<'a> SortedWordIndex<'a> {
    /// Build the index from every entry of `word_list`.
    pub fn new(word_list: &'a dyn WordList) -> Self {
        let mut entries: Vec<(&'a str, u16)> = (0..WORD_LIST_SIZE as u16)
            .map(|i| (word_list.word(i), i))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        SortedWordIndex { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original index of `token`, which must already be normalized.
    ///
    /// On a miss, fails with `WordNotFound` carrying the neighbours of the
    /// insertion point.
    pub fn find(&self, token: &str) -> Result<u16, MnemonicError> {
        match self.entries.binary_search_by(|(word, _)| word.cmp(&token)) {
            Ok(pos) => Ok(self.entries[pos].1),
            Err(insertion_point) => {
                let (suggestion1, suggestion2) = self.suggestions(insertion_point);
                Err(MnemonicError::WordNotFound {
                    word: token.to_string(),
                    suggestion1: suggestion1.to_string(),
                    suggestion2: suggestion2.to_string(),
                })
            }
        }
    }

    /// The two adjacent entries around `insertion_point`.
    ///
    /// Clamped at both ends: before the first entry yields entries 0 and 1,
    /// past the last yields the final two. `new` always fills the index with
    /// `WORD_LIST_SIZE` entries, so both neighbours exist.
    fn suggestions(&self, insertion_point: usize) -> (&'a str, &'a str) {
        let mut first = insertion_point.saturating_sub(1);
        if first + 1 >= self.entries.len() {
            first = self.entries.len().saturating_sub(2);
        }
        (self.entries[first].0, self.entries[first + 1].0)
    }
}
