//! Splitting a phrase into word tokens.

use lib39_wordlist::WordList;
use zeroize::Zeroizing;

use crate::MnemonicError;

/// Splits phrases on a word list's separator.
///
/// The phrase is normalized with the list's own rule before splitting, so
/// a separator and its normalized form are interchangeable (for Japanese,
/// the ideographic space and an ASCII space). Exactly one separator must
/// sit between words and none at either end.
pub struct PhraseSplitter<'a> {
    word_list: &'a dyn WordList,
    separator: char,
    normalized_separator: char,
}

impl<'a> PhraseSplitter<'a> {
    /// Create a splitter for `word_list`.
    pub fn new(word_list: &'a dyn WordList) -> Self {
        let separator = word_list.separator();
        let mut buf = [0u8; 4];
        let normalized_separator = word_list
            .normalize(separator.encode_utf8(&mut buf))
            .chars()
            .next()
            .unwrap_or(separator);
        PhraseSplitter {
            word_list,
            separator,
            normalized_separator,
        }
    }

    fn is_separator(&self, c: char) -> bool {
        c == self.separator || c == self.normalized_separator
    }

    /// Split `phrase` into normalized tokens.
    ///
    /// An empty phrase yields no tokens. A leading, trailing or doubled
    /// separator fails with `UnexpectedWhitespace`. The normalized copy of
    /// the phrase, and any tokens collected before an error, are zeroized
    /// on drop.
    pub fn split(&self, phrase: &str) -> Result<Vec<String>, MnemonicError> {
        let normalized = Zeroizing::new(self.word_list.normalize(phrase).into_owned());
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let mut tokens = Zeroizing::new(Vec::<String>::new());
        for token in normalized.split(|c: char| self.is_separator(c)) {
            if token.is_empty() {
                return Err(MnemonicError::UnexpectedWhitespace);
            }
            tokens.push(token.to_string());
        }
        Ok(std::mem::take(&mut *tokens))
    }
}
