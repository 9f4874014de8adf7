//! Word lists for BIP-39 mnemonics.
//!
//! A [`WordList`] maps each 11-bit index to a word and names the separator
//! used between words. Built-in lists for several languages are available
//! through [`Language::word_list`]; their data comes from the `bip39` crate
//! and every entry is stored in NFKD form so that comparisons against user
//! input are stable across composed and decomposed spellings.

use std::borrow::Cow;

pub mod language;
mod normalize;

pub use language::{Language, LanguageWordList, UnknownLanguage};
pub use normalize::normalize_nfkd;

/// Number of entries in every word list.
pub const WORD_LIST_SIZE: usize = 1 << 11;

/// Capability interface for a 2048-word mnemonic word list.
///
/// Implementations are static data and must be safe to share between
/// threads.
pub trait WordList: Send + Sync {
    /// Word at `index`, already in normalized form.
    ///
    /// # Panics
    /// Implementations may panic if `index >= 2048`.
    fn word(&self, index: u16) -> &str;

    /// Separator placed between words when a phrase is generated.
    fn separator(&self) -> char;

    /// Normalization applied to list entries and to user input alike.
    ///
    /// Defaults to NFKD, which also folds the ideographic space into an
    /// ASCII space.
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        normalize_nfkd(text)
    }
}
