//! Built-in word lists, one per supported language.
//!
//! The raw 2048-entry tables are supplied by the `bip39` crate. Each list is
//! normalized once on first use and cached for the life of the process.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::{normalize_nfkd, WordList, WORD_LIST_SIZE};

/// Separator used by Japanese phrases (IDEOGRAPHIC SPACE).
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Languages with a built-in word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    English,
    /// Japanese (hiragana), separated by ideographic spaces.
    Japanese,
    /// French.
    French,
    /// Spanish.
    Spanish,
}

/// Error returned when a language name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown word list language: {0}")]
pub struct UnknownLanguage(pub String);

static ENGLISH: OnceLock<LanguageWordList> = OnceLock::new();
static JAPANESE: OnceLock<LanguageWordList> = OnceLock::new();
static FRENCH: OnceLock<LanguageWordList> = OnceLock::new();
static SPANISH: OnceLock<LanguageWordList> = OnceLock::new();

impl Language {
    /// Every built-in language.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Japanese,
        Language::French,
        Language::Spanish,
    ];

    /// Separator placed between generated words.
    pub fn separator(self) -> char {
        match self {
            Language::Japanese => IDEOGRAPHIC_SPACE,
            Language::English | Language::French | Language::Spanish => ' ',
        }
    }

    /// The normalized word list for this language.
    ///
    /// Built on first access and shared process-wide afterwards.
    pub fn word_list(self) -> &'static LanguageWordList {
        let cell = match self {
            Language::English => &ENGLISH,
            Language::Japanese => &JAPANESE,
            Language::French => &FRENCH,
            Language::Spanish => &SPANISH,
        };
        cell.get_or_init(|| LanguageWordList::build(self))
    }

    fn source(self) -> bip39::Language {
        match self {
            Language::English => bip39::Language::English,
            Language::Japanese => bip39::Language::Japanese,
            Language::French => bip39::Language::French,
            Language::Spanish => bip39::Language::Spanish,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Japanese => "japanese",
            Language::French => "french",
            Language::Spanish => "spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parse a language from its English name or ISO 639-1 code,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "japanese" | "ja" | "jp" => Ok(Language::Japanese),
            "french" | "fr" => Ok(Language::French),
            "spanish" | "es" => Ok(Language::Spanish),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// A built-in word list with every entry stored in NFKD form.
#[derive(Debug)]
pub struct LanguageWordList {
    language: Language,
    words: Vec<String>,
}

impl LanguageWordList {
    fn build(language: Language) -> Self {
        let words = language
            .source()
            .word_list()
            .iter()
            .map(|w| normalize_nfkd(w).into_owned())
            .collect::<Vec<_>>();
        debug_assert_eq!(words.len(), WORD_LIST_SIZE);
        LanguageWordList { language, words }
    }

    /// The language this list belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// All words in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Index of `word`, comparing in normalized form.
    ///
    /// This is a linear scan; mnemonic validation uses a sorted index
    /// instead.
    pub fn find_exact(&self, word: &str) -> Option<u16> {
        let word = normalize_nfkd(word);
        self.words
            .iter()
            .position(|w| *w == word)
            .map(|i| i as u16)
    }

    /// Words beginning with `prefix`, in index order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let prefix = normalize_nfkd(prefix);
        self.words()
            .filter(|w| w.starts_with(&*prefix))
            .collect()
    }
}

impl WordList for LanguageWordList {
    fn word(&self, index: u16) -> &str {
        &self.words[usize::from(index)]
    }

    fn separator(&self) -> char {
        self.language.separator()
    }
}
