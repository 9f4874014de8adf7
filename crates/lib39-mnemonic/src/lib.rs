//! BIP-39 mnemonic generation and validation.
//!
//! [`MnemonicGenerator`] turns 128-256 bits of entropy into a phrase of 12
//! to 24 words; [`MnemonicValidator`] checks a phrase's words and checksum
//! and recovers the entropy. Both work against any [`WordList`], including
//! the built-in [`Language`] lists.
//!
//! Transient buffers holding entropy or checksum bits are zeroed before
//! they are released.
//!
//! ```no_run
//! use lib39_mnemonic::{Language, MnemonicGenerator, MnemonicValidator};
//!
//! let phrase = MnemonicGenerator::for_language(Language::English)
//!     .create_mnemonic(&[0x80; 16])?;
//! MnemonicValidator::for_language(Language::English).validate(&phrase)?;
//! # Ok::<(), lib39_mnemonic::MnemonicError>(())
//! ```

pub mod generator;
pub mod sorted_index;
pub mod splitter;
pub mod validator;
pub mod word_count;

mod error;

pub use error::MnemonicError;
pub use generator::MnemonicGenerator;
pub use lib39_wordlist::{Language, WordList};
pub use sorted_index::SortedWordIndex;
pub use splitter::PhraseSplitter;
pub use validator::MnemonicValidator;
pub use word_count::WordCount;

/// Result type for mnemonic operations.
pub type Result<T> = std::result::Result<T, MnemonicError>;
