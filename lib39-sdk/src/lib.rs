#![deny(missing_docs)]

//! BIP-39 mnemonic toolkit.
//!
//! Re-exports all lib39 components for convenient single-crate usage.

pub use lib39_mnemonic as mnemonic;
pub use lib39_primitives as primitives;
pub use lib39_wordlist as wordlist;

pub use lib39_mnemonic::{
    Language, MnemonicError, MnemonicGenerator, MnemonicValidator, WordCount, WordList,
};
