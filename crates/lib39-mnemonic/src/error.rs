//! Mnemonic error types.

use lib39_primitives::PrimitivesError;

/// Errors that can occur while generating or validating a mnemonic.
///
/// Every variant is a deterministic rejection of the input. Only
/// [`MnemonicError::InvalidChecksum`] describes a well-formed phrase with
/// the wrong content; the others mean the input is structurally malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MnemonicError {
    /// Entropy is not 128-256 bits in 32-bit steps.
    #[error("invalid entropy length: {bits} bits, expected 128, 160, 192, 224 or 256")]
    InvalidEntropyLength {
        /// Length of the rejected entropy in bits.
        bits: usize,
    },

    /// Hex input contained a non-hex character.
    #[error("Invalid hex char '{0}'")]
    InvalidHexCharacter(char),

    /// Leading, trailing or doubled separator in a phrase.
    #[error("Unexpected whitespace")]
    UnexpectedWhitespace,

    /// Word count does not split into entropy and checksum bits.
    #[error("Not a correct number of words")]
    InvalidWordCount(usize),

    /// A word is not in the word list.
    #[error(
        "Word not found in word list \"{word}\", \
         suggestions \"{suggestion1}\", \"{suggestion2}\""
    )]
    WordNotFound {
        /// The unrecognised word, normalized.
        word: String,
        /// Closest list entry sorting before `word`.
        suggestion1: String,
        /// Closest list entry sorting after `word`.
        suggestion2: String,
    },

    /// The checksum bits do not match the entropy.
    #[error("Invalid checksum")]
    InvalidChecksum,
}

impl MnemonicError {
    /// True for a checksum mismatch, the one non-structural failure.
    pub fn is_checksum(&self) -> bool {
        matches!(self, MnemonicError::InvalidChecksum)
    }
}

impl From<PrimitivesError> for MnemonicError {
    fn from(e: PrimitivesError) -> Self {
        match e {
            PrimitivesError::InvalidHexCharacter(c) => MnemonicError::InvalidHexCharacter(c),
            PrimitivesError::InvalidHexLength(chars) => {
                MnemonicError::InvalidEntropyLength { bits: chars * 4 }
            }
        }
    }
}
