//! Mnemonic validation and entropy recovery.
//!
//! A phrase is split into tokens, each token is resolved to its 11-bit
//! index, and the indices are packed back into the entropy-plus-checksum
//! bitstream. The checksum bits are then compared against a fresh SHA-256
//! of the recovered entropy.

use lib39_primitives::bits::{mask_of_first_bits, write_next_11, BITS_PER_WORD};
use lib39_primitives::hash::first_byte_of_sha256;
use lib39_wordlist::{Language, WordList};
use zeroize::{Zeroize, Zeroizing};

use crate::sorted_index::SortedWordIndex;
use crate::splitter::PhraseSplitter;
use crate::{MnemonicError, WordCount};

/// Checks mnemonic phrases against one word list.
///
/// The sorted lookup table is built once at construction and only read
/// afterwards, so a validator can be shared between threads. Every call
/// uses its own scratch buffers.
pub struct MnemonicValidator<'a> {
    index: SortedWordIndex<'a>,
    splitter: PhraseSplitter<'a>,
}

impl<'a> MnemonicValidator<'a> {
    /// Create a validator over `word_list`.
    pub fn new(word_list: &'a dyn WordList) -> Self {
        MnemonicValidator {
            index: SortedWordIndex::new(word_list),
            splitter: PhraseSplitter::new(word_list),
        }
    }

    /// Create a validator over a built-in language.
    pub fn for_language(language: Language) -> MnemonicValidator<'static> {
        MnemonicValidator::new(language.word_list())
    }

    /// Validate `phrase`.
    ///
    /// Fails at the first problem found: whitespace, then word count, then
    /// the leftmost unknown word, then the checksum.
    pub fn validate(&self, phrase: &str) -> Result<(), MnemonicError> {
        self.to_entropy(phrase).map(drop)
    }

    /// Validate `phrase`, treating a checksum mismatch as `Ok(false)`.
    ///
    /// Structural problems (whitespace, word count, unknown words) are
    /// still returned as errors.
    pub fn is_valid(&self, phrase: &str) -> Result<bool, MnemonicError> {
        match self.validate(phrase) {
            Ok(()) => Ok(true),
            Err(MnemonicError::InvalidChecksum) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Validate `phrase` and return the entropy it encodes.
    pub fn to_entropy(&self, phrase: &str) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
        let tokens = Zeroizing::new(self.splitter.split(phrase)?);
        let ms = tokens.len();

        let ent_plus_cs = ms * BITS_PER_WORD;
        let ent = ent_plus_cs * 32 / 33;
        let cs = ent / 32;
        if ent_plus_cs != ent + cs {
            tracing::debug!(words = ms, "rejected mnemonic: word count");
            return Err(MnemonicError::InvalidWordCount(ms));
        }
        // Multiples of three outside 12..=24 also satisfy the split above;
        // the single-byte checksum mask below only holds up to 8 bits.
        WordCount::try_from(ms)?;

        let mut word_indexes = Zeroizing::new(Vec::with_capacity(ms));
        for token in tokens.iter() {
            match self.index.find(token) {
                Ok(i) => word_indexes.push(i),
                Err(e) => {
                    tracing::debug!(words = ms, "rejected mnemonic: unknown word");
                    return Err(e);
                }
            }
        }

        let mut entropy_with_checksum = Zeroizing::new(vec![0u8; (ent_plus_cs + 7) / 8]);
        for (i, &word_index) in word_indexes.iter().enumerate() {
            write_next_11(&mut entropy_with_checksum, word_index, i * BITS_PER_WORD);
        }
        word_indexes.zeroize();

        let entropy_len = entropy_with_checksum.len() - 1;
        let entropy = Zeroizing::new(entropy_with_checksum[..entropy_len].to_vec());
        let last_byte = entropy_with_checksum[entropy_len];
        entropy_with_checksum.zeroize();

        let sha = first_byte_of_sha256(&entropy);
        let mask = mask_of_first_bits(cs);
        if (sha ^ last_byte) & mask != 0 {
            tracing::debug!(words = ms, checksum_bits = cs, "rejected mnemonic: checksum");
            return Err(MnemonicError::InvalidChecksum);
        }

        tracing::trace!(words = ms, entropy_bits = ent, "validated mnemonic");
        Ok(entropy)
    }
}
