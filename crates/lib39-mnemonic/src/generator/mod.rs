//! Entropy to mnemonic conversion.
//!
//! The entropy is hashed with SHA-256, the leading `ENT / 32` digest bits
//! are appended to it, and the resulting bitstream is cut into 11-bit
//! groups, each naming one word.

use lib39_primitives::bits::{read_next_11, BITS_PER_WORD};
use lib39_primitives::encoding::decode_hex;
use lib39_primitives::hash::sha256;
use lib39_wordlist::{Language, WordList};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::{MnemonicError, WordCount};

/// Turns entropy into mnemonic phrases for one word list.
pub struct MnemonicGenerator<'a> {
    word_list: &'a dyn WordList,
}

impl<'a> MnemonicGenerator<'a> {
    /// Create a generator over `word_list`.
    pub fn new(word_list: &'a dyn WordList) -> Self {
        MnemonicGenerator { word_list }
    }

    /// Create a generator over a built-in language.
    pub fn for_language(language: Language) -> MnemonicGenerator<'static> {
        MnemonicGenerator::new(language.word_list())
    }

    /// Emit the mnemonic for `entropy` piece by piece into `sink`.
    ///
    /// Words and separators are passed in order; concatenating every piece
    /// yields the phrase. Nothing is emitted when the entropy length is
    /// rejected.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28 or 32 bytes.
    /// * `sink` - Receives each word and each separator.
    pub fn create_mnemonic_with<F>(
        &self,
        entropy: &[u8],
        mut sink: F,
    ) -> Result<(), MnemonicError>
    where
        F: FnMut(&str),
    {
        let word_count = WordCount::from_entropy_len(entropy.len()).ok_or(
            MnemonicError::InvalidEntropyLength {
                bits: entropy.len() * 8,
            },
        )?;

        // Checksum is at most 8 bits, so one digest byte after the entropy
        // covers it.
        let mut digest = sha256(entropy);
        let mut entropy_with_checksum = Zeroizing::new(vec![0u8; entropy.len() + 1]);
        entropy_with_checksum[..entropy.len()].copy_from_slice(entropy);
        entropy_with_checksum[entropy.len()] = digest[0];
        digest.zeroize();

        let mut buf = [0u8; 4];
        let separator: &str = self.word_list.separator().encode_utf8(&mut buf);

        for i in 0..word_count.words() {
            if i > 0 {
                sink(separator);
            }
            let index = read_next_11(&entropy_with_checksum, i * BITS_PER_WORD);
            sink(self.word_list.word(index));
        }
        entropy_with_checksum.zeroize();

        tracing::debug!(
            words = word_count.words(),
            entropy_bits = word_count.entropy_bits(),
            checksum_bits = word_count.checksum_bits(),
            "generated mnemonic"
        );
        Ok(())
    }

    /// Build the mnemonic for `entropy` as a single string.
    pub fn create_mnemonic(&self, entropy: &[u8]) -> Result<String, MnemonicError> {
        let mut phrase = String::new();
        self.create_mnemonic_with(entropy, |piece| phrase.push_str(piece))?;
        Ok(phrase)
    }

    /// Emit the mnemonic for hex-encoded entropy into `sink`.
    ///
    /// The length is checked before the characters: an odd number of digits
    /// or a byte count outside the allowed set is `InvalidEntropyLength`,
    /// then the first non-hex character is reported as
    /// `InvalidHexCharacter`. Digits are case-insensitive.
    pub fn create_mnemonic_from_hex_with<F>(
        &self,
        hex: &str,
        sink: F,
    ) -> Result<(), MnemonicError>
    where
        F: FnMut(&str),
    {
        let chars = hex.chars().count();
        if chars % 2 != 0 || WordCount::from_entropy_len(chars / 2).is_none() {
            return Err(MnemonicError::InvalidEntropyLength { bits: chars * 4 });
        }
        let entropy = decode_hex(hex)?;
        self.create_mnemonic_with(&entropy, sink)
    }

    /// Build the mnemonic for hex-encoded entropy as a single string.
    pub fn create_mnemonic_from_hex(&self, hex: &str) -> Result<String, MnemonicError> {
        let mut phrase = String::new();
        self.create_mnemonic_from_hex_with(hex, |piece| phrase.push_str(piece))?;
        Ok(phrase)
    }

    /// Build a mnemonic of `word_count` words from fresh random entropy.
    ///
    /// The entropy buffer is zeroed before returning.
    pub fn generate<R>(&self, word_count: WordCount, rng: &mut R) -> Result<String, MnemonicError>
    where
        R: RngCore + CryptoRng,
    {
        let mut entropy = Zeroizing::new(vec![0u8; word_count.entropy_bytes()]);
        rng.fill_bytes(&mut entropy);
        self.create_mnemonic(&entropy)
    }
}
