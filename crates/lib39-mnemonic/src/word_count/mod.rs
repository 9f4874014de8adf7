//! Supported mnemonic sizes.

use crate::MnemonicError;

/// Number of words in a mnemonic, one per supported entropy size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Every supported size, shortest first.
    pub const ALL: [WordCount; 5] = [
        WordCount::Twelve,
        WordCount::Fifteen,
        WordCount::Eighteen,
        WordCount::TwentyOne,
        WordCount::TwentyFour,
    ];

    /// Number of words.
    #[inline]
    pub const fn words(self) -> usize {
        self as usize
    }

    /// Bytes of entropy encoded by this many words.
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    /// Bits of entropy encoded by this many words.
    #[inline]
    pub const fn entropy_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    /// Checksum bits appended to the entropy (always 4 through 8).
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    /// The size matching an entropy length in bytes, if it is supported.
    pub fn from_entropy_len(bytes: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.entropy_bytes() == bytes)
    }
}

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.words() == words)
            .ok_or(MnemonicError::InvalidWordCount(words))
    }
}
