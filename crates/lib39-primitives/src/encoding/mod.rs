//! Hex decoding for entropy input.
//!
//! Unlike a bare `hex::decode`, the error reports the first offending
//! character as the user typed it, including non-ASCII characters that a
//! byte-oriented decoder would mangle.

use zeroize::Zeroizing;

use crate::PrimitivesError;

/// Decode a hex string into bytes.
///
/// Upper- and lower-case digits are accepted interchangeably. The output is
/// wrapped in `Zeroizing` because decoded entropy is secret material.
///
/// # Arguments
/// * `s` - Hex string with an even number of characters.
///
/// # Returns
/// The decoded bytes, `InvalidHexCharacter` naming the first non-hex
/// character, or `InvalidHexLength` for an odd character count.
pub fn decode_hex(s: &str) -> Result<Zeroizing<Vec<u8>>, PrimitivesError> {
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(PrimitivesError::InvalidHexCharacter(c));
    }
    // Every character is ASCII from here on, so byte length == char count.
    hex::decode(s).map(Zeroizing::new).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, .. } => {
            PrimitivesError::InvalidHexCharacter(c)
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            PrimitivesError::InvalidHexLength(s.len())
        }
    })
}
