//! Big-endian bit packing over byte buffers.
//!
//! Mnemonic words are 11-bit groups laid end to end, MSB first, with no
//! regard for byte boundaries. A single 11-bit group therefore touches at
//! most three consecutive bytes, which is what the windowed helpers here
//! exploit.

/// Number of bits carried by one mnemonic word.
pub const BITS_PER_WORD: usize = 11;

const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Write the low 11 bits of `value` into `bytes` starting at `bit_offset`.
///
/// Bits are OR-ed into the buffer, so the destination range is expected to
/// be zero. The caller guarantees `bit_offset + 11 <= bytes.len() * 8`.
///
/// # Arguments
/// * `bytes` - Destination buffer.
/// * `value` - Value to write; only its low 11 bits are used.
/// * `bit_offset` - Offset of the first (most significant) bit.
pub fn write_next_11(bytes: &mut [u8], value: u16, bit_offset: usize) {
    let skip = bit_offset / 8;
    let lower_skip = bit_offset % 8;
    let window = (u32::from(value) & WORD_MASK) << (24 - BITS_PER_WORD - lower_skip);

    bytes[skip] |= (window >> 16) as u8;
    if let Some(b) = bytes.get_mut(skip + 1) {
        *b |= (window >> 8) as u8;
    }
    if let Some(b) = bytes.get_mut(skip + 2) {
        *b |= window as u8;
    }
}

/// Read the 11-bit group starting at `bit_offset`.
///
/// Bytes past the end of the buffer read as zero, so the final group of a
/// tightly sized buffer can be read without padding.
pub fn read_next_11(bytes: &[u8], bit_offset: usize) -> u16 {
    let skip = bit_offset / 8;
    let lower_skip = bit_offset % 8;
    let byte_at = |i: usize| u32::from(bytes.get(i).copied().unwrap_or(0));

    let window = (byte_at(skip) << 16) | (byte_at(skip + 1) << 8) | byte_at(skip + 2);
    ((window >> (24 - BITS_PER_WORD - lower_skip)) & WORD_MASK) as u16
}

/// Read `width` bits starting at `bit_offset`, most significant bit first.
///
/// `width` must be at most 32. Bits past the end of the buffer read as zero.
pub fn read_bits(bytes: &[u8], bit_offset: usize, width: usize) -> u32 {
    debug_assert!(width <= 32, "read_bits supports at most 32 bits");
    (bit_offset..bit_offset + width).fold(0u32, |acc, bit| {
        let byte = bytes.get(bit / 8).copied().unwrap_or(0);
        (acc << 1) | u32::from((byte >> (7 - bit % 8)) & 1)
    })
}

/// Byte with the top `n` bits set, for `n` in `0..=8`.
pub fn mask_of_first_bits(n: usize) -> u8 {
    if n == 0 {
        0
    } else {
        u8::MAX << (8 - n.min(8))
    }
}
