//! Hash function primitives.
//!
//! The mnemonic checksum is the leading bits of a single SHA-256 over the
//! entropy bytes. The hash is treated as an opaque fixed-size digest by the
//! rest of the workspace.

use sha2::{Digest, Sha256};

/// Size of a SHA-256 digest in bytes.
pub const SHA256_SIZE: usize = 32;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Return the first byte of SHA-256(data).
///
/// Mnemonic checksums never exceed 8 bits, so the first digest byte is all
/// the checksum logic ever needs. The rest of the digest is dropped here.
pub fn first_byte_of_sha256(data: &[u8]) -> u8 {
    sha256(data)[0]
}
