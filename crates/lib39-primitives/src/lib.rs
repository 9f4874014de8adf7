//! Low-level building blocks for BIP-39 mnemonic conversion.
//!
//! This crate provides the pieces the mnemonic layer is assembled from:
//! - SHA-256 digests used for the mnemonic checksum
//! - Big-endian 11-bit packing and unpacking over byte buffers
//! - Hex decoding of entropy with character-level error reporting

pub mod hash;
pub mod bits;
pub mod encoding;

mod error;
pub use error::PrimitivesError;
