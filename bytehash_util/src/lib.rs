//! Byte-level utilities shared by the hash engines, and an integer codec that converts between raw byte
//! buffers and fixed- or extended-width integers with explicit endianness.

pub mod codec;
pub mod error;

pub use error::{CodecError, Result};

/// Byte order of a multi-byte integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    /// most significant byte first
    Big,
    /// least significant byte first
    Little,
}

/// Copies the ``source`` array to the ``dest`` array, reading every four bytes as a little endian integer. Bytes
/// beyond ``4 * dest.len()`` are ignored.
///
/// # Panics
/// Panics if ``source`` holds fewer than ``4 * dest.len()`` bytes.
pub fn align_to_u32a_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Copies the ``source`` array to the ``dest`` array, reading every four bytes as a big endian integer. Bytes
/// beyond ``4 * dest.len()`` are ignored.
///
/// # Panics
/// Panics if ``source`` holds fewer than ``4 * dest.len()`` bytes.
pub fn align_to_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Serializes a slice of double-words into bytes, emitting every word least significant byte first.
pub fn u32a_to_bytes_le(source: &[u32]) -> Vec<u8> {
    source.iter().flat_map(|word| word.to_le_bytes().to_vec()).collect()
}

/// Serializes a slice of double-words into bytes, emitting every word most significant byte first.
pub fn u32a_to_bytes_be(source: &[u32]) -> Vec<u8> {
    source.iter().flat_map(|word| word.to_be_bytes().to_vec()).collect()
}
