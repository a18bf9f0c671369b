//! Conversion between byte buffers and integers or IEEE-754 floats. Every read checks that the requested range
//! lies within the buffer, and every write validates both the value range and the buffer bounds before a single
//! byte is mutated, so a failed write never leaves a partially written value behind.
//!
//! 64-bit values are assembled from and split into two 32-bit halves, the high half covering the first four
//! bytes in big endian order. Integers wider than 64 bits are handled as ``BigUint``.

use num::BigUint;
use tracing::debug;

use crate::{CodecError, Endianness, Result};

/// Minimum number of bytes emitted by `write_big_uint_le`.
const EXTENDED_MIN_BYTES: usize = 8;

/// Widest integer supported by the variable-width functions.
const MAX_VARIABLE_BYTES: usize = 6;

/// Validate that ``value`` lies within ``[min, max]``.
///
/// # Returns
/// `CodecError::Range` describing the violated bounds if the value is outside of the range.
pub fn check_int(value: i128, min: i128, max: i128) -> Result<()> {
    if value < min || value > max {
        debug!(%value, %min, %max, "rejected out of range integer");
        return Err(CodecError::Range { value, min, max });
    }

    Ok(())
}

/// Validate that ``length`` bytes starting at ``offset`` are within a buffer of ``buffer_len`` bytes.
pub fn check_bounds(buffer_len: usize, offset: usize, length: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= buffer_len => Ok(()),
        _ => {
            debug!(offset, length, buffer_len, "rejected access outside of buffer");
            Err(CodecError::OutOfBounds {
                offset,
                required: length,
                available: buffer_len.saturating_sub(offset),
            })
        }
    }
}

fn check_byte_length(byte_length: usize) -> Result<()> {
    if byte_length == 0 || byte_length > MAX_VARIABLE_BYTES {
        return Err(CodecError::InvalidByteLength(byte_length));
    }

    Ok(())
}

/// Range of range-checked extended reads. An empty or inverted range is valid and denotes zero bytes.
fn extended_range(bytes: &[u8], start: usize, end: usize) -> Result<&[u8]> {
    if end > bytes.len() {
        return Err(CodecError::OutOfBounds {
            offset: start,
            required: end.saturating_sub(start),
            available: bytes.len().saturating_sub(start),
        });
    }

    if start >= end {
        return Ok(&bytes[..0]);
    }

    Ok(&bytes[start..end])
}

/// Read the bytes from ``start`` to ``end`` (exclusive) as an unsigned integer of arbitrary width, most
/// significant byte first. An empty range yields zero.
pub fn read_big_uint_be(bytes: &[u8], start: usize, end: usize) -> Result<BigUint> {
    let range = extended_range(bytes, start, end)?;
    Ok(BigUint::from_bytes_be(range))
}

/// Read the bytes from ``start`` to ``end`` (exclusive) as an unsigned integer of arbitrary width, least
/// significant byte first. This is the mirror image of `read_big_uint_be`.
pub fn read_big_uint_le(bytes: &[u8], start: usize, end: usize) -> Result<BigUint> {
    let range = extended_range(bytes, start, end)?;
    Ok(BigUint::from_bytes_le(range))
}

/// Append ``value`` to ``bytes`` as a sequence of base-256 digits, least significant digit first. At least
/// eight bytes are written, the high bytes being zero-padded, and as many more as the magnitude requires.
///
/// # Returns
/// the number of bytes written
pub fn write_big_uint_le(bytes: &mut Vec<u8>, value: &BigUint) -> usize {
    let mut digits = value.to_bytes_le();

    // to_bytes_le renders zero as a single digit, which the padding below absorbs
    if digits.len() < EXTENDED_MIN_BYTES {
        digits.resize(EXTENDED_MIN_BYTES, 0);
    }

    let written = digits.len();
    bytes.append(&mut digits);
    written
}

/// Read one big endian double-word. The caller has validated the bounds.
fn read_u32_be(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

/// Read one little endian double-word. The caller has validated the bounds.
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

/// Reads 8 bytes at ``offset`` as a big endian two's complement integer.
pub fn read_i64_be(bytes: &[u8], offset: usize) -> Result<i64> {
    check_bounds(bytes.len(), offset, 8)?;

    let high = i64::from(read_u32_be(bytes, offset) as i32);
    let low = i64::from(read_u32_be(bytes, offset + 4));
    Ok((high << 32) + low)
}

/// Reads 8 bytes at ``offset`` as a big endian unsigned integer.
pub fn read_u64_be(bytes: &[u8], offset: usize) -> Result<u64> {
    check_bounds(bytes.len(), offset, 8)?;

    let high = u64::from(read_u32_be(bytes, offset));
    let low = u64::from(read_u32_be(bytes, offset + 4));
    Ok((high << 32) + low)
}

/// Reads 8 bytes at ``offset`` as a little endian two's complement integer.
pub fn read_i64_le(bytes: &[u8], offset: usize) -> Result<i64> {
    check_bounds(bytes.len(), offset, 8)?;

    let low = i64::from(read_u32_le(bytes, offset));
    let high = i64::from(read_u32_le(bytes, offset + 4) as i32);
    Ok((high << 32) + low)
}

/// Reads 8 bytes at ``offset`` as a little endian unsigned integer.
pub fn read_u64_le(bytes: &[u8], offset: usize) -> Result<u64> {
    check_bounds(bytes.len(), offset, 8)?;

    let low = u64::from(read_u32_le(bytes, offset));
    let high = u64::from(read_u32_le(bytes, offset + 4));
    Ok((high << 32) + low)
}

/// Reads an unsigned integer of ``byte_length`` bytes (1 to 6) at ``offset``.
pub fn read_uint(bytes: &[u8], offset: usize, byte_length: usize, endianness: Endianness) -> Result<u64> {
    check_byte_length(byte_length)?;
    check_bounds(bytes.len(), offset, byte_length)?;

    let range = &bytes[offset..offset + byte_length];
    let value = match endianness {
        Endianness::Big => range.iter().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)),
        Endianness::Little => range.iter().rev().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)),
    };

    Ok(value)
}

/// Reads a two's complement integer of ``byte_length`` bytes (1 to 6) at ``offset``. The result is sign-extended
/// from the top bit of the most significant byte.
pub fn read_int(bytes: &[u8], offset: usize, byte_length: usize, endianness: Endianness) -> Result<i64> {
    let unsigned = read_uint(bytes, offset, byte_length, endianness)?;

    let unused_bits = 64 - 8 * byte_length as u32;
    Ok(((unsigned << unused_bits) as i64) >> unused_bits)
}

/// Write the 64-bit pattern ``bits`` as two big endian double-words. The caller has validated the bounds.
fn write_u64_halves_be(buffer: &mut [u8], bits: u64, offset: usize) -> usize {
    let high = (bits >> 32) as u32;
    let low = bits as u32;

    buffer[offset..offset + 4].copy_from_slice(&high.to_be_bytes());
    buffer[offset + 4..offset + 8].copy_from_slice(&low.to_be_bytes());
    offset + 8
}

/// Write ``value`` as a big endian two's complement 64-bit integer at ``offset``.
///
/// # Returns
/// The offset after the written integer (``offset + 8``), or a `CodecError::Range` if ``value`` is outside of
/// ``[-2^63, 2^63 - 1]``. On error the buffer is left unchanged.
pub fn write_i64_be(buffer: &mut [u8], value: i128, offset: usize) -> Result<usize> {
    check_int(value, i128::from(i64::MIN), i128::from(i64::MAX))?;
    check_bounds(buffer.len(), offset, 8)?;

    Ok(write_u64_halves_be(buffer, value as i64 as u64, offset))
}

/// Write ``value`` as a big endian unsigned 64-bit integer at ``offset``.
///
/// # Returns
/// The offset after the written integer (``offset + 8``), or a `CodecError::Range` if ``value`` is outside of
/// ``[0, 2^64 - 1]``. On error the buffer is left unchanged.
pub fn write_u64_be(buffer: &mut [u8], value: i128, offset: usize) -> Result<usize> {
    check_int(value, 0, i128::from(u64::MAX))?;
    check_bounds(buffer.len(), offset, 8)?;

    Ok(write_u64_halves_be(buffer, value as u64, offset))
}

/// Write the low ``byte_length`` bytes of ``bits`` most significant byte first. The caller has validated bounds.
fn write_low_bytes_be(buffer: &mut [u8], bits: u64, offset: usize, byte_length: usize) -> usize {
    let encoded = bits.to_be_bytes();
    buffer[offset..offset + byte_length].copy_from_slice(&encoded[8 - byte_length..]);
    offset + byte_length
}

/// Write ``value`` as a big endian two's complement integer of ``byte_length`` bytes (1 to 6) at ``offset``.
pub fn write_int_be(buffer: &mut [u8], value: i64, offset: usize, byte_length: usize) -> Result<usize> {
    check_byte_length(byte_length)?;

    let max = (1i128 << (8 * byte_length - 1)) - 1;
    check_int(i128::from(value), -max - 1, max)?;
    check_bounds(buffer.len(), offset, byte_length)?;

    Ok(write_low_bytes_be(buffer, value as u64, offset, byte_length))
}

/// Write ``value`` as a big endian unsigned integer of ``byte_length`` bytes (1 to 6) at ``offset``.
pub fn write_uint_be(buffer: &mut [u8], value: u64, offset: usize, byte_length: usize) -> Result<usize> {
    check_byte_length(byte_length)?;

    let max = (1i128 << (8 * byte_length)) - 1;
    check_int(i128::from(value), 0, max)?;
    check_bounds(buffer.len(), offset, byte_length)?;

    Ok(write_low_bytes_be(buffer, value, offset, byte_length))
}

/// Reads 4 bytes at ``offset`` as an IEEE-754 single precision float.
pub fn read_f32(bytes: &[u8], offset: usize, endianness: Endianness) -> Result<f32> {
    check_bounds(bytes.len(), offset, 4)?;

    let bits = match endianness {
        Endianness::Big => read_u32_be(bytes, offset),
        Endianness::Little => read_u32_le(bytes, offset),
    };
    Ok(f32::from_bits(bits))
}

/// Reads 8 bytes at ``offset`` as an IEEE-754 double precision float.
pub fn read_f64(bytes: &[u8], offset: usize, endianness: Endianness) -> Result<f64> {
    let bits = match endianness {
        Endianness::Big => read_u64_be(bytes, offset)?,
        Endianness::Little => read_u64_le(bytes, offset)?,
    };
    Ok(f64::from_bits(bits))
}

/// Write ``value`` as an IEEE-754 single precision float at ``offset``.
///
/// # Returns
/// the offset after the written float (``offset + 4``)
pub fn write_f32(buffer: &mut [u8], value: f32, offset: usize, endianness: Endianness) -> Result<usize> {
    check_bounds(buffer.len(), offset, 4)?;

    let encoded = match endianness {
        Endianness::Big => value.to_bits().to_be_bytes(),
        Endianness::Little => value.to_bits().to_le_bytes(),
    };
    buffer[offset..offset + 4].copy_from_slice(&encoded);
    Ok(offset + 4)
}

/// Write ``value`` as an IEEE-754 double precision float at ``offset``.
///
/// # Returns
/// the offset after the written float (``offset + 8``)
pub fn write_f64(buffer: &mut [u8], value: f64, offset: usize, endianness: Endianness) -> Result<usize> {
    check_bounds(buffer.len(), offset, 8)?;

    let encoded = match endianness {
        Endianness::Big => value.to_bits().to_be_bytes(),
        Endianness::Little => value.to_bits().to_le_bytes(),
    };
    buffer[offset..offset + 8].copy_from_slice(&encoded);
    Ok(offset + 8)
}
