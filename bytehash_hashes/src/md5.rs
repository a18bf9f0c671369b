#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use std::fmt;

use bytehash_util::{align_to_u32a_le, u32a_to_bytes_le, Endianness};

use crate::{HashValue, MerkleDamgardHash, BLOCK_LENGTH_BYTES, BLOCK_LENGTH_DOUBLE_WORDS};

/// A running MD5 state of four double-words, named `a` to `d` by RFC 1321.
#[derive(Debug, Copy, Clone)]
pub struct MD5HashState(u32, u32, u32, u32);

/// A finished MD5 hash.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MD5Hash([u32; 4]);

/// bits rotated per round
static ROUND_ROTATION_COUNT: [u32; 64] = [
    07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
    05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
    04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
    06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21];

/// binary floored values of abs(sin(i + 1)) * 2^32 where i is the array index
static MAGIC_SINUS_SCALARS: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391];

impl MerkleDamgardHash for MD5HashState {
    type HashData = MD5Hash;

    const INITIAL: Self = MD5HashState(0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476);

    const OUTPUT_SIZE: usize = 16;

    // MD5 departs from the SHA family and counts the message length little endian
    const LENGTH_ENDIANNESS: Endianness = Endianness::Little;

    /// Compress one block into the state. The block is read as sixteen little endian words.
    fn round_function(&mut self, input: &[u8; BLOCK_LENGTH_BYTES]) {
        let mut input_block = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
        align_to_u32a_le(&mut input_block, input);

        let mut round_state = *self;

        for i in 0..BLOCK_LENGTH_BYTES {
            let (scrambled_data, message_index) = match i {
                0..=15 =>
                    (round_state.3 ^ (round_state.1 & (round_state.2 ^ round_state.3)), i),
                16..=31 =>
                    (round_state.2 ^ (round_state.3 & (round_state.1 ^ round_state.2)), (5 * i + 1) %
                        BLOCK_LENGTH_DOUBLE_WORDS),
                32..=47 =>
                    ((round_state.1 ^ round_state.2 ^ round_state.3), (3 * i + 5) % BLOCK_LENGTH_DOUBLE_WORDS),
                48..=63 =>
                    ((round_state.2 ^ (round_state.1 | !round_state.3)), (7 * i) % BLOCK_LENGTH_DOUBLE_WORDS),
                _ => unreachable!()
            };

            let temp = round_state.3;
            round_state.3 = round_state.2;
            round_state.2 = round_state.1;
            round_state.1 = round_state.1.wrapping_add(
                u32::rotate_left(round_state.0.wrapping_add(scrambled_data)
                                     .wrapping_add(MAGIC_SINUS_SCALARS[i])
                                     .wrapping_add(input_block[message_index]),
                                 ROUND_ROTATION_COUNT[i])
            );
            round_state.0 = temp;
        }

        self.0 = self.0.wrapping_add(round_state.0);
        self.1 = self.1.wrapping_add(round_state.1);
        self.2 = self.2.wrapping_add(round_state.2);
        self.3 = self.3.wrapping_add(round_state.3);
    }

    fn finalize(self) -> MD5Hash {
        MD5Hash([self.0, self.1, self.2, self.3])
    }
}

impl HashValue for MD5Hash {
    /// Generates a raw `[u8; 16]` array from the hash, every word in little endian order.
    fn raw(&self) -> Vec<u8> {
        u32a_to_bytes_le(&self.0)
    }
}

impl fmt::Display for MD5Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The test suite of RFC 1321, appendix A.5
    #[test]
    fn test_rfc_1321_suite() {
        let suite = [
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("a", "0cc175b9c0f1b6a831c399e269772661"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            ("abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
            ("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789", "d174ab98d277d9f5a5611c2c9f419d9f"),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];

        for (message, expected) in suite.iter() {
            assert_eq!(MD5HashState::digest_message(message.as_bytes()).hex(), *expected);
        }
    }

    #[test]
    fn test_display() {
        let hash = MD5HashState::digest_message(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(format!("{}", hash), "9e107d9d372bb6826bd81d3542a419d6");
    }
}
