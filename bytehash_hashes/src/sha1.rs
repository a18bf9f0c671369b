#![allow(clippy::unreadable_literal)]

use std::fmt;

use bytehash_util::{align_to_u32a_be, u32a_to_bytes_be, Endianness};

use crate::{HashValue, MerkleDamgardHash, BLOCK_LENGTH_BYTES, BLOCK_LENGTH_DOUBLE_WORDS};

/// number of words in the expanded message schedule, one per round
const SCHEDULE_LENGTH: usize = 80;

/// A running SHA1 state. It consists out of 5 double-words named `a`, `b`, `c`, `d` and `e`.
#[derive(Debug, Copy, Clone)]
pub struct SHA1HashState {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    e: u32,
}

/// A finished SHA1 hash.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SHA1Hash([u32; 5]);

impl MerkleDamgardHash for SHA1HashState {
    type HashData = SHA1Hash;

    const INITIAL: Self = SHA1HashState {
        a: 0x67452301,
        b: 0xEFCDAB89,
        c: 0x98BADCFE,
        d: 0x10325476,
        e: 0xC3D2E1F0,
    };

    const OUTPUT_SIZE: usize = 20;

    const LENGTH_ENDIANNESS: Endianness = Endianness::Big;

    fn round_function(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        let mut extended_block = [0_u32; SCHEDULE_LENGTH];
        align_to_u32a_be(&mut extended_block[0..BLOCK_LENGTH_DOUBLE_WORDS], block);

        for i in BLOCK_LENGTH_DOUBLE_WORDS..SCHEDULE_LENGTH {
            extended_block[i] = u32::rotate_left(
                extended_block[i - 3]
                    ^ extended_block[i - 8]
                    ^ extended_block[i - 14]
                    ^ extended_block[i - 16],
                1,
            )
        }

        let mut round_state = *self;

        for (i, data_word) in extended_block.iter().enumerate() {
            let (scrambled_data, magic_constant) = match i {
                0..=19 => (
                    (round_state.b & round_state.c) | ((!round_state.b) & round_state.d),
                    0x5A827999,
                ),
                20..=39 => (round_state.b ^ round_state.c ^ round_state.d, 0x6ED9EBA1),
                40..=59 => (
                    (round_state.b & round_state.c)
                        | (round_state.b & round_state.d)
                        | (round_state.c & round_state.d),
                    0x8F1BBCDC,
                ),
                60..=79 => (round_state.b ^ round_state.c ^ round_state.d, 0xCA62C1D6),
                _ => unreachable!(),
            };

            let temp = u32::rotate_left(round_state.a, 5)
                .wrapping_add(scrambled_data)
                .wrapping_add(round_state.e)
                .wrapping_add(magic_constant)
                .wrapping_add(*data_word);
            round_state.e = round_state.d;
            round_state.d = round_state.c;
            round_state.c = u32::rotate_left(round_state.b, 30);
            round_state.b = round_state.a;
            round_state.a = temp;
        }

        self.a = self.a.wrapping_add(round_state.a);
        self.b = self.b.wrapping_add(round_state.b);
        self.c = self.c.wrapping_add(round_state.c);
        self.d = self.d.wrapping_add(round_state.d);
        self.e = self.e.wrapping_add(round_state.e);
    }

    fn finalize(self) -> SHA1Hash {
        SHA1Hash([self.a, self.b, self.c, self.d, self.e])
    }
}

impl HashValue for SHA1Hash {
    /// Generates a raw `[u8; 20]` array from the hash.
    fn raw(&self) -> Vec<u8> {
        u32a_to_bytes_be(&self.0)
    }
}

impl fmt::Display for SHA1Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fips_180_1_vectors() {
        assert_eq!(SHA1HashState::digest_message(b"abc").hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            SHA1HashState::digest_message(b"The quick brown fox jumps over the lazy dog").hex(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
    }

    #[test]
    fn test_million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(SHA1HashState::digest_message(&message).hex(), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    }

    #[test]
    fn test_repeated_digest_is_identical() {
        let first = SHA1HashState::digest_message(b"abc");
        let second = SHA1HashState::digest_message(b"abc");
        assert_eq!(first, second);
    }
}
