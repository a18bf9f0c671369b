#![allow(clippy::unreadable_literal)]

use std::fmt;

use bytehash_util::{align_to_u32a_be, u32a_to_bytes_be, Endianness};

use crate::{HashValue, MerkleDamgardHash, BLOCK_LENGTH_BYTES, BLOCK_LENGTH_DOUBLE_WORDS};

/// number of compression rounds and words in the expanded message schedule
const ROUND_COUNT: usize = 64;

/// First 32 bits of the fractional parts of the cube roots of the first 64 primes (FIPS 180-2, 4.2.2)
static ROUND_CONSTANTS: [u32; ROUND_COUNT] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// A running SHA256 state of eight double-words, `a` to `h` in this order.
#[derive(Debug, Copy, Clone)]
pub struct SHA256HashState([u32; 8]);

/// A finished SHA256 hash.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SHA256Hash([u32; 8]);

fn big_sigma_0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma_1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn small_sigma_0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn small_sigma_1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

impl MerkleDamgardHash for SHA256HashState {
    type HashData = SHA256Hash;

    /// first 32 bits of the fractional parts of the square roots of the first 8 primes
    const INITIAL: Self = SHA256HashState([
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
    ]);

    const OUTPUT_SIZE: usize = 32;

    const LENGTH_ENDIANNESS: Endianness = Endianness::Big;

    fn round_function(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        let mut schedule = [0_u32; ROUND_COUNT];
        align_to_u32a_be(&mut schedule[0..BLOCK_LENGTH_DOUBLE_WORDS], block);

        for i in BLOCK_LENGTH_DOUBLE_WORDS..ROUND_COUNT {
            schedule[i] = small_sigma_1(schedule[i - 2])
                .wrapping_add(schedule[i - 7])
                .wrapping_add(small_sigma_0(schedule[i - 15]))
                .wrapping_add(schedule[i - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        for (data_word, magic_constant) in schedule.iter().zip(ROUND_CONSTANTS.iter()) {
            let choice = (e & f) ^ (!e & g);
            let majority = (a & b) ^ (a & c) ^ (b & c);

            let temp1 = h
                .wrapping_add(big_sigma_1(e))
                .wrapping_add(choice)
                .wrapping_add(*magic_constant)
                .wrapping_add(*data_word);
            let temp2 = big_sigma_0(a).wrapping_add(majority);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        for (word, round_word) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
            *word = word.wrapping_add(*round_word);
        }
    }

    fn finalize(self) -> SHA256Hash {
        SHA256Hash(self.0)
    }
}

impl HashValue for SHA256Hash {
    /// Generates a raw `[u8; 32]` array from the hash.
    fn raw(&self) -> Vec<u8> {
        u32a_to_bytes_be(&self.0)
    }
}

impl fmt::Display for SHA256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
