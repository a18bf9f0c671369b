//! Random byte generation and version 4 UUIDs (RFC 4122, section 4.4).
//!
//! The default random source is `SmallRng`, which is fast but **not** cryptographically secure. UUIDs produced here
//! are unique identifiers, not secrets, and must not be used as tokens or keys.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

/// number of random bytes in a UUID
pub const UUID_BYTES: usize = 16;

/// A generator of random bytes and UUIDs drawing from any random source.
#[derive(Debug, Clone)]
pub struct UuidGenerator<R = SmallRng> {
    rng: R,
}

impl UuidGenerator<SmallRng> {
    /// Create a generator with a non-cryptographic random source seeded by the operating system.
    pub fn from_entropy() -> Self {
        debug!("seeding uuid generator from system entropy");
        UuidGenerator { rng: SmallRng::from_entropy() }
    }
}

impl<R: RngCore> UuidGenerator<R> {
    /// Create a generator drawing from ``rng``. Seeded sources make the generated values reproducible.
    pub fn from_rng(rng: R) -> Self {
        UuidGenerator { rng }
    }

    /// Generate ``length`` random bytes. The source is drawn 32 bits at a time and every word is distributed over
    /// four bytes, least significant byte first. Surplus bytes of the last word are discarded.
    pub fn random_bytes(&mut self, length: usize) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(length);

        while bytes.len() < length {
            let word = self.rng.next_u32().to_le_bytes();
            let missing = length - bytes.len();
            bytes.extend_from_slice(&word[..missing.min(word.len())]);
        }

        bytes
    }

    /// Generate a random version 4 UUID.
    pub fn uuid_v4(&mut self) -> String {
        let mut random = [0u8; UUID_BYTES];
        random.copy_from_slice(&self.random_bytes(UUID_BYTES));
        uuid_v4_from(&random)
    }
}

/// Generate ``length`` random bytes from a freshly seeded non-cryptographic source.
pub fn random_bytes(length: usize) -> Vec<u8> {
    UuidGenerator::from_entropy().random_bytes(length)
}

/// Generate a random version 4 UUID from a freshly seeded non-cryptographic source.
pub fn uuid_v4() -> String {
    UuidGenerator::from_entropy().uuid_v4()
}

/// Build a version 4 UUID from the 16 given random bytes. The version nibble and the variant bits overwrite the
/// corresponding random bits, everything else is taken as is, so equal input always yields the same UUID.
///
/// # Returns
/// the UUID in its canonical `8-4-4-4-12` lowercase hexadecimal form
pub fn uuid_v4_from(random: &[u8; UUID_BYTES]) -> String {
    let mut bytes = *random;

    // version 4 in the high nibble of byte 6
    bytes[6] = (bytes[6] & 0x0F) | 0x40;

    // variant 10xx in the top bits of byte 8
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    format!(
        "{}-{}-{}-{}-{}",
        hex::encode(&bytes[0..4]),
        hex::encode(&bytes[4..6]),
        hex::encode(&bytes[6..8]),
        hex::encode(&bytes[8..10]),
        hex::encode(&bytes[10..16])
    )
}
