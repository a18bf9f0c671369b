//! This crate contains software-implementations of the MD5, SHA-1 and SHA-256 hash algorithms, a facade that
//! selects one of them by name, and a version 4 UUID generator. All three algorithms share the same
//! Merkle-Damgård driver: the message is cut into 64 byte blocks, the last block is padded with a single 1-bit,
//! zeros and the message length, and every block is compressed into a small running state in order.

use bytehash_util::Endianness;

pub mod algorithm;
pub mod error;
pub mod md5;
pub mod sha1;
pub mod sha256;
pub mod uuid;

pub use algorithm::{digest, hex_digest, md5, sha1, sha256, HashAlgorithm, HashInput};
pub use error::{HashError, Result};
pub use uuid::{random_bytes, uuid_v4, uuid_v4_from, UuidGenerator};

/// the hash block length in bytes, identical for all supported algorithms
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the hash block length in 32 bit integers
pub const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// size of the message length suffix appended during padding
const LENGTH_FIELD_BYTES: usize = 8;

/// Output of a `MerkleDamgardHash`. It is only obtainable once all blocks of a message have been digested.
pub trait HashValue {
    /// Obtain the hash as a raw byte array.
    fn raw(&self) -> Vec<u8>;

    /// Obtain the hash as a lowercase hexadecimal string.
    fn hex(&self) -> String {
        hex::encode(self.raw())
    }
}

/// A hash generated from a Merkle-Damgård construction. Implementors provide their initial state and a
/// compression function, and get message padding and digestion implemented by this trait.
///
/// The implementing type is the running hash state. It is never handed out to callers of `digest_message`,
/// which only ever returns the finalized `Self::HashData`.
pub trait MerkleDamgardHash: Copy {
    /// Final hash value that is obtained through completion of the hash function.
    type HashData: HashValue;

    /// The initial state for any hash of this algorithm. From here, all blocks are applied.
    const INITIAL: Self;

    /// The size of the final hash in bytes.
    const OUTPUT_SIZE: usize;

    /// Byte order of the message length that terminates the padding.
    const LENGTH_ENDIANNESS: Endianness;

    /// Compress one block of input data into the state.
    fn round_function(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]);

    /// Turn the state into the final hash value after the last block was digested.
    fn finalize(self) -> Self::HashData;

    /// Digest a full message of arbitrary size.
    ///
    /// # Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// # Returns
    /// the hash of the complete message
    fn digest_message(input: &[u8]) -> Self::HashData {
        let mut hash_state = Self::INITIAL;
        let mut blocks = input.chunks_exact(BLOCK_LENGTH_BYTES);

        // digest full blocks
        let mut block = [0u8; BLOCK_LENGTH_BYTES];
        for full_block in &mut blocks {
            block.copy_from_slice(full_block);
            hash_state.round_function(&block);
        }

        // pad and digest last block
        hash_state.digest_last_block(blocks.remainder(), input.len() as u64);

        hash_state.finalize()
    }

    /// Apply padding to the last incomplete block and digest it. May digest two blocks, if the padding itself
    /// overflows into a new block.
    ///
    /// # Parameters
    /// - `remaining_data` the tail of the message that did not fill a complete block
    /// - `message_length` the length of the complete message in bytes
    fn digest_last_block(&mut self, remaining_data: &[u8], message_length: u64) {
        debug_assert!(remaining_data.len() < BLOCK_LENGTH_BYTES);

        // only the low 64 bits of the bit length are encoded
        let message_length_bits = message_length.wrapping_mul(8);
        let length_field = match Self::LENGTH_ENDIANNESS {
            Endianness::Big => message_length_bits.to_be_bytes(),
            Endianness::Little => message_length_bits.to_le_bytes(),
        };

        // prepare a zero-padded full-length block
        let mut last_block = [0u8; BLOCK_LENGTH_BYTES];
        last_block[..remaining_data.len()].copy_from_slice(remaining_data);

        // append a single 1-bit to the end of the message
        last_block[remaining_data.len()] = 0x80;

        // if there is not enough space for the message length to be appended, a new block must be created
        if remaining_data.len() + 1 + LENGTH_FIELD_BYTES > BLOCK_LENGTH_BYTES {
            let mut overflow_block = [0u8; BLOCK_LENGTH_BYTES];
            overflow_block[BLOCK_LENGTH_BYTES - LENGTH_FIELD_BYTES..].copy_from_slice(&length_field);

            self.round_function(&last_block);
            self.round_function(&overflow_block);
        } else {
            last_block[BLOCK_LENGTH_BYTES - LENGTH_FIELD_BYTES..].copy_from_slice(&length_field);

            self.round_function(&last_block);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::md5::MD5HashState;
    use super::sha1::SHA1HashState;
    use super::sha256::SHA256HashState;
    use super::*;
    use proptest::prelude::*;

    pub const EMPTY_MESSAGE: &str = "";

    pub const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

    pub const TWO_BLOCK_TEXT: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

    /// Digest messages of ``length`` repeated `a` characters.
    fn digest_a<H: MerkleDamgardHash>(length: usize) -> String {
        H::digest_message(&vec![b'a'; length]).hex()
    }

    #[test]
    fn test_md5() {
        assert_eq!(MD5HashState::digest_message(EMPTY_MESSAGE.as_bytes()).hex(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(MD5HashState::digest_message(SOME_TEXT.as_bytes()).hex(), "9cf653b21b12797c80f769c8a753c360");
        assert_eq!(MD5HashState::digest_message(TWO_BLOCK_TEXT.as_bytes()).hex(), "8215ef0796a20bcaaae116d3876c664a");
    }

    #[test]
    fn test_sha1() {
        assert_eq!(
            SHA1HashState::digest_message(EMPTY_MESSAGE.as_bytes()).hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            SHA1HashState::digest_message(SOME_TEXT.as_bytes()).hex(),
            "931bec5eec465b2e742deafbdcae2681820a4ac9"
        );
        assert_eq!(
            SHA1HashState::digest_message(TWO_BLOCK_TEXT.as_bytes()).hex(),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
    }

    #[test]
    fn test_sha256() {
        assert_eq!(
            SHA256HashState::digest_message(EMPTY_MESSAGE.as_bytes()).hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            SHA256HashState::digest_message(SOME_TEXT.as_bytes()).hex(),
            "cc77cc4784a3be36a1e0b6da76cf57dbbc3b8a8a1241f3680a796224b5ad45b0"
        );
        assert_eq!(
            SHA256HashState::digest_message(TWO_BLOCK_TEXT.as_bytes()).hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_padding_boundaries() {
        // 55 bytes still fit the length field, 56 to 63 bytes need an overflow block
        assert_eq!(digest_a::<MD5HashState>(55), "ef1772b6dff9a122358552954ad0df65");
        assert_eq!(digest_a::<MD5HashState>(56), "3b0c8ac703f828b04c6c197006d17218");
        assert_eq!(digest_a::<MD5HashState>(63), "b06521f39153d618550606be297466d5");
        assert_eq!(digest_a::<MD5HashState>(64), "014842d480b571495a4a0363793f7367");
        assert_eq!(digest_a::<MD5HashState>(65), "c743a45e0d2e6a95cb859adae0248435");

        assert_eq!(digest_a::<SHA1HashState>(55), "c1c8bbdc22796e28c0e15163d20899b65621d65a");
        assert_eq!(digest_a::<SHA1HashState>(56), "c2db330f6083854c99d4b5bfb6e8f29f201be699");
        assert_eq!(digest_a::<SHA1HashState>(63), "03f09f5b158a7a8cdad920bddc29b81c18a551f5");
        assert_eq!(digest_a::<SHA1HashState>(64), "0098ba824b5c16427bd7a1122a5a442a25ec644d");
        assert_eq!(digest_a::<SHA1HashState>(65), "11655326c708d70319be2610e8a57d9a5b959d3b");

        assert_eq!(digest_a::<SHA256HashState>(55), "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318");
        assert_eq!(digest_a::<SHA256HashState>(56), "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a");
        assert_eq!(digest_a::<SHA256HashState>(63), "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34");
        assert_eq!(digest_a::<SHA256HashState>(64), "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb");
        assert_eq!(digest_a::<SHA256HashState>(65), "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0");
    }

    #[test]
    fn test_output_sizes() {
        assert_eq!(MD5HashState::digest_message(b"abc").raw().len(), MD5HashState::OUTPUT_SIZE);
        assert_eq!(SHA1HashState::digest_message(b"abc").raw().len(), SHA1HashState::OUTPUT_SIZE);
        assert_eq!(SHA256HashState::digest_message(b"abc").raw().len(), SHA256HashState::OUTPUT_SIZE);
    }

    fn assert_stable_digest<H: MerkleDamgardHash>(message: &[u8]) -> std::result::Result<(), TestCaseError> {
        let first = H::digest_message(message).raw();
        prop_assert_eq!(&first, &H::digest_message(message).raw());
        prop_assert_eq!(first.len(), H::OUTPUT_SIZE);
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_digest_is_stable_and_sized(message in proptest::collection::vec(any::<u8>(), 0..200)) {
            assert_stable_digest::<MD5HashState>(&message)?;
            assert_stable_digest::<SHA1HashState>(&message)?;
            assert_stable_digest::<SHA256HashState>(&message)?;
        }
    }
}
