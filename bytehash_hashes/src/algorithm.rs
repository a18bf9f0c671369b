//! Selection of a hash algorithm by name and normalization of caller input into bytes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::md5::MD5HashState;
use crate::sha1::SHA1HashState;
use crate::sha256::SHA256HashState;
use crate::{HashError, HashValue, MerkleDamgardHash, Result, BLOCK_LENGTH_BYTES};

/// The hash algorithms offered by this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// The name this algorithm is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Size of the digest in bytes.
    pub fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Md5 => MD5HashState::OUTPUT_SIZE,
            HashAlgorithm::Sha1 => SHA1HashState::OUTPUT_SIZE,
            HashAlgorithm::Sha256 => SHA256HashState::OUTPUT_SIZE,
        }
    }

    /// Size of the blocks the message is compressed in.
    pub fn block_size(self) -> usize {
        BLOCK_LENGTH_BYTES
    }

    /// Digest a complete byte message with this algorithm.
    pub fn digest_bytes(self, input: &[u8]) -> Vec<u8> {
        trace!(algorithm = self.name(), length = input.len(), "digesting message");

        match self {
            HashAlgorithm::Md5 => MD5HashState::digest_message(input).raw(),
            HashAlgorithm::Sha1 => SHA1HashState::digest_message(input).raw(),
            HashAlgorithm::Sha256 => SHA256HashState::digest_message(input).raw(),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            _ => Err(HashError::UnknownAlgorithm(name.to_owned())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input of a hash function. Text is hashed as its UTF-8 encoding.
#[derive(Debug, Copy, Clone)]
pub enum HashInput<'a> {
    /// a raw byte sequence
    Bytes(&'a [u8]),
    /// text that is already valid UTF-8
    Text(&'a str),
    /// text given as UTF-16 code units, as handed over by hosts with UTF-16 strings. Unpaired surrogates cannot
    /// be encoded and are rejected.
    Utf16(&'a [u16]),
}

impl<'a> HashInput<'a> {
    /// Normalize the input into the byte sequence that is digested.
    pub fn to_bytes(&self) -> Result<Cow<'a, [u8]>> {
        match *self {
            HashInput::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            HashInput::Text(text) => Ok(Cow::Borrowed(text.as_bytes())),
            HashInput::Utf16(units) => String::from_utf16(units)
                .map(|text| Cow::Owned(text.into_bytes()))
                .map_err(|err| HashError::Encoding(err.to_string())),
        }
    }
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        HashInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for HashInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        HashInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self {
        HashInput::Text(text)
    }
}

impl<'a> From<&'a String> for HashInput<'a> {
    fn from(text: &'a String) -> Self {
        HashInput::Text(text)
    }
}

impl<'a> From<&'a [u16]> for HashInput<'a> {
    fn from(units: &'a [u16]) -> Self {
        HashInput::Utf16(units)
    }
}

/// Digest ``input`` with ``algorithm``.
///
/// # Returns
/// The 16, 20 or 32 byte digest, or `HashError::Encoding` if the input text cannot be normalized into bytes. No
/// partial digest is ever produced.
pub fn digest<'a, I>(algorithm: HashAlgorithm, input: I) -> Result<Vec<u8>>
where
    I: Into<HashInput<'a>>,
{
    let bytes = input.into().to_bytes()?;
    Ok(algorithm.digest_bytes(&bytes))
}

/// Digest ``input`` with ``algorithm`` and render the digest as lowercase hexadecimal string.
pub fn hex_digest<'a, I>(algorithm: HashAlgorithm, input: I) -> Result<String>
where
    I: Into<HashInput<'a>>,
{
    digest(algorithm, input).map(hex::encode)
}

/// MD5 digest of a byte message
pub fn md5(input: &[u8]) -> Vec<u8> {
    HashAlgorithm::Md5.digest_bytes(input)
}

/// SHA1 digest of a byte message
pub fn sha1(input: &[u8]) -> Vec<u8> {
    HashAlgorithm::Sha1.digest_bytes(input)
}

/// SHA256 digest of a byte message
pub fn sha256(input: &[u8]) -> Vec<u8> {
    HashAlgorithm::Sha256.digest_bytes(input)
}
