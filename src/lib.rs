//! Binary integer codec and hash core. The integer codec converts between byte buffers and fixed- or
//! extended-width integers, the hash engines compute MD5, SHA-1 and SHA-256 digests, and the facade on top derives
//! random version 4 UUIDs.

pub use bytehash_hashes as hashes;
pub use bytehash_util as util;

pub use bytehash_hashes::{
    digest, hex_digest, random_bytes, uuid_v4, uuid_v4_from, HashAlgorithm, HashError, HashInput, UuidGenerator,
};
pub use bytehash_util::{codec, CodecError, Endianness};
