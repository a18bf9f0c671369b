use bytehash::codec;
use bytehash::{digest, hex_digest, uuid_v4, uuid_v4_from, CodecError, HashAlgorithm, UuidGenerator};
use num::BigUint;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const MILLION_A_LENGTH: usize = 1_000_000;

#[test]
fn test_published_vectors() {
    let vectors = [
        (HashAlgorithm::Md5, "", "d41d8cd98f00b204e9800998ecf8427e"),
        (HashAlgorithm::Md5, "abc", "900150983cd24fb0d6963f7d28e17f72"),
        (HashAlgorithm::Sha1, "", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (HashAlgorithm::Sha1, "abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (HashAlgorithm::Sha256, "", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        (HashAlgorithm::Sha256, "abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    ];

    for (algorithm, message, expected) in vectors.iter() {
        assert_eq!(hex_digest(*algorithm, *message).unwrap(), *expected, "{} of {:?}", algorithm, message);
    }
}

#[test]
fn test_million_a() {
    let message = vec![b'a'; MILLION_A_LENGTH];
    assert_eq!(hex_digest(HashAlgorithm::Md5, &message).unwrap(), "7707d6ae4e027c70eea2a935c2296f21");
    assert_eq!(hex_digest(HashAlgorithm::Sha1, &message).unwrap(), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    assert_eq!(
        hex_digest(HashAlgorithm::Sha256, &message).unwrap(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn test_algorithm_by_name() {
    let algorithm: HashAlgorithm = "sha1".parse().unwrap();
    let first = digest(algorithm, "The quick brown fox jumps over the lazy dog").unwrap();
    let second = digest(algorithm, "The quick brown fox jumps over the lazy dog").unwrap();
    assert_eq!(first, second);
    assert_eq!(hex::encode(first), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    assert!("whirlpool".parse::<HashAlgorithm>().is_err());
}

#[test]
fn test_uuid() {
    let uuid = uuid_v4();
    assert_eq!(uuid.len(), 36);
    assert_eq!(&uuid[14..15], "4");

    let random = [0xA5u8; 16];
    assert_eq!(uuid_v4_from(&random), "a5a5a5a5-a5a5-45a5-a5a5-a5a5a5a5a5a5");

    let mut seeded = UuidGenerator::from_rng(SmallRng::seed_from_u64(1));
    let mut reseeded = UuidGenerator::from_rng(SmallRng::seed_from_u64(1));
    assert_eq!(seeded.uuid_v4(), reseeded.uuid_v4());
}

#[test]
fn test_codec_serializes_counter_keys() {
    let mut key = [0u8; 16];
    let offset = codec::write_u64_be(&mut key, 0xDEAD_BEEF, 0).unwrap();
    let offset = codec::write_i64_be(&mut key, -1, offset).unwrap();
    assert_eq!(offset, 16);
    assert_eq!(hex::encode(key), "00000000deadbeefffffffffffffffff");

    assert_eq!(codec::read_u64_be(&key, 0).unwrap(), 0xDEAD_BEEF);
    assert_eq!(codec::read_i64_be(&key, 8).unwrap(), -1);
    assert_eq!(
        codec::read_big_uint_be(&key, 0, 16).unwrap(),
        BigUint::from_bytes_be(&hex::decode("00000000deadbeefffffffffffffffff").unwrap())
    );

    match codec::write_i64_be(&mut key, 1i128 << 63, 0) {
        Err(CodecError::Range { .. }) => {}
        other => panic!("expected a range error, got {:?}", other),
    }
    assert_eq!(codec::read_u64_be(&key, 0).unwrap(), 0xDEAD_BEEF);
}
