//! Property tests over the whole algorithm set
//!
//! - chunking invariance: any split of the input yields the one-shot digest
//! - reusability: finalize leaves an instance equivalent to a fresh one
//! - hex round-trip and constant-time comparison behavior
//! - reset and drop contracts shared by every digester

use cryypt_digest::{
    constant_time_eq, hash, hex_decode, hex_encode, Algorithm, Digest, Digester, Hmac, Pbkdf2,
};
use proptest::prelude::*;

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    (0..Algorithm::ALL.len()).prop_map(|i| Algorithm::ALL[i])
}

/// Feed `data` in pieces whose sizes cycle through `cuts`.
fn hash_in_pieces(mut digester: impl Digester, data: &[u8], cuts: &[usize]) -> Digest {
    let mut rest = data;
    let mut sizes = cuts.iter().cycle();
    while !rest.is_empty() {
        let size = sizes.next().copied().unwrap_or(1).clamp(1, rest.len());
        let (piece, tail) = rest.split_at(size);
        digester.update(piece);
        rest = tail;
    }
    digester.finalize()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chunking_does_not_change_digest(
        algorithm in any_algorithm(),
        data in proptest::collection::vec(any::<u8>(), 0..=600),
        cuts in proptest::collection::vec(1usize..=200, 1..8),
    ) {
        let expected = hash(&data, algorithm);
        prop_assert_eq!(hash_in_pieces(algorithm.digester(), &data, &cuts), expected);
    }

    #[test]
    fn two_part_split_matches_one_shot(
        algorithm in any_algorithm(),
        data in proptest::collection::vec(any::<u8>(), 0..=400),
        split in any::<usize>(),
    ) {
        let split = split % (data.len() + 1);
        let (a, b) = data.split_at(split);
        let mut digester = algorithm.digester();
        digester.update(a);
        digester.update(b);
        prop_assert_eq!(digester.finalize(), hash(&data, algorithm));
    }

    #[test]
    fn vectored_update_matches_concatenation(
        algorithm in any_algorithm(),
        a in proptest::collection::vec(any::<u8>(), 0..=150),
        b in proptest::collection::vec(any::<u8>(), 0..=150),
        c in proptest::collection::vec(any::<u8>(), 0..=150),
    ) {
        let mut digester = algorithm.digester();
        digester.update_vectored(&[a.as_slice(), b.as_slice(), c.as_slice()]);
        prop_assert_eq!(digester.finalize(), hash(&[a, b, c].concat(), algorithm));
    }

    #[test]
    fn finalize_resets_instance(
        algorithm in any_algorithm(),
        garbage in proptest::collection::vec(any::<u8>(), 0..=300),
        data in proptest::collection::vec(any::<u8>(), 0..=300),
    ) {
        let mut reused = algorithm.digester();
        reused.update(&garbage);
        let _ = reused.finalize();
        reused.update(&data);
        prop_assert_eq!(reused.finalize(), hash(&data, algorithm));
    }

    #[test]
    fn explicit_reset_discards_input(
        algorithm in any_algorithm(),
        garbage in proptest::collection::vec(any::<u8>(), 1..=300),
    ) {
        let mut digester = algorithm.digester();
        digester.update(&garbage);
        digester.reset();
        prop_assert_eq!(digester.finalize(), hash(b"", algorithm));
    }

    #[test]
    fn hmac_chunking_does_not_change_tag(
        algorithm in any_algorithm(),
        key in proptest::collection::vec(any::<u8>(), 0..=200),
        data in proptest::collection::vec(any::<u8>(), 0..=300),
        cuts in proptest::collection::vec(1usize..=64, 1..4),
    ) {
        let expected = cryypt_digest::hmac(algorithm, &key, &data).unwrap();
        let mac = Hmac::new(algorithm.digester(), &key).unwrap();
        prop_assert_eq!(hash_in_pieces(mac, &data, &cuts), expected);
    }

    #[test]
    fn pbkdf2_password_chunking_does_not_change_key(
        password in proptest::collection::vec(any::<u8>(), 1..=80),
        split in any::<usize>(),
    ) {
        let split = split % (password.len() + 1);
        let (a, b) = password.split_at(split);
        let mut kdf = Pbkdf2::hmac(Algorithm::Sha256.digester(), b"salt", 3, 40).unwrap();
        kdf.update(a);
        kdf.update(b);
        let expected = cryypt_digest::pbkdf2(Algorithm::Sha256, &password, b"salt", 3, 40).unwrap();
        prop_assert_eq!(kdf.finalize(), expected);
    }

    #[test]
    fn hex_round_trip(data in proptest::collection::vec(any::<u8>(), 0..=128)) {
        let text = hex_encode(&data);
        prop_assert_eq!(text.len(), data.len() * 2);
        prop_assert_eq!(hex_decode(&text).unwrap(), data.clone());
        prop_assert_eq!(hex_decode(text.to_uppercase()).unwrap(), data);
    }

    #[test]
    fn digest_hex_round_trip(algorithm in any_algorithm(), data in proptest::collection::vec(any::<u8>(), 0..=64)) {
        let digest = hash(&data, algorithm);
        prop_assert_eq!(Digest::from_hex(digest.to_hex()).unwrap(), digest);
    }

    #[test]
    fn constant_time_eq_is_reflexive(algorithm in any_algorithm(), data in proptest::collection::vec(any::<u8>(), 0..=64)) {
        let digest = hash(&data, algorithm);
        prop_assert!(constant_time_eq(digest.as_bytes(), digest.as_bytes()));
        prop_assert!(digest.verify(digest.as_bytes()));
    }

    #[test]
    fn constant_time_eq_detects_single_byte_mutation(
        algorithm in any_algorithm(),
        position in any::<usize>(),
        flip in 1u8..=255,
    ) {
        let digest = hash(b"mutation", algorithm);
        let mut mutated = digest.clone().into_vec();
        let position = position % mutated.len();
        mutated[position] ^= flip;
        prop_assert!(!constant_time_eq(digest.as_bytes(), &mutated));
        prop_assert!(!digest.verify(&mutated));
    }

    #[test]
    fn constant_time_eq_rejects_length_mismatch(
        a in proptest::collection::vec(any::<u8>(), 0..=64),
        extra in proptest::collection::vec(any::<u8>(), 1..=8),
    ) {
        let mut b = a.clone();
        b.extend_from_slice(&extra);
        prop_assert!(!constant_time_eq(&a, &b));
        prop_assert!(!constant_time_eq(&b, &a));
    }
}

#[test]
fn hex_decode_rejects_malformed_input() {
    assert!(hex_decode("abc").is_err());
    assert!(hex_decode("zz").is_err());
    assert!(Digest::from_hex("0g").is_err());
}

#[test]
fn second_finalize_yields_empty_message_digest() {
    for algorithm in Algorithm::ALL {
        let mut digester = algorithm.digester();
        digester.update(b"first message");
        let _ = digester.finalize();
        assert_eq!(digester.finalize(), hash(b"", algorithm), "{algorithm}");

        let mut mac = Hmac::new(algorithm.digester(), b"key").unwrap();
        mac.update(b"first message");
        let _ = mac.finalize();
        let empty_tag = cryypt_digest::hmac(algorithm, b"key", b"").unwrap();
        assert_eq!(mac.finalize(), empty_tag, "HMAC-{algorithm}");

        let mut kdf = Pbkdf2::hmac(algorithm.digester(), b"salt", 2, 24).unwrap();
        kdf.update(b"password");
        let _ = kdf.finalize();
        let empty_key = cryypt_digest::pbkdf2(algorithm, b"", b"salt", 2, 24).unwrap();
        assert_eq!(kdf.finalize(), empty_key, "PBKDF2-{algorithm}");
    }
}

#[test]
#[should_panic(expected = "output buffer length")]
fn short_output_buffer_panics() {
    let mut digester = Algorithm::Sha256.digester();
    let mut out = [0u8; 16];
    digester.finalize_into(&mut out);
}

#[test]
fn digesters_wipe_on_drop() {
    fn assert_wipes<T: zeroize::ZeroizeOnDrop>() {}

    assert_wipes::<cryypt_digest::Md4>();
    assert_wipes::<cryypt_digest::Md5>();
    assert_wipes::<cryypt_digest::Sha1>();
    assert_wipes::<cryypt_digest::Sha2>();
    assert_wipes::<cryypt_digest::Sha3>();
    assert_wipes::<cryypt_digest::Blake2b>();
    assert_wipes::<cryypt_digest::AnyDigester>();
    assert_wipes::<Hmac<cryypt_digest::Sha2>>();
}
