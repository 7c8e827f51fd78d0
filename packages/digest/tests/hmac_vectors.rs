//! HMAC vectors from RFC 2202 (MD5, SHA-1) and RFC 4231 (SHA-2), plus
//! SHA-3 and BLAKE2b tags cross-checked against independent implementations

use cryypt_digest::{hash, hmac, Algorithm, Digest, Digester, HashError, Hmac, Sha2};
use hex_literal::hex;

const JEFE_MSG: &[u8] = b"what do ya want for nothing?";
const LARGE_KEY_MSG: &[u8] = b"Test Using Larger Than Block-Size Key - Hash Key First";
const LARGE_KEY_AND_DATA_MSG: &[u8] = b"This is a test using a larger than block-size key and a \
larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.";

#[test]
fn test_rfc2202_md5() {
    let cases: [(&[u8], &[u8], [u8; 16]); 3] = [
        (&[0x0b; 16], b"Hi There", hex!("9294727a3638bb1c13f48ef8158bfc9d")),
        (b"Jefe", JEFE_MSG, hex!("750c783e6ab0b503eaa86e310a5db738")),
        (&[0xaa; 80], LARGE_KEY_MSG, hex!("6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd")),
    ];
    for (key, data, expected) in cases {
        assert_eq!(hmac(Algorithm::Md5, key, data).unwrap().as_bytes(), expected);
    }
}

#[test]
fn test_rfc2202_sha1() {
    let cases: [(&[u8], &[u8], [u8; 20]); 3] = [
        (&[0x0b; 20], b"Hi There", hex!("b617318655057264e28bc0b6fb378c8ef146be00")),
        (b"Jefe", JEFE_MSG, hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79")),
        (&[0xaa; 80], LARGE_KEY_MSG, hex!("aa4ae5e15272d00e95705637ce8a3b55ed402112")),
    ];
    for (key, data, expected) in cases {
        assert_eq!(hmac(Algorithm::Sha1, key, data).unwrap().as_bytes(), expected);
    }
}

#[test]
fn test_rfc4231_case_2_all_sha2() {
    let expected: [(Algorithm, &[u8]); 4] = [
        (
            Algorithm::Sha224,
            &hex!("a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44"),
        ),
        (
            Algorithm::Sha256,
            &hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"),
        ),
        (
            Algorithm::Sha384,
            &hex!(
                "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47"
                "e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649"
            ),
        ),
        (
            Algorithm::Sha512,
            &hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
            ),
        ),
    ];
    for (algorithm, tag) in expected {
        assert_eq!(hmac(algorithm, b"Jefe", JEFE_MSG).unwrap().as_bytes(), tag, "{algorithm}");
    }
}

#[test]
fn test_rfc4231_sha256_cases() {
    let key_4: Vec<u8> = (1..=25).collect();
    let cases: [(&[u8], &[u8], [u8; 32]); 5] = [
        (
            &[0x0b; 20],
            b"Hi There",
            hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"),
        ),
        (
            &[0xaa; 20],
            &[0xdd; 50],
            hex!("773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe"),
        ),
        (
            &key_4,
            &[0xcd; 50],
            hex!("82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b"),
        ),
        (
            &[0xaa; 131],
            LARGE_KEY_MSG,
            hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"),
        ),
        (
            &[0xaa; 131],
            LARGE_KEY_AND_DATA_MSG,
            hex!("9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2"),
        ),
    ];
    for (key, data, expected) in cases {
        assert_eq!(hmac(Algorithm::Sha256, key, data).unwrap().as_bytes(), expected);
    }
}

#[test]
fn test_rfc4231_sha512_large_key() {
    let tag = hmac(Algorithm::Sha512, &[0xaa; 131], LARGE_KEY_AND_DATA_MSG).unwrap();
    assert_eq!(
        tag.as_bytes(),
        hex!(
            "e37b6a775dc87dbaa4dfa9f96e5e3ffddebd71f8867289865df5a32d20cdc944"
            "b6022cac3c4982b10d5eeb55c3e4de15134676fb6de0446065c97440fa8c6a58"
        )
    );
}

#[test]
fn test_sponge_and_blake2b_inner_hashes() {
    assert_eq!(
        hmac(Algorithm::Sha3_256, b"Jefe", JEFE_MSG).unwrap().as_bytes(),
        hex!("c7d4072e788877ae3596bbb0da73b887c9171f93095b294ae857fbe2645e1ba5")
    );
    assert_eq!(
        hmac(Algorithm::Sha3_512, b"Jefe", JEFE_MSG).unwrap().as_bytes(),
        hex!(
            "5a4bfeab6166427c7a3647b747292b8384537cdb89afb3bf5665e4c5e709350b"
            "287baec921fd7ca0ee7a0c31d022a95e1fc92ba9d77df883960275beb4e62024"
        )
    );
    assert_eq!(
        hmac(Algorithm::Blake2b512, b"Jefe", JEFE_MSG).unwrap().as_bytes(),
        hex!(
            "6ff884f8ddc2a6586b3c98a4cd6ebdf14ec10204b6710073eb5865ade37a2643"
            "b8807c1335d107ecdb9ffeaeb6828c4625ba172c66379efcd222c2de11727ab4"
        )
    );
}

#[test]
fn test_long_key_equals_prehashed_key() {
    for algorithm in Algorithm::ALL {
        let long_key = vec![0x5a; algorithm.block_size() + 17];
        let prehashed = hash(&long_key, algorithm);
        assert_eq!(
            hmac(algorithm, &long_key, b"payload").unwrap(),
            hmac(algorithm, prehashed.as_bytes(), b"payload").unwrap(),
            "{algorithm}"
        );
    }
}

#[test]
fn test_block_sized_key_is_not_hashed() {
    let key = [0x11; 64];
    let prehashed = hash(&key, Algorithm::Sha256);
    assert_ne!(
        hmac(Algorithm::Sha256, &key, b"payload").unwrap(),
        hmac(Algorithm::Sha256, prehashed.as_bytes(), b"payload").unwrap()
    );
}

#[test]
fn test_hmac_is_a_uniform_digester() {
    let mut mac: Box<dyn Digester> = Box::new(Hmac::new(Sha2::sha384(), b"key").unwrap());
    assert_eq!(mac.digest_length(), 48);
    assert_eq!(mac.block_size(), 128);
    mac.update(b"data");
    assert_eq!(mac.finalize(), hmac(Algorithm::Sha384, b"key", b"data").unwrap());
}

/// A digester whose block is shorter than its output
#[derive(Clone, Default)]
struct Narrow;

impl Digester for Narrow {
    fn reset(&mut self) {}
    fn update(&mut self, _data: &[u8]) {}
    fn finalize_into(&mut self, out: &mut [u8]) {
        out.fill(0);
    }
    fn digest_length(&self) -> usize {
        32
    }
    fn block_size(&self) -> usize {
        16
    }
}

#[derive(Clone, Default)]
struct ZeroBlock;

impl Digester for ZeroBlock {
    fn reset(&mut self) {}
    fn update(&mut self, _data: &[u8]) {}
    fn finalize_into(&mut self, _out: &mut [u8]) {}
    fn digest_length(&self) -> usize {
        0
    }
    fn block_size(&self) -> usize {
        0
    }
}

#[test]
fn test_unusable_inner_hash_rejected() {
    assert_eq!(
        Hmac::new(Narrow, b"key").err(),
        Some(HashError::InvalidBlockSize {
            block_size: 16,
            digest_size: 32,
        })
    );
    assert!(matches!(
        Hmac::<ZeroBlock>::with_key(b"key"),
        Err(HashError::InvalidBlockSize { block_size: 0, .. })
    ));
}

#[test]
fn test_tag_verification_round_trip() {
    let tag: Digest = hmac(Algorithm::Sha256, b"k", b"m").unwrap();
    let mut mac = Hmac::new(Sha2::sha256(), b"k").unwrap();
    assert!(mac.verify(b"m", tag.as_bytes()));
    assert!(!mac.verify(b"m", &tag.as_bytes()[..31]));
}
