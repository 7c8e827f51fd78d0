//! Algorithm selection and enum dispatch over every concrete digester

use crate::blake2b::{Blake2b, Blake2bVariant};
use crate::md::{Md4, Md5, Sha1};
use crate::sha2::{Sha2, Sha2Variant};
use crate::sha3::{Sha3, Sha3Variant};
use crate::{Digest, Digester, HashError, Hmac, Pbkdf2, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Every hash algorithm the crate implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// MD4 (RFC 1320), legacy only
    #[serde(rename = "md4")]
    Md4,
    /// MD5 (RFC 1321), legacy only
    #[serde(rename = "md5")]
    Md5,
    /// SHA-1 (FIPS 180-4), legacy only
    #[serde(rename = "sha1")]
    Sha1,
    /// SHA-224
    #[serde(rename = "sha224")]
    Sha224,
    /// SHA-256
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA-384
    #[serde(rename = "sha384")]
    Sha384,
    /// SHA-512
    #[serde(rename = "sha512")]
    Sha512,
    /// SHA3-224
    #[serde(rename = "sha3-224")]
    Sha3_224,
    /// SHA3-256
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// SHA3-384
    #[serde(rename = "sha3-384")]
    Sha3_384,
    /// SHA3-512
    #[serde(rename = "sha3-512")]
    Sha3_512,
    /// BLAKE2b with 28-byte output
    #[serde(rename = "blake2b-224")]
    Blake2b224,
    /// BLAKE2b with 32-byte output
    #[serde(rename = "blake2b-256")]
    Blake2b256,
    /// BLAKE2b with 48-byte output
    #[serde(rename = "blake2b-384")]
    Blake2b384,
    /// BLAKE2b with 64-byte output
    #[serde(rename = "blake2b-512")]
    Blake2b512,
}

impl Algorithm {
    /// All algorithms in numeric tag order
    pub const ALL: [Algorithm; 15] = [
        Self::Md4,
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Blake2b224,
        Self::Blake2b256,
        Self::Blake2b384,
        Self::Blake2b512,
    ];

    /// Output length in bytes
    #[must_use]
    pub const fn digest_length(self) -> usize {
        match self {
            Self::Md4 | Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha3_224 | Self::Blake2b224 => 28,
            Self::Sha256 | Self::Sha3_256 | Self::Blake2b256 => 32,
            Self::Sha384 | Self::Sha3_384 | Self::Blake2b384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => 64,
        }
    }

    /// Bytes consumed per compression call (the sponge rate for SHA-3)
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Md4 | Self::Md5 | Self::Sha1 | Self::Sha224 | Self::Sha256 => 64,
            Self::Sha384 | Self::Sha512 => 128,
            Self::Sha3_224 => Sha3Variant::Sha3_224.rate(),
            Self::Sha3_256 => Sha3Variant::Sha3_256.rate(),
            Self::Sha3_384 => Sha3Variant::Sha3_384.rate(),
            Self::Sha3_512 => Sha3Variant::Sha3_512.rate(),
            Self::Blake2b224 | Self::Blake2b256 | Self::Blake2b384 | Self::Blake2b512 => 128,
        }
    }

    /// Conventional display name, e.g. `SHA3-256`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b224 => "BLAKE2b-224",
            Self::Blake2b256 => "BLAKE2b-256",
            Self::Blake2b384 => "BLAKE2b-384",
            Self::Blake2b512 => "BLAKE2b-512",
        }
    }

    /// Numeric tag, the inverse of `TryFrom<u8>`
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Whether the algorithm is only kept for legacy interoperability
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::Md4 | Self::Md5 | Self::Sha1)
    }

    /// Construct a fresh digester for this algorithm
    #[must_use]
    pub fn digester(self) -> AnyDigester {
        match self {
            Self::Md4 => AnyDigester::Md4(Md4::new()),
            Self::Md5 => AnyDigester::Md5(Md5::new()),
            Self::Sha1 => AnyDigester::Sha1(Sha1::new()),
            Self::Sha224 => AnyDigester::Sha2(Sha2::new(Sha2Variant::Sha224)),
            Self::Sha256 => AnyDigester::Sha2(Sha2::new(Sha2Variant::Sha256)),
            Self::Sha384 => AnyDigester::Sha2(Sha2::new(Sha2Variant::Sha384)),
            Self::Sha512 => AnyDigester::Sha2(Sha2::new(Sha2Variant::Sha512)),
            Self::Sha3_224 => AnyDigester::Sha3(Sha3::new(Sha3Variant::Sha3_224)),
            Self::Sha3_256 => AnyDigester::Sha3(Sha3::new(Sha3Variant::Sha3_256)),
            Self::Sha3_384 => AnyDigester::Sha3(Sha3::new(Sha3Variant::Sha3_384)),
            Self::Sha3_512 => AnyDigester::Sha3(Sha3::new(Sha3Variant::Sha3_512)),
            Self::Blake2b224 => AnyDigester::Blake2b(Blake2b::new(Blake2bVariant::Blake2b224)),
            Self::Blake2b256 => AnyDigester::Blake2b(Blake2b::new(Blake2bVariant::Blake2b256)),
            Self::Blake2b384 => AnyDigester::Blake2b(Blake2b::new(Blake2bVariant::Blake2b384)),
            Self::Blake2b512 => AnyDigester::Blake2b(Blake2b::new(Blake2bVariant::Blake2b512)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    /// Case-insensitive; `-` and `_` separators are optional, so `SHA-256`,
    /// `sha256` and `sha_256` all parse. Bare `blake2b` means BLAKE2b-512.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "md4" => Ok(Self::Md4),
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "sha3224" => Ok(Self::Sha3_224),
            "sha3256" => Ok(Self::Sha3_256),
            "sha3384" => Ok(Self::Sha3_384),
            "sha3512" => Ok(Self::Sha3_512),
            "blake2b224" => Ok(Self::Blake2b224),
            "blake2b256" => Ok(Self::Blake2b256),
            "blake2b384" => Ok(Self::Blake2b384),
            "blake2b512" | "blake2b" => Ok(Self::Blake2b512),
            _ => Err(HashError::unsupported(s)),
        }
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = HashError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or_else(|| HashError::unsupported(format!("algorithm tag {tag}")))
    }
}

/// A digester for any [`Algorithm`], chosen at runtime
#[derive(Clone)]
pub enum AnyDigester {
    /// MD4
    Md4(Md4),
    /// MD5
    Md5(Md5),
    /// SHA-1
    Sha1(Sha1),
    /// SHA-224/256/384/512
    Sha2(Sha2),
    /// SHA3-224/256/384/512
    Sha3(Sha3),
    /// BLAKE2b-224/256/384/512
    Blake2b(Blake2b),
}

macro_rules! dispatch {
    ($self:expr, $d:ident => $body:expr) => {
        match $self {
            AnyDigester::Md4($d) => $body,
            AnyDigester::Md5($d) => $body,
            AnyDigester::Sha1($d) => $body,
            AnyDigester::Sha2($d) => $body,
            AnyDigester::Sha3($d) => $body,
            AnyDigester::Blake2b($d) => $body,
        }
    };
}

impl AnyDigester {
    /// The algorithm this digester computes
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Md4(_) => Algorithm::Md4,
            Self::Md5(_) => Algorithm::Md5,
            Self::Sha1(_) => Algorithm::Sha1,
            Self::Sha2(d) => match d.variant() {
                Sha2Variant::Sha224 => Algorithm::Sha224,
                Sha2Variant::Sha256 => Algorithm::Sha256,
                Sha2Variant::Sha384 => Algorithm::Sha384,
                Sha2Variant::Sha512 => Algorithm::Sha512,
            },
            Self::Sha3(d) => match d.variant() {
                Sha3Variant::Sha3_224 => Algorithm::Sha3_224,
                Sha3Variant::Sha3_256 => Algorithm::Sha3_256,
                Sha3Variant::Sha3_384 => Algorithm::Sha3_384,
                Sha3Variant::Sha3_512 => Algorithm::Sha3_512,
            },
            Self::Blake2b(d) => match d.variant() {
                Blake2bVariant::Blake2b224 => Algorithm::Blake2b224,
                Blake2bVariant::Blake2b256 => Algorithm::Blake2b256,
                Blake2bVariant::Blake2b384 => Algorithm::Blake2b384,
                Blake2bVariant::Blake2b512 => Algorithm::Blake2b512,
            },
        }
    }
}

impl Digester for AnyDigester {
    fn reset(&mut self) {
        dispatch!(self, d => d.reset());
    }

    fn update(&mut self, data: &[u8]) {
        dispatch!(self, d => d.update(data));
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        dispatch!(self, d => d.finalize_into(out));
    }

    fn digest_length(&self) -> usize {
        dispatch!(self, d => d.digest_length())
    }

    fn block_size(&self) -> usize {
        dispatch!(self, d => d.block_size())
    }
}

impl Zeroize for AnyDigester {
    fn zeroize(&mut self) {
        dispatch!(self, d => d.zeroize());
    }
}

// Every variant wipes itself when dropped.
impl ZeroizeOnDrop for AnyDigester {}

impl From<Algorithm> for AnyDigester {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.digester()
    }
}

/// Hash `data` in one call.
#[must_use]
pub fn hash(data: &[u8], algorithm: Algorithm) -> Digest {
    let mut digester = algorithm.digester();
    digester.update(data);
    digester.finalize()
}

/// HMAC of `data` under `key` in one call.
///
/// # Errors
///
/// Propagates [`Hmac::new`] configuration errors.
pub fn hmac(algorithm: Algorithm, key: &[u8], data: &[u8]) -> Result<Digest> {
    let mut mac = Hmac::new(algorithm.digester(), key)?;
    mac.update(data);
    Ok(mac.finalize())
}

/// PBKDF2 with HMAC over `algorithm` in one call.
///
/// # Errors
///
/// Propagates [`Pbkdf2::new`] configuration errors.
pub fn pbkdf2(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<Digest> {
    let mut kdf = Pbkdf2::hmac(algorithm.digester(), salt, iterations, dk_len)?;
    kdf.update(password);
    Ok(kdf.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_matches_digester() {
        for algorithm in Algorithm::ALL {
            let digester = algorithm.digester();
            assert_eq!(digester.digest_length(), algorithm.digest_length());
            assert_eq!(digester.block_size(), algorithm.block_size());
            assert_eq!(digester.algorithm(), algorithm);
        }
    }

    #[test]
    fn test_tags_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::try_from(algorithm.tag()), Ok(algorithm));
        }
        assert!(matches!(
            Algorithm::try_from(15),
            Err(HashError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("SHA-256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
        assert_eq!("sha3_512".parse::<Algorithm>(), Ok(Algorithm::Sha3_512));
        assert_eq!("BLAKE2b".parse::<Algorithm>(), Ok(Algorithm::Blake2b512));
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "whirlpool".parse::<Algorithm>(),
            Err(HashError::UnsupportedAlgorithm("whirlpool".to_string()))
        );
    }

    #[test]
    fn test_legacy_flags() {
        let legacy: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_legacy()).collect();
        assert_eq!(legacy, [Algorithm::Md4, Algorithm::Md5, Algorithm::Sha1]);
    }

    #[test]
    fn test_one_shot_hash() {
        assert_eq!(
            hash(b"", Algorithm::Md5).to_hex(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            hash(b"abc", Algorithm::Sha1).to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }
}
