//! Entry point for the fluent hashing API

use super::builder::HashBuilder;
use crate::Algorithm;

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use any algorithm selected at runtime
    #[must_use]
    pub fn algorithm(algorithm: Algorithm) -> HashBuilder {
        HashBuilder::new(algorithm)
    }

    /// Use MD5 (legacy interoperability only)
    #[must_use]
    pub fn md5() -> HashBuilder {
        HashBuilder::new(Algorithm::Md5)
    }

    /// Use SHA-1 (legacy interoperability only)
    #[must_use]
    pub fn sha1() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha1)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha256)
    }

    /// Use SHA-384
    #[must_use]
    pub fn sha384() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha384)
    }

    /// Use SHA-512
    #[must_use]
    pub fn sha512() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha512)
    }

    /// Use SHA3-256
    #[must_use]
    pub fn sha3_256() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha3_256)
    }

    /// Use SHA3-384
    #[must_use]
    pub fn sha3_384() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha3_384)
    }

    /// Use SHA3-512
    #[must_use]
    pub fn sha3_512() -> HashBuilder {
        HashBuilder::new(Algorithm::Sha3_512)
    }

    /// Use BLAKE2b with 64-byte output
    #[must_use]
    pub fn blake2b() -> HashBuilder {
        HashBuilder::new(Algorithm::Blake2b512)
    }
}
