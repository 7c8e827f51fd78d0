//! Message digests, HMAC and PBKDF2 behind one streaming contract
//!
//! Every algorithm implements [`Digester`]: `reset`, `update`, `finalize`
//! and `digest_length` behave identically whether the instance is MD5, a
//! SHA-3 sponge, or PBKDF2 over HMAC-SHA-512. The generic constructions
//! [`Hmac`] and [`Pbkdf2`] compose over any digester.
//!
//! ```
//! use cryypt_digest::{hash, hmac, Algorithm, Digester, Sha3};
//!
//! let digest = hash(b"abc", Algorithm::Sha256);
//! assert_eq!(digest.len(), 32);
//!
//! let mut sha3 = Sha3::sha3_256();
//! sha3.update(b"");
//! assert!(sha3.finalize().to_hex().starts_with("a7ffc6f8"));
//!
//! let tag = hmac(Algorithm::Sha1, b"key", b"message").unwrap();
//! assert_eq!(tag.len(), 20);
//! ```
//!
//! The async builders hash on a tokio runtime:
//!
//! ```no_run
//! # async fn demo() -> cryypt_digest::Result<()> {
//! use cryypt_digest::{Cryypt, Hash, HashPasses};
//!
//! let digest = Hash::sha256().compute(b"hello".to_vec()).await?;
//! let tag = Cryypt::hash().sha512().with_key(b"secret".to_vec()).compute("msg").await?;
//! let key = Hash::sha256()
//!     .with_salt(b"salt".to_vec())
//!     .with_passes(HashPasses::Strong)
//!     .compute("password")
//!     .await?;
//! # let _ = (digest, tag, key);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod algorithm;
pub mod api;
pub mod async_result;
pub mod blake2b;
mod block_buffer;
pub mod codec;
pub mod compare;
pub mod config;
pub mod digest;
pub mod digester;
pub mod error;
pub mod hmac;
pub mod io;
pub mod keccak;
pub mod md;
pub mod pbkdf2;
pub mod sha2;
pub mod sha3;
pub mod streaming;

// Re-export error types
pub use error::{HashError, Result};

// Core contract and value types
pub use digest::Digest;
pub use digester::{Digester, Prf};

// Algorithms and constructions
pub use algorithm::{hash, hmac, pbkdf2, Algorithm, AnyDigester};
pub use blake2b::{Blake2b, Blake2bVariant};
pub use hmac::Hmac;
pub use md::{Md4, Md5, Sha1};
pub use pbkdf2::Pbkdf2;
pub use sha2::{Sha2, Sha2Variant};
pub use sha3::{Sha3, Sha3Variant};

pub use codec::{hex_decode, hex_encode};
pub use compare::constant_time_eq;
pub use config::{HashPasses, Pbkdf2Params};

// Async surface
pub use api::{Hash, HashBuilder, HmacBuilder, Pbkdf2Builder};
pub use async_result::AsyncHashResult;
pub use streaming::{collect_hash, stream_hash, StreamHashChunk, StreamHashResult, StreamingHasher};

/// Main entry point
pub struct Cryypt;

impl Cryypt {
    /// Master builder for hash operations
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }
}

/// Master builder for hash operations
pub struct HashMasterBuilder;

impl HashMasterBuilder {
    /// Use any algorithm selected at runtime
    #[must_use]
    pub fn algorithm(self, algorithm: Algorithm) -> HashBuilder {
        Hash::algorithm(algorithm)
    }

    /// Use SHA-256 hashing
    #[must_use]
    pub fn sha256(self) -> HashBuilder {
        Hash::sha256()
    }

    /// Use SHA-384 hashing
    #[must_use]
    pub fn sha384(self) -> HashBuilder {
        Hash::sha384()
    }

    /// Use SHA-512 hashing
    #[must_use]
    pub fn sha512(self) -> HashBuilder {
        Hash::sha512()
    }

    /// Use SHA3-256 hashing
    #[must_use]
    pub fn sha3_256(self) -> HashBuilder {
        Hash::sha3_256()
    }

    /// Use SHA3-384 hashing
    #[must_use]
    pub fn sha3_384(self) -> HashBuilder {
        Hash::sha3_384()
    }

    /// Use SHA3-512 hashing
    #[must_use]
    pub fn sha3_512(self) -> HashBuilder {
        Hash::sha3_512()
    }

    /// Use Blake2b hashing
    #[must_use]
    pub fn blake2b(self) -> HashBuilder {
        Hash::blake2b()
    }
}
