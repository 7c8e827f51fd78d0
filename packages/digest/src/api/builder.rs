//! Builders for plain hashing, HMAC and PBKDF2

use super::hash_functions;
use crate::{Algorithm, AsyncHashResult, HashPasses};
use zeroize::Zeroizing;

/// Hash builder for a chosen algorithm
#[derive(Debug, Clone, Copy)]
pub struct HashBuilder {
    algorithm: Algorithm,
}

impl HashBuilder {
    /// Create a builder for `algorithm`
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// The selected algorithm
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Add an HMAC key
    #[must_use]
    pub fn with_key<K: Into<Vec<u8>>>(self, key: K) -> HmacBuilder {
        HmacBuilder {
            algorithm: self.algorithm,
            key: Zeroizing::new(key.into()),
        }
    }

    /// Add a salt, switching to PBKDF2 with HMAC over this algorithm
    #[must_use]
    pub fn with_salt<S: Into<Vec<u8>>>(self, salt: S) -> Pbkdf2Builder {
        Pbkdf2Builder {
            algorithm: self.algorithm,
            salt: salt.into(),
            iterations: HashPasses::default().iterations(),
            dk_len: self.algorithm.digest_length(),
        }
    }

    /// Compute hash - action takes data as argument
    pub fn compute<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResult {
        hash_functions::hash(self.algorithm, data.into())
    }
}

/// HMAC builder holding its key
///
/// The key is zeroed when the builder or its worker is dropped.
pub struct HmacBuilder {
    algorithm: Algorithm,
    key: Zeroizing<Vec<u8>>,
}

impl HmacBuilder {
    /// Compute HMAC - action takes data as argument
    pub fn compute<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResult {
        hash_functions::hmac(self.algorithm, self.key, data.into())
    }
}

/// PBKDF2 builder
///
/// Defaults to [`HashPasses::Standard`] and a derived key as long as the
/// underlying digest.
#[derive(Debug, Clone)]
pub struct Pbkdf2Builder {
    algorithm: Algorithm,
    salt: Vec<u8>,
    iterations: u32,
    dk_len: usize,
}

impl Pbkdf2Builder {
    /// Set the iteration count from a preset
    #[must_use]
    pub fn with_passes(mut self, passes: HashPasses) -> Self {
        self.iterations = passes.iterations();
        self
    }

    /// Set an explicit iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the derived key length in bytes
    #[must_use]
    pub fn with_output_length(mut self, dk_len: usize) -> Self {
        self.dk_len = dk_len;
        self
    }

    /// Derive a key - action takes the password as argument
    ///
    /// Invalid parameters surface as an error when the result is awaited.
    pub fn compute<T: Into<Vec<u8>>>(self, password: T) -> AsyncHashResult {
        hash_functions::pbkdf2(
            self.algorithm,
            self.salt,
            self.iterations,
            self.dk_len,
            Zeroizing::new(password.into()),
        )
    }
}
