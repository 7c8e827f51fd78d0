//! Key-derivation configuration: iteration presets and PBKDF2 parameters

use crate::pbkdf2::{check_output_length, DEFAULT_ITERATIONS};
use crate::{Algorithm, Digest, HashError, Result};
use serde::{Deserialize, Serialize};

/// Number of PBKDF2 iterations to perform
///
/// # Security Considerations
///
/// - For password storage use `Strong` or higher
/// - `Standard` matches the common PBKDF2 default of 4096 rounds
/// - `Fast` is for tests and non-secret inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashPasses {
    /// 1,000 iterations
    ///
    /// Not suitable for password hashing
    Fast,

    /// 4,096 iterations
    #[default]
    Standard,

    /// 100,000 iterations
    ///
    /// Recommended for stored passwords
    Strong,

    /// 600,000 iterations
    ///
    /// Current guidance for PBKDF2-HMAC-SHA256. Noticeably slow.
    Maximum,
}

impl HashPasses {
    /// Get the number of iterations
    #[must_use]
    pub const fn iterations(self) -> u32 {
        match self {
            Self::Fast => 1_000,
            Self::Standard => DEFAULT_ITERATIONS,
            Self::Strong => 100_000,
            Self::Maximum => 600_000,
        }
    }

    /// Check if this is suitable for password hashing
    #[must_use]
    pub const fn is_password_safe(self) -> bool {
        self.iterations() >= 100_000
    }
}

impl From<HashPasses> for u32 {
    fn from(passes: HashPasses) -> Self {
        passes.iterations()
    }
}

/// PBKDF2 parameters, loadable from any serde format
///
/// Missing fields take their defaults:
///
/// ```json
/// { "algorithm": "sha512", "iterations": 100000, "dk_len": 64 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pbkdf2Params {
    /// Hash used inside the HMAC PRF
    pub algorithm: Algorithm,
    /// Iteration count, at least 1
    pub iterations: u32,
    /// Derived key length in bytes
    pub dk_len: usize,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            iterations: DEFAULT_ITERATIONS,
            dk_len: 32,
        }
    }
}

impl Pbkdf2Params {
    /// Parameters using an iteration preset
    #[must_use]
    pub fn with_passes(algorithm: Algorithm, passes: HashPasses, dk_len: usize) -> Self {
        Self {
            algorithm,
            iterations: passes.iterations(),
            dk_len,
        }
    }

    /// Check the parameters without deriving anything.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidIterations` or
    /// `HashError::InvalidOutputLength` for the same inputs
    /// [`Pbkdf2::new`](crate::Pbkdf2::new) rejects.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(HashError::InvalidIterations);
        }
        if self.algorithm.is_legacy() {
            tracing::warn!(algorithm = %self.algorithm, "PBKDF2 configured over a legacy hash");
        }
        check_output_length(self.dk_len, self.algorithm.digest_length())
    }

    /// Derive a key from `password` and `salt`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Pbkdf2Params::validate`].
    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<Digest> {
        crate::pbkdf2(self.algorithm, password, salt, self.iterations, self.dk_len)
    }
}
