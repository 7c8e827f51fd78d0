//! Error handling for the digest subsystem
//!
//! Every failure here is a configuration or encoding error reported at the
//! call site. `update` and `finalize` never fail.

use thiserror::Error;

/// Digest-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Unknown algorithm name, bit size or numeric tag
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// PBKDF2 configured with zero iterations
    #[error("PBKDF2 iteration count must be at least 1")]
    InvalidIterations,

    /// PBKDF2 derived key length outside `1..=max`
    #[error("Invalid derived key length: requested {requested}, allowed 1..={max}")]
    InvalidOutputLength {
        /// Length asked for, in bytes
        requested: usize,
        /// `(2^32 - 1) * hLen` for the chosen PRF
        max: u64,
    },

    /// Inner hash unusable for HMAC or PBKDF2
    #[error("Inner hash block size {block_size} is unusable with digest size {digest_size}")]
    InvalidBlockSize {
        /// Block size reported by the inner hash
        block_size: usize,
        /// Digest size reported by the inner hash
        digest_size: usize,
    },

    /// Odd-length or non-hex input to a hex decoder
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    /// Malformed caller-supplied input other than hex
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Worker or runtime failure outside the algorithms themselves
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create an `unsupported_algorithm` error
    #[must_use]
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(tag.into())
    }

    /// Whether the error was raised while configuring an instance
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm(_)
                | Self::InvalidIterations
                | Self::InvalidOutputLength { .. }
                | Self::InvalidBlockSize { .. }
                | Self::InvalidParameters(_)
        )
    }
}

impl From<hex::FromHexError> for HashError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex(err.to_string())
    }
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        let configuration = [
            HashError::unsupported("sha-1024"),
            HashError::InvalidIterations,
            HashError::InvalidOutputLength {
                requested: 0,
                max: 20,
            },
            HashError::InvalidBlockSize {
                block_size: 0,
                digest_size: 32,
            },
            HashError::invalid_parameters("bad base64"),
        ];
        for err in &configuration {
            assert!(err.is_configuration(), "{err}");
        }

        assert!(!HashError::internal("worker dropped").is_configuration());
        assert!(!HashError::InvalidHex("odd length".into()).is_configuration());
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: HashError = hex::FromHexError::OddLength.into();
        assert!(matches!(err, HashError::InvalidHex(_)));
        assert_eq!(
            HashError::invalid_parameters("x").to_string(),
            "Invalid parameters: x"
        );
    }
}
