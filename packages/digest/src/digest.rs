//! Digest value type with encoding support

use crate::compare::constant_time_eq;
use crate::{codec, HashError, Result};

/// Output of a finalize call
///
/// The length is fixed by the algorithm that produced it. Equality is
/// evaluated in constant time over equal-length values.
#[derive(Clone, Debug)]
pub struct Digest {
    /// Raw digest bytes
    bytes: Vec<u8>,
}

impl Digest {
    /// Create a digest from raw bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parse a digest from its hex representation (either case)
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidHex` on malformed input.
    pub fn from_hex(text: impl AsRef<[u8]>) -> Result<Self> {
        codec::hex_decode(text).map(Self::new)
    }

    /// Parse a digest from standard padded base64
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` on malformed input.
    pub fn from_base64(text: impl AsRef<[u8]>) -> Result<Self> {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD
            .decode(text)
            .map(Self::new)
            .map_err(|e| HashError::invalid_parameters(format!("Invalid base64 digest: {e}")))
    }

    /// Parse a digest from unpadded URL-safe base64
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` on malformed input.
    pub fn from_base64url(text: impl AsRef<[u8]>) -> Result<Self> {
        base64_url::decode(&text)
            .map(Self::new)
            .map_err(|e| HashError::invalid_parameters(format!("Invalid base64url digest: {e}")))
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a `Vec<u8>`
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        codec::hex_encode(&self.bytes)
    }

    /// Get the digest as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Get the digest as a base64url string (URL-safe)
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Check a candidate tag against this digest in constant time
    #[must_use]
    pub fn verify(&self, candidate: impl AsRef<[u8]>) -> bool {
        constant_time_eq(&self.bytes, candidate.as_ref())
    }

    /// Get the length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for Digest {}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodings() {
        let digest = Digest::new(vec![0xfb, 0xff, 0x00, 0x10]);
        assert_eq!(digest.to_hex(), "fbff0010");
        assert_eq!(digest.to_string(), "fbff0010");
        assert_eq!(digest.to_base64(), "+/8AEA==");
        assert_eq!(digest.to_base64url(), "-_8AEA");
        assert_eq!(digest.len(), 4);
        assert!(!digest.is_empty());
    }

    #[test]
    fn test_from_hex_and_verify() {
        let digest = Digest::from_hex("A9993E36").expect("valid hex");
        assert_eq!(digest.as_bytes(), &[0xa9, 0x99, 0x3e, 0x36]);
        assert!(digest.verify([0xa9, 0x99, 0x3e, 0x36]));
        assert!(!digest.verify([0xa9, 0x99, 0x3e]));
        assert!(Digest::from_hex("a9g9").is_err());
        assert_eq!(digest, Digest::new(vec![0xa9, 0x99, 0x3e, 0x36]));
    }

    #[test]
    fn test_from_base64_forms() {
        let digest = Digest::new(vec![0xfb, 0xff, 0x00, 0x10]);
        assert_eq!(Digest::from_base64("+/8AEA==").expect("valid base64"), digest);
        assert_eq!(Digest::from_base64url("-_8AEA").expect("valid base64url"), digest);

        let err = Digest::from_base64("+/8A*A==").expect_err("bad digit");
        assert!(matches!(err, HashError::InvalidParameters(_)));
        assert!(err.is_configuration());
        let err = Digest::from_base64url("+/8AEA").expect_err("standard alphabet");
        assert!(matches!(err, HashError::InvalidParameters(_)));
    }
}
