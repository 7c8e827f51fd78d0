//! Word/byte codec and hex encoding
//!
//! Block functions read their message words through the `load_*` helpers and
//! serialize chaining values through the `store_*` helpers. Input slices are
//! always exact multiples of the word size; that is checked in debug builds.

use crate::Result;

/// Decode consecutive big-endian 32-bit words from `bytes` into `words`.
#[inline]
pub fn load_u32_be(bytes: &[u8], words: &mut [u32]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Decode consecutive little-endian 32-bit words from `bytes` into `words`.
#[inline]
pub fn load_u32_le(bytes: &[u8], words: &mut [u32]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Decode consecutive big-endian 64-bit words from `bytes` into `words`.
#[inline]
pub fn load_u64_be(bytes: &[u8], words: &mut [u64]) {
    debug_assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut lane = [0u8; 8];
        lane.copy_from_slice(chunk);
        *word = u64::from_be_bytes(lane);
    }
}

/// Decode consecutive little-endian 64-bit words from `bytes` into `words`.
#[inline]
pub fn load_u64_le(bytes: &[u8], words: &mut [u64]) {
    debug_assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut lane = [0u8; 8];
        lane.copy_from_slice(chunk);
        *word = u64::from_le_bytes(lane);
    }
}

/// Encode `words` big-endian into `out`, stopping when `out` is full.
///
/// Truncated variants (SHA-224, SHA-384) pass an `out` shorter than the
/// state; a trailing partial word is cut at the byte level.
#[inline]
pub fn store_u32_be(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
    }
}

/// Encode `words` little-endian into `out`, stopping when `out` is full.
#[inline]
pub fn store_u32_le(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
    }
}

/// Encode `words` big-endian into `out`, stopping when `out` is full.
#[inline]
pub fn store_u64_be(words: &[u64], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
    }
}

/// Encode `words` little-endian into `out`, stopping when `out` is full.
#[inline]
pub fn store_u64_le(words: &[u64], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
    }
}

/// Lowercase hexadecimal encoding of `bytes`.
#[must_use]
pub fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hexadecimal string, accepting either case.
///
/// # Errors
///
/// Returns `HashError::InvalidHex` on odd-length input or any character
/// outside `[0-9a-fA-F]`.
pub fn hex_decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
