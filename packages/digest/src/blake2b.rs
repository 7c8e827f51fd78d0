//! BLAKE2b (RFC 7693), unkeyed, at four output sizes
//!
//! The output length is mixed into the initial state through the parameter
//! block, so BLAKE2b-256 is not a truncation of BLAKE2b-512.

use crate::codec::{load_u64_le, store_u64_le};
use crate::{Digester, HashError, Result};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

const BLOCK_LEN: usize = 128;
const ROUNDS: usize = 12;

const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

// Rounds 10 and 11 reuse rows 0 and 1
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Output size of a BLAKE2b instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Blake2bVariant {
    /// 28-byte output
    #[serde(rename = "blake2b-224")]
    Blake2b224,
    /// 32-byte output
    #[serde(rename = "blake2b-256")]
    Blake2b256,
    /// 48-byte output
    #[serde(rename = "blake2b-384")]
    Blake2b384,
    /// 64-byte output
    #[serde(rename = "blake2b-512")]
    Blake2b512,
}

impl Blake2bVariant {
    /// Select a variant by digest size in bits
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for sizes other than
    /// 224, 256, 384 and 512.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            224 => Ok(Self::Blake2b224),
            256 => Ok(Self::Blake2b256),
            384 => Ok(Self::Blake2b384),
            512 => Ok(Self::Blake2b512),
            other => Err(HashError::unsupported(format!(
                "BLAKE2b with {other}-bit output"
            ))),
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn digest_length(self) -> usize {
        match self {
            Self::Blake2b224 => 28,
            Self::Blake2b256 => 32,
            Self::Blake2b384 => 48,
            Self::Blake2b512 => 64,
        }
    }

    /// Initial chaining value: IV with digest length, key length 0, fanout 1, depth 1
    const fn initial_state(self) -> [u64; 8] {
        let mut h = IV;
        h[0] ^= 0x0101_0000 ^ self.digest_length() as u64;
        h
    }
}

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], counter: u128, last: bool) {
    let mut m = [0u64; 16];
    load_u64_le(block, &mut m);

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(&h[..]);
    v[8..].copy_from_slice(&IV);
    v[12] ^= counter as u64;
    v[13] ^= (counter >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    for round in 0..ROUNDS {
        let s = &SIGMA[round % SIGMA.len()];
        // columns
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        // diagonals
        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for (i, word) in h.iter_mut().enumerate() {
        *word ^= v[i] ^ v[i + 8];
    }
    m.zeroize();
    v.zeroize();
}

/// Streaming BLAKE2b hasher
///
/// A full buffered block is only compressed once more input arrives, since
/// the final block must carry the finalization flag and may be full.
#[derive(Clone)]
pub struct Blake2b {
    variant: Blake2bVariant,
    h: [u64; 8],
    buf: [u8; BLOCK_LEN],
    buf_len: usize,
    counter: u128,
}

impl Blake2b {
    /// Create a hasher for `variant`
    #[must_use]
    pub fn new(variant: Blake2bVariant) -> Self {
        Self {
            variant,
            h: variant.initial_state(),
            buf: [0u8; BLOCK_LEN],
            buf_len: 0,
            counter: 0,
        }
    }

    /// BLAKE2b-224 hasher
    #[must_use]
    pub fn blake2b_224() -> Self {
        Self::new(Blake2bVariant::Blake2b224)
    }

    /// BLAKE2b-256 hasher
    #[must_use]
    pub fn blake2b_256() -> Self {
        Self::new(Blake2bVariant::Blake2b256)
    }

    /// BLAKE2b-384 hasher
    #[must_use]
    pub fn blake2b_384() -> Self {
        Self::new(Blake2bVariant::Blake2b384)
    }

    /// BLAKE2b-512 hasher
    #[must_use]
    pub fn blake2b_512() -> Self {
        Self::new(Blake2bVariant::Blake2b512)
    }

    /// The variant selected at construction
    #[must_use]
    pub fn variant(&self) -> Blake2bVariant {
        self.variant
    }

    fn compress_buffer(&mut self, last: bool) {
        self.counter = self.counter.wrapping_add(self.buf_len as u128);
        compress(&mut self.h, &self.buf, self.counter, last);
        self.buf_len = 0;
    }
}

impl Digester for Blake2b {
    fn reset(&mut self) {
        self.h = self.variant.initial_state();
        self.buf.zeroize();
        self.buf_len = 0;
        self.counter = 0;
    }

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if self.buf_len == BLOCK_LEN {
                self.compress_buffer(false);
            }
            let take = (BLOCK_LEN - self.buf_len).min(data.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            self.variant.digest_length(),
            "BLAKE2b output buffer length"
        );
        self.buf[self.buf_len..].fill(0);
        self.compress_buffer(true);
        store_u64_le(&self.h, out);
        self.reset();
    }

    fn digest_length(&self) -> usize {
        self.variant.digest_length()
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }
}

impl Zeroize for Blake2b {
    fn zeroize(&mut self) {
        self.h.zeroize();
        self.buf.zeroize();
        self.buf_len = 0;
        self.counter.zeroize();
    }
}

impl Drop for Blake2b {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Blake2b {}
