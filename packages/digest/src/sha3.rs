//! SHA-3 fixed-output functions (FIPS 202 §6.1)
//!
//! A sponge over Keccak-f[1600]. Input bytes are XORed into the rate portion
//! of the state at a running byte offset; each time the offset reaches the
//! rate the state is permuted. The capacity lanes are never touched by input
//! or output.

use crate::keccak::{keccak_f1600, LANES};
use crate::{Digester, HashError, Result};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain suffix for SHA-3 fixed-output mode, with the first padding bit
const SHA3_SUFFIX: u8 = 0x06;

/// Output size of a SHA-3 instance, which fixes the rate/capacity split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sha3Variant {
    /// SHA3-224, rate 1152 / capacity 448
    #[serde(rename = "sha3-224")]
    Sha3_224,
    /// SHA3-256, rate 1088 / capacity 512
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// SHA3-384, rate 832 / capacity 768
    #[serde(rename = "sha3-384")]
    Sha3_384,
    /// SHA3-512, rate 576 / capacity 1024
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl Sha3Variant {
    /// Select a variant by digest size in bits
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for sizes other than
    /// 224, 256, 384 and 512.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            224 => Ok(Self::Sha3_224),
            256 => Ok(Self::Sha3_256),
            384 => Ok(Self::Sha3_384),
            512 => Ok(Self::Sha3_512),
            other => Err(HashError::unsupported(format!("SHA-3 with {other}-bit output"))),
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn digest_length(self) -> usize {
        match self {
            Self::Sha3_224 => 28,
            Self::Sha3_256 => 32,
            Self::Sha3_384 => 48,
            Self::Sha3_512 => 64,
        }
    }

    /// Rate in bytes; capacity is twice the digest length
    #[must_use]
    pub const fn rate(self) -> usize {
        200 - 2 * self.digest_length()
    }

    /// Capacity in bits
    #[must_use]
    pub const fn capacity_bits(self) -> usize {
        1600 - 8 * self.rate()
    }
}

#[inline(always)]
fn xor_byte(state: &mut [u64; LANES], pos: usize, byte: u8) {
    state[pos / 8] ^= u64::from(byte) << (8 * (pos % 8));
}

#[inline(always)]
fn read_byte(state: &[u64; LANES], pos: usize) -> u8 {
    (state[pos / 8] >> (8 * (pos % 8))) as u8
}

/// Streaming SHA-3 sponge, parameterized by [`Sha3Variant`]
#[derive(Clone)]
pub struct Sha3 {
    variant: Sha3Variant,
    state: [u64; LANES],
    offset: usize,
}

impl Sha3 {
    /// Create a hasher for `variant` with an all-zero sponge
    #[must_use]
    pub fn new(variant: Sha3Variant) -> Self {
        Self {
            variant,
            state: [0u64; LANES],
            offset: 0,
        }
    }

    /// SHA3-224 hasher
    #[must_use]
    pub fn sha3_224() -> Self {
        Self::new(Sha3Variant::Sha3_224)
    }

    /// SHA3-256 hasher
    #[must_use]
    pub fn sha3_256() -> Self {
        Self::new(Sha3Variant::Sha3_256)
    }

    /// SHA3-384 hasher
    #[must_use]
    pub fn sha3_384() -> Self {
        Self::new(Sha3Variant::Sha3_384)
    }

    /// SHA3-512 hasher
    #[must_use]
    pub fn sha3_512() -> Self {
        Self::new(Sha3Variant::Sha3_512)
    }

    /// The variant selected at construction
    #[must_use]
    pub fn variant(&self) -> Sha3Variant {
        self.variant
    }

    fn absorb_block(&mut self, block: &[u8]) {
        for (lane, chunk) in self.state.iter_mut().zip(block.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(bytes);
        }
        keccak_f1600(&mut self.state);
    }

    /// Multi-rate padding: suffix at the offset, `0x80` on the last rate byte.
    fn pad(&mut self, suffix: u8) {
        let rate = self.variant.rate();
        xor_byte(&mut self.state, self.offset, suffix);
        // A suffix carrying the final padding bit itself needs its own block
        if suffix & 0x80 != 0 && self.offset == rate - 1 {
            keccak_f1600(&mut self.state);
        }
        xor_byte(&mut self.state, rate - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.offset = 0;
    }

    fn squeeze(&mut self, out: &mut [u8]) {
        let rate = self.variant.rate();
        for byte in out.iter_mut() {
            if self.offset == rate {
                keccak_f1600(&mut self.state);
                self.offset = 0;
            }
            *byte = read_byte(&self.state, self.offset);
            self.offset += 1;
        }
    }
}

impl Digester for Sha3 {
    fn reset(&mut self) {
        self.state.zeroize();
        self.offset = 0;
    }

    fn update(&mut self, mut data: &[u8]) {
        let rate = self.variant.rate();
        while !data.is_empty() {
            if self.offset == 0 && data.len() >= rate {
                let (block, rest) = data.split_at(rate);
                self.absorb_block(block);
                data = rest;
                continue;
            }

            let take = (rate - self.offset).min(data.len());
            for (i, &byte) in data[..take].iter().enumerate() {
                xor_byte(&mut self.state, self.offset + i, byte);
            }
            self.offset += take;
            data = &data[take..];

            if self.offset == rate {
                keccak_f1600(&mut self.state);
                self.offset = 0;
            }
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            self.variant.digest_length(),
            "SHA-3 output buffer length"
        );
        self.pad(SHA3_SUFFIX);
        self.squeeze(out);
        self.reset();
    }

    fn digest_length(&self) -> usize {
        self.variant.digest_length()
    }

    fn block_size(&self) -> usize {
        self.variant.rate()
    }
}

impl Zeroize for Sha3 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.offset = 0;
    }
}

impl Drop for Sha3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Sha3 {}
