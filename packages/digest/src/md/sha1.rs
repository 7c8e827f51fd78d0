//! SHA-1 (FIPS 180-4 §6.1)

use super::BLOCK_LEN;
use crate::block_buffer::BlockBuffer;
use crate::{codec, Digester};

/// Digest length in bytes
pub const DIGEST_LEN: usize = 20;

const H0: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

const K: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];

#[inline(always)]
fn round_fn(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t / 20 {
        0 => (b & c) | (!b & d),
        2 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

fn compress(state: &mut [u32; 5], block: &[u8]) {
    let mut w = [0u32; 80];
    codec::load_u32_be(block, &mut w[..16]);
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;
    for (t, wt) in w.iter().enumerate() {
        let temp = a
            .rotate_left(5)
            .wrapping_add(round_fn(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(*wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *s = s.wrapping_add(v);
    }
}

/// Streaming SHA-1 state
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer<BLOCK_LEN>,
    bytes: u64,
}

impl Sha1 {
    /// Create a hasher in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: BlockBuffer::new(),
            bytes: 0,
        }
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digester for Sha1 {
    fn reset(&mut self) {
        self.state = H0;
        self.buffer.reset();
        self.bytes = 0;
    }

    fn update(&mut self, data: &[u8]) {
        self.bytes = self.bytes.wrapping_add(data.len() as u64);
        let state = &mut self.state;
        self.buffer.input(data, |block| compress(state, block));
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        assert_eq!(out.len(), DIGEST_LEN, "SHA-1 output buffer length");
        let bit_len = self.bytes.wrapping_mul(8);
        let state = &mut self.state;
        self.buffer
            .pad(&bit_len.to_be_bytes(), |block| compress(state, block));
        codec::store_u32_be(&self.state, out);
        self.reset();
    }

    fn digest_length(&self) -> usize {
        DIGEST_LEN
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }
}

wipe_on_drop!(Sha1);
