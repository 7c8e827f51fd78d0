//! MD4 (RFC 1320)

use super::{registers, BLOCK_LEN};
use crate::block_buffer::BlockBuffer;
use crate::{codec, Digester};

/// Digest length in bytes
pub const DIGEST_LEN: usize = 16;

const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

const ROUND2_K: u32 = 0x5a82_7999;
const ROUND3_K: u32 = 0x6ed9_eba1;

const ROUND1_ORDER: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
const ROUND2_ORDER: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const ROUND3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

const ROUND1_SHIFT: [u32; 4] = [3, 7, 11, 19];
const ROUND2_SHIFT: [u32; 4] = [3, 5, 9, 13];
const ROUND3_SHIFT: [u32; 4] = [3, 9, 11, 15];

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn compress(state: &mut [u32; 4], block: &[u8]) {
    let mut x = [0u32; 16];
    codec::load_u32_le(block, &mut x);

    let mut v = *state;

    macro_rules! round {
        ($func:ident, $order:expr, $shift:expr, $k:expr) => {
            for step in 0..16 {
                let (t, p, q, r) = registers(step);
                v[t] = v[t]
                    .wrapping_add($func(v[p], v[q], v[r]))
                    .wrapping_add(x[$order[step]])
                    .wrapping_add($k)
                    .rotate_left($shift[step % 4]);
            }
        };
    }

    round!(f, ROUND1_ORDER, ROUND1_SHIFT, 0);
    round!(g, ROUND2_ORDER, ROUND2_SHIFT, ROUND2_K);
    round!(h, ROUND3_ORDER, ROUND3_SHIFT, ROUND3_K);

    for (s, v) in state.iter_mut().zip(v) {
        *s = s.wrapping_add(v);
    }
}

/// Streaming MD4 state
#[derive(Clone)]
pub struct Md4 {
    state: [u32; 4],
    buffer: BlockBuffer<BLOCK_LEN>,
    bytes: u64,
}

impl Md4 {
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

impl Default for Md4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digester for Md4 {
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
        assert_eq!(out.len(), DIGEST_LEN, "MD4 output buffer length");
        let bit_len = self.bytes.wrapping_mul(8);
        let state = &mut self.state;
        self.buffer
            .pad(&bit_len.to_le_bytes(), |block| compress(state, block));
        codec::store_u32_le(&self.state, out);
        self.reset();
    }

    fn digest_length(&self) -> usize {
        DIGEST_LEN
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }
}

wipe_on_drop!(Md4);
