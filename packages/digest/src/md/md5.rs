//! MD5 (RFC 1321)

use super::{registers, BLOCK_LEN};
use crate::block_buffer::BlockBuffer;
use crate::{codec, Digester};

/// Digest length in bytes
pub const DIGEST_LEN: usize = 16;

const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// K[i] = floor(2^32 * abs(sin(i + 1)))
const K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613,
    0xfd46_9501, 0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193,
    0xa679_438e, 0x49b4_0821, 0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d,
    0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8, 0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a, 0xfffa_3942, 0x8771_f681, 0x6d9d_6122,
    0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70, 0x289b_7ec6, 0xeaa1_27fa,
    0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665, 0xf429_2244,
    0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb,
    0xeb86_d391,
];

// Left-rotation amounts, four per round
const SHIFT: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[inline(always)]
fn round_fn(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => (x & y) | (!x & z),
        1 => (x & z) | (y & !z),
        2 => x ^ y ^ z,
        _ => y ^ (x | !z),
    }
}

#[inline(always)]
const fn message_index(round: usize, step: usize) -> usize {
    match round {
        0 => step,
        1 => (5 * step + 1) % 16,
        2 => (3 * step + 5) % 16,
        _ => (7 * step) % 16,
    }
}

fn compress(state: &mut [u32; 4], block: &[u8]) {
    let mut m = [0u32; 16];
    codec::load_u32_le(block, &mut m);

    let mut v = *state;
    for round in 0..4 {
        for step in 0..16 {
            let i = round * 16 + step;
            let (t, p, q, r) = registers(step);
            v[t] = v[p].wrapping_add(
                v[t].wrapping_add(round_fn(round, v[p], v[q], v[r]))
                    .wrapping_add(K[i])
                    .wrapping_add(m[message_index(round, step)])
                    .rotate_left(SHIFT[round][step % 4]),
            );
        }
    }

    for (s, v) in state.iter_mut().zip(v) {
        *s = s.wrapping_add(v);
    }
}

/// Streaming MD5 state
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: BlockBuffer<BLOCK_LEN>,
    bytes: u64,
}

impl Md5 {
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

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digester for Md5 {
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
        assert_eq!(out.len(), DIGEST_LEN, "MD5 output buffer length");
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

wipe_on_drop!(Md5);
