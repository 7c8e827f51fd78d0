//! SHA-2 family (FIPS 180-4 §6.2–§6.5)
//!
//! One engine serves all four output sizes. SHA-224/256 run 64 rounds over
//! 32-bit words and 64-byte blocks; SHA-384/512 run 80 rounds over 64-bit
//! words and 128-byte blocks. The truncated variants differ only in their
//! initial hash value and output length.

use crate::block_buffer::BlockBuffer;
use crate::{codec, Digester, HashError, Result};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

const NARROW_BLOCK_LEN: usize = 64;
const WIDE_BLOCK_LEN: usize = 128;

const H224: [u32; 8] = [
    0xc105_9ed8, 0x367c_d507, 0x3070_dd17, 0xf70e_5939, 0xffc0_0b31, 0x6858_1511, 0x64f9_8fa7,
    0xbefa_4fa4,
];

const H256: [u32; 8] = [
    0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372, 0xa54f_f53a, 0x510e_527f, 0x9b05_688c, 0x1f83_d9ab,
    0x5be0_cd19,
];

const H384: [u64; 8] = [
    0xcbbb_9d5d_c105_9ed8, 0x629a_292a_367c_d507, 0x9159_015a_3070_dd17,
    0x152f_ecd8_f70e_5939, 0x6733_2667_ffc0_0b31, 0x8eb4_4a87_6858_1511,
    0xdb0c_2e0d_64f9_8fa7, 0x47b5_481d_befa_4fa4,
];

const H512: [u64; 8] = [
    0x6a09_e667_f3bc_c908, 0xbb67_ae85_84ca_a73b, 0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1, 0x510e_527f_ade6_82d1, 0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b, 0x5be0_cd19_137e_2179,
];

const K256: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5, 0x3956_c25b, 0x59f1_11f1,
    0x923f_82a4, 0xab1c_5ed5, 0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3,
    0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174, 0xe49b_69c1, 0xefbe_4786,
    0x0fc1_9dc6, 0x240c_a1cc, 0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7, 0xc6e0_0bf3, 0xd5a7_9147,
    0x06ca_6351, 0x1429_2967, 0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13,
    0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85, 0xa2bf_e8a1, 0xa81a_664b,
    0xc24b_8b70, 0xc76c_51a3, 0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5, 0x391c_0cb3, 0x4ed8_aa4a,
    0x5b9c_ca4f, 0x682e_6ff3, 0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208,
    0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

const K512: [u64; 80] = [
    0x428a_2f98_d728_ae22, 0x7137_4491_23ef_65cd, 0xb5c0_fbcf_ec4d_3b2f,
    0xe9b5_dba5_8189_dbbc, 0x3956_c25b_f348_b538, 0x59f1_11f1_b605_d019,
    0x923f_82a4_af19_4f9b, 0xab1c_5ed5_da6d_8118, 0xd807_aa98_a303_0242,
    0x1283_5b01_4570_6fbe, 0x2431_85be_4ee4_b28c, 0x550c_7dc3_d5ff_b4e2,
    0x72be_5d74_f27b_896f, 0x80de_b1fe_3b16_96b1, 0x9bdc_06a7_25c7_1235,
    0xc19b_f174_cf69_2694, 0xe49b_69c1_9ef1_4ad2, 0xefbe_4786_384f_25e3,
    0x0fc1_9dc6_8b8c_d5b5, 0x240c_a1cc_77ac_9c65, 0x2de9_2c6f_592b_0275,
    0x4a74_84aa_6ea6_e483, 0x5cb0_a9dc_bd41_fbd4, 0x76f9_88da_8311_53b5,
    0x983e_5152_ee66_dfab, 0xa831_c66d_2db4_3210, 0xb003_27c8_98fb_213f,
    0xbf59_7fc7_beef_0ee4, 0xc6e0_0bf3_3da8_8fc2, 0xd5a7_9147_930a_a725,
    0x06ca_6351_e003_826f, 0x1429_2967_0a0e_6e70, 0x27b7_0a85_46d2_2ffc,
    0x2e1b_2138_5c26_c926, 0x4d2c_6dfc_5ac4_2aed, 0x5338_0d13_9d95_b3df,
    0x650a_7354_8baf_63de, 0x766a_0abb_3c77_b2a8, 0x81c2_c92e_47ed_aee6,
    0x9272_2c85_1482_353b, 0xa2bf_e8a1_4cf1_0364, 0xa81a_664b_bc42_3001,
    0xc24b_8b70_d0f8_9791, 0xc76c_51a3_0654_be30, 0xd192_e819_d6ef_5218,
    0xd699_0624_5565_a910, 0xf40e_3585_5771_202a, 0x106a_a070_32bb_d1b8,
    0x19a4_c116_b8d2_d0c8, 0x1e37_6c08_5141_ab53, 0x2748_774c_df8e_eb99,
    0x34b0_bcb5_e19b_48a8, 0x391c_0cb3_c5c9_5a63, 0x4ed8_aa4a_e341_8acb,
    0x5b9c_ca4f_7763_e373, 0x682e_6ff3_d6b2_b8a3, 0x748f_82ee_5def_b2fc,
    0x78a5_636f_4317_2f60, 0x84c8_7814_a1f0_ab72, 0x8cc7_0208_1a64_39ec,
    0x90be_fffa_2363_1e28, 0xa450_6ceb_de82_bde9, 0xbef9_a3f7_b2c6_7915,
    0xc671_78f2_e372_532b, 0xca27_3ece_ea26_619c, 0xd186_b8c7_21c0_c207,
    0xeada_7dd6_cde0_eb1e, 0xf57d_4f7f_ee6e_d178, 0x06f0_67aa_7217_6fba,
    0x0a63_7dc5_a2c8_98a6, 0x113f_9804_bef9_0dae, 0x1b71_0b35_131c_471b,
    0x28db_77f5_2304_7d84, 0x32ca_ab7b_40c7_2493, 0x3c9e_be0a_15c9_bebc,
    0x431d_67c4_9c10_0d4c, 0x4cc5_d4be_cb3e_42b6, 0x597f_299c_fc65_7e2a,
    0x5fcb_6fab_3ad6_faec, 0x6c44_198c_4a47_5817,
];

// Generates a compression function from the word type, round constants, the
// Σ0/Σ1 rotation triples and the σ0/σ1 (rotate, rotate, shift) triples.
macro_rules! sha2_compress {
    (
        $name:ident, $word:ty, $k:ident, $load:path,
        big0: ($b00:expr, $b01:expr, $b02:expr),
        big1: ($b10:expr, $b11:expr, $b12:expr),
        small0: ($s00:expr, $s01:expr, $s02:expr),
        small1: ($s10:expr, $s11:expr, $s12:expr)
    ) => {
        fn $name(state: &mut [$word; 8], block: &[u8]) {
            const ROUNDS: usize = $k.len();
            let mut w = [0 as $word; ROUNDS];
            $load(block, &mut w[..16]);
            for t in 16..ROUNDS {
                let s0 = w[t - 15].rotate_right($s00) ^ w[t - 15].rotate_right($s01) ^ (w[t - 15] >> $s02);
                let s1 = w[t - 2].rotate_right($s10) ^ w[t - 2].rotate_right($s11) ^ (w[t - 2] >> $s12);
                w[t] = s1
                    .wrapping_add(w[t - 7])
                    .wrapping_add(s0)
                    .wrapping_add(w[t - 16]);
            }

            let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
            for t in 0..ROUNDS {
                let big1 = e.rotate_right($b10) ^ e.rotate_right($b11) ^ e.rotate_right($b12);
                let ch = (e & f) ^ (!e & g);
                let t1 = h
                    .wrapping_add(big1)
                    .wrapping_add(ch)
                    .wrapping_add($k[t])
                    .wrapping_add(w[t]);
                let big0 = a.rotate_right($b00) ^ a.rotate_right($b01) ^ a.rotate_right($b02);
                let maj = (a & b) ^ (a & c) ^ (b & c);
                let t2 = big0.wrapping_add(maj);

                h = g;
                g = f;
                f = e;
                e = d.wrapping_add(t1);
                d = c;
                c = b;
                b = a;
                a = t1.wrapping_add(t2);
            }

            for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
                *s = s.wrapping_add(v);
            }
        }
    };
}

sha2_compress!(
    compress256, u32, K256, codec::load_u32_be,
    big0: (2, 13, 22),
    big1: (6, 11, 25),
    small0: (7, 18, 3),
    small1: (17, 19, 10)
);

sha2_compress!(
    compress512, u64, K512, codec::load_u64_be,
    big0: (28, 34, 39),
    big1: (14, 18, 41),
    small0: (1, 8, 7),
    small1: (19, 61, 6)
);

/// Output size of a SHA-2 instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sha2Variant {
    /// SHA-224, truncated SHA-256 engine
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384, truncated SHA-512 engine
    Sha384,
    /// SHA-512
    Sha512,
}

impl Sha2Variant {
    /// Select a variant by digest size in bits
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for sizes other than
    /// 224, 256, 384 and 512.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            224 => Ok(Self::Sha224),
            256 => Ok(Self::Sha256),
            384 => Ok(Self::Sha384),
            512 => Ok(Self::Sha512),
            other => Err(HashError::unsupported(format!("SHA-2 with {other}-bit output"))),
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn digest_length(self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Compression block size in bytes
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Sha224 | Self::Sha256 => NARROW_BLOCK_LEN,
            Self::Sha384 | Self::Sha512 => WIDE_BLOCK_LEN,
        }
    }
}

#[derive(Clone)]
enum Engine {
    Narrow {
        state: [u32; 8],
        buffer: BlockBuffer<NARROW_BLOCK_LEN>,
    },
    Wide {
        state: [u64; 8],
        buffer: BlockBuffer<WIDE_BLOCK_LEN>,
    },
}

impl Engine {
    fn for_variant(variant: Sha2Variant) -> Self {
        match variant {
            Sha2Variant::Sha224 => Self::narrow(H224),
            Sha2Variant::Sha256 => Self::narrow(H256),
            Sha2Variant::Sha384 => Self::wide(H384),
            Sha2Variant::Sha512 => Self::wide(H512),
        }
    }

    fn narrow(state: [u32; 8]) -> Self {
        Self::Narrow {
            state,
            buffer: BlockBuffer::new(),
        }
    }

    fn wide(state: [u64; 8]) -> Self {
        Self::Wide {
            state,
            buffer: BlockBuffer::new(),
        }
    }
}

impl Zeroize for Engine {
    fn zeroize(&mut self) {
        match self {
            Self::Narrow { state, buffer } => {
                state.zeroize();
                buffer.reset();
            }
            Self::Wide { state, buffer } => {
                state.zeroize();
                buffer.reset();
            }
        }
    }
}

// Also runs when `reset` replaces the engine.
impl Drop for Engine {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Streaming SHA-2 state, parameterized by [`Sha2Variant`]
#[derive(Clone)]
pub struct Sha2 {
    variant: Sha2Variant,
    engine: Engine,
    bytes: u128,
}

impl Sha2 {
    /// Create a hasher for `variant` in its initial state
    #[must_use]
    pub fn new(variant: Sha2Variant) -> Self {
        Self {
            variant,
            engine: Engine::for_variant(variant),
            bytes: 0,
        }
    }

    /// SHA-224 hasher
    #[must_use]
    pub fn sha224() -> Self {
        Self::new(Sha2Variant::Sha224)
    }

    /// SHA-256 hasher
    #[must_use]
    pub fn sha256() -> Self {
        Self::new(Sha2Variant::Sha256)
    }

    /// SHA-384 hasher
    #[must_use]
    pub fn sha384() -> Self {
        Self::new(Sha2Variant::Sha384)
    }

    /// SHA-512 hasher
    #[must_use]
    pub fn sha512() -> Self {
        Self::new(Sha2Variant::Sha512)
    }

    /// The variant selected at construction
    #[must_use]
    pub fn variant(&self) -> Sha2Variant {
        self.variant
    }
}

impl Digester for Sha2 {
    fn reset(&mut self) {
        self.engine = Engine::for_variant(self.variant);
        self.bytes = 0;
    }

    fn update(&mut self, data: &[u8]) {
        self.bytes = self.bytes.wrapping_add(data.len() as u128);
        match &mut self.engine {
            Engine::Narrow { state, buffer } => {
                buffer.input(data, |block| compress256(state, block));
            }
            Engine::Wide { state, buffer } => {
                buffer.input(data, |block| compress512(state, block));
            }
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            self.variant.digest_length(),
            "SHA-2 output buffer length"
        );
        let bit_len = self.bytes.wrapping_mul(8);
        match &mut self.engine {
            Engine::Narrow { state, buffer } => {
                // 64-bit length field, bit count mod 2^64
                let length = (bit_len as u64).to_be_bytes();
                buffer.pad(&length, |block| compress256(state, block));
                codec::store_u32_be(state, out);
            }
            Engine::Wide { state, buffer } => {
                buffer.pad(&bit_len.to_be_bytes(), |block| compress512(state, block));
                codec::store_u64_be(state, out);
            }
        }
        self.reset();
    }

    fn digest_length(&self) -> usize {
        self.variant.digest_length()
    }

    fn block_size(&self) -> usize {
        self.variant.block_size()
    }
}

impl Zeroize for Sha2 {
    fn zeroize(&mut self) {
        self.engine.zeroize();
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for Sha2 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroize_wipes_both_engines() {
        let expected = [
            (Sha2Variant::Sha256, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
            (
                Sha2Variant::Sha512,
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
        ];
        for (variant, abc) in expected {
            let mut sha2 = Sha2::new(variant);
            sha2.update(&[0x5a; 200]);
            sha2.zeroize();
            match &sha2.engine {
                Engine::Narrow { state, buffer } => {
                    assert_eq!(state, &[0u32; 8]);
                    assert!(buffer.is_clear());
                }
                Engine::Wide { state, buffer } => {
                    assert_eq!(state, &[0u64; 8]);
                    assert!(buffer.is_clear());
                }
            }
            assert_eq!(sha2.bytes, 0);

            sha2.reset();
            sha2.update(b"abc");
            assert_eq!(sha2.finalize().to_hex(), abc);
        }
    }

    #[test]
    fn test_variant_sizes() {
        for (bits, len, block) in [(224, 28, 64), (256, 32, 64), (384, 48, 128), (512, 64, 128)] {
            let variant = Sha2Variant::from_bits(bits).expect("known size");
            let hasher = Sha2::new(variant);
            assert_eq!(hasher.digest_length(), len);
            assert_eq!(hasher.block_size(), block);
        }
        assert!(matches!(
            Sha2Variant::from_bits(160),
            Err(HashError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_wide_padding_boundaries() {
        // 111 bytes fits the 128-bit length field, 112 spills into a second block
        let cases = [
            (111usize, "fa9121c7b32b9e01733d034cfc78cbf67f926c7ed83e82200ef86818196921760b4beff48404df811b953828274461673c68d04e297b0eb7b2b4d60fc6b566a2"),
            (112, "c01d080efd492776a1c43bd23dd99d0a2e626d481e16782e75d54c2503b5dc32bd05f0f1ba33e568b88fd2d970929b719ecbb152f58f130a407c8830604b70ca"),
        ];
        let mut sha512 = Sha2::sha512();
        for (len, expected) in cases {
            sha512.update(&vec![b'a'; len]);
            assert_eq!(sha512.finalize().to_hex(), expected, "length {len}");
        }
    }
}
