//! Keccak-f[1600] permutation (FIPS 202 §3)
//!
//! The state is 25 little-endian 64-bit lanes indexed `x + 5 * y`.

/// Number of rounds of Keccak-f[1600]
pub const ROUNDS: usize = 24;

/// Lanes in the state
pub const LANES: usize = 25;

// ι round constants
const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

// ρ rotation offsets per lane
const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Apply the 24-round permutation to `state` in place.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    for rc in RC {
        // θ
        let mut parity = [0u64; 5];
        for (x, column) in parity.iter_mut().enumerate() {
            *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // ρ and π: B[y, 2x + 3y] = rot(A[x, y], r[x, y])
        let mut b = [0u64; LANES];
        for x in 0..5 {
            for y in 0..5 {
                let lane = x + 5 * y;
                b[y + 5 * ((2 * x + 3 * y) % 5)] = state[lane].rotate_left(RHO[lane]);
            }
        }

        // χ
        for y in 0..5 {
            let row = 5 * y;
            for x in 0..5 {
                state[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
            }
        }

        // ι
        state[0] ^= rc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_of_zero_state() {
        let mut state = [0u64; LANES];
        keccak_f1600(&mut state);
        assert_eq!(state[0], 0xf125_8f79_40e1_dde7);
        assert_eq!(state[1], 0x84d5_ccf9_33c0_478a);
    }

    #[test]
    fn test_permutation_is_deterministic() {
        let mut a = [0u64; LANES];
        a[3] = 0x0123_4567_89ab_cdef;
        let mut b = a;
        keccak_f1600(&mut a);
        keccak_f1600(&mut b);
        assert_eq!(a, b);
        assert_ne!(a[3], 0x0123_4567_89ab_cdef);
    }
}
