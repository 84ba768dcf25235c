//! crates/digests/src/keccak/f1600.rs
//!
//! The Keccak-f[1600] permutation: 24 rounds of theta, rho, pi, chi, and
//! iota over 25 little-endian 64-bit lanes. The state is indexed
//! `x + 5 * y` with lane (0, 0) first.

/// Number of permutation rounds.
const ROUNDS: usize = 24;

/// Iota round constants xored into lane (0, 0).
const ROUND_CONSTANTS: [u64; ROUNDS] = [
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

/// Rho rotation amounts in the order the combined rho-pi walk visits lanes.
const ROTATIONS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi destination of each step of the walk, starting from lane (1, 0).
const LANE_ORDER: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Applies all 24 Keccak-f[1600] rounds to `state` in place.
pub(crate) fn permute(state: &mut [u64; 25]) {
    for &round_constant in &ROUND_CONSTANTS {
        // theta: xor each lane with the parity of two neighbouring columns
        let mut parity = [0u64; 5];
        for (i, lane) in state.iter().enumerate() {
            parity[i % 5] ^= *lane;
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // rho + pi: rotate each lane while moving it one step along the walk
        let mut carry = state[1];
        for (&target, &rotation) in LANE_ORDER.iter().zip(&ROTATIONS) {
            let rotated = carry.rotate_left(rotation);
            carry = state[target];
            state[target] = rotated;
        }

        // chi: combine each lane with the two lanes to its right in the row
        for row in state.chunks_exact_mut(5) {
            let snapshot = [row[0], row[1], row[2], row[3], row[4]];
            for x in 0..5 {
                row[x] = snapshot[x] ^ (!snapshot[(x + 1) % 5] & snapshot[(x + 2) % 5]);
            }
        }

        // iota
        state[0] ^= round_constant;
    }
}
