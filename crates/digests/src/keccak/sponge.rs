//! crates/digests/src/keccak/sponge.rs
//!
//! Sponge absorb/squeeze machinery and the public SHAKE hashers.
//!
//! A SHAKE instance absorbs message bytes into the low `RATE` bytes of the
//! Keccak state (little-endian per lane), permuting after every full block.
//! Finalization applies the SHAKE pad10*1 padding, then squeezes any number
//! of output bytes, permuting between rate-sized output blocks.

use super::f1600;

/// Domain-separation suffix xored into the first padding byte.
const SHAKE_SUFFIX: u8 = 0x1f;

/// SHAKE128 rate in bytes (1600-bit state minus the 256-bit capacity).
const SHAKE128_RATE: usize = 168;

/// SHAKE256 rate in bytes (1600-bit state minus the 512-bit capacity).
const SHAKE256_RATE: usize = 136;

/// Absorb/squeeze state, generic over the rate in bytes.
///
/// `filled` counts buffered message bytes and stays strictly below `RATE`;
/// a completed block is absorbed immediately.
#[derive(Clone)]
struct Sponge<const RATE: usize> {
    state: [u64; 25],
    block: [u8; RATE],
    filled: usize,
}

impl<const RATE: usize> Sponge<RATE> {
    const fn new() -> Self {
        Self {
            state: [0; 25],
            block: [0; RATE],
            filled: 0,
        }
    }

    /// Xors the buffered block into the low lanes and permutes.
    fn absorb_block(&mut self) {
        for (lane, chunk) in self.state.iter_mut().zip(self.block.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
        f1600::permute(&mut self.state);
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if self.filled > 0 {
            let take = (RATE - self.filled).min(data.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
            if self.filled < RATE {
                return;
            }
            self.absorb_block();
            self.filled = 0;
        }

        while data.len() >= RATE {
            self.block.copy_from_slice(&data[..RATE]);
            self.absorb_block();
            data = &data[RATE..];
        }

        if !data.is_empty() {
            self.block[..data.len()].copy_from_slice(data);
            self.filled = data.len();
        }
    }

    /// Pads and absorbs the final block, then squeezes `output_len` bytes.
    ///
    /// When the buffered data fills all but the last byte of the block, the
    /// suffix and the closing 0x80 land on the same byte; the xors compose.
    fn finish(mut self, output_len: usize) -> Vec<u8> {
        self.block[self.filled..].fill(0);
        self.block[self.filled] ^= SHAKE_SUFFIX;
        self.block[RATE - 1] ^= 0x80;
        self.absorb_block();

        let mut output = vec![0u8; output_len];
        let mut offset = 0;
        while offset < output_len {
            for (chunk, lane) in self.block.chunks_exact_mut(8).zip(self.state.iter()) {
                chunk.copy_from_slice(&lane.to_le_bytes());
            }
            let take = (output_len - offset).min(RATE);
            output[offset..offset + take].copy_from_slice(&self.block[..take]);
            offset += take;
            if offset < output_len {
                f1600::permute(&mut self.state);
            }
        }
        output
    }
}

// ============================================================================
// SHAKE128
// ============================================================================

/// Streaming SHAKE128 extendable-output hasher (FIPS 202, capacity 256).
///
/// # Examples
///
/// One-shot hashing:
///
/// ```
/// use digests::Shake128;
///
/// let digest = Shake128::digest(b"hello world", 32);
/// assert_eq!(digest.len(), 32);
/// assert_eq!(digest[0], 0x3a);
/// ```
///
/// Incremental hashing with a caller-chosen output length:
///
/// ```
/// use digests::Shake128;
///
/// let mut hasher = Shake128::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize_xof(32), Shake128::digest(b"hello world", 32));
/// ```
#[derive(Clone)]
pub struct Shake128 {
    sponge: Sponge<SHAKE128_RATE>,
}

impl Shake128 {
    /// Bytes absorbed or squeezed per permutation.
    pub const RATE: usize = SHAKE128_RATE;

    /// Creates an empty hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sponge: Sponge::new(),
        }
    }

    /// Feeds additional bytes into the sponge.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Finalises the sponge and squeezes `output_len` bytes.
    ///
    /// An `output_len` of 0 is valid and returns an empty digest. Longer
    /// outputs extend shorter ones: the first N bytes are the same for
    /// every requested length.
    #[must_use]
    pub fn finalize_xof(self, output_len: usize) -> Vec<u8> {
        self.sponge.finish(output_len)
    }

    /// Convenience helper that computes `output_len` bytes of SHAKE128
    /// output for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8], output_len: usize) -> Vec<u8> {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize_xof(output_len)
    }
}

impl Default for Shake128 {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SHAKE256
// ============================================================================

/// Streaming SHAKE256 extendable-output hasher (FIPS 202, capacity 512).
///
/// # Examples
///
/// ```
/// use digests::Shake256;
///
/// let digest = Shake256::digest(b"hello world", 64);
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest[0], 0x36);
/// ```
#[derive(Clone)]
pub struct Shake256 {
    sponge: Sponge<SHAKE256_RATE>,
}

impl Shake256 {
    /// Bytes absorbed or squeezed per permutation.
    pub const RATE: usize = SHAKE256_RATE;

    /// Creates an empty hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sponge: Sponge::new(),
        }
    }

    /// Feeds additional bytes into the sponge.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Finalises the sponge and squeezes `output_len` bytes.
    ///
    /// An `output_len` of 0 is valid and returns an empty digest.
    #[must_use]
    pub fn finalize_xof(self, output_len: usize) -> Vec<u8> {
        self.sponge.finish(output_len)
    }

    /// Convenience helper that computes `output_len` bytes of SHAKE256
    /// output for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8], output_len: usize) -> Vec<u8> {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize_xof(output_len)
    }
}

impl Default for Shake256 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    fn to_hex(bytes: &[u8]) -> String {
        let mut hex = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            write!(hex, "{byte:02x}").unwrap();
        }
        hex
    }

    /// Repeating 00 01 .. ff byte pattern used by the reference vectors.
    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 256) as u8).collect()
    }

    #[test]
    fn shake128_matches_rate_boundary_vectors() {
        // Message lengths straddling the 168-byte rate, plus two full blocks.
        let vectors: [(usize, &str); 7] = [
            (0, "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"),
            (1, "0b784469a0628e03861cd8a196dfafa0e9e8056d04cddcc49f0746b9ad43ccb2"),
            (7, "4652c0aed60f33ef1b6dd719770cffc99756d6865d74e8f27da5118b29236561"),
            (167, "1e552791cc4e93a0d4a8dc47ae49228c2faa869e40e628f6ace477aec3f1ca7a"),
            (168, "f15277eb61c4908d44a2853f3cde071ae2ed7a23461fbe162a1a98cf6875059c"),
            (169, "015be3338c986d9846affa0f94b4afc2a76bc289c709e1a596ec9eccf090a773"),
            (336, "1ec1f8887fb8a5ecd8fc2692203320267a3be636509f5a0065ef594341b84998"),
        ];

        for (len, expected) in vectors {
            assert_eq!(
                to_hex(&Shake128::digest(&pattern(len), 32)),
                expected,
                "mismatch for message length {len}"
            );
        }
    }

    #[test]
    fn shake256_matches_rate_boundary_vectors() {
        // Message lengths straddling the 136-byte rate, plus two full blocks.
        let vectors: [(usize, &str); 7] = [
            (0, "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"),
            (1, "b8d01df855f7075882c636f6ddeacf41e5de0bbf30042ef0a86e36f4b8600d54"),
            (7, "552294355aff5c43a2c7009607e47c0ca3720536eeccb2f7560d1574ce1a1979"),
            (135, "c45dae624ad8a2f5aa7bac9d7557737fd91c96eedb70a6be5574d57a844eade0"),
            (136, "b7ff4073b3f5a8eabd6e17705ca7f6761a31058f9df781a6a47e3a3063b9d67a"),
            (137, "01d90952c642a5eb2a8fc9d713f843a45d7ac05132dddcb2efc9bebc27e37bcb"),
            (272, "8379a36d10791291fbc946794bf8009519fd0b2ff6c0bd99a2b014e8422abef0"),
        ];

        for (len, expected) in vectors {
            assert_eq!(
                to_hex(&Shake256::digest(&pattern(len), 32)),
                expected,
                "mismatch for message length {len}"
            );
        }
    }

    #[test]
    fn matches_known_text_vectors() {
        assert_eq!(
            to_hex(&Shake128::digest(b"hello world", 32)),
            "3a9159f071e4dd1c8c4f968607c30942e120d8156b8b1e72e0d376e8871cb8b8"
        );
        assert_eq!(
            to_hex(&Shake256::digest(b"hello world", 64)),
            "369771bb2cb9d2b04c1d54cca487e372d9f187f73f7ba3f65b95c8ee7798c527\
             f4f3c2d55c2d46a29f2e945d469c3df27853a8735271f5cc2d9e889544357116"
        );
        assert_eq!(
            to_hex(&Shake256::digest(b"hello world", 16)),
            "369771bb2cb9d2b04c1d54cca487e372"
        );
    }

    #[test]
    fn longer_outputs_extend_shorter_ones() {
        let input = pattern(50);
        let long = Shake128::digest(&input, 500);
        assert_eq!(long[..32], Shake128::digest(&input, 32)[..]);
        assert_eq!(long[..1], Shake128::digest(&input, 1)[..]);

        let long = Shake256::digest(&input, 500);
        assert_eq!(long[..64], Shake256::digest(&input, 64)[..]);
    }

    #[test]
    fn output_length_zero_yields_empty_digest() {
        assert!(Shake128::digest(b"data", 0).is_empty());
        assert!(Shake256::digest(b"data", 0).is_empty());
    }

    #[test]
    fn streaming_split_matches_one_shot() {
        let message = pattern(400);

        // Splits on either side of both rate boundaries.
        for split in [0usize, 1, 135, 136, 137, 167, 168, 169, 399, 400] {
            let mut narrow = Shake128::new();
            narrow.update(&message[..split]);
            narrow.update(&message[split..]);
            assert_eq!(
                narrow.finalize_xof(48),
                Shake128::digest(&message, 48),
                "SHAKE128 mismatch at split {split}"
            );

            let mut wide = Shake256::new();
            wide.update(&message[..split]);
            wide.update(&message[split..]);
            assert_eq!(
                wide.finalize_xof(48),
                Shake256::digest(&message, 48),
                "SHAKE256 mismatch at split {split}"
            );
        }
    }

    #[test]
    fn byte_at_a_time_matches_one_shot() {
        let message = pattern(170);
        let mut hasher = Shake256::new();
        for byte in &message {
            hasher.update(std::slice::from_ref(byte));
        }
        assert_eq!(hasher.finalize_xof(32), Shake256::digest(&message, 32));
    }
}
