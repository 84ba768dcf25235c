//! crates/digests/src/siphash.rs
//!
//! SipHash-2-4 and SipHash-128-2-4 keyed digests.
//!
//! SipHash is an ARX pseudorandom function over a 256-bit internal state,
//! keyed with 128 bits. The "2-4" parameterization runs two compression
//! rounds per message word and four finalization rounds. Both output widths
//! share the same absorption pipeline; the 128-bit variant adds the
//! reference implementation's domain-separation constants during
//! initialization and finalization.
//!
//! Output bytes encode the finalization words big-endian, so the hex
//! rendering of a digest equals the conventional hexadecimal rendering of
//! the underlying 64-bit values.

use core::fmt;

// ============================================================================
// Key material
// ============================================================================

/// A validated 128-bit SipHash key.
///
/// The key is interpreted as two 64-bit little-endian words during state
/// initialization. The `Debug` implementation does not reveal the key bytes.
///
/// # Examples
///
/// ```
/// use digests::SipKey;
///
/// let key = SipKey::new([0u8; 16]);
/// assert_eq!(key.as_bytes().len(), SipKey::LEN);
///
/// // Slices must be exactly 16 bytes
/// assert!(SipKey::from_slice(&[0u8; 16]).is_ok());
/// assert!(SipKey::from_slice(&[0u8; 15]).is_err());
/// ```
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct SipKey([u8; 16]);

impl SipKey {
    /// Number of bytes in a SipHash key.
    pub const LEN: usize = 16;

    /// Wraps a 16-byte array as a key.
    #[must_use]
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Validates that `bytes` is exactly 16 bytes long and wraps it as a key.
    ///
    /// # Errors
    ///
    /// Returns [`SipKeyError`] when the slice length is not 16.
    ///
    /// # Examples
    ///
    /// ```
    /// use digests::SipKey;
    ///
    /// let err = SipKey::from_slice(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err.len(), 3);
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SipKeyError> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| SipKeyError::new(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// Borrows the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Splits the key into its two little-endian 64-bit words.
    const fn words(self) -> (u64, u64) {
        let b = self.0;
        let k0 = u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
        let k1 = u64::from_le_bytes([b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]);
        (k0, k1)
    }
}

impl fmt::Debug for SipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SipKey(..)")
    }
}

/// Error returned when constructing a [`SipKey`] from a slice of the wrong length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SipKeyError {
    len: usize,
}

impl SipKeyError {
    /// Number of bytes the caller supplied when the error was raised.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Reports whether the provided slice was empty when the error occurred.
    ///
    /// # Examples
    ///
    /// ```
    /// use digests::SipKey;
    ///
    /// let err = SipKey::from_slice(&[]).unwrap_err();
    /// assert!(err.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Number of bytes required to build a SipHash key.
    pub const EXPECTED_LEN: usize = SipKey::LEN;

    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }
}

impl fmt::Display for SipKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SipHash key requires {} bytes, received {}",
            Self::EXPECTED_LEN,
            self.len
        )
    }
}

impl std::error::Error for SipKeyError {}

// ============================================================================
// Shared absorption pipeline
// ============================================================================

/// The four 64-bit state words v0..v3.
#[derive(Clone, Copy)]
struct SipState {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

impl SipState {
    const fn new(key: SipKey) -> Self {
        let (k0, k1) = key.words();
        Self {
            v0: 0x736f_6d65_7073_6575 ^ k0,
            v1: 0x646f_7261_6e64_6f6d ^ k1,
            v2: 0x6c79_6765_6e65_7261 ^ k0,
            v3: 0x7465_6462_7974_6573 ^ k1,
        }
    }

    /// One SipRound: two interleaved ARX half-rounds over v0..v3.
    #[inline]
    fn round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(32);
        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16);
        self.v3 ^= self.v2;
        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21);
        self.v3 ^= self.v0;
        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(32);
    }

    /// Absorbs one message word with c = 2 compression rounds.
    #[inline]
    fn compress(&mut self, word: u64) {
        self.v3 ^= word;
        self.round();
        self.round();
        self.v0 ^= word;
    }

    #[inline]
    fn combined(&self) -> u64 {
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}

/// Streaming absorption state shared by both output widths.
///
/// Buffers up to seven trailing bytes between `update` calls and tracks the
/// total message length for the final length-tagged word.
#[derive(Clone)]
struct SipCore {
    state: SipState,
    pending: [u8; 8],
    pending_len: usize,
    message_len: u64,
}

impl SipCore {
    const fn new(state: SipState) -> Self {
        Self {
            state,
            pending: [0; 8],
            pending_len: 0,
            message_len: 0,
        }
    }

    fn update(&mut self, mut data: &[u8]) {
        self.message_len = self.message_len.wrapping_add(data.len() as u64);

        if self.pending_len > 0 {
            let take = (8 - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take]
                .copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];
            if self.pending_len < 8 {
                return;
            }
            self.state.compress(u64::from_le_bytes(self.pending));
            self.pending_len = 0;
        }

        let mut words = data.chunks_exact(8);
        for chunk in &mut words {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            self.state.compress(u64::from_le_bytes(word));
        }

        let rest = words.remainder();
        if !rest.is_empty() {
            self.pending[..rest.len()].copy_from_slice(rest);
            self.pending_len = rest.len();
        }
    }

    /// Absorbs the final word (trailing bytes plus the length tag) and
    /// returns the state ready for the output rounds.
    fn finish(self) -> SipState {
        let mut block = [0u8; 8];
        block[..self.pending_len].copy_from_slice(&self.pending[..self.pending_len]);
        block[7] = (self.message_len & 0xff) as u8;

        let mut state = self.state;
        state.compress(u64::from_le_bytes(block));
        state
    }
}

// ============================================================================
// SipHash-2-4 (64-bit output)
// ============================================================================

/// Streaming SipHash-2-4 hasher producing 64-bit digests.
///
/// # Examples
///
/// One-shot hashing with the reference test key:
///
/// ```
/// use digests::{SipHash24, SipKey};
///
/// let key = SipKey::new([
///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
///     0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
/// ]);
/// let digest = SipHash24::digest(key, b"");
/// assert_eq!(u64::from_be_bytes(digest), 0x726f_db47_dd0e_0e31);
/// ```
///
/// Incremental hashing:
///
/// ```
/// use digests::{SipHash24, SipKey};
///
/// let key = SipKey::new([7u8; 16]);
///
/// let mut hasher = SipHash24::new(key);
/// hasher.update(b"chunk 1");
/// hasher.update(b"chunk 2");
/// let digest = hasher.finalize();
///
/// // Equivalent to one-shot
/// assert_eq!(digest, SipHash24::digest(key, b"chunk 1chunk 2"));
/// ```
#[derive(Clone)]
pub struct SipHash24 {
    core: SipCore,
}

impl SipHash24 {
    /// Number of bytes in a SipHash-2-4 digest.
    pub const DIGEST_LEN: usize = 8;

    /// Creates a hasher keyed with `key`.
    #[must_use]
    pub const fn new(key: SipKey) -> Self {
        Self {
            core: SipCore::new(SipState::new(key)),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.core.update(data);
    }

    /// Finalises the digest and returns the big-endian 64-bit output.
    ///
    /// # Examples
    ///
    /// ```
    /// use digests::{SipHash24, SipKey};
    ///
    /// let mut hasher = SipHash24::new(SipKey::new([0u8; 16]));
    /// hasher.update(b"data");
    /// let digest = hasher.finalize();
    /// assert_eq!(digest.len(), 8);
    /// ```
    #[must_use]
    pub fn finalize(self) -> [u8; 8] {
        let mut state = self.core.finish();
        state.v2 ^= 0xff;
        for _ in 0..4 {
            state.round();
        }
        state.combined().to_be_bytes()
    }

    /// Convenience helper that computes the SipHash-2-4 digest for `data` in
    /// one shot.
    ///
    /// # Examples
    ///
    /// ```
    /// use digests::{SipHash24, SipKey};
    ///
    /// let digest = SipHash24::digest(SipKey::new([0u8; 16]), b"hello");
    /// assert_eq!(digest.len(), 8);
    /// ```
    #[must_use]
    pub fn digest(key: SipKey, data: &[u8]) -> [u8; 8] {
        let mut hasher = Self::new(key);
        hasher.update(data);
        hasher.finalize()
    }
}

// ============================================================================
// SipHash-128-2-4 (128-bit output)
// ============================================================================

/// Streaming SipHash-128-2-4 hasher producing 128-bit digests.
///
/// The 128-bit variant XORs `0xee` into v1 during initialization and runs
/// two finalization passes, separating the output domains of the two
/// widths; hashing the same message with the same key under both variants
/// yields unrelated digests.
///
/// # Examples
///
/// ```
/// use digests::{SipHash24_128, SipKey};
///
/// let key = SipKey::new([
///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
///     0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
/// ]);
/// let digest = SipHash24_128::digest(key, b"");
/// assert_eq!(digest.len(), 16);
/// assert_eq!(
///     u64::from_be_bytes(digest[..8].try_into().unwrap()),
///     0xe6a8_25ba_047f_81a3,
/// );
/// ```
#[derive(Clone)]
pub struct SipHash24_128 {
    core: SipCore,
}

impl SipHash24_128 {
    /// Number of bytes in a SipHash-128-2-4 digest.
    pub const DIGEST_LEN: usize = 16;

    /// Creates a hasher keyed with `key`.
    #[must_use]
    pub const fn new(key: SipKey) -> Self {
        let mut state = SipState::new(key);
        state.v1 ^= 0xee;
        Self {
            core: SipCore::new(state),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.core.update(data);
    }

    /// Finalises the digest and returns the two big-endian output words.
    #[must_use]
    pub fn finalize(self) -> [u8; 16] {
        let mut state = self.core.finish();
        state.v2 ^= 0xee;
        for _ in 0..4 {
            state.round();
        }
        let first = state.combined();

        state.v1 ^= 0xdd;
        for _ in 0..4 {
            state.round();
        }
        let second = state.combined();

        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&first.to_be_bytes());
        out[8..].copy_from_slice(&second.to_be_bytes());
        out
    }

    /// Convenience helper that computes the SipHash-128-2-4 digest for
    /// `data` in one shot.
    ///
    /// # Examples
    ///
    /// ```
    /// use digests::{SipHash24_128, SipKey};
    ///
    /// let key = SipKey::new([42u8; 16]);
    /// let mut hasher = SipHash24_128::new(key);
    /// hasher.update(b"stream");
    /// assert_eq!(hasher.finalize(), SipHash24_128::digest(key, b"stream"));
    /// ```
    #[must_use]
    pub fn digest(key: SipKey, data: &[u8]) -> [u8; 16] {
        let mut hasher = Self::new(key);
        hasher.update(data);
        hasher.finalize()
    }
}
