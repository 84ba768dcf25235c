//! crates/engine/src/algorithm.rs
//!
//! Digest algorithm selection and dispatch.

use std::fmt;

use digests::{CityHash64, Shake128, Shake256, SipHash24, SipHash24_128, SipKey};

use crate::digest::Digest;
use crate::error::DigestError;

/// Digest families supported by the facade, without their parameters.
///
/// `DigestKind` backs name-based lookup on command-line and configuration
/// surfaces; pairing a kind with its parameters yields a [`DigestAlgorithm`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DigestKind {
    /// SipHash-2-4 with 64-bit output.
    SipHash64,
    /// SipHash-2-4 with the 128-bit output extension.
    SipHash128,
    /// CityHash64 version 1.1.
    CityHash64,
    /// SHAKE128 extendable-output function.
    Shake128,
    /// SHAKE256 extendable-output function.
    Shake256,
}

impl DigestKind {
    /// Returns every supported digest kind, in display order.
    #[must_use]
    pub const fn all() -> [DigestKind; 5] {
        [
            DigestKind::SipHash64,
            DigestKind::SipHash128,
            DigestKind::CityHash64,
            DigestKind::Shake128,
            DigestKind::Shake256,
        ]
    }

    /// Returns the canonical lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DigestKind::SipHash64 => "siphash64",
            DigestKind::SipHash128 => "siphash128",
            DigestKind::CityHash64 => "cityhash64",
            DigestKind::Shake128 => "shake128",
            DigestKind::Shake256 => "shake256",
        }
    }

    /// Looks up a kind by name.
    ///
    /// Accepts the canonical names plus a few short aliases, case
    /// insensitively. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "siphash64" | "sip64" => Some(DigestKind::SipHash64),
            "siphash128" | "sip128" => Some(DigestKind::SipHash128),
            "cityhash64" | "city64" => Some(DigestKind::CityHash64),
            "shake128" | "shake-128" => Some(DigestKind::Shake128),
            "shake256" | "shake-256" => Some(DigestKind::Shake256),
            _ => None,
        }
    }

    /// Returns the fixed digest width in bytes, or `None` for the
    /// extendable-output kinds where the caller chooses the width.
    #[must_use]
    pub const fn digest_len(self) -> Option<usize> {
        match self {
            DigestKind::SipHash64 => Some(SipHash24::DIGEST_LEN),
            DigestKind::SipHash128 => Some(SipHash24_128::DIGEST_LEN),
            DigestKind::CityHash64 => Some(CityHash64::DIGEST_LEN),
            DigestKind::Shake128 | DigestKind::Shake256 => None,
        }
    }
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A digest family paired with its runtime parameters.
///
/// Construction is infallible for every variant except the SipHash pair,
/// whose slice constructors validate the 16-byte key width before any state
/// exists. Computation itself never fails.
///
/// # Examples
///
/// ```
/// use engine::DigestAlgorithm;
///
/// let unseeded = DigestAlgorithm::CityHash64 { seed: 0 };
/// let digest = unseeded.compute(b"hello world");
/// assert_eq!(digest.as_bytes(), &0x588f_b747_8bd6_b01b_u64.to_be_bytes());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DigestAlgorithm {
    /// SipHash-2-4 producing 8-byte digests.
    SipHash64 {
        /// 128-bit key mixed into the initial state.
        key: SipKey,
    },
    /// SipHash-2-4 producing 16-byte digests.
    SipHash128 {
        /// 128-bit key mixed into the initial state.
        key: SipKey,
    },
    /// CityHash64 version 1.1.
    CityHash64 {
        /// Seed folded into the digest. Zero selects the canonical unseeded
        /// form rather than a zero-seeded one.
        seed: u64,
    },
    /// SHAKE128 squeezed to a caller-chosen width.
    Shake128 {
        /// Number of bytes to squeeze out of the sponge.
        output_len: usize,
    },
    /// SHAKE256 squeezed to a caller-chosen width.
    Shake256 {
        /// Number of bytes to squeeze out of the sponge.
        output_len: usize,
    },
}

impl DigestAlgorithm {
    /// Builds the 64-bit SipHash variant from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Key`] when `key` is not exactly
    /// [`SipKey::LEN`] bytes long.
    pub fn siphash64(key: &[u8]) -> Result<Self, DigestError> {
        Ok(DigestAlgorithm::SipHash64 {
            key: SipKey::from_slice(key)?,
        })
    }

    /// Builds the 128-bit SipHash variant from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Key`] when `key` is not exactly
    /// [`SipKey::LEN`] bytes long.
    pub fn siphash128(key: &[u8]) -> Result<Self, DigestError> {
        Ok(DigestAlgorithm::SipHash128 {
            key: SipKey::from_slice(key)?,
        })
    }

    /// Returns the parameterless kind of this algorithm.
    #[must_use]
    pub const fn kind(self) -> DigestKind {
        match self {
            DigestAlgorithm::SipHash64 { .. } => DigestKind::SipHash64,
            DigestAlgorithm::SipHash128 { .. } => DigestKind::SipHash128,
            DigestAlgorithm::CityHash64 { .. } => DigestKind::CityHash64,
            DigestAlgorithm::Shake128 { .. } => DigestKind::Shake128,
            DigestAlgorithm::Shake256 { .. } => DigestKind::Shake256,
        }
    }

    /// Returns the digest width in bytes this algorithm will produce.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::SipHash64 { .. } => SipHash24::DIGEST_LEN,
            DigestAlgorithm::SipHash128 { .. } => SipHash24_128::DIGEST_LEN,
            DigestAlgorithm::CityHash64 { .. } => CityHash64::DIGEST_LEN,
            DigestAlgorithm::Shake128 { output_len }
            | DigestAlgorithm::Shake256 { output_len } => output_len,
        }
    }

    /// Computes the digest of `data`.
    #[must_use]
    pub fn compute(self, data: &[u8]) -> Digest {
        let bytes = match self {
            DigestAlgorithm::SipHash64 { key } => SipHash24::digest(key, data).to_vec(),
            DigestAlgorithm::SipHash128 { key } => SipHash24_128::digest(key, data).to_vec(),
            DigestAlgorithm::CityHash64 { seed: 0 } => CityHash64::digest(data).to_vec(),
            DigestAlgorithm::CityHash64 { seed } => {
                CityHash64::digest_with_seed(data, seed).to_vec()
            }
            DigestAlgorithm::Shake128 { output_len } => Shake128::digest(data, output_len),
            DigestAlgorithm::Shake256 { output_len } => Shake256::digest(data, output_len),
        };
        Digest::new(bytes)
    }

    /// Computes the digest of the UTF-8 bytes of `text`.
    ///
    /// Equivalent to calling [`compute`](Self::compute) on
    /// `text.as_bytes()`.
    #[must_use]
    pub fn compute_str(self, text: &str) -> Digest {
        self.compute(text.as_bytes())
    }
}
