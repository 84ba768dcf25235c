//! crates/engine/src/digest.rs
//!
//! Digest output container shared by every algorithm.

/// Raw digest bytes produced by a [`DigestAlgorithm`](crate::DigestAlgorithm).
///
/// The width depends on the algorithm that produced the value: fixed eight or
/// sixteen bytes for the SipHash and CityHash families, caller-chosen for the
/// SHAKE extendable-output functions. Rendering (hex or otherwise) is left to
/// consumers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the digest as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the digest and returns the owning byte vector.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the digest width in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the digest is zero bytes wide.
    ///
    /// Only the SHAKE algorithms can produce an empty digest, by requesting
    /// an output length of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
