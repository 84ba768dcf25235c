//! crates/engine/src/reader.rs
//!
//! Digest computation over synchronous byte sources.

use std::io::Read;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::algorithm::DigestAlgorithm;
use crate::digest::Digest;
use crate::error::DigestError;

impl DigestAlgorithm {
    /// Digests everything `reader` yields until end of input.
    ///
    /// The contents are materialized in memory before hashing, so the result
    /// equals [`compute`](Self::compute) over the concatenated bytes.
    /// Interrupted reads are retried by the underlying `read_to_end`.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Read`] when the reader fails.
    #[cfg_attr(
        feature = "tracing",
        instrument(skip(self, reader), fields(algorithm = %self.kind()), name = "digest_reader")
    )]
    pub fn digest_reader<R: Read>(self, mut reader: R) -> Result<Digest, DigestError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(self.compute(&data))
    }
}
