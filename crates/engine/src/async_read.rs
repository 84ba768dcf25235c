//! crates/engine/src/async_read.rs
//!
//! Async file digest entry point, compiled with the `async` feature.

use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::algorithm::DigestAlgorithm;
use crate::digest::Digest;
use crate::error::DigestError;

impl DigestAlgorithm {
    /// Digests the contents of the file at `path`.
    ///
    /// The file is read to completion through tokio before the synchronous
    /// core runs, so the future suspends only while reading and the result
    /// equals [`compute`](Self::compute) over the file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Read`] when opening or reading the file fails.
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    #[cfg_attr(
        feature = "tracing",
        instrument(skip(self, path), fields(algorithm = %self.kind()), name = "digest_file")
    )]
    pub async fn digest_file(self, path: impl AsRef<Path>) -> Result<Digest, DigestError> {
        let data = tokio::fs::read(path).await?;
        Ok(self.compute(&data))
    }
}
