//! crates/engine/src/error.rs
//!
//! Error types for digest construction and input reading.

use std::io;

use thiserror::Error;

use digests::SipKeyError;

/// Errors surfaced by the digest facade.
///
/// Digest computation itself is infallible; failures arise only while
/// validating key material or reading input from an external source.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Provided key material does not match the SipHash key width.
    #[error(transparent)]
    Key(#[from] SipKeyError),
    /// Underlying I/O failure raised while reading digest input.
    #[error("failed to read digest input: {0}")]
    Read(
        #[from]
        #[source]
        io::Error,
    ),
}
