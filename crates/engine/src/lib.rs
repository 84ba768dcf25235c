#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algorithm;
mod digest;
mod error;
mod reader;

#[cfg(feature = "async")]
mod async_read;

pub use algorithm::{DigestAlgorithm, DigestKind};
pub use digest::Digest;
pub use error::DigestError;

pub use digests::{SipKey, SipKeyError};
