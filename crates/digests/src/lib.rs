#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod cityhash;
mod keccak;
mod siphash;

pub use cityhash::CityHash64;
pub use keccak::{Shake128, Shake256};
pub use siphash::{SipHash24, SipHash24_128, SipKey, SipKeyError};
