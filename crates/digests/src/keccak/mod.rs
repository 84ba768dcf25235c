//! crates/digests/src/keccak/mod.rs
//!
//! Keccak-f[1600] sponge construction and the SHAKE extendable-output
//! functions. Only the SHAKE types are public; the permutation state never
//! leaves this module.

mod f1600;
mod sponge;

pub use sponge::{Shake128, Shake256};
