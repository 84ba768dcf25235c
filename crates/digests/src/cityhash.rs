//! crates/digests/src/cityhash.rs
//!
//! CityHash64 (v1.1) seeded fingerprints.
//!
//! CityHash64 mixes 8-byte little-endian words with 64-bit multiplies,
//! rotates, and xor-shifts. Inputs of up to 64 bytes take dedicated
//! short-input paths; longer inputs run a 64-byte chunk loop seeded from the
//! final 64 bytes of the message. The algorithm is defined only over a
//! complete buffer, so no streaming form exists.
//!
//! The mixing constants are fixed by the upstream specification and must
//! not be altered; the reference vectors in the tests hold bit-for-bit.

use core::mem;

const K0: u64 = 0xc3a5_c85c_97cb_3127;
const K1: u64 = 0xb492_b66f_be98_f273;
const K2: u64 = 0x9ae1_6a3b_2f90_404f;

/// Multiplier of the 128-to-64-bit finalizer.
const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

#[inline]
fn fetch64(data: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(word)
}

#[inline]
fn fetch32(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(word)
}

#[inline]
const fn shift_mix(value: u64) -> u64 {
    value ^ (value >> 47)
}

fn hash_len_16_mul(u: u64, v: u64, mul: u64) -> u64 {
    let mut a = (u ^ v).wrapping_mul(mul);
    a ^= a >> 47;
    let mut b = (v ^ a).wrapping_mul(mul);
    b ^= b >> 47;
    b.wrapping_mul(mul)
}

fn hash_len_16(u: u64, v: u64) -> u64 {
    hash_len_16_mul(u, v, K_MUL)
}

fn hash_len_0_to_16(data: &[u8]) -> u64 {
    let len = data.len();
    if len >= 8 {
        let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
        let a = fetch64(data, 0).wrapping_add(K2);
        let b = fetch64(data, len - 8);
        let c = b.rotate_right(37).wrapping_mul(mul).wrapping_add(a);
        let d = a.rotate_right(25).wrapping_add(b).wrapping_mul(mul);
        return hash_len_16_mul(c, d, mul);
    }
    if len >= 4 {
        let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
        let a = u64::from(fetch32(data, 0));
        return hash_len_16_mul(
            (len as u64).wrapping_add(a << 3),
            u64::from(fetch32(data, len - 4)),
            mul,
        );
    }
    if len > 0 {
        let a = u32::from(data[0]);
        let b = u32::from(data[len >> 1]);
        let c = u32::from(data[len - 1]);
        let y = a.wrapping_add(b << 8);
        let z = (len as u32).wrapping_add(c << 2);
        return shift_mix(u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K0))
            .wrapping_mul(K2);
    }
    K2
}

fn hash_len_17_to_32(data: &[u8]) -> u64 {
    let len = data.len();
    let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
    let a = fetch64(data, 0).wrapping_mul(K1);
    let b = fetch64(data, 8);
    let c = fetch64(data, len - 8).wrapping_mul(mul);
    let d = fetch64(data, len - 16).wrapping_mul(K2);
    hash_len_16_mul(
        a.wrapping_add(b)
            .rotate_right(43)
            .wrapping_add(c.rotate_right(30))
            .wrapping_add(d),
        a.wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c),
        mul,
    )
}

fn hash_len_33_to_64(data: &[u8]) -> u64 {
    let len = data.len();
    let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
    let a = fetch64(data, 0).wrapping_mul(K2);
    let b = fetch64(data, 8);
    let c = fetch64(data, len - 24);
    let d = fetch64(data, len - 32);
    let e = fetch64(data, 16).wrapping_mul(K2);
    let f = fetch64(data, 24).wrapping_mul(9);
    let g = fetch64(data, len - 8);
    let h = fetch64(data, len - 16).wrapping_mul(mul);

    let u = a
        .wrapping_add(g)
        .rotate_right(43)
        .wrapping_add(b.rotate_right(30).wrapping_add(c).wrapping_mul(9));
    let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
    let w = u
        .wrapping_add(v)
        .wrapping_mul(mul)
        .swap_bytes()
        .wrapping_add(h);
    let x = e.wrapping_add(f).rotate_right(42).wrapping_add(c);
    let y = v
        .wrapping_add(w)
        .wrapping_mul(mul)
        .swap_bytes()
        .wrapping_add(g)
        .wrapping_mul(mul);
    let z = e.wrapping_add(f).wrapping_add(c);

    let a = x
        .wrapping_add(z)
        .wrapping_mul(mul)
        .wrapping_add(y)
        .swap_bytes()
        .wrapping_add(b);
    let b = shift_mix(
        z.wrapping_add(a)
            .wrapping_mul(mul)
            .wrapping_add(d)
            .wrapping_add(h),
    )
    .wrapping_mul(mul);
    b.wrapping_add(x)
}

/// Hashes `data[offset..offset + 32]` together with the seed pair `(a, b)`.
fn weak_hash_len_32_with_seeds(data: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
    let w = fetch64(data, offset);
    let x = fetch64(data, offset + 8);
    let y = fetch64(data, offset + 16);
    let z = fetch64(data, offset + 24);

    let mut a = a.wrapping_add(w);
    let mut b = b.wrapping_add(a).wrapping_add(z).rotate_right(21);
    let c = a;
    a = a.wrapping_add(x);
    a = a.wrapping_add(y);
    b = b.wrapping_add(a.rotate_right(44));
    (a.wrapping_add(z), b.wrapping_add(c))
}

fn hash_long(data: &[u8]) -> u64 {
    let len = data.len();

    // Seed the loop state from the last 64 bytes of the message.
    let mut x = fetch64(data, len - 40);
    let mut y = fetch64(data, len - 16).wrapping_add(fetch64(data, len - 56));
    let mut z = hash_len_16(
        fetch64(data, len - 48).wrapping_add(len as u64),
        fetch64(data, len - 24),
    );
    let mut v = weak_hash_len_32_with_seeds(data, len - 64, len as u64, z);
    let mut w = weak_hash_len_32_with_seeds(data, len - 32, y.wrapping_add(K1), x);
    x = x.wrapping_mul(K1).wrapping_add(fetch64(data, 0));

    let mut pos = 0;
    let mut remaining = (len - 1) & !63;
    loop {
        x = x
            .wrapping_add(y)
            .wrapping_add(v.0)
            .wrapping_add(fetch64(data, pos + 8))
            .rotate_right(37)
            .wrapping_mul(K1);
        y = y
            .wrapping_add(v.1)
            .wrapping_add(fetch64(data, pos + 48))
            .rotate_right(42)
            .wrapping_mul(K1);
        x ^= w.1;
        y = y.wrapping_add(v.0).wrapping_add(fetch64(data, pos + 40));
        z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(K1);
        v = weak_hash_len_32_with_seeds(data, pos, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
        w = weak_hash_len_32_with_seeds(
            data,
            pos + 32,
            z.wrapping_add(w.1),
            y.wrapping_add(fetch64(data, pos + 16)),
        );
        mem::swap(&mut z, &mut x);
        pos += 64;
        remaining -= 64;
        if remaining == 0 {
            break;
        }
    }

    hash_len_16(
        hash_len_16(v.0, w.0)
            .wrapping_add(shift_mix(y).wrapping_mul(K1))
            .wrapping_add(z),
        hash_len_16(v.1, w.1).wrapping_add(x),
    )
}

/// CityHash64 (v1.1) one-shot hasher.
///
/// # Examples
///
/// ```
/// use digests::CityHash64;
///
/// assert_eq!(CityHash64::hash(b""), 0x9ae1_6a3b_2f90_404f);
/// assert_eq!(CityHash64::hash(b"hello world"), 0x588f_b747_8bd6_b01b);
///
/// // The byte digest is the value rendered big-endian
/// let digest = CityHash64::digest(b"hello world");
/// assert_eq!(u64::from_be_bytes(digest), CityHash64::hash(b"hello world"));
/// ```
pub struct CityHash64;

impl CityHash64 {
    /// Number of bytes in a CityHash64 digest.
    pub const DIGEST_LEN: usize = 8;

    /// Computes the canonical unseeded CityHash64 value of `data`.
    #[must_use]
    pub fn hash(data: &[u8]) -> u64 {
        let len = data.len();
        if len <= 32 {
            if len <= 16 {
                hash_len_0_to_16(data)
            } else {
                hash_len_17_to_32(data)
            }
        } else if len <= 64 {
            hash_len_33_to_64(data)
        } else {
            hash_long(data)
        }
    }

    /// Computes the CityHash64 value of `data` mixed with `seed`.
    ///
    /// A seed of 0 is still a seed here; the result differs from
    /// [`hash`](Self::hash) for every seed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use digests::CityHash64;
    ///
    /// let unseeded = CityHash64::hash(b"data");
    /// assert_ne!(CityHash64::hash_with_seed(b"data", 0), unseeded);
    /// ```
    #[must_use]
    pub fn hash_with_seed(data: &[u8], seed: u64) -> u64 {
        Self::hash_with_seeds(data, K2, seed)
    }

    /// Computes the CityHash64 value of `data` mixed with the seed pair
    /// `(seed0, seed1)`.
    #[must_use]
    pub fn hash_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
        hash_len_16(Self::hash(data).wrapping_sub(seed0), seed1)
    }

    /// Computes the unseeded digest as 8 big-endian bytes.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; 8] {
        Self::hash(data).to_be_bytes()
    }

    /// Computes the seeded digest as 8 big-endian bytes.
    #[must_use]
    pub fn digest_with_seed(data: &[u8], seed: u64) -> [u8; 8] {
        Self::hash_with_seed(data, seed).to_be_bytes()
    }
}
