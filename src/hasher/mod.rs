//! Hasher adapters: one fixed algorithm/width pairing per type.
//!
//! Every adapter exposes the same capability bundle (`name`, the two hash
//! overloads, range reduction) through [`HashFamily`], so the benchmark
//! loops monomorphize per algorithm and never pay a virtual call. Runtime
//! selection happens once, outside the timed region, in
//! [`crate::bench::HasherKind`].

mod adapters;

pub use adapters::{City128, City64, Murmur2_64, Murmur3_128, Spooky128, Spooky64};

use crate::reduce;

/// Fixed-width hash output, abstracting over `u64` and `u128`.
pub trait HashValue: Copy {
    /// Map this hash uniformly into `[0, n)` with the width-matched reducer.
    fn reduce(self, n: u64) -> u64;

    /// Low 64 bits, for checksum accumulation.
    fn fold(self) -> u64;
}

impl HashValue for u64 {
    #[inline]
    fn reduce(self, n: u64) -> u64 {
        reduce::rand64(self, n)
    }

    #[inline]
    fn fold(self) -> u64 {
        self
    }
}

impl HashValue for u128 {
    #[inline]
    fn reduce(self, n: u64) -> u64 {
        reduce::rand128(self, n)
    }

    #[inline]
    fn fold(self) -> u64 {
        self as u64
    }
}

/// A stateless hash algorithm at a fixed output width.
///
/// Implementations must be pure: identical (key, seed) pairs always produce
/// identical hashes, with no hidden state.
pub trait HashFamily {
    /// Hash output type
    type Hash: HashValue;

    /// Stable unique identifier, used for reporting and selection
    fn name() -> &'static str;

    /// Hash a byte-string key under the given seed
    fn hash_bytes(key: &[u8], seed: u64) -> Self::Hash;

    /// Hash a raw 64-bit key under the given seed.
    ///
    /// Hashes the 8 little-endian bytes of the integer directly, without
    /// intermediate allocation.
    fn hash_u64(key: u64, seed: u64) -> Self::Hash;

    /// Bias-free uniform value in `[0, n)` derived from a hash
    #[inline]
    fn rand(h: Self::Hash, n: u64) -> u64 {
        h.reduce(n)
    }

    /// Bucket index in `[0, n)` for hash-table style placement.
    ///
    /// Same formula as [`rand`](Self::rand); callers use the two entry
    /// points in different roles.
    #[inline]
    fn bucket(h: Self::Hash, n: u64) -> u64 {
        h.reduce(n)
    }
}

/// Key-side dispatch to the matching [`HashFamily`] overload.
///
/// Lets the benchmark loops stay generic over the key kind without
/// branching per key.
pub trait BenchKey {
    /// Hash this key with family `H` under `seed`
    fn hash_with<H: HashFamily>(&self, seed: u64) -> H::Hash;
}

impl BenchKey for u64 {
    #[inline]
    fn hash_with<H: HashFamily>(&self, seed: u64) -> H::Hash {
        H::hash_u64(*self, seed)
    }
}

impl BenchKey for String {
    #[inline]
    fn hash_with<H: HashFamily>(&self, seed: u64) -> H::Hash {
        H::hash_bytes(self.as_bytes(), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_of_u128_takes_the_low_limb() {
        let h: u128 = (0xAAAA_BBBB_CCCC_DDDD_u128 << 64) | 0x1111_2222_3333_4444;
        assert_eq!(h.fold(), 0x1111_2222_3333_4444);
    }

    #[test]
    fn reduce_dispatches_by_width() {
        // A u64 hash reduces through its upper 32 bits, a u128 hash
        // through its upper 64; the same numeric value lands differently.
        let h64: u64 = 0xFFFF_FFFF_0000_0000;
        let h128: u128 = h64 as u128;
        assert_eq!(h64.reduce(100), 99);
        assert_eq!(h128.reduce(100), 0);
    }
}
