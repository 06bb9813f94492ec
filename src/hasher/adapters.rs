//! Concrete adapters over the external hashing crates.
//!
//! Each adapter is a zero-sized type delegating to exactly one external
//! primitive per algorithm/width. The primitives are treated as black
//! boxes with a determinism contract: same (bytes, seed), same output.

use std::hash::Hasher as _;

use hashers::jenkins::spooky_hash::SpookyHasher;

use super::HashFamily;

/// MurmurHash2, 64-bit output
pub struct Murmur2_64;

impl HashFamily for Murmur2_64 {
    type Hash = u64;

    fn name() -> &'static str {
        "murmurhash2_64"
    }

    #[inline]
    fn hash_bytes(key: &[u8], seed: u64) -> u64 {
        murmur2::murmur64a(key, seed)
    }

    #[inline]
    fn hash_u64(key: u64, seed: u64) -> u64 {
        murmur2::murmur64a(&key.to_le_bytes(), seed)
    }
}

/// MurmurHash3 x64, 128-bit output
pub struct Murmur3_128;

impl HashFamily for Murmur3_128 {
    type Hash = u128;

    fn name() -> &'static str {
        "murmurhash3_128"
    }

    #[inline]
    fn hash_bytes(key: &[u8], seed: u64) -> u128 {
        fastmurmur3::murmur3_x64_128(key, seed)
    }

    #[inline]
    fn hash_u64(key: u64, seed: u64) -> u128 {
        fastmurmur3::murmur3_x64_128(&key.to_le_bytes(), seed)
    }
}

/// CityHash, 64-bit output
pub struct City64;

impl HashFamily for City64 {
    type Hash = u64;

    fn name() -> &'static str {
        "cityhash_64"
    }

    #[inline]
    fn hash_bytes(key: &[u8], seed: u64) -> u64 {
        cityhash_102_rs::city_hash_64_with_seed(key, seed)
    }

    #[inline]
    fn hash_u64(key: u64, seed: u64) -> u64 {
        cityhash_102_rs::city_hash_64_with_seed(&key.to_le_bytes(), seed)
    }
}

/// CityHash, 128-bit output.
///
/// The 128-bit seed carries the run seed in both limbs, matching
/// `CityHash128WithSeed` invoked with `{seed, seed}`.
pub struct City128;

impl HashFamily for City128 {
    type Hash = u128;

    fn name() -> &'static str {
        "cityhash_128"
    }

    #[inline]
    fn hash_bytes(key: &[u8], seed: u64) -> u128 {
        cityhash_102_rs::city_hash_128_seed(key, wide_seed(seed))
    }

    #[inline]
    fn hash_u64(key: u64, seed: u64) -> u128 {
        cityhash_102_rs::city_hash_128_seed(&key.to_le_bytes(), wide_seed(seed))
    }
}

/// SpookyHash V2, 64-bit output
pub struct Spooky64;

impl HashFamily for Spooky64 {
    type Hash = u64;

    fn name() -> &'static str {
        "spookyhash_64"
    }

    #[inline]
    fn hash_bytes(key: &[u8], seed: u64) -> u64 {
        let mut hasher = SpookyHasher::new(seed, seed);
        hasher.write(key);
        hasher.finish()
    }

    #[inline]
    fn hash_u64(key: u64, seed: u64) -> u64 {
        let mut hasher = SpookyHasher::new(seed, seed);
        hasher.write(&key.to_le_bytes());
        hasher.finish()
    }
}

/// SpookyHash V2, 128-bit output.
///
/// Both internal lanes are primed with the run seed; the 64-bit variant
/// above is the first lane of this one, as in upstream SpookyHash.
pub struct Spooky128;

impl HashFamily for Spooky128 {
    type Hash = u128;

    fn name() -> &'static str {
        "spookyhash_128"
    }

    #[inline]
    fn hash_bytes(key: &[u8], seed: u64) -> u128 {
        let mut hasher = SpookyHasher::new(seed, seed);
        hasher.write(key);
        let (h1, h2) = hasher.finish128();
        (h2 as u128) << 64 | h1 as u128
    }

    #[inline]
    fn hash_u64(key: u64, seed: u64) -> u128 {
        let mut hasher = SpookyHasher::new(seed, seed);
        hasher.write(&key.to_le_bytes());
        let (h1, h2) = hasher.finish128();
        (h2 as u128) << 64 | h1 as u128
    }
}

/// Both limbs of a CityHash 128-bit seed carry the run seed.
#[inline]
fn wide_seed(seed: u64) -> u128 {
    (seed as u128) << 64 | seed as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::HashValue;

    const SEED: u64 = 0x5EED_0F_CAFE;
    const KEY: u64 = 0x0123_4567_89AB_CDEF;
    const TEXT: &[u8] = b"the quick brown fox jumps over the lazy dog";

    fn assert_family_contract<H: HashFamily>()
    where
        H::Hash: PartialEq + std::fmt::Debug,
    {
        // Determinism for both overloads.
        assert_eq!(H::hash_u64(KEY, SEED), H::hash_u64(KEY, SEED));
        assert_eq!(H::hash_bytes(TEXT, SEED), H::hash_bytes(TEXT, SEED));

        // The integer overload hashes the raw little-endian bytes.
        assert_eq!(H::hash_u64(KEY, SEED), H::hash_bytes(&KEY.to_le_bytes(), SEED));

        // The seed participates in the hash.
        assert_ne!(H::hash_u64(KEY, SEED), H::hash_u64(KEY, SEED ^ 1));

        // Range reduction holds for this family's width.
        let h = H::hash_u64(KEY, SEED);
        assert!(H::rand(h, 1000) < 1000);
        assert_eq!(H::rand(h, 1000), H::bucket(h, 1000));
    }

    #[test]
    fn murmurhash2_64_contract() {
        assert_family_contract::<Murmur2_64>();
    }

    #[test]
    fn murmurhash3_128_contract() {
        assert_family_contract::<Murmur3_128>();
    }

    #[test]
    fn cityhash_64_contract() {
        assert_family_contract::<City64>();
    }

    #[test]
    fn cityhash_128_contract() {
        assert_family_contract::<City128>();
    }

    #[test]
    fn spookyhash_64_contract() {
        assert_family_contract::<Spooky64>();
    }

    #[test]
    fn spookyhash_128_contract() {
        assert_family_contract::<Spooky128>();
    }

    #[test]
    fn adapter_names_are_unique() {
        let names = [
            Murmur2_64::name(),
            Murmur3_128::name(),
            City64::name(),
            City128::name(),
            Spooky64::name(),
            Spooky128::name(),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spooky_64_is_the_first_lane_of_128() {
        let wide = Spooky128::hash_bytes(TEXT, SEED);
        let narrow = Spooky64::hash_bytes(TEXT, SEED);
        assert_eq!(wide.fold(), narrow);
    }
}
