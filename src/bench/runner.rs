//! Timed benchmark phases and reporting.
//!
//! Each selected hasher runs two phases over the same read-only corpus:
//! pure hashing, then hashing plus bucket assignment. Hasher selection is
//! resolved once, before any timing, so the per-key loops are fully
//! monomorphized.

use std::fmt::Write as _;
use std::time::Instant;

use crate::hasher::{
    BenchKey, City128, City64, HashFamily, HashValue, Murmur2_64, Murmur3_128, Spooky128, Spooky64,
};

/// Repetitions of each timed phase
pub const RUNS: u64 = 5;

/// Corpus keys per bucket in the bucket-assignment phase
const KEYS_PER_BUCKET: u64 = 100;

/// Figures from the hash+bucket phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketPhase {
    /// Bucket count, corpus size / 100
    pub num_buckets: u64,

    /// Sum of bucket indices; defeats dead-code elimination, diagnostic only
    pub checksum: u64,

    /// Average nanoseconds per key
    pub ns_per_key: f64,
}

/// Result of running one hasher over the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct HasherReport {
    /// Adapter name
    pub name: &'static str,

    /// Sum of hash values; defeats dead-code elimination, diagnostic only
    pub hash_checksum: u64,

    /// Average nanoseconds per key, hashing only
    pub hash_ns_per_key: f64,

    /// Hash+bucket phase; None when the bucket count is zero
    pub bucket: Option<BucketPhase>,
}

impl HasherReport {
    /// Render this hasher's report section
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n=== {} ===", self.name);
        let _ = writeln!(out, "#ignore: {}", self.hash_checksum);
        let _ = write!(out, "Hash -- nanosec_per_key = {:.2}", self.hash_ns_per_key);
        if let Some(bucket) = &self.bucket {
            let _ = write!(out, "\n#ignore: {}", bucket.checksum);
            let _ = write!(out, "\nHash+Mod -- nanosec_per_key = {:.2}", bucket.ns_per_key);
        }
        out.push('\n');
        out
    }
}

/// Run both timed phases for hasher `H` over `keys` under one fixed seed.
pub fn run_hasher<K: BenchKey, H: HashFamily>(keys: &[K], seed: u64) -> HasherReport {
    let n = keys.len() as u64;

    let mut hash_checksum = 0u64;
    let start = Instant::now();
    for _ in 0..RUNS {
        for key in keys {
            let hash = key.hash_with::<H>(seed);
            hash_checksum = hash_checksum.wrapping_add(hash.fold());
        }
    }
    let hash_ns_per_key = ns_per_key(start.elapsed().as_nanos() as f64, n);

    let num_buckets = n / KEYS_PER_BUCKET;
    let bucket = (num_buckets > 0).then(|| {
        let mut checksum = 0u64;
        let start = Instant::now();
        for _ in 0..RUNS {
            for key in keys {
                let hash = key.hash_with::<H>(seed);
                checksum = checksum.wrapping_add(H::bucket(hash, num_buckets));
            }
        }
        BucketPhase {
            num_buckets,
            checksum,
            ns_per_key: ns_per_key(start.elapsed().as_nanos() as f64, n),
        }
    });

    HasherReport {
        name: H::name(),
        hash_checksum,
        hash_ns_per_key,
        bucket,
    }
}

fn ns_per_key(elapsed_ns: f64, n: u64) -> f64 {
    if n == 0 {
        0.0
    } else {
        elapsed_ns / (RUNS * n) as f64
    }
}

/// The closed set of benchmarkable hashers.
///
/// Selection happens exactly once, outside the timed region; each variant
/// dispatches to a monomorphized run over its adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    /// MurmurHash2, 64-bit output
    Murmur2_64,
    /// MurmurHash3 x64, 128-bit output
    Murmur3_128,
    /// CityHash, 64-bit output
    City64,
    /// CityHash, 128-bit output
    City128,
    /// SpookyHash V2, 64-bit output
    Spooky64,
    /// SpookyHash V2, 128-bit output
    Spooky128,
}

impl HasherKind {
    /// Every known hasher, in the fixed reporting order
    pub const ALL: [HasherKind; 6] = [
        HasherKind::Murmur2_64,
        HasherKind::Murmur3_128,
        HasherKind::City64,
        HasherKind::City128,
        HasherKind::Spooky64,
        HasherKind::Spooky128,
    ];

    /// Stable identifier, matching the adapter's `name()`
    pub fn name(self) -> &'static str {
        match self {
            Self::Murmur2_64 => Murmur2_64::name(),
            Self::Murmur3_128 => Murmur3_128::name(),
            Self::City64 => City64::name(),
            Self::City128 => City128::name(),
            Self::Spooky64 => Spooky64::name(),
            Self::Spooky128 => Spooky128::name(),
        }
    }

    /// Resolve a hasher name; None for names outside the known set
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Run both timed phases for this hasher
    pub fn run<K: BenchKey>(self, keys: &[K], seed: u64) -> HasherReport {
        match self {
            Self::Murmur2_64 => run_hasher::<K, Murmur2_64>(keys, seed),
            Self::Murmur3_128 => run_hasher::<K, Murmur3_128>(keys, seed),
            Self::City64 => run_hasher::<K, City64>(keys, seed),
            Self::City128 => run_hasher::<K, City128>(keys, seed),
            Self::Spooky64 => run_hasher::<K, Spooky64>(keys, seed),
            Self::Spooky128 => run_hasher::<K, Spooky128>(keys, seed),
        }
    }
}

/// Run the named hasher, or all of them when `selection` is None.
///
/// An unknown name is non-fatal: no timing is performed and the returned
/// list is empty.
pub fn run<K: BenchKey>(keys: &[K], seed: u64, selection: Option<&str>) -> Vec<HasherReport> {
    match selection {
        None => HasherKind::ALL
            .into_iter()
            .map(|kind| kind.run(keys, seed))
            .collect(),
        Some(name) => HasherKind::from_name(name)
            .map(|kind| vec![kind.run(keys, seed)])
            .unwrap_or_default(),
    }
}

/// Full benchmark output for the selected hashers, including selection
/// diagnostics, as printed by the binary.
pub fn run_and_render<K: BenchKey>(keys: &[K], seed: u64, selection: Option<&str>) -> String {
    let mut out = String::new();
    match selection {
        None => {
            out.push_str("\n*** No hasher specified: testing all hashers...\n");
            for kind in HasherKind::ALL {
                out.push_str(&kind.run(keys, seed).render());
            }
        }
        Some(name) => match HasherKind::from_name(name) {
            Some(kind) => out.push_str(&kind.run(keys, seed).render()),
            None => out.push_str("unknown hasher_type\n"),
        },
    }
    out
}
