//! Hash Perf - Throughput and Distribution Benchmark for Hash Functions
//!
//! Hash Perf measures the hashing throughput and bucket-distribution cost of
//! a fixed set of non-cryptographic hash functions (MurmurHash2/3, CityHash,
//! SpookyHash in 64- and 128-bit widths) over large integer or string key
//! corpora. Every hasher is driven through the same statically-dispatched
//! code path, so the timed loops carry no virtual-call overhead.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod reduce;
pub mod hasher;
pub mod bench;

// Re-export commonly used items for convenience
pub use crate::core::{Error, Result, RunConfig};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the benchmark binary with tracing
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Initializing {} v{}", NAME, VERSION);

    Ok(())
}
