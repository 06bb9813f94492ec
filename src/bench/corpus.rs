//! Key corpus construction.
//!
//! A corpus is built once per run, before any timed phase, and must not be
//! reallocated or mutated while timing is in progress.

use crate::core::error::Result;
use rand::{rng, seq::SliceRandom, Rng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Progress marker interval while reading string keys
const PROGRESS_INTERVAL: usize = 1_000_000;

/// Summary statistics for a string corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    /// Number of keys loaded
    pub num_strings: u64,

    /// Length of the longest key
    pub max_string_length: u64,

    /// Sum of all key lengths
    pub total_length: u64,
}

impl CorpusStats {
    /// Mean key length; zero for an empty corpus
    pub fn avg_string_length(&self) -> f64 {
        if self.num_strings == 0 {
            0.0
        } else {
            self.total_length as f64 / self.num_strings as f64
        }
    }

    /// Render the corpus summary block of the report
    pub fn render(&self) -> String {
        format!(
            "num_strings {}\nmax_string_length {}\ntotal_length {}\navg_string_length {:.2}",
            self.num_strings,
            self.max_string_length,
            self.total_length,
            self.avg_string_length()
        )
    }
}

/// Load up to `n` newline-delimited string keys from `path`.
///
/// Lines beyond the n-th are ignored; duplicates are kept. A file that
/// cannot be opened or read is a fatal resource error. Progress is
/// reported every million keys.
pub fn read_string_corpus(n: u64, path: impl AsRef<Path>) -> Result<(Vec<String>, CorpusStats)> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut strings: Vec<String> = Vec::new();
    let mut max_string_length = 0u64;
    let mut total_length = 0u64;

    for line in reader.lines() {
        let s = line?;
        max_string_length = max_string_length.max(s.len() as u64);
        total_length += s.len() as u64;
        strings.push(s);

        if strings.len() % PROGRESS_INTERVAL == 0 {
            println!("read {} strings", strings.len());
        }
        if strings.len() as u64 == n {
            break;
        }
    }

    let stats = CorpusStats {
        num_strings: strings.len() as u64,
        max_string_length,
        total_length,
    };

    Ok((strings, stats))
}

/// Synthesize exactly `n` pairwise-distinct pseudo-random 64-bit keys.
///
/// Oversamples by ~5% from a uniform generator, sorts, deduplicates, tops
/// up with successive increments past the maximum if the margin was
/// insufficient, then shuffles to destroy the sort order. A distinctness
/// failure aborts: it means the synthesis itself is broken.
pub fn distinct_keys(n: u64) -> Vec<u64> {
    let mut rng = rng();

    let oversampled = n + n / 20;
    let mut keys: Vec<u64> = (0..oversampled).map(|_| rng.random()).collect();
    keys.sort_unstable();
    keys.dedup();

    while (keys.len() as u64) < n {
        let next = keys.last().map_or(0, |k| k.wrapping_add(1));
        keys.push(next);
    }

    assert!(
        keys.windows(2).all(|w| w[0] != w[1]),
        "distinct key synthesis produced duplicates"
    );

    keys.shuffle(&mut rng);
    keys.truncate(n as usize);
    assert_eq!(keys.len() as u64, n);

    keys
}
