//! Branch-free range reduction via fixed-point multiply-shift.
//!
//! Maps a hash value uniformly into `[0, n)` without a division or remainder
//! instruction: the top half of the hash's bits is treated as a fixed-point
//! fraction in `[0, 1)` and multiplied by `n`, keeping the integer part.
//! Assumes the hash is uniform over its full bit width.
//!
//! References:
//! - https://lemire.me/blog/2016/06/27/a-fast-alternative-to-the-modulo-reduction/

/// Reduce a 64-bit hash into `[0, n)` using its upper 32 bits.
///
/// The intermediate product is a 32x64-bit multiply computed at 128-bit
/// width, so it cannot overflow. Panics if the result escapes `[0, n)`:
/// that indicates a broken hash-width assumption, not a recoverable
/// condition.
#[inline]
pub fn rand64(h: u64, n: u64) -> u64 {
    let ret = (((h >> 32) as u128 * n as u128) >> 32) as u64;
    assert!(ret < n, "reduction of {h:#x} escaped [0, {n})");
    ret
}

/// Reduce a 128-bit hash into `[0, n)` using its upper 64 bits.
///
/// Same construction as [`rand64`] one width up: a 64x64-bit multiply
/// at 128-bit width, then a shift. Panics if the result escapes `[0, n)`.
#[inline]
pub fn rand128(h: u128, n: u64) -> u64 {
    let ret = (((h >> 64) * n as u128) >> 64) as u64;
    assert!(ret < n, "reduction of {h:#x} escaped [0, {n})");
    ret
}
