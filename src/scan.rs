//! Exact byte-sequence scanning over an immutable buffer.
//!
//! The scanner reports *every* offset whose window equals the needle,
//! including windows that overlap an earlier match. There is no skip-ahead:
//! the redaction pass in [`crate::patch`] computes all offsets for a needle
//! against the unmodified buffer before it zeroes any of them, and the
//! overlap behavior only stays well-defined under that ordering.

use memchr::memchr_iter;

/// Find every occurrence of `needle` in `haystack`, in ascending offset
/// order, overlaps included.
///
/// Degenerate inputs are not errors: an empty needle, or a needle longer
/// than the haystack, yields an empty vec.
///
/// `memchr` narrows the candidate set to offsets carrying the needle's
/// first byte; the reported offsets are identical to testing every window
/// from `0` to `haystack.len() - needle.len()` inclusive.
pub fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let last_start = haystack.len() - needle.len();
    let rest = &needle[1..];

    memchr_iter(needle[0], haystack)
        .take_while(|&i| i <= last_start)
        .filter(|&i| &haystack[i + 1..i + needle.len()] == rest)
        .collect()
}

/// Count occurrences without materializing the offset list.
///
/// Used by the read-only dry-run path, where the offsets themselves are
/// never needed.
pub fn count_all(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }

    let last_start = haystack.len() - needle.len();
    let rest = &needle[1..];

    memchr_iter(needle[0], haystack)
        .take_while(|&i| i <= last_start)
        .filter(|&i| &haystack[i + 1..i + needle.len()] == rest)
        .count()
}
