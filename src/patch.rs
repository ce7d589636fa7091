//! In-place redaction of marker strings in a binary file.
//!
//! The patcher owns the whole file lifecycle: open read-write, reject empty
//! targets, map the bytes shared+writable, zero every marker occurrence, and
//! force the dirty pages to stable storage before the mapping is released.
//! The mutation is always a same-length zero-fill, so the file's size and
//! every byte outside a matched span are invariant.
//!
//! # Failure model
//!
//! Any failure aborts the whole multi-marker pass; there is no retry and no
//! partial-success result. Failures before the map is established leave the
//! file untouched. A failed final sync is the one dangerous case: the
//! in-memory mutation happened but on-disk state is unspecified, and
//! [`PatchError::Sync`] makes no promise about the resulting content.
//! The mapping and file descriptor are dropped on every exit path.

use crate::scan;
use memmap2::{Mmap, MmapMut};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One marker that matched, and how many occurrences were zeroed.
///
/// Collected so the caller can print per-marker progress without the core
/// doing any I/O of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit {
    pub marker: String,
    pub count: usize,
}

/// Summary of a redaction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "PatchReport carries the found/patched totals the caller reports"]
pub struct PatchReport {
    /// Distinct markers with at least one occurrence.
    pub found: usize,
    /// Total occurrences zeroed across all markers.
    pub patched: usize,
    /// Per-marker counts, in marker-table order, matched markers only.
    pub hits: Vec<MarkerHit>,
}

impl PatchReport {
    fn record(&mut self, marker: &str, count: usize) {
        if count > 0 {
            self.found += 1;
            self.patched += count;
            self.hits.push(MarkerHit {
                marker: marker.to_string(),
                count,
            });
        }
    }
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("cannot open {path} for writing: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot stat {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("target file is empty: {path}")]
    Empty { path: PathBuf },

    #[error("cannot map {path} into memory: {source}")]
    Map {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot sync changes to {path}: {source}")]
    Sync {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Zero every occurrence of every marker in `buf`.
///
/// Markers are processed in table order. For each marker the full offset
/// set is computed against the buffer's current contents *before* any of
/// that marker's occurrences are zeroed, so overlapping occurrences (found
/// by the no-skip-ahead scan) are all counted and all erased in one pass.
/// Later markers scan a buffer that already reflects earlier markers'
/// zero-fill.
pub fn redact(buf: &mut [u8], markers: &[&str]) -> PatchReport {
    let mut report = PatchReport::default();

    for marker in markers {
        let count = zero_all(buf, marker.as_bytes());
        report.record(marker, count);
    }

    report
}

/// Zero every occurrence of one needle, returning the occurrence count.
///
/// All offsets are collected from the unmodified buffer first; only then is
/// the zero-fill applied.
fn zero_all(buf: &mut [u8], needle: &[u8]) -> usize {
    let offsets = scan::find_all(buf, needle);
    for &offset in &offsets {
        buf[offset..offset + needle.len()].fill(0);
    }
    offsets.len()
}

/// Redact `markers` in the file at `path` and durably commit the result.
///
/// The file is mapped shared+writable so the zero-fill lands directly in the
/// page cache, then flushed synchronously before the mapping is dropped.
/// Returns the report only after the flush succeeds; see the module docs for
/// what each error implies about on-disk state.
pub fn redact_file(path: &Path, markers: &[&str]) -> Result<PatchReport, PatchError> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| PatchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reject_empty(path, &file)?;

    let mut mapped = unsafe { MmapMut::map_mut(&file) }.map_err(|source| PatchError::Map {
        path: path.to_path_buf(),
        source,
    })?;

    let report = redact(&mut mapped, markers);

    mapped.flush().map_err(|source| PatchError::Sync {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(report)
}

/// Read-only variant of [`redact_file`] backing `--dry-run`.
///
/// Performs the same open/empty/map validation against a read-only map and
/// reports what each marker matches in the unmodified file, mutating
/// nothing. Where an earlier marker's zero-fill would erase a later
/// marker's occurrence (one marker a substring of another, as with
/// `"Pride Colors"` in the shipped table), a real pass reports fewer for
/// the later marker.
pub fn scan_file(path: &Path, markers: &[&str]) -> Result<PatchReport, PatchError> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|source| PatchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reject_empty(path, &file)?;

    let mapped = unsafe { Mmap::map(&file) }.map_err(|source| PatchError::Map {
        path: path.to_path_buf(),
        source,
    })?;

    let mut report = PatchReport::default();
    for marker in markers {
        report.record(marker, scan::count_all(&mapped, marker.as_bytes()));
    }

    Ok(report)
}

/// Zero-length files cannot be mapped; reject them before the map attempt.
fn reject_empty(path: &Path, file: &std::fs::File) -> Result<(), PatchError> {
    let metadata = file.metadata().map_err(|source| PatchError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() == 0 {
        return Err(PatchError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
