//! Bazaar Redact: in-place redaction of theme marker strings in a binary.
//!
//! Scans the target executable's raw bytes for a fixed table of marker
//! strings and overwrites every occurrence with zero bytes, directly in a
//! shared writable memory map, then forces the change to stable storage.
//! The file is treated as an opaque byte sequence: no ELF/PE parsing, no
//! resizing, no insertion. Only same-length zero-fill is performed, so every
//! offset outside a matched span keeps its original byte and the file length
//! never changes.
//!
//! # Architecture
//!
//! The engine is two layers. [`scan`] is a pure exact-bytes search that
//! reports every occurrence offset, overlaps included. [`patch`] drives one
//! scan per marker, zeroes the reported offsets, accumulates a
//! [`PatchReport`], and owns the open/map/flush lifecycle of the target
//! file. [`markers`] supplies the built-in needle table and [`locate`] the
//! install-path discovery and liveness probing used by the CLI.
//!
//! # Example
//!
//! ```no_run
//! use bazaar_redact::{patch, THEME_MARKERS};
//! use std::path::Path;
//!
//! let report = patch::redact_file(Path::new("/usr/bin/bazaar"), THEME_MARKERS)?;
//! println!("{} markers, {} occurrences", report.found, report.patched);
//! # Ok::<(), bazaar_redact::PatchError>(())
//! ```

pub mod locate;
pub mod markers;
pub mod patch;
pub mod scan;

// Re-exports
pub use markers::THEME_MARKERS;
pub use patch::{MarkerHit, PatchError, PatchReport};
