//! Target discovery and liveness probing.
//!
//! Peripheral glue around the patch engine: find the installed Bazaar
//! executable when the user did not name one, and refuse to patch while the
//! application is running (a live process may hold its own mapping of the
//! binary, and concurrent writers produce lost updates).

use std::path::{Path, PathBuf};
use std::process::Command;

/// Install locations probed in priority order when no explicit path is
/// given: the Flatpak deployment first, then conventional prefixes.
const CANDIDATE_PATHS: &[&str] = &[
    "/var/lib/flatpak/app/io.github.kolunmi.Bazaar/current/active/files/bin/bazaar",
    "/app/bin/bazaar",
    "/usr/local/bin/bazaar",
    "/usr/bin/bazaar",
];

/// Name of the process that must not be running while we patch.
pub const TARGET_PROCESS: &str = "bazaar";

/// Return the first candidate install path that exists, if any.
pub fn find_installed() -> Option<PathBuf> {
    find_first_existing(CANDIDATE_PATHS)
}

fn find_first_existing(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}

/// Best-effort check for a running process with exactly the given name.
///
/// Probes via `pgrep -x`: any output line means a live match. If the probe
/// itself cannot run, assume not running rather than blocking the patch,
/// since this is advisory tooling and not a lock.
pub fn is_running(process: &str) -> bool {
    let output = match Command::new("pgrep").args(["-x", process]).output() {
        Ok(output) => output,
        Err(_) => return false,
    };

    output.status.success() && !output.stdout.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn find_first_existing_picks_earliest_hit() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        fs::write(&second, b"x").unwrap();

        let first_str = first.to_str().unwrap();
        let second_str = second.to_str().unwrap();

        let found = find_first_existing(&[first_str, second_str]).unwrap();
        assert_eq!(found, second);

        fs::write(&first, b"x").unwrap();
        let found = find_first_existing(&[first_str, second_str]).unwrap();
        assert_eq!(found, first);
    }

    #[test]
    fn find_first_existing_handles_no_hits() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert_eq!(find_first_existing(&[missing.to_str().unwrap()]), None);
    }

    #[test]
    fn is_running_is_false_for_implausible_name() {
        assert!(!is_running("bazaar-redact-no-such-process"));
    }
}
