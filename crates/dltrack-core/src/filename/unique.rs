//! Collision-free destination paths.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ports::PathProbe;

/// Return a path that no filesystem entry currently occupies.
///
/// `candidate` is returned unchanged when it is free. Otherwise the probe
/// walks `"{stem} (1){ext}"`, `"{stem} (2){ext}"`, ... in the same directory
/// and returns the first free name. Every candidate is probed afresh.
pub fn unique_path<P>(probe: &P, candidate: &Path) -> PathBuf
where
    P: PathProbe + ?Sized,
{
    if !probe.exists(candidate) {
        return candidate.to_path_buf();
    }

    let parent = candidate.parent().unwrap_or_else(|| Path::new(""));
    let stem = candidate.file_stem().unwrap_or_default();
    let extension = candidate.extension();

    let mut n: u64 = 1;
    loop {
        let mut name = OsString::from(stem);
        name.push(format!(" ({n})"));
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }

        let path = parent.join(&name);
        if !probe.exists(&path) {
            tracing::debug!(
                target: "dltrack.filename",
                original = %candidate.display(),
                resolved = %path.display(),
                "Destination taken, picked unused name"
            );
            return path;
        }
        n += 1;
    }
}
