//! Filesystem existence probe.

use std::path::Path;

/// Port for checking whether a filesystem entry exists.
///
/// Every call must hit the filesystem; results are never cached.
#[cfg_attr(test, mockall::automock)]
pub trait PathProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// `PathProbe` backed by the local filesystem.
///
/// Dangling symlinks count as existing entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathProbe;

impl FsPathProbe {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PathProbe for FsPathProbe {
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }
}
