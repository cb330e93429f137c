//! Directory creation and recursive emptying.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, FsOperation, Result};
use crate::fs::platform::{EntryKind, Platform};

/// Counts of entries removed by [`DirectoryPurger::empty_directory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    /// Regular files removed.
    pub files: usize,
    /// Directories removed.
    pub directories: usize,
    /// Symbolic links removed (their targets are untouched).
    pub symlinks: usize,
}

impl PurgeReport {
    /// Total number of entries removed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.files + self.directories + self.symlinks
    }

    fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files += 1,
            EntryKind::Directory => self.directories += 1,
            EntryKind::Symlink { .. } => self.symlinks += 1,
            EntryKind::Missing => {}
        }
    }
}

impl std::fmt::Display for PurgeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "removed {} files, {} directories, {} symlinks",
            self.files, self.directories, self.symlinks
        )
    }
}

/// Creates and empties directories through a [`Platform`].
///
/// # Examples
///
/// ```no_run
/// use relink::fs::{host_platform, DirectoryPurger};
/// use std::path::Path;
///
/// let platform = host_platform();
/// let purger = DirectoryPurger::new(platform.as_ref());
/// let report = purger.empty_directory(Path::new("build/cache"), true)?;
/// println!("{report}");
/// # Ok::<(), relink::Error>(())
/// ```
#[derive(Debug)]
pub struct DirectoryPurger<'a, P: Platform + ?Sized> {
    platform: &'a P,
}

impl<'a, P: Platform + ?Sized> DirectoryPurger<'a, P> {
    /// Create a purger backed by `platform`.
    #[must_use]
    pub const fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Make sure `dir` exists as a directory, creating it and its parents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathConflict`] if something other than a directory
    /// occupies `dir`, or [`Error::FileSystem`] if creation fails.
    pub fn ensure_directory_exists(&self, dir: &Path) -> Result<()> {
        match self.inspect(dir)? {
            kind if kind.is_dir() => Ok(()),
            EntryKind::Missing => {
                log::debug!("creating directory {}", dir.display());
                self.platform
                    .create_dir_all(dir)
                    .map_err(|e| Error::file_system(FsOperation::CreateDir, dir, e))
            }
            _ => Err(Error::PathConflict {
                path: dir.to_path_buf(),
            }),
        }
    }

    /// Remove everything inside `dir`, leaving `dir` itself in place.
    ///
    /// With `ensure_exists` the directory is created first when missing.
    /// Without it, a missing directory is left alone. Entries are removed
    /// children first; symlinks are removed as links and never followed.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot be removed; entries already
    /// removed stay removed.
    pub fn empty_directory(&self, dir: &Path, ensure_exists: bool) -> Result<PurgeReport> {
        if ensure_exists {
            self.ensure_directory_exists(dir)?;
        }

        let mut report = PurgeReport::default();
        if !self.inspect(dir)?.is_dir() {
            return Ok(report);
        }

        let entries = self
            .platform
            .walk_contents_first(dir)
            .map_err(|e| Error::file_system(FsOperation::Walk, dir, e))?;
        for (path, kind) in entries {
            self.remove(&path, kind)?;
            report.record(kind);
        }

        log::debug!("emptied {}: {report}", dir.display());
        Ok(report)
    }

    /// Delete a single entry of whatever kind occupies `path`.
    ///
    /// Directories must already be empty. Returns the kind that was removed;
    /// [`EntryKind::Missing`] means there was nothing to do.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileSystem`] if inspection or removal fails.
    pub fn delete_by_path(&self, path: &Path) -> Result<EntryKind> {
        let kind = self.inspect(path)?;
        self.remove(path, kind)?;
        Ok(kind)
    }

    fn inspect(&self, path: &Path) -> Result<EntryKind> {
        self.platform
            .entry_kind(path)
            .map_err(|e| Error::file_system(FsOperation::Inspect, path, e))
    }

    fn remove(&self, path: &Path, kind: EntryKind) -> Result<()> {
        let result = match kind {
            EntryKind::Missing => return Ok(()),
            EntryKind::Symlink { to_directory } => self
                .platform
                .remove_symlink(path, to_directory)
                .map_err(|e| Error::file_system(FsOperation::RemoveSymlink, path, e)),
            EntryKind::Directory => self
                .platform
                .remove_dir(path)
                .map_err(|e| Error::file_system(FsOperation::RemoveDir, path, e)),
            EntryKind::File => self
                .platform
                .remove_file(path)
                .map_err(|e| Error::file_system(FsOperation::RemoveFile, path, e)),
        };
        if result.is_ok() {
            log::debug!("removed {kind} {}", path.display());
        }
        result
    }
}
