//! Scoped working-directory changes.
//!
//! The process working directory is global state. [`WorkingDirGuard`]
//! serializes changes through a process-wide lock and puts the previous
//! directory back when it goes out of scope, on every exit path.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, FsOperation, Result};
use crate::fs::platform::Platform;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Holds the working directory changed until dropped or restored.
///
/// Only one guard can be alive at a time in the process; creating a second
/// guard on the same thread while the first is alive deadlocks.
///
/// Dropping the guard restores the previous directory and logs a failure.
/// Call [`WorkingDirGuard::restore`] instead to observe the error.
pub struct WorkingDirGuard<'a, P: Platform + ?Sized> {
    platform: &'a P,
    original: Option<PathBuf>,
    _lock: MutexGuard<'static, ()>,
}

impl<'a, P: Platform + ?Sized> WorkingDirGuard<'a, P> {
    /// Remember the current directory and switch to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileSystem`] if the current directory cannot be
    /// read or `dir` cannot be entered. The working directory is unchanged
    /// in either case.
    pub fn change_to(platform: &'a P, dir: &Path) -> Result<Self> {
        let lock = CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let original = platform
            .current_dir()
            .map_err(|e| Error::file_system(FsOperation::CurrentDir, ".", e))?;
        platform
            .set_current_dir(dir)
            .map_err(|e| Error::file_system(FsOperation::SetCurrentDir, dir, e))?;
        log::debug!(
            "working directory {} -> {}",
            original.display(),
            dir.display()
        );

        Ok(Self {
            platform,
            original: Some(original),
            _lock: lock,
        })
    }

    /// The directory that will be restored.
    #[must_use]
    pub fn original(&self) -> Option<&Path> {
        self.original.as_deref()
    }

    /// Restore the previous directory now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileSystem`] if the previous directory can no longer
    /// be entered.
    pub fn restore(mut self) -> Result<()> {
        match self.original.take() {
            Some(original) => self
                .platform
                .set_current_dir(&original)
                .map_err(|e| Error::file_system(FsOperation::SetCurrentDir, original, e)),
            None => Ok(()),
        }
    }
}

impl<P: Platform + ?Sized> Drop for WorkingDirGuard<'_, P> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            if let Err(e) = self.platform.set_current_dir(&original) {
                log::warn!(
                    "failed to restore working directory {}: {e}",
                    original.display()
                );
            }
        }
    }
}

impl<P: Platform + ?Sized> std::fmt::Debug for WorkingDirGuard<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkingDirGuard")
            .field("original", &self.original)
            .finish_non_exhaustive()
    }
}
