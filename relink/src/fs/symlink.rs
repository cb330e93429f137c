//! Relative symbolic link creation.
//!
//! A link created here stores the shortest relative path from the link's
//! directory to its target, so the pair keeps working when a common
//! ancestor directory is moved or renamed.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, FsOperation, Result};
use crate::fs::cwd::WorkingDirGuard;
use crate::fs::platform::Platform;
use crate::path::{NormalizedPath, RelativePathResolver, Separator};

/// A link that was created, and the text stored in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedLink {
    /// Absolute, normalized location of the new link.
    pub link: PathBuf,
    /// The relative path written into the link.
    pub stored_target: String,
}

impl std::fmt::Display for CreatedLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}", self.stored_target, self.link.display())
    }
}

/// Creates symbolic links that store relative paths.
///
/// Paths are always resolved with the host separator, since the stored text
/// must be understood by the operating system.
///
/// # Examples
///
/// ```no_run
/// use relink::fs::{host_platform, RelativeSymlinkCreator};
/// use std::path::Path;
///
/// let platform = host_platform();
/// let creator = RelativeSymlinkCreator::new(platform.as_ref());
/// let created = creator.create_relative_symlink(
///     Path::new("releases/v2"),
///     Path::new("current"),
/// )?;
/// assert_eq!(created.stored_target, "./releases/v2");
/// # Ok::<(), relink::Error>(())
/// ```
#[derive(Debug)]
pub struct RelativeSymlinkCreator<'a, P: Platform + ?Sized> {
    platform: &'a P,
    resolver: RelativePathResolver,
}

impl<'a, P: Platform + ?Sized> RelativeSymlinkCreator<'a, P> {
    /// Create a link creator backed by `platform`.
    #[must_use]
    pub const fn new(platform: &'a P) -> Self {
        Self {
            platform,
            resolver: RelativePathResolver::new(Separator::native()),
        }
    }

    /// Create a symlink at `link` pointing at `target` via a relative path.
    ///
    /// A relative `link` is taken relative to the working directory; a
    /// relative `target` is taken relative to the link's directory, the
    /// same way the operating system reads the stored text. The target does
    /// not have to exist. The working directory is restored afterwards,
    /// whether or not creation succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for paths that are not valid UTF-8 or
    /// a link path without a file name, and [`Error::FileSystem`] when the
    /// operating system refuses the link.
    pub fn create_relative_symlink(&self, target: &Path, link: &Path) -> Result<CreatedLink> {
        let normalizer = self.resolver.normalizer();
        let link_text = utf8(link)?;
        let target_text = utf8(target)?;

        let link_abs = if normalizer.is_absolute(link_text) {
            normalizer.normalize(link_text)
        } else {
            let cwd = self
                .platform
                .current_dir()
                .map_err(|e| Error::file_system(FsOperation::CurrentDir, ".", e))?;
            normalizer.join(utf8(&cwd)?, link_text)
        };

        let link_name = link_abs
            .file_name()
            .ok_or_else(|| Error::InvalidPath {
                path: link.to_path_buf(),
                reason: "link path has no file name".to_string(),
            })?
            .to_string();
        let link_dir = link_abs.parent();
        let target_abs = normalizer.join(&link_dir.to_string(), target_text);

        let stored = self
            .resolver
            .shortest_path(&link_abs.to_string(), &target_abs.to_string(), false)?;
        let target_is_dir = self.target_is_dir(&target_abs)?;

        let link_path = PathBuf::from(link_abs.to_string());
        let guard = WorkingDirGuard::change_to(self.platform, Path::new(&link_dir.to_string()))?;
        let created = self
            .platform
            .create_symlink(Path::new(&stored), Path::new(&link_name), target_is_dir)
            .map_err(|e| Error::file_system(FsOperation::CreateSymlink, &link_path, e));
        let restored = guard.restore();
        created?;
        restored?;

        let created = CreatedLink {
            link: link_path,
            stored_target: stored,
        };
        log::info!("{created}");
        Ok(created)
    }

    fn target_is_dir(&self, target: &NormalizedPath) -> Result<bool> {
        let path = PathBuf::from(target.to_string());
        self.platform
            .entry_kind(&path)
            .map(|kind| kind.is_dir())
            .map_err(|e| Error::file_system(FsOperation::Inspect, path, e))
    }
}

fn utf8(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path is not valid UTF-8".to_string(),
    })
}
