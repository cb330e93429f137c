//! Operating-system primitives behind one capability trait.
//!
//! Everything the purger and the symlink creator do to the real filesystem
//! goes through [`Platform`]. Two implementations exist, [`PosixPlatform`]
//! and [`WindowsPlatform`]; [`host_platform`] picks one for the running host.
//! Unit tests substitute the generated `MockPlatform`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

/// What occupies a path, inspected without following a final symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file (or any other non-directory entry).
    File,
    /// A real directory.
    Directory,
    /// A symbolic link.
    Symlink {
        /// Whether the link resolves, or was created, as a directory link.
        to_directory: bool,
    },
}

impl EntryKind {
    /// Whether the path can be used as a directory, following links.
    #[must_use]
    pub fn is_dir(self) -> bool {
        matches!(
            self,
            Self::Directory
                | Self::Symlink {
                    to_directory: true
                }
        )
    }

    /// Whether anything exists at the path.
    #[must_use]
    pub fn exists(self) -> bool {
        self != Self::Missing
    }

    /// Whether the entry is a symbolic link.
    #[must_use]
    pub fn is_symlink(self) -> bool {
        matches!(self, Self::Symlink { .. })
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink {
                to_directory: true,
            } => write!(f, "directory symlink"),
            Self::Symlink {
                to_directory: false,
            } => write!(f, "symlink"),
        }
    }
}

/// Filesystem and process primitives consumed by the core.
///
/// Implementations report raw [`io::Error`]s; callers attach the operation
/// and path when converting them into [`crate::Error::FileSystem`].
#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    /// The process working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Change the process working directory.
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;

    /// Inspect `path` without following a final symlink.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a symbolic link itself, never its target.
    fn remove_symlink(&self, path: &Path, to_directory: bool) -> io::Result<()>;

    /// Every entry below `dir`, children listed before their parents.
    ///
    /// Symlinks are reported as entries and never descended into.
    fn walk_contents_first(&self, dir: &Path) -> io::Result<Vec<(PathBuf, EntryKind)>>;

    /// Create a symbolic link at `link` whose stored contents are `original`.
    ///
    /// `original` is written verbatim, so a relative value is interpreted
    /// against the link's directory when the link is followed.
    fn create_symlink(&self, original: &Path, link: &Path, target_is_dir: bool)
        -> io::Result<()>;
}

/// Native POSIX primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPlatform;

/// Windows primitives.
///
/// Directory links are removed with the directory-removal primitive, and
/// links are created through `mklink` so that directory links work without
/// relying on the native symlink API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

/// The implementation matching the running host.
#[must_use]
pub fn host_platform() -> Box<dyn Platform> {
    if cfg!(windows) {
        Box::new(WindowsPlatform)
    } else {
        Box::new(PosixPlatform)
    }
}

impl Platform for PosixPlatform {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        inspect(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_symlink(&self, path: &Path, _to_directory: bool) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn walk_contents_first(&self, dir: &Path) -> io::Result<Vec<(PathBuf, EntryKind)>> {
        walk_contents_first(dir)
    }

    #[cfg(unix)]
    fn create_symlink(
        &self,
        original: &Path,
        link: &Path,
        _target_is_dir: bool,
    ) -> io::Result<()> {
        std::os::unix::fs::symlink(original, link)
    }

    #[cfg(not(unix))]
    fn create_symlink(
        &self,
        _original: &Path,
        _link: &Path,
        _target_is_dir: bool,
    ) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "POSIX symlinks are not available on this host",
        ))
    }
}

impl Platform for WindowsPlatform {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        inspect(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    // DEL /F semantics: read-only files are deleted too
    #[allow(clippy::permissions_set_readonly_false)]
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut permissions = fs::symlink_metadata(path)?.permissions();
        if permissions.readonly() {
            permissions.set_readonly(false);
            fs::set_permissions(path, permissions)?;
        }
        fs::remove_file(path)
    }

    fn remove_symlink(&self, path: &Path, to_directory: bool) -> io::Result<()> {
        if to_directory {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn walk_contents_first(&self, dir: &Path) -> io::Result<Vec<(PathBuf, EntryKind)>> {
        walk_contents_first(dir)
    }

    fn create_symlink(&self, original: &Path, link: &Path, target_is_dir: bool) -> io::Result<()> {
        let mut command = Command::new("cmd");
        command.arg("/C").arg("mklink");
        if target_is_dir {
            command.arg("/D");
        }
        command.arg(link).arg(original);

        let output = command.output()?;
        if output.status.success() {
            return Ok(());
        }

        let mut details = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !details.is_empty() {
                details.push('\n');
            }
            details.push_str(stderr.trim());
        }
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("mklink exited with {}: {details}", output.status),
        ))
    }
}

/// Classify `path` using `symlink_metadata`.
fn inspect(path: &Path) -> io::Result<EntryKind> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => Ok(EntryKind::Symlink {
            to_directory: symlink_is_dir(path, &metadata.file_type()),
        }),
        Ok(metadata) if metadata.is_dir() => Ok(EntryKind::Directory),
        Ok(_) => Ok(EntryKind::File),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(EntryKind::Missing),
        Err(e) => Err(e),
    }
}

#[cfg(windows)]
fn symlink_is_dir(_path: &Path, file_type: &fs::FileType) -> bool {
    use std::os::windows::fs::FileTypeExt;
    file_type.is_symlink_dir()
}

#[cfg(not(windows))]
fn symlink_is_dir(path: &Path, _file_type: &fs::FileType) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// Post-order listing shared by both platforms.
fn walk_contents_first(dir: &Path) -> io::Result<Vec<(PathBuf, EntryKind)>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
    {
        let entry = entry?;
        let file_type = entry.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink {
                to_directory: symlink_is_dir(entry.path(), &file_type),
            }
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push((entry.into_path(), kind));
    }
    Ok(entries)
}
