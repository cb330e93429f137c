//! Filesystem side effects: purging directories and creating relative links.
//!
//! All operating-system access goes through the [`Platform`] trait so the
//! logic here runs the same against the real host and against mocks.
//!
//! # Examples
//!
//! ```no_run
//! use relink::fs::{host_platform, DirectoryPurger, RelativeSymlinkCreator};
//! use std::path::Path;
//!
//! let platform = host_platform();
//!
//! DirectoryPurger::new(platform.as_ref()).empty_directory(Path::new("out"), true)?;
//!
//! let link = RelativeSymlinkCreator::new(platform.as_ref())
//!     .create_relative_symlink(Path::new("/srv/releases/v2"), Path::new("/srv/current"))?;
//! println!("{link}");
//! # Ok::<(), relink::Error>(())
//! ```

pub mod cwd;
pub mod platform;
pub mod purge;
pub mod symlink;

pub use cwd::WorkingDirGuard;
pub use platform::{host_platform, EntryKind, Platform, PosixPlatform, WindowsPlatform};
pub use purge::{DirectoryPurger, PurgeReport};
pub use symlink::{CreatedLink, RelativeSymlinkCreator};
