#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # relink
//!
//! Path normalization, shortest relative paths and relocatable symlinks.
//!
//! The library treats paths as text first: any mix of `/` and `\`, drive
//! letters and URL-style schemes normalizes the same way on every host. On
//! top of that sit the filesystem operations that need it: creating
//! symbolic links that store the shortest relative path to their target,
//! and emptying directory trees without following links.
//!
//! ## Core Types
//!
//! - [`PathNormalizer`] and [`Separator`]: canonical path form
//! - [`RelativePathResolver`]: shortest relative path between two paths
//! - [`RelativeSymlinkCreator`]: relative links that survive relocation
//! - [`DirectoryPurger`]: create and empty directories
//! - [`Platform`]: the operating-system seam behind the filesystem types
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use relink::{PathNormalizer, RelativePathResolver, Separator};
//!
//! let normalizer = PathNormalizer::new(Separator::Slash);
//! assert_eq!(normalizer.normalize_str("C:\\rrr"), "C:/rrr");
//!
//! let resolver = RelativePathResolver::new(Separator::Slash);
//! assert_eq!(resolver.shortest_path("/a/b/x", "/a/b/y", false).unwrap(), "./y");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, FsOperation, Result};
pub use fs::{
    host_platform, CreatedLink, DirectoryPurger, EntryKind, Platform, PurgeReport,
    RelativeSymlinkCreator, WorkingDirGuard,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{NormalizedPath, PathNormalizer, RelativePathResolver, Separator};
