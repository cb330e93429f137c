//! Pure string-level path math.
//!
//! Nothing in this module touches the filesystem. Paths are treated as text
//! in whatever convention the caller used, so a Windows path normalizes the
//! same way on every host.
//!
//! # Key Concepts
//!
//! ## Prefix
//!
//! A leading scheme or drive token (`http://`, `file://C:`, `C:`) is
//! recognized by [`prefix::extract_prefix`] and carried through untouched.
//!
//! ## Normalization
//!
//! [`PathNormalizer`] converts both separators to one canonical
//! [`Separator`], drops empty and `.` segments, and collapses `..` against
//! the preceding name wherever that is legal.
//!
//! ## Shortest path
//!
//! [`RelativePathResolver::shortest_path`] expresses one absolute path
//! relative to the directory of another, which is exactly what a relative
//! symbolic link stores.
//!
//! # Examples
//!
//! ```
//! use relink::path::{PathNormalizer, RelativePathResolver, Separator};
//!
//! let normalizer = PathNormalizer::new(Separator::Slash);
//! assert_eq!(normalizer.normalize_str("C:\\work\\..\\out\\./bin"), "C:/out/bin");
//!
//! let resolver = RelativePathResolver::with_normalizer(normalizer);
//! let rel = resolver.shortest_path("/srv/app/current", "/srv/releases/v2", false).unwrap();
//! assert_eq!(rel, "../releases/v2");
//! assert_eq!(normalizer.join("/srv/app", &rel).to_string(), "/srv/releases/v2");
//! ```

pub mod normalize;
pub mod prefix;
pub mod shortest;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use normalize::PathNormalizer;
pub use shortest::RelativePathResolver;
pub use types::{NormalizedPath, Separator, DIRECTORY_CURRENT, DIRECTORY_UP};
