//! Shortest relative path between two absolute paths.
//!
//! The result is expressed relative to the *directory* of `from`, which is
//! what a symbolic link stored at `from` needs in order to reach `to`.

use crate::error::{Error, Result};
use crate::path::normalize::PathNormalizer;
use crate::path::prefix::is_drive_root;
use crate::path::types::{NormalizedPath, Separator, DIRECTORY_CURRENT, DIRECTORY_UP};

/// Segment appended to a directory `from` so it is measured like a file.
const DIRECTORY_PLACEHOLDER: &str = "dummy_file";

/// Computes shortest relative paths.
///
/// # Examples
///
/// ```
/// use relink::path::{RelativePathResolver, Separator};
///
/// let resolver = RelativePathResolver::new(Separator::Slash);
///
/// assert_eq!(resolver.shortest_path("/a/b/x", "/a/b/y", false).unwrap(), "./y");
/// assert_eq!(resolver.shortest_path("/a/b/x", "/a/c/y", false).unwrap(), "../c/y");
/// assert_eq!(resolver.shortest_path("/a/b", "/a/c/y", true).unwrap(), "../c/y");
/// assert_eq!(resolver.shortest_path("C:/a", "D:/b", false).unwrap(), "D:/b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativePathResolver {
    normalizer: PathNormalizer,
}

impl RelativePathResolver {
    /// Create a resolver emitting `separator`.
    #[must_use]
    pub const fn new(separator: Separator) -> Self {
        Self {
            normalizer: PathNormalizer::new(separator),
        }
    }

    /// Create a resolver sharing an existing normalizer's settings.
    #[must_use]
    pub const fn with_normalizer(normalizer: PathNormalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer used for both inputs.
    #[must_use]
    pub const fn normalizer(&self) -> &PathNormalizer {
        &self.normalizer
    }

    /// Find the shortest path from `from` to `to`.
    ///
    /// `from` is treated as a file unless `treat_from_as_directory` is set.
    /// When the paths share only the bare root `/`, or sit under different
    /// prefixes, no shortening is possible and the normalized `to` is
    /// returned. A shared drive root such as `c:/` does count as a common
    /// ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either path is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::path::{RelativePathResolver, Separator};
    ///
    /// let resolver = RelativePathResolver::new(Separator::Slash);
    /// assert_eq!(resolver.shortest_path("/a/b/c", "/a", false).unwrap(), "..");
    /// assert_eq!(resolver.shortest_path("/a/b/c", "/a/b", false).unwrap(), ".");
    /// assert_eq!(resolver.shortest_path("c:/x/y", "C:/z", false).unwrap(), "../z");
    /// assert!(resolver.shortest_path("a/b", "/c", false).is_err());
    /// ```
    pub fn shortest_path(
        &self,
        from: &str,
        to: &str,
        treat_from_as_directory: bool,
    ) -> Result<String> {
        if !self.normalizer.is_absolute(from) || !self.normalizer.is_absolute(to) {
            return Err(Error::InvalidArgument {
                message: format!("from ({from}) and to ({to}) must be absolute paths"),
            });
        }

        let mut from = self.normalizer.normalize(from);
        let to = self.normalizer.normalize(to);
        if treat_from_as_directory {
            from = from.with_segment(DIRECTORY_PLACEHOLDER);
        }

        let shortest = self.relative_between(&from, &to);
        log::debug!("shortest path from {from} to {to}: {shortest}");
        Ok(shortest)
    }

    fn relative_between(&self, from: &NormalizedPath, to: &NormalizedPath) -> String {
        let sep = self.normalizer.separator().as_str();
        let from_root = fold_first_char(&from.root());
        let to_root = fold_first_char(&to.root());

        if from_root == to_root && from.parent().segments() == to.parent().segments() {
            return match to.file_name() {
                Some(name) => format!("{DIRECTORY_CURRENT}{sep}{name}"),
                None => DIRECTORY_CURRENT.to_string(),
            };
        }

        if from_root != to_root {
            return to.to_string();
        }

        let from_dir = &from.segments()[..from.segments().len().saturating_sub(1)];
        let common = from_dir
            .iter()
            .zip(to.segments())
            .take_while(|(a, b)| a == b)
            .count();

        if common == 0 && !is_drive_root(&to_root) {
            return to.to_string();
        }

        let parts: Vec<&str> = std::iter::repeat(DIRECTORY_UP)
            .take(from_dir.len() - common)
            .chain(to.segments()[common..].iter().map(String::as_str))
            .collect();

        if parts.is_empty() {
            DIRECTORY_CURRENT.to_string()
        } else {
            parts.join(sep)
        }
    }
}

/// Lowercase the first character only.
///
/// Drive letters differ in case between tools (`C:` vs `c:`); only that
/// leading character is folded, everything else compares literally.
fn fold_first_char(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
