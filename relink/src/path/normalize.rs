//! Path normalization.
//!
//! This module turns raw path strings into canonical segment form:
//! - Keeping a scheme or drive prefix (`http://`, `C:`) verbatim
//! - Converting both `/` and `\` to one canonical separator
//! - Dropping empty and `.` segments
//! - Collapsing `..` against the preceding segment where legal
//!
//! Unlike [`std::path`], nothing here touches the filesystem or depends on
//! the host platform beyond the default separator, so Windows-style input
//! normalizes the same way on every host.

use crate::path::prefix::extract_prefix;
use crate::path::types::{NormalizedPath, Separator, DIRECTORY_CURRENT, DIRECTORY_UP};

/// Normalizes path strings using a configurable separator.
///
/// # Examples
///
/// ```
/// use relink::path::{PathNormalizer, Separator};
///
/// let slash = PathNormalizer::new(Separator::Slash);
/// assert_eq!(slash.normalize_str("http://dddd\\dddd/rrr.gif"), "http://dddd/dddd/rrr.gif");
/// assert_eq!(slash.normalize_str("C:\\rrr"), "C:/rrr");
/// assert_eq!(slash.normalize_str("/fff/..\\ddd"), "/ddd");
///
/// let backslash = PathNormalizer::new(Separator::Backslash);
/// assert_eq!(backslash.normalize_str("C:\\rrr"), "C:\\rrr");
/// assert_eq!(backslash.normalize_str("/fff/../.\\ddd"), "\\ddd");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathNormalizer {
    separator: Separator,
}

impl PathNormalizer {
    /// Create a normalizer emitting `separator`.
    #[must_use]
    pub const fn new(separator: Separator) -> Self {
        Self { separator }
    }

    /// The canonical separator.
    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Return a copy using a different separator.
    #[must_use]
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Whether the path, with its prefix stripped, starts with a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::path::{PathNormalizer, Separator};
    ///
    /// let normalizer = PathNormalizer::new(Separator::Slash);
    /// assert!(normalizer.is_absolute("/a/b"));
    /// assert!(normalizer.is_absolute("C:\\a"));
    /// assert!(!normalizer.is_absolute("C:a"));
    /// assert!(!normalizer.is_absolute("http://host/a"));
    /// assert!(!normalizer.is_absolute("a/b"));
    /// ```
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        let (_, remainder) = extract_prefix(path);
        remainder.starts_with(['/', '\\'])
    }

    /// Normalize a path into segment form.
    ///
    /// `..` pops the previous segment when the path is absolute (clamping at
    /// the root) or when the previous segment is a real name. Otherwise the
    /// `..` is kept, so relative paths may climb above their start.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::path::{PathNormalizer, Separator};
    ///
    /// let normalizer = PathNormalizer::new(Separator::Slash);
    /// assert_eq!(normalizer.normalize_str("a/./b/../c"), "a/c");
    /// assert_eq!(normalizer.normalize_str("a/../../b"), "../b");
    /// assert_eq!(normalizer.normalize_str("/../a"), "/a");
    /// assert_eq!(normalizer.normalize_str("a//b/"), "a/b");
    /// ```
    #[must_use]
    pub fn normalize(&self, path: &str) -> NormalizedPath {
        let (prefix, remainder) = extract_prefix(path);
        let absolute = remainder.starts_with(['/', '\\']);

        let mut segments: Vec<String> = Vec::new();
        fold_segments(&mut segments, absolute, remainder);

        NormalizedPath::new(prefix.to_string(), absolute, segments, self.separator)
    }

    /// Normalize a path and render it as a string.
    #[must_use]
    pub fn normalize_str(&self, path: &str) -> String {
        self.normalize(path).to_string()
    }

    /// Resolve `relative` against `base`.
    ///
    /// An absolute `relative` wins outright. Otherwise the segments of
    /// `relative` are folded onto the normalized `base`, so the prefix and
    /// root of `base` are never re-parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::path::{PathNormalizer, Separator};
    ///
    /// let normalizer = PathNormalizer::new(Separator::Slash);
    /// assert_eq!(normalizer.join("/a/b", "../c").to_string(), "/a/c");
    /// assert_eq!(normalizer.join("/a/b", "./x").to_string(), "/a/b/x");
    /// assert_eq!(normalizer.join("/a/b", "/z").to_string(), "/z");
    /// assert_eq!(normalizer.join("C:/", "x").to_string(), "C:/x");
    /// ```
    #[must_use]
    pub fn join(&self, base: &str, relative: &str) -> NormalizedPath {
        if self.is_absolute(relative) {
            return self.normalize(relative);
        }
        let (prefix, absolute, mut segments) = self.normalize(base).into_parts();
        fold_segments(&mut segments, absolute, relative);
        NormalizedPath::new(prefix, absolute, segments, self.separator)
    }
}

/// Fold the `/`- or `\`-separated chunks of `text` onto `segments`.
///
/// `..` pops when the path is absolute or the last segment is a real name.
fn fold_segments(segments: &mut Vec<String>, absolute: bool, text: &str) {
    let mut up = segments.last().is_some_and(|last| last != DIRECTORY_UP);
    for chunk in text.split(['/', '\\']) {
        if chunk == DIRECTORY_UP && (absolute || up) {
            segments.pop();
            up = segments.last().is_some_and(|last| last != DIRECTORY_UP);
        } else if chunk != DIRECTORY_CURRENT && !chunk.is_empty() {
            up = chunk != DIRECTORY_UP;
            segments.push(chunk.to_string());
        }
    }
}
