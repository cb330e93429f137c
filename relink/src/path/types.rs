//! Core types for path handling.
//!
//! This module defines the separator setting and the segment-level
//! representation produced by normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::prefix::extract_prefix;

/// The up-level segment.
pub const DIRECTORY_UP: &str = "..";

/// The current-directory segment.
pub const DIRECTORY_CURRENT: &str = ".";

/// Canonical directory separator used in normalized output.
///
/// # Examples
///
/// ```
/// use relink::path::Separator;
///
/// assert_eq!(Separator::Slash.as_char(), '/');
/// assert_eq!(Separator::parse("\\").unwrap(), Separator::Backslash);
/// assert_eq!(Separator::parse("native").unwrap(), Separator::native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    /// Forward slash (`/`).
    Slash,
    /// Backslash (`\`).
    Backslash,
}

impl Separator {
    /// The host operating system's separator.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Backslash
        } else {
            Self::Slash
        }
    }

    /// The separator as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }

    /// The separator as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slash => "/",
            Self::Backslash => "\\",
        }
    }

    /// Parses a separator setting.
    ///
    /// Recognizes `/`, `\`, `slash`, `backslash` and `native`
    /// (case-insensitive for the word forms).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "/" | "slash" => Ok(Self::Slash),
            "\\" | "backslash" => Ok(Self::Backslash),
            "native" => Ok(Self::native()),
            _ => Err(format!("invalid separator: {s}")),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Separator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Separator> for String {
    fn from(value: Separator) -> Self {
        value.as_str().to_string()
    }
}

/// A path in canonical segment form.
///
/// Segments are never empty and never `.`. A `..` segment survives only at
/// the front of a relative path that has nothing left to cancel against.
///
/// # Examples
///
/// ```
/// use relink::path::{PathNormalizer, Separator};
///
/// let normalizer = PathNormalizer::new(Separator::Slash);
/// let path = normalizer.normalize("C:\\a\\..\\b");
/// assert_eq!(path.prefix(), "C:");
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["b"]);
/// assert_eq!(path.to_string(), "C:/b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedPath {
    prefix: String,
    absolute: bool,
    segments: Vec<String>,
    separator: Separator,
}

impl NormalizedPath {
    pub(crate) fn new(
        prefix: String,
        absolute: bool,
        segments: Vec<String>,
        separator: Separator,
    ) -> Self {
        Self {
            prefix,
            absolute,
            segments,
            separator,
        }
    }

    /// The scheme or drive prefix, empty when none.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a separator follows the prefix.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// The hierarchical segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The separator used when rendering.
    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The last segment, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path with its last segment removed.
    ///
    /// The root (no segments) is its own parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    /// Append one raw segment without re-normalizing.
    #[must_use]
    pub(crate) fn with_segment(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// The part of the path that is not a segment: prefix plus the leading
    /// separator when absolute.
    #[must_use]
    pub fn root(&self) -> String {
        let mut root = self.prefix.clone();
        if self.absolute {
            root.push(self.separator.as_char());
        }
        root
    }

    /// Consume into the prefix, absoluteness and segments.
    #[must_use]
    pub fn into_parts(self) -> (String, bool, Vec<String>) {
        (self.prefix, self.absolute, self.segments)
    }
}

impl fmt::Display for NormalizedPath {
    /// Renders `root()` followed by the segments.
    ///
    /// A relative path whose first segment reads like a prefix (`C:.`) is
    /// written as `./C:.` so it cannot parse back as a drive.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root())?;
        if self.prefix.is_empty()
            && !self.absolute
            && self
                .segments
                .first()
                .is_some_and(|first| !extract_prefix(first).0.is_empty())
        {
            f.write_str(DIRECTORY_CURRENT)?;
            f.write_str(self.separator.as_str())?;
        }
        f.write_str(&self.segments.join(self.separator.as_str()))
    }
}
