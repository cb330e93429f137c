//! Scheme and drive prefix recognition.
//!
//! A prefix is a leading `scheme:` or `scheme://[drive:]` token such as
//! `http://`, `file://C:` or a bare Windows drive `C:`. It is kept verbatim
//! and never takes part in segment processing.

use std::sync::OnceLock;

use regex::Regex;

fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9A-Za-z]+:(?://(?:[A-Za-z]:)?)?").expect("prefix pattern is valid")
    })
}

fn drive_root_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z]:[/\\]?$").expect("drive pattern is valid"))
}

/// Split a path into its prefix and the remainder.
///
/// Returns an empty prefix and the unmodified path when nothing matches.
///
/// # Examples
///
/// ```
/// use relink::path::prefix::extract_prefix;
///
/// assert_eq!(extract_prefix("http://host/a.gif"), ("http://", "host/a.gif"));
/// assert_eq!(extract_prefix("C:\\dir"), ("C:", "\\dir"));
/// assert_eq!(extract_prefix("file://c:/x"), ("file://c:", "/x"));
/// assert_eq!(extract_prefix("/plain/path"), ("", "/plain/path"));
/// ```
#[must_use]
pub fn extract_prefix(path: &str) -> (&str, &str) {
    match prefix_pattern().find(path) {
        Some(m) => path.split_at(m.end()),
        None => ("", path),
    }
}

/// Whether `text` is a bare drive root such as `c:`, `C:/` or `d:\`.
///
/// # Examples
///
/// ```
/// use relink::path::prefix::is_drive_root;
///
/// assert!(is_drive_root("c:"));
/// assert!(is_drive_root("C:/"));
/// assert!(!is_drive_root("c:/a"));
/// assert!(!is_drive_root("http:"));
/// ```
#[must_use]
pub fn is_drive_root(text: &str) -> bool {
    drive_root_pattern().is_match(text)
}
