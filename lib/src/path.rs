//! Normalization of the remote paths sent to pCloud.
//!
//! pCloud only accepts absolute paths. Callers are allowed to omit the leading
//! separator, it gets added before the request is forwarded.

use std::borrow::Cow;

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";

/// Prepends the separator when the path doesn't start with one.
///
/// ```rust
/// use pcloud_facade::path::normalize;
///
/// assert_eq!(normalize("documents"), "/documents");
/// assert_eq!(normalize("/documents"), "/documents");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.starts_with(SEPARATOR) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{SEPARATOR}{path}"))
    }
}

/// Normalizes an optional path field in place, an absent path stays absent.
pub(crate) fn normalize_field(field: &mut Option<String>) {
    if let Some(value) = field.as_mut() {
        if !value.starts_with(SEPARATOR) {
            value.insert(0, SEPARATOR);
        }
    }
}
