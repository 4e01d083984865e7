//! Path helpers.
//!
//! A path is a `/`-separated list of folder names, read top-down from root.
//! Empty segments are ignored, so `""`, `"/"` and `"//"` all denote root and
//! `"/a//b/"` is the same as `"a/b"`.

use crate::{FolderTreeError, Result};

pub const SEPARATOR: char = '/';

/// Non-empty segments of `path`.
///
/// # Example
///
/// ```
/// use folder_tree::segments;
///
/// assert_eq!(segments("").count(), 0);
/// assert_eq!(segments("/").count(), 0);
/// assert_eq!(segments("/a//b/").collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Splits `path` on its last `/` into `(parent_path, name)`.
///
/// Without a `/` the parent is `""`, which denotes root.
///
/// # Example
///
/// ```
/// use folder_tree::split_parent_and_name;
///
/// assert_eq!(split_parent_and_name("F1"), ("", "F1"));
/// assert_eq!(split_parent_and_name("/F1"), ("", "F1"));
/// assert_eq!(split_parent_and_name("/F1/F2"), ("/F1", "F2"));
/// assert_eq!(split_parent_and_name("/F1/"), ("/F1", ""));
/// ```
pub fn split_parent_and_name(path: &str) -> (&str, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    }
}

/// Joins names into an absolute path. Root (no names) is `""`.
///
/// # Example
///
/// ```
/// use folder_tree::format_path;
///
/// assert_eq!(format_path::<&str>(&[]), "");
/// assert_eq!(format_path(&["F1", "F4"]), "/F1/F4");
/// ```
pub fn format_path<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for name in names {
        out.push(SEPARATOR);
        out.push_str(name.as_ref());
    }
    out
}

/// Checks that `name` can be addressed by path: non-empty and free of `/`.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(SEPARATOR) {
        return Err(FolderTreeError::InvalidName(name.to_string()));
    }
    Ok(())
}
