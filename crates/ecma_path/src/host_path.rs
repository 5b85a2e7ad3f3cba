//! Host path string helpers
//!
//! Host paths are plain strings such as `res://scripts/player.jsx`,
//! `/home/me/project/main.js` or `scripts/util.js`. A scheme prefix
//! (`res://`, `user://`) or a leading `/` is the root and is never popped.
//! Both `/` and `\` separate components.

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Split a path into its root (`scheme://`, `/` or empty) and the rest
pub fn split_root(path: &str) -> (&str, &str) {
    if let Some(pos) = path.find("://") {
        path.split_at(pos + 3)
    } else if path.starts_with('/') {
        path.split_at(1)
    } else {
        ("", path)
    }
}

/// Directory part of a path; the root for top-level entries, empty for a
/// bare relative name
///
/// ```
/// use ecma_path::host_path::base_dir;
///
/// assert_eq!(base_dir("res://scripts/player.jsx"), "res://scripts");
/// assert_eq!(base_dir("res://player.jsx"), "res://");
/// assert_eq!(base_dir("/"), "/");
/// assert_eq!(base_dir("player.jsx"), "");
/// ```
pub fn base_dir(path: &str) -> String {
    let (root, rest) = split_root(path);
    match rest.rfind(is_separator) {
        Some(sep) => format!("{}{}", root, &rest[..sep]),
        None => root.to_string(),
    }
}

/// Path with trailing separators removed, the root excepted
pub fn trim_trailing_separators(path: &str) -> &str {
    let (root, rest) = split_root(path);
    let trimmed = rest.trim_end_matches(is_separator);
    &path[..root.len() + trimmed.len()]
}

/// Last path component
pub fn file_name(path: &str) -> &str {
    let (_, rest) = split_root(path);
    match rest.rfind(is_separator) {
        Some(sep) => &rest[sep + 1..],
        None => rest,
    }
}

/// Path without the extension of its last component
///
/// Everything from the last `.` of the last component is dropped, so a
/// name that is only an extension (`.js`) becomes empty.
pub fn basename(path: &str) -> &str {
    let name_start = path.len() - file_name(path).len();
    match path[name_start..].rfind('.') {
        Some(dot) => &path[..name_start + dot],
        None => path,
    }
}

/// Extension of the last component, without the dot
pub fn extension(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => "",
    }
}
