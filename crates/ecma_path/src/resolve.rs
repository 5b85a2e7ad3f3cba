//! Relative module specifier resolution
//!
//! Import specifiers written in scripts (`./util`, `../lib/math.js`) are
//! resolved against the importing file's directory before the module is
//! looked up. Specifiers that do not start with `.` are not relative and
//! are returned unchanged.
//!
//! Resolution never fails. Climbing above the root of the base directory
//! stops at the root: each `../` that finds no parent leaves the base as it
//! is, so `../../foo` from `/a` resolves to `/foo`.

use crate::host_path::{base_dir, basename, file_name, trim_trailing_separators};
use std::fmt;
use tracing::trace;

/// Resolves import specifiers to absolute module paths
pub trait ModuleResolver: Send + Sync + fmt::Debug {
    /// Resolve `specifier` as imported from a file in `base_dir`
    fn resolve(&self, specifier: &str, base_dir: &str) -> String;
}

/// Resolver following the host's path conventions
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPathResolver;

impl ModuleResolver for HostPathResolver {
    fn resolve(&self, specifier: &str, base_dir: &str) -> String {
        globalize_relative_path(specifier, base_dir)
    }
}

/// Resolve a relative specifier against the importing file's directory
///
/// ```
/// use ecma_path::globalize_relative_path;
///
/// assert_eq!(globalize_relative_path("./foo", "/a/b"), "/a/b/foo");
/// assert_eq!(globalize_relative_path("../foo", "/a/b"), "/a/foo");
/// assert_eq!(globalize_relative_path("godot", "/a/b"), "godot");
/// ```
pub fn globalize_relative_path(specifier: &str, importer_dir: &str) -> String {
    if !specifier.starts_with('.') {
        return specifier.to_string();
    }

    let mut base = normalize_base_dir(importer_dir);
    let mut tail = specifier;

    loop {
        if let Some(rest) = tail.strip_prefix("../") {
            base = parent_dir(&base);
            tail = rest;
        } else if let Some(rest) = tail.strip_prefix("./") {
            tail = rest;
        } else {
            if tail.starts_with('.') {
                tail = basename(tail);
            }
            break;
        }
    }

    let mut resolved = base;
    if !resolved.ends_with('/') {
        resolved.push('/');
    }
    resolved.push_str(tail.trim_start_matches('/'));

    trace!(specifier, importer_dir, resolved = %resolved, "resolved module specifier");
    resolved
}

/// Drop trailing `.` and `..` components of a base directory, one at a
/// time from the end: `.` goes alone, `..` takes its parent with it
fn normalize_base_dir(dir: &str) -> String {
    let mut base = trim_trailing_separators(dir).to_string();

    loop {
        match file_name(&base) {
            ".." => base = parent_dir(&parent_dir(&base)),
            "." => base = parent_dir(&base),
            _ => break,
        }
    }
    base
}

/// One directory level up; the root is its own parent
fn parent_dir(dir: &str) -> String {
    base_dir(trim_trailing_separators(dir))
}
