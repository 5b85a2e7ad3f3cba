//! # ecma_path - Module Paths for the ECMAScript Bridge
//!
//! Host-path helpers used when scripts are loaded and edited.
//!
//! ## Overview
//!
//! Scripts import each other with relative specifiers. Before a module is
//! looked up, the specifier is resolved against the directory of the file
//! that imports it. Host paths are plain strings (`res://scripts/a.jsx`,
//! `/home/me/game/main.js`), so everything here is pure string work with no
//! filesystem access, except locating the TypeScript source of a class.
//!
//! **Key Features:**
//! - **Resolve Specifiers**: `./` and `../` chains against a base directory
//! - **Root Clamping**: climbing above the root stops at the root
//! - **Language Metadata**: reserved words, delimiters, script extensions
//! - **External Editor**: argument expansion and `.jsx` to `.tsx` mapping
//!
//! ## API Categories
//!
//! ### Resolution
//! - [`globalize_relative_path`] - resolve a specifier against a directory
//! - [`ModuleResolver`] - the resolver seam, implemented by [`HostPathResolver`]
//!
//! ### Path Helpers
//! - [`host_path::base_dir`], [`host_path::basename`], [`host_path::extension`]
//!
//! ### Editor Integration
//! - [`expand_editor_flags`] - build the editor's argument list
//! - [`typed_source_for`] / [`find_typed_source`] - source of a compiled class
//!
//! ## Examples
//!
//! ```
//! use ecma_path::globalize_relative_path;
//!
//! assert_eq!(globalize_relative_path("./util.js", "res://scripts"), "res://scripts/util.js");
//! assert_eq!(globalize_relative_path("../lib/math", "/game/src"), "/game/lib/math");
//! assert_eq!(globalize_relative_path("../../../x", "/game/src"), "/x");
//! assert_eq!(globalize_relative_path("godot", "/game/src"), "godot");
//! ```
//!
//! ## Edge Cases
//!
//! - Specifiers not starting with `.` are returned unchanged
//! - A trailing separator on the base directory is ignored
//! - Trailing `.` and `..` components of the base directory are collapsed
//! - A remaining dot-leading tail (`.js`, `..`) loses its extension

pub mod editor;
pub mod error;
pub mod host_path;
pub mod language;
pub mod resolve;

pub use editor::{
    expand_editor_flags, find_typed_source, globalize_res_path, typed_source_for, EditorLaunch,
    TsConfig,
};
pub use error::{PathError, PathResult};
pub use language::{is_reserved_word, recognized_extensions, ScriptExtension, RESERVED_WORDS};
pub use resolve::{globalize_relative_path, HostPathResolver, ModuleResolver};
