//! Code generation for the ECMAScript bridge
//!
//! This module provides generators for:
//! - TypeScript declaration modules (.d.ts) from the class documentation
//! - Default script class sources for new scripts

pub mod declaration;
pub mod script_template;

pub use declaration::{is_exported_class, DeclarationGenerator, DEFAULT_MODULE_NAME, IGNORED_CLASSES};
pub use script_template::{make_template, script_template};
