//! Ecma-Weld: TypeScript declaration generation for the ECMAScript editor bridge
//!
//! This crate turns the host engine's class documentation (classes with
//! constants, properties, methods and inheritance) into a single
//! `declare module godot { ... }` TypeScript declaration file that script
//! authors feed to their type checker.
//!
//! # Architecture
//!
//! - `ir`: Documentation model (classes, members, arguments)
//! - `template`: `${name}` placeholder substitution
//! - `doc_text`: Doc comment body formatting and inline markup rewriting
//! - `types`: Host type names to TypeScript type names
//! - `codegen`: Declaration and script template generation
//! - `build`: Writing the generated declaration file
//!
//! # Usage
//!
//! ```rust,no_run
//! use ecma_weld::{DocModel, DtsExporter};
//!
//! let model = DocModel::from_json_file("doc_model.json").expect("model");
//! DtsExporter::new("godot.d.ts")
//!     .export(&model)
//!     .expect("Failed to write declaration file");
//! ```

pub mod build;
pub mod codegen;
pub mod doc_text;
pub mod error;
pub mod ir;
pub mod template;
pub mod test;
pub mod types;

// Re-export commonly used types
pub use build::{DtsExporter, ExportSummary};
pub use codegen::{make_template, script_template, DeclarationGenerator};
pub use doc_text::format_doc_text;
pub use error::{WeldError, WeldResult};
pub use ir::{matches_filter, ArgumentDoc, ClassDoc, ConstantDoc, DocModel, MethodDoc, PropertyDoc};
pub use template::{apply_pattern, TemplateValues};
pub use types::map_type;
