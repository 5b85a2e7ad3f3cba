//! DtsExporter for writing the TypeScript declaration file
//!
//! Generation is pure; this is the single I/O step. The destination is
//! overwritten in place. Callers that need an atomic replace write to a
//! temporary path and rename it themselves.

use crate::codegen::{DeclarationGenerator, DEFAULT_MODULE_NAME};
use crate::error::{WeldError, WeldResult};
use crate::ir::DocModel;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name offered when the user picks no other
pub const DEFAULT_DTS_FILE_NAME: &str = "godot.d.ts";

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Path the declaration file was written to
    pub path: PathBuf,
    /// Number of classes declared
    pub class_count: usize,
    /// Number of bytes written
    pub bytes_written: usize,
}

/// Builder for one declaration file export
///
/// # Example
/// ```no_run
/// use ecma_weld::{ClassDoc, DocModel, DtsExporter};
///
/// let model = DocModel::new().class(ClassDoc::new("Node").inherits("Object"));
/// DtsExporter::new("types/godot.d.ts")
///     .create_parent_dirs(true)
///     .export(&model)
///     .expect("Failed to write declaration file");
/// ```
#[derive(Debug, Clone)]
pub struct DtsExporter {
    path: PathBuf,
    module_name: String,
    create_parent_dirs: bool,
}

impl DtsExporter {
    /// Create an exporter writing to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            create_parent_dirs: false,
        }
    }

    /// Set the namespace the classes are declared in
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Create missing parent directories of the destination
    pub fn create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the declaration module without writing it
    pub fn render(&self, model: &DocModel) -> String {
        DeclarationGenerator::new(model)
            .with_module_name(self.module_name.as_str())
            .generate()
    }

    /// Generate the declaration module and write it to the destination
    pub fn export(&self, model: &DocModel) -> WeldResult<ExportSummary> {
        debug!(path = %self.path.display(), classes = model.len(), "exporting declarations");

        let generator = DeclarationGenerator::new(model).with_module_name(self.module_name.as_str());
        let text = generator.generate();

        if self.create_parent_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| WeldError::destination(&self.path, e))?;
            }
        }

        fs::write(&self.path, &text).map_err(|e| WeldError::destination(&self.path, e))?;

        let summary = ExportSummary {
            path: self.path.clone(),
            class_count: generator.exported_count(),
            bytes_written: text.len(),
        };
        info!(
            path = %summary.path.display(),
            classes = summary.class_count,
            bytes = summary.bytes_written,
            "wrote declaration file"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ClassDoc;

    #[test]
    fn test_exporter_defaults() {
        let exporter = DtsExporter::new(DEFAULT_DTS_FILE_NAME);
        assert_eq!(exporter.path(), Path::new("godot.d.ts"));
        assert!(!exporter.create_parent_dirs);
        assert_eq!(exporter.module_name, "godot");
    }

    #[test]
    fn test_render_uses_module_name() {
        let model = DocModel::new().class(ClassDoc::new("Node"));
        let text = DtsExporter::new("out.d.ts").module_name("engine").render(&model);
        assert!(text.starts_with("\ndeclare module engine {"));
    }
}
