//! Declaration file export
//!
//! This module writes the generated declaration module to disk:
//! - DtsExporter for configuring and running one export

pub mod exporter;

pub use exporter::{DtsExporter, ExportSummary, DEFAULT_DTS_FILE_NAME};
