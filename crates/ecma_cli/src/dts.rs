//! Declaration export command
//!
//! `ecma dts` loads a class documentation model from JSON and writes the
//! `declare module` file used by TypeScript projects.

use anyhow::{bail, Context, Result};
use ecma_weld::build::DEFAULT_DTS_FILE_NAME;
use ecma_weld::codegen::DEFAULT_MODULE_NAME;
use ecma_weld::{DocModel, DtsExporter, ExportSummary};
use std::path::PathBuf;

/// Run the dts command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = DtsCommand::parse(args)?;
    let summary = cmd.execute()?;

    println!(
        "Wrote {} classes ({} bytes) to {}",
        summary.class_count,
        summary.bytes_written,
        summary.path.display()
    );
    Ok(())
}

/// Export command configuration
#[derive(Debug, PartialEq)]
struct DtsCommand {
    /// Documentation model JSON
    model: PathBuf,
    /// Declaration file to write
    output: PathBuf,
    /// Namespace the classes are declared in
    module: String,
    /// Create missing parent directories of the output
    mkdir: bool,
}

impl DtsCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut model = None;
        let mut output = PathBuf::from(DEFAULT_DTS_FILE_NAME);
        let mut module = DEFAULT_MODULE_NAME.to_string();
        let mut mkdir = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        output = PathBuf::from(&args[i + 1]);
                        i += 2;
                    } else {
                        bail!("--output requires a value");
                    }
                }
                "--module" | "-m" => {
                    if i + 1 < args.len() {
                        module = args[i + 1].clone();
                        i += 2;
                    } else {
                        bail!("--module requires a value (e.g., godot)");
                    }
                }
                "--mkdir" => {
                    mkdir = true;
                    i += 1;
                }
                arg if !arg.starts_with('-') && model.is_none() => {
                    model = Some(PathBuf::from(arg));
                    i += 1;
                }
                _ => {
                    bail!("Unknown argument: {}", args[i]);
                }
            }
        }

        let Some(model) = model else {
            bail!("dts requires a documentation model: ecma dts <model.json>");
        };
        Ok(DtsCommand {
            model,
            output,
            module,
            mkdir,
        })
    }

    fn execute(&self) -> Result<ExportSummary> {
        let model = DocModel::from_json_file(&self.model)
            .with_context(|| format!("Failed to load {}", self.model.display()))?;

        let summary = DtsExporter::new(&self.output)
            .module_name(&self.module)
            .create_parent_dirs(self.mkdir)
            .export(&model)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let cmd = DtsCommand::parse(&args(&["classes.json"])).unwrap();
        assert_eq!(
            cmd,
            DtsCommand {
                model: PathBuf::from("classes.json"),
                output: PathBuf::from("godot.d.ts"),
                module: "godot".to_string(),
                mkdir: false,
            }
        );
    }

    #[test]
    fn test_parse_flags() {
        let cmd = DtsCommand::parse(&args(&[
            "-o",
            "types/engine.d.ts",
            "classes.json",
            "--module",
            "engine",
            "--mkdir",
        ]))
        .unwrap();
        assert_eq!(cmd.output, PathBuf::from("types/engine.d.ts"));
        assert_eq!(cmd.module, "engine");
        assert!(cmd.mkdir);
    }

    #[test]
    fn test_parse_errors() {
        assert!(DtsCommand::parse(&[]).is_err());
        assert!(DtsCommand::parse(&args(&["classes.json", "-o"])).is_err());
        assert!(DtsCommand::parse(&args(&["classes.json", "--verbose"])).is_err());
        assert!(DtsCommand::parse(&args(&["a.json", "b.json"])).is_err());
    }

    #[test]
    fn test_execute_writes_declarations() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("classes.json");
        fs::write(
            &model_path,
            r#"{ "Node": { "inherits": "Object", "methods": [ { "name": "get_name", "return_type": "String" } ] } }"#,
        )
        .unwrap();

        let cmd = DtsCommand {
            model: model_path,
            output: dir.path().join("out/godot.d.ts"),
            module: "godot".to_string(),
            mkdir: true,
        };
        let summary = cmd.execute().unwrap();
        assert_eq!(summary.class_count, 1);

        let dts = fs::read_to_string(dir.path().join("out/godot.d.ts")).unwrap();
        assert!(dts.contains("declare module godot {"));
        assert!(dts.contains("class Node extends Object {"));
        assert!(dts.contains("get_name(): string;"));
    }

    #[test]
    fn test_execute_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = DtsCommand {
            model: dir.path().join("missing.json"),
            output: dir.path().join("godot.d.ts"),
            module: "godot".to_string(),
            mkdir: false,
        };
        let err = cmd.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }
}
