//! External editor argument command
//!
//! Prints the argument list the editor integration would pass to the
//! configured external editor, one argument per line. A compiled `.jsx`
//! class opens its `.tsx` source when the project has a matching
//! `tsconfig.json`.

use anyhow::{bail, Context, Result};
use ecma_path::{expand_editor_flags, find_typed_source, EditorLaunch, ScriptExtension};
use std::path::Path;
use tracing::{debug, warn};

/// Run the editor-args command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = EditorArgsCommand::parse(args)?;
    for arg in cmd.execute() {
        println!("{}", arg);
    }
    Ok(())
}

/// Editor argument command configuration
#[derive(Debug, PartialEq)]
struct EditorArgsCommand {
    script_path: String,
    flags: String,
    line: i32,
    col: i32,
    project: Option<String>,
}

impl EditorArgsCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut script_path = None;
        let mut flags = None;
        let mut line = 0;
        let mut col = 0;
        let mut project = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--flags" => {
                    if i + 1 < args.len() {
                        flags = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        bail!("--flags requires a value (e.g., \"--goto {{file}}:{{line}}\")");
                    }
                }
                "--line" | "--col" => {
                    if i + 1 < args.len() {
                        let value = args[i + 1]
                            .parse()
                            .with_context(|| format!("{} requires a number", args[i]))?;
                        if args[i] == "--line" {
                            line = value;
                        } else {
                            col = value;
                        }
                        i += 2;
                    } else {
                        bail!("{} requires a value", args[i]);
                    }
                }
                "--project" | "-p" => {
                    if i + 1 < args.len() {
                        project = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        bail!("--project requires a value");
                    }
                }
                arg if !arg.starts_with("--") && script_path.is_none() => {
                    script_path = Some(arg.to_string());
                    i += 1;
                }
                _ => {
                    bail!("Unknown argument: {}", args[i]);
                }
            }
        }

        let Some(script_path) = script_path else {
            bail!("editor-args requires a script path: ecma editor-args <script_path> --flags STRING");
        };
        let Some(flags) = flags else {
            bail!("editor-args requires --flags");
        };
        Ok(EditorArgsCommand {
            script_path,
            flags,
            line,
            col,
            project,
        })
    }

    fn execute(&self) -> Vec<String> {
        let project_path = self.project.clone().unwrap_or_default();
        let script_path = self.editable_source(&project_path);

        let launch = EditorLaunch::new(script_path)
            .project(project_path)
            .at(self.line, self.col);
        expand_editor_flags(&self.flags, &launch)
    }

    /// The `.tsx` source of a compiled class when one exists, else the script
    fn editable_source(&self, project_path: &str) -> String {
        let is_compiled_class =
            ScriptExtension::from_path(&self.script_path) == Some(ScriptExtension::Class);
        if !is_compiled_class || project_path.is_empty() {
            return self.script_path.clone();
        }

        match find_typed_source(&self.script_path, Path::new(project_path)) {
            Ok(source) => {
                debug!(source = %source.display(), "opening TypeScript source");
                source.to_string_lossy().into_owned()
            }
            Err(err) => {
                warn!("{}", err);
                self.script_path.clone()
            }
        }
    }
}
