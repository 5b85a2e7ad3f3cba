//! Class listing command
//!
//! Lists the classes a declaration export would contain, filtered the way
//! the editor's class browser filters them.

use anyhow::{bail, Context, Result};
use ecma_weld::DocModel;
use std::path::PathBuf;

/// Run the classes command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = ClassesCommand::parse(args)?;
    let model = DocModel::from_json_file(&cmd.model)
        .with_context(|| format!("Failed to load {}", cmd.model.display()))?;

    for line in list_classes(&model, &cmd.filter) {
        println!("{}", line);
    }
    Ok(())
}

struct ClassesCommand {
    model: PathBuf,
    filter: String,
}

impl ClassesCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut model = None;
        let mut filter = String::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--filter" | "-f" => {
                    if i + 1 < args.len() {
                        filter = args[i + 1].clone();
                        i += 2;
                    } else {
                        bail!("--filter requires a value");
                    }
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
            bail!("classes requires a documentation model: ecma classes <model.json>");
        };
        Ok(ClassesCommand { model, filter })
    }
}

/// `Name` or `Name : Parent` for each matching class
fn list_classes(model: &DocModel, filter: &str) -> Vec<String> {
    model
        .filtered(filter)
        .into_iter()
        .map(|class| {
            if class.has_parent() {
                format!("{} : {}", class.name, class.inherits)
            } else {
                class.name.clone()
            }
        })
        .collect()
}
