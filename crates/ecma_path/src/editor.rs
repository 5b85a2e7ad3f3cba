//! External editor launch helpers
//!
//! The user configures an editor executable and a flags string such as
//! `--goto "{file}:{line}:{col}"`. The flags become the argument list, and a
//! compiled `.jsx` class is opened through the `.tsx` source it was built
//! from, located via the project's `tsconfig.json`.

use crate::error::{PathError, PathResult};
use crate::host_path::split_root;
use crate::language::ScriptExtension;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the editor should open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorLaunch {
    /// Absolute path of the file to open
    pub script_path: String,
    /// Absolute path of the project directory
    pub project_path: String,
    /// Line, non-positive meaning "unknown"
    pub line: i32,
    pub col: i32,
}

impl EditorLaunch {
    pub fn new(script_path: impl Into<String>) -> Self {
        Self {
            script_path: script_path.into(),
            ..Default::default()
        }
    }

    pub fn project(mut self, project_path: impl Into<String>) -> Self {
        self.project_path = project_path.into();
        self
    }

    pub fn at(mut self, line: i32, col: i32) -> Self {
        self.line = line;
        self.col = col;
        self
    }
}

/// Build the editor's argument list from the configured flags
///
/// `{line}` and `{col}` are filled before splitting, `{project}` and `{file}`
/// inside each argument so paths with spaces stay one argument. Without a
/// `{file}` argument the script path is appended.
pub fn expand_editor_flags(flags: &str, launch: &EditorLaunch) -> Vec<String> {
    let flags = replace_ignore_case(flags, "{line}", &launch.line.max(0).to_string());
    let flags = replace_ignore_case(&flags, "{col}", &launch.col.to_string());
    let flags = flags.trim().replace("\\\\", "\\");

    let mut has_file_flag = false;
    let mut args: Vec<String> = split_flags(&flags)
        .into_iter()
        .map(|arg| {
            if find_ignore_case(&arg, "{file}").is_some() {
                has_file_flag = true;
            }
            let arg = replace_ignore_case(&arg, "{project}", &launch.project_path);
            replace_ignore_case(&arg, "{file}", &launch.script_path)
        })
        .collect();

    if !has_file_flag {
        args.push(launch.script_path.clone());
    }
    debug!(?args, "expanded external editor flags");
    args
}

/// Replace every occurrence of `pattern`, ignoring ASCII case
///
/// An empty pattern leaves `text` unchanged.
pub fn replace_ignore_case(text: &str, pattern: &str, with: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = find_ignore_case(rest, pattern) {
        out.push_str(&rest[..pos]);
        out.push_str(with);
        rest = &rest[pos + pattern.len()..];
    }
    out.push_str(rest);
    out
}

fn find_ignore_case(text: &str, pattern: &str) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    text.char_indices().map(|(i, _)| i).find(|&i| {
        text.as_bytes()
            .get(i..i + pattern.len())
            .is_some_and(|window| window.eq_ignore_ascii_case(pattern.as_bytes()))
    })
}

/// Split on unquoted spaces; `"` toggles quoting unless preceded by `\`
fn split_flags(flags: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted_arg = false;
    let mut inside_quotes = false;
    let mut prev = None;

    for c in flags.chars() {
        if c == '"' && prev != Some('\\') {
            inside_quotes = !inside_quotes;
            quoted_arg = true;
        } else if c == ' ' && !inside_quotes {
            if !current.is_empty() || quoted_arg {
                args.push(std::mem::take(&mut current));
            }
            quoted_arg = false;
        } else {
            current.push(c);
        }
        prev = Some(c);
    }
    if !current.is_empty() || quoted_arg {
        args.push(current);
    }
    args
}

/// The `compilerOptions` of a `tsconfig.json` that map sources to output
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TsConfig {
    #[serde(rename = "compilerOptions", default)]
    pub compiler_options: CompilerOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub root_dir: Option<String>,
    pub out_dir: Option<String>,
}

impl TsConfig {
    /// Parse `tsconfig.json` contents
    pub fn from_json_str(json: &str) -> PathResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `tsconfig.json`
    pub fn from_file(path: impl AsRef<Path>) -> PathResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PathError::TsConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// `rootDir` with its leading `.` removed (`./src` → `/src`)
    pub fn root_dir(&self) -> PathResult<String> {
        self.compiler_options
            .root_dir
            .as_deref()
            .map(strip_first_dot)
            .ok_or(PathError::MissingCompilerOption("rootDir"))
    }

    /// `outDir` with its leading `.` removed (`./build` → `/build`)
    pub fn out_dir(&self) -> PathResult<String> {
        self.compiler_options
            .out_dir
            .as_deref()
            .map(strip_first_dot)
            .ok_or(PathError::MissingCompilerOption("outDir"))
    }
}

fn strip_first_dot(dir: &str) -> String {
    dir.replacen('.', "", 1)
}

/// Path of the `.tsx` source a compiled `.jsx` class was built from
///
/// ```
/// use ecma_path::editor::{typed_source_for, TsConfig};
///
/// let tsconfig = TsConfig::from_json_str(
///     r#"{ "compilerOptions": { "rootDir": "./src", "outDir": "./build" } }"#,
/// ).unwrap();
/// assert_eq!(
///     typed_source_for("res://build/player.jsx", &tsconfig).unwrap(),
///     "res://src/player.tsx"
/// );
/// ```
pub fn typed_source_for(class_path: &str, tsconfig: &TsConfig) -> PathResult<String> {
    let stem = class_path
        .strip_suffix(ScriptExtension::Class.as_str())
        .filter(|stem| stem.ends_with('.'))
        .ok_or_else(|| PathError::NotAClassScript(class_path.to_string()))?;
    let tsx_path = format!("{}{}", stem, ScriptExtension::TypedClass.as_str());

    let out_dir = tsconfig.out_dir()?;
    let root_dir = tsconfig.root_dir()?;
    Ok(replace_ignore_case(&tsx_path, &out_dir, &root_dir))
}

/// Absolute filesystem path of a `res://` path inside `project_dir`
pub fn globalize_res_path(path: &str, project_dir: &Path) -> PathBuf {
    match split_root(path) {
        ("res://", rest) => project_dir.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Locate the `.tsx` source of a compiled class on disk
///
/// Reads `tsconfig.json` from the project root and fails when the mapped
/// source does not exist.
pub fn find_typed_source(class_path: &str, project_dir: &Path) -> PathResult<PathBuf> {
    let tsconfig = TsConfig::from_file(project_dir.join("tsconfig.json"))?;
    let tsx_path = typed_source_for(class_path, &tsconfig)?;
    let source = globalize_res_path(&tsx_path, project_dir);

    if !source.is_file() {
        return Err(PathError::SourceNotFound(source));
    }
    debug!(class = class_path, source = %source.display(), "found typed class source");
    Ok(source)
}
