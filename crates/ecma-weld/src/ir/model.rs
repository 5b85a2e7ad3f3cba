//! Documentation model
//!
//! The whole class reference handed over by the documentation collector for
//! one export. Classes keep the order they were supplied in, which is the
//! order they are emitted in.

use crate::codegen::is_exported_class;
use crate::error::{WeldError, WeldResult};
use crate::ir::ClassDoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Class name to class documentation, in collector order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocModel {
    classes: IndexMap<String, ClassDoc>,
}

impl DocModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, replacing any class already registered under its name
    pub fn class(mut self, class: ClassDoc) -> Self {
        self.insert(class);
        self
    }

    /// Insert a class, returning the one it replaced
    pub fn insert(&mut self, class: ClassDoc) -> Option<ClassDoc> {
        self.classes.insert(class.name.clone(), class)
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<&ClassDoc> {
        self.classes.get(name)
    }

    /// Iterate classes in model order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDoc> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse a model from JSON (`{ "ClassName": { ...ClassDoc } }`)
    ///
    /// A class record without a `name` takes its key as name.
    pub fn from_json_str(json: &str) -> WeldResult<Self> {
        let mut classes: IndexMap<String, ClassDoc> = serde_json::from_str(json)?;
        for (key, class) in classes.iter_mut() {
            if class.name.is_empty() {
                class.name = key.clone();
            }
        }
        Ok(Self { classes })
    }

    /// Read and parse a model from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> WeldResult<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| WeldError::model_read(path, e))?;
        Self::from_json_str(&json)
    }

    /// Serialize the model to pretty JSON
    pub fn to_json(&self) -> WeldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Names of the classes that get a declaration, sorted alphabetically
    pub fn exported_class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .classes
            .keys()
            .map(String::as_str)
            .filter(|name| is_exported_class(name))
            .collect();
        names.sort_unstable();
        names
    }

    /// Exported classes whose name or parent matches `filter`, sorted by name
    pub fn filtered(&self, filter: &str) -> Vec<&ClassDoc> {
        self.exported_class_names()
            .into_iter()
            .filter_map(|name| self.classes.get(name))
            .filter(|class| matches_filter(filter, &class.name, &class.inherits))
            .collect()
    }
}

impl FromIterator<ClassDoc> for DocModel {
    fn from_iter<I: IntoIterator<Item = ClassDoc>>(iter: I) -> Self {
        let mut model = DocModel::new();
        for class in iter {
            model.insert(class);
        }
        model
    }
}

/// Class list filter: an empty filter matches everything, otherwise the
/// filter must be a case-insensitive subsequence of either name
pub fn matches_filter(filter: &str, name: &str, native_name: &str) -> bool {
    filter.is_empty() || is_subsequence_ci(filter, name) || is_subsequence_ci(filter, native_name)
}

fn is_subsequence_ci(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| hay.any(|h| h == c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_preserves_insertion_order() {
        let model = DocModel::new()
            .class(ClassDoc::new("Sprite"))
            .class(ClassDoc::new("AnimationPlayer"))
            .class(ClassDoc::new("Node"));

        let names: Vec<_> = model.classes().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sprite", "AnimationPlayer", "Node"]);
    }

    #[test]
    fn test_from_json_fills_missing_names() {
        let model = DocModel::from_json_str(
            r#"{ "Zeta": { "inherits": "Node" }, "Alpha": { "name": "Alpha" } }"#,
        )
        .unwrap();

        assert_eq!(model.len(), 2);
        assert_eq!(model.get("Zeta").unwrap().name, "Zeta");
        assert_eq!(model.classes().next().unwrap().name, "Zeta");
    }

    #[test]
    fn test_json_roundtrip_keeps_shape() {
        let model = DocModel::new().class(ClassDoc::new("Node").inherits("Object"));
        let json = model.to_json().unwrap();
        assert!(json.contains("\"Node\""));
        assert_eq!(DocModel::from_json_str(&json).unwrap(), model);
    }

    #[test]
    fn test_exported_class_names() {
        let model: DocModel = ["Node", "@GlobalScope", "int", "Camera", "Nil", "Array"]
            .into_iter()
            .map(ClassDoc::new)
            .collect();

        assert_eq!(model.exported_class_names(), vec!["Camera", "Node"]);
    }

    #[test]
    fn test_matches_filter() {
        assert!(matches_filter("", "Sprite", "Node2D"));
        assert!(matches_filter("spr", "Sprite", "Node2D"));
        assert!(matches_filter("SPT", "Sprite", "Node2D"));
        assert!(matches_filter("n2d", "Sprite", "Node2D"));
        assert!(!matches_filter("xyz", "Sprite", "Node2D"));
        assert!(!matches_filter("etirps", "Sprite", "Node2D"));
    }

    #[test]
    fn test_filtered_sorts_by_name() {
        let model = DocModel::new()
            .class(ClassDoc::new("Sprite").inherits("Node2D"))
            .class(ClassDoc::new("AnimatedSprite").inherits("Node2D"))
            .class(ClassDoc::new("Camera"));

        let names: Vec<_> = model.filtered("sprite").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["AnimatedSprite", "Sprite"]);

        let names: Vec<_> = model.filtered("node2d").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["AnimatedSprite", "Sprite"]);
    }
}
