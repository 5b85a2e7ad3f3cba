//! Class documentation records
//!
//! These mirror the host's class reference: a class with its constants,
//! properties and methods, each carrying free-form description text in the
//! host's markup. Type names are in the host vocabulary (`int`, `float`,
//! `bool`, `String`, class names); see [`crate::types::map_type`].

use serde::{Deserialize, Serialize};

/// Documentation for a single class
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassDoc {
    /// Class name (unique within a model)
    pub name: String,
    /// Parent class name, empty for root classes
    pub inherits: String,
    /// One-line summary
    pub brief_description: String,
    /// Full description
    pub description: String,
    /// Constants in declaration order
    pub constants: Vec<ConstantDoc>,
    /// Properties in declaration order
    pub properties: Vec<PropertyDoc>,
    /// Methods in declaration order
    pub methods: Vec<MethodDoc>,
}

impl ClassDoc {
    /// Create a new class record
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the parent class
    pub fn inherits(mut self, parent: impl Into<String>) -> Self {
        self.inherits = parent.into();
        self
    }

    /// Set the brief description
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief_description = brief.into();
        self
    }

    /// Set the full description
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.description = doc.into();
        self
    }

    /// Add a constant
    pub fn constant(mut self, constant: ConstantDoc) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a property
    pub fn property(mut self, property: PropertyDoc) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a method
    pub fn method(mut self, method: MethodDoc) -> Self {
        self.methods.push(method);
        self
    }

    /// Whether the class declares a parent
    pub fn has_parent(&self) -> bool {
        !self.inherits.is_empty()
    }
}

/// Documentation for a class constant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantDoc {
    pub name: String,
    /// Value as source text, emitted verbatim
    pub value: String,
    pub description: String,
}

impl ConstantDoc {
    /// Create a new constant
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: String::new(),
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.description = doc.into();
        self
    }
}

/// Documentation for a class property
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDoc {
    pub name: String,
    /// Host type name
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

impl PropertyDoc {
    /// Create a new property
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: String::new(),
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.description = doc.into();
        self
    }
}

/// Documentation for a method
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDoc {
    pub name: String,
    /// Host return type name, empty when the method returns nothing
    pub return_type: String,
    /// Arguments in call order
    pub arguments: Vec<ArgumentDoc>,
    pub description: String,
}

impl MethodDoc {
    /// Create a new method with no arguments and no return value
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set return type
    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = type_name.into();
        self
    }

    /// Add an argument
    pub fn argument(mut self, argument: ArgumentDoc) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.description = doc.into();
        self
    }
}

/// Documentation for a method argument
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentDoc {
    pub name: String,
    /// Host type name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Default value as source text; makes the parameter optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ArgumentDoc {
    /// Create a new required argument
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default_value: None,
        }
    }

    /// Set the default value literal
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Whether the argument can be omitted by callers
    pub fn is_optional(&self) -> bool {
        self.default_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_builder() {
        let class = ClassDoc::new("Sprite")
            .inherits("Node2D")
            .property(PropertyDoc::new("texture", "Texture"))
            .method(MethodDoc::new("play"));

        assert_eq!(class.name, "Sprite");
        assert!(class.has_parent());
        assert_eq!(class.properties.len(), 1);
        assert_eq!(class.methods.len(), 1);
        assert!(class.constants.is_empty());
    }

    #[test]
    fn test_argument_optional() {
        assert!(!ArgumentDoc::new("name", "String").is_optional());
        assert!(ArgumentDoc::new("name", "String")
            .with_default("\"default\"")
            .is_optional());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{
            "name": "Node",
            "methods": [
                { "name": "get_child", "return_type": "Node",
                  "arguments": [{ "name": "idx", "type": "int" }] }
            ]
        }"#;
        let class: ClassDoc = serde_json::from_str(json).unwrap();
        assert_eq!(class.name, "Node");
        assert!(!class.has_parent());
        assert_eq!(class.methods[0].arguments[0].type_name, "int");
        assert_eq!(class.methods[0].arguments[0].default_value, None);
    }
}
