//! TypeScript declaration module generator
//!
//! Generates one `declare module godot { ... }` block holding a class
//! declaration per documented host class. Every level is a `${name}`
//! template: member templates are rendered first and their concatenated
//! text fills the class template, whose output in turn fills the module
//! template.

use crate::doc_text::{format_class_descriptions, format_doc_text, MEMBER_DOC_INDENT};
use crate::ir::{ArgumentDoc, ClassDoc, ConstantDoc, DocModel, MethodDoc, PropertyDoc};
use crate::template::{apply_pattern, TemplateValues};
use crate::types::map_type;
use tracing::{debug, trace};

/// Namespace the declarations are emitted under
pub const DEFAULT_MODULE_NAME: &str = "godot";

/// Classes that document primitive aliases or the absence of a value
pub const IGNORED_CLASSES: &[&str] = &["int", "float", "bool", "Array", "Nil"];

/// Name prefix of the host's virtual/global scope classes
const GLOBAL_SCOPE_PREFIX: char = '@';

const MODULE_TEMPLATE: &str = "
declare module ${module} {
\t${classes}
}";

const CLASS_TEMPLATE: &str = "
\t/**
${brief_description}

${description}
\t*/
\tclass ${name}${extends}${inherits} {
${constants}
${properties}
${methods}
\t}
";

const CONSTANT_TEMPLATE: &str = "
\t\t/**
${description}
\t\t*/
\t\tstatic readonly ${name}: number = ${value};
";

const PROPERTY_TEMPLATE: &str = "
\t\t/**
${description}
\t\t*/
\t\t${name}: ${type};
";

const METHOD_TEMPLATE: &str = "
\t\t/**
${description}
\t\t*/
\t\t${name}(${params}): ${return_type};
";

/// Whether a class gets a declaration in the generated module
pub fn is_exported_class(name: &str) -> bool {
    !name.starts_with(GLOBAL_SCOPE_PREFIX) && !IGNORED_CLASSES.contains(&name)
}

/// Generator for TypeScript declaration modules
pub struct DeclarationGenerator<'a> {
    model: &'a DocModel,
    module_name: String,
}

impl<'a> DeclarationGenerator<'a> {
    /// Create a new declaration generator for a model
    pub fn new(model: &'a DocModel) -> Self {
        Self {
            model,
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }

    /// Set the namespace the classes are declared in
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Number of classes [`generate`](Self::generate) will declare
    pub fn exported_count(&self) -> usize {
        self.model
            .classes()
            .filter(|class| is_exported_class(&class.name))
            .count()
    }

    /// Generate the complete declaration module
    pub fn generate(&self) -> String {
        let mut classes = String::new();

        for class in self.model.classes() {
            if !is_exported_class(&class.name) {
                trace!(class = %class.name, "skipping class");
                continue;
            }
            classes.push_str(&self.export_class(class));
        }

        debug!(
            module = %self.module_name,
            classes = self.exported_count(),
            "generated declaration module"
        );

        let values = TemplateValues::new()
            .set("module", self.module_name.as_str())
            .set("classes", classes);
        apply_pattern(MODULE_TEMPLATE, &values)
    }

    /// Generate the declaration block of one class
    pub fn export_class(&self, class: &ClassDoc) -> String {
        let (brief_description, description) =
            format_class_descriptions(&class.brief_description, &class.description);
        let extends = if class.has_parent() { " extends " } else { "" };

        let constants: String = class.constants.iter().map(export_constant).collect();
        let properties: String = class.properties.iter().map(export_property).collect();
        let methods: String = class.methods.iter().map(export_method).collect();

        let values = TemplateValues::new()
            .set("name", class.name.as_str())
            .set("inherits", class.inherits.as_str())
            .set("extends", extends)
            .set("brief_description", brief_description)
            .set("description", description)
            .set("constants", constants)
            .set("properties", properties)
            .set("methods", methods);
        apply_pattern(CLASS_TEMPLATE, &values)
    }
}

/// Generate a constant declaration
pub fn export_constant(constant: &ConstantDoc) -> String {
    let values = TemplateValues::new()
        .set("description", format_doc_text(&constant.description, MEMBER_DOC_INDENT))
        .set("name", constant.name.as_str())
        .set("value", constant.value.as_str());
    apply_pattern(CONSTANT_TEMPLATE, &values)
}

/// Generate a property declaration
pub fn export_property(property: &PropertyDoc) -> String {
    let values = TemplateValues::new()
        .set("description", format_doc_text(&property.description, MEMBER_DOC_INDENT))
        .set("name", property.name.as_str())
        .set("type", map_type(&property.type_name));
    apply_pattern(PROPERTY_TEMPLATE, &values)
}

/// Generate a method declaration
pub fn export_method(method: &MethodDoc) -> String {
    let values = TemplateValues::new()
        .set("description", format_doc_text(&method.description, MEMBER_DOC_INDENT))
        .set("name", method.name.as_str())
        .set("params", method_params(&method.arguments))
        .set("return_type", map_type(&method.return_type));
    apply_pattern(METHOD_TEMPLATE, &values)
}

/// Render a parameter list, without the parentheses
pub fn method_params(arguments: &[ArgumentDoc]) -> String {
    arguments
        .iter()
        .map(|arg| match arg.default_value {
            Some(ref default) => format!("{}: {} = {}", arg.name, map_type(&arg.type_name), default),
            None => format!("{}: {}", arg.name, map_type(&arg.type_name)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
