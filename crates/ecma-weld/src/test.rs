//! Test utilities and mock documentation for ecma-weld.
//!
//! Fixtures shaped like the host's class reference, for tests in this crate
//! and in downstream crates.
//!
//! # Example
//!
//! ```
//! use ecma_weld::test::{mock_model, mock_sprite_class};
//!
//! let sprite = mock_sprite_class();
//! assert_eq!(sprite.inherits, "Node2D");
//! assert!(mock_model().get("Sprite").is_some());
//! ```

use crate::ir::{ArgumentDoc, ClassDoc, ConstantDoc, DocModel, MethodDoc, PropertyDoc};

/// A class with no members and no parent.
pub fn mock_class(name: &str) -> ClassDoc {
    ClassDoc::new(name)
}

/// `Sprite extends Node2D` with one property and one method taking an
/// optional string argument.
pub fn mock_sprite_class() -> ClassDoc {
    ClassDoc::new("Sprite")
        .inherits("Node2D")
        .with_brief("General-purpose sprite node.")
        .with_doc("A node that displays a 2D texture.\nThe texture can be a region of a larger atlas.")
        .property(PropertyDoc::new("texture", "Texture").with_doc("[Texture] object to draw."))
        .method(
            MethodDoc::new("play")
                .argument(ArgumentDoc::new("name", "String").with_default("\"default\""))
                .with_doc("Plays the animation named [code]name[/code]."),
        )
}

/// `Node extends Object` with constants, a property and methods covering
/// required, optional and return-typed signatures.
pub fn mock_node_class() -> ClassDoc {
    ClassDoc::new("Node")
        .inherits("Object")
        .with_brief("Base class for all scene objects.")
        .with_doc("Base class for all scene objects.")
        .constant(ConstantDoc::new("NOTIFICATION_ENTER_TREE", "10").with_doc("Entered the tree."))
        .constant(ConstantDoc::new("NOTIFICATION_EXIT_TREE", "11"))
        .property(PropertyDoc::new("name", "String"))
        .method(
            MethodDoc::new("add_child")
                .argument(ArgumentDoc::new("node", "Node"))
                .argument(ArgumentDoc::new("legible_unique_name", "bool").with_default("false")),
        )
        .method(
            MethodDoc::new("get_child_count")
                .returns("int")
                .with_doc("Returns the number of child nodes.\n[codeblock]\nvar n = get_child_count()\n[/codeblock]"),
        )
}

/// A model with the sample classes plus entries that are never declared.
pub fn mock_model() -> DocModel {
    DocModel::new()
        .class(mock_class("@GlobalScope"))
        .class(mock_class("Object"))
        .class(mock_node_class())
        .class(mock_class("int"))
        .class(mock_class("Nil"))
        .class(mock_sprite_class())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_model_contents() {
        let model = mock_model();
        assert_eq!(model.len(), 6);
        assert_eq!(model.exported_class_names(), vec!["Node", "Object", "Sprite"]);
    }
}
