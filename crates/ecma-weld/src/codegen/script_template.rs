//! Default source for newly created script classes

use super::declaration::DEFAULT_MODULE_NAME;

const CLASS_MARKER: &str = "%CLASS%";
const BASE_MARKER: &str = "%BASE%";

/// Skeleton of a new script class. `%CLASS%` and `%BASE%` are filled in
/// with the class and base class names.
const SCRIPT_CLASS_TEMPLATE: &str = concat!(
    "export default class %CLASS% extends %MODULE%.%BASE% {\n",
    "    \n",
    "    // Declare member variables here. Examples:\n",
    "    a = 2;\n",
    "    b = \"text\";\n",
    "    \n",
    "    constructor() {\n",
    "        super();\n",
    "    }\n",
    "    \n",
    "    // Called when the node enters the scene tree for the first time.\n",
    "    _ready() {\n",
    "        \n",
    "    }\n",
    "    \n",
    "    // Called every frame. 'delta' is the elapsed time since the previous frame.\n",
    "    _process(delta) {\n",
    "        \n",
    "    }\n",
    "}\n",
);

/// Source of a new script class extending a host class
pub fn script_template(class_name: &str, base_class_name: &str) -> String {
    let source = SCRIPT_CLASS_TEMPLATE.replace("%MODULE%", DEFAULT_MODULE_NAME);
    make_template(&source, class_name, base_class_name)
}

/// Fill the class and base class markers of an existing template source
pub fn make_template(source: &str, class_name: &str, base_class_name: &str) -> String {
    source
        .replace(BASE_MARKER, base_class_name)
        .replace(CLASS_MARKER, class_name)
}
