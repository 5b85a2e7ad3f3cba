//! ECMAScript language metadata
//!
//! Identifiers the editor must not offer as names, comment and string
//! delimiters for syntax handling, and the script file extensions the
//! bridge loads.

use crate::host_path::extension;
use std::fmt;

/// Keywords and global built-ins of the scripting language
pub const RESERVED_WORDS: &[&str] = &[
    "null",
    "false",
    "true",
    "if",
    "else",
    "return",
    "var",
    "this",
    "delete",
    "void",
    "typeof",
    "new",
    "in",
    "instanceof",
    "do",
    "while",
    "for",
    "break",
    "continue",
    "switch",
    "case",
    "default",
    "throw",
    "try",
    "catch",
    "finally",
    "function",
    "debugger",
    "with",
    "class",
    "const",
    "enum",
    "export",
    "extends",
    "import",
    "super",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "await",
    "prototype",
    "constructor",
    "get",
    "set",
    "of",
    "__proto__",
    "undefined",
    "number",
    "boolean",
    "string",
    "object",
    "symbol",
    "arguments",
    "join",
    "global",
    "as",
    "from",
    "*",
    "then",
    "resolve",
    "reject",
    "promise",
    "proxy",
    "revoke",
    "async",
    "globalThis",
    "Object",
    "Array",
    "Error",
    "Number",
    "String",
    "Boolean",
    "Symbol",
    "Arguments",
    "Math",
    "JSON",
    "Date",
    "Function",
    "GeneratorFunction",
    "ForInIterator",
    "RegExp",
    "ArrayBuffer",
    "SharedArrayBuffer",
    "Uint8ClampedArray",
    "Int8Array",
    "Uint8Array",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "BigInt64Array",
    "BigUint64Array",
    "Float32Array",
    "Float64Array",
    "DataView",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "Generator",
    "Proxy",
    "Promise",
];

/// Single-line and block comment delimiters
pub const COMMENT_DELIMITERS: &[&str] = &["//", "/* */"];

/// String literal delimiters
pub const STRING_DELIMITERS: &[&str] = &["' '", "\" \"", "` `"];

/// Whether `word` is reserved
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Script file kinds, by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptExtension {
    /// `.js` ES module
    Module,
    /// `.jsx` script class
    Class,
    /// `.json` data module
    Json,
    /// `.jse` encrypted module
    ModuleEncrypted,
    /// `.jsb` module bytecode
    ModuleBytecode,
    /// `.jsxe` encrypted class
    ClassEncrypted,
    /// `.jsxb` class bytecode
    ClassBytecode,
    /// `.tsx` TypeScript source a class is compiled from
    TypedClass,
}

impl ScriptExtension {
    /// Extensions the bridge loads directly, in registration order
    pub const RECOGNIZED: [ScriptExtension; 7] = [
        ScriptExtension::Module,
        ScriptExtension::Class,
        ScriptExtension::Json,
        ScriptExtension::ModuleEncrypted,
        ScriptExtension::ModuleBytecode,
        ScriptExtension::ClassEncrypted,
        ScriptExtension::ClassBytecode,
    ];

    /// Extension without the dot
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptExtension::Module => "js",
            ScriptExtension::Class => "jsx",
            ScriptExtension::Json => "json",
            ScriptExtension::ModuleEncrypted => "jse",
            ScriptExtension::ModuleBytecode => "jsb",
            ScriptExtension::ClassEncrypted => "jsxe",
            ScriptExtension::ClassBytecode => "jsxb",
            ScriptExtension::TypedClass => "tsx",
        }
    }

    /// Parse an extension without the dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" => Some(ScriptExtension::Module),
            "jsx" => Some(ScriptExtension::Class),
            "json" => Some(ScriptExtension::Json),
            "jse" => Some(ScriptExtension::ModuleEncrypted),
            "jsb" => Some(ScriptExtension::ModuleBytecode),
            "jsxe" => Some(ScriptExtension::ClassEncrypted),
            "jsxb" => Some(ScriptExtension::ClassBytecode),
            "tsx" => Some(ScriptExtension::TypedClass),
            _ => None,
        }
    }

    /// Kind of the file at `path`
    pub fn from_path(path: &str) -> Option<Self> {
        Self::from_extension(extension(path))
    }

    /// Whether files of this kind define a script class
    pub fn is_class(&self) -> bool {
        matches!(
            self,
            ScriptExtension::Class
                | ScriptExtension::ClassEncrypted
                | ScriptExtension::ClassBytecode
                | ScriptExtension::TypedClass
        )
    }

    /// Whether the bridge loads files of this kind directly
    pub fn is_recognized(&self) -> bool {
        Self::RECOGNIZED.contains(self)
    }
}

impl fmt::Display for ScriptExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extensions the bridge loads, without dots
pub fn recognized_extensions() -> Vec<&'static str> {
    ScriptExtension::RECOGNIZED.iter().map(ScriptExtension::as_str).collect()
}
