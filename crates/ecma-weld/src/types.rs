//! Host type names to TypeScript type names
//!
//! # Type Mapping Overview
//!
//! | Host Type | TypeScript Type | Notes |
//! |-----------|----------------|-------|
//! | _(empty)_ | `void` | No return value |
//! | `int`, `float` | `number` | IEEE 754 double precision |
//! | `bool` | `boolean` | Direct mapping |
//! | `String` | `string` | Host string type |
//! | anything else | unchanged | Classes and enums are nominal types |
//!
//! The mapping is total: unknown names pass through, so class names used as
//! property or argument types stay references to the declared classes.

use std::fmt;

/// Host primitive types with a TypeScript counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPrimitive {
    Int,
    Float,
    Bool,
    String,
    /// No value (empty type name)
    Void,
}

impl HostPrimitive {
    /// Convert to TypeScript type string
    pub fn to_typescript(&self) -> &'static str {
        match self {
            HostPrimitive::Int | HostPrimitive::Float => "number",
            HostPrimitive::Bool => "boolean",
            HostPrimitive::String => "string",
            HostPrimitive::Void => "void",
        }
    }

    /// Parse from a host type name
    pub fn from_host_name(s: &str) -> Option<Self> {
        match s {
            "" => Some(HostPrimitive::Void),
            "int" => Some(HostPrimitive::Int),
            "float" => Some(HostPrimitive::Float),
            "bool" => Some(HostPrimitive::Bool),
            "String" => Some(HostPrimitive::String),
            _ => None,
        }
    }
}

impl fmt::Display for HostPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_typescript())
    }
}

/// Map a host type name to its TypeScript spelling
pub fn map_type(name: &str) -> &str {
    HostPrimitive::from_host_name(name)
        .map(|primitive| primitive.to_typescript())
        .unwrap_or(name)
}
