//! `${name}` placeholder substitution
//!
//! Templates are filled in several passes: member templates are rendered
//! first and their text becomes a value of the enclosing class template.
//! Placeholders without a value are therefore left in place untouched, and
//! substituted values are copied as literal text, never scanned again.

use std::collections::HashMap;

/// Placeholder name to substitution text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    values: HashMap<String, String>,
}

impl TemplateValues {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous value for the key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = TemplateValues::new();
        values.extend(iter);
        values
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TemplateValues {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Replace every `${key}` in `template` whose key has a value
///
/// Unknown placeholders and unterminated `${` are copied verbatim, and a
/// known placeholder nested inside them is still replaced.
pub fn apply_pattern(template: &str, values: &TemplateValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        if let Some(end) = after_open.find('}') {
            if let Some(value) = values.get(&after_open[..end]) {
                out.push_str(value);
                rest = &after_open[end + 1..];
                continue;
            }
        }

        // not a known placeholder; keep the `$` and rescan after it
        out.push('$');
        rest = &rest[start + 1..];
    }

    out.push_str(rest);
    out
}
