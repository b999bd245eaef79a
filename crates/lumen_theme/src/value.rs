//! Theme tree values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix marking a text leaf as an alias to another theme path.
pub const ALIAS_PREFIX: char = '@';

/// A table of named theme values
pub type ThemeTable = IndexMap<String, ThemeValue>;

/// A node of the theme tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Table(ThemeTable),
}

impl ThemeValue {
    /// The path this value points at, if it is an alias
    pub fn alias_target(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(s) => s.strip_prefix(ALIAS_PREFIX),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(s) if self.alias_target().is_none() => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ThemeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&ThemeTable> {
        match self {
            ThemeValue::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Short shape name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ThemeValue::Bool(_) => "bool",
            ThemeValue::Number(_) => "number",
            ThemeValue::Text(_) if self.alias_target().is_some() => "alias",
            ThemeValue::Text(_) => "text",
            ThemeValue::Table(_) => "table",
        }
    }
}

impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        ThemeValue::Number(value)
    }
}

impl From<f32> for ThemeValue {
    fn from(value: f32) -> Self {
        ThemeValue::Number(value as f64)
    }
}

impl From<i32> for ThemeValue {
    fn from(value: i32) -> Self {
        ThemeValue::Number(value as f64)
    }
}

impl From<bool> for ThemeValue {
    fn from(value: bool) -> Self {
        ThemeValue::Bool(value)
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Text(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::Text(value)
    }
}

impl From<ThemeTable> for ThemeValue {
    fn from(value: ThemeTable) -> Self {
        ThemeValue::Table(value)
    }
}
