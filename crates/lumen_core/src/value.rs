//! Concrete style values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat mapping of visual property name to concrete value for one region.
pub type StyleRecord = IndexMap<String, StyleValue>;

/// A concrete style property value.
///
/// `Null` is meaningful: resolvers write it to clear a property so that a
/// value from an earlier resolution cannot survive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    #[default]
    Null,
    Bool(bool),
    Number(f32),
    Text(String),
}

impl StyleValue {
    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(StyleValue::Null)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Null => f.write_str("null"),
            StyleValue::Bool(b) => write!(f, "{b}"),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

/// Build a [`StyleRecord`] from `(property, value)` pairs.
pub fn record<K, I>(entries: I) -> StyleRecord
where
    K: Into<String>,
    I: IntoIterator<Item = (K, StyleValue)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_converts_to_null() {
        assert_eq!(StyleValue::from(None::<f32>), StyleValue::Null);
        assert_eq!(StyleValue::from(Some(4.0_f32)), StyleValue::Number(4.0));
    }

    #[test]
    fn serializes_untagged() {
        let rec = record([
            ("marginTop", StyleValue::from(5.0)),
            ("marginLeft", StyleValue::Null),
            ("color", StyleValue::from("#fff")),
        ]);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r##"{"marginTop":5.0,"marginLeft":null,"color":"#fff"}"##);

        let back: StyleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
