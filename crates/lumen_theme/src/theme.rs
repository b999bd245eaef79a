//! Theme tree and alias resolution
//!
//! A [`Theme`] is immutable once built. Lookups walk dotted paths segment by
//! segment; whenever a segment lands on an alias the walk restarts at the
//! alias target, sharing one hop counter across the whole lookup. A lookup
//! that needs more than `max_alias_hops` hops fails with
//! [`ThemeError::AliasChainTooLong`] instead of looping.

use crate::error::{Result, ThemeError};
use crate::value::{ThemeTable, ThemeValue};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Alias hops allowed in a single lookup before it is treated as a cycle
pub const DEFAULT_MAX_ALIAS_HOPS: usize = 8;

/// On-disk layout: a `name` key next to the top-level sections
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    #[serde(flatten)]
    tree: ThemeTable,
}

/// Nested, alias-resolvable style dictionary
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    tree: ThemeTable,
    max_alias_hops: usize,
}

impl Theme {
    /// Create a theme from a prebuilt tree
    pub fn new(name: impl Into<String>, tree: ThemeTable) -> Self {
        Self {
            name: name.into(),
            tree,
            max_alias_hops: DEFAULT_MAX_ALIAS_HOPS,
        }
    }

    /// Parse a TOML theme and validate every alias in it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_toml_str_with(source, DEFAULT_MAX_ALIAS_HOPS)
    }

    /// Parse a TOML theme, validating its aliases against `max_alias_hops`
    pub fn from_toml_str_with(source: &str, max_alias_hops: usize) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source)?;
        let theme = Theme::new(file.name, file.tree).with_max_alias_hops(max_alias_hops);
        theme.validate()?;
        Ok(theme)
    }

    /// Load and validate a TOML theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, DEFAULT_MAX_ALIAS_HOPS)
    }

    /// Load a TOML theme file with a custom alias hop bound
    pub fn load_with(path: impl AsRef<Path>, max_alias_hops: usize) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let theme = Self::from_toml_str_with(&source, max_alias_hops)?;
        tracing::debug!(
            path = %path.display(),
            name = %theme.name,
            max_alias_hops,
            "loaded theme"
        );
        Ok(theme)
    }

    /// Serialize to a TOML document
    pub fn to_toml(&self) -> Result<String> {
        let file = ThemeFile {
            name: self.name.clone(),
            tree: self.tree.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Override the alias hop bound
    pub fn with_max_alias_hops(mut self, max_alias_hops: usize) -> Self {
        self.max_alias_hops = max_alias_hops;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_alias_hops(&self) -> usize {
        self.max_alias_hops
    }

    /// Top-level sections
    pub fn tree(&self) -> &ThemeTable {
        &self.tree
    }

    // ========== Lookup ==========

    /// Resolve a dotted path, following aliases along the way
    pub fn lookup(&self, path: &str) -> Result<&ThemeValue> {
        let mut hops = 0;
        self.walk(path, &mut hops)
    }

    /// Like [`Theme::lookup`] but discards the error
    pub fn get(&self, path: &str) -> Option<&ThemeValue> {
        self.lookup(path).ok()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Resolve a path that must hold a number
    pub fn number(&self, path: &str) -> Result<f64> {
        self.lookup(path)?
            .as_number()
            .ok_or_else(|| ThemeError::TypeMismatch {
                path: path.to_string(),
                expected: "number",
            })
    }

    /// Resolve a path that must hold plain text
    pub fn text(&self, path: &str) -> Result<&str> {
        self.lookup(path)?
            .as_text()
            .ok_or_else(|| ThemeError::TypeMismatch {
                path: path.to_string(),
                expected: "text",
            })
    }

    /// Resolve a path that must hold a table
    pub fn table(&self, path: &str) -> Result<&ThemeTable> {
        self.lookup(path)?
            .as_table()
            .ok_or_else(|| ThemeError::TypeMismatch {
                path: path.to_string(),
                expected: "table",
            })
    }

    fn walk<'a>(&'a self, path: &str, hops: &mut usize) -> Result<&'a ThemeValue> {
        let mut node: Option<&ThemeValue> = None;
        for segment in path.split('.') {
            let table = match node {
                None => &self.tree,
                Some(ThemeValue::Table(table)) => table,
                Some(_) => {
                    return Err(ThemeError::NotATable {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
            };
            let next = table
                .get(segment)
                .ok_or_else(|| ThemeError::MissingPath(path.to_string()))?;
            node = Some(self.follow(next, path, hops)?);
        }
        node.ok_or_else(|| ThemeError::MissingPath(path.to_string()))
    }

    /// Follow `value` if it is an alias, otherwise return it unchanged
    pub fn resolve_value<'a>(
        &'a self,
        value: &'a ThemeValue,
        origin: &str,
    ) -> Result<&'a ThemeValue> {
        let mut hops = 0;
        self.follow(value, origin, &mut hops)
    }

    fn follow<'a>(
        &'a self,
        value: &'a ThemeValue,
        origin: &str,
        hops: &mut usize,
    ) -> Result<&'a ThemeValue> {
        let Some(target) = value.alias_target() else {
            return Ok(value);
        };
        *hops += 1;
        if *hops > self.max_alias_hops {
            return Err(ThemeError::AliasChainTooLong {
                path: origin.to_string(),
                max_hops: self.max_alias_hops,
            });
        }
        tracing::trace!(origin, target, hops = *hops, "following theme alias");
        self.walk(target, hops)
    }

    // ========== Validation ==========

    /// Every broken or cyclic alias in the tree
    pub fn problems(&self) -> Vec<ThemeError> {
        let mut aliases = Vec::new();
        collect_aliases(&self.tree, String::new(), &mut aliases);
        aliases
            .into_iter()
            .filter_map(|path| self.lookup(&path).err())
            .collect()
    }

    /// Fail if any alias cannot be resolved within the hop bound
    pub fn validate(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ThemeError::Validation(problems))
        }
    }
}

fn collect_aliases(table: &ThemeTable, prefix: String, out: &mut Vec<String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            ThemeValue::Table(inner) => collect_aliases(inner, path, out),
            _ if value.alias_target().is_some() => out.push(path),
            _ => {}
        }
    }
}

/// Programmatic theme construction with dotted paths
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    name: String,
    tree: ThemeTable,
    max_alias_hops: Option<usize>,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Start from an existing theme, e.g. to derive a variant
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            name: theme.name.clone(),
            tree: theme.tree.clone(),
            max_alias_hops: Some(theme.max_alias_hops),
        }
    }

    /// Set a value at a dotted path, creating intermediate tables.
    ///
    /// An intermediate leaf in the way is replaced by a table.
    pub fn set(mut self, path: &str, value: impl Into<ThemeValue>) -> Self {
        insert_path(&mut self.tree, path, value.into());
        self
    }

    /// Point `path` at `target`
    pub fn alias(self, path: &str, target: &str) -> Self {
        self.set(path, format!("@{target}"))
    }

    /// Set the light and dark variant of a color entry in one call
    pub fn shaded(self, path: &str, light: &str, dark: &str) -> Self {
        self.set(&format!("{path}.light"), light)
            .set(&format!("{path}.dark"), dark)
    }

    /// Set the small/normal/large variants of a sized entry
    pub fn sized(self, path: &str, small: f64, normal: f64, large: f64) -> Self {
        self.set(&format!("{path}.small"), small)
            .set(&format!("{path}.normal"), normal)
            .set(&format!("{path}.large"), large)
    }

    pub fn max_alias_hops(mut self, hops: usize) -> Self {
        self.max_alias_hops = Some(hops);
        self
    }

    pub fn build(self) -> Theme {
        let theme = Theme::new(self.name, self.tree);
        match self.max_alias_hops {
            Some(hops) => theme.with_max_alias_hops(hops),
            None => theme,
        }
    }
}

fn insert_path(tree: &mut ThemeTable, path: &str, value: ThemeValue) {
    match path.split_once('.') {
        None => {
            tree.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = tree
                .entry(head.to_string())
                .or_insert_with(|| ThemeValue::Table(ThemeTable::new()));
            if !matches!(entry, ThemeValue::Table(_)) {
                *entry = ThemeValue::Table(ThemeTable::new());
            }
            if let ThemeValue::Table(inner) = entry {
                insert_path(inner, rest, value);
            }
        }
    }
}
