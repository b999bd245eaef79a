//! Theme error types

use thiserror::Error;

/// Theme lookup, validation and loading errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// No value exists at the path
    #[error("theme path not found: {0}")]
    MissingPath(String),

    /// A path segment walked into a leaf instead of a table
    #[error("theme path {path}: segment `{segment}` is not a table")]
    NotATable { path: String, segment: String },

    /// Alias chain exceeded the hop bound (usually a cycle)
    #[error("theme path {path}: alias chain longer than {max_hops} hops")]
    AliasChainTooLong { path: String, max_hops: usize },

    /// The value exists but has the wrong shape
    #[error("theme path {path}: expected {expected}")]
    TypeMismatch { path: String, expected: &'static str },

    /// One or more aliases in the theme are broken
    #[error(
        "theme has {} invalid alias(es); first: {}",
        .0.len(),
        .0.first().map(ToString::to_string).unwrap_or_default()
    )]
    Validation(Vec<ThemeError>),

    /// Failed to parse a TOML theme
    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize a theme
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Failed to read a theme file
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
